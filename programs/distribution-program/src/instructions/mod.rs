pub mod initialize_treasury;
pub use initialize_treasury::*;

pub mod deposit;
pub use deposit::*;

pub mod distribute;
pub use distribute::*;
