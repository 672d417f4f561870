pub mod treasury;
pub use treasury::*;

pub mod treasury_account;
pub use treasury_account::*;
