//! Compile-time helpers shared by the on-chain programs in this workspace.

/// Fails the build unless exactly one of the listed cargo features is enabled.
///
/// Programs select their `declare_id!` through network features; enabling
/// none or several of them would silently produce a program with the wrong id.
///
/// ```ignore
/// program_utils::ensure_single_feature!("localnet", "devnet", "testnet", "mainnet");
/// ```
#[macro_export]
macro_rules! ensure_single_feature {
    ($($feature:literal),+ $(,)?) => {
        const _: () = {
            let enabled = 0usize $(+ (cfg!(feature = $feature) as usize))+;
            assert!(
                enabled == 1,
                concat!(
                    "exactly one of the following features must be enabled:",
                    $(" ", $feature),+
                )
            );
        };
    };
}
