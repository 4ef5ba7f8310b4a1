//! A set of utilities for working with amounts and rates.

/// Create a number.
///
/// This is a thin wrapper around `rust_decimal_macros::dec!` so the rate table
/// and tests can write literal amounts and rates without caring which decimal
/// type backs them. Callers of the crate can use it the same way.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
