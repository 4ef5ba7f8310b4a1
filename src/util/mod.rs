//! A set of utility structs and functions used by the converter.

#[macro_use]
pub mod number;
pub(crate) mod time;

#[cfg(test)]
#[macro_use]
pub(crate) mod test;
