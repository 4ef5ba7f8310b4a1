#[macro_use]
pub mod converter_model;
