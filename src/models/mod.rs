//! Models are the data types the converter operates on. They are plain data:
//! anything that changes a model lives in [transactions][0].
//!
//! [0]: ../transactions/index.html

#[macro_use]
pub(crate) mod lib;

pub mod currency;
pub mod conversion;
pub mod form;
