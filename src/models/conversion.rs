//! A conversion record is the history log's unit: one completed cross-currency
//! conversion. Records are never modified after creation; the history simply
//! drops the oldest ones.

use crate::models::currency::CurrencyCode;
use rust_decimal::Decimal;

converter_model! {
    /// An immutable entry in the recent conversions list.
    pub struct ConversionRecord {
        source: CurrencyCode,
        target: CurrencyCode,
        /// The amount the user entered, in the source currency.
        input_amount: Decimal,
        /// The converted amount, in the target currency.
        output_amount: Decimal,
        /// The rate that was applied.
        rate: Decimal,
        /// Local wall-clock time of the conversion, ready for display.
        timestamp_display: String,
    }
    ConversionRecordID
    ConversionRecordBuilder
}
