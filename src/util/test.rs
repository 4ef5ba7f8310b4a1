use crate::{
    models::{
        conversion::{ConversionRecord, ConversionRecordID},
        currency::CurrencyCode,
        form::{FormState, PendingConversion, PendingTicket},
    },
    util,
};
use rust_decimal::prelude::*;

/// A form with the given amount text and selection, otherwise at defaults.
pub(crate) fn make_form<T: Into<String>>(amount_text: T, source: CurrencyCode, target: CurrencyCode) -> FormState {
    let mut state = FormState::default();
    state.set_amount_text(amount_text.into());
    state.set_source(source);
    state.set_target(target);
    state
}

/// Force a result and an error banner onto a form, handy for checking what a
/// transaction clears.
pub(crate) fn with_result_and_error<T: Into<String>>(mut state: FormState, result: Decimal, error: T) -> FormState {
    state.set_result(Some(result));
    state.set_error(Some(error.into()));
    state
}

pub(crate) fn make_pending<T: Into<String>>(ticket: PendingTicket, amount_text: T, source: CurrencyCode, target: CurrencyCode) -> PendingConversion {
    PendingConversion::new(ticket, amount_text.into(), source, target)
}

/// A history record converting `input` at a rate of 2.
pub(crate) fn make_record(source: CurrencyCode, target: CurrencyCode, input: i64) -> ConversionRecord {
    let now = util::time::now();
    let input = Decimal::from(input);
    ConversionRecord::builder()
        .id(ConversionRecordID::create())
        .source(source)
        .target(target)
        .input_amount(input)
        .output_amount(input * num!(2))
        .rate(num!(2))
        .timestamp_display("12:00:00 PM")
        .created(now)
        .build().unwrap()
}
