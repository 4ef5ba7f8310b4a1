//! Form transactions cover the edits the user makes to the converter and the
//! conversion lifecycle itself.
//!
//! A conversion moves the form through a small state machine:
//!
//! - **Idle**: the starting (and resting) state.
//! - **Pending**: entered by `trigger()` for cross-currency conversions only,
//!   left again by `complete()` (success or failure), `reset()`, or a newer
//!   `trigger()`.
//!
//! Amounts that fail validation and same-currency conversions never leave Idle.

use chrono::{DateTime, Utc};
use crate::{
    error::{Error, Result},
    models::{
        conversion::{ConversionRecord, ConversionRecordID},
        currency::CurrencyCode,
        form::{FormState, PendingConversion},
    },
    system::{converter, rates::RateTable},
    transactions::{Effect, Transition},
    util,
};
use rust_decimal::Decimal;

/// Store the raw amount text. No validation happens until a conversion is
/// triggered.
pub fn set_amount_text<T: Into<String>>(mut subject: FormState, text: T) -> Transition {
    subject.set_amount_text(text.into());
    Transition::unchanged(subject)
}

/// Select the currency to convert from. The last result and error stay put.
pub fn set_source(mut subject: FormState, source: CurrencyCode) -> Transition {
    subject.set_source(source);
    Transition::unchanged(subject)
}

/// Select the currency to convert into. The last result and error stay put.
pub fn set_target(mut subject: FormState, target: CurrencyCode) -> Transition {
    subject.set_target(target);
    Transition::unchanged(subject)
}

/// Exchange the source and target currencies.
///
/// The result is cleared since it no longer matches the selection. The error
/// banner is left alone.
pub fn swap(mut subject: FormState) -> Transition {
    let source = subject.source().clone();
    let target = subject.target().clone();
    subject.set_source(target);
    subject.set_target(source);
    subject.set_result(None);
    Transition::unchanged(subject)
}

/// Put the form back the way it started: empty amount, USD to EUR, no result,
/// no error, an empty history, and nothing pending.
pub fn reset(mut subject: FormState) -> Transition {
    subject.reset();
    Transition::unchanged(subject)
}

/// Start a conversion.
///
/// Any conversion already in flight is superseded. If the amount doesn't
/// validate the error banner is set and the form stays Idle. Same-currency
/// conversions settle right away (and skip the history). Everything else goes
/// Pending and returns `Effect::Schedule` so the caller can complete it after
/// the round trip.
pub fn trigger(mut subject: FormState, rates: &RateTable) -> Transition {
    subject.set_error(None);
    subject.set_pending(None);
    let source = subject.source().clone();
    let target = subject.target().clone();
    let amount = match converter::parse_amount(subject.amount_text()) {
        Ok(amount) => amount,
        Err(err) => {
            subject.set_error(Some(err.banner()));
            return Transition::new(subject, Effect::Rejected(err));
        }
    };
    if source == target {
        match converter::convert_amount(amount, source, target, rates) {
            Ok(output) => {
                subject.set_result(Some(output));
                Transition::new(subject, Effect::Settled(output))
            }
            Err(err) => {
                subject.set_error(Some(err.banner()));
                Transition::new(subject, Effect::Rejected(err))
            }
        }
    } else {
        let ticket = subject.next_ticket();
        let pending = PendingConversion::new(ticket, subject.amount_text().clone(), source, target);
        subject.set_pending(Some(pending.clone()));
        Transition::new(subject, Effect::Schedule(pending))
    }
}

/// Finish a pending conversion once its round trip is over.
///
/// If `pending` isn't the conversion the form is waiting on (it was
/// superseded, or the form was reset) nothing changes and the effect is
/// `Effect::Stale`. Otherwise the conversion runs against the values captured
/// when it was triggered: success records the result and prepends a history
/// record (keeping at most `history_capacity` records), failure sets the error
/// banner and leaves the previous result alone. Either way the form goes back
/// to Idle.
pub fn complete(mut subject: FormState, rates: &RateTable, pending: &PendingConversion, history_capacity: usize, now: &DateTime<Utc>) -> Transition {
    if subject.pending_ticket() != Some(pending.ticket().clone()) {
        return Transition::new(subject, Effect::Stale(pending.ticket().clone()));
    }
    subject.set_pending(None);
    match record_conversion(rates, pending, now) {
        Ok((output, record)) => {
            subject.set_result(Some(output));
            subject.push_history(record, history_capacity);
            Transition::new(subject, Effect::Settled(output))
        }
        Err(err) => {
            subject.set_error(Some(err.banner()));
            Transition::new(subject, Effect::Rejected(err))
        }
    }
}

fn record_conversion(rates: &RateTable, pending: &PendingConversion, now: &DateTime<Utc>) -> Result<(Decimal, ConversionRecord)> {
    let source = pending.source().clone();
    let target = pending.target().clone();
    let input = converter::parse_amount(pending.amount_text())?;
    let output = converter::convert_amount(input, source, target, rates)?;
    let rate = rates.lookup(source, target)?;
    let record = ConversionRecord::builder()
        .id(ConversionRecordID::create())
        .source(source)
        .target(target)
        .input_amount(input)
        .output_amount(output)
        .rate(rate)
        .timestamp_display(util::time::display_time(now))
        .created(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok((output, record))
}
