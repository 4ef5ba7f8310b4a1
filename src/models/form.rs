//! The form module holds the converter widget's entire state: what the user has
//! typed and selected, the outcome of the last conversion, whether a conversion
//! is in flight, and the recent conversions list.
//!
//! `FormState` is only ever changed through the functions in
//! [transactions][0]. Everything here is read-only from the outside.
//!
//! [0]: ../../transactions/index.html

use crate::models::{
    conversion::ConversionRecord,
    currency::CurrencyCode,
};
use getset::Getters;
use rust_decimal::Decimal;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};

/// Identifies one scheduled conversion. Tickets only ever increase, so a
/// completion holding an old ticket can be recognized as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct PendingTicket(u64);

impl PendingTicket {
    pub fn value(&self) -> u64 {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(value: u64) -> Self {
        Self(value)
    }
}

/// A cross-currency conversion waiting on its (simulated) network round trip.
///
/// The amount and currencies are captured when the conversion is triggered, so
/// edits made while waiting don't leak into the result.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct PendingConversion {
    ticket: PendingTicket,
    amount_text: String,
    source: CurrencyCode,
    target: CurrencyCode,
}

impl PendingConversion {
    pub(crate) fn new(ticket: PendingTicket, amount_text: String, source: CurrencyCode, target: CurrencyCode) -> Self {
        Self { ticket, amount_text, source, target }
    }
}

/// The widget's state.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct FormState {
    /// Raw contents of the amount input. May be empty or garbage.
    #[getset(get = "pub")]
    amount_text: String,
    #[getset(get = "pub")]
    source: CurrencyCode,
    #[getset(get = "pub")]
    target: CurrencyCode,
    /// Result of the last successful conversion, in the target currency.
    #[getset(get = "pub")]
    result: Option<Decimal>,
    /// Text of the error banner, if one is showing.
    #[getset(get = "pub")]
    error: Option<String>,
    #[getset(get = "pub")]
    pending: Option<PendingConversion>,
    /// Recent conversions, newest first.
    #[getset(get = "pub")]
    history: Vec<ConversionRecord>,
    sequence: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            amount_text: String::new(),
            source: CurrencyCode::USD,
            target: CurrencyCode::EUR,
            result: None,
            error: None,
            pending: None,
            history: Vec::new(),
            sequence: 0,
        }
    }
}

impl FormState {
    /// Whether a conversion is in flight (the Pending state).
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The ticket of the in-flight conversion, if any.
    pub fn pending_ticket(&self) -> Option<PendingTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    pub(crate) fn set_amount_text(&mut self, text: String) {
        self.amount_text = text;
    }

    pub(crate) fn set_source(&mut self, source: CurrencyCode) {
        self.source = source;
    }

    pub(crate) fn set_target(&mut self, target: CurrencyCode) {
        self.target = target;
    }

    pub(crate) fn set_result(&mut self, result: Option<Decimal>) {
        self.result = result;
    }

    pub(crate) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub(crate) fn set_pending(&mut self, pending: Option<PendingConversion>) {
        self.pending = pending;
    }

    /// Hand out the next ticket.
    pub(crate) fn next_ticket(&mut self) -> PendingTicket {
        self.sequence += 1;
        PendingTicket(self.sequence)
    }

    /// Put a record at the front of the history, dropping the oldest records
    /// beyond `capacity`.
    pub(crate) fn push_history(&mut self, record: ConversionRecord, capacity: usize) {
        self.history.insert(0, record);
        self.history.truncate(capacity);
    }

    /// Back to defaults. The ticket sequence survives so tickets handed out
    /// before the reset never match one handed out after it.
    pub(crate) fn reset(&mut self) {
        let sequence = self.sequence;
        *self = Self::default();
        self.sequence = sequence;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    #[test]
    fn defaults() {
        let state = FormState::default();
        assert_eq!(state.amount_text(), "");
        assert_eq!(state.source(), &CurrencyCode::USD);
        assert_eq!(state.target(), &CurrencyCode::EUR);
        assert_eq!(state.result(), &None);
        assert_eq!(state.error(), &None);
        assert!(!state.is_pending());
        assert_eq!(state.pending_ticket(), None);
        assert!(state.history().is_empty());
    }

    #[test]
    fn history_is_bounded_newest_first() {
        let mut state = FormState::default();
        for i in 1..=7 {
            state.push_history(make_record(CurrencyCode::USD, CurrencyCode::EUR, i), 5);
        }
        let inputs = state.history().iter().map(|r| r.input_amount().clone()).collect::<Vec<_>>();
        assert_eq!(inputs, vec![num!(7), num!(6), num!(5), num!(4), num!(3)]);
    }

    #[test]
    fn tickets_survive_reset() {
        let mut state = FormState::default();
        let ticket1 = state.next_ticket();
        let ticket2 = state.next_ticket();
        assert!(ticket2 > ticket1);
        state.set_amount_text("12".into());
        state.reset();
        assert_eq!(state, FormState { sequence: 2, ..FormState::default() });
        let ticket3 = state.next_ticket();
        assert!(ticket3 > ticket2);
    }
}
