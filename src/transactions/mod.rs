//! Transactions are the only way the converter's [FormState] changes. Each one
//! takes the current state (by value) plus whatever it needs, and returns a
//! [Transition]: the new state and an [Effect] describing what the caller has
//! to do next, if anything.
//!
//! Transactions never sleep, spawn, or touch a clock. When a conversion has to
//! wait out its round trip the transaction says so with `Effect::Schedule` and
//! it's up to the caller (generally the [controller]) to come back later with
//! `Action::Complete`. This keeps every state change testable without a
//! runtime.
//!
//! [FormState]: ../models/form/struct.FormState.html
//! [Transition]: struct.Transition.html
//! [Effect]: enum.Effect.html
//! [controller]: ../controller/index.html

use chrono::{DateTime, Utc};
use crate::{
    config::ConverterConfig,
    error::Error,
    models::{
        currency::CurrencyCode,
        form::{FormState, PendingConversion, PendingTicket},
    },
    system::rates::RateTable,
};
use getset::Getters;
use rust_decimal::Decimal;

pub mod form;

/// What the caller should do after applying a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Nothing beyond storing the new state.
    None,
    /// A conversion finished with this amount (in the target currency).
    Settled(Decimal),
    /// A conversion is pending and must be completed after the round trip.
    Schedule(PendingConversion),
    /// The conversion was refused. The error banner has already been set.
    Rejected(Error),
    /// A completion showed up for a conversion that is no longer pending. The
    /// state was left alone.
    Stale(PendingTicket),
}

/// The result of running a transaction.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Transition {
    state: FormState,
    effect: Effect,
}

impl Transition {
    pub(crate) fn new(state: FormState, effect: Effect) -> Self {
        Self { state, effect }
    }

    pub(crate) fn unchanged(state: FormState) -> Self {
        Self::new(state, Effect::None)
    }

    /// Take the state, dropping the effect.
    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn into_parts(self) -> (FormState, Effect) {
        (self.state, self.effect)
    }
}

/// Everything the user (or the round trip) can do to the form.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetAmountText(String),
    SetSource(CurrencyCode),
    SetTarget(CurrencyCode),
    Swap,
    Reset,
    Trigger,
    Complete(PendingConversion),
}

/// Apply an action to the form.
///
/// `now` is only used to timestamp history records when a conversion
/// completes.
pub fn reduce(state: FormState, action: Action, rates: &RateTable, config: &ConverterConfig, now: &DateTime<Utc>) -> Transition {
    match action {
        Action::SetAmountText(text) => form::set_amount_text(state, text),
        Action::SetSource(source) => form::set_source(state, source),
        Action::SetTarget(target) => form::set_target(state, target),
        Action::Swap => form::swap(state),
        Action::Reset => form::reset(state),
        Action::Trigger => form::trigger(state, rates),
        Action::Complete(pending) => form::complete(state, rates, &pending, *config.history_capacity(), now),
    }
}
