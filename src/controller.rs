//! The controller owns a converter widget's [FormState] for as long as the
//! widget lives, runs every edit through the [transactions], and drives the
//! simulated network round trip of cross-currency conversions.
//!
//! The round trip is a tokio task that sleeps for the configured delay and then
//! completes the conversion. There is at most one such task at a time: starting
//! another conversion, resetting the form, or dropping the `Converter` aborts
//! it. Completions also carry the ticket of the conversion they belong to, so
//! one that slips past an abort can't write into newer state.
//!
//! The state lives in a `tokio::sync::watch` channel; anything rendering the
//! widget can `subscribe()` and redraw whenever it changes.
//!
//! A `Converter` must be used from within a tokio runtime.
//!
//! [FormState]: ../models/form/struct.FormState.html
//! [transactions]: ../transactions/index.html

use crate::{
    config::ConverterConfig,
    error::{Error, Result},
    models::{
        currency::CurrencyCode,
        form::{FormState, PendingConversion, PendingTicket},
    },
    system::rates::RateTable,
    transactions::{self, Action, Effect},
    util,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

/// How a triggered conversion turned out, as far as it's known right away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Same-currency conversion, done immediately.
    Settled(Decimal),
    /// Cross-currency conversion, waiting on its round trip.
    Pending(PendingTicket),
}

/// The round trip task for the conversion currently pending.
#[derive(Debug)]
struct InFlight {
    ticket: PendingTicket,
    handle: JoinHandle<()>,
}

/// A live converter widget.
#[derive(Debug)]
pub struct Converter {
    config: ConverterConfig,
    rates: Arc<RateTable>,
    state: Arc<watch::Sender<FormState>>,
    in_flight: Option<InFlight>,
}

impl Converter {
    /// Create a converter over the given rates. The table has to cover every
    /// pair of supported currencies.
    pub fn new(config: ConverterConfig, rates: RateTable) -> Result<Self> {
        rates.validate()?;
        Ok(Self::assemble(config, rates))
    }

    /// A converter with the default config and the standard rate table.
    pub fn standard() -> Self {
        Self::assemble(ConverterConfig::default(), RateTable::standard())
    }

    fn assemble(config: ConverterConfig, rates: RateTable) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            config,
            rates: Arc::new(rates),
            state: Arc::new(state),
            in_flight: None,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Watch the state. The receiver sees every change, including the ones
    /// made when a pending conversion completes.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// The convert control is disabled while a conversion is pending.
    pub fn is_convert_enabled(&self) -> bool {
        !self.state.borrow().is_pending()
    }

    pub fn set_amount_text<T: Into<String>>(&mut self, text: T) {
        let text = text.into();
        debug!(amount_text = %text, "set amount");
        self.apply(Action::SetAmountText(text));
    }

    pub fn set_source(&mut self, source: CurrencyCode) {
        debug!(%source, "set source currency");
        self.apply(Action::SetSource(source));
    }

    pub fn set_target(&mut self, target: CurrencyCode) {
        debug!(%target, "set target currency");
        self.apply(Action::SetTarget(target));
    }

    /// Exchange source and target. Clears the result.
    pub fn swap(&mut self) {
        self.apply(Action::Swap);
        let state = self.state.borrow();
        debug!(source = %state.source(), target = %state.target(), "swapped currencies");
    }

    /// Restore the form to its defaults, cancelling any pending conversion.
    pub fn reset(&mut self) {
        debug!("reset form");
        self.apply(Action::Reset);
    }

    /// Start converting the current amount.
    ///
    /// An invalid amount sets the error banner and returns
    /// `Err(Error::InvalidAmount)`. A same-currency conversion settles
    /// immediately. Otherwise the conversion goes pending, replacing any
    /// conversion already in flight, and completes after the configured delay.
    pub fn trigger_conversion(&mut self) -> Result<Trigger> {
        match self.apply(Action::Trigger) {
            Effect::Settled(output) => {
                info!(%output, "same-currency conversion settled");
                Ok(Trigger::Settled(output))
            }
            Effect::Schedule(pending) => {
                let ticket = pending.ticket().clone();
                info!(
                    ticket = ticket.value(),
                    source = %pending.source(),
                    target = %pending.target(),
                    amount_text = %pending.amount_text(),
                    "conversion pending"
                );
                self.schedule(pending);
                Ok(Trigger::Pending(ticket))
            }
            Effect::Rejected(err) => {
                warn!(error = %err, "conversion rejected");
                Err(err)
            }
            // a trigger always settles, schedules, or rejects
            Effect::None | Effect::Stale(_) => Err(Error::ConversionFailed),
        }
    }

    /// Wait for the pending conversion, if there is one, to complete. Returns
    /// the state afterwards.
    pub async fn settle(&mut self) -> FormState {
        if let Some(in_flight) = self.in_flight.take() {
            if let Err(err) = in_flight.handle.await {
                if err.is_panic() {
                    warn!(ticket = in_flight.ticket.value(), "conversion task panicked");
                }
            }
        }
        self.state()
    }

    /// Run an action through the reducer and store the new state.
    fn apply(&mut self, action: Action) -> Effect {
        let now = util::time::now();
        let rates = &self.rates;
        let config = &self.config;
        let mut effect = Effect::None;
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            let (next, eff) = transactions::reduce(current, action, rates, config, &now).into_parts();
            *state = next;
            effect = eff;
        });
        self.cancel_stale();
        effect
    }

    /// Abort the round trip task if the form is no longer waiting on it.
    fn cancel_stale(&mut self) {
        let pending = self.state.borrow().pending_ticket();
        if let Some(in_flight) = self.in_flight.take() {
            if Some(in_flight.ticket) == pending {
                self.in_flight = Some(in_flight);
            } else {
                debug!(ticket = in_flight.ticket.value(), "cancelling superseded conversion");
                in_flight.handle.abort();
            }
        }
    }

    fn schedule(&mut self, pending: PendingConversion) {
        let state = self.state.clone();
        let rates = self.rates.clone();
        let delay = self.config.pending_delay();
        let capacity = *self.config.history_capacity();
        let ticket = pending.ticket().clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let now = util::time::now();
            let mut effect = Effect::None;
            state.send_if_modified(|form| {
                let current = std::mem::take(form);
                let (next, eff) = transactions::form::complete(current, &rates, &pending, capacity, &now).into_parts();
                *form = next;
                let modified = match eff {
                    Effect::Stale(_) => false,
                    _ => true,
                };
                effect = eff;
                modified
            });
            match effect {
                Effect::Settled(output) => info!(ticket = ticket.value(), %output, "conversion settled"),
                Effect::Rejected(err) => warn!(ticket = ticket.value(), error = %err, "conversion failed"),
                Effect::Stale(_) => debug!(ticket = ticket.value(), "dropping stale conversion"),
                _ => {}
            }
        });
        self.in_flight = Some(InFlight { ticket, handle });
    }
}

impl Drop for Converter {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(ticket = in_flight.ticket.value(), "converter dropped, cancelling conversion");
            in_flight.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{self, Instant};

    /// Let spawned tasks run after moving the (paused) clock.
    async fn advance(millis: u64) {
        time::advance(Duration::from_millis(millis)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn converts_after_delay() {
        let mut converter = Converter::standard();
        converter.set_amount_text("100");
        let start = Instant::now();
        let trigger = converter.trigger_conversion().unwrap();
        let ticket = match trigger {
            Trigger::Pending(ticket) => ticket,
            trigger => panic!("expected Pending, got {:?}", trigger),
        };
        assert!(converter.state().is_pending());
        assert_eq!(converter.state().pending_ticket(), Some(ticket));
        assert!(!converter.is_convert_enabled());

        advance(799).await;
        assert!(converter.state().is_pending());
        assert_eq!(converter.state().result(), &None);

        let state = converter.settle().await;
        assert!(start.elapsed() >= Duration::from_millis(800));
        assert!(!state.is_pending());
        assert!(converter.is_convert_enabled());
        assert_eq!(state.result(), &Some(num!(91.00)));
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].output_amount(), &num!(91));
    }

    #[tokio::test(start_paused = true)]
    async fn same_currency_is_immediate() {
        let mut converter = Converter::standard();
        converter.set_amount_text("50");
        converter.set_source(CurrencyCode::JPY);
        converter.set_target(CurrencyCode::JPY);
        assert_eq!(converter.trigger_conversion(), Ok(Trigger::Settled(num!(50))));
        let state = converter.state();
        assert_eq!(state.result(), &Some(num!(50)));
        assert!(!state.is_pending());
        assert!(state.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_amount_is_rejected() {
        let mut converter = Converter::standard();
        converter.set_amount_text("-10");
        converter.set_target(CurrencyCode::GBP);
        assert_eq!(converter.trigger_conversion(), Err(Error::InvalidAmount));
        let state = converter.settle().await;
        assert_eq!(state.error(), &Some("Please enter a valid positive number".into()));
        assert!(!state.is_pending());
        assert!(state.history().is_empty());
        assert_eq!(state.result(), &None);
    }

    #[tokio::test(start_paused = true)]
    async fn huge_amount_is_out_of_range() {
        let mut converter = Converter::standard();
        converter.set_amount_text("100");
        converter.trigger_conversion().unwrap();
        converter.set_amount_text("1e30");
        assert_eq!(converter.trigger_conversion(), Err(Error::AmountOutOfRange));
        assert!(converter.is_convert_enabled());
        advance(1000).await;
        let state = converter.settle().await;
        assert_eq!(state.error(), &Some("Amount is outside the supported range".into()));
        assert_eq!(state.result(), &None);
        assert!(state.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn swap_then_convert() {
        let mut converter = Converter::standard();
        converter.set_amount_text("10");
        converter.swap();
        converter.trigger_conversion().unwrap();
        let state = converter.settle().await;
        assert_eq!(state.source(), &CurrencyCode::EUR);
        assert_eq!(state.target(), &CurrencyCode::USD);
        assert_eq!(state.result(), &Some(num!(11.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn history_is_bounded() {
        let mut converter = Converter::standard();
        for amount in 1..=6 {
            converter.set_amount_text(amount.to_string());
            converter.trigger_conversion().unwrap();
            converter.settle().await;
        }
        let inputs = converter.state().history().iter().map(|r| r.input_amount().clone()).collect::<Vec<_>>();
        assert_eq!(inputs, vec![num!(6), num!(5), num!(4), num!(3), num!(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_conversion_supersedes() {
        let mut converter = Converter::standard();
        converter.set_amount_text("100");
        converter.trigger_conversion().unwrap();
        advance(400).await;
        converter.set_amount_text("200");
        converter.trigger_conversion().unwrap();

        // the first conversion's deadline passes without it landing
        advance(500).await;
        assert!(converter.state().is_pending());
        assert_eq!(converter.state().result(), &None);

        let state = converter.settle().await;
        assert_eq!(state.result(), &Some(num!(182)));
        assert_eq!(state.history().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_pending() {
        let mut converter = Converter::standard();
        converter.set_amount_text("100");
        converter.trigger_conversion().unwrap();
        converter.reset();
        assert!(converter.is_convert_enabled());
        advance(2000).await;
        let state = converter.settle().await;
        assert_eq!(state, converter.state());
        assert_eq!(state.result(), &None);
        assert!(state.history().is_empty());
        assert!(!state.is_pending());
        assert_eq!(state.amount_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending() {
        let mut converter = Converter::standard();
        let mut rx = converter.subscribe();
        converter.set_amount_text("100");
        converter.trigger_conversion().unwrap();
        assert!(rx.borrow_and_update().is_pending());
        drop(converter);
        time::sleep(Duration::from_secs(2)).await;
        // nothing completed, and the channel closed once the task was gone
        assert!(rx.changed().await.is_err());
        assert!(rx.borrow().is_pending());
        assert_eq!(rx.borrow().result(), &None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_completion() {
        let mut converter = Converter::standard();
        let mut rx = converter.subscribe();
        converter.set_amount_text("100");
        converter.set_target(CurrencyCode::JPY);
        converter.trigger_conversion().unwrap();
        assert!(rx.borrow_and_update().is_pending());
        rx.changed().await.unwrap();
        let state = rx.borrow_and_update().clone();
        assert!(!state.is_pending());
        assert_eq!(state.result(), &Some(num!(15320.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn custom_config_and_rates() {
        let config = ConverterConfig::new(50, 2).unwrap();
        let res = Converter::new(config.clone(), RateTable::new());
        assert_eq!(res.err(), Some(Error::MissingRate(CurrencyCode::USD, CurrencyCode::EUR)));

        let mut converter = Converter::new(config, RateTable::standard()).unwrap();
        let start = Instant::now();
        for amount in &["1", "2", "3"] {
            converter.set_amount_text(*amount);
            converter.trigger_conversion().unwrap();
            converter.settle().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(150));
        assert!(start.elapsed() < Duration::from_millis(800));
        assert_eq!(converter.state().history().len(), 2);
    }
}
