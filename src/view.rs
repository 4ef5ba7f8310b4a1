//! The view module renders the widget's output surface from a [FormState]:
//! the error banner, the result banner with its exchange rate line, and the
//! recent conversions table. `render()` puts all of it together as plain text.
//!
//! [FormState]: ../models/form/struct.FormState.html

use crate::{
    format,
    models::{
        currency::CurrencyCode,
        form::FormState,
    },
    system::{converter, rates::RateTable},
};
use getset::Getters;

pub const TITLE: &str = "Currency Converter";
pub const HISTORY_TITLE: &str = "Recent Conversions";
pub const DISCLAIMER: &str = "This is a demo using fake exchange rates for educational purposes only.";

/// The green box shown after a successful conversion.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ResultBanner {
    /// ie "$100.00 = €91.00"
    summary: String,
    /// ie "Exchange Rate: 1 USD = 0.9100 EUR"
    rate_line: String,
}

/// One line of the recent conversions table.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct HistoryRow {
    time: String,
    conversion: String,
}

/// Labels for the currency selectors, ie "USD - US Dollar".
pub fn currency_options() -> Vec<String> {
    CurrencyCode::ALL.iter()
        .map(|code| format!("{} - {}", code.code(), code.name()))
        .collect()
}

/// The convert control's label.
pub fn convert_label(state: &FormState) -> &'static str {
    if state.is_pending() { "Converting..." } else { "Convert" }
}

pub fn error_banner(state: &FormState) -> Option<&str> {
    state.error().as_deref()
}

/// The result banner, shown when there is a result and no error.
///
/// The amount and currencies shown are whatever the form holds right now, so
/// an amount edited after converting shows up as typed.
pub fn result_banner(state: &FormState, rates: &RateTable) -> Option<ResultBanner> {
    if state.error().is_some() {
        return None;
    }
    let result = state.result().as_ref()?;
    let source = state.source().clone();
    let target = state.target().clone();
    let amount = match converter::parse_amount(state.amount_text()) {
        Ok(amount) => format::format_currency(amount, source),
        Err(_) => state.amount_text().clone(),
    };
    let rate = match rates.lookup(source, target) {
        Ok(rate) => format::format_rate(rate),
        Err(_) => "?".into(),
    };
    Some(ResultBanner {
        summary: format!("{} = {}", amount, format::format_currency(*result, target)),
        rate_line: format!("Exchange Rate: 1 {} = {} {}", source, rate, target),
    })
}

/// The recent conversions, newest first.
pub fn history_rows(state: &FormState) -> Vec<HistoryRow> {
    state.history().iter()
        .map(|record| {
            HistoryRow {
                time: record.timestamp_display().clone(),
                conversion: format!(
                    "{} = {}",
                    format::format_currency(*record.input_amount(), *record.source()),
                    format::format_currency(*record.output_amount(), *record.target()),
                ),
            }
        })
        .collect()
}

/// Render the whole widget as text.
pub fn render(state: &FormState, rates: &RateTable) -> String {
    let mut out = vec![
        TITLE.to_string(),
        String::new(),
        format!("Amount: {}", state.amount_text()),
        format!(
            "From: {} - {}  <->  To: {} - {}",
            state.source().code(), state.source().name(),
            state.target().code(), state.target().name(),
        ),
        format!("[{}] [Reset]", convert_label(state)),
    ];
    if let Some(error) = error_banner(state) {
        out.push(String::new());
        out.push(format!("! {}", error));
    }
    if let Some(banner) = result_banner(state, rates) {
        out.push(String::new());
        out.push("Conversion Result:".into());
        out.push(banner.summary);
        out.push(banner.rate_line);
    }
    let rows = history_rows(state);
    if !rows.is_empty() {
        let width = rows.iter().map(|row| row.time.chars().count()).max().unwrap_or(0).max(4);
        out.push(String::new());
        out.push(HISTORY_TITLE.into());
        out.push(format!("{:<width$}  {}", "TIME", "CONVERSION", width = width));
        for row in rows {
            out.push(format!("{:<width$}  {}", row.time, row.conversion, width = width));
        }
    }
    out.push(String::new());
    out.push(DISCLAIMER.into());
    out.join("\n")
}
