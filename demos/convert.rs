use converter_core::{
    controller::{Converter, Trigger},
    error::Result,
    models::currency::CurrencyCode,
    view,
};
use tracing_subscriber::EnvFilter;

/// Usage: convert [AMOUNT] [FROM] [TO]
///
/// Runs a conversion through the widget (waiting out the simulated round trip
/// when the currencies differ) and prints the rendered widget.
async fn run(amount: String, source: CurrencyCode, target: CurrencyCode) -> Result<()> {
    let mut converter = Converter::standard();
    converter.set_amount_text(amount);
    converter.set_source(source);
    converter.set_target(target);
    match converter.trigger_conversion() {
        Ok(Trigger::Pending(_)) => {
            println!("{}\n", view::render(&converter.state(), converter.rates()));
            converter.settle().await;
        }
        Ok(Trigger::Settled(_)) => {}
        // the error is shown in the rendered widget
        Err(_) => {}
    }
    println!("{}", view::render(&converter.state(), converter.rates()));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let amount = args.next().unwrap_or_else(|| "100".into());
    let source = args.next().map(|code| code.parse::<CurrencyCode>()).transpose()?.unwrap_or(CurrencyCode::USD);
    let target = args.next().map(|code| code.parse::<CurrencyCode>()).transpose()?.unwrap_or(CurrencyCode::EUR);
    run(amount, source, target).await
}
