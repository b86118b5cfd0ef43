use sunrise_screening::configuration::get_configuration;
use sunrise_screening::startup::Application;
use sunrise_screening::telemetry::get_subscriber;
use sunrise_screening::telemetry::init_subscriber;

/// Initialise telemetry, load config, and run the server until shutdown.
#[tokio::main] // requires tokio features: macros, rt-multi-thread
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("sunrise-screening", "info", std::io::stdout);
    init_subscriber(subscriber);

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;
    app.run_until_stopped().await?;
    Ok(())
}
