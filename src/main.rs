use std::io;

use klikkit::configuration::Settings;
use klikkit::startup::Application;
use klikkit::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("klikkit".into(), "info".into(), io::stdout);
    init_subscriber(subscriber);

    // Retrieve settings
    let config = Settings::get_config()?;

    // Prepare and run the application
    let application = Application::build(config)?;
    application.run_until_stopped().await?;

    Ok(())
}
