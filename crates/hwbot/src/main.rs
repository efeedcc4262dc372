use std::sync::Arc;

use hwbot_core::{config::Config, poll::Poller};
use hwbot_practicum::PracticumClient;
use hwbot_telegram::TelegramMessenger;

#[tokio::main]
async fn main() -> Result<(), hwbot_core::Error> {
    hwbot_core::logging::init("hwbot")?;

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!(error = %e, "missing or invalid configuration, refusing to start");
            return Err(e);
        }
    };

    let api = Arc::new(PracticumClient::new(&cfg));
    let messenger = Arc::new(TelegramMessenger::from_token(&cfg.telegram_token));

    tracing::info!(
        endpoint = %cfg.endpoint,
        interval = ?cfg.poll_interval,
        "homework status bot started"
    );

    Poller::new(&cfg, api, messenger).run().await;

    Ok(())
}
