//! The poll loop: fetch, validate, format, notify, sleep, repeat.
//!
//! Every failure inside a cycle is contained at the cycle boundary; only a
//! missing configuration value (checked before the loop starts) is fatal.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::sleep;

use crate::{
    config::Config,
    domain::ChatId,
    ports::{HomeworkApi, MessagingPort},
    response, status, Error, Result,
};

/// Prefix for failure reports sent to the chat.
const FAILURE_PREFIX: &str = "Сбой в работе программы: ";

/// The poll loop and its state: the fetch cursor plus the last texts that
/// actually reached the chat (for at-most-once-per-change delivery).
pub struct Poller {
    api: Arc<dyn HomeworkApi>,
    messenger: Arc<dyn MessagingPort>,
    chat_id: ChatId,
    poll_interval: Duration,
    cursor: i64,
    last_message: Option<String>,
    last_error: Option<String>,
}

impl Poller {
    pub fn new(cfg: &Config, api: Arc<dyn HomeworkApi>, messenger: Arc<dyn MessagingPort>) -> Self {
        Self {
            api,
            messenger,
            chat_id: ChatId(cfg.telegram_chat_id),
            poll_interval: cfg.poll_interval,
            cursor: Utc::now().timestamp(),
            last_message: None,
            last_error: None,
        }
    }

    /// Run forever. The only way out is process termination.
    pub async fn run(mut self) {
        loop {
            self.cycle().await;
            tracing::info!(interval = ?self.poll_interval, "cycle finished, sleeping");
            sleep(self.poll_interval).await;
        }
    }

    /// One full cycle with failure containment.
    pub async fn cycle(&mut self) {
        if let Err(e) = self.poll_once().await {
            self.report_failure(e).await;
        }
    }

    async fn poll_once(&mut self) -> Result<()> {
        let raw = self.api.fetch(self.cursor).await?;
        let (homeworks, cursor) = response::check_response(&raw)?;

        match homeworks.first() {
            None => {
                tracing::info!("no homework updates since last poll");
            }
            Some(entry) => {
                let message = status::parse_status(entry)?;
                self.notify_if_changed(message).await?;
            }
        }

        // The cursor advances only after the whole cycle succeeded, so a
        // failed cycle retries the same window.
        self.cursor = cursor;
        Ok(())
    }

    async fn notify_if_changed(&mut self, message: String) -> Result<()> {
        if self.last_message.as_deref() == Some(message.as_str()) {
            tracing::info!("status unchanged, nothing sent");
            return Ok(());
        }

        self.messenger.send_text(self.chat_id, &message).await?;
        tracing::info!(%message, "notification sent");
        self.last_message = Some(message);
        Ok(())
    }

    /// Containment boundary: log every failure, report the reportable kinds
    /// to the chat at most once per distinct error text.
    async fn report_failure(&mut self, err: Error) {
        tracing::error!(error = %err, "poll cycle failed");

        if !err.is_reportable() {
            return;
        }

        let text = format!("{FAILURE_PREFIX}{err}");
        if self.last_error.as_deref() == Some(text.as_str()) {
            tracing::info!("failure unchanged, nothing sent");
            return;
        }

        match self.messenger.send_text(self.chat_id, &text).await {
            Ok(()) => self.last_error = Some(text),
            Err(e) => tracing::error!(error = %e, "could not report the failure to the chat"),
        }
    }
}
