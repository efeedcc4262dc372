/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the poll loop
/// can handle failures consistently (fatal vs reportable vs logged-only).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("endpoint unavailable: status {status} ({reason}); from_date={from_date}; body: {body}")]
    EndpointUnavailable {
        status: u16,
        reason: String,
        body: String,
        from_date: i64,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response is missing the current_date key")]
    MissingCursor,

    #[error("response is missing the homeworks key")]
    MissingHomeworksKey,

    #[error("homeworks key does not hold a list")]
    HomeworksNotAList,

    #[error("malformed homework entry: {0}")]
    MalformedEntry(String),

    #[error("undocumented homework status: {0}")]
    UnknownStatus(String),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl Error {
    /// Whether the failure should be reported to the chat.
    ///
    /// Delivery failures are logged only (reporting them would go through the
    /// same broken channel), and config failures are fatal before the loop
    /// ever starts.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Error::Delivery(_) | Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
