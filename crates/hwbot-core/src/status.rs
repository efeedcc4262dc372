use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Verdict texts for the documented review statuses.
const VERDICT_APPROVED: &str = "Работа проверена: ревьюеру всё понравилось. Ура!";
const VERDICT_REVIEWING: &str = "Работа взята на проверку ревьюером.";
const VERDICT_REJECTED: &str = "Работа проверена: у ревьюера есть замечания.";

#[derive(Debug, Deserialize)]
struct RawEntry {
    homework_name: Option<String>,
    status: Option<String>,
}

/// Map a status code to its verdict text.
pub fn verdict(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some(VERDICT_APPROVED),
        "reviewing" => Some(VERDICT_REVIEWING),
        "rejected" => Some(VERDICT_REJECTED),
        _ => None,
    }
}

/// Build the user-facing notification for one homework entry.
///
/// An undocumented status is an error, never a silent fallback.
pub fn parse_status(entry: &Value) -> Result<String> {
    let raw: RawEntry = serde_json::from_value(entry.clone())
        .map_err(|_| Error::MalformedEntry("entry is not a mapping".to_string()))?;

    let name = raw
        .homework_name
        .ok_or_else(|| Error::MalformedEntry("homework_name is missing".to_string()))?;
    let status = raw
        .status
        .ok_or_else(|| Error::MalformedEntry("status is missing".to_string()))?;

    let verdict = verdict(&status).ok_or(Error::UnknownStatus(status))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}
