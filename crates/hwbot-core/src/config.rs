use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Default homework statuses endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Typed runtime configuration, built once at startup and passed into the
/// poll loop and its collaborators.
#[derive(Clone, Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: i64,
    pub endpoint: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let practicum_token = require_env("PRACTICUM_TOKEN")?;
        let telegram_token = require_env("TELEGRAM_TOKEN")?;

        let chat_id_raw = require_env("TELEGRAM_CHAT_ID")?;
        let telegram_chat_id = parse_chat_id(&chat_id_raw)?;

        let endpoint = env_str("HOMEWORK_ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let poll_interval = Duration::from_secs(
            env_u64("POLL_INTERVAL_SECS").unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        );

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }
}

fn parse_chat_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        Error::Config(format!(
            "TELEGRAM_CHAT_ID must be a numeric chat id, got {raw:?}"
        ))
    })
}

fn require_env(key: &str) -> Result<String> {
    env_str(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_env_file(name: &str, contents: &str) -> PathBuf {
        let path = PathBuf::from(format!("/tmp/hwbot-env-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_variable_names_the_variable() {
        let err = require_env("HWBOT_TEST_NO_SUCH_VAR").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("HWBOT_TEST_NO_SUCH_VAR"));
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn chat_id_must_be_numeric() {
        assert!(matches!(parse_chat_id("@my_channel"), Err(Error::Config(_))));
        assert_eq!(parse_chat_id(" 308335172 ").unwrap(), 308335172);
        assert_eq!(parse_chat_id("-1001234").unwrap(), -1001234);
    }

    #[test]
    fn dotenv_strips_quotes_and_skips_existing() {
        env::set_var("HWBOT_TEST_KEEP", "original");
        let path = tmp_env_file(
            "quotes",
            "# comment\nHWBOT_TEST_KEEP=overridden\nHWBOT_TEST_QUOTED='secret'\n",
        );

        load_dotenv_if_present(&path);

        assert_eq!(env::var("HWBOT_TEST_KEEP").unwrap(), "original");
        assert_eq!(env::var("HWBOT_TEST_QUOTED").unwrap(), "secret");

        let _ = fs::remove_file(path);
    }
}
