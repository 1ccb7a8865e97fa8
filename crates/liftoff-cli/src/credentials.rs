//! API-key resolution for the CLI.
//!
//! The orchestration core only accepts a ready-made configuration object, so
//! everything interactive lives here: flag, environment variable, then an
//! interactive prompt, in that order.

use anyhow::{Context, bail};
use dialoguer::{Confirm, Password};

/// Environment variable consulted when no `--api-key` flag is given.
pub const KEY_ENV: &str = "RENDER_API_KEY";

/// Prefix the platform uses for its API keys.
const KEY_PREFIX: &str = "rnd_";

/// Resolve the control-plane API key: flag, then [`KEY_ENV`], then an
/// interactive password prompt.
///
/// A key without the expected `rnd_` prefix triggers a warning and a
/// confirmation prompt; declining aborts before any network call.
pub fn resolve(flag: Option<String>) -> anyhow::Result<String> {
    let key = match flag {
        Some(key) => key,
        None => match std::env::var(KEY_ENV) {
            Ok(key) => key,
            Err(_) => prompt()?,
        },
    };

    let key = key.trim().to_string();
    if key.is_empty() {
        bail!("API key is required; create one under Account → API Keys on the dashboard");
    }

    if !has_expected_prefix(&key) {
        eprintln!("Warning: control-plane API keys usually start with '{KEY_PREFIX}'");
        let proceed = Confirm::new()
            .with_prompt("Continue anyway?")
            .default(false)
            .interact()
            .context("confirmation prompt failed")?;
        if !proceed {
            bail!("aborted: API key did not look valid");
        }
    }

    Ok(key)
}

fn prompt() -> anyhow::Result<String> {
    Password::new()
        .with_prompt("Control-plane API key")
        .interact()
        .context("API key prompt failed")
}

fn has_expected_prefix(key: &str) -> bool {
    key.starts_with(KEY_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_platform_keys() {
        assert!(has_expected_prefix("rnd_abc123"));
        assert!(!has_expected_prefix("sk-something-else"));
        assert!(!has_expected_prefix(""));
    }
}
