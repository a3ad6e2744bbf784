use regex::Regex;
use std::sync::LazyLock;

use crate::core::lookup::get_env_var;

pub const PORT_ENV_VAR: &str = "PORT";
pub const DEFAULT_LISTEN_ADDR: &str = ":4567";

static ALL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static pattern is valid"));

/// Turns a raw port setting into a listen address.
///
/// - `""` becomes [`DEFAULT_LISTEN_ADDR`]
/// - a bare number such as `8080` becomes `:8080`
/// - anything else (`localhost:7878`) is returned unchanged
pub fn resolve_port(raw: &str) -> String {
    if raw.is_empty() {
        DEFAULT_LISTEN_ADDR.to_string()
    } else if ALL_DIGITS.is_match(raw) {
        format!(":{}", raw)
    } else {
        raw.to_string()
    }
}

/// Reads `PORT` from the environment and resolves it.
pub fn get_port() -> String {
    let raw = get_env_var(PORT_ENV_VAR);
    let resolved = resolve_port(&raw);

    if raw.is_empty() {
        tracing::info!(
            "No {} environment variable detected, defaulting to: {}",
            PORT_ENV_VAR,
            resolved
        );
    } else {
        tracing::debug!("{}={} resolved to {}", PORT_ENV_VAR, raw, resolved);
    }

    resolved
}

/// Socket address for a resolved listen address; a bare `:port` binds all interfaces.
pub fn bind_addr(resolved: &str) -> String {
    match resolved.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => resolved.to_string(),
    }
}
