use std::collections::HashMap;
use std::env;

pub fn contains<S: AsRef<str>>(needle: &str, haystack: &[S]) -> bool {
    haystack.iter().any(|item| item.as_ref() == needle)
}

/// Value stored under `key`, or an empty string when absent.
pub fn get_from_param(key: &str, params: &HashMap<String, String>) -> String {
    params.get(key).cloned().unwrap_or_default()
}

/// Value of an environment variable, or an empty string when unset or not valid UTF-8.
pub fn get_env_var(name: &str) -> String {
    if name.is_empty() {
        tracing::warn!("Missing environment variable name. No value to be found.");
        return String::new();
    }

    env::var(name).unwrap_or_default()
}
