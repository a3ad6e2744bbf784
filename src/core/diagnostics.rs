use std::fmt::Display;
use std::panic::Location;
use std::path::Path;

/// Logs the error, if any, together with `context`.
pub fn check_err<T, E: Display>(result: &Result<T, E>, context: &str) {
    check_err_bool(result, context);
}

/// Same as [`check_err`], returning `true` when `result` held an error.
pub fn check_err_bool<T, E: Display>(result: &Result<T, E>, context: &str) -> bool {
    match result {
        Ok(_) => false,
        Err(e) => {
            tracing::error!("An error occurred: {} {}", e, context);
            true
        }
    }
}

/// `"<file>: <line>"` of the call site.
#[track_caller]
pub fn file_line() -> String {
    let caller = Location::caller();
    let file = Path::new(caller.file())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown file");
    format!("{}: {}", file, caller.line())
}
