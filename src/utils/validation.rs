use crate::utils::error::{Result, UtilError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UtilError::Config {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Checks a resolved listen address (`:8080`, `localhost:7878`, ...).
pub fn validate_listen_addr(field_name: &str, addr: &str) -> Result<()> {
    validate_non_empty_string(field_name, addr)?;

    if addr.contains('\0') {
        return Err(UtilError::Config {
            message: format!("{} [{}] contains null bytes", field_name, addr.escape_debug()),
        });
    }

    if addr.chars().any(char::is_whitespace) {
        return Err(UtilError::Config {
            message: format!("{} [{}] contains whitespace", field_name, addr),
        });
    }

    Ok(())
}
