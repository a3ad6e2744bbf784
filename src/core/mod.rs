pub mod diagnostics;
pub mod http;
pub mod json;
pub mod lookup;
pub mod phone;
pub mod port;

pub use crate::utils::error::{Result, ValidationError};
