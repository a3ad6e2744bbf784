pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    http::{dump_request, dump_response, to_json_response, to_json_status_response, HttpDump},
    json::{from_json, from_json_bytes, to_json, to_json_reader, JsonText},
    phone::format_phone_us,
    port::{get_port, resolve_port, DEFAULT_LISTEN_ADDR},
};
pub use utils::error::{Result, UtilError, ValidationError};
