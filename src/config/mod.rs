use crate::core::port::{get_port, resolve_port};
use crate::utils::error::Result;
use crate::utils::validation::{validate_listen_addr, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "webkit-utils")]
#[command(about = "HTTP/JSON helper utilities")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the listen address the server would bind to
    Port(PortArgs),

    /// Format one or more US phone numbers
    Phone {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Re-emit JSON read from stdin
    Json {
        #[arg(long)]
        pretty: bool,
    },

    /// Run the HTTP helper server
    Serve {
        #[command(flatten)]
        port: PortArgs,

        #[arg(long, help = "Emit logs as JSON lines")]
        log_json: bool,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct PortArgs {
    /// Port number or full address; a bare number gets a leading colon
    #[arg(long, env = "PORT")]
    pub port: Option<String>,
}

impl PortArgs {
    /// Resolved listen address; without `--port` or a non-empty `PORT` this logs the default.
    pub fn listen_addr(&self) -> String {
        match &self.port {
            Some(raw) => resolve_port(raw),
            None => get_port(),
        }
    }
}

impl Validate for PortArgs {
    fn validate(&self) -> Result<()> {
        match &self.port {
            Some(raw) => validate_listen_addr("port", &resolve_port(raw)),
            None => Ok(()),
        }
    }
}

impl CliConfig {
    pub fn log_json(&self) -> bool {
        matches!(self.command, Command::Serve { log_json: true, .. })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Port(port) | Command::Serve { port, .. } => port.validate(),
            Command::Phone { .. } | Command::Json { .. } => Ok(()),
        }
    }
}
