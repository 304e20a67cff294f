pub mod probe;

use std::net::Ipv4Addr;
use std::time::Duration;

use clap::Parser;
use nbprobe_common::config::{DEFAULT_PORT, DEFAULT_TIMEOUT, ProbeConfig};

#[derive(Parser)]
#[command(name = "nbprobe")]
#[command(about = "Ask a host's NetBIOS name service who it is.")]
pub struct CommandLine {
    /// IPv4 address of the target
    pub target: Ipv4Addr,
    /// Destination UDP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Timeout for every send and receive, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout: u64,
    /// Show protocol details
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig::default()
            .with_port(self.port)
            .with_timeout(Duration::from_millis(self.timeout))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
