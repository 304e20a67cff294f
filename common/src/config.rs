use std::time::Duration;

use crate::signal::StopSignal;

/// Well-known UDP port of the NetBIOS name service.
pub const DEFAULT_PORT: u16 = 137;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2_000);

/// Settings for a single probe, handed in by the caller.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Destination UDP port of the name service.
    pub port: u16,
    /// Deadline applied to every individual send and receive.
    pub timeout: Duration,
    /// Checked once, before the socket is opened.
    pub stop: StopSignal,
}

impl ProbeConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_stop(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            stop: StopSignal::default(),
        }
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
