//! # NetBIOS probe results
//!
//! What a name service probe learned about one target, and the caller-owned
//! record it folds into.

use std::net::Ipv4Addr;

/// Hardware address reported when a target never disclosed one.
pub const HW_ADDR_UNKNOWN: &str = "00:00:00:00:00:00";

/// Service name recorded against a target once a probe succeeds.
pub const SERVICE_NAME: &str = "netbios";

/// Identity of a host as reported by its name service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetbiosInfo {
    /// Registered computer name.
    pub name: String,
    /// Workgroup or domain guess, possibly empty.
    pub domain: String,
    /// Lowercase colon separated hardware address.
    pub hw: String,
    /// Logged-in user, possibly empty.
    pub user_name: String,
    /// Comma joined IPv4 addresses from the name query.
    pub net: String,
    /// The same addresses, unformatted.
    pub addresses: Vec<Ipv4Addr>,
}

impl NetbiosInfo {
    pub fn has_hw(&self) -> bool {
        self.hw != HW_ADDR_UNKNOWN
    }
}

impl Default for NetbiosInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            domain: String::new(),
            hw: HW_ADDR_UNKNOWN.to_string(),
            user_name: String::new(),
            net: String::new(),
            addresses: Vec::new(),
        }
    }
}

/// Per-target record owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub port_opened: bool,
    pub service_name: Option<String>,
    pub netbios: NetbiosInfo,
}
