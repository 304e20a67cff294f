//! # NetBIOS name service probe
//!
//! Learns the identity of a single host in two exchanges over one UDP
//! association:
//!
//! 1. a **node status** query for the `*` wildcard, answered with the host's
//!    name table and hardware address;
//! 2. a **name query** for the host name found in step 1, answered with the
//!    IPv4 addresses registered under it.
//!
//! The probe is sequential and owns its socket for its whole lifetime; running
//! many targets in parallel is left to the caller.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use nbprobe_common::{
    config::ProbeConfig,
    network::netbios::{NetbiosInfo, SERVICE_NAME, ScanResult},
};
use tracing::debug;

use crate::{error::ProbeError, network::transport::UdpTransport};

mod extract;
mod session;

#[cfg(test)]
mod fixtures;

pub use extract::{guess_domain, join_addresses};
pub use session::{ProbeSession, ProbeState, READ_BUDGET};

/// Probes `addr` on the configured port.
///
/// The association is released when this returns, whatever the outcome.
pub async fn probe(addr: Ipv4Addr, cfg: &ProbeConfig) -> Result<NetbiosInfo, ProbeError> {
    let target = SocketAddr::new(IpAddr::V4(addr), cfg.port);
    let transport = UdpTransport::connect(target, cfg).await?;

    let mut session = ProbeSession::new(transport);
    session.run().await?;

    Ok(extract::netbios_info(
        session.status_reply(),
        session.name_reply(),
    ))
}

/// Runs [`probe`] and folds a success into the caller's record.
///
/// A failed probe leaves `result` untouched.
pub async fn check(
    addr: Ipv4Addr,
    cfg: &ProbeConfig,
    result: &mut ScanResult,
) -> Result<(), ProbeError> {
    let info = probe(addr, cfg)
        .await
        .inspect_err(|e| debug!("netbios probe of {addr} failed: {e}"))?;

    result.port_opened = true;
    result.service_name = Some(SERVICE_NAME.to_string());
    result.netbios = info;
    Ok(())
}
