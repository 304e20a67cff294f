use std::future::Future;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use nbprobe_common::{
    config::ProbeConfig,
    network::{
        mac,
        netbios::{NetbiosInfo, ScanResult},
    },
};
use nbprobe_core::{ProbeError, probe as netbios};
use tracing::{info, warn};

use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

/// Runs the probe until it finishes or `interrupt` resolves.
///
/// An interrupt triggers the stop signal and drops the probe, which releases
/// its socket.
pub async fn probe_until<F>(target: Ipv4Addr, cfg: &ProbeConfig, interrupt: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    tokio::select! {
        res = probe(target, cfg) => res,
        _ = interrupt => {
            cfg.stop.trigger();
            warn!("Probe of {target} interrupted");
            Ok(())
        }
    }
}

pub async fn probe(target: Ipv4Addr, cfg: &ProbeConfig) -> anyhow::Result<()> {
    info!("Querying {target}:{} ...", cfg.port);

    let start_time: Instant = Instant::now();
    let mut result: ScanResult = ScanResult::default();

    match netbios::check(target, cfg, &mut result).await {
        Ok(()) => {
            print_result(target, &result.netbios);
            print_summary(start_time.elapsed());
            Ok(())
        }
        Err(ProbeError::ExchangeIncomplete) => {
            warn!("{target} answered but never completed the name query");
            Ok(())
        }
        Err(e) if e.is_transport() => {
            warn!("{target} does not offer the name service: {e}");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("probing {target}")),
    }
}

fn print_result(target: Ipv4Addr, info: &NetbiosInfo) {
    let name: &str = if info.name.is_empty() { "No hostname" } else { &info.name };
    print::host_line(name);
    print::details(&to_details(target, info));
}

fn to_details(target: Ipv4Addr, info: &NetbiosInfo) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("Target".to_string(), target.to_string().color(colors::IPV4_ADDR))];

    if !info.domain.is_empty() {
        details.push(("Domain".to_string(), info.domain.normal()));
    }

    if !info.user_name.is_empty() {
        details.push(("User".to_string(), info.user_name.normal()));
    }

    if info.has_hw() {
        details.push(("MAC".to_string(), info.hw.color(colors::MAC_ADDR)));
        if let Some(vendor) = mac::get_vendor(&info.hw) {
            details.push(("Vendor".to_string(), vendor.normal()));
        }
    }

    for addr in &info.addresses {
        details.push(("IPv4".to_string(), addr.to_string().color(colors::IPV4_ADDR)));
    }

    details
}

fn print_summary(total_time: Duration) {
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    info!("Probe complete in {total_time}");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
