use std::net::Ipv4Addr;

use nbprobe_common::network::netbios::{HW_ADDR_UNKNOWN, NetbiosInfo};
use nbprobe_protocols::nbns::{AddressRecord, NameRecord, NbnsReply, RecordType};

/// Folds the replies of a finished exchange into a [`NetbiosInfo`].
pub(crate) fn netbios_info(status: Option<&NbnsReply>, name: Option<&NbnsReply>) -> NetbiosInfo {
    let mut info = NetbiosInfo::default();

    if let Some(status) = status {
        info.name = status.host_name();

        let hw: String = status.hw_address();
        if hw != HW_ADDR_UNKNOWN {
            info.hw = hw;
        }

        info.user_name = status.user_name();
        info.domain = guess_domain(&status.names, &info.name);
    }

    if let Some(reply) = name.filter(|reply| reply.record_type() == RecordType::Name) {
        info.addresses = reported_addresses(&reply.addresses);
        info.net = join_addresses(&info.addresses);
    }

    info
}

/// Picks the workgroup or domain out of a name table.
///
/// Group names and the host's own name are skipped. When several names remain
/// the last one wins.
pub fn guess_domain(names: &[NameRecord], host_name: &str) -> String {
    let mut domain = String::new();
    for record in names {
        let name: String = record.name();
        if name == host_name || record.is_group() {
            continue;
        }
        domain = name;
    }
    domain
}

fn reported_addresses(records: &[AddressRecord]) -> Vec<Ipv4Addr> {
    records
        .iter()
        .map(|record| record.address)
        .filter(|addr| !addr.is_unspecified())
        .collect()
}

/// Comma joined dotted-decimal list, placeholders dropped.
pub fn join_addresses(addresses: &[Ipv4Addr]) -> String {
    addresses
        .iter()
        .filter(|addr| !addr.is_unspecified())
        .map(Ipv4Addr::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
