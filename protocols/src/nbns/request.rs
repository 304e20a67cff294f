use super::name::{self, ENCODED_NAME_LEN, WILDCARD_NAME};
use super::reply::RecordType;
use super::CLASS_IN;

/// Both requests share the same fixed layout.
pub const REQUEST_LEN: usize = 50;

const FLAGS_NODE_STATUS: u16 = 0x0000;
const FLAGS_NAME_QUERY: u16 = 0x0100;

/// Node status (NBSTAT) request for the `*` wildcard name.
pub fn create_status_request(id: u16) -> Vec<u8> {
    build_request(id, FLAGS_NODE_STATUS, &WILDCARD_NAME, RecordType::NodeStatus)
}

/// Name (NB) query for a host name learned from a status reply.
pub fn create_name_request(id: u16, host_name: &str) -> Vec<u8> {
    let encoded = name::encode_name(&name::pad_name(host_name));
    build_request(id, FLAGS_NAME_QUERY, &encoded, RecordType::Name)
}

fn build_request(
    id: u16,
    flags: u16,
    encoded_name: &[u8; ENCODED_NAME_LEN],
    record_type: RecordType,
) -> Vec<u8> {
    let mut buffer: Vec<u8> = Vec::with_capacity(REQUEST_LEN);

    buffer.extend_from_slice(&id.to_be_bytes());
    buffer.extend_from_slice(&flags.to_be_bytes());
    buffer.extend_from_slice(&1u16.to_be_bytes());
    // answer, authority and additional counts
    buffer.extend_from_slice(&[0u8; 6]);

    buffer.push(ENCODED_NAME_LEN as u8);
    buffer.extend_from_slice(encoded_name);
    buffer.push(0);

    buffer.extend_from_slice(&record_type.code().to_be_bytes());
    buffer.extend_from_slice(&CLASS_IN.to_be_bytes());

    buffer
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
