//! # NetBIOS Name Service codec
//!
//! Encodes the two requests an active probe sends (node status and name query)
//! and decodes the replies a target sends back.
//!
//! Every structure on the wire has a fixed width and big-endian byte order:
//!
//! * **Header** (56 bytes): id, flags, four counts, the 34-byte name label,
//!   record type, class, TTL and record length.
//! * **Name record** (18 bytes): 15-byte name, type byte, flag word.
//! * **Address record** (6 bytes): flag word, IPv4 address.

mod name;
mod reply;
mod request;

pub use name::{ENCODED_NAME_LEN, NAME_LEN, decode_name, encode_name, pad_name, trim_name};
pub use reply::{
    AddressRecord, DecodeError, HEADER_LEN, NameRecord, NbnsReply, RecordType, ReplyHeader,
    parse_reply,
};
pub use request::{REQUEST_LEN, create_name_request, create_status_request};

/// Name type of the registered computer name.
pub const HOST_NAME_TYPE: u8 = 0x20;
/// Name type of the logged-in user (messenger service).
pub const USER_NAME_TYPE: u8 = 0x03;
/// Name flag bit marking a group name.
pub const GROUP_NAME_FLAG: u16 = 0x0800;

/// Only record class used by the name service.
pub(crate) const CLASS_IN: u16 = 0x0001;
