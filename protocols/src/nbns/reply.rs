use std::net::Ipv4Addr;

use pnet::util::MacAddr;
use thiserror::Error;
use tracing::debug;

use super::name::{self, ENCODED_NAME_LEN};
use super::{GROUP_NAME_FLAG, HOST_NAME_TYPE, USER_NAME_TYPE};

pub const HEADER_LEN: usize = 56;

const LABEL_LEN: usize = ENCODED_NAME_LEN + 2;
const RAW_NAME_LEN: usize = 15;
const ADDRESS_RECORD_LEN: u16 = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("datagram truncated: needed {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// NB, answered with address records.
    Name,
    /// NBSTAT, answered with a name table.
    NodeStatus,
    Other(u16),
}

impl RecordType {
    pub fn code(self) -> u16 {
        match self {
            RecordType::Name => 0x0020,
            RecordType::NodeStatus => 0x0021,
            RecordType::Other(code) => code,
        }
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        match code {
            0x0020 => RecordType::Name,
            0x0021 => RecordType::NodeStatus,
            other => RecordType::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyHeader {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
    pub question_name: [u8; LABEL_LEN],
    pub record_type: RecordType,
    pub record_class: u16,
    pub ttl: u32,
    pub record_length: u16,
}

impl ReplyHeader {
    fn read(reader: &mut Reader) -> Result<Self, DecodeError> {
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            question_count: reader.read_u16()?,
            answer_count: reader.read_u16()?,
            authority_count: reader.read_u16()?,
            additional_count: reader.read_u16()?,
            question_name: reader.take()?,
            record_type: RecordType::from(reader.read_u16()?),
            record_class: reader.read_u16()?,
            ttl: reader.read_u32()?,
            record_length: reader.read_u16()?,
        })
    }

    /// Replies still echoing a question, or without any answer, carry nothing.
    pub fn has_payload(&self) -> bool {
        self.question_count == 0 && self.answer_count != 0
    }
}

/// One entry of a node status name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub name: [u8; RAW_NAME_LEN],
    pub name_type: u8,
    pub flags: u16,
}

impl NameRecord {
    fn read(reader: &mut Reader) -> Result<Self, DecodeError> {
        Ok(Self {
            name: reader.take()?,
            name_type: reader.read_u8()?,
            flags: reader.read_u16()?,
        })
    }

    pub fn is_group(&self) -> bool {
        self.flags & GROUP_NAME_FLAG != 0
    }

    pub fn name(&self) -> String {
        name::trim_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub flags: u16,
    pub address: Ipv4Addr,
}

impl AddressRecord {
    fn read(reader: &mut Reader) -> Result<Self, DecodeError> {
        Ok(Self {
            flags: reader.read_u16()?,
            address: Ipv4Addr::from(reader.take::<4>()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NbnsReply {
    pub header: ReplyHeader,
    pub host_name: [u8; RAW_NAME_LEN],
    pub user_name: [u8; RAW_NAME_LEN],
    pub names: Vec<NameRecord>,
    pub addresses: Vec<AddressRecord>,
    pub hw_addr: MacAddr,
}

impl NbnsReply {
    fn new(header: ReplyHeader) -> Self {
        Self {
            header,
            host_name: [0u8; RAW_NAME_LEN],
            user_name: [0u8; RAW_NAME_LEN],
            names: Vec::new(),
            addresses: Vec::new(),
            hw_addr: MacAddr::zero(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.header.record_type
    }

    /// True when neither a name table nor an address list was decoded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.addresses.is_empty()
    }

    /// Hardware address as lowercase colon separated hex.
    pub fn hw_address(&self) -> String {
        self.hw_addr.to_string()
    }

    pub fn host_name(&self) -> String {
        name::trim_name(&self.host_name)
    }

    pub fn user_name(&self) -> String {
        name::trim_name(&self.user_name)
    }

    /// Decodes the name label the reply answers for.
    pub fn answer_name(&self) -> Option<String> {
        let label: &[u8; LABEL_LEN] = &self.header.question_name;
        if label[0] as usize != ENCODED_NAME_LEN {
            return None;
        }
        let mut encoded = [0u8; ENCODED_NAME_LEN];
        encoded.copy_from_slice(&label[1..=ENCODED_NAME_LEN]);
        Some(name::trim_name(&name::decode_name(&encoded)))
    }

    fn read_name_table(&mut self, reader: &mut Reader) {
        let Ok(count) = reader.read_u8() else {
            return;
        };

        for _ in 0..count {
            let record = match NameRecord::read(reader) {
                Ok(record) => record,
                Err(e) => {
                    debug!("name table cut short: {e}");
                    return;
                }
            };
            match record.name_type {
                HOST_NAME_TYPE => self.host_name = record.name,
                USER_NAME_TYPE => self.user_name = record.name,
                _ => {}
            }
            self.names.push(record);
        }

        if let Ok(hw) = reader.take::<6>() {
            self.hw_addr = MacAddr::new(hw[0], hw[1], hw[2], hw[3], hw[4], hw[5]);
        }
    }

    fn read_addresses(&mut self, reader: &mut Reader) {
        for _ in 0..self.header.record_length / ADDRESS_RECORD_LEN {
            match AddressRecord::read(reader) {
                Ok(record) => self.addresses.push(record),
                Err(e) => {
                    debug!("address list cut short: {e}");
                    return;
                }
            }
        }
    }
}

/// Parses a reply datagram.
///
/// Only a datagram too short to hold the header is an error. A body that ends
/// early keeps the records decoded before the cut.
pub fn parse_reply(payload: &[u8]) -> Result<NbnsReply, DecodeError> {
    let mut reader = Reader::new(payload);
    let header = ReplyHeader::read(&mut reader)?;
    let mut reply = NbnsReply::new(header);

    if !reply.header.has_payload() {
        return Ok(reply);
    }

    match reply.header.record_type {
        RecordType::NodeStatus => reply.read_name_table(&mut reader),
        RecordType::Name => reply.read_addresses(&mut reader),
        RecordType::Other(code) => debug!("ignoring record type {code:#06x}"),
    }

    Ok(reply)
}

/// Big-endian cursor over a datagram.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end: usize = self.pos + N;
        let bytes: &[u8] = self.buf.get(self.pos..end).ok_or(DecodeError::Truncated {
            needed: end,
            got: self.buf.len(),
        })?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos = end;
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take::<1>()?[0])
    }

    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.take()?))
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
