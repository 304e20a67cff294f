//! Synthetic replies and a scripted transport for driver tests.

use std::{collections::VecDeque, io, time::Duration};

use async_trait::async_trait;
use nbprobe_protocols::nbns::{self, NbnsReply};

use crate::{error::ProbeError, network::transport::Transport};

pub struct ScriptedTransport {
    replies: VecDeque<Result<Vec<u8>, ProbeError>>,
    fail_send_at: Option<usize>,
    attempts: usize,
    /// Requests that were written successfully.
    pub sent: Vec<Vec<u8>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<Vec<u8>, ProbeError>>) -> Self {
        Self {
            replies: replies.into(),
            fail_send_at: None,
            attempts: 0,
            sent: Vec::new(),
        }
    }

    /// Makes the send with zero-based index `attempt` fail.
    pub fn failing_send(mut self, attempt: usize) -> Self {
        self.fail_send_at = Some(attempt);
        self
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&mut self, payload: &[u8]) -> Result<(), ProbeError> {
        let attempt: usize = self.attempts;
        self.attempts += 1;
        if self.fail_send_at == Some(attempt) {
            return Err(ProbeError::Send(io::Error::from(io::ErrorKind::BrokenPipe)));
        }
        self.sent.push(payload.to_vec());
        Ok(())
    }

    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, ProbeError> {
        match self.replies.pop_front() {
            Some(Ok(bytes)) => {
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }
            Some(Err(e)) => Err(e),
            None => Err(ProbeError::Timeout(Duration::from_millis(10))),
        }
    }
}

fn header(answer_count: u16, record_type: u16, record_length: u16) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::with_capacity(nbns::HEADER_LEN);
    buf.extend_from_slice(&0x4242u16.to_be_bytes());
    buf.extend_from_slice(&0x8400u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&answer_count.to_be_bytes());
    buf.extend_from_slice(&[0u8; 4]);
    buf.push(nbns::ENCODED_NAME_LEN as u8);
    buf.extend_from_slice(&[b'A'; nbns::ENCODED_NAME_LEN]);
    buf.push(0);
    buf.extend_from_slice(&record_type.to_be_bytes());
    buf.extend_from_slice(&0x0001u16.to_be_bytes());
    buf.extend_from_slice(&0u32.to_be_bytes());
    buf.extend_from_slice(&record_length.to_be_bytes());
    buf
}

/// Node status reply with `(name, type, flags)` records and a hardware address.
pub fn status_reply(names: &[(&str, u8, u16)], hw: [u8; 6]) -> Vec<u8> {
    let record_length = (1 + names.len() * 18 + 6) as u16;
    let mut buf = header(1, 0x21, record_length);
    buf.push(names.len() as u8);
    for (name, name_type, flags) in names {
        let mut raw = [b' '; 15];
        raw[..name.len()].copy_from_slice(name.as_bytes());
        buf.extend_from_slice(&raw);
        buf.push(*name_type);
        buf.extend_from_slice(&flags.to_be_bytes());
    }
    buf.extend_from_slice(&hw);
    buf
}

/// Name query reply listing `addresses`.
pub fn name_reply(addresses: &[[u8; 4]]) -> Vec<u8> {
    let mut buf = header(1, 0x20, (addresses.len() * 6) as u16);
    for octets in addresses {
        buf.extend_from_slice(&0x0000u16.to_be_bytes());
        buf.extend_from_slice(octets);
    }
    buf
}

/// A well-formed reply with no answers.
pub fn empty_reply() -> Vec<u8> {
    header(0, 0x21, 0)
}

pub fn parse(bytes: &[u8]) -> NbnsReply {
    nbns::parse_reply(bytes).expect("fixture should parse")
}
