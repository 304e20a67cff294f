use nbprobe_protocols::nbns::{self, NbnsReply, RecordType};
use tracing::debug;

use crate::{error::ProbeError, network::transport::Transport};

/// Datagrams read before the probe gives up on the exchange.
pub const READ_BUDGET: usize = 2;

const RECV_BUFFER_LEN: usize = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    AwaitingStatus,
    AwaitingName,
    Done,
}

/// Two-phase exchange with one target.
pub struct ProbeSession<T: Transport> {
    transport: T,
    state: ProbeState,
    name_sent: bool,
    status_reply: Option<NbnsReply>,
    name_reply: Option<NbnsReply>,
}

impl<T: Transport> ProbeSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ProbeState::AwaitingStatus,
            name_sent: false,
            status_reply: None,
            name_reply: None,
        }
    }

    /// Sends the status request and reads replies until a name reply arrives.
    ///
    /// The session ends in [`ProbeState::Done`] whatever the outcome.
    pub async fn run(&mut self) -> Result<(), ProbeError> {
        let outcome = self.exchange().await;
        self.state = ProbeState::Done;
        outcome
    }

    async fn exchange(&mut self) -> Result<(), ProbeError> {
        self.start().await?;
        for _ in 0..READ_BUDGET {
            if self.read_reply().await? {
                return Ok(());
            }
        }
        Err(ProbeError::ExchangeIncomplete)
    }

    /// Sends the node status request.
    pub async fn start(&mut self) -> Result<(), ProbeError> {
        let request = nbns::create_status_request(rand::random());
        self.transport.send(&request).await?;
        self.state = ProbeState::AwaitingStatus;
        Ok(())
    }

    /// Reads one datagram. Returns `true` once a name reply has arrived.
    ///
    /// Empty and undecodable datagrams are dropped and return `false`.
    pub async fn read_reply(&mut self) -> Result<bool, ProbeError> {
        let mut buf = [0u8; RECV_BUFFER_LEN];
        let len: usize = self.transport.recv(&mut buf).await?;
        let reply: NbnsReply = match nbns::parse_reply(&buf[..len]) {
            Ok(reply) if !reply.is_empty() => reply,
            Ok(_) => {
                debug!("discarding reply without records");
                return Ok(false);
            }
            Err(e) => {
                debug!("discarding malformed reply: {e}");
                return Ok(false);
            }
        };

        match (reply.record_type(), self.state) {
            (RecordType::NodeStatus, ProbeState::AwaitingName) => {
                debug!("repeated status reply, name query already sent");
                self.status_reply = Some(reply);
                Ok(false)
            }
            (RecordType::NodeStatus, _) => {
                self.on_status_reply(reply).await?;
                Ok(false)
            }
            (RecordType::Name, state) => {
                if state == ProbeState::AwaitingStatus {
                    debug!("name reply arrived before any status reply");
                }
                debug!(
                    "name reply for {:?} with {} addresses",
                    reply.answer_name(),
                    reply.addresses.len()
                );
                self.name_reply = Some(reply);
                self.state = ProbeState::Done;
                Ok(true)
            }
            (RecordType::Other(code), _) => {
                debug!("ignoring reply of type {code:#06x}");
                Ok(false)
            }
        }
    }

    async fn on_status_reply(&mut self, reply: NbnsReply) -> Result<(), ProbeError> {
        let host_name: String = reply.host_name();
        debug!("status reply with {} names, host {host_name:?}", reply.names.len());
        self.status_reply = Some(reply);

        if self.name_sent {
            return Ok(());
        }

        self.name_sent = true;
        let request = nbns::create_name_request(rand::random(), &host_name);
        self.transport.send(&request).await?;
        self.state = ProbeState::AwaitingName;
        Ok(())
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    pub fn name_sent(&self) -> bool {
        self.name_sent
    }

    pub fn status_reply(&self) -> Option<&NbnsReply> {
        self.status_reply.as_ref()
    }

    pub fn name_reply(&self) -> Option<&NbnsReply> {
        self.name_reply.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
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
