use std::{
    io,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    time::Duration,
};

use async_trait::async_trait;
use nbprobe_common::config::ProbeConfig;
use tokio::{net::UdpSocket, time::timeout};
use tracing::debug;

use crate::error::ProbeError;

/// A connected datagram association to one target.
///
/// Every call is bounded by the implementation's deadline.
#[async_trait]
pub trait Transport: Send {
    async fn send(&mut self, payload: &[u8]) -> Result<(), ProbeError>;

    /// Reads one datagram into `buf` and returns its length.
    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, ProbeError>;
}

pub struct UdpTransport {
    socket: UdpSocket,
    deadline: Duration,
}

impl UdpTransport {
    /// Opens an ephemeral socket connected to `target`.
    ///
    /// The stop signal is only consulted here; once the association exists the
    /// per-call deadline is the only bound.
    pub async fn connect(target: SocketAddr, cfg: &ProbeConfig) -> Result<Self, ProbeError> {
        if cfg.stop.is_triggered() {
            return Err(ProbeError::Cancelled);
        }

        let local: SocketAddr = match target.ip() {
            IpAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            IpAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        let socket = UdpSocket::bind(local).await.map_err(ProbeError::Connect)?;

        match timeout(cfg.timeout, socket.connect(target)).await {
            Ok(res) => res.map_err(ProbeError::Connect)?,
            Err(_) => {
                return Err(ProbeError::Connect(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "connect timed out",
                )));
            }
        }

        debug!("opened association to {target}");
        Ok(Self {
            socket,
            deadline: cfg.timeout,
        })
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send(&mut self, payload: &[u8]) -> Result<(), ProbeError> {
        match timeout(self.deadline, self.socket.send(payload)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(ProbeError::Send(e)),
            Err(_elapsed) => Err(ProbeError::Timeout(self.deadline)),
        }
    }

    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, ProbeError> {
        match timeout(self.deadline, self.socket.recv(buf)).await {
            Ok(Ok(len)) => Ok(len),
            Ok(Err(e)) => Err(ProbeError::Recv(e)),
            Err(_elapsed) => Err(ProbeError::Timeout(self.deadline)),
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
