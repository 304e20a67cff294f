use std::{io, time::Duration};

use thiserror::Error;

/// Why a probe produced no result. None of these are fatal to the caller.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to open UDP association: {0}")]
    Connect(#[source] io::Error),

    #[error("probe cancelled before the association was opened")]
    Cancelled,

    #[error("failed to send request: {0}")]
    Send(#[source] io::Error),

    #[error("failed to read reply: {0}")]
    Recv(#[source] io::Error),

    #[error("no answer within {0:?}")]
    Timeout(Duration),

    /// The target answered, but never with a name query reply.
    #[error("exchange incomplete")]
    ExchangeIncomplete,
}

impl ProbeError {
    /// Hard socket failures, as opposed to cancellation or an unfinished exchange.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ProbeError::Connect(_) | ProbeError::Send(_) | ProbeError::Recv(_) | ProbeError::Timeout(_)
        )
    }
}
