pub mod error;
pub mod network;
pub mod probe;

pub use error::ProbeError;
