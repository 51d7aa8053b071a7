use crate::domain::star::{SimulationResult, StarParameters};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Failures surfaced by one simulation request. The orchestrator receives
/// these as values, never as panics.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    RequestFailed(String),
    HttpStatus(u16, String),
    MalformedPayload(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GatewayError::RequestFailed(msg) => write!(f, "request failed: {}", msg),
            GatewayError::HttpStatus(status, text) => {
                write!(f, "HTTP error: {} - {}", status, text)
            }
            GatewayError::MalformedPayload(msg) => write!(f, "malformed payload: {}", msg),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Port to the remote stellar-evolution simulation service.
/// Exactly one attempt per invocation; no retry, no cancellation.
#[allow(async_fn_in_trait)]
pub trait SimulationGateway {
    async fn simulate(&self, parameters: &StarParameters) -> GatewayResult<SimulationResult>;
}
