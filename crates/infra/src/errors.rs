//! Infrastructure error translation
//!
//! Low-level transport and parser errors are folded into the domain error
//! taxonomy here, at the boundary closest to the wire, so higher layers
//! pattern-match on `KivuError` variants instead of inspecting library
//! error types.

use kivu_domain::KivuError;
use thiserror::Error;

/// Errors raised by infrastructure libraries before translation.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl From<InfraError> for KivuError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Http(e) => KivuError::Network(format!("HTTP request failed: {e}")),
            InfraError::Xml(e) => {
                KivuError::InvalidResponse(format!("Malformed XML-RPC payload: {e}"))
            }
        }
    }
}
