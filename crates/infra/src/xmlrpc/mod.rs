//! XML-RPC wire codec
//!
//! Request serialization and response parsing for the XML-RPC dialect the
//! ERP speaks. Values map onto [`kivu_domain::FieldValue`] in both
//! directions; faults are classified into the domain error taxonomy here
//! so no caller ever string-matches a fault text again.

pub mod decode;
pub mod encode;

use kivu_domain::KivuError;

pub use decode::parse_response;
pub use encode::method_call;

/// A `<fault>` payload from an XML-RPC response.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub code: i64,
    pub message: String,
}

/// Outcome of parsing an XML-RPC `<methodResponse>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Value(kivu_domain::FieldValue),
    Fault(Fault),
}

/// Classify an XML-RPC fault into a domain error.
///
/// The ERP reports a referential-restrict delete failure only through the
/// fault text, so the word "restrict" is the signal for that case. Access
/// and authentication faults are likewise recognized by their wording.
/// Everything else becomes a generic write failure carrying the fault text.
pub fn fault_to_error(fault: Fault) -> KivuError {
    let lowered = fault.message.to_lowercase();

    if lowered.contains("restrict") {
        KivuError::RestrictViolation(fault.message)
    } else if lowered.contains("access denied") || lowered.contains("authenticat") {
        KivuError::Auth(fault.message)
    } else {
        KivuError::Write(format!("ERP fault {}: {}", fault.code, fault.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault(message: &str) -> Fault {
        Fault { code: 2, message: message.to_string() }
    }

    #[test]
    fn restrict_fault_maps_to_restrict_violation() {
        let err = fault_to_error(fault(
            "odoo.exceptions.ValidationError: ondelete='restrict' prevents deletion",
        ));
        assert!(matches!(err, KivuError::RestrictViolation(_)));
    }

    #[test]
    fn access_denied_fault_maps_to_auth() {
        let err = fault_to_error(fault("Access Denied"));
        assert!(matches!(err, KivuError::Auth(_)));
    }

    #[test]
    fn other_faults_map_to_write_with_code() {
        let err = fault_to_error(fault("Invalid field 'x_nope' on model 'x_sites'"));
        match err {
            KivuError::Write(msg) => {
                assert!(msg.contains("ERP fault 2"));
                assert!(msg.contains("x_nope"));
            }
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
