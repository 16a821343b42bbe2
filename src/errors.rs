//!
//! Common Errors.
//!
use std::fmt;

/// Sentinel for the conventional "no matching record" query error.
///
/// Hosts that surface a typed not-found error should wrap this sentinel (or
/// attach it as a cause) so that [`is_record_not_found`] can recognize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordNotFound;

impl fmt::Display for RecordNotFound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "record not found")
    }
}

impl std::error::Error for RecordNotFound {}

/// Whether `err` is, or wraps anywhere in its cause chain, the
/// record-not-found sentinel.
pub fn is_record_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.downcast_ref::<RecordNotFound>().is_some())
}

#[cfg(test)]
mod test {
    use super::{is_record_not_found, RecordNotFound};

    #[test]
    fn test_direct_sentinel() {
        let err = anyhow::Error::new(RecordNotFound);
        assert!(is_record_not_found(&err));
    }

    #[test]
    fn test_wrapped_sentinel() {
        let err = anyhow::Error::new(RecordNotFound).context("select t_system_user");
        assert!(is_record_not_found(&err));
    }

    #[test]
    fn test_unrelated_error() {
        let err = anyhow::anyhow!("connection reset");
        assert!(!is_record_not_found(&err));
    }
}
