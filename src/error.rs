use std::collections::TryReserveError;
use std::fmt;

/// Errors reported by the fallible list and queue operations.
///
/// Whenever one of these is returned, the list is left exactly as it was
/// before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// Allocating a list node (or the ghost node) failed.
    NodeAllocation { size: usize },
    /// Copying a payload into owned storage failed.
    PayloadAllocation(TryReserveError),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::NodeAllocation { size } => {
                write!(f, "failed to allocate a list node of {size} bytes")
            }
            QueueError::PayloadAllocation(_) => write!(f, "failed to copy the payload"),
        }
    }
}

impl std::error::Error for QueueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueueError::NodeAllocation { .. } => None,
            QueueError::PayloadAllocation(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for QueueError {
    fn from(err: TryReserveError) -> Self {
        QueueError::PayloadAllocation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::QueueError;
    use std::error::Error;

    #[test]
    fn display_and_source() {
        let err = QueueError::NodeAllocation { size: 24 };
        assert_eq!(err.to_string(), "failed to allocate a list node of 24 bytes");
        assert!(err.source().is_none());

        let reserve = String::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = QueueError::from(reserve);
        assert_eq!(err.to_string(), "failed to copy the payload");
        assert!(err.source().is_some());
    }
}
