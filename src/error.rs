use crate::capability::Capability;
use thiserror::Error;

/// Result alias used by every fallible operation in the crate
pub type Result<T> = std::result::Result<T, SeqError>;

/// Failures reported by operators and terminal operations
///
/// User callbacks are never wrapped: a panicking predicate unwinds through
/// the library untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The sequence had no elements at all
    #[error("sequence contains no elements")]
    NoElements,

    /// No element satisfied the predicate
    #[error("sequence contains no matching element")]
    NoMatch,

    /// More than one element where exactly one was required
    #[error("sequence contains more than one element")]
    MoreThanOneElement,

    /// More than one element satisfied the predicate
    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,

    /// Positional access past the end of the sequence
    #[error("index {index} is out of range")]
    IndexOutOfRange { index: usize },

    /// A generator argument does not fit the element type
    #[error("argument is out of range: {0}")]
    ArgumentOutOfRange(&'static str),

    /// An O(1) accessor was used on a cursor that lacks the capability
    #[error("cursor does not support constant-time {0}")]
    Unsupported(Capability),

    /// `cast` could not convert an element
    #[error("cannot convert element of type `{from}` to `{to}`")]
    Conversion {
        from: &'static str,
        to: &'static str,
    },
}

/// Report a failing operation and hand the error back to the caller
pub(crate) fn fail<T>(operation: &'static str, error: SeqError) -> Result<T> {
    #[cfg(feature = "tracing")]
    tracing::trace!(operation, %error, "sequence operation failed");
    #[cfg(not(feature = "tracing"))]
    let _ = operation;
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SeqError::NoElements.to_string(),
            "sequence contains no elements"
        );
        assert_eq!(
            SeqError::IndexOutOfRange { index: 7 }.to_string(),
            "index 7 is out of range"
        );
        assert_eq!(
            SeqError::Unsupported(Capability::Indexer).to_string(),
            "cursor does not support constant-time indexing"
        );
    }

    #[test]
    fn test_conversion_message_names_both_types() {
        let error = SeqError::Conversion {
            from: "i64",
            to: "u8",
        };
        let message = error.to_string();
        assert!(message.contains("`i64`"));
        assert!(message.contains("`u8`"));
    }

    #[test]
    fn test_fail_returns_error_unchanged() {
        let result: Result<()> = fail("first", SeqError::NoMatch);
        assert_eq!(result, Err(SeqError::NoMatch));
    }

    #[cfg(feature = "tracing")]
    mod traced {
        use super::*;
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        /// Collects the `operation` field of every event
        #[derive(Clone, Default)]
        struct Operations(Arc<Mutex<Vec<String>>>);

        struct OperationField(Option<String>);

        impl Visit for OperationField {
            fn record_str(&mut self, field: &Field, value: &str) {
                if field.name() == "operation" {
                    self.0 = Some(value.to_string());
                }
            }

            fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
        }

        impl<S: tracing::Subscriber> Layer<S> for Operations {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let mut field = OperationField(None);
                event.record(&mut field);
                if let (Some(operation), Ok(mut seen)) = (field.0, self.0.lock()) {
                    seen.push(operation);
                }
            }
        }

        #[test]
        fn test_fail_emits_trace_event() {
            let operations = Operations::default();
            let subscriber = tracing_subscriber::registry().with(operations.clone());
            let result: Result<()> = tracing::subscriber::with_default(subscriber, || {
                fail("element_at", SeqError::IndexOutOfRange { index: 3 })
            });
            assert_eq!(result, Err(SeqError::IndexOutOfRange { index: 3 }));
            assert_eq!(*operations.0.lock().unwrap(), vec!["element_at".to_string()]);
        }
    }
}
