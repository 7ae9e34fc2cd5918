use thiserror::Error;

/// Errors raised while turning a raw performance into points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// The raw value is not a number or a valid time string
    #[error("malformed performance '{raw}'")]
    MalformedPerformance { raw: String },

    /// The value parsed but cannot be scored (negative distance, zero time)
    #[error("invalid performance {value}: {reason}")]
    InvalidPerformance { value: f64, reason: &'static str },

    /// Event key is not part of a combined-event table
    #[error("unknown event '{event}' for {table}")]
    UnknownEvent { event: String, table: &'static str },

    /// A scorer error tagged with the event it came from
    #[error("{event}: {source}")]
    Event {
        event: String,
        #[source]
        source: Box<ScoringError>,
    },
}

impl ScoringError {
    pub(crate) fn malformed(raw: impl Into<String>) -> Self {
        ScoringError::MalformedPerformance { raw: raw.into() }
    }

    pub(crate) fn for_event(self, event: &str) -> Self {
        ScoringError::Event {
            event: event.to_string(),
            source: Box::new(self),
        }
    }
}
