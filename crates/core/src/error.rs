//! Error taxonomy for a review run.
//!
//! Three families, all fatal: configuration problems are caught before any
//! network or analysis call, provider problems surface during remote reads or
//! writes, and analysis problems abort the run before anything is published.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// Missing or out-of-range configuration. Never raised after the first
    /// network or analyzer call.
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),

    /// The hosting provider could not be reached or refused the request.
    /// Not retried here; the surrounding CI job may rerun the whole step.
    #[error("provider unavailable: {context}")]
    ProviderUnavailable {
        context: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The wrapped analyzer engine failed to execute or produced an
    /// unreadable report. No partial findings are published.
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}

impl ReviewError {
    pub fn config(msg: impl Into<String>) -> Self {
        ReviewError::ConfigurationInvalid(msg.into())
    }

    pub fn provider(context: impl Into<String>, source: reqwest::Error) -> Self {
        ReviewError::ProviderUnavailable {
            context: context.into(),
            source: Some(source),
        }
    }

    pub fn provider_status(context: impl Into<String>) -> Self {
        ReviewError::ProviderUnavailable {
            context: context.into(),
            source: None,
        }
    }
}
