//! The unified finding model shared by analyzers and providers.

use serde::{Deserialize, Serialize};

/// One reported defect location, in provider-agnostic form.
///
/// The path is relative to the configured source root and the line is
/// 1-based. A defect whose location cannot be resolved to a concrete line
/// never becomes an `Issue` — it is dropped inside the engine, because a
/// finding without a line cannot be anchored to a diff position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub source_path: String,
    pub line: u32,
    pub message: String,
}

impl Issue {
    pub fn new(source_path: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Issue {
            source_path: source_path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Ordinal severity scale, lower = more severe.
///
/// Matches the five-level priority scale of bug-pattern engines; the
/// configured threshold is an ordinal cut on this scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    High,
    Normal,
    Low,
    Experimental,
    Ignore,
}

impl Severity {
    /// The 1-based ordinal (1 = `High` … 5 = `Ignore`).
    pub fn ordinal(self) -> u8 {
        match self {
            Severity::High => 1,
            Severity::Normal => 2,
            Severity::Low => 3,
            Severity::Experimental => 4,
            Severity::Ignore => 5,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal); `None` outside 1..=5.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Severity::High),
            2 => Some(Severity::Normal),
            3 => Some(Severity::Low),
            4 => Some(Severity::Experimental),
            5 => Some(Severity::Ignore),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Normal => write!(f, "normal"),
            Severity::Low => write!(f, "low"),
            Severity::Experimental => write!(f, "experimental"),
            Severity::Ignore => write!(f, "ignore"),
        }
    }
}
