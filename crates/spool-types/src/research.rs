use serde::{Deserialize, Serialize};

/// Outcome of a research call, as stored alongside the thread it produced.
///
/// Serialized untagged so the on-disk layout stays what history files have
/// always contained: a report-shaped object, or an error-shaped one for
/// entries written by versions that persisted failed research.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResearchRecord {
    Report(ResearchReport),
    Failure(ResearchFailure),
}

/// A well-formed research result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchReport {
    pub analysis: String,
    pub key_findings: Vec<String>,

    /// Filled only when grounded search was used. A missing field is an
    /// empty list, never an error.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
}

/// Error-shaped research payload found in older history entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchFailure {
    pub error: String,
    pub details: String,
}

impl ResearchRecord {
    /// The report, if this record holds one.
    pub fn report(&self) -> Option<&ResearchReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Failure(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl From<ResearchReport> for ResearchRecord {
    fn from(report: ResearchReport) -> Self {
        Self::Report(report)
    }
}
