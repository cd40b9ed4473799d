//! Native result model of the wrapped engines.
//!
//! Both engine variants are launched as external tools emitting a SARIF
//! 2.1.0 report; this is the subset of that format the engines read back.
//! One `SarifResult` is one defect, potentially with several locations.

use serde::{Deserialize, Serialize};

use crate::finding::Severity;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLog {
    #[serde(default)]
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRun {
    #[serde(default)]
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    pub message: SarifMessage,
    #[serde(default)]
    pub locations: Vec<SarifLocation>,
    #[serde(default)]
    pub properties: Option<SarifProperties>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    #[serde(default)]
    pub physical_location: Option<SarifPhysicalLocation>,
    #[serde(default)]
    pub logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    #[serde(default)]
    pub artifact_location: Option<SarifArtifactLocation>,
    #[serde(default)]
    pub region: Option<SarifRegion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    #[serde(default)]
    pub start_line: Option<u32>,
    #[serde(default)]
    pub end_line: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLogicalLocation {
    #[serde(default)]
    pub fully_qualified_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifProperties {
    #[serde(default)]
    pub priority: Option<u8>,
}

impl SarifResult {
    /// Severity on the ordinal scale. An explicit numeric `priority`
    /// property wins; otherwise the SARIF level is mapped, and results
    /// without either land on `Experimental`.
    pub fn severity(&self) -> Severity {
        if let Some(priority) = self.properties.as_ref().and_then(|p| p.priority) {
            if let Some(severity) = Severity::from_ordinal(priority) {
                return severity;
            }
        }
        match self.level.as_deref() {
            Some("error") => Severity::High,
            Some("warning") => Severity::Normal,
            Some("note") => Severity::Low,
            _ => Severity::Experimental,
        }
    }
}

impl SarifLocation {
    /// The 1-based line of this location, preferring the region's end line
    /// the way bug-pattern annotations report it.
    pub fn line(&self) -> Option<u32> {
        let region = self.physical_location.as_ref()?.region.as_ref()?;
        region.end_line.or(region.start_line)
    }
}
