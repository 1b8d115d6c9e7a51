//! Core types for WLDS

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::Error;

/// Coarse category of a detected subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubjectType {
    Bird,
}

/// Input modality an analysis runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Audio,
    Image,
    /// Audio and image combined
    Fusion,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [AnalysisMode::Audio, AnalysisMode::Image, AnalysisMode::Fusion];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Audio => "audio",
            AnalysisMode::Image => "image",
            AnalysisMode::Fusion => "fusion",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audio" => Ok(AnalysisMode::Audio),
            "image" => Ok(AnalysisMode::Image),
            "fusion" => Ok(AnalysisMode::Fusion),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Outcome of a single analysis
///
/// Field order is the wire order: species, type, confidence, distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    /// Display name of the predicted species
    #[schema(example = "Indian Sparrow")]
    pub species: String,
    /// Coarse category of the subject
    #[serde(rename = "type")]
    pub kind: SubjectType,
    /// Model certainty in [0, 1]
    pub confidence: f64,
    /// Estimated distance to the subject
    pub distance: f64,
}

impl ClassificationResult {
    pub fn new(species: impl Into<String>, kind: SubjectType, confidence: f64, distance: f64) -> Self {
        Self {
            species: species.into(),
            kind,
            confidence,
            distance,
        }
    }
}
