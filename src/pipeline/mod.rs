//! Classification pipeline seam

mod fixed;

pub use fixed::FixedPipeline;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AnalysisMode, ClassificationResult};

/// Produces a classification for one analysis mode.
///
/// Implementations must be cheap to share across requests; the router holds
/// one behind an `Arc` for the lifetime of the server.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn run(&self, mode: AnalysisMode) -> Result<ClassificationResult>;
}
