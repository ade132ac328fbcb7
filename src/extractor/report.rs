use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::{ExtractedFragments, FragmentOutcome};

/// Per-fragment outcome summary carried in the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentStatus {
    pub name: String,
    pub found: bool,
    pub bytes: usize,
}

impl FragmentStatus {
    pub fn of(name: &str, outcome: &FragmentOutcome) -> Self {
        Self {
            name: name.to_string(),
            found: outcome.is_found(),
            bytes: outcome.text.len(),
        }
    }
}

/// Summary of one extraction run. Warnings list the anchors that were not
/// found; they do not make the run a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub input: String,
    pub output: String,
    pub fragments: Vec<FragmentStatus>,
    pub warnings: Vec<String>,
    pub output_bytes: usize,
    pub extraction_time: DateTime<Utc>,
    pub duration: Duration,
}

impl ExtractionReport {
    pub fn new(
        input: &Path,
        output: &Path,
        fragments: &ExtractedFragments,
        output_bytes: usize,
        duration: Duration,
    ) -> Self {
        Self {
            input: input.display().to_string(),
            output: output.display().to_string(),
            fragments: fragments.statuses(),
            warnings: fragments
                .warnings()
                .into_iter()
                .map(str::to_string)
                .collect(),
            output_bytes,
            extraction_time: Utc::now(),
            duration,
        }
    }

    pub fn all_found(&self) -> bool {
        self.fragments.iter().all(|f| f.found)
    }
}
