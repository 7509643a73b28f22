//! Read-only trial data sources.
//!
//! The dashboard never reaches into a global dataset; handlers and CLI commands
//! receive a [`TrialSource`] and call [`TrialSource::fetch_all`] per request.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::TrialsError;

pub mod clinicaltrials;
pub(crate) mod embedded;
pub(crate) mod file;

use clinicaltrials::CtGovStudy;

pub(crate) const DATA_PATH_ENV: &str = "TRIALS_DASHBOARD_DATA";

/// A read-only collection of raw study records.
pub trait TrialSource: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns every study in source order.
    fn fetch_all(&self) -> Result<Vec<CtGovStudy>, TrialsError>;
}

pub(crate) fn env_path(env_var: &str) -> Option<PathBuf> {
    std::env::var(env_var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Opens the dataset for a command.
///
/// An explicit path wins, then `TRIALS_DASHBOARD_DATA`, then the dataset bundled
/// into the binary.
pub fn open(data: Option<&Path>) -> Result<Arc<dyn TrialSource>, TrialsError> {
    let path = data.map(Path::to_path_buf).or_else(|| env_path(DATA_PATH_ENV));
    match path {
        Some(path) => {
            let source = file::FileSource::load(&path)?;
            tracing::info!(
                path = %path.display(),
                studies = source.len(),
                "loaded trial dataset from file"
            );
            Ok(Arc::new(source))
        }
        None => {
            let source = embedded::EmbeddedSource::new()?;
            tracing::debug!(studies = source.len(), "using embedded trial dataset");
            Ok(Arc::new(source))
        }
    }
}
