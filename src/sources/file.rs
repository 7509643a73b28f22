use std::path::Path;

use super::TrialSource;
use super::clinicaltrials::{self, CtGovStudy};
use crate::error::TrialsError;

/// A JSON dataset read once from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    studies: Vec<CtGovStudy>,
}

impl FileSource {
    pub fn load(path: &Path) -> Result<Self, TrialsError> {
        let name = path.display().to_string();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(TrialsError::NotFound {
                    entity: "dataset".into(),
                    id: name,
                    suggestion: format!(
                        "Check --data or {}, or omit both to use the bundled dataset.",
                        super::DATA_PATH_ENV
                    ),
                });
            }
            Err(err) => return Err(err.into()),
        };

        Self::from_json(name, &text)
    }

    fn from_json(name: String, text: &str) -> Result<Self, TrialsError> {
        if text.trim().is_empty() {
            return Err(TrialsError::Dataset {
                source_name: name,
                message: "file is empty".into(),
            });
        }
        let studies = clinicaltrials::parse_studies(text.as_bytes()).map_err(|source| {
            TrialsError::DatasetJson {
                source_name: name.clone(),
                source,
            }
        })?;
        Ok(Self { name, studies })
    }

    pub fn len(&self) -> usize {
        self.studies.len()
    }
}

impl TrialSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_all(&self) -> Result<Vec<CtGovStudy>, TrialsError> {
        Ok(self.studies.clone())
    }
}
