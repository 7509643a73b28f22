use std::borrow::Cow;

use rust_embed::RustEmbed;

use super::TrialSource;
use super::clinicaltrials::{self, CtGovStudy};
use crate::error::TrialsError;

#[derive(RustEmbed)]
#[folder = "data/"]
struct EmbeddedData;

const DATASET_PATH: &str = "trials.json";

/// The sample dataset compiled into the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    studies: Vec<CtGovStudy>,
}

impl EmbeddedSource {
    pub fn new() -> Result<Self, TrialsError> {
        let Some(asset) = EmbeddedData::get(DATASET_PATH) else {
            return Err(TrialsError::Dataset {
                source_name: "embedded".into(),
                message: format!("{DATASET_PATH} is not bundled"),
            });
        };

        let bytes: Cow<'static, [u8]> = asset.data;
        let studies = clinicaltrials::parse_studies(&bytes).map_err(|source| {
            TrialsError::DatasetJson {
                source_name: "embedded".into(),
                source,
            }
        })?;
        Ok(Self { studies })
    }

    pub fn len(&self) -> usize {
        self.studies.len()
    }
}

impl TrialSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded"
    }

    fn fetch_all(&self) -> Result<Vec<CtGovStudy>, TrialsError> {
        Ok(self.studies.clone())
    }
}
