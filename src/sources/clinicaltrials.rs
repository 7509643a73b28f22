//! ClinicalTrials.gov v2 study shapes.
//!
//! Only the fields the dashboard reads are modeled. Every field is optional and
//! tolerates `null`, so partial or hand-written records still deserialize;
//! unknown fields are ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtGovStudy {
    pub protocol_section: Option<CtGovProtocolSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtGovProtocolSection {
    pub identification_module: Option<CtGovIdentificationModule>,
    pub status_module: Option<CtGovStatusModule>,
    pub sponsor_collaborators_module: Option<CtGovSponsorCollaboratorsModule>,
    pub contacts_locations_module: Option<CtGovContactsLocationsModule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtGovIdentificationModule {
    pub nct_id: Option<String>,
    pub brief_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtGovStatusModule {
    pub overall_status: Option<String>,
    pub start_date_struct: Option<CtGovDateStruct>,
    pub completion_date_struct: Option<CtGovDateStruct>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CtGovDateStruct {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtGovSponsorCollaboratorsModule {
    pub lead_sponsor: Option<CtGovSponsor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CtGovSponsor {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CtGovContactsLocationsModule {
    pub locations: Option<Vec<CtGovLocation>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CtGovLocation {
    pub facility: Option<String>,
}

/// v2 search response; `studies` is required so other objects are rejected.
#[derive(Debug, Deserialize)]
struct CtGovSearchResponse {
    studies: Vec<CtGovStudy>,
}

/// Parses a dataset file: either a bare array of studies or a v2 search response.
pub fn parse_studies(bytes: &[u8]) -> Result<Vec<CtGovStudy>, serde_json::Error> {
    let is_object = bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{');
    if is_object {
        Ok(serde_json::from_slice::<CtGovSearchResponse>(bytes)?.studies)
    } else {
        serde_json::from_slice::<Vec<CtGovStudy>>(bytes)
    }
}
