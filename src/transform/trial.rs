use crate::entities::trial::Trial;
use crate::sources::clinicaltrials::CtGovStudy;

pub(crate) const UNKNOWN_SPONSOR: &str = "Unknown";
pub(crate) const NO_LOCATION: &str = "Not Provided";

fn clean_opt(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn first_facility(study: &CtGovStudy) -> Option<String> {
    let locations = study
        .protocol_section
        .as_ref()
        .and_then(|p| p.contacts_locations_module.as_ref())
        .and_then(|m| m.locations.as_deref())?;

    clean_opt(locations.first()?.facility.as_deref())
}

/// Flattens one study into a dashboard row.
///
/// Never fails: a missing sponsor becomes `"Unknown"`, a missing facility
/// becomes `"Not Provided"`, and missing dates stay `None`.
pub fn from_ctgov_study(study: &CtGovStudy) -> Trial {
    let p = study.protocol_section.as_ref();
    let id = p
        .and_then(|p| p.identification_module.as_ref())
        .and_then(|m| m.nct_id.as_deref())
        .unwrap_or_default()
        .trim()
        .to_string();
    let title = p
        .and_then(|p| p.identification_module.as_ref())
        .and_then(|m| m.brief_title.as_deref())
        .unwrap_or_default()
        .trim()
        .to_string();
    let sponsor = p
        .and_then(|p| p.sponsor_collaborators_module.as_ref())
        .and_then(|m| m.lead_sponsor.as_ref())
        .and_then(|s| clean_opt(s.name.as_deref()))
        .unwrap_or_else(|| UNKNOWN_SPONSOR.to_string());
    let status = p
        .and_then(|p| p.status_module.as_ref())
        .and_then(|m| m.overall_status.as_deref())
        .unwrap_or_default()
        .trim()
        .to_string();
    let start_date = p
        .and_then(|p| p.status_module.as_ref())
        .and_then(|m| m.start_date_struct.as_ref())
        .and_then(|d| clean_opt(d.date.as_deref()));
    let completion_date = p
        .and_then(|p| p.status_module.as_ref())
        .and_then(|m| m.completion_date_struct.as_ref())
        .and_then(|d| clean_opt(d.date.as_deref()));
    let location = first_facility(study).unwrap_or_else(|| NO_LOCATION.to_string());

    Trial {
        id,
        title,
        sponsor,
        status,
        start_date,
        completion_date,
        location,
    }
}

pub fn from_ctgov_studies(studies: &[CtGovStudy]) -> Vec<Trial> {
    studies.iter().map(from_ctgov_study).collect()
}
