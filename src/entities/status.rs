use serde::Serialize;

/// Overall-status codes used by ClinicalTrials.gov, in display order.
pub const TRIAL_STATUSES: &[(&str, &str)] = &[
    ("RECRUITING", "Recruiting"),
    ("COMPLETED", "Completed"),
    ("ACTIVE_NOT_RECRUITING", "Active, not recruiting"),
    ("NOT_YET_RECRUITING", "Not yet recruiting"),
    ("SUSPENDED", "Suspended"),
    ("TERMINATED", "Terminated"),
    ("ENROLLING_BY_INVITATION", "Enrolling by Invitation"),
    ("WITHHELD", "Withheld"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrialStatus {
    pub code: &'static str,
    pub label: &'static str,
}

pub fn statuses() -> Vec<TrialStatus> {
    TRIAL_STATUSES
        .iter()
        .map(|&(code, label)| TrialStatus { code, label })
        .collect()
}

/// Display label for a status code; unknown codes are returned unchanged.
pub fn status_label(code: &str) -> &str {
    TRIAL_STATUSES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(status_label("ACTIVE_NOT_RECRUITING"), "Active, not recruiting");
        assert_eq!(status_label("WITHHELD"), "Withheld");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(status_label("UNKNOWN"), "UNKNOWN");
        assert_eq!(status_label("recruiting"), "recruiting");
    }

    #[test]
    fn statuses_keep_catalogue_order() {
        let all = statuses();
        assert_eq!(all.len(), TRIAL_STATUSES.len());
        assert_eq!(all[0].code, "RECRUITING");
        assert_eq!(all[all.len() - 1].code, "WITHHELD");
    }
}
