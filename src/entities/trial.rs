use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TrialsError;
use crate::sources::TrialSource;

pub(crate) const DEFAULT_PAGE: usize = 1;
pub(crate) const DEFAULT_LIMIT: usize = 10;

/// A display-ready trial row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    pub id: String,
    pub title: String,
    pub sponsor: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrialSortKey {
    #[default]
    Id,
    Title,
    Sponsor,
    Status,
    StartDate,
    CompletionDate,
    Location,
}

impl TrialSortKey {
    pub const ALL: [TrialSortKey; 7] = [
        Self::Id,
        Self::Title,
        Self::Sponsor,
        Self::Status,
        Self::StartDate,
        Self::CompletionDate,
        Self::Location,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Sponsor => "sponsor",
            Self::Status => "status",
            Self::StartDate => "startDate",
            Self::CompletionDate => "completionDate",
            Self::Location => "location",
        }
    }

    /// The field value used for ordering; missing dates compare as `""`.
    fn value(self, trial: &Trial) -> &str {
        match self {
            Self::Id => &trial.id,
            Self::Title => &trial.title,
            Self::Sponsor => &trial.sponsor,
            Self::Status => &trial.status,
            Self::StartDate => trial.start_date.as_deref().unwrap_or_default(),
            Self::CompletionDate => trial.completion_date.as_deref().unwrap_or_default(),
            Self::Location => &trial.location,
        }
    }
}

impl fmt::Display for TrialSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrialSortKey {
    type Err = TrialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" | "nctId" | "nct_id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "sponsor" => Ok(Self::Sponsor),
            "status" => Ok(Self::Status),
            "startDate" | "start_date" => Ok(Self::StartDate),
            "completionDate" | "completion_date" => Ok(Self::CompletionDate),
            "location" => Ok(Self::Location),
            other => Err(TrialsError::InvalidArgument(format!(
                "Unknown sort key '{other}'. Expected one of: {}",
                Self::ALL
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Lenient form used by the HTTP endpoint: only `desc` sorts descending.
    /// Unrecognized values such as `sideways` sort ascending, like the default.
    pub fn from_param(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = TrialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(TrialsError::InvalidArgument(format!(
                "Unknown sort direction '{other}'. Expected asc or desc"
            ))),
        }
    }
}

/// Parameters for one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialQuery {
    pub page: usize,
    pub limit: usize,
    pub status: String,
    pub search: String,
    pub sort_by: TrialSortKey,
    pub sort_direction: SortDirection,
}

impl Default for TrialQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            status: String::new(),
            search: String::new(),
            sort_by: TrialSortKey::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl TrialQuery {
    /// Builds a query from raw `key=value` pairs.
    ///
    /// The first occurrence of a key wins. Bad numbers fall back to defaults,
    /// non-positive numbers clamp to 1, and unknown sort keys sort by id.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        use crate::utils::query::{first_param, parse_count};

        let page = parse_count(first_param(pairs, "page"), DEFAULT_PAGE);
        let limit = parse_count(first_param(pairs, "limit"), DEFAULT_LIMIT);
        let status = first_param(pairs, "status").unwrap_or_default().to_string();
        let search = first_param(pairs, "search").unwrap_or_default().to_string();
        let sort_by = first_param(pairs, "sort_by")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.parse::<TrialSortKey>().unwrap_or_default())
            .unwrap_or_default();
        let sort_direction = first_param(pairs, "sort_direction")
            .map(SortDirection::from_param)
            .unwrap_or_default();

        Self {
            page,
            limit,
            status,
            search,
            sort_by,
            sort_direction,
        }
    }

    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.status.is_empty() {
            parts.push(format!("status={}", self.status));
        }
        if !self.search.is_empty() {
            parts.push(format!("search={}", self.search));
        }
        parts.push(format!(
            "sort={} {}",
            self.sort_by,
            self.sort_direction.as_str()
        ));
        parts.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_records: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialPage {
    pub trials: Vec<Trial>,
    pub pagination: Pagination,
}

fn matches_status(trial: &Trial, status: &str) -> bool {
    status.is_empty() || trial.status == status
}

fn matches_search(trial: &Trial, needle: &str) -> bool {
    needle.is_empty()
        || trial.title.to_lowercase().contains(needle)
        || trial.sponsor.to_lowercase().contains(needle)
}

/// Filters, sorts, and pages `records`.
///
/// A page past the end returns no rows but still reports the totals.
pub fn search_page(records: &[Trial], query: &TrialQuery) -> TrialPage {
    let limit = query.limit.max(1);
    let needle = query.search.to_lowercase();

    let mut matched = records
        .iter()
        .filter(|t| matches_status(t, &query.status))
        .filter(|t| matches_search(t, &needle))
        .collect::<Vec<_>>();

    // `sort_by` is stable, so ties keep source order in both directions.
    matched.sort_by(|a, b| {
        let ordering = query.sort_by.value(a).cmp(query.sort_by.value(b));
        query.sort_direction.apply(ordering)
    });

    let total_records = matched.len();
    let start = query.page.saturating_sub(1).saturating_mul(limit);
    let trials = matched
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect::<Vec<_>>();

    TrialPage {
        trials,
        pagination: Pagination {
            total_records,
            total_pages: total_records.div_ceil(limit),
            current_page: query.page,
            limit,
        },
    }
}

/// Runs the full listing pipeline against a source: fetch, flatten, then page.
pub fn list(source: &dyn TrialSource, query: &TrialQuery) -> Result<TrialPage, TrialsError> {
    let studies = source.fetch_all()?;
    let records = crate::transform::trial::from_ctgov_studies(&studies);
    let page = search_page(&records, query);
    tracing::debug!(
        source = source.name(),
        query = %query.summary(),
        page = query.page,
        returned = page.trials.len(),
        total = page.pagination.total_records,
        "listed trials"
    );
    Ok(page)
}
