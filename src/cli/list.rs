use std::path::PathBuf;

use clap::Args;

use crate::entities::trial::{self, DEFAULT_LIMIT, SortDirection, TrialQuery, TrialSortKey};
use crate::error::TrialsError;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Exact overall status code (e.g. RECRUITING, COMPLETED)
    #[arg(long, default_value = "")]
    pub status: String,

    /// Case-insensitive text matched against title and sponsor
    #[arg(short = 'q', long, default_value = "")]
    pub search: String,

    /// Sort column: id, title, sponsor, status, startDate, completionDate, location
    #[arg(long, default_value = "id")]
    pub sort_by: String,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub sort_direction: String,

    /// Dataset JSON file (default: $TRIALS_DASHBOARD_DATA, then the bundled dataset)
    #[arg(long)]
    pub data: Option<PathBuf>,
}

impl ListArgs {
    /// Strict conversion: the CLI rejects what the HTTP endpoint would coerce.
    pub(crate) fn to_query(&self) -> Result<TrialQuery, TrialsError> {
        if self.page == 0 {
            return Err(TrialsError::InvalidArgument(
                "--page must be at least 1".into(),
            ));
        }
        if self.limit == 0 {
            return Err(TrialsError::InvalidArgument(
                "--limit must be at least 1".into(),
            ));
        }

        Ok(TrialQuery {
            page: self.page,
            limit: self.limit,
            status: self.status.trim().to_string(),
            search: self.search.trim().to_string(),
            sort_by: self.sort_by.parse::<TrialSortKey>()?,
            sort_direction: self.sort_direction.parse::<SortDirection>()?,
        })
    }
}

pub fn run(args: ListArgs, json: bool) -> Result<String, TrialsError> {
    let query = args.to_query()?;
    let source = crate::sources::open(args.data.as_deref())?;
    let page = trial::list(source.as_ref(), &query)?;

    if json {
        crate::render::json::to_pretty(&page)
    } else {
        crate::render::markdown::trial_page_markdown(&page, &query)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> ListArgs {
        let argv = ["trials-dashboard", "list"].iter().chain(args.iter());
        match Cli::try_parse_from(argv).expect("parse").command {
            Commands::List(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    fn dataset() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let studies = (1..=25)
            .map(|i| {
                let status = if i % 5 == 0 { "COMPLETED" } else { "RECRUITING" };
                serde_json::json!({
                    "protocolSection": {
                        "identificationModule": {
                            "nctId": format!("NCT{i:08}"),
                            "briefTitle": format!("Study {i}")
                        },
                        "statusModule": {
                            "overallStatus": status
                        }
                    }
                })
            })
            .collect::<Vec<_>>();
        file.write_all(serde_json::to_string(&studies).expect("json").as_bytes())
            .expect("write dataset");
        file.flush().expect("flush dataset");
        file
    }

    #[test]
    fn defaults_match_the_http_defaults() {
        let query = parse(&[]).to_query().expect("query");
        assert_eq!(query, TrialQuery::default());
    }

    #[test]
    fn rejects_zero_limit_and_page() {
        let err = parse(&["--limit", "0"]).to_query().expect_err("limit 0");
        assert!(err.to_string().contains("--limit must be at least 1"));

        let err = parse(&["--page", "0"]).to_query().expect_err("page 0");
        assert!(err.to_string().contains("--page must be at least 1"));
    }

    #[test]
    fn rejects_unknown_sort_settings() {
        let err = parse(&["--sort-by", "phase"]).to_query().expect_err("bad key");
        assert!(err.to_string().contains("Unknown sort key"));

        let err = parse(&["--sort-direction", "up"])
            .to_query()
            .expect_err("bad direction");
        assert!(err.to_string().contains("Unknown sort direction"));
    }

    #[test]
    fn third_page_from_file_dataset_as_json() {
        let file = dataset();
        let path = file.path().display().to_string();
        let out = run(parse(&["--page", "3", "--data", path.as_str()]), true).expect("list");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");

        assert_eq!(value["trials"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["pagination"]["totalPages"], 3);
        assert_eq!(value["pagination"]["currentPage"], 3);
        assert_eq!(value["trials"][0]["sponsor"], "Unknown");
    }

    #[test]
    fn status_filter_renders_markdown_with_footer() {
        let file = dataset();
        let path = file.path().display().to_string();
        let out = run(
            parse(&["--status", "COMPLETED", "--sort-direction", "desc", "--data", path.as_str()]),
            false,
        )
        .expect("list");

        assert!(out.contains("Query: status=COMPLETED, sort=id desc"));
        assert!(out.contains("NCT ID ↓"));
        assert!(out.contains("[NCT00000025](https://clinicaltrials.gov/study/NCT00000025)"));
        assert!(!out.contains("NCT00000024"));
        assert!(out.contains("Showing 1-5 of 5 results."));
    }
}
