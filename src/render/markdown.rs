use std::sync::OnceLock;

use minijinja::{Environment, context};

use crate::entities::status::{TrialStatus, status_label};
use crate::entities::trial::{Pagination, SortDirection, TrialPage, TrialQuery, TrialSortKey};
use crate::error::TrialsError;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

const TABLE_COLUMNS: [(TrialSortKey, &str); 5] = [
    (TrialSortKey::Id, "NCT ID"),
    (TrialSortKey::Title, "Title"),
    (TrialSortKey::Status, "Status"),
    (TrialSortKey::Sponsor, "Sponsor"),
    (TrialSortKey::StartDate, "Start Date"),
];

pub fn pagination_footer(pagination: &Pagination, returned: usize) -> String {
    let total = pagination.total_records;
    let offset = pagination
        .current_page
        .saturating_sub(1)
        .saturating_mul(pagination.limit);

    if returned == 0 {
        if total > 0 && pagination.current_page > pagination.total_pages {
            return format!(
                "Showing 0 of {total} results. Page {} is past the last page ({}).",
                pagination.current_page, pagination.total_pages
            );
        }
        return format!("Showing 0 of {total} results.");
    }

    let start = offset.saturating_add(1);
    let end = offset.saturating_add(returned);
    if pagination.current_page < pagination.total_pages {
        let next_page = pagination.current_page.saturating_add(1);
        format!("Showing {start}-{end} of {total} results. Use --page {next_page} for more.")
    } else if start == end {
        format!("Showing {end} of {total} results.")
    } else {
        format!("Showing {start}-{end} of {total} results.")
    }
}

fn with_pagination_footer(mut body: String, pagination_footer: &str) -> String {
    let footer = pagination_footer.trim();
    if footer.is_empty() || body.contains(footer) {
        return body;
    }
    if !body.ends_with('\n') {
        body.push('\n');
    }
    body.push('\n');
    body.push_str(footer);
    body.push('\n');
    body
}

fn env() -> Result<&'static Environment<'static>, TrialsError> {
    if let Some(env) = ENV.get() {
        return Ok(env);
    }

    let mut env = Environment::new();
    env.add_filter("truncate", |s: String, max_bytes: usize| -> String {
        if s.len() <= max_bytes {
            return s;
        }
        if max_bytes == 0 {
            return "…".to_string();
        }
        let mut boundary = max_bytes;
        while boundary > 0 && !s.is_char_boundary(boundary) {
            boundary -= 1;
        }
        let mut out = s[..boundary].trim_end().to_string();
        out.push('…');
        out
    });
    // Table cells cannot carry pipes or line breaks.
    env.add_filter("md_cell", |s: String| -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ").replace('|', "\\|")
    });
    env.add_filter("status_label", |code: String| -> String {
        let code = code.trim();
        if code.is_empty() {
            return "-".to_string();
        }
        status_label(code).to_string()
    });

    env.add_template(
        "trial_page.md.j2",
        include_str!("../../templates/trial_page.md.j2"),
    )?;
    env.add_template(
        "statuses.md.j2",
        include_str!("../../templates/statuses.md.j2"),
    )?;

    let _ = ENV.set(env);
    Ok(ENV
        .get()
        .expect("ENV should be initialized by the time this is reached"))
}

fn column_headers(query: &TrialQuery) -> Vec<String> {
    TABLE_COLUMNS
        .iter()
        .map(|(key, label)| {
            if *key == query.sort_by {
                let arrow = match query.sort_direction {
                    SortDirection::Asc => "↑",
                    SortDirection::Desc => "↓",
                };
                format!("{label} {arrow}")
            } else {
                (*label).to_string()
            }
        })
        .collect()
}

pub fn trial_page_markdown(page: &TrialPage, query: &TrialQuery) -> Result<String, TrialsError> {
    let tmpl = env()?.get_template("trial_page.md.j2")?;
    let body = tmpl.render(context! {
        summary => query.summary(),
        columns => column_headers(query),
        count => page.trials.len(),
        trials => &page.trials,
    })?;
    let footer = pagination_footer(&page.pagination, page.trials.len());
    Ok(with_pagination_footer(body, &footer))
}

pub fn statuses_markdown(statuses: &[TrialStatus]) -> Result<String, TrialsError> {
    let tmpl = env()?.get_template("statuses.md.j2")?;
    Ok(tmpl.render(context! {
        statuses => statuses,
    })?)
}
