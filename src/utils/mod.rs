//! Internal helpers for query-string handling.

pub(crate) mod query;
