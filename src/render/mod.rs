//! Output rendering for CLI commands.

pub(crate) mod json;
pub(crate) mod markdown;
