//! Dashboard entities and the listing workflow over them.

pub(crate) mod status;
pub(crate) mod trial;
