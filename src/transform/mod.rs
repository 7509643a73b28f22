//! Transform adapters from upstream record shapes into dashboard entities.

pub(crate) mod trial;
