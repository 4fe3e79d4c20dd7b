//! CLI command implementations.

pub(crate) mod ask;
pub(crate) mod compare;
pub(crate) mod dashboard;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod overview;
pub(crate) mod report;
