pub(crate) mod query;
pub(crate) mod run;
pub(crate) mod stats;
