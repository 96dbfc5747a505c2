// Resume analysis API: upload → extract → score → persist.
// Scoring goes through `crate::analysis::analyze` only; handlers never score inline.

pub mod handlers;
