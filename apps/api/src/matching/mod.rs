// Matching Service: turns a (CV, job description) pair into a scored outcome.
// Pure computation; no I/O happens in this module.

pub mod analyzer;
pub mod skills;
