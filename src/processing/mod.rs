//! Processing pipeline: normalization, similarity scoring, skill matching

pub mod analyzer;
pub mod normalizer;
pub mod similarity;
pub mod skills;
