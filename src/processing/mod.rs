//! Scoring core: similarity primitives, matchers and the score aggregator

pub mod analyzer;
pub mod dictionaries;
pub mod education_matcher;
pub mod experience_matcher;
pub mod profile;
pub mod similarity;
pub mod skill_matcher;
pub mod soft_skills;
