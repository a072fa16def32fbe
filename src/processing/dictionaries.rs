//! Process-wide keyword dictionaries
//!
//! Built once on first use and never mutated. Classification is plain substring
//! containment, case-insensitive, so "Python 3" is technical and "team leadership"
//! is a soft skill.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Language, tooling and platform names marking a skill as technical.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "programming", "software", "development",
    "java", "python", "go", "golang",
    "javascript", "react", "node", "aws",
    "cloud", "docker", "kubernetes", "git",
    "database", "sql", "nosql", "api",
];

/// Interpersonal and management terms marking a skill as soft.
pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "communication", "leadership", "teamwork",
    "problem solving", "analytical", "creative",
    "interpersonal", "organization", "time management",
    "adaptability", "collaboration", "management",
    "critical thinking", "emotional intelligence",
    "conflict resolution", "negotiation", "presentation",
    "decision making", "flexibility", "multitasking",
    "self-motivated", "work ethic", "attention to detail",
    "team player", "project management", "mentoring",
    "strategic thinking", "coaching", "public speaking",
];

/// Action verbs that indicate soft skills exercised on the job.
pub const EXPERIENCE_INDICATORS: &[&str] = &[
    "led", "managed", "coordinated",
    "collaborated", "mentored", "trained",
    "facilitated", "organized", "presented",
    "negotiated", "resolved", "improved",
];

const STOP_WORDS: &[&str] = &["the", "and", "or", "in", "on", "at", "to", "for", "with", "by"];

static TECHNICAL_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| build_matcher(TECHNICAL_KEYWORDS));
static SOFT_SKILL_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| build_matcher(SOFT_SKILL_KEYWORDS));
static INDICATOR_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| build_matcher(EXPERIENCE_INDICATORS));
static STOP_WORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

fn build_matcher(patterns: &[&str]) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns)
        .expect("Invalid keyword dictionary")
}

/// True when the skill contains any technical keyword.
pub fn is_technical(skill: &str) -> bool {
    TECHNICAL_MATCHER.is_match(skill)
}

/// True when the skill contains any soft-skill keyword.
pub fn is_soft_skill(skill: &str) -> bool {
    SOFT_SKILL_MATCHER.is_match(skill)
}

/// True when the text contains one of the experience action verbs.
pub fn has_experience_indicator(text: &str) -> bool {
    INDICATOR_MATCHER.is_match(text)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}
