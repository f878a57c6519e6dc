//! Rule-based resume analysis

pub mod tables;
pub mod skills;
pub mod experience;
pub mod field;
pub mod roles;
pub mod matching;
pub mod scoring;
pub mod industries;
pub mod recommendations;
pub mod ats_feedback;
pub mod analyzer;
