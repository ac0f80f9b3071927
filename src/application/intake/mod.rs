//! Contact intake pipeline
//!
//! `RawRecord -> ThreatDetector -> Sanitizer -> Validator -> CleanRecord`
//!
//! The threat detector screens raw values and rejects the whole record on
//! any hit. Surviving records are sanitized and every field rule is
//! evaluated, producing either a [`CleanRecord`](crate::domain::entities::CleanRecord)
//! or the full ordered list of field errors.

pub mod config;
pub mod pipeline;
pub mod sanitizers;
pub mod threat_detector;
pub mod validators;


pub use config::IntakeConfig;
pub use pipeline::IntakePipeline;
pub use sanitizers::Sanitizer;
pub use threat_detector::ThreatDetector;
pub use validators::Validator;
