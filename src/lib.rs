//! # contact_intake - Contact Form Intake Service
//!
//! Accepts contact submissions from an HTML form or a CSV upload, screens
//! them for injection-like input, sanitizes and validates every field, and
//! stores accepted contacts in PostgreSQL.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Records, field rules, validation errors
//! - **Application**: Intake pipeline, use cases and the repository port
//! - **Infrastructure**: PostgreSQL persistence
//! - **API**: HTTP handlers and middleware
//!
//! ## Example Usage
//!
//! ```
//! use contact_intake::application::intake::{IntakeConfig, IntakePipeline};
//! use contact_intake::domain::entities::RawRecord;
//!
//! let pipeline = IntakePipeline::new(IntakeConfig::default());
//! let record = RawRecord::new("Jane", "Doe99", "jane@example.com", "0851234567", "1a2b3c");
//!
//! let clean = pipeline.process(&record).unwrap();
//! assert_eq!(clean.postal_code(), "1A2B3C");
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, intake, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
