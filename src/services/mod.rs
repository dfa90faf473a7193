//! Service layer for the affair tracker.
//!
//! This module contains the business logic for:
//! - Identifier normalization (`IdentifierNormalizer`)
//! - Record retrieval from network or cache (`AffairSource`)
//! - Recency classification and status extraction (`RecencyClassifier`, `extract_status`)

mod affairs;
mod normalizer;
mod status;

pub use affairs::{AffairSource, FetchedAffair};
pub use normalizer::IdentifierNormalizer;
pub use status::{NO_STATUS, RecencyClassifier, extract_status};
