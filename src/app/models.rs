//! Data models for school directory records
//!
//! This module contains the core data structures for representing school
//! records and their deduplicated reference entities, along with the
//! classification code enumerations resolved during ingest.

pub mod agency;
pub mod city;
pub mod classification;
pub mod school;

// Re-export key types for convenience
pub use agency::Agency;
pub use city::City;
pub use classification::{LocaleCode, SchoolStatus, UrbanLocale};
pub use school::{Coordinate, School};
