//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API. They are kept
//! separate from the domain models in `src/models/` and the scoring types in
//! `src/matching/`, and handle serialization and conversion.

pub mod collections;
pub mod compatibility;
pub mod games;

pub use collections::*;
pub use compatibility::*;
pub use games::*;
