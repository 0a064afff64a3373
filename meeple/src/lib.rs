//! Board game collections with profile compatibility scoring.
//!
//! Users flag catalog games as favorite, wishlist or owned. Comparing two
//! users' flagged games per category yields an overlap percent and an
//! overall compatibility tier.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;
