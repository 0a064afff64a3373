pub mod collections;
pub mod compatibility;
pub mod games;
pub(crate) mod health;

pub use health::health_check;
