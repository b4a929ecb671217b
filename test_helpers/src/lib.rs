//! Test helpers shared across crates.
//!
//! - [`secrets`]: resolvers that record or fail lookups.
//! - [`nodes`]: terse builders and queries for render trees.
//! - [`figment`]: staging settings files and variables in a `figment::Jail`.

pub mod figment;
pub mod nodes;
pub mod secrets;
