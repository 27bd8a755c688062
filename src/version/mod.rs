//! Version parsing and comparison layer
//!
//! # Modules
//!
//! - [`semver`]: the bounded version parser, comparator and canonical
//!   serializer

pub mod semver;

pub use semver::Version;
