//! `localtube-core` -- media discovery and static path resolution.
//!
//! Everything in here is synchronous and free of HTTP concerns so it can be
//! exercised directly against a directory on disk.

pub mod error;
pub mod media;
pub mod site;
