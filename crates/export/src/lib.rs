//! Artifact export for the Idea Forge CLI.
//!
//! Pure, synchronous string building: artifacts serialize to pretty JSON
//! (round-trips deep-equal) or to fixed-template Markdown documents
//! (deterministic for a given artifact). Filenames derive from the project
//! name plus a per-artifact suffix.

pub mod filename;
pub mod json;
pub mod markdown;

pub use filename::{export_filename, sanitize_project_name};
pub use json::to_json_string;
