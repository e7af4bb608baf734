//! Utility modules.

/// Timestamp parsing and formatting helpers.
pub mod datetime;

/// Tolerant deserializers for loosely typed record fields.
pub mod lenient;

/// Log truncation for response bodies.
pub mod log_sanitizer;
