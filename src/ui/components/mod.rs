//! Shared rendering components

pub mod footer;
pub mod header;
pub mod notices;
