//! Presentation helpers for converted messages.

pub mod grouping;
