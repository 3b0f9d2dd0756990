//! Core scanning primitives
//!
//! This module contains the fundamental building blocks for indexing:
//! - Markers: the fixed element and status vocabulary
//! - Scanner: SIMD-accelerated delimiter detection using memchr
//! - Attributes: tolerant attribute parsing for opening tags

pub mod attributes;
pub mod markers;
pub mod scanner;
