//! PDF processing layer
//!
//! This module turns in-memory PDF bytes into per-page slide records using
//! lopdf for parsing, text extraction, and raw stream access.

mod extract;

pub use extract::{extract_slides, Slide, SlideImage};
