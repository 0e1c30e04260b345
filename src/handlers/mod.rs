//! Entry-point adapters over the shared extraction core
//!
//! Both adapters run the same pipeline (decode the base64 body, extract
//! slides) and differ only in response and error-mapping policy: the HTTP
//! adapter maps every failure to a 500 envelope with a stable message, the
//! event adapter maps none and lets the typed error propagate to its host.

pub mod event;
pub mod http;

use crate::pdf::Slide;
use serde::Serialize;

/// Success envelope shared by both entry points.
#[derive(Debug, Clone, Serialize)]
pub struct SlidesResponse {
    pub slides: Vec<Slide>,
}
