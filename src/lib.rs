//! pdf-slides-server Library
//!
//! This crate converts base64-encoded PDFs into JSON slide decks: one slide
//! per page, carrying the page's extracted text and its embedded images in
//! their original stored bytes. Two entry points share one extraction core:
//! - an HTTP endpoint (`POST /slides`) that maps every failure to a 500
//!   envelope with a stable message
//! - an event-driven handler in the serverless invocation shape, whose
//!   failures propagate as typed errors

pub mod config;
pub mod error;
pub mod handlers;
pub mod pdf;
pub mod server;
pub mod source;

pub use config::Config;
pub use error::{Error, Result};
pub use handlers::{event::Event, event::EventResponse, SlidesResponse};
pub use pdf::{extract_slides, Slide, SlideImage};
pub use server::{app, run_server};
