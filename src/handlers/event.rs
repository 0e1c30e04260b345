//! Event adapter: cloud-function shaped entry point

use crate::error::Result;
use crate::handlers::SlidesResponse;
use crate::{pdf, source};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound event mapping. The raw `body` value is the base64 PDF text;
/// there is no JSON wrapping of the body itself.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub body: String,
}

/// Structured invocation result in the common serverless shape.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// JSON-encoded success payload, same shape as the HTTP variant's body
    pub body: String,
}

/// Run one invocation. No error mapping happens here: failures return the
/// typed error and the hosting entry point decides how to fault.
pub fn handle(event: &Event) -> Result<EventResponse> {
    let data = source::decode_body(&event.body)?;
    let slides = pdf::extract_slides(&data)?;
    let body = serde_json::to_string(&SlidesResponse { slides })?;

    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    Ok(EventResponse {
        status_code: 200,
        headers,
        body,
    })
}
