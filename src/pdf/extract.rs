//! Extraction core: PDF bytes to slide records

use crate::error::{Error, Result};
use base64::Engine;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use serde::Serialize;
use std::collections::HashSet;

/// One record per PDF page: the page text plus its embedded images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// "Page N", 1-indexed in document order
    pub title: String,
    /// Plain text as returned by the library's extraction, verbatim
    pub text: String,
    /// Embedded images in the document's enumeration order for this page
    pub images: Vec<SlideImage>,
}

/// An embedded raster image in its original stored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideImage {
    /// Base64 encoding of the image stream bytes exactly as embedded
    pub b64: String,
    /// Extension hint derived from the stream's filter chain
    pub ext: String,
}

/// Convert raw PDF bytes into one slide per page, in document order.
///
/// The document is owned by this call and dropped on every exit path. Any
/// failure aborts the whole conversion; a partial slide list is never
/// returned.
pub fn extract_slides(data: &[u8]) -> Result<Vec<Slide>> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    let doc = Document::load_mem(data)?;
    let mut slides = Vec::new();

    for (&page_no, &page_id) in doc.get_pages().iter() {
        let text = doc.extract_text(&[page_no])?;
        let images = collect_page_images(&doc, page_id)?;
        slides.push(Slide {
            title: format!("Page {}", page_no),
            text,
            images,
        });
    }

    Ok(slides)
}

/// Enumerate the image XObjects reachable from a page's resources, in
/// dictionary order, recursing through Form XObjects. An image referenced
/// by several pages is re-emitted for each page; only the form recursion is
/// cycle-guarded.
fn collect_page_images(doc: &Document, page_id: ObjectId) -> Result<Vec<SlideImage>> {
    let mut images = Vec::new();
    let mut visited_forms = HashSet::new();

    if let Some(resources) = page_resources(doc, page_id)? {
        collect_from_resources(doc, resources, &mut visited_forms, &mut images)?;
    }

    Ok(images)
}

/// A page's `/Resources`, honoring inheritance from ancestor `/Pages` nodes.
/// The ancestor walk is bounded so a cyclic `/Parent` chain in a malformed
/// document cannot hang the request.
fn page_resources<'a>(doc: &'a Document, page_id: ObjectId) -> Result<Option<&'a Dictionary>> {
    const MAX_TREE_DEPTH: usize = 64;

    let mut dict = doc.get_dictionary(page_id)?;
    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(resources) = dict.get(b"Resources") {
            return Ok(Some(resolve(doc, resources)?.as_dict()?));
        }
        match dict.get(b"Parent") {
            Ok(parent) => dict = doc.get_dictionary(parent.as_reference()?)?,
            Err(_) => return Ok(None),
        }
    }
    Ok(None)
}

fn collect_from_resources(
    doc: &Document,
    resources: &Dictionary,
    visited_forms: &mut HashSet<ObjectId>,
    images: &mut Vec<SlideImage>,
) -> Result<()> {
    let xobjects = match resources.get(b"XObject") {
        Ok(entry) => resolve(doc, entry)?.as_dict()?,
        Err(_) => return Ok(()),
    };

    for (_, value) in xobjects.iter() {
        let Ok(id) = value.as_reference() else {
            continue;
        };
        let Ok(stream) = doc.get_object(id).and_then(Object::as_stream) else {
            continue;
        };

        match stream.dict.get(b"Subtype").and_then(Object::as_name) {
            Ok(b"Image") => images.push(encode_image(doc, stream)),
            Ok(b"Form") => {
                if visited_forms.insert(id) {
                    if let Ok(entry) = stream.dict.get(b"Resources") {
                        let nested = resolve(doc, entry)?.as_dict()?;
                        collect_from_resources(doc, nested, visited_forms, images)?;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Base64-encode an image stream's stored bytes. No resize, recompression,
/// or transcoding happens here, so the embedded bytes round-trip exactly.
fn encode_image(doc: &Document, stream: &Stream) -> SlideImage {
    let engine = base64::engine::general_purpose::STANDARD;
    SlideImage {
        b64: engine.encode(&stream.content),
        ext: extension_hint(doc, stream).to_string(),
    }
}

/// Extension hint for an image stream, taken from the terminal entry of its
/// filter chain. Streams holding raw or flate-compressed sample arrays have
/// no container format in the document and are reported as "raw".
fn extension_hint(doc: &Document, stream: &Stream) -> &'static str {
    let filter = stream
        .dict
        .get(b"Filter")
        .ok()
        .and_then(|f| resolve(doc, f).ok());

    let terminal = match filter {
        Some(Object::Name(name)) => Some(name.as_slice()),
        Some(Object::Array(filters)) => filters.iter().rev().find_map(|f| match f {
            Object::Name(name) => Some(name.as_slice()),
            _ => None,
        }),
        _ => None,
    };

    extension_for_filter(terminal)
}

fn extension_for_filter(filter: Option<&[u8]>) -> &'static str {
    match filter {
        Some(b"DCTDecode") => "jpeg",
        Some(b"JPXDecode") => "jpx",
        Some(b"JBIG2Decode") => "jb2",
        Some(b"CCITTFaxDecode") => "ccitt",
        _ => "raw",
    }
}

/// Follow an indirect reference to its target object.
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Result<&'a Object> {
    match object {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        _ => Ok(object),
    }
}
