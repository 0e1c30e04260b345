//! In-memory PDF builders shared by the integration tests.
//!
//! Documents are assembled with lopdf and serialized to bytes, so the tests
//! exercise the same load path as real uploads without binary fixtures.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

pub struct PdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    font_id: ObjectId,
    kids: Vec<Object>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        PdfBuilder {
            doc,
            pages_id,
            font_id,
            kids: Vec::new(),
        }
    }

    /// Add an image XObject and return its id. The bytes are stored as the
    /// stream content exactly as given.
    pub fn add_image(&mut self, bytes: &[u8], filter: Option<&str>) -> ObjectId {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => 8,
            "Height" => 8,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        if let Some(name) = filter {
            dict.set("Filter", Object::Name(name.as_bytes().to_vec()));
        }
        self.doc.add_object(Stream::new(dict, bytes.to_vec()))
    }

    /// Add a Form XObject whose own resources reference the given image.
    pub fn add_form_with_image(&mut self, image_id: ObjectId) -> ObjectId {
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        100.into(),
                        0.into(),
                        0.into(),
                        100.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im1".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let form_dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![0.into(), 0.into(), 100.into(), 100.into()],
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im1" => Object::Reference(image_id) },
            },
        };
        self.doc
            .add_object(Stream::new(form_dict, content.encode().unwrap()))
    }

    /// Add a page showing optional text plus the named XObjects (images or
    /// forms), drawn in the given order.
    pub fn add_page(&mut self, text: Option<&str>, xobjects: &[(&str, ObjectId)]) {
        let mut ops = Vec::new();
        if let Some(text) = text {
            ops.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ]);
        }

        let mut xobject_dict = Dictionary::new();
        for (name, id) in xobjects {
            xobject_dict.set(name.as_bytes().to_vec(), Object::Reference(*id));
            ops.extend([
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        64.into(),
                        0.into(),
                        0.into(),
                        64.into(),
                        72.into(),
                        72.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ]);
        }

        let content = Content { operations: ops };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let mut resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(self.font_id) },
        };
        if !xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(xobject_dict));
        }

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(self.pages_id),
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Dictionary(resources),
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        self.kids.push(Object::Reference(page_id));
    }

    /// Serialize the document to bytes.
    pub fn build(mut self) -> Vec<u8> {
        let count = self.kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(self.pages_id),
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        self.doc.save_to(&mut out).unwrap();
        out
    }
}

/// One text-only page per entry.
pub fn text_pages_pdf(texts: &[&str]) -> Vec<u8> {
    let mut builder = PdfBuilder::new();
    for text in texts {
        builder.add_page(Some(text), &[]);
    }
    builder.build()
}

/// A single page carrying the given images, each `(bytes, filter)`.
pub fn image_page_pdf(text: &str, images: &[(&[u8], Option<&str>)]) -> Vec<u8> {
    let mut builder = PdfBuilder::new();
    let ids: Vec<ObjectId> = images
        .iter()
        .map(|(bytes, filter)| builder.add_image(bytes, *filter))
        .collect();
    let named: Vec<(String, ObjectId)> = ids
        .iter()
        .enumerate()
        .map(|(index, id)| (format!("Im{}", index + 1), *id))
        .collect();
    let refs: Vec<(&str, ObjectId)> = named.iter().map(|(n, id)| (n.as_str(), *id)).collect();
    builder.add_page(Some(text), &refs);
    builder.build()
}
