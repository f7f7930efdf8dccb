//! Access to the XFA `datasets` packet of a PDF container.
//!
//! This crate wraps a `lopdf::Document` and provides:
//! - Lookup of `/Root /AcroForm /XFA` and the `datasets` part inside the XFA
//!   array, dereferencing indirect objects along the way
//! - Decoding of the packet stream into XML bytes
//! - Replacement of the packet content and re-serialization of the container
//!
//! Every object other than the `datasets` stream is written back as loaded.

mod error;

pub use error::ContainerError;

use lopdf::{Document, Object, ObjectId};

/// Name of the XFA part that carries the form data.
const DATASETS_PART: &str = "datasets";

/// A loaded PDF that is known to carry an XFA `datasets` packet.
#[derive(Debug)]
pub struct XfaContainer {
    document: Document,
    datasets_id: ObjectId,
}

impl XfaContainer {
    /// Parses the container and locates its `datasets` packet.
    ///
    /// Returns `Ok(None)` when the document has no AcroForm, no XFA entry, or
    /// no `datasets` part: it is simply not an XFA document. Bytes that do not
    /// parse as a PDF are an error.
    pub fn load(bytes: &[u8]) -> Result<Option<Self>, ContainerError> {
        let document = Document::load_mem(bytes)?;
        let Some(datasets_id) = find_datasets(&document)? else {
            return Ok(None);
        };
        log::debug!("Found XFA datasets stream at object {:?}", datasets_id);
        Ok(Some(Self { document, datasets_id }))
    }

    /// The decoded XML bytes of the `datasets` packet.
    pub fn datasets_xml(&self) -> Result<Vec<u8>, ContainerError> {
        let stream = self.document.get_object(self.datasets_id)?.as_stream()?;
        if stream.dict.has(b"Filter") {
            Ok(stream.decompressed_content()?)
        } else {
            Ok(stream.content.clone())
        }
    }

    /// Replaces the packet content in its original stream slot. A stream that
    /// was filtered before is Flate-compressed again.
    pub fn replace_datasets(&mut self, xml: Vec<u8>) -> Result<(), ContainerError> {
        let stream = self.document.get_object_mut(self.datasets_id)?.as_stream_mut()?;
        let was_filtered = stream.dict.has(b"Filter");
        stream.set_plain_content(xml);
        if was_filtered {
            stream.compress()?;
        }
        Ok(())
    }

    /// Serializes the whole container into a new, complete PDF buffer.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, ContainerError> {
        let mut output = Vec::new();
        self.document.save_to(&mut output)?;
        log::debug!("Re-serialized container ({} bytes)", output.len());
        Ok(output)
    }

    pub fn datasets_id(&self) -> ObjectId {
        self.datasets_id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Walks `/Root /AcroForm /XFA` and returns the object id of the `datasets`
/// stream. The XFA array interleaves part names and stream references:
/// `[(preamble) 5 0 R (config) 6 0 R (datasets) 7 0 R ...]`.
fn find_datasets(doc: &Document) -> Result<Option<ObjectId>, ContainerError> {
    let Ok(root) = doc.trailer.get(b"Root") else {
        log::debug!("Trailer has no /Root entry");
        return Ok(None);
    };
    let (_, catalog) = doc.dereference(root)?;
    let catalog = catalog.as_dict()?;

    let Ok(acroform) = catalog.get(b"AcroForm") else {
        log::debug!("Catalog has no /AcroForm entry");
        return Ok(None);
    };
    let (_, acroform) = doc.dereference(acroform)?;
    let Ok(acroform) = acroform.as_dict() else {
        return Ok(None);
    };

    let Ok(xfa) = acroform.get(b"XFA") else {
        log::debug!("AcroForm has no /XFA entry");
        return Ok(None);
    };
    let (_, xfa) = doc.dereference(xfa)?;
    let Ok(parts) = xfa.as_array() else {
        log::debug!("/XFA is not a part array, no datasets packet to address");
        return Ok(None);
    };

    for pair in parts.chunks(2) {
        let [name, part] = pair else {
            continue;
        };
        if part_name(name).as_deref() != Some(DATASETS_PART) {
            continue;
        }
        let Object::Reference(id) = part else {
            return Err(ContainerError::InlineDatasets);
        };
        let (resolved_id, target) = doc.dereference(part)?;
        target.as_stream()?;
        return Ok(Some(resolved_id.unwrap_or(*id)));
    }
    Ok(None)
}

fn part_name(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) | Object::Name(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        _ => None,
    }
}
