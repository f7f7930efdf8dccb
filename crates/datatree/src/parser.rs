//! Builds a [`DataTree`] from XML text by driving a quick-xml reader.
use crate::error::TreeError;
use crate::tree::{DataTree, NodeId, NodeKind};
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event as XmlEvent};
use std::borrow::Cow;

/// Decodes raw packet bytes to text using the encoding announced by a BOM or
/// the XML declaration. Without either, the bytes must be UTF-8.
pub fn decode_document(xml: &[u8]) -> Result<Cow<'_, str>, TreeError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    // The first event is the declaration when there is one.
    reader.read_event_into(&mut buf)?;
    let decoder = reader.decoder();
    log::trace!("Decoding data packet as {}", decoder.encoding().name());
    decoder.decode(xml).map_err(|e| TreeError::Encoding(e.to_string()))
}

/// Parses a complete XML document. The XML declaration is dropped (the
/// writer emits its own); everything else is kept.
pub fn parse_document(source: &str) -> Result<DataTree, TreeError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();

    let mut tree = DataTree::new();
    let mut open: Vec<NodeId> = vec![tree.document()];

    loop {
        let parent = *open.last().ok_or_else(|| TreeError::Unbalanced("empty element stack".into()))?;
        match reader.read_event_into(&mut buf)? {
            XmlEvent::Start(e) => {
                let id = tree.append(parent, element_kind(e.into_owned(), false)?);
                open.push(id);
            }
            XmlEvent::Empty(e) => {
                tree.append(parent, element_kind(e.into_owned(), true)?);
            }
            XmlEvent::End(e) => {
                if open.len() <= 1 {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                    return Err(TreeError::Unbalanced(format!("unexpected closing tag </{}>", name)));
                }
                open.pop();
            }
            XmlEvent::Text(e) => {
                let raw_text = std::str::from_utf8(e.as_ref())?;
                let text = unescape(raw_text)?;
                tree.append_text(parent, &text);
            }
            XmlEvent::GeneralRef(e) => {
                let name = std::str::from_utf8(&e)?;
                let resolved = resolve_reference(name)?;
                tree.append_text(parent, &resolved);
            }
            XmlEvent::CData(e) => {
                let text = std::str::from_utf8(&e)?.to_string();
                tree.append(parent, NodeKind::CData(text));
            }
            XmlEvent::Comment(e) => {
                let text = std::str::from_utf8(e.as_ref())?.to_string();
                tree.append(parent, NodeKind::Comment(text));
            }
            XmlEvent::PI(e) => {
                let text = std::str::from_utf8(&e)?.to_string();
                tree.append(parent, NodeKind::ProcessingInstruction(text));
            }
            XmlEvent::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    if open.len() != 1 {
        return Err(TreeError::Unbalanced(format!("{} element(s) left open at end of input", open.len() - 1)));
    }
    log::debug!("Parsed data packet into {} nodes", tree.len());
    Ok(tree)
}

fn element_kind(start: BytesStart<'static>, self_closing: bool) -> Result<NodeKind, TreeError> {
    let local_name = std::str::from_utf8(start.local_name().as_ref())?.to_string();
    Ok(NodeKind::Element { start, local_name, self_closing })
}

/// Resolves the body of an `&...;` reference: character references and the
/// five predefined XML entities.
fn resolve_reference(name: &str) -> Result<String, TreeError> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        return value
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or_else(|| TreeError::UnknownEntity(name.to_string()));
    }
    resolve_predefined_entity(name)
        .map(str::to_string)
        .ok_or_else(|| TreeError::UnknownEntity(name.to_string()))
}
