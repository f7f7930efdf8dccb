//! Serializes a [`DataTree`] back into UTF-8 XML with a declaration.
use crate::error::TreeError;
use crate::tree::{DataTree, NodeId, NodeKind};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesPI, BytesText, Event as XmlEvent};

pub fn write_document(tree: &DataTree) -> Result<Vec<u8>, TreeError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(XmlEvent::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let doc = tree.document();
    let starts_with_newline = tree
        .children(doc)
        .first()
        .is_some_and(|c| matches!(tree.kind(*c), NodeKind::Text(t) if t.starts_with(['\n', '\r'])));
    if !starts_with_newline {
        writer.write_event(XmlEvent::Text(BytesText::from_escaped("\n")))?;
    }

    for &child in tree.children(doc) {
        write_node(tree, child, &mut writer)?;
    }
    Ok(writer.into_inner())
}

fn write_node(tree: &DataTree, id: NodeId, writer: &mut Writer<Vec<u8>>) -> Result<(), TreeError> {
    match tree.kind(id) {
        NodeKind::Document => {
            for &child in tree.children(id) {
                write_node(tree, child, writer)?;
            }
        }
        NodeKind::Element { start, self_closing, .. } => {
            let children = tree.children(id);
            if children.is_empty() && *self_closing {
                writer.write_event(XmlEvent::Empty(start.borrow()))?;
            } else {
                writer.write_event(XmlEvent::Start(start.borrow()))?;
                for &child in children {
                    write_node(tree, child, writer)?;
                }
                writer.write_event(XmlEvent::End(start.to_end()))?;
            }
        }
        NodeKind::Text(text) => {
            writer.write_event(XmlEvent::Text(BytesText::new(text)))?;
        }
        NodeKind::CData(text) => {
            writer.write_event(XmlEvent::CData(BytesCData::new(text.as_str())))?;
        }
        NodeKind::Comment(raw) => {
            writer.write_event(XmlEvent::Comment(BytesText::from_escaped(raw.as_str())))?;
        }
        NodeKind::ProcessingInstruction(raw) => {
            writer.write_event(XmlEvent::PI(BytesPI::new(raw.as_str())))?;
        }
    }
    Ok(())
}
