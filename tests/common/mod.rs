pub mod fixtures;

use lopdf::{Document, Object, Stream, StringFormat, dictionary};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a one-page document and returns its serialized bytes. With
/// `datasets`, the AcroForm carries an XFA part array whose `datasets` entry
/// is a Flate-compressed stream holding that XML.
pub fn create_pdf(datasets: Option<&str>) -> Vec<u8> {
    create_pdf_with_packet(datasets.map(str::as_bytes))
}

/// Like [`create_pdf`], for packets that are not UTF-8.
pub fn create_pdf_with_packet(datasets: Option<&[u8]>) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf 72 720 Td (Mantelbogen) Tj ET".to_vec()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        dictionary! { "Type" => "Pages", "Kids" => vec![page_id.into()], "Count" => 1 }.into(),
    );

    let mut catalog = dictionary! { "Type" => "Catalog", "Pages" => pages_id };
    if let Some(xml) = datasets {
        let template = doc.add_object(Stream::new(dictionary! {}, b"<template/>".to_vec()));
        let mut stream = Stream::new(dictionary! {}, xml.to_vec());
        stream.compress().expect("compress datasets");
        let datasets_id = doc.add_object(stream);
        let parts = vec![
            Object::String(b"template".to_vec(), StringFormat::Literal),
            template.into(),
            Object::String(b"datasets".to_vec(), StringFormat::Literal),
            datasets_id.into(),
        ];
        let acroform_id = doc.add_object(dictionary! { "Fields" => Vec::<Object>::new(), "XFA" => parts });
        catalog.set("AcroForm", acroform_id);
    }
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save fixture pdf");
    bytes
}

/// Number of objects that carry content. Cross-reference and object streams
/// are rebuilt on every save and are left out.
pub fn content_object_count(doc: &Document) -> usize {
    doc.objects
        .values()
        .filter(|object| {
            let kind = object
                .as_stream()
                .ok()
                .and_then(|stream| stream.dict.get(b"Type").and_then(Object::as_name).ok());
            !matches!(kind, Some(b"XRef") | Some(b"ObjStm"))
        })
        .count()
}

/// The decoded `datasets` XML of a filled document, read without going
/// through the crate under test.
pub fn datasets_xml(pdf: &[u8]) -> Result<String, Box<dyn std::error::Error>> {
    let doc = Document::load_mem(pdf)?;
    let catalog = doc.get_dictionary(doc.trailer.get(b"Root")?.as_reference()?)?;
    let acroform = doc.get_dictionary(catalog.get(b"AcroForm")?.as_reference()?)?;
    let parts = acroform.get(b"XFA")?.as_array()?;
    for pair in parts.chunks(2) {
        if let [Object::String(name, _), Object::Reference(id)] = pair
            && name.as_slice() == b"datasets"
        {
            let stream = doc.get_object(*id)?.as_stream()?;
            let content = if stream.dict.has(b"Filter") { stream.decompressed_content()? } else { stream.content.clone() };
            return Ok(String::from_utf8(content)?);
        }
    }
    Err("no datasets part".into())
}

/// `(tag, text)` for every element without element children under the data
/// root, in document order.
pub fn leaf_values(pdf: &[u8]) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
    let xml = datasets_xml(pdf)?;
    let doc = roxmltree::Document::parse(&xml)?;
    let data = doc
        .descendants()
        .find(|n| n.tag_name().name() == "data")
        .ok_or("no data node")?;
    let root = data.children().find(|n| n.is_element()).ok_or("no data root")?;
    Ok(root
        .descendants()
        .filter(|n| n.is_element() && !n.children().any(|c| c.is_element()))
        .map(|n| (n.tag_name().name().to_string(), n.text().unwrap_or_default().to_string()))
        .collect())
}

/// The text of the first leaf called `tag`.
pub fn leaf_value(pdf: &[u8], tag: &str) -> Option<String> {
    leaf_values(pdf).ok()?.into_iter().find(|(name, _)| name == tag).map(|(_, text)| text)
}
