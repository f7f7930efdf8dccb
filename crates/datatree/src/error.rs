use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Quick-XML error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Could not decode XML text: {0}")]
    Encoding(String),

    #[error("I/O error while writing XML: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown entity reference '&{0};'")]
    UnknownEntity(String),

    #[error("Unbalanced XML: {0}")]
    Unbalanced(String),

    #[error("<data> element not found in datasets XML")]
    MissingDataNode,

    #[error("No data root element found under <data>")]
    MissingDataRoot,
}
