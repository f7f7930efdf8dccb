use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XFA datasets part is not an indirect stream object")]
    InlineDatasets,
}
