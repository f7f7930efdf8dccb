//! Arena XML tree for XFA `datasets` packets and the leaf-path index over it.
//!
//! - **tree**: the owned node arena and its handles
//! - **parser** / **writer**: quick-xml based reading and re-serialization
//! - **index**: [`DataPacket`], data-root lookup, leaf paths and resolution

pub mod error;
pub mod index;
pub mod parser;
pub mod tree;
pub mod writer;

pub use error::TreeError;
pub use index::DataPacket;
pub use tree::{DataTree, NodeId, NodeKind};
