pub mod ids;
pub mod mapping;
pub mod payload;
pub mod reader;

pub use ids::{LeafPath, PathSegment};
pub use mapping::{FieldMapping, FillStatus, IdentityCheck, PreviewEntry};
pub use payload::{CompanyInfo, ComputedFigures, FundingParams, Payload, ProjectInfo, WorkPackage};
pub use reader::LeafReader;
