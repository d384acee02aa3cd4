mod enums;
mod region_metadata;
mod libphonenumber_source;
pub mod errors;

pub use enums::NumberKind;
pub use region_metadata::{NumberDesc, RegionMetadata};
pub use libphonenumber_source::LibphonenumberSource;
