use crate::metadata::{RegionMetadata, errors::MetadataError};

/// Read-only phone number metadata consumed by the exporter.
///
/// Used to isolate the underlying metadata library from the export logic,
/// so the bundled libphonenumber database and test fixtures can be
/// swapped in easily.
pub trait MetadataSource {
    /// Returns every geographic region code the source knows about.
    fn supported_regions(&self) -> Vec<String>;

    /// Returns the metadata of the given region as an explicit record.
    fn region_metadata(&self, region_code: &str) -> Result<RegionMetadata, MetadataError>;
}
