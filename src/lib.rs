pub mod interfaces;
pub mod metadata;
pub mod exporter;
pub mod document;
pub mod writer;
pub mod config;
pub mod i18n;
mod regexp_cache;

#[cfg(test)]
mod tests;

pub use interfaces::MetadataSource;
pub use metadata::{LibphonenumberSource, NumberDesc, NumberKind, RegionMetadata};
pub use exporter::{PhoneFormatExporter, errors::{ExportError, GenerateError}, generate};
pub use document::{CanadaCodeEntry, CountryEntry, OutputDocument};
pub use config::ExportConfig;
pub use regexp_cache::InvalidRegexError;
