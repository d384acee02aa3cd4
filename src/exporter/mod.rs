mod helper_constants;
pub mod helper_functions;
pub mod errors;
mod exporter;

use std::path::Path;

use log::info;

pub use helper_constants::DEFAULT_OUTPUT_FILE;
pub use exporter::PhoneFormatExporter;
use crate::{config::ExportConfig, document::OutputDocument, interfaces::MetadataSource, writer};
use errors::GenerateError;

/// Builds the document with `exporter` and writes it to the configured path.
/// Nothing is written unless the whole document could be built.
pub fn generate<S: MetadataSource>(
    exporter: &PhoneFormatExporter<S>,
    config: &ExportConfig,
) -> Result<OutputDocument, GenerateError> {
    let document = exporter.build_document()?;
    let path: &Path = &config.output_path;
    writer::write_document(&document, path)?;
    info!(
        "Phone format data for {} regions has been written to '{}'",
        document.len(),
        path.display()
    );
    Ok(document)
}
