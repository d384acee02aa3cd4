use std::process::ExitCode;

use log::error;
use phone_formats::{ExportConfig, LibphonenumberSource, PhoneFormatExporter, generate};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExportConfig::from_env();
    let exporter = PhoneFormatExporter::new(LibphonenumberSource::bundled());
    match generate(&exporter, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
