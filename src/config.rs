use std::{ffi::OsString, path::PathBuf};

use crate::exporter::DEFAULT_OUTPUT_FILE;

/// Overrides the output path when set.
pub const OUTPUT_PATH_ENV: &str = "PHONE_FORMATS_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl ExportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(OUTPUT_PATH_ENV).filter(|path| !path.is_empty()) {
            config.output_path = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, path::PathBuf};

    use super::{ExportConfig, OUTPUT_PATH_ENV};

    #[test]
    fn defaults_to_fixed_file_name() {
        let config = ExportConfig::from_lookup(|_| None);
        assert_eq!(config.output_path, PathBuf::from("phone_formats_e164.json"));
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn env_overrides_output_path() {
        let config = ExportConfig::from_lookup(|key| {
            (key == OUTPUT_PATH_ENV).then(|| OsString::from("/tmp/formats.json"))
        });
        assert_eq!(config.output_path, PathBuf::from("/tmp/formats.json"));

        let config = ExportConfig::from_lookup(|_| Some(OsString::new()));
        assert_eq!(config, ExportConfig::default());
    }
}
