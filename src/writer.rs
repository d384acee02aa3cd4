// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::debug;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::document::OutputDocument;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to serialize output document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `document` as UTF-8 JSON to `path`, replacing any previous file.
///
/// The JSON goes to a temporary file next to `path` first and is renamed
/// over it once complete, so a failed run never leaves a half-written file.
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<(), WriteError> {
    let json = document.to_json_string()?;
    let io_error = |source: io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory).map_err(io_error)?;
    debug!("Writing {} bytes to {}", json.len(), file.path().display());

    file.write_all(json.as_bytes()).map_err(io_error)?;
    file.write_all(b"\n").map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{WriteError, write_document};
    use crate::{document::OutputDocument, i18n::gc_country_codes};

    #[test]
    fn replaces_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("phone_formats_e164.json");
        fs::write(&path, "stale").unwrap();

        let document = OutputDocument::new(vec![], gc_country_codes());
        write_document(&document, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, document.to_json_string().unwrap() + "\n");
        // only the target is left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.json");

        let document = OutputDocument::new(vec![], &[]);
        let err = write_document(&document, &path).unwrap_err();
        assert!(matches!(&err, WriteError::Io { path: p, .. } if *p == path));
        assert!(err.to_string().contains("out.json"));
        assert!(!path.exists());
    }
}
