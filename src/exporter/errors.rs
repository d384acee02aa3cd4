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

use thiserror::Error;

use crate::{metadata::errors::MetadataError, regexp_cache::InvalidRegexError, writer::WriteError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to read metadata for region {region}: {source}")]
    Metadata {
        region: String,
        #[source]
        source: MetadataError,
    },
    #[error("Region {region} produced an invalid regex: {source}")]
    InvalidRegex {
        region: String,
        #[source]
        source: InvalidRegexError,
    },
}

impl ExportError {
    /// The region the export failed on.
    pub fn region(&self) -> &str {
        match self {
            ExportError::Metadata { region, .. } | ExportError::InvalidRegex { region, .. } => region,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Export(#[from] ExportError),
    #[error("{0}")]
    Write(#[from] WriteError),
}
