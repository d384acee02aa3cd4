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

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Pattern '{pattern}' is not a valid regex: {source}")]
pub struct InvalidRegexError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Compiled regexes keyed by their source pattern. Regions sharing a
/// calling code often share patterns, so each one is compiled once.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            regex::Regex::new(pattern)
                .map(Arc::new)
                .map_err(|source| InvalidRegexError { pattern: pattern.to_owned(), source })
        })?;
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
