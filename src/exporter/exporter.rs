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

use std::{borrow::Cow, collections::BTreeSet, sync::Arc};

use log::{info, trace, warn};

use super::{
    errors::ExportError,
    helper_constants::REGEX_CACHE_CAPACITY,
    helper_functions::{
        anchored_pattern, e164_pattern, example_format, fallback_length_pattern, total_max_digits,
    },
};
use crate::{
    document::{CanadaCodeEntry, CountryEntry, GcNames, OutputDocument},
    i18n::{GC_COUNTRY_CODES, RegionCode},
    interfaces::MetadataSource,
    regexp_cache::RegexCache,
};

/// Turns region metadata into [`CountryEntry`] records.
pub struct PhoneFormatExporter<S: MetadataSource> {
    source: S,
    regex_cache: RegexCache,
    gc_country_codes: &'static [CanadaCodeEntry],
}

impl<S: MetadataSource> PhoneFormatExporter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            regex_cache: RegexCache::with_capacity(REGEX_CACHE_CAPACITY),
            gc_country_codes: GC_COUNTRY_CODES,
        }
    }

    /// Replaces the Government of Canada table merged into the entries
    /// and embedded in the document.
    pub fn with_gc_country_codes(mut self, gc_country_codes: &'static [CanadaCodeEntry]) -> Self {
        self.gc_country_codes = gc_country_codes;
        self
    }

    /// Builds the entry of one region.
    ///
    /// Returns `Ok(None)` when the region has no possible lengths at all,
    /// since no meaningful `max_length` or regex exists for it. A missing
    /// example number is not an error; the entry carries `None`.
    pub fn export_region(&self, region_code: &str) -> Result<Option<CountryEntry>, ExportError> {
        let metadata = self
            .source
            .region_metadata(region_code)
            .map_err(|source| ExportError::Metadata {
                region: region_code.to_owned(),
                source,
            })?;

        let Some(max_length) = metadata.max_length() else {
            warn!("Region {region_code} has no possible lengths, skipping");
            return Ok(None);
        };

        let national_number_pattern = match metadata.national_number_pattern() {
            Some(pattern) => Cow::Borrowed(pattern),
            None => {
                trace!("Region {region_code} has no national number pattern, using lengths only");
                let min_length = metadata.min_length().unwrap_or(max_length);
                Cow::Owned(fallback_length_pattern(min_length, max_length))
            }
        };
        let regex = anchored_pattern(&national_number_pattern);
        let e164_regex = e164_pattern(metadata.country_code, &national_number_pattern);

        let compiled = self.compile(region_code, &regex)?;
        self.compile(region_code, &e164_regex)?;

        let example_number = metadata.example_number().map(str::to_owned);
        match example_number.as_deref() {
            Some(example) if !compiled.is_match(example) => {
                warn!("Example number '{example}' of region {region_code} does not match {regex}");
            }
            Some(_) => {}
            None => warn!("Region {region_code} has no example number"),
        }

        trace!(
            "Region {region_code}: +{}, max length {max_length}, regex {regex}",
            metadata.country_code
        );
        Ok(Some(CountryEntry {
            gc: self
                .gc_country_codes
                .iter()
                .find(|entry| entry.iso == metadata.region_code)
                .map(GcNames::from),
            calling_code: metadata.country_code,
            max_length,
            total_max_digits: total_max_digits(metadata.country_code, max_length),
            example_number,
            example_format: example_format(metadata.country_code, max_length),
            regex,
            e164_regex,
            iso_code: metadata.region_code,
        }))
    }

    /// Exports every geographic region of the source and attaches the
    /// Government of Canada table. Fails on the first region that fails.
    pub fn build_document(&self) -> Result<OutputDocument, ExportError> {
        info!("Fetching phone number formats...");
        let regions = self
            .source
            .supported_regions()
            .into_iter()
            .filter(|region| {
                let geographic = RegionCode::is_geographic(region);
                if !geographic {
                    trace!("Skipping non-geographic region {region}");
                }
                geographic
            })
            .collect::<BTreeSet<_>>();

        let mut countries = Vec::with_capacity(regions.len());
        for region in &regions {
            if let Some(entry) = self.export_region(region)? {
                countries.push(entry);
            }
        }

        trace!("Compiled {} distinct patterns", self.regex_cache.len());
        let with_gc = countries.iter().filter(|entry| entry.gc.is_some()).count();
        info!(
            "Fetched formats for {} regions, added Government of Canada data to {} of them",
            countries.len(),
            with_gc
        );
        Ok(OutputDocument::new(countries, self.gc_country_codes))
    }

    fn compile(&self, region_code: &str, pattern: &str) -> Result<Arc<regex::Regex>, ExportError> {
        self.regex_cache
            .get_regex(pattern)
            .map_err(|source| ExportError::InvalidRegex {
                region: region_code.to_owned(),
                source,
            })
    }
}
