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

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Top-level key of the embedded Government of Canada table.
pub const GC_SECTION_KEY: &str = "GC_COUNTRY_CODES";

/// A Government of Canada country code with abbreviated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanadaCodeEntry {
    #[serde(rename = "ISO")]
    pub iso: &'static str,
    #[serde(rename = "GC_ID")]
    pub gc_id: &'static str,
    #[serde(rename = "GC_NM_AB_EN")]
    pub name_en: &'static str,
    #[serde(rename = "GC_NM_AB_FR")]
    pub name_fr: &'static str,
}

/// The GC fields merged into a country entry. Same keys as
/// [`CanadaCodeEntry`] without the ISO code, which the entry already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GcNames {
    #[serde(rename = "GC_ID")]
    pub gc_id: &'static str,
    #[serde(rename = "GC_NM_AB_EN")]
    pub name_en: &'static str,
    #[serde(rename = "GC_NM_AB_FR")]
    pub name_fr: &'static str,
}

impl From<&CanadaCodeEntry> for GcNames {
    fn from(entry: &CanadaCodeEntry) -> Self {
        Self {
            gc_id: entry.gc_id,
            name_en: entry.name_en,
            name_fr: entry.name_fr,
        }
    }
}

/// Formatting data of one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    #[serde(rename = "ISO")]
    pub iso_code: String,
    #[serde(rename = "country_code", serialize_with = "serialize_calling_code")]
    pub calling_code: u16,
    pub max_length: u16,
    /// Calling code digits plus `max_length`.
    pub total_max_digits: usize,
    /// `null` when the metadata carries no example for the region.
    #[serde(rename = "example")]
    pub example_number: Option<String>,
    pub example_format: String,
    /// Anchored pattern over national numbers.
    pub regex: String,
    /// Anchored pattern over the full `+<calling code><national number>` form.
    pub e164_regex: String,
    #[serde(flatten)]
    pub gc: Option<GcNames>,
}

fn serialize_calling_code<S: Serializer>(code: &u16, serializer: S) -> Result<S::Ok, S::Error> {
    let mut buf = itoa::Buffer::new();
    serializer.serialize_str(buf.format(*code))
}

/// The generated file: country entries keyed by ISO code, followed by the
/// GC table under [`GC_SECTION_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    countries: Vec<CountryEntry>,
    gc_country_codes: Vec<CanadaCodeEntry>,
}

impl OutputDocument {
    /// Orders countries by calling code, then ISO code, so the serialized
    /// form only depends on the input set.
    pub fn new(mut countries: Vec<CountryEntry>, gc_country_codes: &[CanadaCodeEntry]) -> Self {
        countries.sort_by(|a, b| {
            a.calling_code
                .cmp(&b.calling_code)
                .then_with(|| a.iso_code.cmp(&b.iso_code))
        });
        Self {
            countries,
            gc_country_codes: gc_country_codes.to_vec(),
        }
    }

    pub fn countries(&self) -> &[CountryEntry] {
        &self.countries
    }

    pub fn gc_country_codes(&self) -> &[CanadaCodeEntry] {
        &self.gc_country_codes
    }

    pub fn get(&self, iso_code: &str) -> Option<&CountryEntry> {
        self.countries.iter().find(|entry| entry.iso_code == iso_code)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Pretty-printed JSON with two-space indent. Non-ASCII characters are
    /// written as-is.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.countries.len() + 1))?;
        for entry in &self.countries {
            map.serialize_entry(&entry.iso_code, entry)?;
        }
        map.serialize_entry(GC_SECTION_KEY, &self.gc_country_codes)?;
        map.end()
    }
}
