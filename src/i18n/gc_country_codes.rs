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

//! Government of Canada country codes with abbreviated English and French
//! names (`GC_ID`, `GC_NM_AB_EN`, `GC_NM_AB_FR` columns of the GC country
//! reference dataset). Only rows checked against that dataset are listed.

use crate::document::CanadaCodeEntry;

const fn entry(
    iso: &'static str,
    gc_id: &'static str,
    name_en: &'static str,
    name_fr: &'static str,
) -> CanadaCodeEntry {
    CanadaCodeEntry { iso, gc_id, name_en, name_fr }
}

/// Ordered by English name. Not derived from phone number metadata.
// TODO: import the remaining rows from the open.canada.ca dataset dump
// (resource bdb33e8c-53ef-4bae-9493-35f343191c02).
pub static GC_COUNTRY_CODES: &[CanadaCodeEntry] = &[
    entry("FJ", "1000110", "Fiji", "Fidji"),
];

pub fn gc_country_codes() -> &'static [CanadaCodeEntry] {
    GC_COUNTRY_CODES
}

pub fn gc_entry_for(iso_code: &str) -> Option<&'static CanadaCodeEntry> {
    GC_COUNTRY_CODES.iter().find(|entry| entry.iso == iso_code)
}
