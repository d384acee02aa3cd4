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

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::NumberKind;

/// Digit-pattern rules of one number kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberDesc {
    /// Unanchored regex over national significant numbers.
    pub national_number_pattern: Option<String>,
    /// Lengths a national number of this kind may have.
    pub possible_lengths: Vec<u16>,
    pub example_number: Option<String>,
}

impl NumberDesc {
    pub fn new(pattern: &str, possible_lengths: &[u16], example_number: Option<&str>) -> Self {
        Self {
            national_number_pattern: (!pattern.is_empty()).then(|| pattern.to_owned()),
            possible_lengths: possible_lengths.to_vec(),
            example_number: example_number
                .filter(|example| !example.is_empty())
                .map(str::to_owned),
        }
    }

    fn lengths(&self) -> impl Iterator<Item = u16> + '_ {
        // zero marks "no numbers of this length" in some metadata dumps
        self.possible_lengths.iter().copied().filter(|&length| length > 0)
    }
}

/// Everything the exporter needs to know about a region, as returned by a
/// [`MetadataSource`](crate::MetadataSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMetadata {
    pub region_code: String,
    pub country_code: u16,
    descs: HashMap<NumberKind, NumberDesc>,
}

impl RegionMetadata {
    pub fn new(region_code: impl Into<String>, country_code: u16) -> Self {
        Self {
            region_code: region_code.into(),
            country_code,
            descs: HashMap::new(),
        }
    }

    pub fn with_desc(mut self, kind: NumberKind, desc: NumberDesc) -> Self {
        self.descs.insert(kind, desc);
        self
    }

    pub fn desc(&self, kind: NumberKind) -> Option<&NumberDesc> {
        self.descs.get(&kind)
    }

    /// The pattern of the general description, which covers every valid
    /// national number of the region.
    pub fn national_number_pattern(&self) -> Option<&str> {
        self.desc(NumberKind::General)?
            .national_number_pattern
            .as_deref()
    }

    /// Returns the longest possible national number length. Falls back to
    /// the union of all kinds when the general description has no lengths.
    pub fn max_length(&self) -> Option<u16> {
        let general = self.desc(NumberKind::General).and_then(|desc| desc.lengths().max());
        general.or_else(|| self.all_lengths().max())
    }

    pub fn min_length(&self) -> Option<u16> {
        let general = self.desc(NumberKind::General).and_then(|desc| desc.lengths().min());
        general.or_else(|| self.all_lengths().min())
    }

    /// Returns the first example number found, searching kinds in
    /// [`NumberKind`] declaration order.
    pub fn example_number(&self) -> Option<&str> {
        NumberKind::iter()
            .filter_map(|kind| self.desc(kind))
            .find_map(|desc| desc.example_number.as_deref())
    }

    fn all_lengths(&self) -> impl Iterator<Item = u16> + '_ {
        NumberKind::iter()
            .filter_map(|kind| self.desc(kind))
            .flat_map(|desc| desc.lengths())
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberDesc, NumberKind, RegionMetadata};

    #[test]
    fn max_length_prefers_general_description() {
        let metadata = RegionMetadata::new("DE", 49)
            .with_desc(NumberKind::General, NumberDesc::new(r"[1-9]\d{3,14}", &[4, 15], None))
            .with_desc(NumberKind::Mobile, NumberDesc::new(r"1\d{10}", &[11], None));
        assert_eq!(metadata.max_length(), Some(15));
        assert_eq!(metadata.min_length(), Some(4));
    }

    #[test]
    fn max_length_falls_back_to_number_kinds() {
        let metadata = RegionMetadata::new("KI", 686)
            .with_desc(NumberKind::General, NumberDesc::new("", &[], None))
            .with_desc(NumberKind::FixedLine, NumberDesc::new("", &[5], None))
            .with_desc(NumberKind::Mobile, NumberDesc::new("", &[0, 8], None));
        assert_eq!(metadata.max_length(), Some(8));
        assert_eq!(metadata.min_length(), Some(5));
        assert_eq!(metadata.national_number_pattern(), None);
    }

    #[test]
    fn example_lookup_order() {
        let metadata = RegionMetadata::new("FR", 33)
            .with_desc(NumberKind::FixedLine, NumberDesc::new("", &[9], Some("123456789")))
            .with_desc(NumberKind::Mobile, NumberDesc::new("", &[9], Some("612345678")))
            .with_desc(NumberKind::General, NumberDesc::new(r"[1-9]\d{8}", &[9], Some("")));
        assert_eq!(metadata.example_number(), Some("612345678"));

        let empty = RegionMetadata::new("TA", 290);
        assert_eq!(empty.example_number(), None);
        assert_eq!(empty.max_length(), None);
    }
}
