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

use std::collections::BTreeSet;

use log::trace;
use phonenumber::metadata::{DATABASE, Database, Descriptor, Metadata};
use strum::IntoEnumIterator;

use super::{NumberDesc, NumberKind, RegionMetadata, errors::MetadataError};
use crate::{i18n::RegionCode, interfaces::MetadataSource};

/// Country calling codes are at most three digits long.
const MAX_COUNTRY_CALLING_CODE: u16 = 999;

/// Metadata source backed by the libphonenumber database shipped with the
/// `phonenumber` crate.
pub struct LibphonenumberSource<'a> {
    database: &'a Database,
}

impl LibphonenumberSource<'static> {
    /// Uses the database compiled into the `phonenumber` crate.
    pub fn bundled() -> Self {
        Self { database: &DATABASE }
    }
}

impl MetadataSource for LibphonenumberSource<'_> {
    fn supported_regions(&self) -> Vec<String> {
        // The database is only indexed by id and by calling code, so the
        // region list is collected by walking every possible calling code.
        let mut regions = BTreeSet::new();
        for code in 1..=MAX_COUNTRY_CALLING_CODE {
            for region in self.database.region(&code).into_iter().flatten() {
                if RegionCode::is_geographic(region) {
                    regions.insert(region.to_owned());
                }
            }
        }
        trace!("Bundled database lists {} geographic regions", regions.len());
        regions.into_iter().collect()
    }

    fn region_metadata(&self, region_code: &str) -> Result<RegionMetadata, MetadataError> {
        let metadata = self
            .database
            .by_id(region_code)
            .ok_or_else(|| MetadataError::UnknownRegion(region_code.to_owned()))?;
        if metadata.country_code() == 0 {
            return Err(MetadataError::MissingCountryCode(region_code.to_owned()));
        }

        let mut region = RegionMetadata::new(metadata.id(), metadata.country_code());
        for kind in NumberKind::iter() {
            if let Some(descriptor) = descriptor_for(metadata, kind) {
                region = region.with_desc(kind, number_desc(descriptor));
            }
        }
        Ok(region)
    }
}

fn descriptor_for(metadata: &Metadata, kind: NumberKind) -> Option<&Descriptor> {
    let descriptors = metadata.descriptors();
    match kind {
        NumberKind::General => Some(descriptors.general()),
        NumberKind::Mobile => descriptors.mobile(),
        NumberKind::FixedLine => descriptors.fixed_line(),
        NumberKind::TollFree => descriptors.toll_free(),
        NumberKind::PremiumRate => descriptors.premium_rate(),
        NumberKind::SharedCost => descriptors.shared_cost(),
        NumberKind::PersonalNumber => descriptors.personal_number(),
        NumberKind::VoIP => descriptors.voip(),
        NumberKind::Pager => descriptors.pager(),
        NumberKind::UAN => descriptors.uan(),
        NumberKind::VoiceMail => descriptors.voicemail(),
    }
}

fn number_desc(descriptor: &Descriptor) -> NumberDesc {
    let lengths = descriptor
        .possible_length()
        .iter()
        .map(|&length| length as u16)
        .collect::<Vec<_>>();
    // patterns in the source XML are wrapped over several lines
    let pattern = descriptor
        .national_number()
        .as_str()
        .split_whitespace()
        .collect::<String>();
    NumberDesc::new(&pattern, &lengths, descriptor.example())
}
