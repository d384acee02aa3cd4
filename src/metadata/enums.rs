// Copyright (C) 2009 The Libphonenumber Authors
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

use strum::EnumIter;

/// Number descriptions carried by region metadata.
///
/// The declaration order is the lookup order used when the exporter
/// searches for an example number: the general description first, then
/// the kinds most people would recognise as "a phone number".
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumberKind {
    /// **General description.**
    /// Covers every valid national number of the region.
    General,
    /// **Mobile numbers.**
    Mobile,
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// **Toll-free numbers.**
    TollFree,
    /// **Premium-rate numbers.**
    PremiumRate,
    /// **Shared-cost numbers.**
    SharedCost,
    /// **Personal numbers.**
    /// Routed to different destinations as configured by the user.
    PersonalNumber,
    /// **Voice over IP (VoIP) numbers.**
    VoIP,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    UAN,
    /// **Voicemail access numbers.**
    VoiceMail,
}
