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

use std::iter;

use super::helper_constants::{
    DIGIT_CLASS, ESCAPED_PLUS_SIGN, GROUP_LENGTH, MAX_SINGLE_GROUP_LENGTH, MAX_UNGROUPED_LENGTH,
    PLACEHOLDER_DIGIT, PLUS_SIGN,
};

/// Wraps a national number pattern so it only matches whole strings.
pub fn anchored_pattern(national_number_pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", national_number_pattern, ")$")
}

/// Pattern for the E.164 form: plus sign, calling code, national number.
pub fn e164_pattern(country_code: u16, national_number_pattern: &str) -> String {
    let mut buf = itoa::Buffer::new();
    let country_code_str = buf.format(country_code);
    fast_cat::concat_str!(
        "^",
        ESCAPED_PLUS_SIGN,
        country_code_str,
        "(?:",
        national_number_pattern,
        ")$"
    )
}

/// Unanchored digit-count pattern for regions whose metadata has lengths
/// but no national number pattern.
pub fn fallback_length_pattern(min_length: u16, max_length: u16) -> String {
    let mut max_buf = itoa::Buffer::new();
    let max_length_str = max_buf.format(max_length);
    if min_length >= max_length {
        return fast_cat::concat_str!(DIGIT_CLASS, "{", max_length_str, "}");
    }
    let mut min_buf = itoa::Buffer::new();
    let min_length_str = min_buf.format(min_length);
    fast_cat::concat_str!(DIGIT_CLASS, "{", min_length_str, ",", max_length_str, "}")
}

/// Placeholder mask such as `+33 XXX XXX XXX`.
pub fn example_format(country_code: u16, max_length: u16) -> String {
    let mut buf = itoa::Buffer::new();
    let country_code_str = buf.format(country_code);

    let mut format = String::with_capacity(
        PLUS_SIGN.len() + country_code_str.len() + 3 + max_length as usize,
    );
    format.push_str(PLUS_SIGN);
    format.push_str(country_code_str);
    format.push(' ');

    let placeholders = |count: u16| iter::repeat(PLACEHOLDER_DIGIT).take(count as usize);
    if max_length <= MAX_UNGROUPED_LENGTH {
        format.extend(placeholders(max_length));
    } else if max_length <= MAX_SINGLE_GROUP_LENGTH {
        format.extend(placeholders(GROUP_LENGTH));
        format.push(' ');
        format.extend(placeholders(max_length - GROUP_LENGTH));
    } else {
        format.extend(placeholders(GROUP_LENGTH));
        format.push(' ');
        format.extend(placeholders(GROUP_LENGTH));
        format.push(' ');
        format.extend(placeholders(max_length - 2 * GROUP_LENGTH));
    }
    format
}

/// Digits in the longest E.164 number: calling code plus national number.
pub fn total_max_digits(country_code: u16, max_length: u16) -> usize {
    let mut buf = itoa::Buffer::new();
    buf.format(country_code).len() + max_length as usize
}
