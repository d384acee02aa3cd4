pub const DEFAULT_OUTPUT_FILE: &'static str = "phone_formats_e164.json";

pub const ESCAPED_PLUS_SIGN: &'static str = r"\+";
pub const PLUS_SIGN: &'static str = "+";
pub const PLACEHOLDER_DIGIT: char = 'X';
pub const DIGIT_CLASS: &'static str = r"\d";

// Example masks are grouped as "XXX XXX X..." once they are longer than
// these thresholds.
pub const MAX_UNGROUPED_LENGTH: u16 = 4;
pub const MAX_SINGLE_GROUP_LENGTH: u16 = 7;
pub const GROUP_LENGTH: u16 = 3;

/// Most regions already have their patterns cached after the first few
/// calling codes; this is just the initial map size.
pub const REGEX_CACHE_CAPACITY: usize = 256;
