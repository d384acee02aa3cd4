mod region_code;
mod gc_country_codes;

pub use region_code::RegionCode;
pub use gc_country_codes::{GC_COUNTRY_CODES, gc_country_codes, gc_entry_for};
