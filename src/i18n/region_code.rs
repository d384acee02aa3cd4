pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Region code used by libphonenumber for non-geographical entities
    /// such as +800 (International Toll Free Service).
    pub fn un001() -> &'static str {
        return "001";
    }

    /// Returns true for two-letter country codes, i.e. anything that is
    /// neither unknown nor a non-geographical entity.
    pub fn is_geographic(region_code: &str) -> bool {
        region_code != Self::get_unknown()
            && region_code != Self::un001()
            && region_code.len() == 2
            && region_code.bytes().all(|b| b.is_ascii_uppercase())
    }
}
