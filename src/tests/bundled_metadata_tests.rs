use regex::Regex;

use crate::{
    exporter::PhoneFormatExporter, interfaces::MetadataSource, metadata::LibphonenumberSource,
};

use super::{init_logging, region_code::RegionCode};

#[test]
fn lists_geographic_regions() {
    let regions = LibphonenumberSource::bundled().supported_regions();
    assert!(regions.len() > 200);
    for region in [RegionCode::ca(), RegionCode::fr(), RegionCode::gb(), RegionCode::us()] {
        assert!(regions.iter().any(|r| r == region), "{region} missing");
    }
    assert!(!regions.iter().any(|r| r == RegionCode::un001()));
}

#[test]
fn france_from_bundled_metadata() {
    init_logging();
    let exporter = PhoneFormatExporter::new(LibphonenumberSource::bundled());
    let fr = exporter.export_region(RegionCode::fr()).unwrap().unwrap();

    assert_eq!(fr.calling_code, 33);
    assert_eq!(fr.max_length, 9);
    let example = fr.example_number.as_deref().unwrap();
    let regex = Regex::new(&fr.regex).unwrap();
    assert!(regex.is_match(example));
    assert!(!regex.is_match("12345"));
}

#[test]
fn unknown_region_is_an_error() {
    let source = LibphonenumberSource::bundled();
    assert!(source.region_metadata(RegionCode::zw()).is_ok());
    assert!(source.region_metadata("QZ").is_err());
}

#[test]
fn bundled_document_is_consistent() {
    init_logging();
    let exporter = PhoneFormatExporter::new(LibphonenumberSource::bundled());
    let document = exporter.build_document().unwrap();
    assert!(document.len() > 200);

    for entry in document.countries() {
        let regex = Regex::new(&entry.regex).unwrap();
        if let Some(example) = &entry.example_number {
            assert!(regex.is_match(example), "{} rejects {example}", entry.iso_code);
        }
    }
    assert!(document.get(RegionCode::fj()).unwrap().gc.is_some());
    assert!(document.get(RegionCode::ca()).unwrap().gc.is_none());

    let again = PhoneFormatExporter::new(LibphonenumberSource::bundled())
        .build_document()
        .unwrap();
    assert_eq!(document.to_json_string().unwrap(), again.to_json_string().unwrap());
}
