//! Static reference table of Indonesian administrative region codes.
//!
//! Province codes follow the Kemendagri numbering used in the first two
//! digits of a NIK. The city table is a sample covering the larger
//! regencies/cities only; a code missing from it means "unknown", not
//! "invalid". Production use needs a complete, authoritative code table.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::features::regions::models::{City, Province};

const PROVINCE_ROWS: &[(&str, &str)] = &[
    ("11", "Aceh"),
    ("12", "Sumatera Utara"),
    ("13", "Sumatera Barat"),
    ("14", "Riau"),
    ("15", "Jambi"),
    ("16", "Sumatera Selatan"),
    ("17", "Bengkulu"),
    ("18", "Lampung"),
    ("19", "Kepulauan Bangka Belitung"),
    ("21", "Kepulauan Riau"),
    ("31", "DKI Jakarta"),
    ("32", "Jawa Barat"),
    ("33", "Jawa Tengah"),
    ("34", "DI Yogyakarta"),
    ("35", "Jawa Timur"),
    ("36", "Banten"),
    ("51", "Bali"),
    ("52", "Nusa Tenggara Barat"),
    ("53", "Nusa Tenggara Timur"),
    ("61", "Kalimantan Barat"),
    ("62", "Kalimantan Tengah"),
    ("63", "Kalimantan Selatan"),
    ("64", "Kalimantan Timur"),
    ("65", "Kalimantan Utara"),
    ("71", "Sulawesi Utara"),
    ("72", "Sulawesi Tengah"),
    ("73", "Sulawesi Selatan"),
    ("74", "Sulawesi Tenggara"),
    ("75", "Gorontalo"),
    ("76", "Sulawesi Barat"),
    ("81", "Maluku"),
    ("82", "Maluku Utara"),
    ("91", "Papua"),
    ("92", "Papua Barat"),
    ("93", "Papua Selatan"),
    ("94", "Papua Tengah"),
    ("95", "Papua Pegunungan"),
    ("96", "Papua Barat Daya"),
];

// (city code, name, province code)
const CITY_ROWS: &[(&str, &str, &str)] = &[
    ("71", "Kota Banda Aceh", "11"),
    ("07", "Kabupaten Deli Serdang", "12"),
    ("71", "Kota Medan", "12"),
    ("71", "Kota Padang", "13"),
    ("71", "Kota Pekanbaru", "14"),
    ("71", "Kota Palembang", "16"),
    ("71", "Kota Bandar Lampung", "18"),
    ("01", "Kabupaten Administrasi Kepulauan Seribu", "31"),
    ("71", "Kota Administrasi Jakarta Selatan", "31"),
    ("72", "Kota Administrasi Jakarta Timur", "31"),
    ("73", "Kota Administrasi Jakarta Pusat", "31"),
    ("74", "Kota Administrasi Jakarta Barat", "31"),
    ("75", "Kota Administrasi Jakarta Utara", "31"),
    ("01", "Kabupaten Bogor", "32"),
    ("04", "Kabupaten Bandung", "32"),
    ("16", "Kabupaten Bekasi", "32"),
    ("71", "Kota Bogor", "32"),
    ("73", "Kota Bandung", "32"),
    ("75", "Kota Bekasi", "32"),
    ("76", "Kota Depok", "32"),
    ("72", "Kota Surakarta", "33"),
    ("73", "Kota Salatiga", "33"),
    ("74", "Kota Semarang", "33"),
    ("04", "Kabupaten Sleman", "34"),
    ("71", "Kota Yogyakarta", "34"),
    ("07", "Kabupaten Malang", "35"),
    ("73", "Kota Malang", "35"),
    ("78", "Kota Surabaya", "35"),
    ("03", "Kabupaten Tangerang", "36"),
    ("71", "Kota Tangerang", "36"),
    ("74", "Kota Tangerang Selatan", "36"),
    ("71", "Kota Denpasar", "51"),
    ("71", "Kota Mataram", "52"),
    ("71", "Kota Kupang", "53"),
    ("71", "Kota Pontianak", "61"),
    ("71", "Kota Banjarmasin", "63"),
    ("71", "Kota Balikpapan", "64"),
    ("72", "Kota Samarinda", "64"),
    ("71", "Kota Manado", "71"),
    ("71", "Kota Makassar", "73"),
    ("71", "Kota Ambon", "81"),
    ("71", "Kota Jayapura", "91"),
];

lazy_static! {
    /// Province table keyed by two-digit code
    static ref PROVINCES: HashMap<&'static str, Province> = PROVINCE_ROWS
        .iter()
        .map(|&(code, name)| (code, Province { code, name }))
        .collect();

    /// City table; codes repeat across provinces
    static ref CITIES: Vec<City> = CITY_ROWS
        .iter()
        .map(|&(code, name, province_code)| City {
            code,
            name,
            province_code,
        })
        .collect();
}

pub fn find_province(code: &str) -> Option<&'static Province> {
    PROVINCES.get(code)
}

pub fn find_city(province_code: &str, city_code: &str) -> Option<&'static City> {
    CITIES
        .iter()
        .find(|c| c.province_code == province_code && c.code == city_code)
}

/// All provinces, ordered by code
pub fn provinces() -> Vec<&'static Province> {
    let mut all: Vec<&'static Province> = PROVINCES.values().collect();
    all.sort_by_key(|p| p.code);
    all
}

/// Sampled cities of one province, ordered by code
pub fn cities_in_province(province_code: &str) -> Vec<&'static City> {
    let mut cities: Vec<&'static City> = CITIES
        .iter()
        .filter(|c| c.province_code == province_code)
        .collect();
    cities.sort_by_key(|c| c.code);
    cities
}

pub fn resolve_province_name(code: &str) -> Option<&'static str> {
    find_province(code).map(|p| p.name)
}

pub fn resolve_city_name(province_code: &str, city_code: &str) -> Option<&'static str> {
    find_city(province_code, city_code).map(|c| c.name)
}

pub fn is_valid_province_code(code: &str) -> bool {
    PROVINCES.contains_key(code)
}

#[allow(dead_code)]
pub fn is_valid_city_code(province_code: &str, city_code: &str) -> bool {
    find_city(province_code, city_code).is_some()
}
