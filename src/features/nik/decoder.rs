//! NIK (Nomor Induk Kependudukan) decoding.
//!
//! Layout of the 16 digits, 0-indexed:
//!
//! | Range | Field |
//! |-------|-------|
//! | 0..2 | province code |
//! | 2..4 | city code (unique within the province only) |
//! | 4..6 | district code |
//! | 6..8 | day of birth, +40 for women |
//! | 8..10 | month of birth |
//! | 10..12 | two-digit year of birth |
//! | 12..16 | serial number (not decoded) |
//!
//! Both entry points are total: malformed input is reported in the return
//! value and never panics.

use chrono::{Local, NaiveDate};

use crate::features::nik::models::{Gender, NikInfo, NikValidationResult};
use crate::features::regions::reference::{
    is_valid_province_code, resolve_city_name, resolve_province_name,
};
use crate::shared::constants::{
    BIRTH_YEAR_PIVOT, FEMALE_DAY_OFFSET, MSG_FUTURE_BIRTH_DATE, MSG_INVALID_BIRTH_DATE,
    MSG_INVALID_BIRTH_MONTH, MSG_INVALID_PROVINCE, MSG_NIK_DIGITS_ONLY, MSG_NIK_LENGTH,
    NIK_LENGTH,
};
use crate::shared::validation::DIGITS_REGEX;

/// Fixed-width fields of a 16-character NIK
#[derive(Debug)]
struct NikFields {
    province_code: String,
    city_code: String,
    district_code: String,
    raw_day: Option<u32>,
    month: Option<u32>,
    two_digit_year: Option<u32>,
}

impl NikFields {
    /// Slice by character position. Caller guarantees 16 characters.
    fn slice(nik: &str) -> Self {
        let chars: Vec<char> = nik.chars().collect();
        let field = |start: usize, end: usize| -> String {
            chars
                .get(start..end)
                .map(|c| c.iter().collect())
                .unwrap_or_default()
        };

        Self {
            province_code: field(0, 2),
            city_code: field(2, 4),
            district_code: field(4, 6),
            raw_day: parse_number(&field(6, 8)),
            month: parse_number(&field(8, 10)),
            two_digit_year: parse_number(&field(10, 12)),
        }
    }
}

fn parse_number(field: &str) -> Option<u32> {
    if DIGITS_REGEX.is_match(field) {
        field.parse().ok()
    } else {
        None
    }
}

/// Split the raw day field into the real day of month and the gender
fn decode_day(raw_day: u32) -> (u32, Gender) {
    if raw_day > FEMALE_DAY_OFFSET {
        (raw_day - FEMALE_DAY_OFFSET, Gender::Female)
    } else {
        (raw_day, Gender::Male)
    }
}

/// 00..=30 → 2000..=2030, 31..=99 → 1931..=1999
fn expand_year(two_digit_year: u32) -> i32 {
    let year = if two_digit_year <= BIRTH_YEAR_PIVOT {
        2000 + two_digit_year
    } else {
        1900 + two_digit_year
    };
    year as i32
}

/// Validate a NIK against today's local date
pub fn validate(nik: &str) -> NikValidationResult {
    validate_at(nik, Local::now().date_naive())
}

/// Validate a NIK, rejecting birth dates after `today`
pub fn validate_at(nik: &str, today: NaiveDate) -> NikValidationResult {
    if nik.chars().count() != NIK_LENGTH {
        return NikValidationResult::Invalid(vec![MSG_NIK_LENGTH.to_string()]);
    }
    if !DIGITS_REGEX.is_match(nik) {
        return NikValidationResult::Invalid(vec![MSG_NIK_DIGITS_ONLY.to_string()]);
    }

    let fields = NikFields::slice(nik);
    let (Some(raw_day), Some(month), Some(two_digit_year)) =
        (fields.raw_day, fields.month, fields.two_digit_year)
    else {
        return NikValidationResult::Invalid(vec![MSG_NIK_DIGITS_ONLY.to_string()]);
    };

    let mut errors = Vec::new();

    if !is_valid_province_code(&fields.province_code) {
        errors.push(MSG_INVALID_PROVINCE.to_string());
    }

    let (day, gender) = decode_day(raw_day);

    let day_in_range = (1..=31).contains(&day);
    if !day_in_range {
        errors.push(MSG_INVALID_BIRTH_DATE.to_string());
    }

    let month_in_range = (1..=12).contains(&month);
    if !month_in_range {
        errors.push(MSG_INVALID_BIRTH_MONTH.to_string());
    }

    // Calendar check only runs on in-range parts, so a bad day is reported once
    let mut date_of_birth = None;
    if day_in_range && month_in_range {
        match NaiveDate::from_ymd_opt(expand_year(two_digit_year), month, day) {
            Some(date) => {
                if date > today {
                    errors.push(MSG_FUTURE_BIRTH_DATE.to_string());
                }
                date_of_birth = Some(date);
            }
            None => errors.push(MSG_INVALID_BIRTH_DATE.to_string()),
        }
    }

    let date_of_birth = match date_of_birth {
        Some(date) if errors.is_empty() => date,
        _ => return NikValidationResult::Invalid(errors),
    };

    let province = resolve_province_name(&fields.province_code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Kode {}", fields.province_code));
    let city = resolve_city_name(&fields.province_code, &fields.city_code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Kode {}.{}", fields.province_code, fields.city_code));

    NikValidationResult::Valid(NikInfo {
        province,
        city,
        district: format!("Kecamatan {}", fields.district_code),
        date_of_birth,
        gender,
    })
}

/// Best-effort birth date extraction.
///
/// Looser than [`validate`]: the province code and the not-in-future rule
/// are not checked, and no error detail is returned.
pub fn extract_birth_date(nik: &str) -> Option<NaiveDate> {
    if nik.chars().count() != NIK_LENGTH {
        return None;
    }

    let fields = NikFields::slice(nik);
    let (day, _) = decode_day(fields.raw_day?);
    NaiveDate::from_ymd_opt(expand_year(fields.two_digit_year?), fields.month?, day)
}
