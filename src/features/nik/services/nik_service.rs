use chrono::NaiveDate;

use crate::features::nik::decoder;
use crate::features::nik::models::NikValidationResult;
use crate::shared::constants::NIK_LOG_VISIBLE_PREFIX;

/// Service wrapping the NIK decoder for the HTTP layer
#[derive(Debug, Default, Clone, Copy)]
pub struct NikService;

impl NikService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a NIK against today's date
    pub fn validate(&self, nik: &str) -> NikValidationResult {
        let result = decoder::validate(nik);

        tracing::debug!(
            valid = result.is_valid(),
            errors = result.errors().len(),
            "NIK {} checked",
            mask_nik(nik)
        );

        result
    }

    /// Extract only the birth date, without full validation
    pub fn extract_birth_date(&self, nik: &str) -> Option<NaiveDate> {
        let birth_date = decoder::extract_birth_date(nik);
        if birth_date.is_none() {
            tracing::debug!("No birth date in NIK {}", mask_nik(nik));
        }
        birth_date
    }
}

/// Keep the region prefix of a NIK and hide the rest for logging
pub fn mask_nik(nik: &str) -> String {
    nik.chars()
        .enumerate()
        .map(|(i, c)| if i < NIK_LOG_VISIBLE_PREFIX { c } else { '*' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_nik() {
        assert_eq!(mask_nik("3273010101990001"), "327301**********");
        assert_eq!(mask_nik("3273"), "3273");
        assert_eq!(mask_nik(""), "");
    }

    #[test]
    fn test_service_delegates_to_decoder() {
        let service = NikService::new();

        assert!(service.validate("3273010101990001").is_valid());
        assert_eq!(
            service.validate("123").errors(),
            &["NIK harus 16 digit".to_string()]
        );
        assert_eq!(
            service.extract_birth_date("9973014101990001"),
            NaiveDate::from_ymd_opt(1999, 1, 1)
        );
    }
}
