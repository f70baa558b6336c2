use crate::core::error::{AppError, Result};
use crate::features::regions::models::{City, Province};
use crate::features::regions::reference;
use crate::shared::validation::REGION_CODE_REGEX;

/// Service for reading the Indonesian administrative region reference table
#[derive(Debug, Default, Clone, Copy)]
pub struct RegionService;

impl RegionService {
    pub fn new() -> Self {
        Self
    }

    // ==================== Province Methods ====================

    /// List all provinces with optional search
    pub fn list_provinces(&self, search: Option<&str>) -> Vec<Province> {
        reference::provinces()
            .into_iter()
            .filter(|p| matches_search(p.code, p.name, search))
            .copied()
            .collect()
    }

    /// Get a province by its code
    pub fn get_province_by_code(&self, code: &str) -> Result<Province> {
        ensure_code_format("Province", code)?;

        reference::find_province(code)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Province with code '{}' not found", code)))
    }

    // ==================== City Methods ====================

    /// List the known cities of a province with optional search
    pub fn list_cities_by_province(
        &self,
        province_code: &str,
        search: Option<&str>,
    ) -> Result<Vec<City>> {
        // First verify the province exists
        let province = self.get_province_by_code(province_code)?;

        let cities: Vec<City> = reference::cities_in_province(province.code)
            .into_iter()
            .filter(|c| matches_search(c.code, c.name, search))
            .copied()
            .collect();

        tracing::debug!(
            "Listed {} cities for province {}",
            cities.len(),
            province.code
        );

        Ok(cities)
    }

    /// Get a city by its (province, city) code pair
    pub fn get_city(&self, province_code: &str, city_code: &str) -> Result<City> {
        self.get_province_by_code(province_code)?;
        ensure_code_format("City", city_code)?;

        reference::find_city(province_code, city_code)
            .copied()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "City with code '{}.{}' not found",
                    province_code, city_code
                ))
            })
    }
}

fn ensure_code_format(kind: &str, code: &str) -> Result<()> {
    if REGION_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{} code must be 2 digits, got '{}'",
            kind, code
        )))
    }
}

/// Case-insensitive name match or code prefix match; empty search matches all
fn matches_search(code: &str, name: &str, search: Option<&str>) -> bool {
    match search.map(str::trim) {
        Some(term) if !term.is_empty() => {
            let term = term.to_lowercase();
            name.to_lowercase().contains(&term) || code.starts_with(&term)
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_provinces_search() {
        let service = RegionService::new();

        assert_eq!(service.list_provinces(None).len(), 38);
        assert_eq!(service.list_provinces(Some("  ")).len(), 38);

        let java: Vec<&str> = service
            .list_provinces(Some("JAWA"))
            .iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(java, vec!["32", "33", "35"]);

        let by_code: Vec<&str> = service
            .list_provinces(Some("3"))
            .iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(by_code, vec!["31", "32", "33", "34", "35", "36"]);
    }

    #[test]
    fn test_get_province_by_code() {
        let service = RegionService::new();

        assert_eq!(service.get_province_by_code("51").unwrap().name, "Bali");
        assert!(matches!(
            service.get_province_by_code("99"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_province_by_code("jabar"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_list_cities_by_province() {
        let service = RegionService::new();

        let cities = service.list_cities_by_province("35", None).unwrap();
        assert_eq!(cities.len(), 3);
        assert!(cities.iter().all(|c| c.province_code == "35"));

        let kota = service.list_cities_by_province("32", Some("kota")).unwrap();
        assert!(kota.iter().all(|c| c.name.starts_with("Kota")));

        // known province without sampled cities
        assert!(service.list_cities_by_province("75", None).unwrap().is_empty());

        assert!(matches!(
            service.list_cities_by_province("00", None),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_get_city() {
        let service = RegionService::new();

        let bandung = service.get_city("32", "73").unwrap();
        assert_eq!(bandung.name, "Kota Bandung");
        assert_eq!(bandung.full_code(), "32.73");

        assert!(matches!(
            service.get_city("32", "78"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_city("99", "73"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_city("32", "7"),
            Err(AppError::Validation(_))
        ));
    }
}
