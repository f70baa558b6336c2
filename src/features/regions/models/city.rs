use serde::Serialize;

/// City model representing Indonesian regencies/cities (kabupaten/kota).
///
/// `code` is only unique within its province: "73" is Kota Bandung under
/// province "32" but Kota Salatiga under "33". Always match on both codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub code: &'static str,
    pub name: &'static str,
    pub province_code: &'static str,
}

impl City {
    /// Full dotted code as printed in Kemendagri tables, e.g. "32.73"
    pub fn full_code(&self) -> String {
        format!("{}.{}", self.province_code, self.code)
    }
}
