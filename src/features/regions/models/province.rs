use serde::Serialize;

/// Province model representing Indonesian provinces (provinsi)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Province {
    /// Two-digit code, the first two characters of a NIK
    pub code: &'static str,
    pub name: &'static str,
}
