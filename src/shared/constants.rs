// =============================================================================
// NIK LAYOUT
// =============================================================================

/// Number of characters in a NIK (Nomor Induk Kependudukan)
pub const NIK_LENGTH: usize = 16;

/// Day-of-month offset that marks a female holder in the NIK birth-day field
pub const FEMALE_DAY_OFFSET: u32 = 40;

/// Two-digit birth years up to and including this value belong to the 2000s,
/// anything above belongs to the 1900s
pub const BIRTH_YEAR_PIVOT: u32 = 30;

/// Number of leading NIK characters that may appear in logs
pub const NIK_LOG_VISIBLE_PREFIX: usize = 6;

// =============================================================================
// NIK ERROR MESSAGES (Indonesian, shown directly in forms)
// =============================================================================

pub const MSG_NIK_LENGTH: &str = "NIK harus 16 digit";
pub const MSG_NIK_DIGITS_ONLY: &str = "NIK hanya boleh berisi angka";
pub const MSG_INVALID_PROVINCE: &str = "Kode provinsi tidak valid";
pub const MSG_INVALID_BIRTH_DATE: &str = "Tanggal lahir tidak valid";
pub const MSG_INVALID_BIRTH_MONTH: &str = "Bulan lahir tidak valid";
pub const MSG_FUTURE_BIRTH_DATE: &str = "Tanggal lahir tidak boleh di masa depan";
