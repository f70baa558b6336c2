mod nik;

pub use nik::{Gender, NikInfo, NikValidationResult};
