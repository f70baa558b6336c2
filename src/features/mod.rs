pub mod nik;
pub mod regions;
