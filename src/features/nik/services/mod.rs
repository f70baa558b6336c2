mod nik_service;

pub use nik_service::NikService;
