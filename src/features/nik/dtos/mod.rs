mod nik_dto;

pub use nik_dto::*;
