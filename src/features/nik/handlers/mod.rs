mod nik_handler;

pub use nik_handler::*;
