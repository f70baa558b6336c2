mod region_handler;

pub use region_handler::*;
