pub mod builder;
pub mod dto;
pub mod errors;
pub mod intake;
pub mod ports;
pub mod use_cases;
