pub mod persistence;
pub mod tls;
