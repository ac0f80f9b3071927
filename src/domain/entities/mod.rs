mod contact;

pub use contact::{CleanRecord, RawRecord};
