mod import_contacts;
mod submit_contact;

pub use import_contacts::{ImportContactsUseCase, ImportError};
pub use submit_contact::SubmitContactUseCase;
