mod contact_repository;

pub use contact_repository::{ContactRepository, RepositoryError};

#[cfg(test)]
pub use contact_repository::MockContactRepository;
