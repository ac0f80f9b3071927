mod postgres_contact_repository;

pub use postgres_contact_repository::{
    PostgresContactRepository, CONTACTS_TABLE, REQUIRED_COLUMNS,
};
