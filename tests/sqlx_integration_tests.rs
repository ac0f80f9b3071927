//! Integration tests using SQLx's #[sqlx::test] macro
//!
//! Each test gets a fresh database with `migrations/` applied. They need a
//! reachable Postgres in `DATABASE_URL`, so they are ignored by default:
//! `cargo test -- --ignored`.

use std::sync::Arc;

use sqlx::PgPool;

use contact_intake::application::ports::{ContactRepository, RepositoryError};
use contact_intake::application::use_cases::{ImportContactsUseCase, SubmitContactUseCase};
use contact_intake::domain::entities::{CleanRecord, RawRecord};
use contact_intake::infrastructure::persistence::{PostgresContactRepository, REQUIRED_COLUMNS};
use contact_intake::intake::{IntakeConfig, IntakePipeline};

fn clean_record(first_name: &str, email: &str) -> CleanRecord {
    IntakePipeline::new(IntakeConfig::default())
        .process(&RawRecord::new(
            first_name,
            "Doe",
            email,
            "0851234567",
            "1a2b3c",
        ))
        .expect("fixture record should be valid")
}

async fn count_contacts(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn sqlx_test_insert_one_returns_generated_id(pool: PgPool) {
    let repo = PostgresContactRepository::new(pool.clone());

    let first = repo.insert_one(&clean_record("Jane", "jane@example.com")).await.unwrap();
    let second = repo.insert_one(&clean_record("Tom", "tom@example.com")).await.unwrap();
    assert!(second.as_i64() > first.as_i64());

    let (email, postal_code): (String, String) =
        sqlx::query_as("SELECT email, postal_code FROM contacts WHERE id = $1")
            .bind(first.as_i64())
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(email, "jane@example.com");
    assert_eq!(postal_code, "1A2B3C");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn sqlx_test_insert_many_writes_every_row(pool: PgPool) {
    let repo = PostgresContactRepository::new(pool.clone());
    let records: Vec<CleanRecord> = (0..25)
        .map(|i| clean_record(&format!("User{}", i), &format!("user{}@example.com", i)))
        .collect();

    let inserted = repo.insert_many(&records).await.unwrap();

    assert_eq!(inserted, 25);
    assert_eq!(count_contacts(&pool).await, 25);
    assert_eq!(repo.insert_many(&[]).await.unwrap(), 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn sqlx_test_insert_many_is_atomic(pool: PgPool) {
    let repo = PostgresContactRepository::new(pool.clone());
    sqlx::query("ALTER TABLE contacts ADD CONSTRAINT no_tom CHECK (first_name <> 'Tom')")
        .execute(&pool)
        .await
        .unwrap();

    let records = vec![
        clean_record("Jane", "jane@example.com"),
        clean_record("Tom", "tom@example.com"),
    ];
    let result = repo.insert_many(&records).await;

    assert!(matches!(result, Err(RepositoryError::Database(_))));
    assert_eq!(count_contacts(&pool).await, 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn sqlx_test_schema_check(pool: PgPool) {
    let repo = PostgresContactRepository::new(pool.clone());
    repo.verify_schema().await.unwrap();

    sqlx::query("ALTER TABLE contacts DROP COLUMN phone")
        .execute(&pool)
        .await
        .unwrap();

    match repo.verify_schema().await {
        Err(RepositoryError::SchemaMismatch { table, missing }) => {
            assert_eq!(table, "contacts");
            assert_eq!(missing, vec!["phone".to_string()]);
        }
        other => panic!("expected schema mismatch, got {:?}", other.err()),
    }
    assert!(REQUIRED_COLUMNS.contains(&"phone"));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn sqlx_test_database_info_lists_contacts(pool: PgPool) {
    let repo = PostgresContactRepository::new(pool);
    let info = repo.database_info().await.unwrap();

    assert!(!info.database.is_empty());
    assert!(info.tables.contains(&"contacts".to_string()));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn sqlx_test_use_cases_against_postgres(pool: PgPool) {
    let repo: Arc<dyn ContactRepository> = Arc::new(PostgresContactRepository::new(pool.clone()));
    let pipeline = Arc::new(IntakePipeline::new(IntakeConfig::default()));

    let submit = SubmitContactUseCase::new(Arc::clone(&pipeline), Arc::clone(&repo));
    let contact = submit
        .execute(RawRecord::new(
            "Jane",
            "Doe99",
            "jane@example.com",
            "0851234567",
            "1a 2b 3c",
        ))
        .await
        .unwrap();
    assert_eq!(contact.postal_code, "1A2B3C");

    // A value that would break a concatenated statement is stored as data
    let import = ImportContactsUseCase::new(pipeline, repo);
    let csv = "\
first_name,second_name,email,phone,postal_code
Ann,Lee,o'brien@example.com,0871234567,3c4d5e
Bob,Ray,bob@example.com,0881234567,4d5e6f
";
    let report = import.execute(csv.as_bytes()).await.unwrap();

    assert_eq!(report.inserted, 2);
    assert!(report.rejected.is_empty());
    assert_eq!(count_contacts(&pool).await, 3);

    let email: String = sqlx::query_scalar("SELECT email FROM contacts WHERE first_name = 'Ann'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(email, "obrien@example.com");
}
