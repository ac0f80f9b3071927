use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::application::dto::DatabaseInfo;
use crate::application::ports::{ContactRepository, RepositoryError};
use crate::domain::entities::CleanRecord;
use crate::domain::value_objects::ContactId;

pub const CONTACTS_TABLE: &str = "contacts";

/// Columns the service reads or writes
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "id",
    "first_name",
    "second_name",
    "email",
    "phone",
    "postal_code",
];

// Postgres caps bind parameters at 65535 per statement
const BATCH_ROWS: usize = 1000;

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert_one(&self, record: &CleanRecord) -> Result<ContactId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO contacts (first_name, second_name, email, phone, postal_code)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(record.first_name())
        .bind(record.second_name())
        .bind(record.email())
        .bind(record.phone())
        .bind(record.postal_code())
        .fetch_one(&self.pool)
        .await?;

        Ok(ContactId::new(id))
    }

    async fn insert_many(&self, records: &[CleanRecord]) -> Result<u64, RepositoryError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in records.chunks(BATCH_ROWS) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO contacts (first_name, second_name, email, phone, postal_code) ",
            );
            builder.push_values(chunk, |mut row, record| {
                row.push_bind(record.first_name())
                    .push_bind(record.second_name())
                    .push_bind(record.email())
                    .push_bind(record.phone())
                    .push_bind(record.postal_code());
            });

            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn verify_schema(&self) -> Result<(), RepositoryError> {
        let present: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT column_name::text
            FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = $1
            "#,
        )
        .bind(CONTACTS_TABLE)
        .fetch_all(&self.pool)
        .await?;

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !present.iter().any(|p| p == *column))
            .map(|column| column.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RepositoryError::SchemaMismatch {
                table: CONTACTS_TABLE.to_string(),
                missing,
            })
        }
    }

    async fn database_info(&self) -> Result<DatabaseInfo, RepositoryError> {
        let database: String = sqlx::query_scalar("SELECT current_database()::text")
            .fetch_one(&self.pool)
            .await?;

        let tables: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = current_schema()
            ORDER BY table_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DatabaseInfo { database, tables })
    }
}
