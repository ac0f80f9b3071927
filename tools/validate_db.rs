use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use contact_intake::application::intake::Validator;
use contact_intake::application::ports::ContactRepository;
use contact_intake::domain::entities::RawRecord;
use contact_intake::domain::value_objects::PostalCodeFormat;
use contact_intake::infrastructure::persistence::PostgresContactRepository;
use contact_intake::Config;

/// Check the contacts table layout and re-validate every stored row
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Postal code rule to apply; defaults to POSTAL_CODE_FORMAT
    #[arg(long)]
    postal_code_format: Option<PostalCodeFormat>,

    /// Delete rows that fail validation
    #[arg(long)]
    fix: bool,
}

type ContactRow = (i64, String, String, String, String, String, DateTime<Utc>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env().map_err(anyhow::Error::msg)?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(format) = cli.postal_code_format {
        config.postal_code_format = format;
    }
    let intake = config.intake_config();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("could not connect to database")?;

    let repository = PostgresContactRepository::new(pool.clone());
    repository
        .verify_schema()
        .await
        .context("contacts table failed schema check")?;
    println!("Schema OK: all required columns present");

    let rows: Vec<ContactRow> = sqlx::query_as(
        r#"SELECT id, first_name, second_name, email, phone, postal_code, created_at FROM contacts ORDER BY id"#,
    )
    .fetch_all(&pool)
    .await?;

    let mut invalid = Vec::new();
    for (id, first_name, second_name, email, phone, postal_code, created_at) in &rows {
        let record = RawRecord::new(
            first_name.trim(),
            second_name.trim(),
            email.trim(),
            phone.trim(),
            postal_code.trim(),
        );
        if let Err(errors) = Validator::validate(&record, &intake) {
            println!("id: {} (created {}), {}", id, created_at.to_rfc3339(), errors);
            invalid.push(*id);
        }
    }

    println!("Checked {} rows, {} invalid", rows.len(), invalid.len());

    if cli.fix && !invalid.is_empty() {
        let deleted = sqlx::query("DELETE FROM contacts WHERE id = ANY($1)")
            .bind(&invalid)
            .execute(&pool)
            .await?
            .rows_affected();
        println!("Deleted {} invalid rows", deleted);
    }

    pool.close().await;
    Ok(())
}
