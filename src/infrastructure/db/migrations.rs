use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

/// Ordered schema history for the `employees` table. New migrations append
/// here with the next version number; anything at or below the recorded
/// high-water mark is skipped on startup.
struct Migration {
    version: i32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_employees",
        sql: "CREATE TABLE IF NOT EXISTS employees (
                id VARCHAR(7) PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                role VARCHAR(100) NOT NULL,
                gender VARCHAR(20) NOT NULL,
                dob DATE NOT NULL,
                location VARCHAR(100) NOT NULL,
                email VARCHAR(100) NOT NULL,
                phone VARCHAR(20) NOT NULL,
                join_date DATE NOT NULL,
                experience INTEGER NOT NULL,
                skills TEXT NOT NULL,
                achievement TEXT NOT NULL
            )",
    },
    Migration {
        version: 2,
        name: "add_profile_image",
        sql: "ALTER TABLE employees ADD COLUMN IF NOT EXISTS profile_image TEXT",
    },
];

/// Brings the employee schema to its required shape without touching
/// existing data. Safe to run on every start; any failure here is fatal and
/// the caller must not begin serving requests.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await
    .context("creating schema_migrations table")?;

    let last_applied: Option<i32> =
        sqlx::query_scalar("SELECT MAX(version) FROM schema_migrations")
            .fetch_one(pool)
            .await
            .context("reading last applied migration")?;
    let last_applied = last_applied.unwrap_or(0);

    for migration in MIGRATIONS.iter().filter(|m| m.version > last_applied) {
        sqlx::query(migration.sql)
            .execute(pool)
            .await
            .with_context(|| format!("applying migration {}", migration.name))?;

        sqlx::query("INSERT INTO schema_migrations (version, name) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(migration.name)
            .execute(pool)
            .await
            .with_context(|| format!("recording migration {}", migration.name))?;

        info!(
            version = migration.version,
            name = migration.name,
            "applied schema migration"
        );
    }

    Ok(())
}
