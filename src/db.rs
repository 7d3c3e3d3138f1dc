use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};
use tracing::info;

/// Schema files under `migrations/`, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Opens the pool and brings the schema up to date before any request is served
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    info!("Connected to PostgreSQL");

    MIGRATOR.run(&pool).await?;
    info!(migrations = MIGRATOR.iter().count(), "Database schema is up to date");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_schema_is_embedded() {
        let initial = MIGRATOR
            .iter()
            .find(|migration| migration.version == 1)
            .unwrap();

        assert_eq!(initial.description, "initial");
        for table in [
            "players",
            "games",
            "game_attendance",
            "goals",
            "transactions",
            "championships",
        ] {
            assert!(
                initial
                    .sql
                    .contains(&format!("CREATE TABLE IF NOT EXISTS {} ", table)),
                "{}",
                table
            );
        }
    }
}
