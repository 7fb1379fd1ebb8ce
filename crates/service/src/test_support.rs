#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with every migration applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Drop every table created by [`get_db`].
pub async fn teardown(db: &DatabaseConnection) -> Result<(), anyhow::Error> {
    migration::Migrator::down(db, None).await?;
    Ok(())
}
