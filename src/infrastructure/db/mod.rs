use std::str::FromStr;

use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;

pub async fn connect_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let opts =
        sqlx::sqlite::SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &DbPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod repositories;
