#[cfg(not(any(feature = "db-sqlite", feature = "db-postgres")))]
compile_error!("Either the `db-sqlite` or `db-postgres` feature must be enabled.");

#[cfg(all(feature = "db-sqlite", feature = "db-postgres"))]
compile_error!("Only one of `db-sqlite` or `db-postgres` can be enabled.");

#[cfg(feature = "db-postgres")]
pub use sqlx::postgres::{PgPool as DbPool, PgPoolOptions as DbPoolOptions};

#[cfg(feature = "db-sqlite")]
pub use sqlx::sqlite::{SqlitePool as DbPool, SqlitePoolOptions as DbPoolOptions};

/// Build a pool for the validated `DATABASE_URL` without connecting.
///
/// The scaffold issues no queries of its own, so connections are only
/// opened once a consumer of the pool actually needs one.
pub fn connect_lazy(database_url: &str) -> Result<DbPool, sqlx::Error> {
    DbPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
}
