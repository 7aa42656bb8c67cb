use herodex_migration::{Migrator, MigratorTrait};
use sea_orm::{
    prelude::async_trait, ConnectOptions, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbBackend, DbErr, ExecResult, QueryResult, Statement, TransactionTrait,
};

/// The database handle, shared by all request handlers.
///
/// Connecting applies all pending migrations, so a fresh file comes up with
/// the full schema.
#[derive(Clone, Debug)]
pub struct Database {
    pub db: DatabaseConnection,
}

impl Database {
    pub async fn new(config: &crate::config::Database) -> Result<Self, anyhow::Error> {
        let url = format!("sqlite://{}?mode=rwc", config.path);
        log::info!("connect to {url}");

        let mut opt = ConnectOptions::new(url);
        opt.sqlx_logging_level(log::LevelFilter::Trace);

        let db = sea_orm::Database::connect(opt).await?;

        log::debug!("applying migrations");
        Migrator::up(&db, None).await?;
        log::debug!("applied migrations");

        Ok(Self { db })
    }

    /// A fresh in-memory database. A single pooled connection, as every
    /// pool member would otherwise get its own empty memory database.
    pub async fn for_test() -> Result<Self, anyhow::Error> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.min_connections(1).max_connections(1);

        let db = sea_orm::Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        Ok(Self { db })
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.db.begin().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}

#[async_trait::async_trait]
impl ConnectionTrait for Database {
    fn get_database_backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        self.db.execute(stmt).await
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        self.db.execute_unprepared(sql).await
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        self.db.query_one(stmt).await
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        self.db.query_all(stmt).await
    }
}

#[cfg(test)]
mod test {
    use super::Database;
    use sea_orm::ConnectionTrait;
    use test_log::test;

    #[test(tokio::test)]
    async fn migrated_schema() -> Result<(), anyhow::Error> {
        let db = Database::for_test().await?;

        for table in ["hero", "power", "hero_power"] {
            db.execute_unprepared(&format!("SELECT count(*) FROM {table}"))
                .await?;
        }

        db.close().await?;
        Ok(())
    }
}
