use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError, model::code::verify_code_tables};

/// Connects to the SQLite database and creates any missing tables.
///
/// The schema is built from the entity definitions with `CREATE TABLE IF NOT EXISTS`,
/// followed by the indexes the entities cannot express. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the schema in place
/// - `Err(AppError::DbErr)` - Failed to connect or create the schema
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    create_schema(&db).await?;

    Ok(db)
}

async fn create_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    let backend = db.get_database_backend();

    for stmt in entity::schema::table_statements(backend) {
        db.execute(&stmt).await?;
    }
    for stmt in entity::schema::index_statements() {
        db.execute(&stmt).await?;
    }

    tracing::debug!("Database schema is up to date");

    Ok(())
}

/// Checks that every persisted code table is complete and unambiguous.
///
/// Runs before the server accepts requests.
pub fn check_code_tables() -> Result<(), AppError> {
    verify_code_tables()?;

    Ok(())
}
