use crate::entities::prelude::*;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    Schema,
};

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    // One logical caller; also keeps an in-memory sqlite database alive across queries.
    options.max_connections(1).sqlx_logging(false);

    Database::connect(options).await
}

/// Creates every catalog table that does not exist yet, parents before children.
pub async fn ensure_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, PluginMetadata).await?;
    create_table(db, PluginPriceDetails).await?;
    create_table(db, PluginConfigOptions).await?;
    create_table(db, PluginPacks).await?;
    create_table(db, PluginPackPriceDetails).await?;
    create_table(db, PluginPackItems).await?;
    create_table(db, UserCredentials).await?;
    create_table(db, HardwareIdentifiers).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let table = entity.table_name().to_owned();
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let stmt = builder.build(schema.create_table_from_entity(entity).if_not_exists());
    match db.execute_raw(stmt).await {
        Ok(_) => {
            tracing::info!("Ensured table {} exists", table);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to create table {}: {}", table, e);
            Err(e)
        }
    }
}
