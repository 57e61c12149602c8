use super::migrations::init_with_migrations;
use crate::libs::{config::Config, data_storage::DataStorage};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file named in the configuration, inside the data directory.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        let db_file_path = config.storage.db_path(&DataStorage::new())?;
        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db> {
        msg_debug!(format!("Opening database at {}", path.display()));
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
