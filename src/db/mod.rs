//! Database module - SQLite key/value storage for planner state

pub mod memory;
pub mod records;

use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

pub use memory::MemoryStore;
pub use records::Records;

/// Named JSON blobs, last write wins
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value.to_string())])
    }

    /// Write several keys as one unit: all of them land or none do
    fn set_many(&self, entries: &[(&str, String)]) -> Result<()>;

    fn remove_many(&self, keys: &[&str]) -> Result<()>;
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS records (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl Store for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let updated_at = Utc::now().to_rfc3339();
        for (key, value) in entries {
            tx.execute(
                "INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, updated_at],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for key in keys {
            tx.execute("DELETE FROM records WHERE key = ?1", params![key])?;
        }
        tx.commit()?;
        Ok(())
    }
}
