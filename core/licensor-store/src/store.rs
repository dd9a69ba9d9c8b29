//! Persistent store for license records backed by SQLite.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use licensor_core::{License, LicenseDraft, LicensePatch};
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

const SELECT_COLUMNS: &str =
    "SELECT id, license_key, created_at, expiry_date, active, user_id, notes FROM licenses";

/// Persistent store for license records.
///
/// Cloning is cheap; clones share the same connection.
#[derive(Debug, Clone)]
pub struct LicenseStore {
    conn: Arc<Mutex<Connection>>,
}

impl LicenseStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        debug!("Opening license store at {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS licenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                license_key TEXT UNIQUE NOT NULL,
                created_at TEXT NOT NULL,
                expiry_date TEXT NOT NULL,
                active INTEGER NOT NULL DEFAULT 1,
                user_id TEXT,
                notes TEXT
            );
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Inserts a new license and returns the stored record.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if the key is taken; nothing
    /// is written in that case.
    pub fn create(&self, draft: &LicenseDraft) -> StoreResult<License> {
        let conn = self.lock()?;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        conn.execute(
            "INSERT INTO licenses (license_key, created_at, expiry_date, active, user_id, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.license_key,
                created_at,
                draft.expiry_date,
                draft.active,
                draft.user_id,
                draft.notes,
            ],
        )
        .map_err(|e| StoreError::from_insert(e, &draft.license_key))?;

        let id = conn.last_insert_rowid();
        debug!("Inserted license {id}");
        let license = conn.query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            license_from_row,
        )?;
        Ok(license)
    }

    /// Returns every license, most recently created first.
    pub fn list(&self) -> StoreResult<Vec<License>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"))?;
        let licenses = stmt
            .query_map([], license_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Listed {} licenses", licenses.len());
        Ok(licenses)
    }

    /// Looks up a license by exact key.
    pub fn find_by_key(&self, license_key: &str) -> StoreResult<Option<License>> {
        let conn = self.lock()?;
        let license = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE license_key = ?1"),
                params![license_key],
                license_from_row,
            )
            .optional()?;
        Ok(license)
    }

    /// Looks up a license by id.
    pub fn find_by_id(&self, id: i64) -> StoreResult<Option<License>> {
        let conn = self.lock()?;
        let license = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                license_from_row,
            )
            .optional()?;
        Ok(license)
    }

    /// Applies a patch in one statement. Returns the number of rows changed,
    /// which is 0 when `id` does not exist.
    pub fn update(&self, id: i64, patch: &LicensePatch) -> StoreResult<usize> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE licenses SET
                expiry_date = COALESCE(?1, expiry_date),
                active = COALESCE(?2, active),
                user_id = CASE WHEN ?3 THEN ?4 ELSE user_id END,
                notes = CASE WHEN ?5 THEN ?6 ELSE notes END
             WHERE id = ?7",
            params![
                patch.expiry_date,
                patch.active,
                patch.user_id.is_some(),
                patch.user_id.clone().flatten(),
                patch.notes.is_some(),
                patch.notes.clone().flatten(),
                id,
            ],
        )?;
        debug!("Updated license {id} ({changed} rows)");
        Ok(changed)
    }

    /// Deletes a license. Returns the number of rows removed (0 or 1).
    pub fn delete(&self, id: i64) -> StoreResult<usize> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM licenses WHERE id = ?1", params![id])?;
        debug!("Deleted license {id} ({removed} rows)");
        Ok(removed)
    }

    /// Returns the number of stored licenses.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM licenses", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

// Rows stamped by SQLite's `CURRENT_TIMESTAMP` default read as UTC.
fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|err| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
                .map(|naive| naive.and_utc())
                .map_err(|_| err)
        })
}

fn license_from_row(row: &Row<'_>) -> rusqlite::Result<License> {
    let created_at: String = row.get(2)?;
    let created_at = parse_created_at(&created_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(License {
        id: row.get(0)?,
        license_key: row.get(1)?,
        created_at,
        expiry_date: row.get(3)?,
        active: row.get(4)?,
        user_id: row.get(5)?,
        notes: row.get(6)?,
    })
}
