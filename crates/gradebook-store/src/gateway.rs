//! Store Gateway
//!
//! Thin boundary over the SQLite backend. Writes report the store-assigned
//! id, reads produce mapped rows with absence as a valid result, and every
//! failure is classified into the core taxonomy before it leaves this
//! module: uniqueness/foreign-key rejections as `ConstraintViolation`,
//! everything else as `ConnectionFailure`.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Params, Row};
use tracing::debug;

/// Gateway over the relational backend's query/execute primitives
pub struct StoreGateway;

impl StoreGateway {
    /// Run a single-row insert and return the store-assigned id
    pub fn insert<P: Params>(conn: &Connection, op: &str, sql: &str, params: P) -> Result<i64> {
        conn.execute(sql, params).map_err(|e| from_rusqlite(op, e))?;
        let id = conn.last_insert_rowid();
        debug!(op, id, "insert executed");
        Ok(id)
    }

    /// Run a read and map every matching row
    ///
    /// An empty result is valid, not an error.
    pub fn query<T, P, F>(
        conn: &Connection,
        op: &str,
        sql: &str,
        params: P,
        map_row: F,
    ) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = conn.prepare(sql).map_err(|e| from_rusqlite(op, e))?;
        let rows = stmt
            .query_map(params, map_row)
            .map_err(|e| from_rusqlite(op, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(op, e))?;
        debug!(op, count = rows.len(), "query executed");
        Ok(rows)
    }

    /// Run a single-row read; an absent row yields `None`
    pub fn query_optional<T, P, F>(
        conn: &Connection,
        op: &str,
        sql: &str,
        params: P,
        map_row: F,
    ) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        conn.query_row(sql, params, map_row)
            .optional()
            .map_err(|e| from_rusqlite(op, e))
    }

    /// Delete every row from every table as a single all-or-nothing unit
    ///
    /// Used for full resets in test setups. Child tables go first so foreign
    /// keys never dangle mid-transaction.
    pub fn reset_tables(conn: &mut Connection) -> Result<()> {
        let tx = conn
            .transaction()
            .map_err(|e| from_rusqlite("reset_tables", e))?;

        for sql in [
            "DELETE FROM grade",
            "DELETE FROM student_course",
            "DELETE FROM student",
            "DELETE FROM course",
        ] {
            tx.execute(sql, [])
                .map_err(|e| from_rusqlite("reset_tables", e))?;
        }

        tx.commit().map_err(|e| from_rusqlite("reset_tables", e))?;
        debug!("all tables reset");
        Ok(())
    }
}
