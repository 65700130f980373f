//! In-memory SQLite table of SpaceX launch records.
//!
//! The launch dataset is loaded once from CSV into an in-memory SQLite
//! database and read through typed query methods. The chart builders in
//! `slr-data` sit on top of these queries.
//!
//! # Architecture
//!
//! - `Arc<Mutex<Connection>>` wrapper so one loaded table can be shared by
//!   Dioxus components in WASM and by the HTTP handlers in the CLI server
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in consuming crates
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use slr_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_launches("\
//! Launch Site,class,Payload Mass (kg),Booster Version Category
//! CCAFS LC-40,1,2034,FT
//! VAFB SLC-4E,0,500,v1.1
//! ").unwrap();
//!
//! let sites = db.query_sites().unwrap();
//! assert_eq!(sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
//! let bounds = db.query_payload_bounds().unwrap().unwrap();
//! assert_eq!((bounds.min, bounds.max), (500.0, 2034.0));
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the SQL schema. There is a single
//! `launches` table; success counts and payload windows are derived with
//! `GROUP BY` and range predicates at query time.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory SQLite database holding the launch dataset.
///
/// This struct is cheaply cloneable (via `Arc`); clones share the same
/// connection.
///
/// # Example
///
/// ```rust
/// use slr_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_launches(slr_core::CSV_OBJECT).unwrap();
/// assert_eq!(db.query_launch_count(None).unwrap(), 56);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a database and load the given launch CSV into it.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_launches(csv_data)?;
        Ok(db)
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("launch database lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,2034,FT
";

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_launches(CSV).unwrap();
        assert_eq!(
            db2.query_launch_count(None).unwrap(),
            1,
            "Clone should see same data via shared Arc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_sites().unwrap().is_empty());
        assert!(db.query_payload_bounds().unwrap().is_none());
    }

    #[test]
    fn database_from_csv() {
        let db = Database::from_csv(CSV).unwrap();
        assert_eq!(db.query_sites().unwrap(), vec!["CCAFS LC-40"]);
    }

    #[test]
    fn database_is_shareable_across_threads() {
        let db = Database::from_csv(CSV).unwrap();
        let handle = std::thread::spawn(move || db.query_launch_count(None).unwrap());
        assert_eq!(handle.join().unwrap(), 1);
    }
}
