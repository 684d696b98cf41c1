//! SQL DDL for the exposed tables.
//! SQLite-first design; can be adapted for other RDBMS.

/// Schema for the six read views. Timestamps are stored as TEXT
/// (`datetime('now')` format); embedding vectors as a JSON array serialized
/// to TEXT.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS persons (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    face_id TEXT NULL,
    created_at TEXT NULL
);

CREATE TABLE IF NOT EXISTS cameras (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    location TEXT NULL,
    stream_url TEXT NULL,
    active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NULL
);

CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    camera_id INTEGER NULL,
    person_id INTEGER NULL,
    event_type TEXT NOT NULL,
    confidence REAL NULL,
    created_at TEXT NULL
);

CREATE TABLE IF NOT EXISTS alerts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event_id INTEGER NULL,
    severity TEXT NOT NULL,
    message TEXT NULL,
    acknowledged INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NULL
);

CREATE TABLE IF NOT EXISTS system_logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    level TEXT NOT NULL,
    component TEXT NULL,
    message TEXT NULL,
    created_at TEXT NULL
);

CREATE TABLE IF NOT EXISTS embeddings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id INTEGER NULL,
    vector TEXT NULL, -- JSON array, serialized as text
    created_at TEXT NULL
);
"#;
