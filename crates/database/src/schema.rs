//! Tables of the embedded backend. The hosted backend is set up by the
//! migrations in `migrations/` instead.

pub(crate) const TABLES: [&str; 9] = [
    "
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS incidents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        description TEXT NOT NULL,
        location TEXT NOT NULL,
        latitude TEXT,
        longitude TEXT,
        is_anonymous INTEGER NOT NULL DEFAULT 0,
        reported_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS go_bag_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT NOT NULL,
        name TEXT NOT NULL,
        checked INTEGER NOT NULL DEFAULT 0
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS evacuation_centers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        distance TEXT NOT NULL,
        capacity TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'Open',
        latitude TEXT,
        longitude TEXT
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS households (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        household_id INTEGER NOT NULL REFERENCES households (id),
        name TEXT NOT NULL,
        contact TEXT,
        last_known_location TEXT,
        status TEXT NOT NULL DEFAULT 'unknown'
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS check_ins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        member_id INTEGER NOT NULL REFERENCES members (id),
        location TEXT,
        is_safe INTEGER NOT NULL DEFAULT 1,
        \"timestamp\" DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS hazard_zones (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        coordinates TEXT NOT NULL,
        severity TEXT NOT NULL DEFAULT 'medium'
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS pois (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        latitude TEXT NOT NULL,
        longitude TEXT NOT NULL,
        address TEXT,
        available INTEGER NOT NULL DEFAULT 1
    );
    ",
];
