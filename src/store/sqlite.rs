use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{Application, ApplicationStore, StoredApplication};
use crate::error::StoreError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS applications (
    username            TEXT PRIMARY KEY,
    full_name           TEXT NOT NULL,
    group_number        TEXT NOT NULL,
    programming_level   TEXT NOT NULL,
    direction           TEXT,
    known_languages     TEXT NOT NULL,
    motivation          TEXT NOT NULL,
    teaching_experience TEXT NOT NULL,
    submitted_at        TEXT NOT NULL
);
";

const UPSERT: &str = "
INSERT INTO applications (username, full_name, group_number, programming_level, direction,
                          known_languages, motivation, teaching_experience, submitted_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
ON CONFLICT (username) DO UPDATE SET
    full_name = excluded.full_name,
    group_number = excluded.group_number,
    programming_level = excluded.programming_level,
    direction = excluded.direction,
    known_languages = excluded.known_languages,
    motivation = excluded.motivation,
    teaching_experience = excluded.teaching_experience,
    submitted_at = excluded.submitted_at
";

const SELECT_COLUMNS: &str = "SELECT username, full_name, group_number, programming_level, direction, \
     known_languages, motivation, teaching_experience, submitted_at FROM applications";

/// SQLite-backed application store
pub(crate) struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the schema exists
    pub(crate) fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Unavailable)
    }

    fn upsert_at(
        &self,
        application: &Application,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute(
            UPSERT,
            params![
                application.username,
                application.full_name,
                application.group_number,
                application.programming_level,
                application.direction,
                application.known_languages,
                application.motivation,
                application.teaching_experience,
                submitted_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub(crate) fn get(&self, username: &str) -> Result<Option<StoredApplication>, StoreError> {
        let conn = self.conn()?;
        let sql = format!("{SELECT_COLUMNS} WHERE username = ?1");
        let row = conn
            .query_row(&sql, params![username], row_to_application)
            .optional()?;
        Ok(row)
    }

    /// All applications, most recently submitted first
    pub(crate) fn list(&self) -> Result<Vec<StoredApplication>, StoreError> {
        let conn = self.conn()?;
        let sql = format!("{SELECT_COLUMNS} ORDER BY submitted_at DESC, username ASC");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_application)?;
        let mut applications = Vec::new();
        for row in rows {
            applications.push(row?);
        }
        Ok(applications)
    }
}

impl ApplicationStore for SqliteStore {
    fn upsert(&self, application: &Application) -> Result<(), StoreError> {
        self.upsert_at(application, Utc::now())
    }
}

fn row_to_application(row: &Row<'_>) -> rusqlite::Result<StoredApplication> {
    let submitted_raw: String = row.get(8)?;
    let submitted_at = DateTime::parse_from_rfc3339(&submitted_raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(StoredApplication {
        application: Application {
            username: row.get(0)?,
            full_name: row.get(1)?,
            group_number: row.get(2)?,
            programming_level: row.get(3)?,
            direction: row.get(4)?,
            known_languages: row.get(5)?,
            motivation: row.get(6)?,
            teaching_experience: row.get(7)?,
        },
        submitted_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(username: &str, full_name: &str) -> Application {
        Application {
            username: username.to_string(),
            full_name: full_name.to_string(),
            group_number: "G1".to_string(),
            programming_level: "Основы".to_string(),
            direction: Some("backend".to_string()),
            known_languages: "Python, JS".to_string(),
            motivation: "хочу помогать".to_string(),
            teaching_experience: "нет".to_string(),
        }
    }

    #[test]
    fn upsert_inserts_new_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.upsert(&sample("ivanov123", "Ivanov Ivan")).unwrap();

        let stored = store.get("ivanov123").unwrap().unwrap();
        assert_eq!(stored.application, sample("ivanov123", "Ivanov Ivan"));
    }

    #[test]
    fn resubmission_overwrites_every_field() {
        let store = SqliteStore::open_in_memory().unwrap();
        let first_at = Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap();
        let second_at = Utc.with_ymd_and_hms(2026, 9, 2, 10, 0, 0).unwrap();
        store
            .upsert_at(&sample("ivanov123", "Ivanov Ivan"), first_at)
            .unwrap();

        let mut second = sample("ivanov123", "Ivanov Ivan Petrovich");
        second.group_number = "G2".to_string();
        second.direction = None;
        second.teaching_experience = "вожатый в лагере".to_string();
        store.upsert_at(&second, second_at).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].application, second);
        assert_eq!(all[0].submitted_at, second_at);
    }

    #[test]
    fn list_orders_newest_first() {
        let store = SqliteStore::open_in_memory().unwrap();
        let older = Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2026, 9, 3, 10, 0, 0).unwrap();
        store.upsert_at(&sample("alpha", "A"), older).unwrap();
        store.upsert_at(&sample("beta", "B"), newer).unwrap();

        let names: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|s| s.application.username)
            .collect();
        assert_eq!(names, vec!["beta", "alpha"]);
    }

    #[test]
    fn get_unknown_username_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get("nobody").unwrap().is_none());
    }

    #[test]
    fn open_creates_file_and_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("applications.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.upsert(&sample("persisted", "P")).unwrap();
        }
        let reopened = SqliteStore::open(&path).unwrap();
        assert!(reopened.get("persisted").unwrap().is_some());
    }

    #[test]
    fn open_reports_unwritable_parent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let path = blocker.join("nested").join("applications.db");
        match SqliteStore::open(&path) {
            Err(StoreError::CreateDir { path: failed, .. }) => {
                assert_eq!(failed, blocker.join("nested"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("opened a database under a regular file"),
        }
    }
}
