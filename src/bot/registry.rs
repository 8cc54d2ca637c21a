//! Per-user session registry
//!
//! Sessions are keyed by [`UserId`]. Each one sits behind its own mutex so
//! a user's messages are applied one at a time while other users proceed
//! independently. In durable mode the registry is mirrored to a JSON file
//! after every handled message and restored on startup.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::session::{Session, UserId};

const SNAPSHOT_VERSION: u32 = 1;

pub(crate) type SessionSlot = Arc<Mutex<Session>>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    sessions: Vec<SnapshotEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    user: UserId,
    session: Session,
}

/// Lock a session slot, recovering the data if a previous holder panicked
pub(crate) fn lock_session(slot: &SessionSlot) -> MutexGuard<'_, Session> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) struct SessionRegistry {
    sessions: Mutex<HashMap<UserId, SessionSlot>>,
    snapshot_path: Option<PathBuf>,
    /// Held from collecting sessions until the snapshot is renamed into place
    persist_lock: Mutex<()>,
}

impl SessionRegistry {
    /// Registry that lives only as long as the process
    pub(crate) fn volatile() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            snapshot_path: None,
            persist_lock: Mutex::new(()),
        }
    }

    /// Registry restored from, and mirrored to, `path`
    pub(crate) fn durable(path: PathBuf) -> Self {
        let sessions = Self::load_snapshot(&path);
        if !sessions.is_empty() {
            tracing::debug!(count = sessions.len(), path = %path.display(), "restored sessions");
        }
        Self {
            sessions: Mutex::new(sessions),
            snapshot_path: Some(path),
            persist_lock: Mutex::new(()),
        }
    }

    fn load_snapshot(path: &Path) -> HashMap<UserId, SessionSlot> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot open session snapshot");
                return HashMap::new();
            }
        };
        let snapshot: Snapshot = match serde_json::from_reader(file) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session snapshot");
                return HashMap::new();
            }
        };
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                path = %path.display(),
                version = snapshot.version,
                "ignoring session snapshot with unknown version"
            );
            return HashMap::new();
        }
        snapshot
            .sessions
            .into_iter()
            .map(|entry| (entry.user, Arc::new(Mutex::new(entry.session))))
            .collect()
    }

    fn map(&self) -> MutexGuard<'_, HashMap<UserId, SessionSlot>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn get(&self, user: UserId) -> Option<SessionSlot> {
        self.map().get(&user).cloned()
    }

    /// Replace any session of `user` with a fresh one. Returns the new slot
    /// and whether a previous session existed.
    pub(crate) fn start(&self, user: UserId) -> (SessionSlot, bool) {
        let slot: SessionSlot = Arc::new(Mutex::new(Session::new()));
        let previous = self.map().insert(user, Arc::clone(&slot));
        let had_previous = previous.is_some();
        if let Some(old) = previous {
            lock_session(&old).closed = true;
        }
        (slot, had_previous)
    }

    /// Drop `slot` if it is still the session registered for `user`. The
    /// caller marks the session closed while holding its lock.
    pub(crate) fn remove(&self, user: UserId, slot: &SessionSlot) -> bool {
        let mut map = self.map();
        match map.get(&user) {
            Some(current) if Arc::ptr_eq(current, slot) => {
                map.remove(&user);
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map().len()
    }

    /// Write the snapshot file in durable mode. Must not be called while
    /// holding a session lock.
    pub(crate) fn persist(&self) {
        let Some(path) = &self.snapshot_path else {
            return;
        };
        // Writers collect and rename one at a time so an older copy never
        // replaces a newer one.
        let _writer = self
            .persist_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let slots: Vec<(UserId, SessionSlot)> = self
            .map()
            .iter()
            .map(|(user, slot)| (*user, Arc::clone(slot)))
            .collect();

        let mut sessions: Vec<SnapshotEntry> = slots
            .iter()
            .filter_map(|(user, slot)| {
                let session = lock_session(slot);
                if session.closed {
                    return None;
                }
                Some(SnapshotEntry {
                    user: *user,
                    session: session.clone(),
                })
            })
            .collect();
        sessions.sort_by_key(|entry| entry.user);

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            sessions,
        };
        if let Err(e) = write_snapshot(path, &snapshot) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write session snapshot");
        }
    }
}

/// Write to a sibling temp file, then rename over the target
fn write_snapshot(path: &Path, snapshot: &Snapshot) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer(&mut writer, snapshot)?;
        writer.flush()?;
    }
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::flow::{Field, Form};
    use crate::bot::session::State;

    #[test]
    fn start_replaces_and_closes_previous_session() {
        let registry = SessionRegistry::volatile();
        let (first, had_previous) = registry.start(UserId(1));
        assert!(!had_previous);

        let (second, had_previous) = registry.start(UserId(1));
        assert!(had_previous);
        assert!(lock_session(&first).closed);
        assert!(!lock_session(&second).closed);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn users_get_independent_sessions() {
        let registry = SessionRegistry::volatile();
        let (a, _) = registry.start(UserId(1));
        registry.start(UserId(2));
        lock_session(&a).state = State::Answering(Field::FullName);

        let b = registry.get(UserId(2)).unwrap();
        assert_eq!(lock_session(&b).state, State::Menu);
    }

    #[test]
    fn remove_forgets_user() {
        let registry = SessionRegistry::volatile();
        let (slot, _) = registry.start(UserId(7));
        assert!(registry.remove(UserId(7), &slot));
        assert!(registry.get(UserId(7)).is_none());
        assert!(!registry.remove(UserId(7), &slot));
    }

    #[test]
    fn remove_ignores_replaced_slot() {
        let registry = SessionRegistry::volatile();
        let (stale, _) = registry.start(UserId(7));
        registry.start(UserId(7));
        assert!(!registry.remove(UserId(7), &stale));
        assert!(registry.get(UserId(7)).is_some());
    }

    #[test]
    fn durable_registry_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("sessions.json");

        let registry = SessionRegistry::durable(path.clone());
        let (slot, _) = registry.start(UserId(42));
        {
            let mut session = lock_session(&slot);
            session.state = State::Answering(Field::GroupNumber);
            session.answers.set(Field::FullName, "Ivanov Ivan".to_string());
        }
        registry.persist();

        let reloaded = SessionRegistry::durable(path);
        let slot = reloaded.get(UserId(42)).unwrap();
        let session = lock_session(&slot);
        assert_eq!(session.state, State::Answering(Field::GroupNumber));
        assert_eq!(session.answers.get(Field::FullName), Some("Ivanov Ivan"));
    }

    #[test]
    fn removed_sessions_are_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");

        let registry = SessionRegistry::durable(path.clone());
        registry.start(UserId(1));
        let (second, _) = registry.start(UserId(2));
        registry.remove(UserId(2), &second);
        registry.persist();

        let reloaded = SessionRegistry::durable(path);
        assert!(reloaded.get(UserId(1)).is_some());
        assert!(reloaded.get(UserId(2)).is_none());
    }

    #[test]
    fn corrupt_or_stale_snapshot_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{not json").unwrap();
        assert_eq!(SessionRegistry::durable(corrupt).len(), 0);

        let stale = dir.path().join("stale.json");
        fs::write(
            &stale,
            r#"{"version":0,"sessions":[{"user":1,"session":{"state":{"state":"menu"}}}]}"#,
        )
        .unwrap();
        assert_eq!(SessionRegistry::durable(stale).len(), 0);
    }

    #[test]
    fn missing_or_unopenable_snapshot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(SessionRegistry::durable(dir.path().join("absent.json")).len(), 0);

        let not_a_file = dir.path().join("sessions.json");
        fs::create_dir(&not_a_file).unwrap();
        assert_eq!(SessionRegistry::durable(not_a_file).len(), 0);
    }

    #[test]
    fn concurrent_persists_keep_every_latest_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        let registry = SessionRegistry::durable(path.clone());
        let fields = Form::Full.fields();

        std::thread::scope(|scope| {
            for n in 0..8 {
                let registry = &registry;
                scope.spawn(move || {
                    let (slot, _) = registry.start(UserId(n));
                    registry.persist();
                    for field in fields {
                        lock_session(&slot).state = State::Answering(*field);
                        registry.persist();
                    }
                });
            }
        });

        let reloaded = SessionRegistry::durable(path);
        for n in 0..8 {
            let slot = reloaded.get(UserId(n)).unwrap();
            assert_eq!(
                lock_session(&slot).state,
                State::Answering(Field::TeachingExperience),
                "user {n}"
            );
        }
    }
}
