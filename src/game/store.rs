//! Session persistence
//!
//! Sessions are stored per puzzle length so simultaneous configurations
//! never collide. The file store keeps each session as a small JSON file;
//! the memory store backs tests through the same serialization path.

use crate::game::GameSession;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where sessions live between runs, keyed by puzzle length.
pub trait SessionStore {
    /// Load the saved session for this puzzle length.
    ///
    /// Absent and unparseable saves both come back as `None`; a corrupt
    /// save is repaired by the next [`save`](Self::save), not by failing
    /// the load.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing storage itself cannot be
    /// read.
    fn load(&self, length: usize) -> Result<Option<GameSession>>;

    /// Persist the session for this puzzle length.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be written to the
    /// backing storage.
    fn save(&self, length: usize, session: &GameSession) -> Result<()>;
}

/// File-backed store writing one JSON file per puzzle length.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first save.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, length: usize) -> PathBuf {
        self.dir.join(format!("game-{length}.json"))
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self, length: usize) -> Result<Option<GameSession>> {
        let path = self.path_for(length);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read save file {}", path.display()));
            }
        };

        // A save we cannot parse is treated as absent, not fatal; the
        // next save overwrites it
        Ok(serde_json::from_str(&content).ok())
    }

    fn save(&self, length: usize, session: &GameSession) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create save directory {}", self.dir.display()))?;

        let path = self.path_for(length);
        let json = serde_json::to_string_pretty(session).context("failed to serialize session")?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write save file {}", path.display()))
    }
}

/// In-memory store, primarily for tests.
///
/// Sessions still round-trip through JSON so this exercises the same
/// serialization path as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: RefCell<FxHashMap<usize, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, length: usize) -> Result<Option<GameSession>> {
        let sessions = self.sessions.borrow();
        Ok(sessions
            .get(&length)
            .and_then(|json| serde_json::from_str(json).ok()))
    }

    fn save(&self, length: usize, session: &GameSession) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.sessions.borrow_mut().insert(length, json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use std::env;

    fn temp_store(test_name: &str) -> JsonFileStore {
        let dir = env::temp_dir().join(format!("kelimece-{}-{}", test_name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        JsonFileStore::new(dir)
    }

    fn played_session(target: &str, guess: &str) -> GameSession {
        let words = WordList::embedded();
        let mut session = GameSession::start(Word::new(target).unwrap());
        for ch in guess.chars() {
            session.push_letter(ch);
        }
        session.submit(&words);
        session
    }

    #[test]
    fn missing_save_loads_as_none() {
        let store = temp_store("missing");
        assert_eq!(store.load(5).unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("round-trip");
        let session = played_session("kalem", "kapak");

        store.save(5, &session).unwrap();
        let loaded = store.load(5).unwrap();

        assert_eq!(loaded, Some(session));
        let _ = fs::remove_dir_all(&store.dir);
    }

    #[test]
    fn lengths_do_not_collide() {
        let store = temp_store("lengths");
        let short = GameSession::start(Word::new("iğde").unwrap());
        let long = GameSession::start(Word::new("kalem").unwrap());

        store.save(4, &short).unwrap();
        store.save(5, &long).unwrap();

        assert_eq!(store.load(4).unwrap().unwrap().target().text(), "iğde");
        assert_eq!(store.load(5).unwrap().unwrap().target().text(), "kalem");
        let _ = fs::remove_dir_all(&store.dir);
    }

    #[test]
    fn corrupt_save_loads_as_none() {
        let store = temp_store("corrupt");
        fs::create_dir_all(&store.dir).unwrap();
        fs::write(store.path_for(5), "not json {").unwrap();

        assert_eq!(store.load(5).unwrap(), None);
        let _ = fs::remove_dir_all(&store.dir);
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = temp_store("overwrite");
        store.save(5, &played_session("kalem", "kapak")).unwrap();
        store.save(5, &GameSession::start(Word::new("engel").unwrap())).unwrap();

        let loaded = store.load(5).unwrap().unwrap();
        assert_eq!(loaded.target().text(), "engel");
        assert!(loaded.history().is_empty());
        let _ = fs::remove_dir_all(&store.dir);
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        let session = played_session("kalem", "kapak");

        assert_eq!(store.load(5).unwrap(), None);
        store.save(5, &session).unwrap();
        assert_eq!(store.load(5).unwrap(), Some(session));
    }

    #[test]
    fn memory_store_keys_by_length() {
        let store = MemoryStore::new();
        store.save(4, &GameSession::start(Word::new("iğde").unwrap())).unwrap();

        assert!(store.load(4).unwrap().is_some());
        assert_eq!(store.load(5).unwrap(), None);
    }
}
