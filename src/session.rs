use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::profile::CandidateProfile;

/// Who the current session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Employer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Employer => "employer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "candidate" => Some(Role::Candidate),
            "employer" => Some(Role::Employer),
            _ => None,
        }
    }
}

const KEY_SESSION: &str = "session_active";
const KEY_ROLE: &str = "user_role";
const KEY_PROFILE: &str = "candidate_profile";

/// Local key-value store standing in for the device's session storage.
///
/// Holds the authenticated flag, the role tag, and the candidate profile
/// blob. Single-user, no authorization semantics.
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Create a store that lives only for this process.
    pub fn new_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().context("Failed to create in-memory session store")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open (or create) a file-backed store.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .context(format!("Failed to open session store at {}", path))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS kv (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );
                "#,
            )
            .context("Failed to initialize session store schema")?;
        Ok(())
    }

    /// Read a raw value.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .context(format!("Failed to read key: {}", key))
    }

    /// Write a raw value, replacing any previous one.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .context(format!("Failed to write key: {}", key))?;
        Ok(())
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .context(format!("Failed to remove key: {}", key))?;
        Ok(())
    }

    /// Mark the session authenticated under the given role.
    pub fn begin_session(&self, role: Role) -> Result<()> {
        self.set(KEY_SESSION, "true")?;
        self.set(KEY_ROLE, role.as_str())
    }

    /// Drop the authenticated flag and the role tag.
    pub fn end_session(&self) -> Result<()> {
        self.remove(KEY_SESSION)?;
        self.remove(KEY_ROLE)
    }

    /// Role of the active session, or `None` when signed out.
    pub fn active_role(&self) -> Result<Option<Role>> {
        if self.get(KEY_SESSION)?.as_deref() != Some("true") {
            return Ok(None);
        }
        Ok(self.get(KEY_ROLE)?.as_deref().and_then(Role::parse))
    }

    /// Overwrite the role tag without touching the authenticated flag.
    pub fn set_role(&self, role: Role) -> Result<()> {
        self.set(KEY_ROLE, role.as_str())
    }

    /// Persist the candidate profile as JSON.
    pub fn save_profile(&self, profile: &CandidateProfile) -> Result<()> {
        let json = serde_json::to_string(profile).context("Failed to serialize profile")?;
        self.set(KEY_PROFILE, &json)
    }

    /// Load the candidate profile, if one has been saved.
    pub fn load_profile(&self) -> Result<Option<CandidateProfile>> {
        match self.get(KEY_PROFILE)? {
            Some(json) => {
                let profile =
                    serde_json::from_str(&json).context("Failed to deserialize profile")?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        let store = SessionStore::new_in_memory().unwrap();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_session_lifecycle() {
        let store = SessionStore::new_in_memory().unwrap();
        assert_eq!(store.active_role().unwrap(), None);

        store.begin_session(Role::Employer).unwrap();
        assert_eq!(store.active_role().unwrap(), Some(Role::Employer));

        store.set_role(Role::Candidate).unwrap();
        assert_eq!(store.active_role().unwrap(), Some(Role::Candidate));

        store.end_session().unwrap();
        assert_eq!(store.active_role().unwrap(), None);
    }

    #[test]
    fn test_profile_round_trip() {
        use crate::profile::CandidateProfile;

        let store = SessionStore::new_in_memory().unwrap();
        assert!(store.load_profile().unwrap().is_none());

        let profile = CandidateProfile {
            name: "Ana".to_string(),
            skills: vec!["stocking".to_string()],
            ..Default::default()
        };
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap(), Some(profile));
    }
}
