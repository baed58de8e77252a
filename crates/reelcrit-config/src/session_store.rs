use anyhow::Result;
use reelcrit_models::Member;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
struct SessionData {
    token: Option<String>,
    member: Option<Member>,
}

/// Persisted session storage (token + member record), the source of truth
/// across runs. Written on login, cleared wholesale on logout or expiry.
pub struct SessionStore {
    path: PathBuf,
    data: SessionData,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: SessionData::default(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            self.data = toml::from_str(&content)?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn token(&self) -> Option<&String> {
        self.data.token.as_ref()
    }

    pub fn member(&self) -> Option<&Member> {
        self.data.member.as_ref()
    }

    pub fn set(&mut self, token: String, member: Member) {
        self.data.token = Some(token);
        self.data.member = Some(member);
    }

    /// Drops token and member together; a session is never half-cleared.
    pub fn clear(&mut self) {
        self.data = SessionData::default();
    }

    pub fn is_empty(&self) -> bool {
        self.data.token.is_none() && self.data.member.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(nick: &str) -> Member {
        Member {
            nick_name: nick.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut store = SessionStore::new(path.clone());
        store.set("tok-123".into(), member("mina"));
        store.save().unwrap();

        let mut reloaded = SessionStore::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.token().map(String::as_str), Some("tok-123"));
        assert_eq!(reloaded.member().unwrap().nick_name, "mina");
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path().join("session.toml"));
        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn clear_drops_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut store = SessionStore::new(path.clone());
        store.set("tok".into(), member("mina"));
        store.save().unwrap();
        store.clear();
        store.save().unwrap();

        let mut reloaded = SessionStore::new(path);
        reloaded.load().unwrap();
        assert!(reloaded.is_empty());
    }
}
