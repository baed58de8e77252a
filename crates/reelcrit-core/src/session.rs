use anyhow::Result;
use reelcrit_config::SessionStore;
use reelcrit_models::Member;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No token held.
    Anonymous,
    /// A token is held. It may still be rejected server-side; that is only
    /// discovered when a call fails with the expiry signal.
    Active,
    /// The token was rejected as expired. One-way: the only exits are
    /// `login` and `logout`.
    Expired,
}

/// Client-side session lifecycle. Hydrated once from persisted storage at
/// startup, no network round-trip; invalidation and logout clear that
/// storage wholesale.
pub struct Session {
    store: SessionStore,
    state: SessionState,
    token: Option<String>,
    member: Option<Member>,
}

impl Session {
    pub fn init(mut store: SessionStore) -> Result<Self> {
        store.load()?;
        let token = store.token().cloned();
        let member = store.member().cloned();
        let state = if token.is_some() {
            SessionState::Active
        } else {
            SessionState::Anonymous
        };
        Ok(Self {
            store,
            state,
            token,
            member,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Token for authorized calls; absent unless the session is active.
    pub fn token(&self) -> Option<&str> {
        match self.state {
            SessionState::Active => self.token.as_deref(),
            _ => None,
        }
    }

    /// The member record may be stale if the token expired server-side; it
    /// is corrected the next time a call fails with the expiry signal.
    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    pub fn login(&mut self, token: String, member: Member) -> Result<()> {
        self.store.set(token.clone(), member.clone());
        self.store.save()?;
        self.token = Some(token);
        self.member = Some(member);
        self.state = SessionState::Active;
        info!("logged in as {}", self.member.as_ref().map(|m| m.nick_name.as_str()).unwrap_or(""));
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.clear();
        self.store.save()?;
        self.token = None;
        self.member = None;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Active → Expired, one-way and idempotent. Returns true only for the
    /// call that performed the transition, so concurrent in-flight failures
    /// surface the re-login prompt exactly once. Persisted token and member
    /// are cleared together on that first call.
    pub fn invalidate(&mut self) -> Result<bool> {
        match self.state {
            SessionState::Active => {
                self.state = SessionState::Expired;
                self.token = None;
                self.member = None;
                self.store.clear();
                self.store.save()?;
                info!("session invalidated: token expired");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn store_in(dir: &tempfile::TempDir) -> (SessionStore, PathBuf) {
        let path = dir.path().join("session.toml");
        (SessionStore::new(path.clone()), path)
    }

    fn member(nick: &str) -> Member {
        Member {
            nick_name: nick.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn init_without_stored_token_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_in(&dir);
        let session = Session::init(store).unwrap();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.token().is_none());
    }

    #[test]
    fn init_hydrates_from_persisted_storage() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, path) = store_in(&dir);
        store.set("tok-1".into(), member("mina"));
        store.save().unwrap();

        let session = Session::init(SessionStore::new(path)).unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.member().unwrap().nick_name, "mina");
    }

    #[test]
    fn invalidate_is_one_way_and_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, path) = store_in(&dir);
        store.set("tok-1".into(), member("mina"));
        store.save().unwrap();

        let mut session = Session::init(SessionStore::new(path.clone())).unwrap();
        assert!(session.invalidate().unwrap());
        assert_eq!(session.state(), SessionState::Expired);
        assert!(session.token().is_none());
        assert!(session.member().is_none());

        // Concurrent failures reaching the handler after the first act do
        // nothing further.
        assert!(!session.invalidate().unwrap());
        assert!(!session.invalidate().unwrap());

        // Storage was cleared by the first call.
        let mut reloaded = SessionStore::new(path);
        reloaded.load().unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn invalidate_on_anonymous_session_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_in(&dir);
        let mut session = Session::init(store).unwrap();
        assert!(!session.invalidate().unwrap());
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn login_after_expiry_reactivates() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, path) = store_in(&dir);
        store.set("tok-1".into(), member("mina"));
        store.save().unwrap();

        let mut session = Session::init(SessionStore::new(path.clone())).unwrap();
        session.invalidate().unwrap();
        session.login("tok-2".into(), member("mina")).unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.token(), Some("tok-2"));

        let mut reloaded = SessionStore::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.token().map(String::as_str), Some("tok-2"));
    }

    #[test]
    fn logout_clears_everything() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, path) = store_in(&dir);
        store.set("tok-1".into(), member("mina"));
        store.save().unwrap();

        let mut session = Session::init(SessionStore::new(path.clone())).unwrap();
        session.logout().unwrap();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.member().is_none());

        let mut reloaded = SessionStore::new(path);
        reloaded.load().unwrap();
        assert!(reloaded.is_empty());
    }
}
