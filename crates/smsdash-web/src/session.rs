//! Per-session UI state
//!
//! Each browser session owns a [`SessionState`] keyed by a cookie-borne id.
//! State only changes through [`SessionState::apply`].

use axum::http::{header, HeaderMap};
use dashmap::DashMap;
use smsdash_i18n::Locale;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// Idle time after which a session is dropped, unless configured.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// What one session has chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub language: Locale,
    /// `None` until the user picks a sector
    pub sector: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Locale::English)
    }
}

/// User actions that change session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetLanguage(Locale),
    SelectSector(String),
}

impl SessionState {
    pub const fn new(language: Locale) -> Self {
        Self {
            language,
            sector: None,
        }
    }

    /// Next state after `event`
    #[must_use]
    pub fn apply(self, event: Event) -> Self {
        match event {
            Event::SetLanguage(language) => Self { language, ..self },
            Event::SelectSector(sector) => Self {
                sector: Some(sector),
                ..self
            },
        }
    }
}

#[derive(Debug)]
struct Entry {
    state: SessionState,
    last_seen: Instant,
}

/// Concurrent map of live sessions.
///
/// Sessions idle for longer than the timeout are evicted whenever a new
/// session is started.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, Entry>,
    default_language: Locale,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(default_language: Locale) -> Self {
        Self::with_idle_timeout(default_language, DEFAULT_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(default_language: Locale, idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            default_language,
            idle_timeout,
        }
    }

    pub const fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    fn fresh(&self, now: Instant) -> Entry {
        Entry {
            state: SessionState::new(self.default_language),
            last_seen: now,
        }
    }

    /// Return the session for `id`, creating it when missing.
    ///
    /// A fresh id is minted when the request carried none. An unknown id
    /// (e.g. after a restart or eviction) gets a new default state under
    /// the same id.
    pub fn get_or_create(&self, id: Option<Uuid>) -> (Uuid, SessionState) {
        let id = id.unwrap_or_else(Uuid::new_v4);
        if !self.sessions.contains_key(&id) {
            self.cleanup_expired();
        }

        let now = Instant::now();
        let mut entry = self.sessions.entry(id).or_insert_with(|| {
            debug!("Starting session {}", id);
            self.fresh(now)
        });
        entry.last_seen = now;
        (id, entry.state.clone())
    }

    /// Apply an event to a session and return the new state
    pub fn update(&self, id: Uuid, event: Event) -> SessionState {
        let now = Instant::now();
        let mut entry = self.sessions.entry(id).or_insert_with(|| self.fresh(now));
        let next = entry.state.clone().apply(event);
        entry.state = next.clone();
        entry.last_seen = now;
        next
    }

    pub fn get(&self, id: &Uuid) -> Option<SessionState> {
        self.sessions.get(id).map(|e| e.state.clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions idle for longer than the timeout. Returns how many went.
    pub fn cleanup_expired(&self) -> usize {
        self.evict_idle(Instant::now())
    }

    fn evict_idle(&self, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= self.idle_timeout);
        let removed = before.saturating_sub(self.sessions.len());

        if removed > 0 {
            debug!("Evicted {} idle sessions", removed);
        }
        removed
    }
}

/// Read the session id from the request's `Cookie` headers
pub fn session_id(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to a session
pub fn session_cookie(cookie_name: &str, id: Uuid) -> String {
    format!("{cookie_name}={id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_initial_state_is_english_without_sector() {
        let state = SessionState::default();
        assert_eq!(state.language, Locale::English);
        assert_eq!(state.sector, None);
    }

    #[test]
    fn test_transitions() {
        let state = SessionState::default()
            .apply(Event::SetLanguage(Locale::French))
            .apply(Event::SelectSector("Retail".to_string()));
        assert_eq!(state.language, Locale::French);
        assert_eq!(state.sector.as_deref(), Some("Retail"));

        // Language changes keep the sector
        let state = state.apply(Event::SetLanguage(Locale::English));
        assert_eq!(state.language, Locale::English);
        assert_eq!(state.sector.as_deref(), Some("Retail"));

        // Selecting the current language is a no-op
        let same = state.clone().apply(Event::SetLanguage(Locale::English));
        assert_eq!(same, state);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new(Locale::English);
        let (a, _) = store.get_or_create(None);
        let (b, _) = store.get_or_create(None);
        assert_ne!(a, b);

        store.update(a, Event::SetLanguage(Locale::French));
        assert_eq!(store.get(&a).unwrap().language, Locale::French);
        assert_eq!(store.get(&b).unwrap().language, Locale::English);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_adopted() {
        let store = SessionStore::new(Locale::French);
        let id = Uuid::new_v4();
        let (got, state) = store.get_or_create(Some(id));
        assert_eq!(got, id);
        assert_eq!(state.language, Locale::French);
    }

    fn backdate(store: &SessionStore, id: Uuid, by: Duration) {
        let mut entry = store.sessions.get_mut(&id).unwrap();
        entry.last_seen = entry.last_seen.checked_sub(by).unwrap();
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let store = SessionStore::with_idle_timeout(Locale::English, Duration::from_secs(5));
        let (stale, _) = store.get_or_create(None);
        let (active, _) = store.get_or_create(None);
        store.update(stale, Event::SetLanguage(Locale::French));
        backdate(&store, stale, Duration::from_secs(30));

        // Starting a new session sweeps the stale one
        let (fresh, _) = store.get_or_create(None);
        assert_eq!(store.len(), 2);
        assert!(store.get(&stale).is_none());
        assert!(store.get(&active).is_some());
        assert!(store.get(&fresh).is_some());

        // A returning browser starts over under its old id
        let (id, state) = store.get_or_create(Some(stale));
        assert_eq!(id, stale);
        assert_eq!(state.language, Locale::English);
    }

    #[test]
    fn test_requests_keep_sessions_alive() {
        let store = SessionStore::with_idle_timeout(Locale::English, Duration::from_secs(5));
        let (id, _) = store.get_or_create(None);
        backdate(&store, id, Duration::from_secs(30));

        store.get_or_create(Some(id));
        assert_eq!(store.cleanup_expired(), 0);
        assert_eq!(store.len(), 1);

        let now = Instant::now();
        assert_eq!(store.evict_idle(now + Duration::from_secs(2)), 0);
        assert_eq!(store.evict_idle(now + Duration::from_secs(6)), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_default_idle_timeout() {
        assert_eq!(SessionStore::new(Locale::English).idle_timeout(), DEFAULT_IDLE_TIMEOUT);
    }

    #[test]
    fn test_session_cookie_round_trip() {
        let id = Uuid::new_v4();
        let cookie = session_cookie("smsdash_session", id);
        assert!(cookie.starts_with(&format!("smsdash_session={id}")));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; smsdash_session={id}")).unwrap(),
        );
        assert_eq!(session_id(&headers, "smsdash_session"), Some(id));
        assert_eq!(session_id(&headers, "other"), None);
    }

    #[test]
    fn test_malformed_cookie_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("smsdash_session=nope"));
        assert_eq!(session_id(&headers, "smsdash_session"), None);
    }
}
