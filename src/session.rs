use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};
use tokio::fs;

// Slot names for the two persisted credentials. These are also the on-disk
// file names used by FileCredentialStore.
pub const TOKEN_SLOT: &str = "access_token";
pub const ROLE_SLOT: &str = "user_role";

// 1. Roles
/// Role
///
/// The closed set of principal roles the server can hand back at sign-in. Every
/// role comparison in the console goes through this enum, so a misspelled role
/// string can only ever fail closed (no role) instead of silently matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    CourseDirector,
    WellbeingOfficer,
    Student,
    User,
}

impl Role {
    /// Canonical wire name, exactly as the server sends and stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::CourseDirector => "course_director",
            Role::WellbeingOfficer => "wellbeing_officer",
            Role::Student => "student",
            Role::User => "user",
        }
    }

    /// parse
    ///
    /// Maps a wire value back onto the closed set. Matching is **exact and
    /// case-sensitive**; anything outside the set yields None rather than a guess,
    /// which downgrades the session to "authenticated, no role" instead of
    /// granting an unintended screen.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Role::Admin),
            "course_director" => Some(Role::CourseDirector),
            "wellbeing_officer" => Some(Role::WellbeingOfficer),
            "student" => Some(Role::Student),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 2. Session Snapshot
/// Session
///
/// A point-in-time copy of the authentication state: the bearer token (if any)
/// and the parsed role (if any). The route guard evaluates against a snapshot so
/// a single navigation decision can never observe a half-updated session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// Whether a bearer token is present. The role is only meaningful when this
    /// holds; a role slot left behind without a token never authenticates anyone.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(Role::Admin))
    }

    pub fn is_course_director(&self) -> bool {
        matches!(self.role, Some(Role::CourseDirector))
    }

    pub fn is_wellbeing_officer(&self) -> bool {
        matches!(self.role, Some(Role::WellbeingOfficer))
    }

    pub fn is_student(&self) -> bool {
        matches!(self.role, Some(Role::Student))
    }
}

// 3. CredentialStore Contract
/// CredentialStore
///
/// Defines the abstract contract for persisting the two credential slots across
/// console restarts. This trait allows us to swap the concrete implementation
/// (e.g., from the on-disk store to a local mock) without affecting the
/// SessionStore.
///
/// Persistence is strictly best-effort: a failing backend degrades the session to
/// memory-only, it never blocks sign-in or sign-out.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads a slot. Absent and unreadable slots are both reported as None.
    async fn get(&self, slot: &str) -> Option<String>;

    /// Writes a slot, replacing any previous value.
    async fn put(&self, slot: &str, value: &str) -> Result<(), String>;

    /// Removes a slot. Removing a slot that does not exist is not an error.
    async fn remove(&self, slot: &str) -> Result<(), String>;
}

/// CredentialState
///
/// The concrete type used to share the credential backend with the SessionStore.
pub type CredentialState = Arc<dyn CredentialStore>;

// 4. The Real Implementation (On-Disk Slots)
/// FileCredentialStore
///
/// The concrete implementation backing each slot with one small file under the
/// configured state directory. One file per slot keeps writes independent: a
/// failed role write can never corrupt the stored token.
#[derive(Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    /// new
    ///
    /// Constructs the store rooted at the state directory resolved by AppConfig.
    /// The directory itself is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, slot: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(slot)).await.ok()
    }

    async fn put(&self, slot: &str, value: &str) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| e.to_string())?;
        fs::write(self.slot_path(slot), value)
            .await
            .map_err(|e| e.to_string())
    }

    async fn remove(&self, slot: &str) -> Result<(), String> {
        match fs::remove_file(self.slot_path(slot)).await {
            Ok(()) => Ok(()),
            // Already gone is the desired end state.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }
}

// 5. The Mock Implementation (For Unit Tests)
/// MockCredentialStore
///
/// A mock implementation of `CredentialStore` used exclusively for unit and
/// integration testing. This allows us to exercise SessionStore semantics without
/// touching the filesystem, and to simulate a broken backend.
pub struct MockCredentialStore {
    slots: Mutex<HashMap<String, String>>,
    /// When true, all operations fail (gets report absent, writes error).
    pub should_fail: bool,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            should_fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            should_fail: true,
        }
    }
}

impl Default for MockCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn get(&self, slot: &str) -> Option<String> {
        if self.should_fail {
            return None;
        }
        self.slots.lock().unwrap().get(slot).cloned()
    }

    async fn put(&self, slot: &str, value: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock credential error: simulation requested".to_string());
        }
        self.slots
            .lock()
            .unwrap()
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock credential error: simulation requested".to_string());
        }
        self.slots.lock().unwrap().remove(slot);
        Ok(())
    }
}

// 6. The Session Store
/// SessionStore
///
/// Owns the in-memory session and mirrors every change into the credential
/// backend. The in-memory copy is **authoritative**: backend failures are logged
/// and the console carries on with whatever state it holds, so a read-only home
/// directory degrades persistence without breaking sign-in.
pub struct SessionStore {
    backend: CredentialState,
    current: RwLock<Session>,
}

impl SessionStore {
    /// open
    ///
    /// Builds the store by rehydrating both slots from the backend. A stored role
    /// that no longer parses is dropped (with a log line) rather than trusted, and
    /// a blank token slot counts as no credential at all. Rehydration never fails;
    /// the worst case is an empty session.
    pub async fn open(backend: CredentialState) -> Self {
        let access_token = backend.get(TOKEN_SLOT).await.filter(|t| !t.is_empty());
        let role = match backend.get(ROLE_SLOT).await {
            Some(raw) => {
                let parsed = Role::parse(&raw);
                if parsed.is_none() && !raw.is_empty() {
                    tracing::warn!(stored = %raw, "ignoring unrecognised persisted role");
                }
                parsed
            }
            None => None,
        };

        tracing::debug!(
            authenticated = access_token.is_some(),
            role = ?role,
            "session rehydrated"
        );

        Self {
            backend,
            current: RwLock::new(Session { access_token, role }),
        }
    }

    /// snapshot
    ///
    /// A consistent copy of the current session, taken under one lock acquisition.
    pub fn snapshot(&self) -> Session {
        self.current.read().unwrap().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.read().unwrap().access_token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.read().unwrap().role
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_authenticated()
    }

    pub fn is_student(&self) -> bool {
        self.current.read().unwrap().is_student()
    }

    /// set_token
    ///
    /// Stores the bearer token in memory, then mirrors it into the backend.
    pub async fn set_token(&self, token: &str) {
        self.current.write().unwrap().access_token = Some(token.to_string());
        if let Err(e) = self.backend.put(TOKEN_SLOT, token).await {
            tracing::error!(error = %e, "failed to persist access token");
        }
    }

    /// set_role
    ///
    /// Stores a parsed role in memory, then mirrors its wire name into the backend.
    pub async fn set_role(&self, role: Role) {
        self.current.write().unwrap().role = Some(role);
        if let Err(e) = self.backend.put(ROLE_SLOT, role.as_str()).await {
            tracing::error!(error = %e, "failed to persist role");
        }
    }

    /// establish
    ///
    /// Seeds the session from a successful sign-in response: token first, then
    /// role, matching the order callers observe through snapshots. A wire role
    /// outside the known set leaves the in-memory role empty but is still persisted
    /// verbatim, so the stored state stays faithful to what the server sent.
    pub async fn establish(&self, token: &str, wire_role: &str) {
        self.set_token(token).await;
        match Role::parse(wire_role) {
            Some(role) => self.set_role(role).await,
            None => {
                tracing::warn!(received = %wire_role, "server sent a role outside the known set");
                self.current.write().unwrap().role = None;
                if let Err(e) = self.backend.put(ROLE_SLOT, wire_role).await {
                    tracing::error!(error = %e, "failed to persist role");
                }
            }
        }
    }

    /// clear
    ///
    /// Drops the token and role together under a single lock acquisition, then
    /// removes both persisted slots. Idempotent: clearing an already-empty session
    /// is a no-op, never an error.
    pub async fn clear(&self) {
        {
            let mut current = self.current.write().unwrap();
            current.access_token = None;
            current.role = None;
        }
        if let Err(e) = self.backend.remove(TOKEN_SLOT).await {
            tracing::error!(error = %e, "failed to clear persisted token");
        }
        if let Err(e) = self.backend.remove(ROLE_SLOT).await {
            tracing::error!(error = %e, "failed to clear persisted role");
        }
    }
}
