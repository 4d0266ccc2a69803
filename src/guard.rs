use crate::routes::{self, Route};
use crate::session::{Session, SessionStore};
use std::sync::{Arc, RwLock};

/// GuardDecision
///
/// The outcome of evaluating one navigation attempt. `Redirect` carries the
/// destination and whether the session must be purged first; the purge flag is
/// only ever raised by the unauthenticated rule, which treats any leftover
/// partial credentials as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect {
        to: &'static str,
        clear_session: bool,
    },
}

/// evaluate
///
/// The route guard: a pure function from (target route, session snapshot) to a
/// decision. Rules run in a fixed order and the **first match wins**:
///
/// 1. Protected target without a session → redirect to the sign-in screen,
///    purging the session on the way.
/// 2. Signed-in principal on a sign-in/registration screen → redirect to their
///    landing screen.
/// 3. Student outside the student allow-list → redirect to their profile.
/// 4. Role-gated target where the session's role is absent or not in the set →
///    redirect to the principal's landing screen.
/// 5. Otherwise allow.
///
/// The function never errors and never panics. Redirect targets are themselves
/// admissible for the session that produced them, so applying one decision
/// settles the navigation; no re-evaluation loop is needed.
pub fn evaluate(route: &Route, session: &Session) -> GuardDecision {
    // 1. Authentication wall.
    if route.requires_auth && !session.is_authenticated() {
        return GuardDecision::Redirect {
            to: routes::ENTRY_ROUTE,
            clear_session: true,
        };
    }

    // 2. No sign-in screens for signed-in principals.
    if session.is_authenticated() && routes::is_entry(route.name) {
        return GuardDecision::Redirect {
            to: routes::landing_for(session),
            clear_session: false,
        };
    }

    // 3. Students stay inside their allow-list.
    if session.is_authenticated() && session.is_student() && !routes::student_allowed(route.name) {
        return GuardDecision::Redirect {
            to: routes::STUDENT_LANDING,
            clear_session: false,
        };
    }

    // 4. Role-gated screens require exact membership. A missing role fails the
    // check the same way a wrong one does.
    if let Some(allowed) = route.requires_role {
        let permitted = session.role.is_some_and(|role| allowed.contains(&role));
        if !permitted {
            return GuardDecision::Redirect {
                to: routes::landing_for(session),
                clear_session: false,
            };
        }
    }

    // 5. Nothing objected.
    GuardDecision::Allow
}

/// NavOutcome
///
/// What a navigation attempt actually did, reported back to the caller so the
/// shell can say so out loud. `Redirected` names both the screen that was asked
/// for and the one the guard sent us to instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Moved { to: &'static str },
    Redirected { requested: &'static str, to: &'static str },
    UnknownRoute { requested: String },
}

/// Navigator
///
/// Owns the current screen and applies guard decisions to move between screens.
/// Every `navigate` call is an independent decision against a fresh session
/// snapshot; the navigator holds no memory of past decisions beyond where it
/// currently stands.
pub struct Navigator {
    session: Arc<SessionStore>,
    current: RwLock<&'static str>,
}

impl Navigator {
    /// new
    ///
    /// Starts at the sign-in screen. Callers wanting to resume a rehydrated
    /// session navigate to the appropriate landing screen right after startup.
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            current: RwLock::new(routes::ENTRY_ROUTE),
        }
    }

    /// The name of the screen the console currently stands on.
    pub fn current(&self) -> &'static str {
        *self.current.read().unwrap()
    }

    /// navigate
    ///
    /// Resolves the name against the route table, runs the guard, and applies
    /// the decision: moving to the target, or moving to the redirect destination
    /// (clearing the session first when the decision demands it). Unknown names
    /// leave the navigator exactly where it was.
    pub async fn navigate(&self, name: &str) -> NavOutcome {
        let Some(route) = routes::find(name) else {
            tracing::warn!(requested = %name, "navigation to unknown route");
            return NavOutcome::UnknownRoute {
                requested: name.to_string(),
            };
        };

        let session = self.session.snapshot();
        match evaluate(route, &session) {
            GuardDecision::Allow => {
                *self.current.write().unwrap() = route.name;
                tracing::debug!(to = %route.name, "navigation allowed");
                NavOutcome::Moved { to: route.name }
            }
            GuardDecision::Redirect { to, clear_session } => {
                if clear_session {
                    self.session.clear().await;
                }
                *self.current.write().unwrap() = to;
                tracing::debug!(requested = %route.name, to = %to, "navigation redirected");
                NavOutcome::Redirected {
                    requested: route.name,
                    to,
                }
            }
        }
    }

    /// force_to
    ///
    /// Moves without consulting the guard. Reserved for the unauthorized
    /// response handler, which has already cleared the session and must land on
    /// the sign-in screen unconditionally.
    pub fn force_to(&self, name: &'static str) {
        *self.current.write().unwrap() = name;
    }
}
