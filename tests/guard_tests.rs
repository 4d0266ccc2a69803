use std::sync::Arc;
use wellbeing_console::guard::{evaluate, GuardDecision, NavOutcome, Navigator};
use wellbeing_console::routes::{self, ENTRY_ROUTE, ROUTES, STAFF_LANDING, STUDENT_LANDING};
use wellbeing_console::session::{
    CredentialState, CredentialStore, MockCredentialStore, Role, Session, SessionStore,
};

// --- Session Fixtures ---

fn signed_out() -> Session {
    Session::default()
}

fn signed_in(role: Role) -> Session {
    Session {
        access_token: Some("tok-test".to_string()),
        role: Some(role),
    }
}

/// A token without a parsed role, as happens when the server sends a role
/// outside the known set.
fn signed_in_roleless() -> Session {
    Session {
        access_token: Some("tok-test".to_string()),
        role: None,
    }
}

fn route(name: &str) -> &'static routes::Route {
    routes::find(name).expect("route must exist in the table")
}

// --- Rule 1: Authentication Wall ---

#[test]
fn test_protected_route_redirects_signed_out_to_entry() {
    let decision = evaluate(route("dashboard"), &signed_out());
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: ENTRY_ROUTE,
            clear_session: true,
        }
    );
}

#[test]
fn test_every_protected_route_is_walled_off_when_signed_out() {
    for r in ROUTES.iter().filter(|r| r.requires_auth) {
        let decision = evaluate(r, &signed_out());
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: ENTRY_ROUTE,
                clear_session: true,
            },
            "route {} must be unreachable signed out",
            r.name
        );
    }
}

#[test]
fn test_entry_screens_are_open_when_signed_out() {
    for name in ["staff-login", "staff-register", "student-login", "student-register"] {
        assert_eq!(
            evaluate(route(name), &signed_out()),
            GuardDecision::Allow,
            "entry screen {name} must be open"
        );
    }
}

// --- Rule 2: No Entry Screens While Signed In ---

#[test]
fn test_signed_in_staff_bounce_off_entry_screens() {
    for name in ["staff-login", "staff-register", "student-login", "student-register"] {
        let decision = evaluate(route(name), &signed_in(Role::Admin));
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: STAFF_LANDING,
                clear_session: false,
            },
            "entry screen {name} must bounce signed-in staff"
        );
    }
}

#[test]
fn test_signed_in_student_bounces_to_their_profile() {
    let decision = evaluate(route("staff-login"), &signed_in(Role::Student));
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: STUDENT_LANDING,
            clear_session: false,
        }
    );
}

// --- Rule 3: Student Confinement ---

#[test]
fn test_student_may_visit_profile_and_survey() {
    assert_eq!(
        evaluate(route("my-profile"), &signed_in(Role::Student)),
        GuardDecision::Allow
    );
    assert_eq!(
        evaluate(route("survey"), &signed_in(Role::Student)),
        GuardDecision::Allow
    );
}

#[test]
fn test_student_is_confined_everywhere_else() {
    for name in ["dashboard", "students", "modules", "users", "alerts", "analytics", "grades"] {
        let decision = evaluate(route(name), &signed_in(Role::Student));
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: STUDENT_LANDING,
                clear_session: false,
            },
            "student must be confined away from {name}"
        );
    }
}

// --- Rule 4: Role Gates ---

#[test]
fn test_users_screen_is_admin_only() {
    assert_eq!(
        evaluate(route("users"), &signed_in(Role::Admin)),
        GuardDecision::Allow
    );
    for role in [Role::CourseDirector, Role::WellbeingOfficer, Role::User] {
        assert_eq!(
            evaluate(route("users"), &signed_in(role)),
            GuardDecision::Redirect {
                to: STAFF_LANDING,
                clear_session: false,
            },
            "{role:?} must not reach the users screen"
        );
    }
}

#[test]
fn test_academic_and_wellbeing_screens_split_by_role() {
    // Academic records belong to course directors (and admins).
    assert_eq!(
        evaluate(route("modules"), &signed_in(Role::CourseDirector)),
        GuardDecision::Allow
    );
    assert_ne!(
        evaluate(route("modules"), &signed_in(Role::WellbeingOfficer)),
        GuardDecision::Allow
    );

    // Alerts belong to wellbeing officers (and admins).
    assert_eq!(
        evaluate(route("alerts"), &signed_in(Role::WellbeingOfficer)),
        GuardDecision::Allow
    );
    assert_ne!(
        evaluate(route("alerts"), &signed_in(Role::CourseDirector)),
        GuardDecision::Allow
    );

    // Admin passes both gates.
    assert_eq!(
        evaluate(route("modules"), &signed_in(Role::Admin)),
        GuardDecision::Allow
    );
    assert_eq!(
        evaluate(route("alerts"), &signed_in(Role::Admin)),
        GuardDecision::Allow
    );
}

#[test]
fn test_analytics_admits_all_staff_roles() {
    for role in [Role::Admin, Role::CourseDirector, Role::WellbeingOfficer] {
        assert_eq!(
            evaluate(route("analytics"), &signed_in(role)),
            GuardDecision::Allow,
            "{role:?} must reach analytics"
        );
    }
}

#[test]
fn test_missing_role_fails_role_gates_but_not_plain_auth() {
    let session = signed_in_roleless();

    // A role-gated screen treats a missing role as a wrong one.
    assert_eq!(
        evaluate(route("users"), &session),
        GuardDecision::Redirect {
            to: STAFF_LANDING,
            clear_session: false,
        }
    );

    // A merely-authenticated screen still opens.
    assert_eq!(evaluate(route("dashboard"), &session), GuardDecision::Allow);
}

// --- Determinism and Redirect Stability ---

#[test]
fn test_evaluation_is_deterministic() {
    let sessions = [signed_out(), signed_in(Role::Admin), signed_in(Role::Student)];
    for r in ROUTES {
        for session in &sessions {
            assert_eq!(
                evaluate(r, session),
                evaluate(r, session),
                "two evaluations of {} must agree",
                r.name
            );
        }
    }
}

#[test]
fn test_redirect_targets_are_themselves_admissible() {
    // Applying any redirect must land on a screen the same session is allowed
    // to stand on, so one decision settles a navigation.
    let sessions = [
        signed_out(),
        signed_in_roleless(),
        signed_in(Role::Admin),
        signed_in(Role::CourseDirector),
        signed_in(Role::WellbeingOfficer),
        signed_in(Role::Student),
        signed_in(Role::User),
    ];

    for r in ROUTES {
        for session in &sessions {
            if let GuardDecision::Redirect { to, clear_session } = evaluate(r, session) {
                let effective = if clear_session {
                    Session::default()
                } else {
                    session.clone()
                };
                assert_eq!(
                    evaluate(route(to), &effective),
                    GuardDecision::Allow,
                    "redirect {} -> {} must settle for {:?}",
                    r.name,
                    to,
                    session.role
                );
            }
        }
    }
}

// --- Route Table Shape ---

#[test]
fn test_route_names_and_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.name, b.name, "duplicate route name");
            assert_ne!(a.path, b.path, "duplicate route path");
        }
    }
}

#[test]
fn test_find_resolves_known_names_only() {
    assert!(routes::find("dashboard").is_some());
    assert!(routes::find("student-detail").is_some());
    assert!(routes::find("does-not-exist").is_none());
    // Lookups are exact, not fuzzy.
    assert!(routes::find("Dashboard").is_none());
}

#[test]
fn test_landing_depends_on_session_shape() {
    assert_eq!(routes::landing_for(&signed_out()), ENTRY_ROUTE);
    assert_eq!(routes::landing_for(&signed_in(Role::Admin)), STAFF_LANDING);
    assert_eq!(routes::landing_for(&signed_in_roleless()), STAFF_LANDING);
    assert_eq!(
        routes::landing_for(&signed_in(Role::Student)),
        STUDENT_LANDING
    );
}

// --- Navigator ---

async fn navigator_with(session: Option<(&str, &str)>) -> (Arc<SessionStore>, Navigator) {
    let backend = Arc::new(MockCredentialStore::new()) as CredentialState;
    let store = Arc::new(SessionStore::open(backend).await);
    if let Some((token, role)) = session {
        store.establish(token, role).await;
    }
    let navigator = Navigator::new(store.clone());
    (store, navigator)
}

#[tokio::test]
async fn test_navigator_starts_on_the_entry_screen() {
    let (_store, navigator) = navigator_with(None).await;
    assert_eq!(navigator.current(), ENTRY_ROUTE);
}

#[tokio::test]
async fn test_navigator_moves_when_allowed() {
    let (_store, navigator) = navigator_with(Some(("tok", "admin"))).await;

    let outcome = navigator.navigate("dashboard").await;

    assert_eq!(outcome, NavOutcome::Moved { to: "dashboard" });
    assert_eq!(navigator.current(), "dashboard");
}

#[tokio::test]
async fn test_navigator_reports_redirects() {
    let (_store, navigator) = navigator_with(Some(("tok", "wellbeing_officer"))).await;

    let outcome = navigator.navigate("users").await;

    assert_eq!(
        outcome,
        NavOutcome::Redirected {
            requested: "users",
            to: STAFF_LANDING,
        }
    );
    assert_eq!(navigator.current(), STAFF_LANDING);
}

#[tokio::test]
async fn test_navigator_ignores_unknown_routes() {
    let (_store, navigator) = navigator_with(Some(("tok", "admin"))).await;
    navigator.navigate("dashboard").await;

    let outcome = navigator.navigate("not-a-screen").await;

    assert_eq!(
        outcome,
        NavOutcome::UnknownRoute {
            requested: "not-a-screen".to_string(),
        }
    );
    // An unknown name moves nothing.
    assert_eq!(navigator.current(), "dashboard");
}

#[tokio::test]
async fn test_navigator_purges_partial_credentials_on_the_auth_wall() {
    // A role slot left behind without a token hits rule 1, and the purge flag
    // must wipe it for good.
    let backend = Arc::new(MockCredentialStore::new());
    backend.put("user_role", "admin").await.unwrap();
    let store = Arc::new(SessionStore::open(backend as CredentialState).await);
    let navigator = Navigator::new(store.clone());

    let outcome = navigator.navigate("dashboard").await;

    assert_eq!(
        outcome,
        NavOutcome::Redirected {
            requested: "dashboard",
            to: ENTRY_ROUTE,
        }
    );
    assert_eq!(store.snapshot(), Session::default());
}

#[tokio::test]
async fn test_force_to_skips_the_guard() {
    let (_store, navigator) = navigator_with(None).await;

    // Signed out, the guard would never allow this move.
    navigator.force_to("dashboard");

    assert_eq!(navigator.current(), "dashboard");
}
