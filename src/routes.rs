use crate::session::{Role, Session};

// --- Named destinations the guard redirects to ---

// Where an unauthenticated principal always ends up.
pub const ENTRY_ROUTE: &str = "staff-login";
// Default landing screens after sign-in, by principal kind.
pub const STAFF_LANDING: &str = "dashboard";
pub const STUDENT_LANDING: &str = "my-profile";

// The four sign-in/registration screens. Reachable without a session; an
// authenticated principal is bounced off them to their landing screen.
pub const ENTRY_ROUTES: &[&str] = &[
    "staff-login",
    "staff-register",
    "student-login",
    "student-register",
];

// Screens a student session may visit. Everything else bounces to their profile.
pub const STUDENT_ROUTES: &[&str] = &[STUDENT_LANDING, "survey"];

// --- Role sets used by the gated screens ---

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const STUDENT_ONLY: &[Role] = &[Role::Student];
const ACADEMIC_STAFF: &[Role] = &[Role::Admin, Role::CourseDirector];
const WELLBEING_STAFF: &[Role] = &[Role::Admin, Role::WellbeingOfficer];
const ALL_STAFF: &[Role] = &[Role::Admin, Role::CourseDirector, Role::WellbeingOfficer];

/// Route
///
/// One entry in the static navigation surface. Routes carry their access
/// metadata with them so the guard never needs a side table: `requires_auth`
/// gates on having a session at all, `requires_role` (when present) names the
/// exact set of roles allowed in.
#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
    pub requires_role: Option<&'static [Role]>,
}

/// ROUTES
///
/// The complete navigation surface, one row per screen. The table is static and
/// immutable; every navigation decision anywhere in the console resolves against
/// these rows and nothing else.
pub static ROUTES: &[Route] = &[
    Route {
        name: "staff-login",
        path: "/",
        title: "Staff Sign In",
        requires_auth: false,
        requires_role: None,
    },
    Route {
        name: "staff-register",
        path: "/register",
        title: "Staff Registration",
        requires_auth: false,
        requires_role: None,
    },
    Route {
        name: "student-login",
        path: "/student/login",
        title: "Student Sign In",
        requires_auth: false,
        requires_role: None,
    },
    Route {
        name: "student-register",
        path: "/student/register",
        title: "Student Registration",
        requires_auth: false,
        requires_role: None,
    },
    Route {
        name: "my-profile",
        path: "/my-profile",
        title: "My Profile",
        requires_auth: true,
        requires_role: Some(STUDENT_ONLY),
    },
    Route {
        name: "dashboard",
        path: "/dashboard",
        title: "Dashboard",
        requires_auth: true,
        requires_role: None,
    },
    Route {
        name: "students",
        path: "/students",
        title: "Students",
        requires_auth: true,
        requires_role: None,
    },
    Route {
        name: "student-detail",
        path: "/students/:id",
        title: "Student Detail",
        requires_auth: true,
        requires_role: None,
    },
    Route {
        name: "modules",
        path: "/modules",
        title: "Modules",
        requires_auth: true,
        requires_role: Some(ACADEMIC_STAFF),
    },
    Route {
        name: "alerts",
        path: "/alerts",
        title: "Wellbeing Alerts",
        requires_auth: true,
        requires_role: Some(WELLBEING_STAFF),
    },
    Route {
        name: "survey-responses",
        path: "/survey-responses",
        title: "Survey Responses",
        requires_auth: true,
        requires_role: Some(WELLBEING_STAFF),
    },
    Route {
        name: "users",
        path: "/users",
        title: "User Management",
        requires_auth: true,
        requires_role: Some(ADMIN_ONLY),
    },
    Route {
        name: "survey",
        path: "/survey",
        title: "Wellbeing Survey",
        requires_auth: true,
        requires_role: None,
    },
    Route {
        name: "enrolments",
        path: "/enrolments",
        title: "Enrolments",
        requires_auth: true,
        requires_role: Some(ACADEMIC_STAFF),
    },
    Route {
        name: "attendance",
        path: "/attendance",
        title: "Attendance",
        requires_auth: true,
        requires_role: Some(ACADEMIC_STAFF),
    },
    Route {
        name: "submissions",
        path: "/submissions",
        title: "Submissions",
        requires_auth: true,
        requires_role: Some(ACADEMIC_STAFF),
    },
    Route {
        name: "grades",
        path: "/grades",
        title: "Grades",
        requires_auth: true,
        requires_role: Some(ACADEMIC_STAFF),
    },
    Route {
        name: "analytics",
        path: "/analytics",
        title: "Analytics",
        requires_auth: true,
        requires_role: Some(ALL_STAFF),
    },
];

/// Looks a route up by name. Unknown names resolve to None, never a fallback row.
pub fn find(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}

pub fn is_entry(name: &str) -> bool {
    ENTRY_ROUTES.contains(&name)
}

pub fn student_allowed(name: &str) -> bool {
    STUDENT_ROUTES.contains(&name)
}

/// landing_for
///
/// The default destination for whoever currently holds the session: students
/// land on their profile, any other authenticated principal on the dashboard,
/// and nobody at all on the sign-in screen. Total over every session state so
/// guard redirects always have somewhere valid to point.
pub fn landing_for(session: &Session) -> &'static str {
    if session.is_student() {
        STUDENT_LANDING
    } else if session.is_authenticated() {
        STAFF_LANDING
    } else {
        ENTRY_ROUTE
    }
}
