use crate::session::Role;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// Shapes in this module mirror the remote API's JSON exactly: snake_case keys,
// integer ids, ISO 8601 timestamps. The console enforces no invariants of its
// own on them; whatever the server says, the screens show.

// --- Auth Payloads ---

/// LoginContext
///
/// Which sign-in screen the credentials came from. The server validates that a
/// student signs in through the student screen and staff through the staff
/// screen, rejecting mismatches with a 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginContext {
    Staff,
    Student,
}

/// LoginRequest
///
/// Input payload for the sign-in endpoint (POST /auth/login).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub context: LoginContext,
}

/// LoginResponse
///
/// The successful sign-in payload. `user_role` stays a raw wire string here; it
/// is parsed into a `Role` only when the session is established, so a role the
/// console does not know can never fail the decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_role: String,
    pub message: String,
}

/// RegisterRequest
///
/// Staff self-registration (POST /auth/register). The server assigns the
/// default role; the console never picks one here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// RegisterStudentRequest
///
/// Student self-registration (POST /auth/student/register). The email doubles
/// as the sign-in username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterStudentRequest {
    pub student_number: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
}

// --- Acknowledgements ---

/// Bare mutation acknowledgement: updates, deletes and registrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

/// Creation acknowledgement: the new row's id alongside the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAck {
    pub message: String,
    pub id: i64,
}

// --- Roster Entities ---

/// Student
///
/// `enrolments` (module titles) is only populated by the detail endpoint;
/// list responses leave it empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_number: String,
    pub full_name: String,
    pub email: String,
    pub course_name: Option<String>,
    pub year_of_study: Option<i32>,
    #[serde(default)]
    pub enrolments: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    pub module_code: String,
    pub module_title: String,
    pub credit: i32,
    pub academic_year: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Enrolment
///
/// `student_name` and `module_title` are display fields joined in by the
/// server's list queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrolment {
    pub id: i64,
    pub student_id: i64,
    pub module_id: i64,
    pub enrol_date: NaiveDate,
    pub student_name: Option<String>,
    pub module_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub module_id: i64,
    pub assessment_name: String,
    pub grade: f64,
    pub student_name: Option<String>,
    pub module_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub module_id: i64,
    pub week_number: i32,
    pub attended_sessions: i32,
    pub total_sessions: i32,
    pub attendance_rate: f64,
    pub student_name: Option<String>,
    pub module_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// SubmissionRecord
///
/// Assessment deadlines arrive without a timezone; they are campus-local.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: i64,
    pub student_id: i64,
    pub module_id: i64,
    pub assessment_name: String,
    pub due_date: Option<NaiveDateTime>,
    pub submitted_date: Option<NaiveDateTime>,
    pub is_submitted: bool,
    pub is_late: bool,
    pub student_name: Option<String>,
    pub module_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// SurveyResponse
///
/// Anonymous submissions carry null student, module and week references, so
/// all three are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: i64,
    pub student_id: Option<i64>,
    pub module_id: Option<i64>,
    pub week_number: Option<i32>,
    pub stress_level: i32,
    pub hours_slept: Option<f64>,
    pub mood_comment: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// WellbeingAlert
///
/// Raised by the server's early-warning checks. The list endpoint joins in
/// `student_name` and `module_title` for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellbeingAlert {
    pub id: i64,
    pub student_id: i64,
    pub module_id: Option<i64>,
    pub week_number: Option<i32>,
    pub reason: String,
    pub resolved: bool,
    pub student_name: Option<String>,
    pub module_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// UserAccount
///
/// `role` stays a raw wire string on the way in; accounts created through the
/// console use the typed `Role` on the way out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub student_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// --- Create / Update Payloads ---
// Updates reuse the create shape: the settable fields are the same set.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub student_number: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_study: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewModule {
    pub module_code: String,
    pub module_title: String,
    pub credit: i32,
    pub academic_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEnrolment {
    pub student_id: i64,
    pub module_id: i64,
    // The server defaults a missing date to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrol_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGrade {
    pub student_id: i64,
    pub module_id: i64,
    pub assessment_name: String,
    pub grade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    pub student_id: i64,
    pub module_id: i64,
    pub week_number: i32,
    pub attended_sessions: i32,
    pub total_sessions: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmissionRecord {
    pub student_id: i64,
    pub module_id: i64,
    pub assessment_name: String,
    pub due_date: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<NaiveDateTime>,
    pub is_submitted: bool,
    pub is_late: bool,
}

/// NewSurveyResponse
///
/// The survey screen submits explicit nulls for the references it does not
/// know, matching the server's generic insert, so no field here is skipped
/// when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSurveyResponse {
    pub student_id: Option<i64>,
    pub module_id: Option<i64>,
    pub week_number: Option<i32>,
    pub stress_level: i32,
    pub hours_slept: Option<f64>,
    pub mood_comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlert {
    pub student_id: i64,
    pub module_id: i64,
    pub week_number: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// UserUpdate
///
/// Partial account update; only the provided fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReset {
    pub new_password: String,
}

// --- Analytics DTOs ---

/// Dashboard headline counts, active rows only on the server side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_students: i64,
    pub total_modules: i64,
    pub pending_alerts_count: i64,
    pub total_users: i64,
}

/// Labels/values pair for the weekly trend charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Grade-band histogram: one count per band label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeDistribution {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

/// CorrelationPoint
///
/// One student's position in the stress/grade scatter. Averages over an empty
/// join come back null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressGradeCorrelation {
    pub labels: Vec<String>,
    pub data: Vec<CorrelationPoint>,
}
