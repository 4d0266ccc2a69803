use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    Ack, AttendanceRecord, CreatedAck, Enrolment, Grade, Module, NewAlert, NewAttendanceRecord,
    NewEnrolment, NewGrade, NewModule, NewStudent, NewSubmissionRecord, NewSurveyResponse, NewUser,
    PasswordReset, Student, SubmissionRecord, SurveyResponse, UserAccount, UserUpdate,
    WellbeingAlert,
};

// Creates return the new row's id; other mutations acknowledge with a bare
// message the screens do not need, so they map to ().

// --- Students ---

pub async fn list_students(api: &ApiClient) -> Result<Vec<Student>, ApiError> {
    api.get("/admin/students").await
}

pub async fn create_student(api: &ApiClient, student: &NewStudent) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/students", student).await?;
    Ok(ack.id)
}

pub async fn update_student(api: &ApiClient, id: i64, student: &NewStudent) -> Result<(), ApiError> {
    let _: Ack = api.put(&format!("/admin/students/{id}"), student).await?;
    Ok(())
}

pub async fn delete_student(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api.delete(&format!("/admin/students/{id}")).await?;
    Ok(())
}

// --- Modules ---

pub async fn list_modules(api: &ApiClient) -> Result<Vec<Module>, ApiError> {
    api.get("/admin/modules").await
}

pub async fn create_module(api: &ApiClient, module: &NewModule) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/modules", module).await?;
    Ok(ack.id)
}

pub async fn update_module(api: &ApiClient, id: i64, module: &NewModule) -> Result<(), ApiError> {
    let _: Ack = api.put(&format!("/admin/modules/{id}"), module).await?;
    Ok(())
}

pub async fn delete_module(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api.delete(&format!("/admin/modules/{id}")).await?;
    Ok(())
}

// --- Enrolments ---

pub async fn list_enrolments(api: &ApiClient) -> Result<Vec<Enrolment>, ApiError> {
    api.get("/admin/enrolments").await
}

pub async fn create_enrolment(api: &ApiClient, enrolment: &NewEnrolment) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/enrolments", enrolment).await?;
    Ok(ack.id)
}

pub async fn update_enrolment(
    api: &ApiClient,
    id: i64,
    enrolment: &NewEnrolment,
) -> Result<(), ApiError> {
    let _: Ack = api.put(&format!("/admin/enrolments/{id}"), enrolment).await?;
    Ok(())
}

pub async fn delete_enrolment(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api.delete(&format!("/admin/enrolments/{id}")).await?;
    Ok(())
}

// --- Grades ---

pub async fn list_grades(api: &ApiClient) -> Result<Vec<Grade>, ApiError> {
    api.get("/admin/grades").await
}

pub async fn create_grade(api: &ApiClient, grade: &NewGrade) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/grades", grade).await?;
    Ok(ack.id)
}

pub async fn update_grade(api: &ApiClient, id: i64, grade: &NewGrade) -> Result<(), ApiError> {
    let _: Ack = api.put(&format!("/admin/grades/{id}"), grade).await?;
    Ok(())
}

pub async fn delete_grade(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api.delete(&format!("/admin/grades/{id}")).await?;
    Ok(())
}

// --- Attendance Records ---

pub async fn list_attendance_records(api: &ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.get("/admin/attendance-records").await
}

pub async fn create_attendance_record(
    api: &ApiClient,
    record: &NewAttendanceRecord,
) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/attendance-records", record).await?;
    Ok(ack.id)
}

pub async fn update_attendance_record(
    api: &ApiClient,
    id: i64,
    record: &NewAttendanceRecord,
) -> Result<(), ApiError> {
    let _: Ack = api
        .put(&format!("/admin/attendance-records/{id}"), record)
        .await?;
    Ok(())
}

pub async fn delete_attendance_record(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api
        .delete(&format!("/admin/attendance-records/{id}"))
        .await?;
    Ok(())
}

// --- Submission Records ---

pub async fn list_submission_records(api: &ApiClient) -> Result<Vec<SubmissionRecord>, ApiError> {
    api.get("/admin/submission-records").await
}

pub async fn create_submission_record(
    api: &ApiClient,
    record: &NewSubmissionRecord,
) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/submission-records", record).await?;
    Ok(ack.id)
}

pub async fn update_submission_record(
    api: &ApiClient,
    id: i64,
    record: &NewSubmissionRecord,
) -> Result<(), ApiError> {
    let _: Ack = api
        .put(&format!("/admin/submission-records/{id}"), record)
        .await?;
    Ok(())
}

pub async fn delete_submission_record(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api
        .delete(&format!("/admin/submission-records/{id}"))
        .await?;
    Ok(())
}

// --- Survey Responses ---
// Students may submit through this endpoint too; it is the one admin path the
// server leaves open to them.

pub async fn list_survey_responses(api: &ApiClient) -> Result<Vec<SurveyResponse>, ApiError> {
    api.get("/admin/survey-responses").await
}

pub async fn create_survey_response(
    api: &ApiClient,
    response: &NewSurveyResponse,
) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/survey-responses", response).await?;
    Ok(ack.id)
}

pub async fn update_survey_response(
    api: &ApiClient,
    id: i64,
    response: &NewSurveyResponse,
) -> Result<(), ApiError> {
    let _: Ack = api
        .put(&format!("/admin/survey-responses/{id}"), response)
        .await?;
    Ok(())
}

pub async fn delete_survey_response(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api
        .delete(&format!("/admin/survey-responses/{id}"))
        .await?;
    Ok(())
}

// --- Wellbeing Alerts ---

pub async fn list_alerts(api: &ApiClient) -> Result<Vec<WellbeingAlert>, ApiError> {
    api.get("/admin/alerts").await
}

/// GET /admin/alerts/student/{id}: the alert history shown on a student detail
/// screen.
pub async fn alerts_for_student(
    api: &ApiClient,
    student_id: i64,
) -> Result<Vec<WellbeingAlert>, ApiError> {
    api.get(&format!("/admin/alerts/student/{student_id}")).await
}

pub async fn create_alert(api: &ApiClient, alert: &NewAlert) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/alerts", alert).await?;
    Ok(ack.id)
}

/// PUT /admin/alerts/{id}/resolve. An action endpoint with no body.
pub async fn resolve_alert(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api.put_empty(&format!("/admin/alerts/{id}/resolve")).await?;
    Ok(())
}

pub async fn delete_alert(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api.delete(&format!("/admin/alerts/{id}")).await?;
    Ok(())
}

// --- User Accounts ---

pub async fn list_users(api: &ApiClient) -> Result<Vec<UserAccount>, ApiError> {
    api.get("/admin/users").await
}

pub async fn create_user(api: &ApiClient, user: &NewUser) -> Result<i64, ApiError> {
    let ack: CreatedAck = api.post("/admin/users", user).await?;
    Ok(ack.id)
}

pub async fn update_user(api: &ApiClient, id: i64, update: &UserUpdate) -> Result<(), ApiError> {
    let _: Ack = api.put(&format!("/admin/users/{id}"), update).await?;
    Ok(())
}

pub async fn delete_user(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    let _: Ack = api.delete(&format!("/admin/users/{id}")).await?;
    Ok(())
}

/// PUT /admin/users/{id}/reset-password.
pub async fn reset_user_password(
    api: &ApiClient,
    id: i64,
    new_password: &str,
) -> Result<(), ApiError> {
    let body = PasswordReset {
        new_password: new_password.to_string(),
    };
    let _: Ack = api
        .put(&format!("/admin/users/{id}/reset-password"), &body)
        .await?;
    Ok(())
}
