use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    Ack, LoginContext, LoginRequest, LoginResponse, RegisterRequest, RegisterStudentRequest,
};

/// login
///
/// POST /auth/login. The context names the screen the credentials came from;
/// the server rejects a student on the staff screen (and vice versa) with a
/// 403, which surfaces as `ApiError::Forbidden` without touching the session.
pub async fn login(
    api: &ApiClient,
    username: &str,
    password: &str,
    context: LoginContext,
) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
        context,
    };
    api.post("/auth/login", &body).await
}

/// POST /auth/register. The server assigns the default staff role.
pub async fn register(api: &ApiClient, username: &str, password: &str) -> Result<Ack, ApiError> {
    let body = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    api.post("/auth/register", &body).await
}

/// POST /auth/student/register. Creates the student record and its account.
pub async fn register_student(
    api: &ApiClient,
    request: &RegisterStudentRequest,
) -> Result<Ack, ApiError> {
    api.post("/auth/student/register", request).await
}
