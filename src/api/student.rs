use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::Student;

/// GET /student/me: the signed-in student's own record. The server resolves
/// which student from the bearer token; there is no id in the path.
pub async fn my_profile(api: &ApiClient) -> Result<Student, ApiError> {
    api.get("/student/me").await
}
