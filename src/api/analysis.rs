use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    DashboardSummary, GradeDistribution, Student, StressGradeCorrelation, TrendData,
};

// Read-only analytics: everything here is computed server-side, the console
// only renders the numbers.

pub async fn dashboard_summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    api.get("/analysis/dashboard-summary").await
}

pub async fn grade_distribution(api: &ApiClient) -> Result<GradeDistribution, ApiError> {
    api.get("/analysis/grade-distribution").await
}

pub async fn stress_grade_correlation(api: &ApiClient) -> Result<StressGradeCorrelation, ApiError> {
    api.get("/analysis/stress-grade-correlation").await
}

/// GET /analysis/students/{id}: the full record plus enrolled module titles.
pub async fn student_detail(api: &ApiClient, student_id: i64) -> Result<Student, ApiError> {
    api.get(&format!("/analysis/students/{student_id}")).await
}

/// Weekly average stress levels for one student.
pub async fn stress_trend(api: &ApiClient, student_id: i64) -> Result<TrendData, ApiError> {
    api.get(&format!("/analysis/students/{student_id}/stress-trend"))
        .await
}

/// Weekly average attendance rates (percentages) for one student.
pub async fn attendance_trend(api: &ApiClient, student_id: i64) -> Result<TrendData, ApiError> {
    api.get(&format!("/analysis/students/{student_id}/attendance-trend"))
        .await
}
