//! Role dashboard summaries.

use crate::client::authenticated_client;
use campus_core::types::{AdminSummary, InstructorOverview, StudentOverview};
use campus_http::ClientError;
use reqwest::Method;

#[derive(Clone)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub async fn admin_summary(&self) -> Result<AdminSummary, ClientError> {
        let client = authenticated_client()?;
        client
            .execute(client.request(Method::GET, "/AdminDashboard/summary"))
            .await
    }

    pub async fn instructor_overview(&self) -> Result<InstructorOverview, ClientError> {
        let client = authenticated_client()?;
        client
            .execute(client.request(Method::GET, "/InstructorDashboard/summary"))
            .await
    }

    pub async fn student_overview(&self) -> Result<StudentOverview, ClientError> {
        let client = authenticated_client()?;
        client
            .execute(client.request(Method::GET, "/StudentDashboard/summary"))
            .await
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
