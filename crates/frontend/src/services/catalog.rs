//! Course, category, and instructor browsing service.
//!
//! Calls go through the authenticated client; without a persisted token the
//! requests simply go out unauthenticated and the server decides what is
//! visible.

use crate::client::authenticated_client;
use campus_core::types::{
    CategorySummary, CourseDetail, CourseSummary, InstructorDetail, InstructorSummary, Paged,
};
use campus_http::ClientError;
use reqwest::Method;

#[derive(Clone)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// List courses with pagination and optional search/category filters
    pub async fn list_courses(
        &self,
        page: usize,
        page_size: usize,
        search: Option<String>,
        category: Option<String>,
    ) -> Result<Paged<CourseSummary>, ClientError> {
        let client = authenticated_client()?;

        let mut query_params = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(search_term) = search {
            query_params.push(("search", search_term));
        }
        if let Some(category_id) = category {
            query_params.push(("category", category_id));
        }

        client
            .execute(
                client
                    .request(Method::GET, "/courses")
                    .query(&query_params),
            )
            .await
    }

    pub async fn get_course(&self, id: &str) -> Result<CourseDetail, ClientError> {
        let client = authenticated_client()?;
        client
            .execute(client.request(Method::GET, &format!("/courses/{id}")))
            .await
    }

    pub async fn list_categories(&self) -> Result<Vec<CategorySummary>, ClientError> {
        let client = authenticated_client()?;
        client
            .execute(client.request(Method::GET, "/category"))
            .await
    }

    /// List instructors with pagination and optional search
    pub async fn list_instructors(
        &self,
        page: usize,
        page_size: usize,
        search: Option<String>,
    ) -> Result<Paged<InstructorSummary>, ClientError> {
        let client = authenticated_client()?;

        let mut query_params = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(search_term) = search {
            query_params.push(("search", search_term));
        }

        client
            .execute(
                client
                    .request(Method::GET, "/instructors")
                    .query(&query_params),
            )
            .await
    }

    pub async fn get_instructor(&self, id: &str) -> Result<InstructorDetail, ClientError> {
        let client = authenticated_client()?;
        client
            .execute(client.request(Method::GET, &format!("/instructors/{id}")))
            .await
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
