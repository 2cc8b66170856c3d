//! Route table and landing-page navigation helpers.

use crate::auth::RequireAuth;
use crate::pages::{
    AdminDashboardPage, Categories, CourseDetailPage, Courses, Home, InstructorDashboardPage,
    InstructorDetailPage, Instructors, Login, NotFound, Register, StudentDashboardPage,
};
use campus_core::Role;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/courses")]
    Courses,
    #[at("/courses/:id")]
    CourseDetail { id: String },
    #[at("/categories")]
    Categories,
    #[at("/instructors")]
    Instructors,
    #[at("/instructors/:id")]
    InstructorDetail { id: String },
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/instructor/dashboard")]
    InstructorDashboard,
    #[at("/student/dashboard")]
    StudentDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query carried to the login page so the user returns to the page they were
/// originally headed for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnQuery {
    pub redirect: String,
}

/// Resolve a landing path from the role table into a route. Paths come from
/// [`Role::landing_path`], so recognition only fails for the login fallback.
pub fn route_for_landing(path: &str) -> Route {
    Route::recognize(path).unwrap_or(Route::Login)
}

/// Landing route for a session's primary role.
pub fn landing_route_for(roles: &[Role]) -> Route {
    let role = roles
        .iter()
        .find(|role| **role != Role::Unknown)
        .copied()
        .unwrap_or(Role::Unknown);
    route_for_landing(role.landing_path())
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Courses => html! { <Courses /> },
        Route::CourseDetail { id } => html! { <CourseDetailPage {id} /> },
        Route::Categories => html! { <Categories /> },
        Route::Instructors => html! { <Instructors /> },
        Route::InstructorDetail { id } => html! { <InstructorDetailPage {id} /> },
        Route::AdminDashboard => html! {
            <RequireAuth roles={vec![Role::Admin]}>
                <AdminDashboardPage />
            </RequireAuth>
        },
        Route::InstructorDashboard => html! {
            <RequireAuth roles={vec![Role::Instructor]}>
                <InstructorDashboardPage />
            </RequireAuth>
        },
        Route::StudentDashboard => html! {
            <RequireAuth roles={vec![Role::Student]}>
                <StudentDashboardPage />
            </RequireAuth>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}
