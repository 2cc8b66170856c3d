//! Page components

pub mod categories;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod home;
pub mod instructor_detail;
pub mod instructors;
pub mod login;
pub mod not_found;
pub mod register;

pub use categories::Categories;
pub use course_detail::CourseDetailPage;
pub use courses::Courses;
pub use dashboard::{AdminDashboardPage, InstructorDashboardPage, StudentDashboardPage};
pub use home::Home;
pub use instructor_detail::InstructorDetailPage;
pub use instructors::Instructors;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
