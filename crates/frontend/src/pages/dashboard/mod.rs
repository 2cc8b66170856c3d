//! Role dashboards

pub mod admin;
pub mod instructor;
pub mod student;

pub use admin::AdminDashboardPage;
pub use instructor::InstructorDashboardPage;
pub use student::StudentDashboardPage;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: usize,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <p class="text-sm text-gray-500 dark:text-gray-400">{&props.label}</p>
            <p class="mt-2 text-3xl font-bold text-gray-900 dark:text-white">{props.value}</p>
        </div>
    }
}
