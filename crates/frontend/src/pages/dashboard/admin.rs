//! Admin dashboard

use super::StatCard;
use crate::components::LoadingSpinner;
use crate::services::DashboardService;
use campus_core::types::AdminSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let summary = use_state(|| None::<AdminSummary>);
    let error = use_state(|| None::<String>);

    {
        let summary = summary.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match DashboardService::new().admin_summary().await {
                    Ok(data) => summary.set(Some(data)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">{"Admin Dashboard"}</h1>

            if let Some(message) = &*error {
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-sm text-red-700 dark:text-red-300">
                    {message}
                </div>
            } else if let Some(summary) = &*summary {
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    <StatCard label="Students" value={summary.total_students} />
                    <StatCard label="Instructors" value={summary.total_instructors} />
                    <StatCard label="Courses" value={summary.total_courses} />
                    <StatCard label="Categories" value={summary.total_categories} />
                </div>
            } else {
                <LoadingSpinner text="Loading summary..." />
            }
        </div>
    }
}
