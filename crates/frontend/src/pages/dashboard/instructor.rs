//! Instructor dashboard

use super::StatCard;
use crate::components::LoadingSpinner;
use crate::services::DashboardService;
use campus_core::types::InstructorOverview;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(InstructorDashboardPage)]
pub fn instructor_dashboard_page() -> Html {
    let overview = use_state(|| None::<InstructorOverview>);
    let error = use_state(|| None::<String>);

    {
        let overview = overview.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match DashboardService::new().instructor_overview().await {
                    Ok(data) => overview.set(Some(data)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">{"Instructor Dashboard"}</h1>

            if let Some(message) = &*error {
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-sm text-red-700 dark:text-red-300">
                    {message}
                </div>
            } else if let Some(overview) = &*overview {
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                    <StatCard label="Active courses" value={overview.active_courses} />
                    <StatCard label="Enrolled students" value={overview.enrolled_students} />
                </div>
            } else {
                <LoadingSpinner text="Loading overview..." />
            }
        </div>
    }
}
