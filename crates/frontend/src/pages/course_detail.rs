//! Single course page

use crate::components::LoadingSpinner;
use crate::services::CatalogService;
use campus_core::types::CourseDetail;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CourseDetailProps {
    pub id: String,
}

#[function_component(CourseDetailPage)]
pub fn course_detail_page(props: &CourseDetailProps) -> Html {
    let course = use_state(|| None::<CourseDetail>);
    let error = use_state(|| None::<String>);

    {
        let course = course.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match CatalogService::new().get_course(&id).await {
                    Ok(detail) => course.set(Some(detail)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    html! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            if let Some(message) = &*error {
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-sm text-red-700 dark:text-red-300">
                    {message}
                </div>
            } else if let Some(course) = &*course {
                <span class="text-xs font-semibold uppercase tracking-wide text-blue-600 dark:text-blue-400">
                    {&course.category}
                </span>
                <h1 class="mt-2 text-3xl font-bold text-gray-900 dark:text-white">{&course.title}</h1>
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                    {format!("Taught by {}", course.instructor_name)}
                </p>
                <div class="mt-6 prose dark:prose-invert max-w-none text-gray-700 dark:text-gray-300">
                    {&course.description}
                </div>
                <div class="mt-8 flex items-center gap-6 text-sm text-gray-600 dark:text-gray-400">
                    if let Some(price) = course.price {
                        <span class="text-lg font-semibold text-gray-900 dark:text-gray-100">
                            {format!("${price:.2}")}
                        </span>
                    }
                    <span>{format!("{} students enrolled", course.enrolled_count)}</span>
                </div>
            } else {
                <LoadingSpinner text="Loading course..." />
            }
        </div>
    }
}
