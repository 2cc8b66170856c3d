//! Instructor profile page

use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::services::CatalogService;
use campus_core::types::InstructorDetail;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InstructorDetailProps {
    pub id: String,
}

#[function_component(InstructorDetailPage)]
pub fn instructor_detail_page(props: &InstructorDetailProps) -> Html {
    let instructor = use_state(|| None::<InstructorDetail>);
    let error = use_state(|| None::<String>);

    {
        let instructor = instructor.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match CatalogService::new().get_instructor(&id).await {
                    Ok(detail) => instructor.set(Some(detail)),
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
            } else if let Some(instructor) = &*instructor {
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{&instructor.full_name}</h1>
                if let Some(headline) = &instructor.headline {
                    <p class="mt-1 text-gray-500 dark:text-gray-400">{headline}</p>
                }
                if let Some(biography) = &instructor.biography {
                    <div class="mt-6 text-gray-700 dark:text-gray-300">{biography}</div>
                }

                <h2 class="mt-10 text-xl font-semibold text-gray-900 dark:text-white">{"Courses"}</h2>
                if instructor.courses.is_empty() {
                    <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">{"No published courses yet."}</p>
                } else {
                    <div class="mt-4 space-y-3">
                        { for instructor.courses.iter().map(|course| html! {
                            <Link<Route> to={Route::CourseDetail { id: course.id.clone() }}>
                                <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4 flex justify-between items-center hover:shadow-md transition-shadow">
                                    <div>
                                        <p class="font-medium text-gray-900 dark:text-white">{&course.title}</p>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">{&course.category}</p>
                                    </div>
                                    if let Some(price) = course.price {
                                        <span class="text-sm font-semibold text-gray-900 dark:text-gray-100">
                                            {format!("${price:.2}")}
                                        </span>
                                    }
                                </div>
                            </Link<Route>>
                        }) }
                    </div>
                }
            } else {
                <LoadingSpinner text="Loading instructor..." />
            }
        </div>
    }
}
