//! Course catalog listing

use crate::components::{EmptyState, LoadingSpinner, Pagination};
use crate::config::AppConfig;
use crate::routes::Route;
use crate::services::CatalogService;
use campus_core::types::{CourseSummary, Paged};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Courses)]
pub fn courses() -> Html {
    let courses = use_state(|| None::<Paged<CourseSummary>>);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1usize);
    let search = use_state(String::new);

    {
        let courses = courses.clone();
        let error = error.clone();
        use_effect_with((*page, (*search).clone()), move |(page, search)| {
            let page = *page;
            let search = if search.is_empty() {
                None
            } else {
                Some(search.clone())
            };
            spawn_local(async move {
                match CatalogService::new()
                    .list_courses(page, AppConfig::DEFAULT_PAGE_SIZE, search, None)
                    .await
                {
                    Ok(listing) => courses.set(Some(listing)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_search_input = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
            page.set(1);
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Courses"}</h1>
                <input
                    type="text"
                    class="w-64 px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100 placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-blue-500 sm:text-sm"
                    placeholder="Search courses..."
                    value={(*search).clone()}
                    oninput={on_search_input}
                />
            </div>

            if let Some(message) = &*error {
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-sm text-red-700 dark:text-red-300">
                    {message}
                </div>
            } else if let Some(listing) = &*courses {
                if listing.items.is_empty() {
                    <EmptyState
                        title="No courses found"
                        description="Try a different search term or check back later."
                    />
                } else {
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        { for listing.items.iter().map(course_card) }
                    </div>
                    <Pagination
                        page={listing.page}
                        total_pages={listing.total_pages()}
                        {on_page_change}
                    />
                }
            } else {
                <LoadingSpinner text="Loading courses..." />
            }
        </div>
    }
}

fn course_card(course: &CourseSummary) -> Html {
    html! {
        <Link<Route> to={Route::CourseDetail { id: course.id.clone() }}>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow hover:shadow-md transition-shadow p-6 h-full">
                <span class="text-xs font-semibold uppercase tracking-wide text-blue-600 dark:text-blue-400">
                    {&course.category}
                </span>
                <h2 class="mt-2 text-lg font-medium text-gray-900 dark:text-white">{&course.title}</h2>
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                    {format!("by {}", course.instructor_name)}
                </p>
                if let Some(price) = course.price {
                    <p class="mt-3 text-sm font-semibold text-gray-900 dark:text-gray-100">
                        {format!("${price:.2}")}
                    </p>
                }
            </div>
        </Link<Route>>
    }
}
