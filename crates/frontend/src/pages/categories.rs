//! Category browsing page

use crate::components::{EmptyState, LoadingSpinner};
use crate::services::CatalogService;
use campus_core::types::CategorySummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Categories)]
pub fn categories() -> Html {
    let categories = use_state(|| None::<Vec<CategorySummary>>);
    let error = use_state(|| None::<String>);

    {
        let categories = categories.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match CatalogService::new().list_categories().await {
                    Ok(listing) => categories.set(Some(listing)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">{"Categories"}</h1>

            if let Some(message) = &*error {
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-sm text-red-700 dark:text-red-300">
                    {message}
                </div>
            } else if let Some(listing) = &*categories {
                if listing.is_empty() {
                    <EmptyState
                        title="No categories yet"
                        description="Categories will show up once courses are published."
                    />
                } else {
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                        { for listing.iter().map(|category| html! {
                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                                <h2 class="text-lg font-medium text-gray-900 dark:text-white">{&category.name}</h2>
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                    {format!("{} courses", category.course_count)}
                                </p>
                            </div>
                        }) }
                    </div>
                }
            } else {
                <LoadingSpinner text="Loading categories..." />
            }
        </div>
    }
}
