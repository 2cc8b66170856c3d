//! 404 page

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
            <p class="text-6xl font-extrabold text-gray-300 dark:text-gray-700">{"404"}</p>
            <h1 class="mt-4 text-2xl font-bold text-gray-900 dark:text-white">{"Page not found"}</h1>
            <p class="mt-2 text-gray-500 dark:text-gray-400">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="mt-6 px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 rounded-md">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
