//! Landing page

use crate::auth::use_is_authenticated;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <div class="relative overflow-hidden">
            <div class="max-w-7xl mx-auto">
                <main class="mt-10 mx-auto max-w-7xl px-4 sm:mt-12 sm:px-6 md:mt-16 lg:mt-20 lg:px-8 xl:mt-28">
                    <div class="text-center">
                        <h1 class="text-4xl tracking-tight font-extrabold text-gray-900 dark:text-white sm:text-5xl md:text-6xl">
                            <span class="block">{"Learn anything,"}</span>
                            <span class="block text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-purple-600 mt-2">
                                {"from anywhere"}
                            </span>
                        </h1>
                        <p class="mt-3 max-w-md mx-auto text-base text-gray-500 dark:text-gray-400 sm:text-lg md:mt-5 md:text-xl md:max-w-3xl">
                            {"Campus brings courses, instructors, and your progress together in one place. Browse the catalog, pick a course, and start today."}
                        </p>
                        <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center md:mt-8 gap-3">
                            <Link<Route>
                                to={Route::Courses}
                                classes="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 md:py-4 md:text-lg md:px-10 transition-all"
                            >
                                {"Browse Courses"}
                            </Link<Route>>
                            if !is_authenticated {
                                <Link<Route>
                                    to={Route::Register}
                                    classes="mt-3 sm:mt-0 w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 hover:bg-gray-50 dark:hover:bg-gray-700 md:py-4 md:text-lg md:px-10 transition-all"
                                >
                                    {"Get Started"}
                                </Link<Route>>
                            }
                        </div>
                    </div>
                </main>
            </div>

            <div class="py-12 mt-16 bg-white dark:bg-gray-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid grid-cols-1 gap-10 sm:grid-cols-3">
                        <div class="text-center">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Curated Catalog"}</h3>
                            <p class="mt-2 text-base text-gray-500 dark:text-gray-400">
                                {"Courses organized by category, searchable, and taught by vetted instructors."}
                            </p>
                        </div>
                        <div class="text-center">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Expert Instructors"}</h3>
                            <p class="mt-2 text-base text-gray-500 dark:text-gray-400">
                                {"Browse instructor profiles and the full list of courses they teach."}
                            </p>
                        </div>
                        <div class="text-center">
                            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{"Your Dashboard"}</h3>
                            <p class="mt-2 text-base text-gray-500 dark:text-gray-400">
                                {"Students, instructors, and admins each get a view tailored to their role."}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
