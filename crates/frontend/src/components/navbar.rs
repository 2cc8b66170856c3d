//! Top navigation bar

use crate::auth::{AuthAction, use_auth};
use crate::routes::{Route, landing_route_for};
use crate::services::AuthService;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("navbar rendered outside a router");

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                AuthService::new().sign_out().await;
                auth.dispatch(AuthAction::Logout);
                navigator.push(&Route::Home);
            });
        })
    };

    let dashboard_route = auth
        .session
        .as_ref()
        .map(|session| landing_route_for(&session.roles));

    html! {
        <nav class="bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center gap-6">
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                {"Campus"}
                            </h1>
                        </Link<Route>>
                        <Link<Route> to={Route::Courses} classes="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
                            {"Courses"}
                        </Link<Route>>
                        <Link<Route> to={Route::Categories} classes="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
                            {"Categories"}
                        </Link<Route>>
                        <Link<Route> to={Route::Instructors} classes="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
                            {"Instructors"}
                        </Link<Route>>
                    </div>
                    <div class="flex items-center gap-4">
                        if let Some(session) = &auth.session {
                            <span class="text-sm text-gray-600 dark:text-gray-400">
                                {format!("Welcome, {}", session.user.full_name)}
                            </span>
                            if let Some(route) = dashboard_route {
                                <Link<Route> to={route} classes="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
                                    {"Dashboard"}
                                </Link<Route>>
                            }
                            <button onclick={on_logout} class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
                                {"Sign Out"}
                            </button>
                        } else {
                            <Link<Route> to={Route::Login} classes="px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 rounded-md transition-all">
                                {"Sign In"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
