//! Account registration page

use crate::auth::{AuthAction, use_auth};
use crate::routes::{Route, landing_route_for};
use crate::services::AuthService;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Register)]
pub fn register() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("register rendered outside a router");

    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_full_name = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let full_name = full_name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let auth = auth.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let full_name = (*full_name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            spawn_local(async move {
                match AuthService::new().sign_up(full_name, email, password).await {
                    Ok(session) => {
                        let target = landing_route_for(&session.roles);
                        auth.dispatch(AuthAction::SignedIn(session));
                        navigator.push(&target);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let input_class = "block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 \
                       rounded-md bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100 \
                       placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-blue-500 \
                       focus:border-blue-500 sm:text-sm";

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {"Join Campus"}
                    </h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Create your account"}</p>
                </div>
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                    <form {onsubmit} class="space-y-4">
                        if let Some(message) = &*error {
                            <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-sm text-red-700 dark:text-red-300">
                                {message}
                            </div>
                        }
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                {"Full name"}
                            </label>
                            <input
                                type="text"
                                class={input_class}
                                value={(*full_name).clone()}
                                oninput={on_full_name}
                                required=true
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                {"Email"}
                            </label>
                            <input
                                type="email"
                                class={input_class}
                                value={(*email).clone()}
                                oninput={on_email}
                                required=true
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                {"Password"}
                            </label>
                            <input
                                type="password"
                                class={input_class}
                                value={(*password).clone()}
                                oninput={on_password}
                                required=true
                                minlength="8"
                            />
                        </div>
                        <button
                            type="submit"
                            disabled={*submitting}
                            class="w-full px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 rounded-md transition-all disabled:opacity-50"
                        >
                            {if *submitting { "Creating account..." } else { "Create Account" }}
                        </button>
                    </form>
                    <div class="mt-6 text-center text-sm text-gray-600 dark:text-gray-400">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login} classes="text-blue-600 dark:text-blue-400 hover:underline">
                            {"Sign in"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
