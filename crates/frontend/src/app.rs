use crate::auth::AuthProvider;
use crate::components::Navbar;
use crate::routes::{Route, switch};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
                    <Navbar />
                    <Switch<Route> render={switch} />
                </div>
            </AuthProvider>
        </BrowserRouter>
    }
}
