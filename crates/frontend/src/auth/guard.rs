//! Authentication guard component for protected routes

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::{ReturnQuery, Route, route_for_landing};
use campus_core::{Access, Role, access};
use yew::prelude::*;
use yew_router::prelude::*;

/// RequireAuth component - guards a route behind authentication and an
/// optional set of permitted roles (empty = any authenticated user).
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub roles: Vec<Role>,
    pub children: Children,
}

/// Renders its children only when the current session satisfies the route's
/// role requirements; otherwise redirects. While session resolution is in
/// flight a neutral loading view is shown so no redirect fires prematurely.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();
    let location = use_location();

    let requested = location.as_ref().map(|location| location.path().to_string());
    let roles = auth.session.as_ref().map(|session| session.roles.clone());
    let decision = access::evaluate(
        auth.is_loading,
        roles.as_deref(),
        &props.roles,
        requested.as_deref(),
    );

    match decision {
        Access::Pending => html! {
            <LoadingSpinner text="Checking your session..." />
        },
        Access::SignIn { return_to } => html! {
            <GuardRedirect to={Route::Login} {return_to} />
        },
        Access::Landing(path) => html! {
            <GuardRedirect to={route_for_landing(path)} />
        },
        Access::Grant => html! { <>{ props.children.clone() }</> },
    }
}

#[derive(Properties, PartialEq)]
struct GuardRedirectProps {
    to: Route,
    #[prop_or_default]
    return_to: Option<String>,
}

/// Pushes the redirect after render; a spinner fills the frame in between.
#[function_component(GuardRedirect)]
fn guard_redirect(props: &GuardRedirectProps) -> Html {
    let navigator = use_navigator().expect("guard rendered outside a router");

    use_effect_with(
        (props.to.clone(), props.return_to.clone()),
        move |(to, return_to)| {
            match return_to {
                Some(return_to) => {
                    let query = ReturnQuery {
                        redirect: return_to.clone(),
                    };
                    if navigator.push_with_query(to, &query).is_err() {
                        navigator.push(to);
                    }
                }
                None => navigator.push(to),
            }
            || ()
        },
    );

    html! { <LoadingSpinner /> }
}
