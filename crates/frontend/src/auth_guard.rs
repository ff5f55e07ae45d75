//! Authentication guard component for protected routes

use crate::app::Route;
use crate::auth::use_session;
use linkup_session::{GuardDecision, evaluate};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders children only for an authenticated session
///
/// Nothing is decided until the session has read the token store, so a
/// returning user never sees the login redirect flash by.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();

    match evaluate(&session.state) {
        GuardDecision::Pending => html! {
            <div class="flex flex-col items-center py-16">
                <div class="w-10 h-10 border-4 border-gray-200 border-t-blue-500 rounded-full animate-spin mb-4"></div>
                <p class="text-gray-600">{"Checking authentication..."}</p>
            </div>
        },
        GuardDecision::Allow => html! { <>{ props.children.clone() }</> },
        GuardDecision::Redirect(navigation) => {
            let to = Route::from_navigation(navigation).unwrap_or(Route::Login);
            tracing::debug!(?navigation, "Redirecting unauthenticated visitor");
            html! { <Redirect<Route> to={to} /> }
        }
    }
}
