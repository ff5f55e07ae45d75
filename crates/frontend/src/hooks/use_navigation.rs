//! Navigation hooks

use crate::app::Route;
use linkup_session::Navigation;
use yew::prelude::*;
use yew_router::prelude::*;

/// Hook turning a session [`Navigation`] command into a router push
#[hook]
pub fn use_session_navigator() -> Callback<Navigation> {
    let navigator = use_navigator();
    Callback::from(move |navigation: Navigation| {
        if let (Some(navigator), Some(route)) = (&navigator, Route::from_navigation(navigation)) {
            navigator.push(&route);
        }
    })
}
