//! Top navigation bar

use crate::app::Route;
use crate::auth::use_session;
use crate::hooks::use_session_navigator;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigate = use_session_navigator();

    let on_logout = {
        let manager = session.manager.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(manager.logout());
        })
    };

    let link = "text-sm text-gray-300 hover:text-white";
    let loading = session.state.loading;
    let has_tokens = session.state.tokens.is_some();
    let username = session
        .state
        .user
        .as_ref()
        .and_then(|user| user.username.clone());

    html! {
        <nav class="fixed top-0 inset-x-0 bg-gray-900">
            <div class="max-w-5xl mx-auto px-4 h-14 flex items-center justify-between">
                <div class="flex items-center gap-6">
                    <Link<Route> to={Route::Home} classes="text-lg font-bold text-white">
                        {"Linkup"}
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes={link}>{"Home"}</Link<Route>>
                    if loading {
                        <></>
                    } else if has_tokens {
                        <Link<Route> to={Route::Dashboard} classes={link}>{"Dashboard"}</Link<Route>>
                    } else {
                        <Link<Route> to={Route::Login} classes={link}>{"Login"}</Link<Route>>
                        <Link<Route> to={Route::Register} classes={link}>{"Register"}</Link<Route>>
                    }
                </div>
                if !loading && has_tokens {
                    <div class="flex items-center gap-4">
                        if let Some(username) = username {
                            <span class="text-sm text-gray-400">{username}</span>
                        }
                        <button onclick={on_logout} class={link}>{"Logout"}</button>
                    </div>
                }
            </div>
        </nav>
    }
}
