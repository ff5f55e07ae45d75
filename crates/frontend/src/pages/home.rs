use crate::app::Route;
use crate::auth::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();

    html! {
        <div class="text-center space-y-4">
            <h1 class="text-3xl font-bold text-gray-900">{"Welcome to Linkup"}</h1>
            if let Some(user) = &session.state.user {
                <p class="text-gray-600">{format!("Signed in as {}", user.display_name())}</p>
                <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline">
                    {"Go to your dashboard"}
                </Link<Route>>
            } else {
                <p class="text-gray-600">
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">{"Log in"}</Link<Route>>
                    {" or "}
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">{"create an account"}</Link<Route>>
                    {" to continue."}
                </p>
            }
        </div>
    }
}
