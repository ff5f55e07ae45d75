use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="text-center space-y-4">
            <h1 class="text-3xl font-bold text-gray-900">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">{"Back home"}</Link<Route>>
        </div>
    }
}
