use super::{BUTTON_CLASS, INPUT_CLASS, bind_input};
use crate::app::Route;
use crate::auth::use_session;
use crate::hooks::use_session_navigator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Register)]
pub fn register() -> Html {
    let session = use_session();
    let navigate = use_session_navigator();
    let email = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let confirmation = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let manager = session.manager.clone();
        let fields = (
            email.clone(),
            username.clone(),
            password.clone(),
            confirmation.clone(),
        );
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitting.set(true);

            let manager = manager.clone();
            let navigate = navigate.clone();
            let submitting = submitting.clone();
            let (email, username, password, confirmation) = (
                (*fields.0).clone(),
                (*fields.1).clone(),
                (*fields.2).clone(),
                (*fields.3).clone(),
            );
            spawn_local(async move {
                let navigation = manager
                    .register(&email, &username, &password, &confirmation)
                    .await;
                submitting.set(false);
                navigate.emit(navigation);
            });
        })
    };

    html! {
        <div class="max-w-sm mx-auto bg-white rounded-lg shadow p-8">
            <h2 class="text-2xl font-semibold mb-6 text-gray-900">{"Create an account"}</h2>
            <form {onsubmit} class="space-y-4">
                <input
                    type="email"
                    placeholder="Email address"
                    required=true
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                    class={INPUT_CLASS}
                />
                <input
                    type="text"
                    placeholder="Username"
                    required=true
                    value={(*username).clone()}
                    oninput={bind_input(&username)}
                    class={INPUT_CLASS}
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                    class={INPUT_CLASS}
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    required=true
                    value={(*confirmation).clone()}
                    oninput={bind_input(&confirmation)}
                    class={INPUT_CLASS}
                />
                <button type="submit" disabled={*submitting} class={BUTTON_CLASS}>
                    {if *submitting { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="mt-4 text-sm text-gray-600">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">{"Login"}</Link<Route>>
            </p>
        </div>
    }
}
