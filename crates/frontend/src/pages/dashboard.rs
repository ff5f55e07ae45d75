use crate::auth::use_session;
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();
    let Some(user) = session.state.user.as_ref() else {
        return html! {};
    };

    let expires = user
        .expires_at()
        .map_or_else(|| "unknown".to_string(), |at| at.format("%Y-%m-%d %H:%M UTC").to_string());
    let verified = match user.verified {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };

    let row = |label: &str, value: String| {
        html! {
            <div class="flex justify-between py-2 border-b border-gray-100">
                <dt class="text-gray-500">{label.to_string()}</dt>
                <dd class="text-gray-900">{value}</dd>
            </div>
        }
    };
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    html! {
        <div class="bg-white rounded-lg shadow p-8">
            <h2 class="text-2xl font-semibold mb-6 text-gray-900">
                {format!("Hello, {}", user.display_name())}
            </h2>
            <dl class="text-sm">
                {row("User ID", user.user_id.to_string())}
                {row("Username", optional(&user.username))}
                {row("Email", optional(&user.email))}
                {row("Full name", optional(&user.full_name))}
                {row("Verified", verified.to_string())}
                {row("Session expires", expires)}
            </dl>
        </div>
    }
}
