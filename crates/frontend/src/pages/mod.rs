mod dashboard;
mod home;
mod login;
mod not_found;
mod register;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Keep a text state in sync with an input element
pub(crate) fn bind_input(value: &UseStateHandle<String>) -> Callback<InputEvent> {
    let value = value.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        value.set(input.value());
    })
}

pub(crate) const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";
pub(crate) const BUTTON_CLASS: &str =
    "w-full py-2 px-4 rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50";
