//! Session context and provider

use super::storage::BrowserStorage;
use crate::app::Route;
use crate::components::toast::{ToastNotifier, use_toasts};
use crate::config::FrontendConfig;
use gloo::timers::callback::Interval;
use linkup_session::{AuthConfig, Notifier, SessionManager, SessionState};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Session manager used by the browser app
pub type Session = SessionManager<BrowserStorage>;

/// Session handle shared through the component tree
#[derive(Clone)]
pub struct SessionContext {
    pub manager: Rc<Session>,
    pub state: SessionState,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager) && self.state == other.state
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the single session manager of the app
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let toasts = use_toasts();
    let state = use_state(SessionState::default);
    let navigator = use_navigator();

    let built = use_memo((), move |_| {
        let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(toasts));
        Session::from_config(&FrontendConfig::session(), BrowserStorage, notifier)
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });
    let session = (*built).as_ref().ok().cloned();

    // Subscribe, run the first synchronization pass, then refresh a stale token
    {
        let setter = state.setter();
        let session = session.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if let Some(session) = &session {
                session.subscribe(move |snapshot| setter.set(snapshot.clone()));
                session.initialize();
                spawn_local(validate_and_route(session.clone(), navigator));
            }
            move || {
                if let Some(session) = session {
                    session.unsubscribe();
                }
            }
        });
    }

    // Periodically refresh an expired access token
    {
        let session = session.clone();
        use_effect_with(state.is_authenticated(), move |authenticated| {
            let interval = match session {
                Some(session) if *authenticated => Some(Interval::new(
                    AuthConfig::TOKEN_VALIDATION_INTERVAL_MS,
                    move || spawn_local(validate_and_route(session.clone(), navigator.clone())),
                )),
                _ => None,
            };
            move || drop(interval)
        });
    }

    let Some(manager) = session else {
        let message = (*built).as_ref().err().cloned().unwrap_or_default();
        tracing::error!(error = %message, "Session could not be configured");
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-red-600">{format!("Configuration error: {message}")}</p>
            </div>
        };
    };

    let context = SessionContext {
        manager,
        state: (*state).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

async fn validate_and_route(session: Rc<Session>, navigator: Option<Navigator>) {
    let navigation = session.validate().await;
    if let (Some(navigator), Some(route)) = (navigator, Route::from_navigation(navigation)) {
        navigator.push(&route);
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
