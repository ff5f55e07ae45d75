use crate::auth::SessionProvider;
use crate::auth_guard::RequireAuth;
use crate::components::{Navbar, ToastProvider};
use crate::pages::{Dashboard, Home, Login, NotFound, Register};
use linkup_session::Navigation;
use yew::prelude::*;
use yew_router::prelude::*;

/// Application routes
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route a session operation asked for, if any
    pub fn from_navigation(navigation: Navigation) -> Option<Self> {
        match navigation {
            Navigation::Stay => None,
            Navigation::Home => Some(Self::Home),
            Navigation::Login => Some(Self::Login),
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <Dashboard />
            </RequireAuth>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <SessionProvider>
                    <Navbar />
                    <main class="max-w-3xl mx-auto px-4 pt-24 pb-12">
                        <Switch<Route> render={switch} />
                    </main>
                </SessionProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_maps_to_routes() {
        assert_eq!(Route::from_navigation(Navigation::Stay), None);
        assert_eq!(Route::from_navigation(Navigation::Home), Some(Route::Home));
        assert_eq!(Route::from_navigation(Navigation::Login), Some(Route::Login));
    }

    #[test]
    fn route_paths_match_navigation_paths() {
        for navigation in [Navigation::Home, Navigation::Login] {
            let route = Route::from_navigation(navigation).unwrap();
            assert_eq!(Some(route.to_path().as_str()), navigation.path());
        }
    }

    #[test]
    fn recognizes_public_and_guarded_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/register"), Some(Route::Register));
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
    }
}
