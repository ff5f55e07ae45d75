//! Navigation commands returned by session operations

/// Where the UI should go after a session operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Remain on the current route
    Stay,
    /// Public landing page
    Home,
    /// Login page
    Login,
}

impl Navigation {
    /// Route path, `None` for [`Navigation::Stay`]
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Stay => None,
            Self::Home => Some("/"),
            Self::Login => Some("/login"),
        }
    }
}
