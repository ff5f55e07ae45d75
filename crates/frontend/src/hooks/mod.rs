//! Custom hooks for the application

pub mod use_navigation;

pub use use_navigation::use_session_navigator;
