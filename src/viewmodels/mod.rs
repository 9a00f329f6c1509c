pub mod auth_viewmodel;
pub mod roster_viewmodel;

pub use auth_viewmodel::{AuthViewModel, SessionCheck};
pub use roster_viewmodel::RosterViewModel;
