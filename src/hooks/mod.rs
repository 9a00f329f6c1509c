pub mod session_context;
pub mod use_login;
pub mod use_roster;
pub mod use_route;

pub use session_context::{use_app_context, AppContext, AppContextProvider};
pub use use_login::{use_login, UseLoginHandle};
pub use use_roster::{use_roster, UseRosterHandle};
pub use use_route::use_route;
