pub mod login_state;
pub mod reactivity;
pub mod roster_state;

pub use login_state::LoginState;
pub use reactivity::{ReactiveState, SubscriptionId};
pub use roster_state::{Modal, RefreshTicket, RosterBody, RosterState, Submission, UiMode};
