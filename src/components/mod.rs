pub mod app;
pub mod auth_gate;
pub mod dashboard;
pub mod login_screen;
pub mod marks_modal;
pub mod student_card;
pub mod student_modal;

pub use app::App;
pub use auth_gate::{AuthGate, Redirect};
pub use dashboard::Dashboard;
pub use login_screen::LoginScreen;
pub use marks_modal::MarksModal;
pub use student_card::StudentCard;
pub use student_modal::StudentModal;
