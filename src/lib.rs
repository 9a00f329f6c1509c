// ============================================================================
// STUDENT ADMIN CONSOLE - Yew frontend
// ============================================================================
// Layers:
// - models:      records shared with the backend
// - services:    HTTP only (transport + API client)
// - stores:      persistent client state (session)
// - state:       pure UI state and its transitions
// - viewmodels:  async orchestration over services and state
// - hooks:       bind viewmodels to the Yew lifecycle
// - components:  rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

pub use components::App;
