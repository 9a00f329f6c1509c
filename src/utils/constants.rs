/// Resource group for administrator authentication.
pub const AUTH_PATH: &str = "/api/auth";

/// Resource group for student records.
pub const STUDENTS_PATH: &str = "/students";

// localStorage keys shared with earlier builds of the console
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_ADMIN_EMAIL: &str = "adminEmail";
pub const STORAGE_KEY_ADMIN_NAME: &str = "adminName";

/// Custom window event fired after a programmatic history change.
pub const ROUTE_CHANGED_EVENT: &str = "routechange";
