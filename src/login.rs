//! First-time login classification and post-login routing.

use std::fmt;

use crate::directory::display_name;

/// Usernames that must change their password before reaching the dashboard.
const FIRST_TIME_USERS: [&str; 3] = ["student", "teacher", "admin"];

/// Returns `true` if the username must change its password on login.
///
/// Membership is exact after lowercasing: `Admin` is a first-time user,
/// `admin2` is not.
pub fn is_first_time_login(username: &str) -> bool {
    let username = username.to_lowercase();
    FIRST_TIME_USERS.contains(&username.as_str())
}

/// Screen a user is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRoute {
    ChangePassword,
    Dashboard,
}

/// Route taken right after a successful login.
pub fn route_after_login(username: &str) -> LoginRoute {
    if is_first_time_login(username) {
        LoginRoute::ChangePassword
    } else {
        LoginRoute::Dashboard
    }
}

/// Role shown in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    SchoolAdmin,
    Teacher,
    Student,
    User,
}

impl UserRole {
    /// Derives the role from a username, checking `admin`, then `teacher`,
    /// then `student` as case-insensitive substrings.
    pub fn from_username(username: &str) -> Self {
        let username = username.to_lowercase();
        if username.contains("admin") {
            UserRole::SchoolAdmin
        } else if username.contains("teacher") {
            UserRole::Teacher
        } else if username.contains("student") {
            UserRole::Student
        } else {
            UserRole::User
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SchoolAdmin => "School Admin",
            UserRole::Teacher => "Teacher",
            UserRole::Student => "Student",
            UserRole::User => "User",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the caller needs to leave the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
    pub route: LoginRoute,
}

pub fn login_outcome(username: &str) -> LoginOutcome {
    let route = route_after_login(username);

    #[cfg(feature = "tracing")]
    tracing::info!("Login for {} routed to {:?}", username, route);

    LoginOutcome {
        username: username.to_string(),
        display_name: display_name(username),
        role: UserRole::from_username(username),
        route,
    }
}
