use crate::{router, state::session::UserType};
use leptos::*;

/// Local part of an address: everything before the first `@`.
pub fn user_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

pub fn landing_route(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Employee => router::BILLS_PATH,
        UserType::Admin => router::DASHBOARD_PATH,
    }
}

#[derive(Clone, Copy)]
pub struct CredentialsFormState {
    pub employee_email: RwSignal<String>,
    pub employee_password: RwSignal<String>,
    pub admin_email: RwSignal<String>,
    pub admin_password: RwSignal<String>,
}

impl Default for CredentialsFormState {
    fn default() -> Self {
        Self {
            employee_email: create_rw_signal(String::new()),
            employee_password: create_rw_signal(String::new()),
            admin_email: create_rw_signal(String::new()),
            admin_password: create_rw_signal(String::new()),
        }
    }
}

impl CredentialsFormState {
    pub fn signals(&self, user_type: UserType) -> (RwSignal<String>, RwSignal<String>) {
        match user_type {
            UserType::Employee => (self.employee_email, self.employee_password),
            UserType::Admin => (self.admin_email, self.admin_password),
        }
    }

    /// Email and password typed in the form of `user_type`.
    pub fn credentials(&self, user_type: UserType) -> (String, String) {
        let (email, password) = self.signals(user_type);
        (email.get_untracked(), password.get_untracked())
    }
}
