use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use crate::utils::storage::BrowserStorage;
use crate::{
    api::ApiError,
    utils::storage::{KeyValueStorage, MemoryStorage},
};

const USER_KEY: &str = "user";
const JWT_KEY: &str = "jwt";
const PREVIOUS_LOCATION_KEY: &str = "previous_location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Employee => "Employee",
            UserType::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub status: String,
}

impl SessionUser {
    pub fn connected(user_type: UserType, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_type,
            email: email.into(),
            password: password.into(),
            status: "connected".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("invalid session data: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("no user in session")]
    NoUser,
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        ApiError::unknown(error.to_string())
    }
}

/// The only client-side state: current user, jwt and last landing route.
#[derive(Clone)]
pub struct SessionContext {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionContext {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Browser localStorage when available, in-memory otherwise.
    #[cfg(target_arch = "wasm32")]
    pub fn init() -> Self {
        match BrowserStorage::new() {
            Ok(storage) => Self::new(Rc::new(storage)),
            Err(err) => {
                log::warn!("falling back to in-memory session: {}", err);
                Self::in_memory()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn init() -> Self {
        Self::in_memory()
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage.get_item(key).map_err(SessionError::Storage)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage.set_item(key, value).map_err(SessionError::Storage)
    }

    pub fn set_user(&self, user: &SessionUser) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(user)?;
        self.write(USER_KEY, &encoded)
    }

    pub fn current_user(&self) -> Result<Option<SessionUser>, SessionError> {
        match self.read(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn user_email(&self) -> Result<String, SessionError> {
        self.current_user()?
            .map(|user| user.email)
            .ok_or(SessionError::NoUser)
    }

    pub fn set_jwt(&self, jwt: &str) -> Result<(), SessionError> {
        self.write(JWT_KEY, jwt)
    }

    pub fn jwt(&self) -> Result<Option<String>, SessionError> {
        self.read(JWT_KEY)
    }

    pub fn set_previous_location(&self, path: &str) -> Result<(), SessionError> {
        self.write(PREVIOUS_LOCATION_KEY, path)
    }

    pub fn previous_location(&self) -> Result<Option<String>, SessionError> {
        self.read(PREVIOUS_LOCATION_KEY)
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        for key in [USER_KEY, JWT_KEY, PREVIOUS_LOCATION_KEY] {
            self.storage.remove_item(key).map_err(SessionError::Storage)?;
        }
        Ok(())
    }
}
