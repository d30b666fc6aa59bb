//! Session configuration types.

use dynect_core::{DynectError, Result};
use serde::Serialize;
use std::time::Duration;

/// The DynECT REST API base URL
pub const DEFAULT_BASE_URL: &str = "https://api2.dynect.net/REST";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the session token
pub const AUTH_TOKEN_HEADER: &str = "Auth-Token";

/// Content type of every request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Environment variable holding the customer name
pub const ENV_CUSTOMER_NAME: &str = "DYNECT_CUSTOMER_NAME";

/// Environment variable holding the user name
pub const ENV_USER_NAME: &str = "DYNECT_USER_NAME";

/// Environment variable holding the password
pub const ENV_PASSWORD: &str = "DYNECT_PASSWORD";

/// Login credentials, sent as the body of the session request
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Customer (account) name
    pub customer_name: String,

    /// User within the customer account
    pub user_name: String,

    /// Password of the user
    pub password: String,
}

impl Credentials {
    /// Create credentials from their parts
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `DYNECT_CUSTOMER_NAME`, `DYNECT_USER_NAME`
    /// and `DYNECT_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| DynectError::Config(format!("{name} is not set")))
        };

        Ok(Self {
            customer_name: require(ENV_CUSTOMER_NAME)?,
            user_name: require(ENV_USER_NAME)?,
            password: require(ENV_PASSWORD)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_name", &self.customer_name)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}
