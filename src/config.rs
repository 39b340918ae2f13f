//! Connection descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dsn::make_postgresql_dsn;
use crate::error::{Error, Result};

/// Discrete fields of a PostgreSQL connection.
///
/// Optional fields set to `None` or to an empty string are treated alike.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    pub host: String,
    pub port: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// `key=value&...` list, appended verbatim after `?`.
    #[serde(default)]
    pub parameters: Option<String>,
}

impl ConnectionDescriptor {
    /// Create a descriptor with the two required fields
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            ..Self::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    /// Load from `{prefix}HOST`, `{prefix}PORT`, `{prefix}DATABASE`,
    /// `{prefix}USER`, `{prefix}PASSWORD` and `{prefix}PARAMETERS`.
    ///
    /// Host and port are required.
    pub fn from_env(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            let key = format!("{prefix}{name}");
            lookup(&key).ok_or(Error::MissingSetting(key))
        };
        let optional = |name: &str| lookup(&format!("{prefix}{name}"));

        Ok(Self {
            host: required("HOST")?,
            port: required("PORT")?,
            database: optional("DATABASE"),
            username: optional("USER"),
            password: optional("PASSWORD"),
            parameters: optional("PARAMETERS"),
        })
    }

    /// Render as a `postgresql://` connection string.
    pub fn to_dsn(&self) -> String {
        make_postgresql_dsn(
            &self.host,
            &self.port,
            self.database.as_deref().unwrap_or_default(),
            self.username.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
            self.parameters.as_deref().unwrap_or_default(),
        )
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("parameters", &self.parameters)
            .finish()
    }
}
