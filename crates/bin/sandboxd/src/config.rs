//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `sandbox.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values. All three services read the same file and
//! each picks its own listener section.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database settings, shared by every service.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Counter service listener.
    pub counter: ServerConfig,
    /// Greeting service listener.
    pub greeting: ServerConfig,
    /// Users service listener.
    pub users: ServerConfig,
}

/// Which of the three services a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Counter,
    Greeting,
    Users,
}

impl Service {
    /// Default TCP port of the service.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Counter => 3333,
            Self::Greeting => 8081,
            Self::Users => 9000,
        }
    }

    const fn port_env(self) -> &'static str {
        match self {
            Self::Counter => "SANDBOX_COUNTER_PORT",
            Self::Greeting => "SANDBOX_GREETING_PORT",
            Self::Users => "SANDBOX_USERS_PORT",
        }
    }

    const ALL: [Self; 3] = [Self::Counter, Self::Greeting, Self::Users];
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port; `None` falls back to [`Service::default_port`].
    pub port: Option<u16>,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
    /// Pool size.
    pub max_connections: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `sandbox.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sandbox.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SANDBOX_HOST") {
            for service in Service::ALL {
                self.server_mut(service).host.clone_from(&val);
            }
        }
        for service in Service::ALL {
            if let Ok(val) = std::env::var(service.port_env()) {
                if let Ok(port) = val.parse() {
                    self.server_mut(service).port = Some(port);
                }
            }
        }
        if let Ok(val) = std::env::var("SANDBOX_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("SANDBOX_MAX_CONNECTIONS") {
            if let Ok(max) = val.parse() {
                self.database.max_connections = max;
            }
        }
        if let Ok(val) = std::env::var("SANDBOX_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for service in Service::ALL {
            if self.server(service).port == Some(0) {
                return Err(ConfigError::Validation(format!(
                    "{service:?} port must be non-zero"
                )));
            }
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "max_connections must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Listener settings of one service.
    #[must_use]
    pub fn server(&self, service: Service) -> &ServerConfig {
        match service {
            Service::Counter => &self.counter,
            Service::Greeting => &self.greeting,
            Service::Users => &self.users,
        }
    }

    fn server_mut(&mut self, service: Service) -> &mut ServerConfig {
        match service {
            Service::Counter => &mut self.counter,
            Service::Greeting => &mut self.greeting,
            Service::Users => &mut self.users,
        }
    }

    /// Effective TCP port of one service.
    #[must_use]
    pub fn port(&self, service: Service) -> u16 {
        self.server(service)
            .port
            .unwrap_or_else(|| service.default_port())
    }

    /// Return the `host:port` bind address of one service.
    #[must_use]
    pub fn bind_addr(&self, service: Service) -> String {
        format!("{}:{}", self.server(service).host, self.port(service))
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:sandbox.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sandboxd=info,sandbox=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
