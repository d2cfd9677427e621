use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::env_file;

/// File the loader merges into the process environment when present.
pub const ENV_FILE: &str = ".env";

const DEFAULT_PORT: u16 = 3000;

/// Deployment environment, parsed case-sensitively from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub const ALLOWED: &'static str = r#""development" | "production""#;

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reason a schema field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("required value is missing or empty")]
    MissingRequired,

    #[error("expected an integer, got {value:?}")]
    NotAnInteger { value: String },

    #[error("must be one of {allowed}, got {value:?}")]
    NotInEnum {
        value: String,
        allowed: &'static str,
    },
}

/// A single `field: message` line of the startup diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub field: &'static str,
    pub issue: ValidationIssue,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.issue)
    }
}

/// Aggregated validation failure. Diagnostics are ordered by schema
/// declaration (PORT, NODE_ENV, DATABASE_URL), not by discovery, so the
/// output is reproducible run to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Environment validation error(s):")?;
        for diagnostic in &self.diagnostics {
            writeln!(f, "- {diagnostic}")?;
        }
        write!(f, "Check your .env file, then rerun the program.")
    }
}

impl std::error::Error for ConfigError {}

/// Validated application configuration.
///
/// Constructed once at startup by [`AppConfig::load`] and handed to every
/// component that needs it. Fields are private so the record cannot be
/// mutated after validation; read access goes through the getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    port: u16,
    node_env: Environment,
    database_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment, merged with the
    /// optional `.env` file in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(vars, Path::new(ENV_FILE))
    }

    /// Same pipeline as [`AppConfig::load`], over an explicit variable map
    /// and env-file path. The file is optional; an unreadable file is
    /// logged and skipped rather than failing startup.
    pub fn load_from(
        mut vars: HashMap<String, String>,
        env_file: &Path,
    ) -> Result<Self, ConfigError> {
        if let Err(err) = env_file::apply(env_file, &mut vars) {
            tracing::warn!(
                "Skipping unreadable env file {}: {}",
                env_file.display(),
                err
            );
        }
        Self::validate(&vars)
    }

    /// Validate a raw variable map against the configuration schema.
    ///
    /// Every field is checked before reporting, so one run surfaces all
    /// problems at once.
    pub fn validate(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut diagnostics = Vec::new();

        let port = match vars.get("PORT") {
            None => Some(DEFAULT_PORT),
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    diagnostics.push(Diagnostic {
                        field: "PORT",
                        issue: ValidationIssue::NotAnInteger { value: raw.clone() },
                    });
                    None
                }
            },
        };

        let node_env = match vars.get("NODE_ENV") {
            None => Some(Environment::Development),
            Some(raw) => match raw.parse::<Environment>() {
                Ok(env) => Some(env),
                Err(()) => {
                    diagnostics.push(Diagnostic {
                        field: "NODE_ENV",
                        issue: ValidationIssue::NotInEnum {
                            value: raw.clone(),
                            allowed: Environment::ALLOWED,
                        },
                    });
                    None
                }
            },
        };

        let database_url = match vars.get("DATABASE_URL").map(|raw| raw.trim()) {
            Some(url) if !url.is_empty() => Some(url.to_string()),
            _ => {
                diagnostics.push(Diagnostic {
                    field: "DATABASE_URL",
                    issue: ValidationIssue::MissingRequired,
                });
                None
            }
        };

        match (port, node_env, database_url) {
            (Some(port), Some(node_env), Some(database_url)) => {
                debug_assert!(diagnostics.is_empty());
                Ok(AppConfig {
                    port,
                    node_env,
                    database_url,
                })
            }
            _ => Err(ConfigError { diagnostics }),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn node_env(&self) -> Environment {
        self.node_env
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}
