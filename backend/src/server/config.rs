//! Server settings loaded via OrthoConfig, plus session key resolution.
//!
//! Every setting can come from the command line, an `ASSESSME_*` environment
//! variable or a configuration file, in the precedence OrthoConfig applies.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ASSESSME")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// File holding the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Mark session cookies `Secure`; defaults to on.
    pub cookie_secure: Option<bool>,
    /// Fall back to a generated key when the key file is unreadable.
    #[ortho_config(default = false)]
    pub allow_ephemeral: bool,
}

impl AppSettings {
    /// Socket address built from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Whether cookies carry the `Secure` attribute.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Configured key path, falling back to the mounted secret.
    pub fn session_key_path(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(SESSION_KEY_DEFAULT_PATH))
    }

    /// Load the session signing key.
    ///
    /// Debug builds, or release builds with `allow_ephemeral`, fall back to a
    /// generated key when the file cannot be read. Keys shorter than 64 bytes
    /// are rejected in release builds and replaced in debug builds.
    pub fn session_key(&self, mode: BuildMode) -> Result<Key, ConfigError> {
        let path = self.session_key_path();
        match std::fs::read(&path) {
            Ok(mut bytes) => {
                let length = bytes.len();
                if length < SESSION_KEY_MIN_LEN {
                    bytes.zeroize();
                    if mode.is_debug() {
                        warn!(
                            path = %path.display(),
                            length,
                            "session key too short; using temporary key"
                        );
                        return Ok(Key::generate());
                    }
                    return Err(ConfigError::KeyTooShort {
                        path,
                        length,
                        min_len: SESSION_KEY_MIN_LEN,
                    });
                }
                let key = Key::derive_from(&bytes);
                bytes.zeroize();
                Ok(key)
            }
            Err(source) if mode.is_debug() || self.allow_ephemeral => {
                warn!(
                    path = %path.display(),
                    error = %source,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            }
            Err(source) => Err(ConfigError::KeyRead { path, source }),
        }
    }
}

/// Build mode used to decide how strict key handling is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Mode of the current build.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while turning settings into a server configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The host is not an IP address.
    #[error("invalid bind host '{value}'; expected an IP address")]
    InvalidHost { value: String },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file is too short for release builds.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Resolved configuration handed to [`super::create_server`].
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Resolve settings into a server configuration.
    pub fn from_settings(settings: &AppSettings, mode: BuildMode) -> Result<Self, ConfigError> {
        Ok(Self {
            key: settings.session_key(mode)?,
            cookie_secure: settings.cookie_secure(),
            same_site: SameSite::Lax,
            bind_addr: settings.bind_addr()?,
        })
    }

    /// Address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
