//! Layered settings for rendering and emission.
//!
//! Settings are gathered with `figment`: built-in defaults, then an optional
//! TOML file, then `SYSLOG_RENDER_*` environment variables. Nested keys use
//! `__` in variable names, so `SYSLOG_RENDER_EMIT__INDENT=2` sets
//! `emit.indent`.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MapOrder;

/// Prefix of environment variables read by [`RenderSettings::load`].
pub const ENV_PREFIX: &str = "SYSLOG_RENDER_";

/// File read by [`RenderSettings::load`], relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "syslog-render.toml";

/// Errors raised while gathering settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// A provider failed or the merged values did not deserialize.
    #[error("failed to gather render settings: {0}")]
    Gathering(#[from] Box<figment::Error>),
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        Self::Gathering(Box::new(err))
    }
}

/// Options controlling the emission stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitSettings {
    /// Spaces per indentation level in pretty output.
    pub indent: usize,
    /// Place each statement argument on its own line.
    pub pretty: bool,
}

impl Default for EmitSettings {
    fn default() -> Self {
        Self {
            indent: 4,
            pretty: true,
        }
    }
}

/// Settings shared by the renderer and the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Order of mapping entries.
    pub map_order: MapOrder,
    /// Emission options.
    pub emit: EmitSettings,
}

impl RenderSettings {
    /// Loads settings from [`DEFAULT_SETTINGS_FILE`] (when present) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Gathering`] when a source cannot be parsed.
    pub fn load() -> Result<Self, SettingsError> {
        #[cfg(feature = "toml")]
        {
            Self::load_from(DEFAULT_SETTINGS_FILE)
        }
        #[cfg(not(feature = "toml"))]
        {
            Self::extract(Self::defaults())
        }
    }

    /// Loads settings from the TOML file at `path` (when present) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Gathering`] when a source cannot be parsed.
    #[cfg(feature = "toml")]
    pub fn load_from(path: impl AsRef<camino::Utf8Path>) -> Result<Self, SettingsError> {
        use figment::providers::{Format, Toml};

        Self::extract(Self::defaults().merge(Toml::file(path.as_ref())))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn extract(figment: Figment) -> Result<Self, SettingsError> {
        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?)
    }
}
