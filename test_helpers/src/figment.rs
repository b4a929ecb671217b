//! Staging settings files and variables inside a `figment::Jail`.
//!
//! The jail gives each test its own working directory and environment, so
//! tests can write `syslog-render.toml` and set `SYSLOG_RENDER_*` variables
//! without seeing each other's state.

use anyhow::{Result, anyhow};

/// Files and environment variables to place in a jail before running a test
/// body.
///
/// # Examples
///
/// ```
/// use syslog_render::RenderSettings;
/// use syslog_render_test_helpers::figment::JailSetup;
///
/// let settings = JailSetup::new()
///     .env("SYSLOG_RENDER_EMIT__INDENT", "2")
///     .run(RenderSettings::load)??;
/// assert_eq!(settings.emit.indent, 2);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct JailSetup {
    files: Vec<(String, String)>,
    env: Vec<(String, String)>,
}

impl JailSetup {
    /// An empty jail: no files and no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `contents` to `name`, relative to the jail directory.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.push((name.into(), contents.into()));
        self
    }

    /// Sets the environment variable `key` to `value`.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Stages the files and variables, then runs `body` inside the jail.
    ///
    /// The body's own result is returned untouched, so tests can inspect
    /// loader errors as well as successes.
    ///
    /// # Errors
    ///
    /// Returns an error when the jail cannot be created or a file cannot be
    /// written.
    pub fn run<T>(&self, body: impl FnOnce() -> T) -> Result<T> {
        let mut output = None;
        figment::Jail::try_with(|jail| {
            for (name, contents) in &self.files {
                jail.create_file(name, contents)?;
            }
            for (key, value) in &self.env {
                jail.set_env(key, value);
            }
            output = Some(body());
            Ok(())
        })
        .map_err(|err| anyhow!("jail setup failed: {err}"))?;
        output.ok_or_else(|| anyhow!("jail body did not run"))
    }
}
