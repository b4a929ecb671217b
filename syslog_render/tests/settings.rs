//! Tests for layered render settings.

#![cfg(feature = "toml")]

use anyhow::{Result, ensure};
use rstest::rstest;
use syslog_render::{
    DEFAULT_SETTINGS_FILE, EmitSettings, Emitter, MapOrder, RenderNode, RenderSettings,
    SettingsError,
};
use test_helpers::figment::JailSetup;

#[rstest]
fn defaults_apply_without_sources() -> Result<()> {
    let settings = JailSetup::new().run(RenderSettings::load)??;
    ensure!(settings == RenderSettings::default(), "unexpected settings: {settings:?}");
    ensure!(settings.map_order == MapOrder::Sorted, "mappings should sort by default");
    ensure!(
        settings.emit
            == EmitSettings {
                indent: 4,
                pretty: true,
            },
        "unexpected emit settings: {:?}",
        settings.emit
    );
    Ok(())
}

#[rstest]
fn file_values_override_defaults() -> Result<()> {
    let settings = JailSetup::new()
        .file(
            DEFAULT_SETTINGS_FILE,
            "map_order = \"unordered\"\n[emit]\nindent = 2\n",
        )
        .run(RenderSettings::load)??;
    ensure!(settings.map_order == MapOrder::Unordered, "file order ignored");
    ensure!(settings.emit.indent == 2, "file indent ignored");
    ensure!(settings.emit.pretty, "unset keys should keep their default");
    Ok(())
}

#[rstest]
fn environment_overrides_file() -> Result<()> {
    let settings = JailSetup::new()
        .file(DEFAULT_SETTINGS_FILE, "[emit]\nindent = 2\npretty = true\n")
        .env("SYSLOG_RENDER_EMIT__PRETTY", "false")
        .env("SYSLOG_RENDER_EMIT__INDENT", "8")
        .run(RenderSettings::load)??;
    ensure!(
        settings.emit
            == EmitSettings {
                indent: 8,
                pretty: false,
            },
        "environment ignored: {:?}",
        settings.emit
    );
    Ok(())
}

#[rstest]
fn explicit_path_is_read() -> Result<()> {
    let settings = JailSetup::new()
        .file("render.toml", "map_order = \"unordered\"\n")
        .run(|| RenderSettings::load_from("render.toml"))??;
    ensure!(settings.map_order == MapOrder::Unordered, "explicit file ignored");
    Ok(())
}

#[rstest]
fn invalid_values_are_reported() -> Result<()> {
    let outcome = JailSetup::new()
        .env("SYSLOG_RENDER_MAP_ORDER", "shuffled")
        .run(RenderSettings::load)?;
    let Err(SettingsError::Gathering(err)) = outcome else {
        anyhow::bail!("expected a gathering error, got {outcome:?}");
    };
    ensure!(
        err.to_string().contains("shuffled") || err.to_string().contains("variant"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn loaded_settings_drive_emission() -> Result<()> {
    let settings = JailSetup::new()
        .env("SYSLOG_RENDER_EMIT__PRETTY", "false")
        .run(RenderSettings::load)??;
    let text = Emitter::from_settings(&settings).emit(&[RenderNode::paren_def_stmt(
        "file",
        vec![RenderNode::literal("/var/log/app.log")],
    )])?;
    ensure!(text == "file(\"/var/log/app.log\")", "unexpected output: {text}");
    Ok(())
}
