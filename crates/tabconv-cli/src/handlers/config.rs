//! Config command handler.

use std::path::Path;

use anyhow::Result;
use tabconv_core::{Settings, SettingsUpdate, VideoFormat};
use tabconv_runtime::detect_tools;

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;
use crate::utils::input::prompt_confirmation;

pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show { json } => show(ctx, json).await,
        ConfigCommand::Set {
            transcoder_path,
            resolver_path,
            download_dir,
            format,
            max_resolution,
            output_suffix,
            output_extension,
        } => {
            let update = SettingsUpdate {
                transcoder_path: transcoder_path.map(clearable),
                resolver_path: resolver_path.map(clearable),
                download_dir: download_dir.map(clearable),
                preferred_format: format.map(Some),
                max_resolution: max_resolution.map(Some),
                output_suffix: output_suffix.map(Some),
                output_extension: output_extension.map(Some),
                preset: None,
            };
            set(ctx, &update).await
        }
        ConfigCommand::Reset { force } => reset(ctx, force).await,
        ConfigCommand::Detect { save } => detect(ctx, save).await,
    }
}

/// An empty path argument clears the stored value.
fn clearable(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn show_field(name: &str, value: Option<&str>) {
    println!("  {name:<18} {}", value.unwrap_or("(not set)"));
}

fn print_settings(settings: &Settings) {
    show_field("transcoder_path:", settings.transcoder_path.as_deref());
    show_field("resolver_path:", settings.resolver_path.as_deref());
    show_field("download_dir:", settings.download_dir.as_deref());
    show_field(
        "preferred_format:",
        settings.preferred_format.map(VideoFormat::as_str),
    );
    show_field(
        "max_resolution:",
        settings.max_resolution.map(|r| r.to_string()).as_deref(),
    );
    show_field("output_suffix:", settings.output_suffix.as_deref());
    show_field("output_extension:", settings.output_extension.as_deref());
}

async fn show(ctx: &CliContext, json: bool) -> Result<()> {
    let settings = ctx.backend.get_settings().await.map_err(CliError::from)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!("Settings ({}):", ctx.settings_file.display());
    print_settings(&settings);
    let preset = settings.transcoder_config();
    println!(
        "  {:<18} {}",
        "command:",
        preset.preset.command_line(
            preset.program.as_deref().unwrap_or(Path::new("ffmpeg")),
            Path::new("<input>"),
            Path::new("<output>"),
        )
    );
    Ok(())
}

async fn set(ctx: &CliContext, update: &SettingsUpdate) -> Result<()> {
    if update.is_empty() {
        println!("No settings provided. Use --help to see available options.");
        return Ok(());
    }

    let updated = ctx
        .backend
        .update_settings(update)
        .await
        .map_err(CliError::from)?;
    println!("✓ Settings updated:");
    print_settings(&updated);
    Ok(())
}

async fn reset(ctx: &CliContext, force: bool) -> Result<()> {
    if !force && !prompt_confirmation("Reset all settings to defaults?")? {
        println!("Reset cancelled.");
        return Ok(());
    }

    ctx.backend.reset_settings().await.map_err(CliError::from)?;
    println!("✓ All settings have been reset to defaults.");
    Ok(())
}

async fn detect(ctx: &CliContext, save: bool) -> Result<()> {
    let found = detect_tools();
    let describe = |path: Option<&Path>| {
        path.map_or_else(|| "not found on PATH".to_string(), |p| p.display().to_string())
    };
    println!("  ffmpeg: {}", describe(found.transcoder.as_deref()));
    println!("  yt-dlp: {}", describe(found.resolver.as_deref()));

    if !save {
        return Ok(());
    }

    let path_update = |path: Option<&Path>| path.map(|p| Some(p.display().to_string()));
    let update = SettingsUpdate {
        transcoder_path: path_update(found.transcoder.as_deref()),
        resolver_path: path_update(found.resolver.as_deref()),
        ..SettingsUpdate::default()
    };
    if update.is_empty() {
        println!("Nothing to save.");
        return Ok(());
    }
    ctx.backend
        .update_settings(&update)
        .await
        .map_err(CliError::from)?;
    println!("✓ Saved detected paths.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_clears() {
        assert_eq!(clearable(String::new()), None);
        assert_eq!(clearable("  ".to_string()), None);
        assert_eq!(
            clearable("/usr/bin/ffmpeg".to_string()),
            Some("/usr/bin/ffmpeg".to_string())
        );
    }
}
