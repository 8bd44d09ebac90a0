//! Handler behaviour against a throwaway settings file.

use tabconv_cli::config_commands::ConfigCommand;
use tabconv_cli::{CliConfig, CliError, bootstrap, handlers};
use tabconv_core::VideoFormat;
use tempfile::TempDir;

async fn context(dir: &TempDir) -> tabconv_cli::CliContext {
    bootstrap(CliConfig {
        settings_file: dir.path().join("settings.json"),
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_config_set_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir).await;

    handlers::config::execute(
        &ctx,
        ConfigCommand::Set {
            transcoder_path: Some("/opt/ffmpeg/bin/ffmpeg".to_string()),
            resolver_path: None,
            download_dir: None,
            format: Some(VideoFormat::Mp4),
            max_resolution: Some(720),
            output_suffix: None,
            output_extension: None,
        },
    )
    .await
    .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["transcoder_path"], "/opt/ffmpeg/bin/ffmpeg");
    assert_eq!(json["preferred_format"], "mp4");
    assert_eq!(json["max_resolution"], 720);
}

#[tokio::test]
async fn test_invalid_setting_is_config_error() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir).await;

    let err = handlers::config::execute(
        &ctx,
        ConfigCommand::Set {
            transcoder_path: None,
            resolver_path: None,
            download_dir: None,
            format: None,
            max_resolution: Some(0),
            output_suffix: None,
            output_extension: None,
        },
    )
    .await
    .unwrap_err();

    let cli_error = err.downcast_ref::<CliError>().unwrap();
    assert_eq!(cli_error.exit_code(), 78);
    assert!(!dir.path().join("settings.json").exists());
}

#[tokio::test]
async fn test_convert_missing_input_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir).await;

    let err = handlers::convert::execute(&ctx, &dir.path().join("nope.mp4"), false)
        .await
        .unwrap_err();

    let cli_error = err.downcast_ref::<CliError>().unwrap();
    assert_eq!(cli_error.exit_code(), 64);
    assert!(!ctx.backend.is_busy());
}

#[tokio::test]
async fn test_download_invalid_url_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir).await;

    let args = handlers::download::DownloadArgs {
        url: "not a url".to_string(),
        output: None,
        dir: None,
        format: None,
        max_resolution: None,
        force: false,
        convert: false,
    };
    let err = handlers::download::execute(&ctx, args).await.unwrap_err();

    let cli_error = err.downcast_ref::<CliError>().unwrap();
    assert_eq!(cli_error.exit_code(), 64);
}

#[tokio::test]
async fn test_corrupt_settings_can_still_be_reset() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("settings.json");
    std::fs::write(&file, "{ not json").unwrap();

    let ctx = context(&dir).await;

    let err = handlers::config::execute(&ctx, ConfigCommand::Show { json: true })
        .await
        .unwrap_err();
    assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 78);

    handlers::config::execute(&ctx, ConfigCommand::Reset { force: true })
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&file).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["max_resolution"], 480);
    assert!(ctx.backend.get_settings().await.is_ok());
}
