//! End-to-end behaviour of `GuiBackend` with in-memory adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tabconv_core::events::{CONVERSION_FAILED, CONVERSION_SUCCEEDED, CONVERTING_LABEL, DOWNLOADING_LABEL};
use tabconv_core::{
    DownloadError, DownloadProgress, MediaDownloader, ProgressCallback, RepositoryError,
    ResolvedVideo, Settings, SettingsRepository, SettingsService, SettingsUpdate,
    StreamDescriptor, StreamResolver, TranscodeError, TranscodeOutcome, TranscodeRunner,
    TranscoderConfig, VideoFormat,
};
use tabconv_gui::{GuiBackend, GuiDeps, GuiError, JobEvent, JobResult};
use tempfile::TempDir;
use tokio::sync::Notify;
use url::Url;

// ============================================================================
// Fakes
// ============================================================================

struct MemorySettings(Mutex<Settings>);

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        *self.0.lock().unwrap() = settings.clone();
        Ok(())
    }
}

#[derive(Default)]
struct CountingResolver {
    calls: AtomicUsize,
}

#[async_trait]
impl StreamResolver for CountingResolver {
    async fn resolve(&self, _url: &Url) -> Result<ResolvedVideo, DownloadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ResolvedVideo {
            title: "Launch: Day 1".to_string(),
            streams: vec![
                StreamDescriptor::new(VideoFormat::WebM, 360, "Launch: Day 1", "https://cdn/360"),
                StreamDescriptor::new(VideoFormat::WebM, 720, "Launch: Day 1", "https://cdn/720"),
            ],
        })
    }
}

struct ChunkedDownloader;

#[async_trait]
impl MediaDownloader for ChunkedDownloader {
    async fn download(
        &self,
        _url: &str,
        destination: &Path,
        progress: ProgressCallback<'_>,
    ) -> Result<u64, DownloadError> {
        progress(DownloadProgress::new(5, Some(10)));
        tokio::fs::write(destination, b"0123456789").await?;
        progress(DownloadProgress::new(10, Some(10)));
        Ok(10)
    }
}

enum RunnerBehaviour {
    Exit(i32),
    SpawnFails,
}

struct FakeRunner {
    behaviour: RunnerBehaviour,
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl TranscodeRunner for FakeRunner {
    async fn run(
        &self,
        input: &Path,
        config: &TranscoderConfig,
    ) -> Result<TranscodeOutcome, TranscodeError> {
        let job = config.prepare(input)?;
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.behaviour {
            RunnerBehaviour::Exit(code) => Ok(TranscodeOutcome {
                exit_code: Some(code),
                output: job.output,
                log_path: job.log_path,
                command_line: job.command_line,
            }),
            RunnerBehaviour::SpawnFails => Err(TranscodeError::spawn_failed(
                job.program.display().to_string(),
                "Permission denied",
            )),
        }
    }
}

// ============================================================================
// Fixture
// ============================================================================

struct Fixture {
    dir: TempDir,
    input: PathBuf,
    resolver: Arc<CountingResolver>,
    backend: GuiBackend,
}

fn fixture(behaviour: RunnerBehaviour, gate: Option<Arc<Notify>>) -> Fixture {
    let dir = TempDir::new().unwrap();
    let program = dir.path().join("ffmpeg");
    std::fs::write(&program, b"").unwrap();
    let input = dir.path().join("video.mp4");
    std::fs::write(&input, b"frames").unwrap();

    let mut settings = Settings::with_defaults();
    settings.transcoder_path = Some(program.display().to_string());
    settings.download_dir = Some(dir.path().join("downloads").display().to_string());

    let resolver = Arc::new(CountingResolver::default());
    let deps = GuiDeps::new(
        SettingsService::new(Arc::new(MemorySettings(Mutex::new(settings)))),
        resolver.clone(),
        Arc::new(ChunkedDownloader),
        Arc::new(FakeRunner { behaviour, gate }),
    );

    Fixture {
        dir,
        input,
        resolver,
        backend: GuiBackend::new(deps),
    }
}

fn notifications(events: &[JobEvent]) -> Vec<&tabconv_core::Notification> {
    events
        .iter()
        .filter_map(|e| match e {
            JobEvent::Notification { notification } => Some(notification),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Conversion
// ============================================================================

#[tokio::test]
async fn test_successful_conversion_events() {
    let fx = fixture(RunnerBehaviour::Exit(0), None);
    let job = fx.backend.start_convert(&fx.input).await.unwrap();
    assert!(fx.backend.is_busy());

    let (events, result) = job.collect().await;

    assert_eq!(events.first(), Some(&JobEvent::busy(CONVERTING_LABEL)));
    assert!(events.last().is_some_and(JobEvent::is_idle));
    let notes = notifications(&events);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, CONVERSION_SUCCEEDED);
    assert!(notes[0].log_to_open().is_none());

    assert!(result.is_success());
    match result {
        JobResult::Transcoded { outcome } => {
            assert_eq!(outcome.output, fx.dir.path().join("video-converted.avi"));
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(!fx.backend.is_busy());
}

#[tokio::test]
async fn test_failed_conversion_offers_log() {
    let fx = fixture(RunnerBehaviour::Exit(1), None);
    let (events, result) = fx
        .backend
        .start_convert(&fx.input)
        .await
        .unwrap()
        .collect()
        .await;

    assert!(!result.is_success());
    let notes = notifications(&events);
    assert_eq!(notes[0].message, CONVERSION_FAILED);
    assert_eq!(notes[0].log_to_open(), Some(fx.dir.path().join("video.log").as_path()));
    assert!(events.last().is_some_and(JobEvent::is_idle));
}

#[tokio::test]
async fn test_spawn_failure_has_no_log_action() {
    let fx = fixture(RunnerBehaviour::SpawnFails, None);
    let (events, result) = fx
        .backend
        .start_convert(&fx.input)
        .await
        .unwrap()
        .collect()
        .await;

    assert!(matches!(result, JobResult::Failed { .. }));
    let notes = notifications(&events);
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert!(notes[0].action.is_none());
    assert!(events.last().is_some_and(JobEvent::is_idle));
}

#[tokio::test]
async fn test_unconfigured_transcoder_is_rejected_up_front() {
    let fx = fixture(RunnerBehaviour::Exit(0), None);
    fx.backend
        .update_settings(&SettingsUpdate {
            transcoder_path: Some(None),
            ..SettingsUpdate::default()
        })
        .await
        .unwrap();

    let err = fx.backend.start_convert(&fx.input).await.unwrap_err();
    assert!(matches!(
        err,
        GuiError::Transcode(TranscodeError::TranscoderNotConfigured)
    ));
    assert_eq!(err.to_notification().title, "FFMpeg");
    assert!(!fx.backend.is_busy());
}

#[tokio::test]
async fn test_second_job_conflicts_while_busy() {
    let gate = Arc::new(Notify::new());
    let fx = fixture(RunnerBehaviour::Exit(0), Some(gate.clone()));

    let first = fx.backend.start_convert(&fx.input).await.unwrap();
    let err = fx.backend.start_convert(&fx.input).await.unwrap_err();
    assert!(matches!(err, GuiError::Conflict(_)));

    gate.notify_one();
    assert!(first.wait().await.is_success());
    assert!(!fx.backend.is_busy());

    gate.notify_one();
    let again = fx.backend.start_convert(&fx.input).await.unwrap();
    assert!(again.wait().await.is_success());
}

// ============================================================================
// Download
// ============================================================================

#[tokio::test]
async fn test_invalid_url_never_resolves() {
    let fx = fixture(RunnerBehaviour::Exit(0), None);
    let err = fx.backend.plan_download("not a url").await.unwrap_err();

    assert!(matches!(
        err,
        GuiError::Download(DownloadError::InvalidUrl { .. })
    ));
    assert_eq!(err.to_notification().title, "Invalid Url");
    assert_eq!(fx.resolver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_download_into_default_directory() {
    let fx = fixture(RunnerBehaviour::Exit(0), None);
    let plan = fx
        .backend
        .plan_download("https://www.youtube.com/watch?v=3PADxcM_Vi8")
        .await
        .unwrap();
    assert_eq!(plan.stream.resolution, 360);

    let (events, result) = fx
        .backend
        .start_download(plan, None, false)
        .await
        .unwrap()
        .collect()
        .await;

    let expected = fx.dir.path().join("downloads").join("Launch Day 1.webm");
    assert_eq!(result, JobResult::Downloaded { path: expected.clone() });
    assert!(expected.exists());

    assert_eq!(events.first(), Some(&JobEvent::busy(DOWNLOADING_LABEL)));
    assert!(events.contains(&JobEvent::Progress { percent: 50.0 }));
    assert!(events.contains(&JobEvent::Progress { percent: 100.0 }));
    assert!(events.last().is_some_and(JobEvent::is_idle));
}

#[tokio::test]
async fn test_existing_destination_needs_overwrite() {
    let fx = fixture(RunnerBehaviour::Exit(0), None);
    let plan = fx
        .backend
        .plan_download("https://example.com/watch?v=1")
        .await
        .unwrap();
    let destination = fx.dir.path().join("taken.webm");
    std::fs::write(&destination, b"old").unwrap();

    let err = fx
        .backend
        .start_download(plan.clone(), Some(destination.clone()), false)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GuiError::Download(DownloadError::DestinationExists { .. })
    ));
    assert!(!fx.backend.is_busy());

    let result = fx
        .backend
        .start_download(plan, Some(destination.clone()), true)
        .await
        .unwrap()
        .wait()
        .await;
    assert!(result.is_success());
    assert_eq!(std::fs::read(&destination).unwrap(), b"0123456789");
}

#[tokio::test]
async fn test_stream_listing_marks_selection() {
    let fx = fixture(RunnerBehaviour::Exit(0), None);
    let listing = fx
        .backend
        .list_streams("https://example.com/watch?v=1")
        .await
        .unwrap();

    assert_eq!(listing.video.streams.len(), 2);
    assert_eq!(listing.selected, Some(0));
    assert_eq!(listing.selected_stream().unwrap().url, "https://cdn/360");
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["selected"], 0);
}
