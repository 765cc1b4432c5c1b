use crate::application::DownloadCoordinator;
use crate::domain::{AppError, DownloadPhase, DownloadRequest, MediaKind};
use crate::ui::{DialogMessage, DownloadMessage, DownloadView};
use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

pub struct DownloadApp {
    view: DownloadView,
    coordinator: DownloadCoordinator,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new(DownloadCoordinator::default())
    }
}

impl DownloadApp {
    pub fn new(coordinator: DownloadCoordinator) -> Self {
        Self {
            view: DownloadView::default(),
            coordinator,
        }
    }

    /// Mark the app busy and hand the request to the background executor.
    fn start_download(&mut self, request: DownloadRequest) -> Task<Message> {
        tracing::info!(
            "Starting {:?} download of {} into {}",
            request.kind,
            request.url,
            self.coordinator.output_dir().display()
        );
        self.view.phase = DownloadPhase::Busy;

        let coordinator = self.coordinator.clone();
        Task::perform(
            async move { coordinator.download(request).await },
            Message::DownloadFinished,
        )
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    /// Outcome of the yt-dlp run, carrying what was downloaded
    DownloadFinished(Result<MediaKind, AppError>),
    /// A message box was dismissed
    DialogClosed,
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            // Input is dropped while yt-dlp runs or a message box waits to be dismissed
            if app.view.is_busy() || app.view.message_open {
                return Task::none();
            }

            app.view.update(&ui_msg);

            match ui_msg {
                DownloadMessage::VideoPressed => {
                    let checked =
                        crate::application::validate_url(&app.view.youtube_url).map(str::to_owned);
                    match checked {
                        Ok(url) => {
                            tracing::debug!("Opening quality picker for {}", url);
                            app.view.quality_dialog = Some(Default::default());
                        }
                        Err(e) => return warn(app, e),
                    }
                }
                DownloadMessage::AudioPressed => {
                    match app
                        .coordinator
                        .prepare(&app.view.youtube_url, MediaKind::Audio)
                    {
                        Ok(request) => return app.start_download(request),
                        Err(e) => return warn(app, e),
                    }
                }
                DownloadMessage::Dialog(DialogMessage::Confirm) => {
                    let Some(quality) = app.view.quality_dialog.as_ref().map(|d| d.selected) else {
                        return Task::none();
                    };

                    match app
                        .coordinator
                        .prepare(&app.view.youtube_url, MediaKind::Video(quality))
                    {
                        Ok(request) => return app.start_download(request),
                        Err(e) => return warn(app, e),
                    }
                }
                DownloadMessage::Dialog(DialogMessage::Cancel) => {
                    app.view.quality_dialog = None;
                }
                DownloadMessage::Dialog(DialogMessage::QualitySelected(_))
                | DownloadMessage::UrlChanged(_) => {}
            }
        }
        Message::DownloadFinished(result) => {
            app.view.phase = DownloadPhase::Idle;
            app.view.quality_dialog = None;

            match result {
                Ok(kind) => {
                    return show_message(
                        app,
                        MessageLevel::Info,
                        "Download Complete",
                        kind.completion_message(),
                    );
                }
                Err(e) => {
                    tracing::error!("Download failed: {}", e);
                    return show_message(
                        app,
                        MessageLevel::Error,
                        "Download Failed",
                        e.to_string(),
                    );
                }
            }
        }
        Message::DialogClosed => {
            app.view.message_open = false;
        }
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}

fn warn(app: &mut DownloadApp, error: AppError) -> Task<Message> {
    tracing::warn!("Rejected input: {}", error);
    show_message(app, MessageLevel::Warning, "Warning", error.to_string())
}

/// Message boxes have no parent window, so the app keeps itself modal
/// until `DialogClosed` arrives.
fn show_message(
    app: &mut DownloadApp,
    level: MessageLevel,
    title: &'static str,
    description: String,
) -> Task<Message> {
    app.view.message_open = true;

    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(level)
                .set_title(title)
                .set_description(description)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        |_| Message::DialogClosed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VideoQuality;
    use crate::downloader::testing::RecordingDownloader;
    use futures::StreamExt;
    use std::sync::Arc;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    struct Harness {
        app: DownloadApp,
        downloader: Arc<RecordingDownloader>,
        _dir: tempfile::TempDir,
    }

    fn harness() -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Arc::new(RecordingDownloader::default());
        let coordinator =
            DownloadCoordinator::new(downloader.clone(), dir.path().join("YouTube"));
        Harness {
            app: DownloadApp::new(coordinator),
            downloader,
            _dir: dir,
        }
    }

    fn send(app: &mut DownloadApp, msg: DownloadMessage) {
        let _ = update(app, Message::UiMessage(msg));
    }

    /// Drive a task to completion and collect the messages it produces.
    async fn run(task: Task<Message>) -> Vec<Message> {
        let Some(mut stream) = iced_runtime::task::into_stream(task) else {
            return Vec::new();
        };
        let mut messages = Vec::new();
        while let Some(action) = stream.next().await {
            if let iced_runtime::Action::Output(message) = action {
                messages.push(message);
            }
        }
        messages
    }

    #[test]
    fn test_empty_url_does_not_open_picker() {
        let Harness { mut app, .. } = harness();
        send(&mut app, DownloadMessage::UrlChanged("   ".to_string()));
        send(&mut app, DownloadMessage::VideoPressed);

        assert!(app.view.quality_dialog.is_none());
        assert!(app.view.message_open);
        assert_eq!(app.view.phase, DownloadPhase::Idle);
    }

    #[test]
    fn test_invalid_audio_request_stays_idle() {
        let Harness {
            mut app, downloader, ..
        } = harness();
        send(&mut app, DownloadMessage::UrlChanged("https://vimeo.com/1".to_string()));
        send(&mut app, DownloadMessage::AudioPressed);

        assert_eq!(app.view.phase, DownloadPhase::Idle);
        assert!(downloader.calls().is_empty());
    }

    #[test]
    fn test_actions_wait_for_warning_to_close() {
        let Harness { mut app, .. } = harness();
        send(&mut app, DownloadMessage::VideoPressed);
        assert!(app.view.message_open);

        // Clicks while the warning is up do not stack more boxes or start work
        send(&mut app, DownloadMessage::UrlChanged(URL.to_string()));
        send(&mut app, DownloadMessage::AudioPressed);
        assert!(app.view.youtube_url.is_empty());
        assert_eq!(app.view.phase, DownloadPhase::Idle);

        let _ = update(&mut app, Message::DialogClosed);
        assert!(!app.view.message_open);

        send(&mut app, DownloadMessage::UrlChanged(URL.to_string()));
        send(&mut app, DownloadMessage::AudioPressed);
        assert_eq!(app.view.phase, DownloadPhase::Busy);
    }

    #[test]
    fn test_picker_opens_on_best_and_cancel_closes_it() {
        let Harness { mut app, .. } = harness();
        send(&mut app, DownloadMessage::UrlChanged(URL.to_string()));
        send(&mut app, DownloadMessage::VideoPressed);

        let selected = app.view.quality_dialog.as_ref().map(|d| d.selected);
        assert_eq!(selected, Some(VideoQuality::Best));

        send(&mut app, DownloadMessage::Dialog(DialogMessage::Cancel));
        assert!(app.view.quality_dialog.is_none());
        assert_eq!(app.view.phase, DownloadPhase::Idle);
    }

    #[test]
    fn test_confirm_goes_busy_until_finished() {
        let Harness { mut app, .. } = harness();
        send(&mut app, DownloadMessage::UrlChanged(format!("  {URL}  ")));
        send(&mut app, DownloadMessage::VideoPressed);
        send(
            &mut app,
            DownloadMessage::Dialog(DialogMessage::QualitySelected(VideoQuality::P720)),
        );
        send(&mut app, DownloadMessage::Dialog(DialogMessage::Confirm));

        assert_eq!(app.view.phase, DownloadPhase::Busy);
        assert!(app.view.quality_dialog.is_some());

        // Cancel is ignored while the download runs
        send(&mut app, DownloadMessage::Dialog(DialogMessage::Cancel));
        assert!(app.view.quality_dialog.is_some());

        let _ = update(
            &mut app,
            Message::DownloadFinished(Ok(MediaKind::Video(VideoQuality::P720))),
        );
        assert_eq!(app.view.phase, DownloadPhase::Idle);
        assert!(app.view.quality_dialog.is_none());
        assert!(app.view.message_open);
    }

    #[test]
    fn test_quality_is_frozen_while_busy() {
        let Harness { mut app, .. } = harness();
        send(&mut app, DownloadMessage::UrlChanged(URL.to_string()));
        send(&mut app, DownloadMessage::VideoPressed);
        send(
            &mut app,
            DownloadMessage::Dialog(DialogMessage::QualitySelected(VideoQuality::P480)),
        );
        send(&mut app, DownloadMessage::Dialog(DialogMessage::Confirm));
        assert_eq!(app.view.phase, DownloadPhase::Busy);

        send(
            &mut app,
            DownloadMessage::Dialog(DialogMessage::QualitySelected(VideoQuality::Worst)),
        );

        let selected = app.view.quality_dialog.as_ref().map(|d| d.selected);
        assert_eq!(selected, Some(VideoQuality::P480));
    }

    #[tokio::test]
    async fn test_video_path_calls_downloader_once() {
        let Harness {
            mut app, downloader, ..
        } = harness();
        send(&mut app, DownloadMessage::UrlChanged(URL.to_string()));
        send(&mut app, DownloadMessage::VideoPressed);
        send(
            &mut app,
            DownloadMessage::Dialog(DialogMessage::QualitySelected(VideoQuality::P1080)),
        );
        let task = update(
            &mut app,
            Message::UiMessage(DownloadMessage::Dialog(DialogMessage::Confirm)),
        );

        let messages = run(task).await;
        assert!(matches!(
            messages.as_slice(),
            [Message::DownloadFinished(Ok(MediaKind::Video(VideoQuality::P1080)))]
        ));

        let calls = downloader.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, URL);
        assert_eq!(calls[0].1.format, "best[height<=1080]");

        for message in messages {
            let _ = update(&mut app, message);
        }
        assert_eq!(app.view.phase, DownloadPhase::Idle);
        assert!(app.view.quality_dialog.is_none());
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let Harness { mut app, .. } = harness();
        send(&mut app, DownloadMessage::UrlChanged(URL.to_string()));
        send(&mut app, DownloadMessage::AudioPressed);
        assert_eq!(app.view.phase, DownloadPhase::Busy);

        // Pressing video while busy must not open the picker
        send(&mut app, DownloadMessage::VideoPressed);
        assert!(app.view.quality_dialog.is_none());

        let _ = update(
            &mut app,
            Message::DownloadFinished(Err(AppError::Downloader("boom".to_string()))),
        );
        assert_eq!(app.view.phase, DownloadPhase::Idle);
        assert!(app.view.message_open);
    }
}
