use iced::widget::{button, column, row, scrollable, stack, text, image as image_widget};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

// Declare the modules
mod api;
mod scan;
mod state;
mod ui;

use api::{ApiConfig, Classification};
use scan::LoadedScan;
use state::session::Session;

/// Busy-overlay status message while a prediction is in flight
const ANALYZING_STATUS: &str = "Analyzing CT Scan...";
/// Busy-overlay status message while retraining is in flight
const TRAINING_STATUS: &str = "Training model... This may take a while.";

/// Main application state
struct ScanClient {
    /// Selected scan + encoded payload for the current upload cycle
    session: Session,
    /// Where the prediction service lives
    api: ApiConfig,
    /// Preview handle for the image widget (built from the raw file bytes)
    preview: Option<image_widget::Handle>,
    /// Last classification outcome, if any
    result: Option<Classification>,
    /// Status message while a network call is pending; doubles as the
    /// one-in-flight guard for predict/train
    busy: Option<&'static str>,
    /// Visual highlight while a file is hovered over the window
    drop_active: bool,
    /// Set once the first file of a drag has been handled, so the rest of a
    /// multi-file batch is ignored; re-armed when a new drag starts
    drop_handled: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Browse Files" button
    BrowseScan,
    /// A file is being dragged over the window
    DropZoneEntered,
    /// The dragged file left the window
    DropZoneLeft,
    /// A file was dropped onto the window
    ScanDropped(PathBuf),
    /// Background load completed
    ScanLoaded(Result<LoadedScan, String>),
    /// User clicked "Remove" on the preview panel
    RemoveScan,
    /// User clicked "Analyze Scan"
    Predict,
    /// Prediction request settled
    PredictFinished(Result<Classification, String>),
    /// User clicked "Retrain Model"
    Train,
    /// Training request settled
    TrainFinished(Result<String, String>),
}

impl ScanClient {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let api = ApiConfig::from_env();
        log::info!("🩺 CT scan client ready, service at {}", api.base_url());

        (
            ScanClient {
                session: Session::new(),
                api,
                preview: None,
                result: None,
                busy: None,
                drop_active: false,
                drop_handled: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseScan => {
                // Show the native file picker, filtered to the accepted kinds
                let file = FileDialog::new()
                    .set_title("Select a CT Scan Image")
                    .add_filter("CT scan images", &["jpg", "jpeg", "png"])
                    .pick_file();

                match file {
                    Some(path) => self.handle_file(path),
                    None => Task::none(),
                }
            }
            Message::DropZoneEntered => {
                self.drop_active = true;
                self.drop_handled = false;
                Task::none()
            }
            Message::DropZoneLeft => {
                self.drop_active = false;
                self.drop_handled = false;
                Task::none()
            }
            Message::ScanDropped(path) => {
                self.drop_active = false;

                // The platform delivers one event per dropped file; only the
                // first of a batch is used, until a new drag re-arms the flag
                if self.drop_handled {
                    return Task::none();
                }
                self.drop_handled = true;
                self.handle_file(path)
            }
            Message::ScanLoaded(Ok(scan)) => {
                self.preview = Some(image_widget::Handle::from_bytes(scan.bytes.clone()));
                self.session.select(scan.into_selected());
                Task::none()
            }
            Message::ScanLoaded(Err(error)) => {
                log::error!("Failed to load scan: {}", error);
                alert(
                    MessageLevel::Error,
                    "Could not read the selected image. Please try again.",
                );
                Task::none()
            }
            Message::RemoveScan => {
                self.reset_upload();
                Task::none()
            }
            Message::Predict => {
                if self.busy.is_some() {
                    return Task::none();
                }

                // Precondition: a payload must be loaded before we touch the network
                let Some(payload) = self.session.encoded_payload().map(str::to_string) else {
                    alert(MessageLevel::Warning, "Please upload an image first");
                    return Task::none();
                };

                self.busy = Some(ANALYZING_STATUS);

                Task::perform(
                    api::predict(self.api.clone(), payload),
                    |result| Message::PredictFinished(result.map_err(|e| e.to_string())),
                )
            }
            Message::PredictFinished(result) => {
                // Cleared on every exit path, success or failure
                self.busy = None;

                match result {
                    Ok(classification) => {
                        log::info!("Prediction result: {}", classification.title());
                        self.result = Some(classification);

                        // Bring the result card into view
                        scrollable::snap_to(
                            results_scroll_id(),
                            scrollable::RelativeOffset::END,
                        )
                    }
                    Err(error) => {
                        log::error!("Prediction error: {}", error);
                        alert(
                            MessageLevel::Error,
                            "An error occurred during prediction. Please try again.",
                        );
                        Task::none()
                    }
                }
            }
            Message::Train => {
                if self.busy.is_some() {
                    return Task::none();
                }

                let confirmed = MessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title("Retrain Model")
                    .set_description(
                        "This will retrain the model which may take several minutes. Continue?",
                    )
                    .set_buttons(MessageButtons::YesNo)
                    .show();

                if !matches!(confirmed, MessageDialogResult::Yes) {
                    return Task::none();
                }

                self.busy = Some(TRAINING_STATUS);

                Task::perform(api::train(self.api.clone()), |result| {
                    Message::TrainFinished(result.map_err(|e| e.to_string()))
                })
            }
            Message::TrainFinished(result) => {
                self.busy = None;

                match result {
                    Ok(response) => {
                        // The service's response is shown verbatim
                        alert(MessageLevel::Info, &response);
                    }
                    Err(error) => {
                        log::error!("Training error: {}", error);
                        alert(
                            MessageLevel::Error,
                            "An error occurred during training. Please check the logs.",
                        );
                    }
                }

                Task::none()
            }
        }
    }

    /// Validate a picked or dropped file and start the background load.
    ///
    /// Rejection happens synchronously, before any read: the previously
    /// selected scan (if any) is left untouched.
    fn handle_file(&mut self, path: PathBuf) -> Task<Message> {
        if scan::mime_for_path(&path).is_none() {
            alert(
                MessageLevel::Warning,
                "Please upload a valid image file (JPG, JPEG, or PNG)",
            );
            return Task::none();
        }

        Task::perform(scan::load_scan(path), |result| {
            Message::ScanLoaded(result.map_err(|e| e.to_string()))
        })
    }

    /// Return the UI to its initial no-selection state.
    /// Safe to call with nothing selected.
    fn reset_upload(&mut self) {
        self.session.reset();
        self.preview = None;
        self.result = None;
    }

    /// Listen for native drag-and-drop events on the window
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::DropZoneEntered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DropZoneLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::ScanDropped(path)),
            _ => None,
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Kidney CT Scan Analysis").size(32),
            text("Upload a CT scan to check for signs of a tumor").size(16),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        // Upload prompt and preview panel are mutually exclusive
        let upload: Element<Message> = match (self.session.scan(), &self.preview) {
            (Some(scan), Some(handle)) => ui::preview_panel(scan, handle.clone()),
            _ => ui::upload_area(self.drop_active),
        };

        let actions = row![
            button(text("Analyze Scan").size(16))
                .on_press_maybe(self.session.can_predict().then_some(Message::Predict))
                .style(button::primary)
                .padding([10.0, 24.0]),
            button(text("Retrain Model").size(16))
                .on_press(Message::Train)
                .style(button::secondary)
                .padding([10.0, 24.0]),
        ]
        .spacing(16);

        let mut content = column![header, upload, actions]
            .spacing(24)
            .padding(40)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        if let Some(classification) = self.result {
            content = content.push(ui::result_card(classification));
        }

        let base = scrollable(content)
            .id(results_scroll_id())
            .width(Length::Fill)
            .height(Length::Fill);

        match self.busy {
            Some(status) => stack![base, ui::busy_overlay(status)].into(),
            None => base.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Identifier of the main scrollable, used to snap the result card into view
fn results_scroll_id() -> scrollable::Id {
    scrollable::Id::new("results")
}

/// Blocking notification dialog (the desktop equivalent of `alert`)
fn alert(level: MessageLevel, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title("CT Scan Analysis")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application(
        "Kidney CT Scan Analysis",
        ScanClient::update,
        ScanClient::view,
    )
    .subscription(ScanClient::subscription)
    .theme(ScanClient::theme)
    .centered()
    .run_with(ScanClient::new)
}
