use super::state::{Phase, UploadState};
use crate::upload::{Classifier, ClassifyOutcome, ImageFile, UploadError};
use crate::utils::file_size::format_size;
use derivative::Derivative;
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use tokio::runtime::Handle;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub trait FilePicker {
    /// `None` when the user dismisses the dialog.
    fn pick_image(&self) -> Option<PathBuf>;
}

pub struct NativePicker;

impl FilePicker for NativePicker {
    fn pick_image(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Pick a cat or a loaf")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub file_name: String,
    pub size: Option<u64>,
}

impl PendingUpload {
    pub fn describe(&self) -> String {
        match self.size {
            Some(size) => format!("{} ({})", self.file_name, format_size(size)),
            None => self.file_name.clone(),
        }
    }
}

#[derive(Debug)]
enum TaskEvent {
    Loaded(u64),
    Finished(ClassifyOutcome),
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    pending: PendingUpload,
    receiver: Receiver<TaskEvent>,
}

/// Drives the Idle -> Submitting -> Succeeded/Failed cycle and owns the only
/// `UploadState`. At most one request is outstanding at any time.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct UploadController {
    state: UploadState,
    #[derivative(Debug = "ignore")]
    classifier: Arc<dyn Classifier>,
    #[derivative(Debug = "ignore")]
    picker: Box<dyn FilePicker>,
    runtime: Handle,
    in_flight: Option<InFlight>,
    next_request_id: u64,
}

impl UploadController {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        picker: Box<dyn FilePicker>,
        runtime: Handle,
    ) -> Self {
        Self {
            state: UploadState::default(),
            classifier,
            picker,
            runtime,
            in_flight: None,
            next_request_id: 1,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn pending_upload(&self) -> Option<&PendingUpload> {
        self.in_flight.as_ref().map(|f| &f.pending)
    }

    /// Opens the picker and submits whatever gets chosen. Returns whether a
    /// request was started.
    pub fn request_file_pick(&mut self) -> bool {
        if !self.accepts_pick() {
            tracing::debug!(phase = ?self.state.phase(), "picker unavailable");
            return false;
        }

        match self.picker.pick_image() {
            Some(path) => self.on_file_chosen(ImageFile::from_path(path)),
            None => {
                tracing::debug!("picker dismissed without a file");
                false
            }
        }
    }

    pub fn on_file_chosen(&mut self, file: ImageFile) -> bool {
        if !self.accepts_pick() {
            tracing::debug!(
                file = %file.file_name(),
                phase = ?self.state.phase(),
                "ignoring pick"
            );
            return false;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;

        let pending = PendingUpload {
            file_name: file.file_name().to_string(),
            size: file.loaded_len(),
        };
        tracing::info!(request = id, file = %pending.describe(), "submitting image");

        self.state.begin_submit();

        let (sender, receiver) = mpsc::channel();
        let classifier = self.classifier.clone();
        self.runtime.spawn(async move {
            let outcome = match file.load().await {
                Ok(image) => {
                    if let Some(len) = image.loaded_len() {
                        let _ = sender.send(TaskEvent::Loaded(len));
                    }
                    classifier.classify(image).await
                }
                Err(e) => Err(e),
            };
            if sender.send(TaskEvent::Finished(outcome)).is_err() {
                tracing::debug!(request = id, "outcome dropped, controller is gone");
            }
        });

        self.in_flight = Some(InFlight {
            id,
            pending,
            receiver,
        });
        true
    }

    /// Applies the outcome of the in-flight request if it has arrived.
    /// Returns whether the state changed.
    pub fn poll(&mut self) -> bool {
        let outcome = loop {
            let Some(in_flight) = self.in_flight.as_mut() else {
                return false;
            };
            match in_flight.receiver.try_recv() {
                Ok(TaskEvent::Loaded(len)) => in_flight.pending.size = Some(len),
                Ok(TaskEvent::Finished(outcome)) => break outcome,
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => break Err(UploadError::Aborted),
            }
        };

        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        self.resolve(in_flight, outcome);
        true
    }

    pub fn reset(&mut self) -> bool {
        match self.state.phase() {
            Phase::Succeeded | Phase::Failed => {
                tracing::info!("resetting to idle");
                self.state.clear();
                true
            }
            phase => {
                tracing::debug!(?phase, "reset ignored");
                false
            }
        }
    }

    /// Picks start a request from Idle or Failed only. Succeeded has to go
    /// through `reset` first.
    fn accepts_pick(&self) -> bool {
        self.in_flight.is_none() && matches!(self.state.phase(), Phase::Idle | Phase::Failed)
    }

    fn resolve(&mut self, in_flight: InFlight, outcome: ClassifyOutcome) {
        match outcome {
            Ok(classification) => {
                tracing::info!(
                    request = in_flight.id,
                    file = %in_flight.pending.file_name,
                    label = %classification.label,
                    confidence = classification.confidence,
                    "classified"
                );
                self.state.succeed(classification);
            }
            Err(e) => {
                tracing::warn!(
                    request = in_flight.id,
                    file = %in_flight.pending.file_name,
                    "classification failed: {}",
                    e
                );
                self.state.fail(e.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
