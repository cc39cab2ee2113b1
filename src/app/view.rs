//! Pure mapping from controller state to what the window shows.

use super::controller::PendingUpload;
use super::state::{Phase, UploadState};
use crate::upload::Label;

pub const LANDING_GLYPHS: [&str; 2] = [Label::Cat.glyph(), Label::Loaf.glyph()];
pub const UPLOAD_BUTTON: &str = "Upload the image";
pub const RESET_BUTTON: &str = "Try another";

/// User actions the view hands back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    PickFile,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub glyphs: [&'static str; 2],
    pub show_upload_button: bool,
    /// Present while a request is in flight.
    pub progress: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub glyph: &'static str,
    pub caption: String,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Landing(Landing),
    Result(ResultCard),
}

impl View {
    pub fn intents(&self) -> &'static [Intent] {
        match self {
            View::Landing(landing) if landing.show_upload_button => &[Intent::PickFile],
            View::Landing(_) => &[],
            View::Result(_) => &[Intent::Reset],
        }
    }
}

pub fn render(state: &UploadState, pending: Option<&PendingUpload>) -> View {
    let landing = |show_upload_button, progress, error| {
        View::Landing(Landing {
            glyphs: LANDING_GLYPHS,
            show_upload_button,
            progress,
            error,
        })
    };

    match state.phase() {
        Phase::Idle => landing(true, None, None),
        Phase::Submitting => {
            let caption = match pending {
                Some(pending) => format!("Uploading {}…", pending.describe()),
                None => "Uploading…".to_string(),
            };
            landing(false, Some(caption), None)
        }
        Phase::Failed => landing(true, None, state.error_message().map(str::to_owned)),
        Phase::Succeeded => match state.result() {
            Some(result) => View::Result(ResultCard {
                glyph: result.label.glyph(),
                caption: format!("{} {}", result.label, result.label.glyph()),
                confidence: format!("{}%", result.confidence),
            }),
            None => landing(true, None, None),
        },
    }
}
