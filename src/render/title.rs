//=========================================================================
// Title Renderer
//=========================================================================
//
// Toolkit-free renderer: turns each snapshot into one line of text that
// the platform shows as the window title.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Write as _;

use log::trace;

//=== Internal Dependencies ===============================================

use super::{FrameSnapshot, Renderer, SceneView};

//=== Constants ===========================================================

pub const APP_NAME: &str = "MindBench";

//=== TitleRenderer =======================================================

/// Renders snapshots as window titles, tracking whether the text changed.
#[derive(Debug)]
pub struct TitleRenderer {
    app_name: String,
    title: String,
    dirty: bool,
}

impl TitleRenderer {
    /// Every title starts with `app_name`.
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        Self {
            title: app_name.clone(),
            app_name,
            dirty: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the title if it changed since the last call.
    pub fn take_update(&mut self) -> Option<&str> {
        if std::mem::take(&mut self.dirty) {
            Some(&self.title)
        } else {
            None
        }
    }
}

impl Default for TitleRenderer {
    fn default() -> Self {
        Self::new(APP_NAME)
    }
}

impl Renderer for TitleRenderer {
    fn render(&mut self, frame: &FrameSnapshot) {
        let title = describe(&self.app_name, frame);
        if title != self.title {
            trace!("Title: {}", title);
            self.title = title;
            self.dirty = true;
        }
    }
}

//=== Formatting ==========================================================

/// One-line textual render of a snapshot.
pub fn describe(app_name: &str, frame: &FrameSnapshot) -> String {
    let mut out = String::from(app_name);

    match &frame.view {
        SceneView::Intro => out.push_str(" | Press any key to begin"),
        SceneView::Menu => out.push_str(" | Choose any game!"),
        SceneView::Reaction { label, .. } => {
            let _ = write!(out, " | Reaction Time Test | {}", label);
        }
        SceneView::DigitSpan {
            score,
            session_active,
            challenge,
            time_remaining,
            text,
            ..
        } => {
            out.push_str(" | Number Memory Test");
            if *session_active {
                let _ = write!(out, " | Score {}", score);
            }
            if let Some(challenge) = challenge {
                let secs = time_remaining.map(|t| t.as_secs_f64()).unwrap_or(0.0);
                let _ = write!(out, " | {} ({:.1}s)", challenge, secs);
            }
            let _ = write!(out, " | {}", text);
        }
        SceneView::WordRecognition { score, word } => {
            let _ = write!(out, " | Verbal Memory Test | Score {} | {}", score, word);
        }
    }

    if let Some(label) = frame.hovered {
        let _ = write!(out, " [{}]", label);
    }

    out
}

//=========================================================================
// Unit Tests
//=========================================================================
