//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the core thread via crossbeam.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  CoreLoop        │
//  │   ↓                      │    │   ↓              │
//  │  InputProcessor          │    │  SceneController │
//  │   ├─ Converts Winit      │    │   ↓              │
//  │   ├─ Tracks modifiers    │    │  Active scene    │
//  │   └─ Tracks cursor       │    │   ↓              │
//  │   ↓                      │    │  advance_frame() │
//  │  InputBuffer             │    └──────────────────┘
//  │   ↓                      │         ↑       │
//  │  RedrawRequested ────────┼─────────┘       │
//  │   (flush input)  PlatformEvent             │
//  │                          │                 │
//  │  TitleRenderer  <────────┼─────────────────┘
//  │   (latest snapshot)      │     FrameSnapshot
//  └──────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: buffered input is sent as one
//   message and the newest snapshot is shown
// - **Core owns shutdown**: close requests are forwarded as input; the
//   window closes once the core drops its snapshot sender
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `App::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::PlatformEvent;
use crate::error::PlatformError;
use crate::render::{FrameSnapshot, Renderer, TitleRenderer};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// Initial window parameters.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window manager, input aggregator and snapshot presenter.
///
/// Runs on the main thread and talks to the core thread exclusively via
/// the two channels.
pub(crate) struct Platform {
    settings: WindowSettings,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers stamped input until the frame boundary.
    buffer: InputBuffer,

    /// Channel to send input to the core thread.
    event_sender: Sender<PlatformEvent>,

    /// Snapshots published by the core thread.
    frames: Receiver<FrameSnapshot>,

    input_processor: InputProcessor,
    renderer: TitleRenderer,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub fn new(
        settings: WindowSettings,
        event_sender: Sender<PlatformEvent>,
        frames: Receiver<FrameSnapshot>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        let renderer = TitleRenderer::new(settings.title.clone());
        Self {
            settings,
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            frames,
            input_processor: InputProcessor::new(),
            renderer,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the core thread finishes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the core thread.
    ///
    /// Returns `false` if the core thread is gone.
    fn flush_input_buffer(&mut self) -> bool {
        let Some(events) = self.buffer.drain() else {
            return true;
        };

        let count = events.len();
        trace!(target: "platform::input", "Flushing {} events", count);

        if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
            return false;
        }
        true
    }

    /// Renders the newest pending snapshot.
    ///
    /// Returns `false` once the core thread dropped its sender.
    fn present_latest_frame(&mut self) -> bool {
        let mut latest = None;
        let connected = loop {
            match self.frames.try_recv() {
                Ok(frame) => latest = Some(frame),
                Err(TryRecvError::Empty) => break true,
                Err(TryRecvError::Disconnected) => break false,
            }
        };

        if let Some(frame) = latest {
            self.renderer.render(&frame);
        }
        if let Some(title) = self.renderer.take_update() {
            if let Some(window) = &self.window {
                window.set_title(title);
            }
        }

        connected
    }

    /// Pushes a discrete event and sends it right away.
    fn send_now(&mut self, event: InputEvent, at: Instant) -> bool {
        self.buffer.push_discrete(event, at);
        self.flush_input_buffer()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::Shutdown);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let now = Instant::now();
        let connected = match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send_now(InputEvent::CloseRequested, now)
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
                true
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, Window::scale_factor);
                let event = self.input_processor.process_mouse_move(*position, scale);
                self.buffer.push_motion(event, now);
                true
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event, now);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
                true
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event, now);
                true
            }

            WindowEvent::MouseWheel { .. } => {
                self.buffer.push_discrete(InputEvent::MouseWheel, now);
                true
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, then show the newest frame.
                let sent = self.flush_input_buffer();
                let presented = self.present_latest_frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                sent && presented
            }

            _ => true,
        };

        if !connected {
            info!(target: "platform", "Core thread finished, closing window");
            event_loop.exit();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, TimedEvent};
    use crate::core::scene::SceneKind;
    use crate::render::SceneView;
    use crossbeam_channel::unbounded;

    fn settings() -> WindowSettings {
        WindowSettings {
            title: "MindBench".into(),
            width: 1280,
            height: 720,
        }
    }

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<FrameSnapshot>) {
        let (event_tx, event_rx) = unbounded();
        let (frame_tx, frame_rx) = unbounded();
        (Platform::new(settings(), event_tx, frame_rx), event_rx, frame_tx)
    }

    fn intro_frame() -> FrameSnapshot {
        FrameSnapshot {
            scene: SceneKind::Intro,
            view: SceneView::Intro,
            hovered: None,
        }
    }

    //=====================================================================
    // Input Flush
    //=====================================================================

    #[test]
    fn window_is_created_lazily() {
        let (platform, _rx, _tx) = platform();
        assert!(platform.window.is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _tx) = platform();
        assert!(platform.flush_input_buffer());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx, _tx) = platform();
        let now = Instant::now();
        platform.buffer.push_discrete(InputEvent::key_down(KeyCode::Space), now);

        assert!(platform.flush_input_buffer());
        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => {
                assert_eq!(events, vec![TimedEvent::new(InputEvent::key_down(KeyCode::Space), now)]);
            }
            other => panic!("expected Inputs, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_reports_disconnected_core() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push_discrete(InputEvent::key_down(KeyCode::Space), Instant::now());
        drop(rx);

        assert!(!platform.flush_input_buffer());
    }

    #[test]
    fn close_request_is_forwarded_as_input() {
        let (mut platform, rx, _tx) = platform();
        assert!(platform.send_now(InputEvent::CloseRequested, Instant::now()));

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => {
                let events: Vec<InputEvent> = events.into_iter().map(|t| t.event).collect();
                assert_eq!(events, vec![InputEvent::CloseRequested]);
            }
            other => panic!("expected Inputs, got {:?}", other),
        }
    }

    //=====================================================================
    // Frame Presentation
    //=====================================================================

    #[test]
    fn present_keeps_newest_frame() {
        let (mut platform, _rx, tx) = platform();
        tx.send(intro_frame()).unwrap();
        tx.send(FrameSnapshot {
            scene: SceneKind::Menu,
            view: SceneView::Menu,
            hovered: None,
        })
        .unwrap();

        assert!(platform.present_latest_frame());
        assert_eq!(platform.renderer.title(), "MindBench | Choose any game!");
    }

    #[test]
    fn present_detects_finished_core() {
        let (mut platform, _rx, tx) = platform();
        tx.send(intro_frame()).unwrap();
        drop(tx);

        assert!(!platform.present_latest_frame());
        assert_eq!(platform.renderer.title(), "MindBench | Press any key to begin");
    }
}
