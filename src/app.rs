//=========================================================================
// MindBench Application
//
// Entry point that wires the scene controller to a window.
//
// Architecture:
// ```text
//     AppBuilder  ──build()──>  App  ──run(controller)──>  [Runtime]
//         │                      │
//         ├─ with_tps()          └─ spawns the core thread
//         ├─ with_channel_capacity()  runs the platform
//         ├─ with_window_size()       blocks until exit
//         └─ with_title()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::scene::SceneController;
use crate::core::ui::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::CoreLoop;
use crate::error::AppError;
use crate::platform::{Platform, WindowSettings};
use crate::render::title::APP_NAME;
use crate::render::FrameSnapshot;

//=== Constants ===========================================================

/// Snapshots in flight between core and platform. Older ones are dropped.
const FRAME_CHANNEL_CAPACITY: usize = 2;

//=== AppBuilder ==========================================================

/// Builder for configuring an [`App`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: 1280×720 logical pixels, titled "MindBench"
///
/// # Examples
///
/// ```no_run
/// use mindbench::app::AppBuilder;
/// use mindbench::core::clock::SystemClock;
/// use mindbench::core::scene::SceneController;
/// use mindbench::games::WordCorpus;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let corpus = WordCorpus::load("assets/words.txt")?;
/// let controller = SceneController::new(
///     corpus,
///     Box::new(SystemClock),
///     Box::new(SmallRng::from_os_rng()),
/// );
///
/// AppBuilder::new()
///     .with_tps(120.0)
///     .build()
///     .run(controller)?;
/// # Ok::<(), mindbench::error::AppError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppBuilder {
    tps: f64,
    channel_capacity: usize,
    window_size: (u32, u32),
    title: String,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window_size: (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
            title: APP_NAME.to_string(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the logical window size. Layout coordinates assume 1280×720.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero");
        self.window_size = (width, height);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> App {
        info!(
            "Building app (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window_size.0, self.window_size.1
        );
        App {
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: WindowSettings {
                title: self.title,
                width: self.window_size.0,
                height: self.window_size.1,
            },
        }
    }
}

//=== App =================================================================

/// Configured runtime, ready to drive a [`SceneController`].
#[derive(Debug)]
pub struct App {
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl App {
    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the input and snapshot channels
    /// 2. Spawns the core thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Quit or close: core stops → snapshot channel disconnects →
    ///    platform exits → core thread is joined
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Platform`] if the event loop could not be created
    /// or failed while running.
    pub fn run(self, controller: SceneController) -> Result<(), AppError> {
        info!("Starting runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (frame_tx, frame_rx): (Sender<FrameSnapshot>, Receiver<FrameSnapshot>) =
            bounded(FRAME_CHANNEL_CAPACITY);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = CoreLoop::new(controller, self.tps).spawn(event_rx, frame_tx);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.window, event_tx, frame_rx);
        let result = platform.run();
        info!("Platform event loop exited");

        //--- 4. Cleanup ---------------------------------------------------
        // The platform's sender is dropped by now, so the core sees a
        // disconnect even if it was still running.
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }
        info!("Shutdown complete");
        result.map_err(AppError::from)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
