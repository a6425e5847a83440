//=========================================================================
// MindBench Library Root
//
// Three cognitive benchmarks (reaction time, number memory, verbal
// memory) behind a single scene controller, driven by a winit window.
//
// Responsibilities:
// - Expose the game engines and the scene controller for embedding/tests
// - Keep the OS integration (`platform`) hidden from end users
// - Provide the `AppBuilder` facade that wires everything together
//
// Typical usage:
// ```no_run
// use mindbench::prelude::*;
// use rand::{rngs::SmallRng, SeedableRng};
//
// fn main() -> Result<(), AppError> {
//     let corpus = WordCorpus::load("assets/words.txt")?;
//     let controller = SceneController::new(
//         corpus,
//         Box::new(SystemClock),
//         Box::new(SmallRng::from_os_rng()),
//     );
//     AppBuilder::new().build().run(controller)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `games` holds the three toolkit-free engines. `core` holds the scene
// controller, input model, clock and layout. `render` defines the frame
// snapshot handed to the window.
//
pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod prelude;
pub mod render;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit integration (window, event loop, input
// conversion) and is not part of the public API surface.
//
mod platform;

//--- Public Exports ------------------------------------------------------

pub use app::{App, AppBuilder};
pub use config::AppConfig;
pub use error::AppError;
