//=========================================================================
// MindBench Binary
//=========================================================================

use rand::{rngs::SmallRng, SeedableRng};

use mindbench::prelude::*;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), AppError> {
    init_tracing();

    let config = AppConfig::from_env();
    let corpus = WordCorpus::load(&config.words_path)?;

    let controller = SceneController::new(
        corpus,
        Box::new(SystemClock),
        Box::new(SmallRng::from_os_rng()),
    );

    let mut builder = AppBuilder::new();
    if let Some(tps) = config.tps {
        builder = builder.with_tps(tps);
    }
    builder.build().run(controller)
}
