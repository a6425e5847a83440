//=========================================================================
// Error Types
//=========================================================================
//
// Fatal, startup-level failures. Gameplay mistakes are ordinary state
// transitions and never show up here.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== CorpusError =========================================================

/// Word corpus could not be loaded.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("failed to read word corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus contained no words.
    #[error("word corpus {path} contains no words")]
    Empty { path: PathBuf },
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop the application cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

//=== AppError ============================================================

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_error_display_names_path() {
        let err = CorpusError::Empty { path: PathBuf::from("words.txt") };
        assert_eq!(err.to_string(), "word corpus words.txt contains no words");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = CorpusError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn app_error_is_transparent() {
        let err = AppError::from(CorpusError::Empty { path: PathBuf::from("w") });
        assert_eq!(err.to_string(), "word corpus w contains no words");
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
        assert_error::<AppError>();
    }
}
