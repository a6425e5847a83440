//=========================================================================
// Environment Configuration
//=========================================================================
//
// Startup settings read from the process environment.
//
//   MINDBENCH_WORDS  corpus path (default `assets/words.txt`)
//   MINDBENCH_TPS    logic tick rate in [1, 10000] (optional)
//
// Invalid values are logged and ignored; the builder defaults apply.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use log::{info, warn};

//=== Constants ===========================================================

pub const WORDS_VAR: &str = "MINDBENCH_WORDS";
pub const TPS_VAR: &str = "MINDBENCH_TPS";
pub const DEFAULT_WORDS_PATH: &str = "assets/words.txt";

/// Accepted tick rates. Outside this range the tick period is either
/// unrepresentable or too short to sleep on.
pub const TPS_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10_000.0;

//=== AppConfig ===========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub words_path: PathBuf,
    pub tps: Option<f64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            tps: None,
        }
    }
}

impl AppConfig {
    /// Reads `MINDBENCH_WORDS` and `MINDBENCH_TPS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let words_path = lookup(WORDS_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH));

        let tps = lookup(TPS_VAR).and_then(|raw| match raw.trim().parse::<f64>() {
            Ok(tps) if TPS_RANGE.contains(&tps) => Some(tps),
            _ => {
                warn!(
                    "Ignoring {}={:?}: expected a number in {}..={}",
                    TPS_VAR,
                    raw,
                    TPS_RANGE.start(),
                    TPS_RANGE.end()
                );
                None
            }
        });

        info!("Word corpus: {}", words_path.display());
        Self { words_path, tps }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(config(&[]).words_path, PathBuf::from("assets/words.txt"));
    }

    #[test]
    fn words_path_override() {
        let cfg = config(&[(WORDS_VAR, "/tmp/other.txt")]);
        assert_eq!(cfg.words_path, PathBuf::from("/tmp/other.txt"));
    }

    #[test]
    fn blank_words_path_falls_back() {
        let cfg = config(&[(WORDS_VAR, "  ")]);
        assert_eq!(cfg.words_path, PathBuf::from(DEFAULT_WORDS_PATH));
    }

    #[test]
    fn valid_tps_is_read() {
        assert_eq!(config(&[(TPS_VAR, "120")]).tps, Some(120.0));
        assert_eq!(config(&[(TPS_VAR, " 30.5 ")]).tps, Some(30.5));
    }

    #[test]
    fn invalid_tps_is_ignored() {
        for raw in ["0", "-5", "fast", "NaN", "inf", ""] {
            assert_eq!(config(&[(TPS_VAR, raw)]).tps, None, "value {:?}", raw);
        }
    }

    #[test]
    fn out_of_range_tps_is_ignored() {
        for raw in ["1e-300", "0.5", "10000.5", "1e300"] {
            assert_eq!(config(&[(TPS_VAR, raw)]).tps, None, "value {:?}", raw);
        }
    }

    #[test]
    fn tps_range_bounds_are_accepted() {
        assert_eq!(config(&[(TPS_VAR, "1")]).tps, Some(1.0));
        assert_eq!(config(&[(TPS_VAR, "10000")]).tps, Some(10_000.0));
    }
}
