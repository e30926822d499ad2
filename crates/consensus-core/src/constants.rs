/// Consensus engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Marker that introduces the final answer in a completion.
pub const ANSWER_MARKER: &str = "answer is";

/// Number of top-ranked answers kept before the stochastic draw.
pub const STOCHASTIC_CANDIDATES: usize = 1;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CONSENSUS_LOG";

/// Project config file name.
pub const CONFIG_FILENAME: &str = "consensus.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_tracks_the_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(VERSION.split('.').all(|part| part.parse::<u32>().is_ok()));
    }
}
