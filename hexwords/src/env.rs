use std::{io, path::PathBuf};

use tracing::{debug, warn};

/// Outcome of looking for a local `.env`.
pub type DotenvOutcome = Result<Option<PathBuf>, dotenvy::Error>;

/// Load variables from a local `.env`, if there is one.
///
/// IO errors are taken to mean there is no file. Variables already set in the
/// environment win over the file. This runs before logging is set up so the
/// file can supply `RUST_LOG`; pass the result to [`report`] afterwards.
pub fn load_dotenvy_vars_if_present() -> DotenvOutcome {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(io::Error { .. })) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Log what [`load_dotenvy_vars_if_present`] found.
pub fn report(outcome: DotenvOutcome) {
    match outcome {
        Ok(Some(path)) => debug!("Loaded environment from {}", path.display()),
        Ok(None) => (),
        Err(e) => warn!("Found local `.env` file but was unable to parse it! (err: {e})"),
    }
}
