use std::{
    ffi::OsString,
    process::{Command, ExitStatus, Stdio},
};

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("couldn't exec `{cmd}`")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{cmd}` failed with {status}")]
    Failed { cmd: String, status: ExitStatus },
}

/// A means of running a command as a subprocess.
///
/// The child's stdout is captured and logged rather than passed through, so
/// it never interleaves with what this process prints.
pub struct Runner {
    cmd: String,
    args: Vec<OsString>,
}

impl Runner {
    /// Create a new runner with the given command.
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            args: vec![],
        }
    }

    /// Add arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command to completion.
    pub fn run(self) -> Result<(), RunError> {
        debug!(cmd = %self.cmd, args = ?self.args, "running");
        let output = Command::new(&self.cmd)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| RunError::Spawn {
                cmd: self.cmd.clone(),
                source,
            })?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            info!(target: "hexwords::runner", "{}: {line}", self.cmd);
        }

        if !output.status.success() {
            return Err(RunError::Failed {
                cmd: self.cmd,
                status: output.status,
            });
        }
        Ok(())
    }
}
