//! Running the external analyzers

use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// What an analyzer run left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit status was zero
    pub success: bool,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Stdout worth parsing, even from a failed run
    pub fn captured_stdout(&self) -> Option<&str> {
        if self.success || !self.stdout.is_empty() {
            Some(&self.stdout)
        } else {
            None
        }
    }
}

/// Runs an analyzer to completion and captures its output
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ToolOutput>;
}

/// Runs analyzers as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ToolOutput> {
        debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program).args(args).current_dir(cwd).output()?;

        debug!("{} exited with {}", program, output.status);

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
