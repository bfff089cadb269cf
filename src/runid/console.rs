// console.rs - Interactive run identifier prompt

use super::traits::RunIdSource;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Asks the operator for each file's run identifier, one line per file
pub struct ConsoleRunIdSource<R, W> {
    input: R,
    output: W,
}

impl ConsoleRunIdSource<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleRunIdSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the prompt writer (used by tests to inspect the transcript)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W> fmt::Debug for ConsoleRunIdSource<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleRunIdSource").finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> RunIdSource for ConsoleRunIdSource<R, W> {
    fn run_id_for(&mut self, file_path: &Path) -> Result<String, String> {
        writeln!(
            self.output,
            "RunID needed for the following file: {}",
            file_path.display()
        )
        .map_err(|e| format!("Write error: {}", e))?;
        write!(self.output, "please provide runid: ").map_err(|e| format!("Write error: {}", e))?;
        self.output.flush().map_err(|e| format!("Flush error: {}", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read run ID: {}", e))?;
        if read == 0 {
            return Err(format!(
                "Input closed before a run ID was entered for '{}'",
                file_path.display()
            ));
        }

        // Only the line terminator is removed; surrounding spaces are kept
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
