//! Line input from the terminal

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Async line reader over stdin, shared by the setup prompt and the run loop
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print a prompt and wait for the next line. Returns None on EOF.
    pub async fn readline(&mut self, prompt: &str) -> Result<Option<String>, String> {
        print!("{prompt}");
        std::io::stdout().flush().map_err(|e| e.to_string())?;
        self.next_line().await
    }

    /// Next line without a prompt. Returns None on EOF.
    pub async fn next_line(&mut self) -> Result<Option<String>, String> {
        self.lines.next_line().await.map_err(|e| e.to_string())
    }
}
