//! Line-oriented terminal I/O used by the interactive front end.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

use common::{AppError, AppResult};

/// Reads user input and shows output, one line at a time.
#[async_trait]
pub trait Console: Send {
    /// Show `prompt` and read one line. `None` means input is closed.
    async fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>>;

    /// Print one line
    async fn print(&mut self, line: &str) -> AppResult<()>;
}

/// Console over the process's stdin and stdout.
pub struct StdConsole {
    input: Lines<BufReader<Stdin>>,
    output: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()).lines(),
            output: tokio::io::stdout(),
        }
    }

    async fn write(&mut self, text: &str) -> AppResult<()> {
        self.output
            .write_all(text.as_bytes())
            .await
            .map_err(|e| AppError::internal(format!("Failed to write to stdout: {}", e)))?;
        self.output
            .flush()
            .await
            .map_err(|e| AppError::internal(format!("Failed to flush stdout: {}", e)))
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdConsole {
    async fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        self.write(&format!("{}: ", prompt)).await?;
        self.input
            .next_line()
            .await
            .map_err(|e| AppError::internal(format!("Failed to read from stdin: {}", e)))
    }

    async fn print(&mut self, line: &str) -> AppResult<()> {
        self.write(&format!("{}\n", line)).await
    }
}
