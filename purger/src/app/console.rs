//! Standalone console reporter
//!
//! Progress goes through `tracing` on stderr; the verdict is printed once,
//! coloured, on stdout (success) or stderr (failure).

use std::io::Write;
use std::sync::Mutex;

use colored::Colorize;
use tracing::{error, info};

use crate::errors::PurgeError;
use crate::purge::reporter::{success_message, Reporter};

/// Reports progress through `tracing` and prints the verdict directly
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }
}

impl ConsoleReporter {
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }
}

fn print_line(target: &Mutex<Box<dyn Write + Send>>, line: &str) {
    if let Ok(mut target) = target.lock() {
        let _ = writeln!(target, "{}", line);
        let _ = target.flush();
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn success(&self, deleted_ids: &[String]) {
        print_line(&self.out, &success_message(deleted_ids).green().to_string());
    }

    fn fail(&self, err: &PurgeError) {
        print_line(&self.err, &format!("{} {}", "error:".red().bold(), err));
    }
}
