//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for messages shown only with `--verbose`
//! - `ProgressLine` for a single-line counter while collections load
//!
//! # Example
//!
//! ```ignore
//! log!("css"; "wrote {} rules", count);
//!
//! let progress = ProgressLine::new("icons", 3);
//! progress.inc();
//! progress.finish();
//! ```
//!
//! Log lines go to stderr so that JSON and CSS written to stdout stay clean.

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream};
use parking_lot::Mutex;
use std::{
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Whether a progress line currently owns the last terminal line.
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut out = stderr().lock();

    // Push an active progress line below the message
    if PROGRESS_ACTIVE.load(Ordering::SeqCst) {
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
    }

    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let styled = |paint: fn(&String) -> String| {
        prefix
            .if_supports_color(Stream::Stderr, |p| paint(p))
            .to_string()
    };
    match module_lower {
        "icons" => styled(|p| p.bright_blue().bold().to_string()),
        "css" => styled(|p| p.bright_green().bold().to_string()),
        "error" => styled(|p| p.bright_red().bold().to_string()),
        "warning" => styled(|p| p.yellow().bold().to_string()),
        _ => styled(|p| p.bright_yellow().bold().to_string()),
    }
}

// ============================================================================
// Progress Line (single-line counter)
// ============================================================================

/// Single-line progress display
///
/// Displays: `[icons] loading(2/5)`
///
/// Updates in place on a terminal; otherwise only the final line is
/// written. Uses `try_lock` so concurrent loaders never block on the
/// terminal; a skipped refresh is picked up by the next one.
pub struct ProgressLine {
    module: &'static str,
    total: usize,
    current: AtomicUsize,
    lock: Mutex<()>,
    interactive: bool,
}

impl ProgressLine {
    /// Create a progress display for `total` units of work.
    pub fn new(module: &'static str, total: usize) -> Self {
        PROGRESS_ACTIVE.store(true, Ordering::SeqCst);
        let progress = Self {
            module,
            total,
            current: AtomicUsize::new(0),
            lock: Mutex::new(()),
            interactive: stderr().is_terminal(),
        };
        progress.display();
        progress
    }

    /// Count one finished unit.
    #[inline]
    pub fn inc(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
        if self.lock.try_lock().is_some() {
            self.display();
        }
    }

    fn line(&self) -> String {
        let current = self.current.load(Ordering::Relaxed);
        let prefix = colorize_prefix(self.module, &self.module.to_ascii_lowercase());
        format!("{prefix} loading({current}/{})", self.total)
    }

    /// Write the current line to `out`, clearing it first on a terminal.
    fn render(&self, out: &mut impl Write, newline: bool) {
        if self.interactive {
            execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        }
        write!(out, "{}", self.line()).ok();
        if newline {
            writeln!(out).ok();
        }
        out.flush().ok();
    }

    /// Redraw the progress line (no newline, stays on the same line).
    fn display(&self) {
        if self.interactive {
            self.render(&mut stderr().lock(), false);
        }
    }

    /// Finish progress display, keep the final line.
    pub fn finish(self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
        {
            let _guard = self.lock.lock();
            self.render(&mut stderr().lock(), true);
        }
        std::mem::forget(self);
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);

        if self.interactive {
            let mut out = stderr().lock();
            execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
            out.flush().ok();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
