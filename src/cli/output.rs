//! Colored terminal output for bundling operations
//!
//! Provides consistent, colored CLI output with proper formatting

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        let _ = write!(&mut buffer, "✓");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {}", message);
        self.bufwtr.print(&buffer)
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
        let _ = write!(&mut buffer, "⚠");
        let _ = buffer.reset();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(&mut buffer, " {}", message);
        let _ = buffer.reset();
        self.bufwtr.print(&buffer)
    }

    /// Print a verbose/debug message (only in verbose mode)
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Blue)));
        let _ = write!(&mut buffer, "→");
        let _ = buffer.reset();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::White)));
        let _ = writeln!(&mut buffer, " {}", message);
        let _ = buffer.reset();
        self.bufwtr.print(&buffer)
    }

    /// Print a progress message with spinner/activity indicator
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)));
        let _ = write!(&mut buffer, "⋯");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {}", message);
        self.bufwtr.print(&buffer)
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "    {}", message);
        self.bufwtr.print(&buffer)
    }
}
