use crate::ports::outbound::PresentationSink;
use crate::product_scanning::domain::{ProductLookupResult, ScanEvent};
use crate::shared::error::LookupError;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;
use tracing::warn;

/// ConsolePresenter adapter rendering scan events and lookup outcomes as text lines
///
/// This adapter implements the PresentationSink port. Writes are serialized
/// through a mutex because lookups complete on arbitrary worker threads.
pub struct ConsolePresenter<W: Write + Send> {
    out: Mutex<W>,
    colored: bool,
}

impl ConsolePresenter<io::Stdout> {
    /// Presenter on stdout, colored when stdout is a terminal
    pub fn stdout() -> Self {
        let colored = io::stdout().is_terminal();
        Self::new(io::stdout(), colored)
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self {
            out: Mutex::new(out),
            colored,
        }
    }

    /// Consumes the presenter and returns the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!(error = %e, "failed to write to console");
        }
    }

    fn grade_label(&self, grade: &str) -> String {
        if !self.colored {
            return grade.to_string();
        }
        match grade.to_ascii_lowercase().as_str() {
            "a" => grade.green().bold().to_string(),
            "b" => grade.bright_green().bold().to_string(),
            "c" => grade.yellow().bold().to_string(),
            "d" => grade.bright_red().bold().to_string(),
            "e" => grade.red().bold().to_string(),
            _ => grade.dimmed().to_string(),
        }
    }
}

impl<W: Write + Send> PresentationSink for ConsolePresenter<W> {
    fn on_scan(&self, event: &ScanEvent) {
        self.write_line(&format!(
            "📷 Scanned barcode: {} ({} UTC)",
            event.barcode(),
            event.scanned_at().format("%H:%M:%S")
        ));
    }

    fn on_result(&self, event: &ScanEvent, result: &ProductLookupResult) {
        let line = if result.is_found() {
            format!(
                "✅ {}: {} | Nutri-Score: {}",
                event.barcode(),
                result.product_name().unwrap_or_default(),
                self.grade_label(result.nutrition_grade().unwrap_or_default())
            )
        } else if result.status_message().is_empty() {
            format!("❓ {}: Product not found", event.barcode())
        } else {
            format!(
                "❓ {}: Product not found ({})",
                event.barcode(),
                result.status_message()
            )
        };
        self.write_line(&line);
    }

    fn on_error(&self, event: &ScanEvent, error: &LookupError) {
        let message = format!("⚠️  {}: lookup failed ({})", event.barcode(), error.kind());
        let detail = error.to_string();
        if self.colored {
            self.write_line(&message.yellow().to_string());
        } else {
            self.write_line(&message);
        }
        for line in detail.lines().filter(|l| !l.is_empty()) {
            self.write_line(&format!("   {}", line));
        }
    }
}
