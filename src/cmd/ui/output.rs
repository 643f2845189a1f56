//! Result rendering for the classifier binary.
//!
//! Three modes, selected by [`OutputFormat`]:
//! - Human: colored label followed by the derived quantities
//! - Json: one JSON object per result or error
//! - Quiet: the bare label
//!
//! The writer can be swapped out for test capture.

use colored::{Color, Colorize};
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use parcel_sort::config::OutputFormat;
use parcel_sort::{
    Category, Package, SortError, BULKY_DIMENSION_THRESHOLD_CM, BULKY_VOLUME_THRESHOLD_CM3,
    HEAVY_MASS_THRESHOLD_KG,
};

/// Mode-aware writer for classification output
#[derive(Clone)]
pub struct Output {
    format: OutputFormat,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    color: bool,
}

impl Output {
    /// Create an Output writing to stdout
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self {
            format,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            color,
        }
    }

    /// Create an Output with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(format: OutputFormat, writer: Box<dyn Write + Send>) -> Self {
        Self {
            format,
            writer: Arc::new(Mutex::new(writer)),
            color: false,
        }
    }

    /// Print the category assigned to a package
    pub fn classification(&self, package: &Package, category: Category) {
        match self.format {
            OutputFormat::Human => {
                self.write_line(&self.paint(category.as_str(), category_color(category)));
                self.write_line(&format!("  {:<18} {}", "volume:", package.volume()));
                self.write_line(&format!(
                    "  {:<18} {}",
                    "largest dimension:",
                    package.largest_dimension()
                ));
                self.write_line(&format!("  {:<18} {}", "bulky:", yes_no(package.is_bulky())));
                self.write_line(&format!("  {:<18} {}", "heavy:", yes_no(package.is_heavy())));
            }
            OutputFormat::Json => {
                self.json(&json!({
                    "category": category,
                    "volume": package.volume(),
                    "largest_dimension": package.largest_dimension(),
                    "bulky": package.is_bulky(),
                    "heavy": package.is_heavy(),
                }));
            }
            OutputFormat::Quiet => {
                self.write_line(category.as_str());
            }
        }
    }

    /// Print a classification error.
    ///
    /// Only JSON mode writes here; human and quiet modes leave error
    /// reporting to stderr.
    pub fn sort_error(&self, err: &SortError) {
        if self.format == OutputFormat::Json {
            self.json(&json!({
                "error": err.to_string(),
                "kind": err.kind(),
                "fields": err.fields(),
            }));
        }
    }

    /// Print the fixed thresholds
    pub fn thresholds(&self) {
        match self.format {
            OutputFormat::Human | OutputFormat::Quiet => {
                self.write_line(&format!(
                    "{:<20} {} cm³",
                    "bulky volume:", BULKY_VOLUME_THRESHOLD_CM3
                ));
                self.write_line(&format!(
                    "{:<20} {} cm",
                    "bulky dimension:", BULKY_DIMENSION_THRESHOLD_CM
                ));
                self.write_line(&format!(
                    "{:<20} {} kg",
                    "heavy mass:", HEAVY_MASS_THRESHOLD_KG
                ));
            }
            OutputFormat::Json => {
                self.json(&json!({
                    "bulky_volume_cm3": BULKY_VOLUME_THRESHOLD_CM3,
                    "bulky_dimension_cm": BULKY_DIMENSION_THRESHOLD_CM,
                    "heavy_mass_kg": HEAVY_MASS_THRESHOLD_KG,
                }));
            }
        }
    }

    /// Output a structured JSON value
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Standard => Color::Green,
        Category::Special => Color::Yellow,
        Category::Rejected => Color::Red,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
