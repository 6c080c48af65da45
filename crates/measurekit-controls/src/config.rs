//! Control configuration.
//!
//! Accepted once at control construction; there is no file-based
//! configuration. Every field has a documented default.

use std::fmt;

use measurekit_core::{default_label_format, DistanceUnit};

/// Custom distance-label formatter supplied by the host.
pub type LabelFormatter = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Configuration shared by both measurement controls.
pub struct ControlConfig {
    /// Unit for geodesic distances. Default: kilometers.
    pub unit: DistanceUnit,
    /// Font identifiers for label rendering, passed through to the host
    /// as-is. Default: `["Roboto Medium"]`.
    pub label_fonts: Vec<String>,
    /// Primary draw color. Default: `#263238`.
    pub main_color: String,
    /// Secondary (halo/fill) color. Default: `#fff`.
    pub secondary_color: String,
    /// Label text color. Default: `#263238`.
    pub text_color: String,
    /// Optional custom label formatter. When absent, the built-in
    /// kilometer-convention formatter is used; hosts selecting a
    /// non-kilometer unit should supply their own.
    label_format: Option<LabelFormatter>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            label_fonts: vec!["Roboto Medium".to_string()],
            main_color: "#263238".to_string(),
            secondary_color: "#fff".to_string(),
            text_color: "#263238".to_string(),
            label_format: None,
        }
    }
}

impl fmt::Debug for ControlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlConfig")
            .field("unit", &self.unit)
            .field("label_fonts", &self.label_fonts)
            .field("main_color", &self.main_color)
            .field("secondary_color", &self.secondary_color)
            .field("text_color", &self.text_color)
            .field("label_format", &self.label_format.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

impl ControlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats a distance value with the configured formatter.
    pub fn format_label(&self, value: f64) -> String {
        match &self.label_format {
            Some(format) => format(value),
            None => default_label_format(value),
        }
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_label_fonts(mut self, fonts: Vec<String>) -> Self {
        self.label_fonts = fonts;
        self
    }

    pub fn with_colors(
        mut self,
        main: impl Into<String>,
        secondary: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.main_color = main.into();
        self.secondary_color = secondary.into();
        self.text_color = text.into();
        self
    }

    pub fn with_label_format<F>(mut self, format: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.label_format = Some(Box::new(format));
        self
    }
}
