//! # Slider Configuration
//!
//! Three ways in, one way out:
//!
//! - builder methods on [`SliderConfig`] (code),
//! - a TOML file with a `[defaults]` table ([`SliderConfig::load`]),
//! - `data-*` attributes on a host element ([`SliderConfig::from_attributes`]).
//!
//! Every path ends in [`SliderConfig::sanitized`]: bad numbers fall back to
//! defaults with a warning, they never reach the widget.
//!
//! ```toml
//! [defaults]
//! min_value = 0
//! max_value = 10000
//! step = 1
//! from_label = "FROM"
//! to_label = "TO"
//! show_labels = true
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::scale::ValueScale;
use crate::widget::RangeValues;

/// Default lower domain bound.
pub const DEFAULT_DOMAIN_MIN: f64 = 0.0;
/// Default upper domain bound.
pub const DEFAULT_DOMAIN_MAX: f64 = 10_000.0;
/// Default quantization step.
pub const DEFAULT_STEP: f64 = 1.0;
/// Default caption of the lower value.
pub const DEFAULT_FROM_LABEL: &str = "FROM";
/// Default caption of the upper value.
pub const DEFAULT_TO_LABEL: &str = "TO";

/// Attribute names read by [`SliderConfig::from_attributes`].
pub mod attr {
    /// Lower domain bound.
    pub const MIN: &str = "data-min";
    /// Upper domain bound.
    pub const MAX: &str = "data-max";
    /// Step.
    pub const STEP: &str = "data-step";
    /// Caption of the lower value.
    pub const FROM_LABEL: &str = "data-from-label";
    /// Caption of the upper value.
    pub const TO_LABEL: &str = "data-to-label";
    /// `true` / `false`.
    pub const SHOW_LABELS: &str = "data-show-labels";
    /// Initially selected lower value.
    pub const INITIAL_MIN: &str = "data-initial-min";
    /// Initially selected upper value.
    pub const INITIAL_MAX: &str = "data-initial-max";
    /// Name of the bound lower field.
    pub const MIN_FIELD: &str = "data-min-field";
    /// Name of the bound upper field.
    pub const MAX_FIELD: &str = "data-max-field";
}

/// Immutable slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Lower domain bound.
    #[serde(rename = "min_value")]
    pub domain_min: f64,
    /// Upper domain bound.
    #[serde(rename = "max_value")]
    pub domain_max: f64,
    /// Quantization step, counted from `domain_min`.
    pub step: f64,
    /// Caption shown under the lower value.
    pub from_label: String,
    /// Caption shown under the upper value.
    pub to_label: String,
    /// Whether the value/caption row is shown.
    pub show_labels: bool,
    /// Name of the form field receiving the lower value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_field_name: Option<String>,
    /// Name of the form field receiving the upper value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_field_name: Option<String>,
    /// Initial selection; the full domain when absent.
    #[serde(skip)]
    pub initial: Option<RangeValues>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            domain_min: DEFAULT_DOMAIN_MIN,
            domain_max: DEFAULT_DOMAIN_MAX,
            step: DEFAULT_STEP,
            from_label: DEFAULT_FROM_LABEL.to_string(),
            to_label: DEFAULT_TO_LABEL.to_string(),
            show_labels: true,
            min_field_name: None,
            max_field_name: None,
            initial: None,
        }
    }
}

/// On-disk layout: the slider keys live under `[defaults]`, other tables
/// are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    defaults: SliderConfig,
}

impl SliderConfig {
    /// Sets the domain.
    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Sets the step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets both captions.
    #[must_use]
    pub fn with_labels(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_label = from.into();
        self.to_label = to.into();
        self
    }

    /// Shows or hides the label row.
    #[must_use]
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Sets the bound field names.
    #[must_use]
    pub fn with_field_names(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min_field_name = Some(min.into());
        self.max_field_name = Some(max.into());
        self
    }

    /// Sets the initial selection.
    #[must_use]
    pub fn with_initial(mut self, min: f64, max: f64) -> Self {
        self.initial = Some(RangeValues::new(min, max));
        self
    }

    /// Parses the `[defaults]` table of a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or a key
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(file.defaults.sanitized())
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds a configuration from `data-*` attributes.
    ///
    /// Missing or non-numeric values keep their defaults.
    #[must_use]
    pub fn from_attributes(attrs: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();

        if let Some(min) = number_attr(attrs, attr::MIN) {
            config.domain_min = min;
        }
        if let Some(max) = number_attr(attrs, attr::MAX) {
            config.domain_max = max;
        }
        if let Some(step) = number_attr(attrs, attr::STEP) {
            config.step = step;
        }
        if let Some(label) = text_attr(attrs, attr::FROM_LABEL) {
            config.from_label = label.to_string();
        }
        if let Some(label) = text_attr(attrs, attr::TO_LABEL) {
            config.to_label = label.to_string();
        }
        if let Some(show) = text_attr(attrs, attr::SHOW_LABELS) {
            match show {
                "true" | "1" => config.show_labels = true,
                "false" | "0" => config.show_labels = false,
                other => warn!(attribute = attr::SHOW_LABELS, value = other, "ignoring non-boolean attribute"),
            }
        }
        if let Some(name) = text_attr(attrs, attr::MIN_FIELD) {
            config.min_field_name = Some(name.to_string());
        }
        if let Some(name) = text_attr(attrs, attr::MAX_FIELD) {
            config.max_field_name = Some(name.to_string());
        }

        let initial_min = number_attr(attrs, attr::INITIAL_MIN);
        let initial_max = number_attr(attrs, attr::INITIAL_MAX);
        if initial_min.is_some() || initial_max.is_some() {
            config.initial = Some(RangeValues::new(
                initial_min.unwrap_or(config.domain_min),
                initial_max.unwrap_or(config.domain_max),
            ));
        }

        config.sanitized()
    }

    /// Repairs the numeric fields so the slider invariants can hold.
    ///
    /// - non-finite bounds fall back to the defaults
    /// - a span that overflows `f64` resets both bounds to the defaults
    /// - `domain_min >= domain_max` resets both bounds to the defaults
    /// - a non-positive or non-finite step becomes 1 (or the span if smaller)
    /// - a step wider than the domain shrinks to the domain
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if !self.domain_min.is_finite() {
            warn!(value = self.domain_min, "non-finite domain min, using default");
            self.domain_min = DEFAULT_DOMAIN_MIN;
        }
        if !self.domain_max.is_finite() {
            warn!(value = self.domain_max, "non-finite domain max, using default");
            self.domain_max = DEFAULT_DOMAIN_MAX;
        }
        if !(self.domain_max - self.domain_min).is_finite() {
            warn!(
                min = self.domain_min,
                max = self.domain_max,
                "domain span overflows, using defaults"
            );
            self.domain_min = DEFAULT_DOMAIN_MIN;
            self.domain_max = DEFAULT_DOMAIN_MAX;
        }
        if self.domain_min >= self.domain_max {
            warn!(
                min = self.domain_min,
                max = self.domain_max,
                "empty or inverted domain, using defaults"
            );
            self.domain_min = DEFAULT_DOMAIN_MIN;
            self.domain_max = DEFAULT_DOMAIN_MAX;
        }

        let span = self.domain_max - self.domain_min;
        if !(self.step.is_finite() && self.step > 0.0) {
            warn!(value = self.step, "step must be positive, using default");
            self.step = DEFAULT_STEP.min(span);
        }
        if self.step > span {
            warn!(step = self.step, span, "step wider than domain, clamping");
            self.step = span;
        }

        self
    }

    /// Returns the value scale for this configuration.
    #[must_use]
    pub fn scale(&self) -> ValueScale {
        ValueScale::new(self.domain_min, self.domain_max, self.step)
    }
}

fn text_attr<'a>(attrs: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    attrs.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn number_attr(attrs: &BTreeMap<String, String>, key: &str) -> Option<f64> {
    let raw = text_attr(attrs, key)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!(attribute = key, value = raw, "ignoring non-numeric attribute");
            None
        }
    }
}
