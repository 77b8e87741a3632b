use serde::{Deserialize, Serialize};

/// Marker side used when neither layout nor config supply a usable size.
pub const DEFAULT_MARKER_SIZE: f32 = 160.0;

/// Tuning knobs for the motion engine, provided by the host page.
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side of the marker square used when the rendered size is unreadable (default: 160).
    pub default_marker_size: f32,
    /// Per-frame speed of the smallest markers (default: 0.3).
    pub base_speed: f32,
    /// Fraction of `base_speed` shed by the largest markers (default: 0.5).
    pub size_slowdown: f32,
    /// Marker size at which the full slowdown applies (default: 200).
    pub slowdown_reference_size: f32,
    /// Quiet period before a window resize is handled, in milliseconds (default: 250).
    pub resize_debounce_ms: f64,
    /// Seed for initial headings. `None` lets the host pick one.
    pub seed: Option<u64>,
    /// Selector for the bounding container element.
    pub container_selector: String,
    /// Selector for marker elements inside the container.
    pub marker_selector: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_marker_size: DEFAULT_MARKER_SIZE,
            base_speed: 0.3,
            size_slowdown: 0.5,
            slowdown_reference_size: 200.0,
            resize_debounce_ms: 250.0,
            seed: None,
            container_selector: ".join-hero-visual".to_string(),
            marker_selector: ".join-orbit".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Size substituted for unreadable marker dimensions.
    /// A non-positive or non-finite `default_marker_size` falls back to 160.
    pub fn fallback_marker_size(&self) -> f32 {
        if self.default_marker_size.is_finite() && self.default_marker_size > 0.0 {
            self.default_marker_size
        } else {
            DEFAULT_MARKER_SIZE
        }
    }

    /// Per-frame speed for a marker of the given size.
    /// Larger markers move slower, never below `base_speed * (1 - size_slowdown)`.
    pub fn speed_for_size(&self, size: f32) -> f32 {
        let ratio = if self.slowdown_reference_size > 0.0 {
            (size / self.slowdown_reference_size).min(1.0)
        } else {
            1.0
        };
        self.base_speed * (1.0 - self.size_slowdown * ratio)
    }
}
