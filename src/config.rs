//! In-memory configuration for the list and carousel widgets.
//!
//! Both widgets are configured by plain property assignment. These structs
//! bundle the initial values so hosts can keep them in a settings file and
//! build widgets from them.
//!
//! # Example
//!
//! ```ignore
//! use swipekit::config::{CarouselConfig, IndicatorPosition};
//!
//! let config = CarouselConfig::default()
//!     .with_infinite(true)
//!     .with_auto_scroll_interval(3)
//!     .with_indicator_position(IndicatorPosition::Right);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KitError, KitResult};

/// Default autoplay interval in seconds.
pub const DEFAULT_AUTO_SCROLL_INTERVAL_SECS: i64 = 2;

/// Default duration of an animated page change in milliseconds.
pub const DEFAULT_ANIMATION_MILLIS: u64 = 300;

/// Where the carousel's page indicator sits along the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorPosition {
    Left,
    #[default]
    Center,
    Right,
}

/// Carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Pad the strip with edge clones so paging wraps around
    pub infinite: bool,
    /// Autoplay period in seconds; `<= 0` disables autoplay
    pub auto_scroll_interval_secs: i64,
    /// Page indicator placement
    pub indicator_position: IndicatorPosition,
    /// Duration of animated page changes
    pub animation_millis: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            infinite: true,
            auto_scroll_interval_secs: DEFAULT_AUTO_SCROLL_INTERVAL_SECS,
            indicator_position: IndicatorPosition::Center,
            animation_millis: DEFAULT_ANIMATION_MILLIS,
        }
    }
}

impl CarouselConfig {
    /// Create a new CarouselConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether paging wraps around.
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Set the autoplay interval in seconds.
    pub fn with_auto_scroll_interval(mut self, secs: i64) -> Self {
        self.auto_scroll_interval_secs = secs;
        self
    }

    /// Set the page indicator placement.
    pub fn with_indicator_position(mut self, position: IndicatorPosition) -> Self {
        self.indicator_position = position;
        self
    }

    /// Set the animated page change duration.
    pub fn with_animation_millis(mut self, millis: u64) -> Self {
        self.animation_millis = millis;
        self
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> KitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> KitResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| KitError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// List settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Height of every row in terminal lines
    pub row_height: u16,
    /// Attach the pull-to-refresh header
    pub header_refresh: bool,
    /// Attach the pull-to-load-more footer
    pub footer_load_more: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            row_height: 1,
            header_refresh: false,
            footer_load_more: false,
        }
    }
}

impl ListConfig {
    /// Create a new ListConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uniform row height (clamped to at least one line).
    pub fn with_row_height(mut self, height: u16) -> Self {
        self.row_height = height.max(1);
        self
    }

    /// Set whether the refresh header is attached.
    pub fn with_header_refresh(mut self, enabled: bool) -> Self {
        self.header_refresh = enabled;
        self
    }

    /// Set whether the load-more footer is attached.
    pub fn with_footer_load_more(mut self, enabled: bool) -> Self {
        self.footer_load_more = enabled;
        self
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> KitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> KitResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| KitError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
