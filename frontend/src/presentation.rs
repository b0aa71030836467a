//! Display helpers shared by the components.
//!
//! Everything here is a pure function of its inputs so the rendering
//! rules can be checked without a browser.

use chrono::{DateTime, NaiveDateTime};

use crate::types::{BoundingBox, ImageExtraction};

// =============================================================================
// Results filter
// =============================================================================

/// Three-way filter of the results grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultFilter {
    #[default]
    All,
    /// Everything that is not a plain image
    Charts,
    Images,
}

impl ResultFilter {
    pub const ALL: [ResultFilter; 3] = [ResultFilter::All, ResultFilter::Charts, ResultFilter::Images];

    pub fn matches(self, extraction: &ImageExtraction) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Charts => extraction.kind.is_chart(),
            ResultFilter::Images => !extraction.kind.is_chart(),
        }
    }

    /// Keep the matching extractions, in input order.
    pub fn apply(self, extractions: &[ImageExtraction]) -> Vec<ImageExtraction> {
        extractions
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    pub fn count(self, extractions: &[ImageExtraction]) -> usize {
        extractions.iter().filter(|e| self.matches(e)).count()
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultFilter::All => "All",
            ResultFilter::Charts => "Charts",
            ResultFilter::Images => "Images",
        }
    }
}

// =============================================================================
// Trend icon
// =============================================================================

/// Icon category of a free-text trend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendIcon {
    Up,
    Down,
    Neutral,
}

impl TrendIcon {
    /// Case-insensitive substring match: "increas"/"up" first, then
    /// "decreas"/"down", neutral for anything else.
    pub fn from_trend(trend: Option<&str>) -> Self {
        let Some(trend) = trend else {
            return TrendIcon::Neutral;
        };
        let trend = trend.to_lowercase();
        if trend.contains("increas") || trend.contains("up") {
            TrendIcon::Up
        } else if trend.contains("decreas") || trend.contains("down") {
            TrendIcon::Down
        } else {
            TrendIcon::Neutral
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            TrendIcon::Up => "↗",
            TrendIcon::Down => "↘",
            TrendIcon::Neutral => "→",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TrendIcon::Up => "trend-up",
            TrendIcon::Down => "trend-down",
            TrendIcon::Neutral => "trend-neutral",
        }
    }
}

// =============================================================================
// Progress checklist
// =============================================================================

/// Steps of the server pipeline, keyed on the progress value it reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessingStage {
    Uploaded,
    Extracting,
    Analyzing,
    Saving,
}

/// How far a stage got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageState {
    Pending,
    Active,
    Done,
}

impl ProcessingStage {
    pub const ALL: [ProcessingStage; 4] = [
        ProcessingStage::Uploaded,
        ProcessingStage::Extracting,
        ProcessingStage::Analyzing,
        ProcessingStage::Saving,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProcessingStage::Uploaded => "File uploaded",
            ProcessingStage::Extracting => "Extracting pages and images",
            ProcessingStage::Analyzing => "Detecting and analysing charts",
            ProcessingStage::Saving => "Saving results",
        }
    }

    /// Progress at which the server enters this stage.
    fn starts_at(self) -> u8 {
        match self {
            ProcessingStage::Uploaded => 0,
            ProcessingStage::Extracting => 10,
            ProcessingStage::Analyzing => 30,
            ProcessingStage::Saving => 90,
        }
    }

    fn ends_at(self) -> u8 {
        match self {
            ProcessingStage::Uploaded => 10,
            ProcessingStage::Extracting => 30,
            ProcessingStage::Analyzing => 90,
            ProcessingStage::Saving => 100,
        }
    }

    pub fn state(self, progress: u8) -> StageState {
        if progress >= self.ends_at() {
            StageState::Done
        } else if progress >= self.starts_at() {
            StageState::Active
        } else {
            StageState::Pending
        }
    }
}

impl StageState {
    pub fn glyph(self) -> &'static str {
        match self {
            StageState::Pending => "○",
            StageState::Active => "◐",
            StageState::Done => "✓",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StageState::Pending => "stage-pending",
            StageState::Active => "stage-active",
            StageState::Done => "stage-done",
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Human readable byte count ("512 B", "1.5 KB", "4.2 MB").
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let size = bytes as f64;
    if size < KB {
        format!("{} B", bytes)
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{:.1} MB", size / MB)
    }
}

/// Render a server timestamp; unknown formats are shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// Whole numbers without decimals, others with at most two.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.2}", value);
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Size and origin of an element on its page, e.g. "300 × 200 at (10, 20.5)".
pub fn format_region(bbox: &BoundingBox) -> String {
    format!(
        "{} × {} at ({}, {})",
        format_value(bbox.width()),
        format_value(bbox.height()),
        format_value(bbox.x0.min(bbox.x1)),
        format_value(bbox.y0.min(bbox.y1)),
    )
}

/// Confidence score as a percentage.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.0}%", (confidence * 100.0).clamp(0.0, 100.0))
}
