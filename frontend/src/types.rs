//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Task Types** - Processing task snapshots returned by polling
//! - **Extraction Types** - Extracted visual elements and their analysis
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling
//!
//! Payloads are not validated: every field that the service may omit has a
//! serde default, so a partial result still renders (with placeholders).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Task Types
// =============================================================================

/// Message of the snapshot synthesized when the status endpoint is unreachable.
pub const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to server";

/// Message of the snapshot synthesized when the server answers with a body
/// that is not a status at all.
pub const UNREADABLE_STATUS_MESSAGE: &str = "Unrecognized response from server";

/// Lifecycle status of a processing task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Server is still working on the document.
    Processing,
    /// Done, a result payload is attached.
    Completed,
    /// Server gave up, the message says why.
    Failed,
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TaskStatus::Processing)
    }
}

/// One snapshot of a processing task, as returned by the status endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessingTask {
    /// Not part of the status payload; filled in by the API client.
    #[serde(default, deserialize_with = "null_default")]
    pub task_id: String,
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "clamped_progress")]
    pub progress: u8,
    #[serde(default, deserialize_with = "null_default")]
    pub message: String,
    #[serde(default)]
    pub result: Option<ExtractionResult>,
}

impl ProcessingTask {
    /// Snapshot shown between a successful upload and the first poll.
    pub fn pending(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            status: TaskStatus::Processing,
            progress: 0,
            message: "Upload received, waiting for the server...".to_string(),
            result: None,
        }
    }

    /// Terminal snapshot used when the status endpoint cannot be reached.
    pub fn connection_failed(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            status: TaskStatus::Failed,
            progress: 0,
            message: CONNECTION_FAILED_MESSAGE.to_string(),
            result: None,
        }
    }

    /// Terminal snapshot used when the status payload cannot be read.
    pub fn unreadable(task_id: impl Into<String>) -> Self {
        Self {
            message: UNREADABLE_STATUS_MESSAGE.to_string(),
            ..Self::connection_failed(task_id)
        }
    }

    /// Snapshot reported in place of a failed status fetch.
    pub fn from_fetch_error(task_id: impl Into<String>, err: &AppError) -> Self {
        match err {
            AppError::Decode(_) => Self::unreadable(task_id),
            _ => Self::connection_failed(task_id),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

fn clamped_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    // Truncation is fine: the value is clamped to 0..=100 first.
    Ok(raw.clamp(0.0, 100.0) as u8)
}

/// `#[serde(default)]` only covers missing keys; this also maps `null`.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Extraction Types
// =============================================================================

/// Complete result of one processed document (or standalone image).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Name of the uploaded file
    #[serde(default, deserialize_with = "null_default")]
    pub pdf_name: String,
    /// Completion timestamp, as sent by the server
    #[serde(default, deserialize_with = "null_default")]
    pub processed_at: String,
    #[serde(default, deserialize_with = "null_default")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub extracted_text: String,
    /// Server order is kept everywhere
    #[serde(default, deserialize_with = "null_default")]
    pub extractions: Vec<ImageExtraction>,
}

impl ExtractionResult {
    /// Number of extractions that are not plain images.
    pub fn chart_count(&self) -> usize {
        self.extractions.iter().filter(|e| e.kind.is_chart()).count()
    }

    /// Number of extractions carrying an analysis.
    pub fn analyzed_count(&self) -> usize {
        self.extractions.iter().filter(|e| e.has_analysis()).count()
    }

    pub fn find(&self, image_id: &str) -> Option<&ImageExtraction> {
        self.extractions.iter().find(|e| e.image_id == image_id)
    }
}

/// A single detected visual element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageExtraction {
    /// Unique within a result set
    pub image_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub page_number: u32,
    #[serde(default, deserialize_with = "loose_bbox")]
    pub bbox: Option<BoundingBox>,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub kind: ExtractionKind,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default, alias = "ocr")]
    pub ocr_data: Option<OcrData>,
    /// Present only when the server finished analysing this element
    #[serde(default)]
    pub inference: Option<Inference>,
}

impl ImageExtraction {
    pub fn has_analysis(&self) -> bool {
        self.inference.is_some()
    }
}

/// Kind of extracted element.
///
/// Closed set: anything the server sends outside of it is treated as a
/// generic image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtractionKind {
    Chart,
    Graph,
    Table,
    #[default]
    Image,
    BarChart,
    LineGraph,
    PieChart,
}

impl ExtractionKind {
    /// Wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionKind::Chart => "chart",
            ExtractionKind::Graph => "graph",
            ExtractionKind::Table => "table",
            ExtractionKind::Image => "image",
            ExtractionKind::BarChart => "bar_chart",
            ExtractionKind::LineGraph => "line_graph",
            ExtractionKind::PieChart => "pie_chart",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ExtractionKind::Chart => "Chart",
            ExtractionKind::Graph => "Graph",
            ExtractionKind::Table => "Table",
            ExtractionKind::Image => "Image",
            ExtractionKind::BarChart => "Bar chart",
            ExtractionKind::LineGraph => "Line graph",
            ExtractionKind::PieChart => "Pie chart",
        }
    }

    /// Emoji badge for display.
    pub fn icon(self) -> &'static str {
        match self {
            ExtractionKind::Chart | ExtractionKind::BarChart => "📊",
            ExtractionKind::Graph | ExtractionKind::LineGraph => "📈",
            ExtractionKind::PieChart => "🥧",
            ExtractionKind::Table => "📋",
            ExtractionKind::Image => "🖼️",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(self) -> &'static str {
        match self {
            ExtractionKind::Chart | ExtractionKind::BarChart => "kind-chart",
            ExtractionKind::Graph | ExtractionKind::LineGraph => "kind-graph",
            ExtractionKind::PieChart => "kind-pie",
            ExtractionKind::Table => "kind-table",
            ExtractionKind::Image => "kind-image",
        }
    }

    pub fn is_chart(self) -> bool {
        self != ExtractionKind::Image
    }
}

impl From<&str> for ExtractionKind {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "chart" => ExtractionKind::Chart,
            "graph" => ExtractionKind::Graph,
            "table" => ExtractionKind::Table,
            "bar_chart" => ExtractionKind::BarChart,
            "line_graph" => ExtractionKind::LineGraph,
            "pie_chart" => ExtractionKind::PieChart,
            _ => ExtractionKind::Image,
        }
    }
}

impl From<String> for ExtractionKind {
    fn from(raw: String) -> Self {
        ExtractionKind::from(raw.as_str())
    }
}

impl From<ExtractionKind> for String {
    fn from(kind: ExtractionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Rectangle of the element on its page, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }
}

/// Accepts `[x0, y0, x1, y1]` or `{x0, y0, x1, y1}`; anything else is `None`.
fn loose_bbox<'de, D>(deserializer: D) -> Result<Option<BoundingBox>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let bbox = match raw {
        Some(Value::Array(items)) if items.len() == 4 => {
            let coords: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
            coords.map(|c| BoundingBox { x0: c[0], y0: c[1], x1: c[2], y1: c[3] })
        }
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    };
    Ok(bbox)
}

/// Text recognized inside an element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrData {
    #[serde(default, alias = "text", deserialize_with = "null_default")]
    pub raw_text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_axis: Option<String>,
    #[serde(default)]
    pub y_axis: Option<String>,
    #[serde(default, alias = "legend", deserialize_with = "null_default")]
    pub legends: Vec<String>,
    /// Loose data points read off the chart
    #[serde(default, deserialize_with = "null_default")]
    pub values: Vec<Value>,
}

impl OcrData {
    pub fn is_empty(&self) -> bool {
        self.raw_text.trim().is_empty()
            && self.title.is_none()
            && self.x_axis.is_none()
            && self.y_axis.is_none()
            && self.legends.is_empty()
            && self.values.is_empty()
    }

    /// Readable data points; entries of unknown shape are skipped.
    pub fn readings(&self) -> Vec<String> {
        self.values
            .iter()
            .filter_map(DataPoint::from_value)
            .map(|point| point.to_string())
            .collect()
    }
}

/// AI-generated analysis of an element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inference {
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    /// Free text, e.g. "increasing" or "slight downtrend"
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub anomalies: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub key_points: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub correlations: Vec<String>,
    #[serde(default, deserialize_with = "loose_point")]
    pub max_point: Option<DataPoint>,
    #[serde(default, deserialize_with = "loose_point")]
    pub min_point: Option<DataPoint>,
}

/// A labelled value, such as the maximum of a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
}

impl DataPoint {
    /// Interpret the loose shapes the service emits for extrema:
    /// `{label|x|name|category, value|y}` objects or `[label, value]` pairs.
    pub fn from_value(raw: &Value) -> Option<Self> {
        match raw {
            Value::Object(map) => {
                let label = ["label", "x", "name", "category"]
                    .iter()
                    .find_map(|key| map.get(*key))
                    .map(display_scalar)
                    .unwrap_or_default();
                let value = ["value", "y"]
                    .iter()
                    .find_map(|key| map.get(*key))
                    .map(display_scalar)?;
                Some(Self { label, value })
            }
            Value::Array(pair) if pair.len() == 2 => Some(Self {
                label: display_scalar(&pair[0]),
                value: display_scalar(&pair[1]),
            }),
            Value::Number(_) | Value::String(_) => Some(Self {
                label: String::new(),
                value: display_scalar(raw),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}: {}", self.label, self.value)
        }
    }
}

fn loose_point<'de, D>(deserializer: D) -> Result<Option<DataPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(DataPoint::from_value))
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_f64()
            .map(crate::presentation::format_value)
            .unwrap_or_else(|| n.to_string()),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from either upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Opaque task identifier, used for polling
    pub task_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// A browser API (FormData, DOM) failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl AppError {
    /// Build an HTTP error from a response body.
    ///
    /// The service reports errors as `{"detail": "..."}`; that text is used
    /// when present, the raw body otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string));
        let message = detail.unwrap_or_else(|| body.trim().to_string());
        let message = if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message
        };
        AppError::Http { status, message }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETED_STATUS: &str = r#"{
        "status": "completed",
        "message": "Processing complete",
        "progress": 100,
        "result": {
            "pdf_name": "quarterly.pdf",
            "processed_at": "2024-03-05T14:07:09.123456",
            "total_pages": 12,
            "extracted_text": "Revenue grew...",
            "extractions": [
                {
                    "image_id": "p3_img1",
                    "image_path": "/srv/output/images/p3_img1.png",
                    "type": "bar_chart",
                    "page_number": 3,
                    "bbox": [10.0, 20.5, 310.0, 220.5],
                    "confidence": 0.91,
                    "ocr_data": {
                        "title": "Revenue by quarter",
                        "x_axis": "Quarter",
                        "y_axis": "USD (M)",
                        "values": [{"value": "12"}, {"value": "18"}],
                        "legends": ["2023", "2024"]
                    },
                    "inference": {
                        "trend": "increasing",
                        "max_point": {"label": "Q4", "value": 18},
                        "min_point": {"x": "Q1", "y": 12.5},
                        "correlations": [],
                        "anomalies": ["Q2 dip"],
                        "summary": "Revenue rises through the year."
                    }
                },
                {
                    "image_id": "p7_img1",
                    "image_path": "/srv/output/images/p7_img1.jpeg",
                    "type": "image",
                    "page_number": 7,
                    "ocr_data": null,
                    "inference": null
                }
            ]
        }
    }"#;

    #[test]
    fn test_completed_status_deserialization() {
        let task: ProcessingTask = serde_json::from_str(COMPLETED_STATUS).unwrap();

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.progress, 100);
        assert!(task.is_terminal());

        let result = task.result.unwrap();
        assert_eq!(result.pdf_name, "quarterly.pdf");
        assert_eq!(result.total_pages, 12);
        assert_eq!(result.extractions.len(), 2);
        assert_eq!(result.chart_count(), 1);
        assert_eq!(result.analyzed_count(), 1);

        let chart = &result.extractions[0];
        assert_eq!(chart.kind, ExtractionKind::BarChart);
        assert_eq!(chart.page_number, 3);
        assert_eq!(chart.bbox.map(|b| b.width()), Some(300.0));
        assert!(chart.has_analysis());

        let ocr = chart.ocr_data.as_ref().unwrap();
        assert_eq!(ocr.title.as_deref(), Some("Revenue by quarter"));
        assert_eq!(ocr.legends, vec!["2023", "2024"]);

        let inference = chart.inference.as_ref().unwrap();
        assert_eq!(inference.trend.as_deref(), Some("increasing"));
        assert_eq!(
            inference.max_point,
            Some(DataPoint { label: "Q4".into(), value: "18".into() })
        );
        assert_eq!(
            inference.min_point,
            Some(DataPoint { label: "Q1".into(), value: "12.5".into() })
        );
        assert_eq!(inference.anomalies, vec!["Q2 dip"]);

        let image = &result.extractions[1];
        assert_eq!(image.kind, ExtractionKind::Image);
        assert!(image.bbox.is_none());
        assert!(!image.has_analysis());
    }

    #[test]
    fn test_processing_status_without_result() {
        let json = r#"{"status": "processing", "message": "Analyzing chart 2/5...", "progress": 42}"#;
        let task: ProcessingTask = serde_json::from_str(json).unwrap();

        assert_eq!(task.status, TaskStatus::Processing);
        assert_eq!(task.progress, 42);
        assert!(task.result.is_none());
        assert!(task.task_id.is_empty());
        assert!(!task.is_terminal());
    }

    #[test]
    fn test_progress_is_clamped() {
        let over: ProcessingTask =
            serde_json::from_str(r#"{"status": "processing", "progress": 140}"#).unwrap();
        let under: ProcessingTask =
            serde_json::from_str(r#"{"status": "processing", "progress": -3}"#).unwrap();
        let missing: ProcessingTask = serde_json::from_str(r#"{"status": "failed"}"#).unwrap();

        assert_eq!(over.progress, 100);
        assert_eq!(under.progress, 0);
        assert_eq!(missing.progress, 0);
        assert_eq!(missing.message, "");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_image() {
        let json = r#"{"image_id": "x", "type": "scatter_plot"}"#;
        let extraction: ImageExtraction = serde_json::from_str(json).unwrap();
        assert_eq!(extraction.kind, ExtractionKind::Image);

        let missing: ImageExtraction = serde_json::from_str(r#"{"image_id": "y"}"#).unwrap();
        assert_eq!(missing.kind, ExtractionKind::Image);
        assert_eq!(missing.page_number, 0);
    }

    #[test]
    fn test_kind_round_trips_wire_names() {
        for kind in [
            ExtractionKind::Chart,
            ExtractionKind::Graph,
            ExtractionKind::Table,
            ExtractionKind::Image,
            ExtractionKind::BarChart,
            ExtractionKind::LineGraph,
            ExtractionKind::PieChart,
        ] {
            assert_eq!(ExtractionKind::from(kind.as_str()), kind);
        }
        assert_eq!(ExtractionKind::from("PIE_CHART"), ExtractionKind::PieChart);
    }

    #[test]
    fn test_loose_bounding_boxes() {
        let object: ImageExtraction = serde_json::from_str(
            r#"{"image_id": "a", "bbox": {"x0": 1, "y0": 2, "x1": 4, "y1": 6}}"#,
        )
        .unwrap();
        assert_eq!(object.bbox.map(|b| b.height()), Some(4.0));

        let empty: ImageExtraction =
            serde_json::from_str(r#"{"image_id": "b", "bbox": []}"#).unwrap();
        assert!(empty.bbox.is_none());

        let garbage: ImageExtraction =
            serde_json::from_str(r#"{"image_id": "c", "bbox": ["a", 1, 2, 3]}"#).unwrap();
        assert!(garbage.bbox.is_none());
    }

    #[test]
    fn test_data_point_shapes() {
        let pair = DataPoint::from_value(&serde_json::json!(["March", 7])).unwrap();
        assert_eq!(pair.label, "March");
        assert_eq!(pair.value, "7");

        let bare = DataPoint::from_value(&serde_json::json!(3.25)).unwrap();
        assert_eq!(bare.label, "");
        assert_eq!(bare.value, "3.25");

        assert!(DataPoint::from_value(&serde_json::json!({"label": "no value"})).is_none());
        assert!(DataPoint::from_value(&serde_json::json!(null)).is_none());
    }

    #[test]
    fn test_connection_failed_snapshot() {
        let task = ProcessingTask::connection_failed("t9");
        assert_eq!(task.task_id, "t9");
        assert_eq!(task.status, TaskStatus::Failed);
        assert_eq!(task.progress, 0);
        assert_eq!(task.message, CONNECTION_FAILED_MESSAGE);
    }

    #[test]
    fn test_error_from_response_prefers_detail() {
        let err = AppError::from_response(400, r#"{"detail": "Only PDF files are allowed"}"#);
        assert_eq!(err.to_string(), "Server error (400): Only PDF files are allowed");

        let raw = AppError::from_response(502, "Bad Gateway\n");
        assert_eq!(raw.to_string(), "Server error (502): Bad Gateway");

        let empty = AppError::from_response(500, "");
        assert_eq!(empty.to_string(), "Server error (500): Unknown error");
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let json = r#"{
            "status": "completed",
            "message": null,
            "progress": null,
            "result": {
                "pdf_name": null,
                "processed_at": null,
                "total_pages": null,
                "extracted_text": null,
                "extractions": [
                    {
                        "image_id": "p1_img1",
                        "type": null,
                        "page_number": null,
                        "ocr_data": {"text": null, "legends": null, "values": null},
                        "inference": {
                            "summary": null,
                            "trend": null,
                            "anomalies": null,
                            "key_points": null,
                            "correlations": null
                        }
                    }
                ]
            }
        }"#;
        let task: ProcessingTask = serde_json::from_str(json).unwrap();

        assert_eq!(task.message, "");
        assert_eq!(task.progress, 0);
        let result = task.result.unwrap();
        assert_eq!(result.pdf_name, "");
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.extractions.len(), 1);

        let extraction = &result.extractions[0];
        assert_eq!(extraction.kind, ExtractionKind::Image);
        assert_eq!(extraction.page_number, 0);
        assert!(extraction.ocr_data.as_ref().unwrap().is_empty());

        let inference = extraction.inference.as_ref().unwrap();
        assert_eq!(inference.summary, "");
        assert!(inference.anomalies.is_empty());
        assert!(inference.key_points.is_empty());
        assert!(inference.correlations.is_empty());
    }

    #[test]
    fn test_null_extractions_list() {
        let result: ExtractionResult =
            serde_json::from_str(r#"{"pdf_name": "a.pdf", "extractions": null}"#).unwrap();
        assert!(result.extractions.is_empty());
        assert_eq!(result.chart_count(), 0);
    }

    #[test]
    fn test_ocr_readings() {
        let ocr: OcrData = serde_json::from_str(
            r#"{"values": [{"label": "Q1", "value": 12}, {"value": "18"}, ["Q3", 7.5], {"foo": 1}]}"#,
        )
        .unwrap();

        assert!(!ocr.is_empty());
        assert_eq!(ocr.readings(), vec!["Q1: 12", "18", "Q3: 7.5"]);
    }

    #[test]
    fn test_fetch_error_snapshots() {
        let network = ProcessingTask::from_fetch_error("t1", &AppError::Network("refused".into()));
        assert_eq!(network.message, CONNECTION_FAILED_MESSAGE);

        let http = ProcessingTask::from_fetch_error("t1", &AppError::from_response(404, "{}"));
        assert_eq!(http.message, CONNECTION_FAILED_MESSAGE);

        let decode = ProcessingTask::from_fetch_error("t1", &AppError::Decode("expected value".into()));
        assert_eq!(decode.task_id, "t1");
        assert_eq!(decode.status, TaskStatus::Failed);
        assert_eq!(decode.progress, 0);
        assert_eq!(decode.message, UNREADABLE_STATUS_MESSAGE);
        assert!(decode.is_terminal());
    }

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{"task_id": "4f1c", "message": "PDF uploaded successfully, processing started"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.task_id, "4f1c");

        let bare: UploadResponse =
            serde_json::from_str(r#"{"task_id": "4f1d", "message": null}"#).unwrap();
        assert_eq!(bare.message, "");
    }
}
