//! JSON snapshot of the wall.
//!
//! Every coordinate in the snapshot is already normalized, so a drawing saved
//! at one canvas size reloads at any other. Decoding is record-by-record: a
//! damaged stroke or drip is skipped and the rest of the wall still loads.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::*;
use crate::drip::Drip;
use crate::error::PersistError;
use crate::geometry::{path_length, CommittedPath, Point, Viewport};
use crate::scene::Scene;
use crate::stroke::{glyph_count, text_or_default, Stroke};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOut<'a> {
    saved_width: f64,
    saved_height: f64,
    strokes: Vec<StrokeOut<'a>>,
    wall_drips: Vec<DripOut<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StrokeOut<'a> {
    path_norm: &'a [Point],
    spray_color: &'a str,
    thickness: f64,
    text: &'a str,
    text_size: u32,
    text_color: &'a str,
    num_chars: usize,
    total_len: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DripOut<'a> {
    start_x_norm: f64,
    start_y_norm: f64,
    color: &'a str,
    points: &'a [Point],
    thick: f64,
    alpha: f64,
    max_length_norm: f64,
}

pub fn encode(scene: &Scene) -> Result<String, PersistError> {
    let viewport = scene.viewport();
    let strokes = scene
        .strokes()
        .iter()
        .filter(|s| !s.path.is_empty())
        .map(|s| StrokeOut {
            path_norm: s.path.points(),
            spray_color: &s.spray_color,
            thickness: s.thickness,
            text: &s.text,
            text_size: s.text_size,
            text_color: &s.text_color,
            num_chars: s.num_chars,
            total_len: s.total_len,
        })
        .collect();
    let wall_drips = scene
        .drips()
        .iter()
        .filter(|d| d.anchor().is_finite())
        .map(|d| DripOut {
            start_x_norm: d.start_x,
            start_y_norm: d.start_y,
            color: &d.color,
            points: &d.points,
            thick: d.thick,
            alpha: d.alpha,
            max_length_norm: d.max_length,
        })
        .collect();
    let out = SnapshotOut {
        saved_width: viewport.width,
        saved_height: viewport.height,
        strokes,
        wall_drips,
    };
    Ok(serde_json::to_string(&out)?)
}

/// Result of decoding a snapshot.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Canvas size at save time, when recorded.
    pub saved: Option<Viewport>,
    pub strokes: Vec<Stroke>,
    pub drips: Vec<Drip>,
    /// Records that could not be used.
    pub skipped: usize,
}

// Accept any JSON for the field and keep it only if it has the wanted shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawSnapshot {
    #[serde(deserialize_with = "lenient")]
    saved_width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    saved_height: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    strokes: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient")]
    wall_drips: Option<Vec<Value>>,
    // Older snapshots; `wallDrips` wins when both are present.
    #[serde(deserialize_with = "lenient")]
    drips: Option<Vec<Value>>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawStroke {
    #[serde(deserialize_with = "lenient")]
    path_norm: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient")]
    spray_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    thickness: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    text_size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    text_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    num_chars: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    total_len: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawDrip {
    #[serde(deserialize_with = "lenient")]
    start_x_norm: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    start_y_norm: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    points: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient")]
    thick: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    alpha: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    max_length_norm: Option<f64>,
}

/// Decode a snapshot. Only a document that is not a JSON object at all is an
/// error; unusable records inside it are counted in [`Snapshot::skipped`].
pub fn decode(json: &str) -> Result<Snapshot, PersistError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(PersistError::NotAnObject);
    }
    let raw: RawSnapshot = serde_json::from_value(value)?;
    let saved = match (raw.saved_width, raw.saved_height) {
        (Some(w), Some(h)) if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 => {
            Some(Viewport::new(w, h))
        }
        _ => None,
    };

    let mut snapshot = Snapshot {
        saved,
        ..Snapshot::default()
    };
    for record in raw.strokes.unwrap_or_default() {
        match decode_stroke(record, saved) {
            Some(s) => snapshot.strokes.push(s),
            None => snapshot.skipped += 1,
        }
    }
    for record in raw.wall_drips.or(raw.drips).unwrap_or_default() {
        match decode_drip(record) {
            Some(d) => snapshot.drips.push(d),
            None => snapshot.skipped += 1,
        }
    }
    Ok(snapshot)
}

fn decode_points(raw: Option<Vec<Value>>) -> Vec<Point> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|v| serde_json::from_value::<Point>(v).ok())
        .filter(Point::is_finite)
        .collect()
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

fn non_blank(v: Option<String>, fallback: &str) -> String {
    match v {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

fn decode_stroke(record: Value, saved: Option<Viewport>) -> Option<Stroke> {
    let raw: RawStroke = serde_json::from_value(record).ok()?;
    let path = CommittedPath::from_normalized(decode_points(raw.path_norm));
    if path.is_empty() {
        return None;
    }
    let text_size = finite(raw.text_size)
        .filter(|s| *s > 0.0)
        .map(|s| (s.round() as u32).max(MIN_TEXT_SIZE))
        .unwrap_or(DEFAULT_TEXT_SIZE);
    let total_len = finite(raw.total_len)
        .filter(|l| *l >= 0.0)
        .unwrap_or_else(|| saved.map(|vp| path_length(&path.to_pixels(vp))).unwrap_or(0.0));
    // Stored counts never exceed what the stored length fits.
    let fits = glyph_count(total_len, text_size);
    let num_chars = finite(raw.num_chars)
        .filter(|n| *n >= 1.0)
        .map(|n| (n.min(fits as f64)) as usize)
        .unwrap_or(fits);
    Some(Stroke {
        path,
        spray_color: non_blank(raw.spray_color, DEFAULT_SPRAY_COLOR),
        thickness: finite(raw.thickness)
            .filter(|t| *t > 0.0)
            .unwrap_or(DEFAULT_THICKNESS),
        text: text_or_default(raw.text.as_deref().unwrap_or_default()),
        text_size,
        text_color: non_blank(raw.text_color, DEFAULT_TEXT_COLOR),
        num_chars,
        total_len,
    })
}

fn decode_drip(record: Value) -> Option<Drip> {
    let raw: RawDrip = serde_json::from_value(record).ok()?;
    let anchor = Point::new(finite(raw.start_x_norm)?, finite(raw.start_y_norm)?);
    Some(Drip::restore(
        anchor,
        non_blank(raw.color, DEFAULT_SPRAY_COLOR),
        decode_points(raw.points),
        finite(raw.thick)
            .filter(|t| *t > 0.0)
            .unwrap_or(DEFAULT_DRIP_THICK),
        finite(raw.alpha).map(|a| a.clamp(0.0, 1.0)).unwrap_or(DRIP_ALPHA),
        finite(raw.max_length_norm)
            .filter(|m| *m >= 0.0)
            .map(|m| m.min(MAX_DRIP_LENGTH_NORM))
            .unwrap_or(DEFAULT_DRIP_MAX_LENGTH_NORM),
    ))
}
