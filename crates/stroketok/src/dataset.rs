//! Dataset archive loading.
//!
//! The archive is a JSON object exposing four named arrays:
//! `points_train`, `labels_train`, `points_test`, `labels_test`, with the
//! points and labels arrays of a split paired by index. Entries are decoded
//! permissively:
//! - a points entry is either a nested array of `[x, y]` number pairs or a
//!   base64 string of packed little-endian `f32` pairs (compact form)
//! - a label is any JSON scalar, coerced to a string

use std::fmt;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use memmap2::MmapOptions;
use serde_json::{Map, Value};
use thiserror::Error;

/// One recorded gesture trace with its class label.
#[derive(Debug, Clone)]
pub struct RawSample {
    pub points: Vec<[f32; 2]>,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Test => write!(f, "test"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PointsDecodeError {
    #[error("expected an array of [x, y] pairs or a base64 string")]
    UnsupportedShape,
    #[error("pair {0} is not a two-number array")]
    BadPair(usize),
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("packed payload has {0} bytes, expected a multiple of 8")]
    BadPackedLen(usize),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("archive root is not a JSON object")]
    NotAnObject,
    #[error("archive is missing the `{0}` array")]
    MissingArray(&'static str),
    #[error("{split} split has {points} point sequences but {labels} labels")]
    LengthMismatch {
        split: Split,
        points: usize,
        labels: usize,
    },
    #[error("bad points entry {index} in {split} split: {source}")]
    BadPoints {
        split: Split,
        index: usize,
        source: PointsDecodeError,
    },
    #[error("bad label entry {index} in {split} split: expected a scalar")]
    BadLabel { split: Split, index: usize },
}

/// Raw train and test samples as stored in the archive, in archive order.
#[derive(Debug, Clone)]
pub struct DatasetArchive {
    pub train: Vec<RawSample>,
    pub test: Vec<RawSample>,
}

impl DatasetArchive {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let root: Value = serde_json::from_slice(bytes)?;
        let Value::Object(map) = root else {
            return Err(DatasetError::NotAnObject);
        };

        let train = read_split(&map, Split::Train, "points_train", "labels_train")?;
        let test = read_split(&map, Split::Test, "points_test", "labels_test")?;
        Ok(Self { train, test })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        // SAFETY: read-only file mapping, parsed once and dropped.
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Self::from_json_slice(&mmap)
    }
}

fn read_split(
    map: &Map<String, Value>,
    split: Split,
    points_key: &'static str,
    labels_key: &'static str,
) -> Result<Vec<RawSample>, DatasetError> {
    let points = map
        .get(points_key)
        .and_then(Value::as_array)
        .ok_or(DatasetError::MissingArray(points_key))?;
    let labels = map
        .get(labels_key)
        .and_then(Value::as_array)
        .ok_or(DatasetError::MissingArray(labels_key))?;

    if points.len() != labels.len() {
        return Err(DatasetError::LengthMismatch {
            split,
            points: points.len(),
            labels: labels.len(),
        });
    }

    let mut samples = Vec::with_capacity(points.len());
    for (index, (points_value, label_value)) in points.iter().zip(labels).enumerate() {
        let points = decode_points(points_value)
            .map_err(|source| DatasetError::BadPoints { split, index, source })?;
        let label =
            label_from_value(label_value).ok_or(DatasetError::BadLabel { split, index })?;
        samples.push(RawSample { points, label });
    }
    Ok(samples)
}

/// Decode one points entry in either supported form.
pub fn decode_points(value: &Value) -> Result<Vec<[f32; 2]>, PointsDecodeError> {
    match value {
        Value::Array(pairs) => {
            let mut points = Vec::with_capacity(pairs.len());
            for (i, pair) in pairs.iter().enumerate() {
                let Some(coords) = pair.as_array() else {
                    return Err(PointsDecodeError::BadPair(i));
                };
                let (Some(x), Some(y)) = (
                    coords.first().and_then(Value::as_f64),
                    coords.get(1).and_then(Value::as_f64),
                ) else {
                    return Err(PointsDecodeError::BadPair(i));
                };
                if coords.len() != 2 {
                    return Err(PointsDecodeError::BadPair(i));
                }
                points.push([x as f32, y as f32]);
            }
            Ok(points)
        }
        Value::String(encoded) => {
            let bytes = STANDARD.decode(encoded.as_bytes())?;
            if bytes.len() % 8 != 0 {
                return Err(PointsDecodeError::BadPackedLen(bytes.len()));
            }
            Ok(bytes
                .chunks_exact(8)
                .map(|c| {
                    [
                        f32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                        f32::from_le_bytes([c[4], c[5], c[6], c[7]]),
                    ]
                })
                .collect())
        }
        _ => Err(PointsDecodeError::UnsupportedShape),
    }
}

fn label_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
