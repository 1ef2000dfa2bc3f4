//! Scene-description text format
//!
//! One record per line, whitespace separated:
//!
//! ```text
//! PADDLE x y
//! BALL x y vx vy
//! BRICK x y
//! UNBRICK x y
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A bad line is
//! reported and dropped; the rest of the file still loads. Tokens past the
//! expected count are ignored.

use thiserror::Error;

/// A single entity line from a scene file
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRecord {
    Paddle { x: f32, y: f32 },
    Ball { x: f32, y: f32, vx: f32, vy: f32 },
    Brick { x: f32, y: f32 },
    UnbreakableBrick { x: f32, y: f32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Known keyword, missing or non-numeric fields
    #[error("malformed {0} record")]
    Malformed(String),
    #[error("unknown entity type: {0}")]
    UnknownKeyword(String),
}

/// Parse one line. `Ok(None)` means the line carries no record (blank or
/// comment), which is not an error.
pub fn parse_line(line: &str) -> Result<Option<EntityRecord>, RecordError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let mut field = || -> Result<f32, RecordError> {
        tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| RecordError::Malformed(keyword.to_string()))
    };

    let record = match keyword {
        "PADDLE" => EntityRecord::Paddle {
            x: field()?,
            y: field()?,
        },
        "BALL" => EntityRecord::Ball {
            x: field()?,
            y: field()?,
            vx: field()?,
            vy: field()?,
        },
        "BRICK" => EntityRecord::Brick {
            x: field()?,
            y: field()?,
        },
        "UNBRICK" => EntityRecord::UnbreakableBrick {
            x: field()?,
            y: field()?,
        },
        other => return Err(RecordError::UnknownKeyword(other.to_string())),
    };
    Ok(Some(record))
}

/// Parse a whole scene file, reporting and skipping bad lines
pub fn parse(text: &str) -> Vec<EntityRecord> {
    let mut records = Vec::new();
    for (number, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(err) => log::warn!("Skipping scene line {}: {}", number + 1, err),
        }
    }
    records
}
