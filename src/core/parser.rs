use crate::domain::model::Matrix;
use crate::utils::error::{Result, SpiralError};
use regex::Regex;

/// Parses the bordered ASCII grid the upstream endpoint serves:
///
/// ```text
/// +-----+-----+
/// |  1  |  2  |
/// +-----+-----+
/// ```
///
/// Border lines are detected structurally rather than by a fixed-width
/// pattern, so grids of any column count and cell width are accepted.
pub struct GridParser {
    separator: Regex,
}

impl GridParser {
    pub fn new() -> Self {
        Self {
            separator: Regex::new(r"^\+(?:-+\+)+$").expect("separator pattern is valid"),
        }
    }

    pub fn parse(&self, body: &str) -> Result<Matrix> {
        let mut rows: Vec<Vec<i64>> = Vec::new();

        for line in body.lines() {
            let line = line.trim();
            if line.is_empty() || self.separator.is_match(line) {
                continue;
            }

            let mut row = Vec::new();
            for token in line.split('|') {
                let token = token.trim();
                // Leading and trailing delimiters produce empty tokens; drop them.
                if token.is_empty() {
                    continue;
                }
                let value =
                    token
                        .parse::<i64>()
                        .map_err(|e| SpiralError::GridFormatError {
                            message: format!("cell '{}' is not an integer: {}", token, e),
                        })?;
                row.push(value);
            }

            if !row.is_empty() {
                rows.push(row);
            }
        }

        if let Some(width) = rows.first().map(|row| row.len()) {
            if rows.iter().any(|row| row.len() != width) {
                return Err(SpiralError::GridFormatError {
                    message: "rows have unequal widths, matrix must be rectangular".to_string(),
                });
            }
        }

        Ok(Matrix::new(rows))
    }
}

impl Default for GridParser {
    fn default() -> Self {
        Self::new()
    }
}
