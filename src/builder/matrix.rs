use qrcode::types::QrError;
use qrcode::QrCode;
use tracing::debug;

use crate::common::{ECLevel, QRError, QRResult};

// Module matrix
//------------------------------------------------------------------------------

/// Square grid of modules produced by the encoder, `true` meaning dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    grid: Vec<bool>,
    w: usize,
    ecl: ECLevel,
}

impl ModuleMatrix {
    pub fn from_grid(grid: Vec<bool>, w: usize, ecl: ECLevel) -> Self {
        debug_assert!(grid.len() == w * w, "Grid is not square");
        Self { grid, w, ecl }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn grid(&self) -> &[bool] {
        &self.grid
    }

    /// Row-major iterator over `(row, col, dark)`.
    pub fn modules(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.grid.iter().enumerate().map(move |(i, &m)| (i / self.w, i % self.w, m))
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for row in self.grid.chunks(self.w) {
            res.extend(row.iter().map(|&m| if m { '#' } else { '.' }));
            res.push('\n');
        }
        res
    }
}

// Encoder adapter
//------------------------------------------------------------------------------

pub fn generate_matrix(payload: &str, ecl: ECLevel) -> QRResult<ModuleMatrix> {
    if payload.is_empty() {
        return Err(QRError::EmptyPayload);
    }

    debug!(len = payload.len(), ?ecl, "Encoding payload...");
    let code =
        QrCode::with_error_correction_level(payload.as_bytes(), ecl.into()).map_err(|e| match e {
            QrError::DataTooLong => QRError::DataTooLong(ecl),
            other => QRError::EncodingFailed(other.to_string()),
        })?;

    let w = code.width();
    let grid = code.to_colors().into_iter().map(|c| c == qrcode::Color::Dark).collect();
    debug!(width = w, "Encoded module matrix");

    Ok(ModuleMatrix::from_grid(grid, w, ecl))
}
