use super::matrix::ModuleMatrix;

/// Side of a finder pattern box in modules.
pub const EYE_SIZE: usize = 7;

// Eye positions
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyePosition {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl EyePosition {
    pub const ALL: [EyePosition; 3] =
        [EyePosition::TopLeft, EyePosition::TopRight, EyePosition::BottomLeft];

    /// Top-left `(row, col)` of the 7x7 eye box in a matrix of width `w`.
    pub fn origin(self, w: usize) -> (usize, usize) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, w - EYE_SIZE),
            Self::BottomLeft => (w - EYE_SIZE, 0),
        }
    }

    /// Eye box containing `(r, c)`, along with the offset inside that box.
    pub fn locate(r: usize, c: usize, w: usize) -> Option<(Self, usize, usize)> {
        let far = w - EYE_SIZE;
        match (r < EYE_SIZE, c < EYE_SIZE, r >= far, c >= far) {
            (true, true, _, _) => Some((Self::TopLeft, r, c)),
            (true, _, _, true) => Some((Self::TopRight, r, c - far)),
            (_, true, true, _) => Some((Self::BottomLeft, r - far, c)),
            _ => None,
        }
    }
}

// Cell roles
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    Data,
    EyeFrame,
    EyeBall,
    /// Light ring between frame and ball. Never drawn.
    EyeGap,
}

impl CellRole {
    pub fn is_eye(self) -> bool {
        !matches!(self, Self::Data)
    }
}

/// Role of the cell at `(r, c)` in a matrix of width `w`.
///
/// Assumes `w >= 21` so the three eye boxes cannot overlap. The encoder never produces
/// anything smaller, so this is not re-checked here.
#[inline]
pub fn classify(r: usize, c: usize, w: usize) -> CellRole {
    match EyePosition::locate(r, c, w) {
        None => CellRole::Data,
        Some((_, dr, dc)) => match (dr, dc) {
            (0 | 6, _) | (_, 0 | 6) => CellRole::EyeFrame,
            (2..=4, 2..=4) => CellRole::EyeBall,
            _ => CellRole::EyeGap,
        },
    }
}

/// Materialized role of every cell in a matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMap {
    roles: Vec<CellRole>,
    w: usize,
}

impl RoleMap {
    pub fn classify(matrix: &ModuleMatrix) -> Self {
        Self::for_width(matrix.width())
    }

    pub fn for_width(w: usize) -> Self {
        let roles = (0..w * w).map(|i| classify(i / w, i % w, w)).collect();
        Self { roles, w }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn get(&self, r: usize, c: usize) -> CellRole {
        self.roles[r * self.w + c]
    }

    pub fn count(&self, role: CellRole) -> usize {
        self.roles.iter().filter(|&&x| x == role).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::from("\n");
        for row in self.roles.chunks(self.w) {
            res.extend(row.iter().map(|r| match r {
                CellRole::Data => '.',
                CellRole::EyeFrame => 'f',
                CellRole::EyeBall => 'b',
                CellRole::EyeGap => '_',
            }));
            res.push('\n');
        }
        res
    }
}
