use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize, de, ser};

/// The seven tetromino shapes, in catalog order.
///
/// The discriminant doubles as the index into the spawn catalog, so the
/// order here must stay in sync with the catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ShapeKind {
    O,
    I,
    J,
    L,
    S,
    Z,
    T,
}

impl ShapeKind {
    /// Number of shapes in the catalog.
    pub const LEN: usize = 7;

    /// All shapes, in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        Self::O,
        Self::I,
        Self::J,
        Self::L,
        Self::S,
        Self::Z,
        Self::T,
    ];

    /// Returns the single-character tag used by the serialized cell format.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::O => 'O',
            Self::I => 'I',
            Self::J => 'J',
            Self::L => 'L',
            Self::S => 'S',
            Self::Z => 'Z',
            Self::T => 'T',
        }
    }

    /// Parses a shape from its single-character tag.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Self::O),
            'I' => Some(Self::I),
            'J' => Some(Self::J),
            'L' => Some(Self::L),
            'S' => Some(Self::S),
            'Z' => Some(Self::Z),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// The square shape is symmetric around its own footprint, so rotation
    /// is defined as a no-op for it.
    #[must_use]
    pub const fn is_rotatable(self) -> bool {
        !matches!(self, Self::O)
    }
}

/// One occupied square of the board.
///
/// # Coordinate System
///
/// `x` grows rightwards across the columns and `y` grows downwards across
/// the rows. Row `0` is the top of the visible grid; freshly spawned pieces
/// start on negative rows and descend into view. Cells keep their shape of
/// origin so the board can be drawn without any extra bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: i16,
    y: i16,
    kind: ShapeKind,
}

/// The four cells of one tetromino.
pub type PieceCells = ArrayVec<Cell, 4>;

impl Cell {
    /// Creates a cell at the given coordinates.
    ///
    /// Coordinates outside the visible grid are legal. Candidate positions
    /// are built first and tested against the board afterwards, so a cell
    /// may transiently sit on a wall or below the floor.
    #[must_use]
    pub const fn new(x: i16, y: i16, kind: ShapeKind) -> Self {
        Self { x, y, kind }
    }

    /// Returns the column of the cell.
    #[must_use]
    pub const fn x(self) -> i16 {
        self.x
    }

    /// Returns the row of the cell.
    #[must_use]
    pub const fn y(self) -> i16 {
        self.y
    }

    /// Returns the shape this cell belongs to.
    #[must_use]
    pub const fn kind(self) -> ShapeKind {
        self.kind
    }

    /// Returns the cell shifted by the given deltas.
    #[must_use]
    pub const fn translated(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            kind: self.kind,
        }
    }
}

/// Serializes in a compact string format: `<kind>@<x>,<y>`.
///
/// For example, a `T` cell on column 4 of the spawn row serializes as
/// `"T@4,-1"`.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&format!("{}@{},{}", self.kind.as_char(), self.x, self.y))
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let (kind, coords) = s.split_once('@').ok_or_else(|| {
            de::Error::custom(format!("invalid cell format: missing `@` in {s:?}"))
        })?;
        let kind = kind
            .chars()
            .next()
            .filter(|_| kind.chars().count() == 1)
            .and_then(ShapeKind::from_char)
            .ok_or_else(|| de::Error::custom(format!("invalid shape kind: {kind:?}")))?;

        let (x, y) = coords.split_once(',').ok_or_else(|| {
            de::Error::custom(format!("invalid cell format: missing `,` in {s:?}"))
        })?;
        let x = x
            .parse::<i16>()
            .map_err(|e| de::Error::custom(format!("invalid cell column {x:?}: {e}")))?;
        let y = y
            .parse::<i16>()
            .map_err(|e| de::Error::custom(format!("invalid cell row {y:?}: {e}")))?;

        Ok(Self::new(x, y, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_char_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(ShapeKind::from_char('X'), None);
        assert_eq!(ShapeKind::from_char('o'), None);
    }

    #[test]
    fn only_the_square_refuses_rotation() {
        assert!(!ShapeKind::O.is_rotatable());
        for kind in [
            ShapeKind::I,
            ShapeKind::J,
            ShapeKind::L,
            ShapeKind::S,
            ShapeKind::Z,
            ShapeKind::T,
        ] {
            assert!(kind.is_rotatable());
        }
    }

    #[test]
    fn translation_moves_both_axes() {
        let cell = Cell::new(4, -1, ShapeKind::T);
        let moved = cell.translated(-2, 3);
        assert_eq!(moved, Cell::new(2, 2, ShapeKind::T));
        assert_eq!(moved.kind(), ShapeKind::T);
    }

    #[test]
    fn cell_serialization() {
        let cell = Cell::new(4, -1, ShapeKind::T);
        assert_eq!(serde_json::to_string(&cell).unwrap(), r#""T@4,-1""#);

        let cell = Cell::new(0, 19, ShapeKind::I);
        assert_eq!(serde_json::to_string(&cell).unwrap(), r#""I@0,19""#);
    }

    #[test]
    fn cell_deserialization() {
        let cell: Cell = serde_json::from_str(r#""T@4,-1""#).unwrap();
        assert_eq!(cell, Cell::new(4, -1, ShapeKind::T));

        let cell: Cell = serde_json::from_str(r#""Z@9,0""#).unwrap();
        assert_eq!(cell, Cell::new(9, 0, ShapeKind::Z));
    }

    #[test]
    fn cell_deserialization_rejects_malformed_input() {
        for input in [
            r#""T4,-1""#,   // missing `@`
            r#""X@4,-1""#,  // unknown shape
            r#""TT@4,-1""#, // shape tag too long
            r#""@4,-1""#,   // empty shape tag
            r#""T@4""#,     // missing row
            r#""T@a,-1""#,  // non-numeric column
            r#""T@4,b""#,   // non-numeric row
            r#""""#,        // empty string
        ] {
            assert!(
                serde_json::from_str::<Cell>(input).is_err(),
                "expected {input} to be rejected"
            );
        }
    }
}
