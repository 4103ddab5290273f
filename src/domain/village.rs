//! Village records and deed geometry

/// Axis-aligned deed rectangle in map tile coordinates.
///
/// The source data guarantees `start_x <= end_x` and `start_y <= end_y`;
/// this is assumed, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl Bounds {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// Whether a tile lies inside the rectangle (borders included).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.start_x && y >= self.start_y && x <= self.end_x && y <= self.end_y
    }

    /// Geometric center of the rectangle, rounded down.
    pub fn center(&self) -> (i32, i32) {
        ((self.start_x + self.end_x) / 2, (self.start_y + self.end_y) / 2)
    }
}

/// Item positions are stored at 4x the map tile resolution.
const TILE_SCALE: i32 = 4;

/// Converts a raw item-store position to a map tile coordinate.
///
/// Source values are non-negative, so truncating division floors correctly.
pub fn item_pos_to_tile(raw: i32) -> i32 {
    raw / TILE_SCALE
}

/// One settlement as it appears on the map.
///
/// A `Village` starts out fully defaulted and is overwritten field by field
/// as the per-store lookups succeed; a failed lookup leaves its portion at
/// the defaults rather than aborting the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Village {
    pub id: i32,
    pub name: String,
    pub mayor: String,
    pub motto: String,
    pub bounds: Bounds,
    pub permanent: bool,
    /// Back-reference to the deed token item; used only to look up position.
    pub token_id: i64,
    pub token_x: i32,
    pub token_y: i32,
    pub citizens: u32,
}

impl Village {
    /// A fully-defaulted record for the given village id.
    pub fn with_defaults(id: i32) -> Self {
        Self {
            id,
            name: String::new(),
            mayor: String::new(),
            motto: String::new(),
            bounds: Bounds::default(),
            permanent: false,
            token_id: 0,
            token_x: 0,
            token_y: 0,
            citizens: 0,
        }
    }

    /// Clamps a stray token position back onto the deed.
    ///
    /// If the token lies outside the deed rectangle (or was never found and
    /// sits at the default origin) the position is replaced with the
    /// rectangle's center, so every exported marker lands inside its deed.
    pub fn reconcile_token_position(&mut self) {
        if !self.bounds.contains(self.token_x, self.token_y) {
            let (cx, cy) = self.bounds.center();
            self.token_x = cx;
            self.token_y = cy;
        }
    }
}
