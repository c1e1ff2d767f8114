use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates, interpreted by each grid as `(major, minor)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Named `(x, y)` point for snapshots, `x` grows rightwards and `y` downwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl From<Coord2> for Position {
    fn from((x, y): Coord2) -> Self {
        Self { x, y }
    }
}

impl From<Position> for Coord2 {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_delta_stays_in_bounds() {
        assert_eq!(apply_delta((1, 1), (1, -1), (3, 3)), Some((2, 0)));
        assert_eq!(apply_delta((0, 0), (-1, 0), (3, 3)), None);
        assert_eq!(apply_delta((2, 2), (0, 1), (3, 3)), None);
        assert_eq!(apply_delta((2, 2), (-3, 0), (3, 3)), None);
    }
}
