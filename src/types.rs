/// Linear board dimension; one axis of the square grid.
pub type Coord = u8;

/// Area magnitude, used for mine and cell counts.
pub type CellCount = u16;

/// `(x, y)` position on the grid.
pub type Coord2 = (Coord, Coord);

/// Conversion into an `ndarray` index.
pub trait ToGridIndex {
    fn to_grid_index(self) -> [usize; 2];
}

impl ToGridIndex for Coord2 {
    fn to_grid_index(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with the given side.
pub const fn square(side: Coord) -> CellCount {
    let side = side as CellCount;
    side * side
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only while it stays on the
/// board.
fn apply_offset(coords: Coord2, delta: (i8, i8), side: Coord) -> Option<Coord2> {
    let x = coords.0.checked_add_signed(delta.0)?;
    if x >= side {
        return None;
    }
    let y = coords.1.checked_add_signed(delta.1)?;
    if y >= side {
        return None;
    }
    Some((x, y))
}

/// Iterator over the up-to-8 in-bounds neighbors of a cell; grid edges
/// truncate the neighborhood.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    side: Coord,
    index: u8,
}

impl Neighbors {
    pub fn of(center: Coord2, side: Coord) -> Self {
        Self {
            center,
            side,
            index: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = NEIGHBOR_OFFSETS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next) = apply_offset(self.center, delta, self.side) {
                return Some(next);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Coord2, side: Coord) -> Vec<Coord2> {
        Neighbors::of(center, side).collect()
    }

    #[test]
    fn corner_has_three_neighbors() {
        let got = collect((0, 0), 3);
        assert_eq!(got.len(), 3);
        assert!(got.contains(&(1, 0)));
        assert!(got.contains(&(0, 1)));
        assert!(got.contains(&(1, 1)));
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(collect((1, 0), 3).len(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(collect((1, 1), 3).len(), 8);
    }

    #[test]
    fn far_edge_is_truncated() {
        assert_eq!(collect((2, 2), 3), vec![(1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(collect((0, 0), 1), vec![]);
    }

    #[test]
    fn square_area_fits_the_count_type() {
        assert_eq!(square(0), 0);
        assert_eq!(square(5), 25);
        assert_eq!(square(255), 65025);
    }
}
