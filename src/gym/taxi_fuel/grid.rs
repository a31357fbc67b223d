//! Static layout of the 5x5 taxi map

/// The map as drawn, `|` is a wall and `:` an open passage between two cells.
///
/// Cell `(row, col)` is drawn at text position `(1 + row, 2 * col + 1)`.
pub const MAP: [&str; 7] = [
    "+---------+",
    "|R: |F: :G|",
    "| : | : : |",
    "| : : : : |",
    "| | : | : |",
    "|Y| : |B: |",
    "+---------+",
];

pub const NUM_ROWS: usize = 5;
pub const NUM_COLS: usize = 5;
pub const MAX_ROW: usize = NUM_ROWS - 1;
pub const MAX_COL: usize = NUM_COLS - 1;

pub type Pos = (usize, usize);

/// Pickup and dropoff locations R(ed), G(reen), Y(ellow) and B(lue), indexed 0 to 3
pub const LOCS: [Pos; 4] = [(0, 0), (0, 4), (4, 0), (4, 3)];

pub const FUEL_STATION: Pos = (0, 2);

/// Horizontal direction of travel, the only one walls can block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    East = 0,
    West = 1,
}

/// `OPEN[row][col][side]` is true if the taxi can leave `(row, col)` through `side`
const OPEN: [[[bool; 2]; NUM_COLS]; NUM_ROWS] = scan_walls();

const fn scan_walls() -> [[[bool; 2]; NUM_COLS]; NUM_ROWS] {
    let mut open = [[[false; 2]; NUM_COLS]; NUM_ROWS];
    let mut row = 0;
    while row < NUM_ROWS {
        let line = MAP[1 + row].as_bytes();
        let mut col = 0;
        while col < NUM_COLS {
            open[row][col][Side::East as usize] = line[2 * col + 2] == b':';
            open[row][col][Side::West as usize] = line[2 * col] == b':';
            col += 1;
        }
        row += 1;
    }
    open
}

/// Check whether there is no wall on the given side of a cell
pub fn is_open(pos: Pos, side: Side) -> bool {
    OPEN[pos.0][pos.1][side as usize]
}

/// Index into [`LOCS`] of the named location at `pos`, if any
pub fn loc_index(pos: Pos) -> Option<usize> {
    LOCS.iter().position(|&loc| loc == pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_match_map() {
        assert!(is_open((0, 0), Side::East), "R opens east");
        assert!(!is_open((0, 1), Side::East), "Wall east of (0, 1)");
        assert!(!is_open((0, 2), Side::West), "Wall west of the fuel station");
        assert!(!is_open((4, 0), Side::East), "Y is walled in on the east");
        assert!(!is_open((3, 1), Side::West), "Wall west of (3, 1)");
        assert!(is_open((2, 2), Side::West), "Middle row is open");
    }

    #[test]
    fn borders_are_walls() {
        for row in 0..NUM_ROWS {
            assert!(!is_open((row, 0), Side::West), "West border is closed");
            assert!(!is_open((row, MAX_COL), Side::East), "East border is closed");
        }
    }

    #[test]
    fn named_locations() {
        assert_eq!(loc_index((0, 4)), Some(1), "G is location 1");
        assert_eq!(loc_index((4, 3)), Some(3), "B is location 3");
        assert_eq!(loc_index(FUEL_STATION), None, "Fuel station is not a named location");
        let (r, c) = FUEL_STATION;
        assert_eq!(MAP[1 + r].as_bytes()[2 * c + 1], b'F', "Fuel station is drawn as F");
    }
}
