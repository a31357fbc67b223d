use super::grid::{Pos, LOCS, NUM_COLS, NUM_ROWS};

pub const MAX_FUEL: usize = 10;

/// Value of [`TaxiState::passenger`] once the passenger is in the taxi
pub const IN_TAXI: usize = LOCS.len();

const NUM_PASSENGER: usize = LOCS.len() + 1;
const NUM_DESTINATION: usize = LOCS.len();
const NUM_FUEL: usize = MAX_FUEL + 1;

/// 25 taxi positions, 5 passenger locations, 4 destinations, 11 fuel levels
pub const NUM_STATES: usize = NUM_ROWS * NUM_COLS * NUM_PASSENGER * NUM_DESTINATION * NUM_FUEL;

/// Structured form of a packed state index
///
/// `passenger` and `destination` index into [`LOCS`], with `passenger == IN_TAXI`
/// once picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaxiState {
    pub row: usize,
    pub col: usize,
    pub passenger: usize,
    pub destination: usize,
    pub fuel: usize,
}

impl TaxiState {
    pub fn taxi(&self) -> Pos {
        (self.row, self.col)
    }

    pub fn encode(&self) -> usize {
        encode(self.row, self.col, self.passenger, self.destination, self.fuel)
    }
}

/// Pack a state into `[0, NUM_STATES)` as a mixed-radix number with radices `(5, 5, 5, 4, 11)`
///
/// Out-of-range components are a caller error and are only checked in debug builds.
pub fn encode(row: usize, col: usize, passenger: usize, destination: usize, fuel: usize) -> usize {
    debug_assert!(row < NUM_ROWS && col < NUM_COLS);
    debug_assert!(passenger < NUM_PASSENGER && destination < NUM_DESTINATION);
    debug_assert!(fuel < NUM_FUEL);

    let mut i = row;
    i = i * NUM_COLS + col;
    i = i * NUM_PASSENGER + passenger;
    i = i * NUM_DESTINATION + destination;
    i * NUM_FUEL + fuel
}

/// Inverse of [`encode`]
pub fn decode(mut i: usize) -> TaxiState {
    debug_assert!(i < NUM_STATES, "State index out of range: {}", i);

    let fuel = i % NUM_FUEL;
    i /= NUM_FUEL;
    let destination = i % NUM_DESTINATION;
    i /= NUM_DESTINATION;
    let passenger = i % NUM_PASSENGER;
    i /= NUM_PASSENGER;
    let col = i % NUM_COLS;
    let row = i / NUM_COLS;

    TaxiState {
        row,
        col,
        passenger,
        destination,
        fuel,
    }
}
