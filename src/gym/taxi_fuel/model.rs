use log::debug;
use strum::{EnumCount, IntoEnumIterator};

use crate::env::{Outcome, TransitionTable};

use super::{
    action::Action,
    codec::{decode, TaxiState, IN_TAXI, MAX_FUEL, NUM_STATES},
    grid::{is_open, loc_index, Side, FUEL_STATION, LOCS, MAX_COL, MAX_ROW},
};

const STEP_REWARD: f32 = -1.0;
const PENALTY: f32 = -10.0;
const DELIVERY_REWARD: f32 = 20.0;

/// Compute the deterministic result of taking `action` in `state`
///
/// **Returns** `(next_state, reward, done)`
pub fn transition(state: TaxiState, action: Action) -> (TaxiState, f32, bool) {
    let mut next = state;
    let mut reward = STEP_REWARD;
    let mut done = false;
    let taxi = state.taxi();

    match action {
        Action::South => next.row = (state.row + 1).min(MAX_ROW),
        Action::North => next.row = state.row.saturating_sub(1),
        Action::East if is_open(taxi, Side::East) => next.col = (state.col + 1).min(MAX_COL),
        Action::West if is_open(taxi, Side::West) => next.col = state.col.saturating_sub(1),
        Action::East | Action::West => {}
        Action::Pickup => match LOCS.get(state.passenger) {
            Some(&loc) if loc == taxi => next.passenger = IN_TAXI,
            _ => reward = PENALTY,
        },
        Action::Dropoff => match loc_index(taxi) {
            Some(loc) if state.passenger == IN_TAXI && loc == state.destination => {
                next.passenger = state.destination;
                reward = DELIVERY_REWARD;
                done = true;
            }
            // Passenger let out at the wrong location, the episode goes on
            Some(loc) if state.passenger == IN_TAXI => next.passenger = loc,
            _ => reward = PENALTY,
        },
        Action::Refill if taxi == FUEL_STATION => next.fuel = MAX_FUEL,
        Action::Refill => reward = PENALTY,
    }

    // Driving on an empty tank is penalized but not prevented
    if next.taxi() != taxi {
        if state.fuel == 0 {
            reward = PENALTY;
        }
        next.fuel = state.fuel.saturating_sub(1);
    }

    (next, reward, done)
}

/// Whether an episode may start in `state`: full tank, passenger waiting away from the destination
pub fn is_start_state(state: &TaxiState) -> bool {
    state.fuel == MAX_FUEL && state.passenger < IN_TAXI && state.passenger != state.destination
}

/// Build the full transition table over all 5500 states and 7 actions
///
/// Every state-action pair gets exactly one outcome with probability 1.
pub fn build_transitions() -> TransitionTable {
    let mut table = TransitionTable::new(NUM_STATES, Action::COUNT);

    for s in 0..NUM_STATES {
        let state = decode(s);
        for action in Action::iter() {
            let (next, reward, done) = transition(state, action);
            table.push(
                s,
                action as usize,
                Outcome {
                    prob: 1.0,
                    next_state: next.encode(),
                    reward,
                    done,
                },
            );
        }
    }

    debug!(
        "built taxi fuel transition table: {} states x {} actions",
        table.num_states(),
        table.num_actions()
    );
    table
}

/// Build the initial state distribution, uniform over every [start state](is_start_state)
pub fn build_initial_state_distrib() -> Vec<f64> {
    let mut distrib: Vec<f64> = (0..NUM_STATES)
        .map(|s| if is_start_state(&decode(s)) { 1.0 } else { 0.0 })
        .collect();

    let total: f64 = distrib.iter().sum();
    distrib.iter_mut().for_each(|p| *p /= total);

    debug!("initial state distribution covers {} start states", total);
    distrib
}
