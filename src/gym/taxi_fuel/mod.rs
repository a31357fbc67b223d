use std::io::{self, Write};

use rand::seq::SliceRandom;
use strum::VariantArray;

use crate::env::{
    DiscreteActionSpace, DiscreteEnv, DiscreteStateSpace, Environment, Report, TransitionTable,
};

pub mod action;
pub mod codec;
pub mod grid;
pub mod model;
pub mod render;

pub use action::Action;
pub use codec::{decode, encode, TaxiState, IN_TAXI, MAX_FUEL, NUM_STATES};
pub use render::{Frame, RenderMode};

/// Configuration for the [`TaxiFuel`] environment
#[derive(Debug, Clone, Default)]
pub struct TaxiFuelConfig {
    /// Seed for start state sampling, drawn from entropy if `None`
    pub seed: Option<u64>,
}

/// The taxi problem with a fuel tank, after Dietterich's MAXQ taxi domain
///
/// A taxi on a walled 5x5 grid picks up a passenger at one of four named locations
/// R, G, Y and B and drops them off at another. Every move burns one unit of fuel
/// from a tank of 10, refilled at the fuel station F. Episodes start with a full
/// tank, the taxi anywhere, and the passenger waiting away from their destination.
///
/// The whole MDP is built once on construction: 5500 states, 7 actions, one
/// deterministic outcome per state-action pair. States are packed indices, see [`codec`].
///
/// Rewards:
/// - `-1` for every action
/// - `-10` for an illegal pickup, dropoff or refill, or for moving on an empty tank
/// - `+20` for delivering the passenger, which ends the episode
pub struct TaxiFuel {
    env: DiscreteEnv,
    done: bool,
    pub report: Report,
}

impl TaxiFuel {
    pub fn new() -> Self {
        Self::with_config(TaxiFuelConfig::default())
    }

    pub fn with_config(config: TaxiFuelConfig) -> Self {
        let env = DiscreteEnv::new(
            model::build_transitions(),
            model::build_initial_state_distrib(),
            config.seed,
        )
        .expect("taxi fuel model is a complete deterministic MDP with start states");

        Self {
            env,
            done: false,
            report: Report::new(vec!["reward", "steps"]),
        }
    }

    /// Reseed start state sampling
    pub fn seed(&mut self, seed: u64) {
        self.env.seed(seed);
    }

    /// The current packed state
    pub fn state(&self) -> usize {
        self.env.state()
    }

    /// The current state, decoded
    pub fn taxi_state(&self) -> TaxiState {
        decode(self.env.state())
    }

    pub fn last_action(&self) -> Option<Action> {
        self.env.last_action().and_then(Action::from_repr)
    }

    pub fn transitions(&self) -> &TransitionTable {
        self.env.transitions()
    }

    pub fn initial_state_distrib(&self) -> &[f64] {
        self.env.initial_state_distrib()
    }

    /// Draw the grid for the current state and the last action taken
    ///
    /// **Returns** the text in [`RenderMode::Ansi`], `None` after writing it to stdout in [`RenderMode::Human`]
    pub fn render(&self, mode: RenderMode) -> io::Result<Option<String>> {
        let text = Frame::new(self.taxi_state(), self.last_action()).to_ansi();
        match mode {
            RenderMode::Human => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()?;
                Ok(None)
            }
            RenderMode::Ansi => Ok(Some(text)),
        }
    }
}

impl Default for TaxiFuel {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for TaxiFuel {
    type State = usize;
    type Action = Action;

    fn is_active(&self) -> bool {
        !self.done
    }

    fn random_action(&self) -> Self::Action {
        *Action::VARIANTS
            .choose(&mut rand::thread_rng())
            .expect("Action set is not empty")
    }

    fn step(&mut self, action: Self::Action) -> (Option<Self::State>, f32) {
        self.report.entry("steps").and_modify(|x| *x += 1.0);

        let outcome = self.env.step(action as usize);
        self.done = outcome.done;

        self.report
            .entry("reward")
            .and_modify(|x| *x += outcome.reward as f64);

        let next_state = (!outcome.done).then_some(outcome.next_state);
        (next_state, outcome.reward)
    }

    fn reset(&mut self) -> Self::State {
        self.done = false;
        self.env.reset()
    }
}

impl DiscreteActionSpace for TaxiFuel {
    fn actions(&self) -> Vec<Self::Action> {
        Action::VARIANTS.to_vec()
    }
}

impl DiscreteStateSpace for TaxiFuel {
    fn states(&self) -> Vec<Self::State> {
        (0..NUM_STATES).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxi_fuel_functional() {
        let mut env = TaxiFuel::with_config(TaxiFuelConfig { seed: Some(3) });
        assert_eq!(env.actions().len(), 7, "Seven actions");
        assert_eq!(env.states().len(), NUM_STATES, "5500 states");

        let state = decode(env.reset());
        assert_eq!(state.fuel, MAX_FUEL, "Episode starts with a full tank");
        assert!(state.passenger < IN_TAXI, "Passenger starts outside the taxi");
        assert_ne!(state.passenger, state.destination, "Passenger starts away from the destination");
        assert_eq!(env.last_action(), None, "No action after reset");
        assert!(env.is_active(), "Fresh episode is active");

        let (next, reward) = env.step(Action::Refill);
        assert_eq!(env.last_action(), Some(Action::Refill), "Last action recorded");
        assert_eq!(next, Some(env.state()), "Step returns the current state");
        assert!(reward == -1.0 || reward == -10.0, "Refill reward is a step or a penalty");

        let report = env.report.take();
        assert_eq!(report["steps"], 1.0, "Report steps correct");
        assert_eq!(report["reward"], reward as f64, "Report reward correct");
    }

    #[test]
    fn seeded_resets_repeat() {
        let mut env = TaxiFuel::with_config(TaxiFuelConfig { seed: Some(11) });
        let first: Vec<_> = (0..10).map(|_| env.reset()).collect();
        env.seed(11);
        let second: Vec<_> = (0..10).map(|_| env.reset()).collect();
        assert_eq!(first, second, "Reseeding replays start states");
    }

    #[test]
    fn render_captures_text() {
        let mut env = TaxiFuel::new();
        env.reset();
        let text = env.render(RenderMode::Ansi).unwrap().expect("Ansi mode returns text");
        assert!(text.ends_with("+---------+\n\n"), "No caption before the first step");

        env.step(Action::North);
        let text = env.render(RenderMode::Ansi).unwrap().unwrap();
        assert!(text.ends_with("  (North)\n"), "Caption names the last action");

        assert_eq!(env.render(RenderMode::Human).unwrap(), None, "Human mode returns nothing");
    }
}
