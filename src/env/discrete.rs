use log::{debug, trace};
use rand::{distributions::WeightedIndex, prelude::Distribution, rngs::StdRng, SeedableRng};

/// One possible result of taking an action in a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub prob: f32,
    pub next_state: usize,
    pub reward: f32,
    pub done: bool,
}

/// Complete dynamics of a finite MDP: a list of [`Outcome`]s for every state-action pair
///
/// States and actions are dense indices in `[0, num_states)` and `[0, num_actions)`.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    num_actions: usize,
    outcomes: Vec<Vec<Outcome>>,
}

impl TransitionTable {
    /// Create a table with an empty outcome list for every state-action pair
    pub fn new(num_states: usize, num_actions: usize) -> Self {
        Self {
            num_actions,
            outcomes: vec![Vec::new(); num_states * num_actions],
        }
    }

    /// Record a possible outcome of taking `action` in `state`
    pub fn push(&mut self, state: usize, action: usize, outcome: Outcome) {
        let i = self.index(state, action);
        self.outcomes[i].push(outcome);
    }

    /// Get the possible outcomes of taking `action` in `state`
    pub fn get(&self, state: usize, action: usize) -> &[Outcome] {
        &self.outcomes[self.index(state, action)]
    }

    pub fn num_states(&self) -> usize {
        self.outcomes.len() / self.num_actions
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Iterate over `(state, action, outcomes)` in state-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[Outcome])> + '_ {
        self.outcomes.iter().enumerate().map(|(i, outcomes)| {
            (
                i / self.num_actions,
                i % self.num_actions,
                outcomes.as_slice(),
            )
        })
    }

    fn index(&self, state: usize, action: usize) -> usize {
        assert!(action < self.num_actions, "Invalid action: {}", action);
        state * self.num_actions + action
    }
}

/// A generic driver that steps through a tabular MDP by sampling its [`TransitionTable`]
///
/// Holds the only mutable state of an episode: the current state index and the last action taken.
pub struct DiscreteEnv {
    table: TransitionTable,
    initial_state_distrib: Vec<f64>,
    start: WeightedIndex<f64>,
    rng: StdRng,
    s: usize,
    last_action: Option<usize>,
}

impl DiscreteEnv {
    /// Initialize a driver over `table`, starting episodes from `initial_state_distrib`
    ///
    /// Without a `seed` the sampler is seeded from system entropy.
    ///
    /// **Errors** if the distribution does not cover every state, has no positive mass,
    /// or if some state-action pair has outcome probabilities that do not sum to 1
    pub fn new(
        table: TransitionTable,
        initial_state_distrib: Vec<f64>,
        seed: Option<u64>,
    ) -> Result<Self, String> {
        if initial_state_distrib.len() != table.num_states() {
            return Err(format!(
                "initial state distribution has {} entries, expected {}",
                initial_state_distrib.len(),
                table.num_states()
            ));
        }

        for (state, action, outcomes) in table.iter() {
            let total: f32 = outcomes.iter().map(|o| o.prob).sum();
            if (total - 1.0).abs() > 1e-4 {
                return Err(format!(
                    "outcome probabilities for state {} action {} sum to {}",
                    state, action, total
                ));
            }
        }

        let start = WeightedIndex::new(&initial_state_distrib).map_err(|e| e.to_string())?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            table,
            initial_state_distrib,
            start,
            rng,
            s: 0,
            last_action: None,
        })
    }

    /// Reseed the sampler so that subsequent episodes are reproducible
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Sample a start state and make it current
    pub fn reset(&mut self) -> usize {
        self.s = self.start.sample(&mut self.rng);
        self.last_action = None;
        debug!("reset to state {}", self.s);
        self.s
    }

    /// Take `action` from the current state, sampling one of its outcomes
    pub fn step(&mut self, action: usize) -> Outcome {
        let outcomes = self.table.get(self.s, action);
        let outcome = match outcomes {
            [only] => *only,
            _ => {
                let dist = WeightedIndex::new(outcomes.iter().map(|o| o.prob))
                    .expect("outcome probabilities were validated on construction");
                outcomes[dist.sample(&mut self.rng)]
            }
        };

        trace!("{} --{}--> {:?}", self.s, action, outcome);
        self.s = outcome.next_state;
        self.last_action = Some(action);
        outcome
    }

    /// The current state index
    pub fn state(&self) -> usize {
        self.s
    }

    /// The last action taken, or `None` at the start of an episode
    pub fn last_action(&self) -> Option<usize> {
        self.last_action
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.table
    }

    pub fn initial_state_distrib(&self) -> &[f64] {
        &self.initial_state_distrib
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two states, one action: state 0 moves to 0 or 1 with equal probability, state 1 is absorbing
    fn coin_table() -> TransitionTable {
        let mut table = TransitionTable::new(2, 1);
        for next_state in 0..2 {
            table.push(
                0,
                0,
                Outcome {
                    prob: 0.5,
                    next_state,
                    reward: next_state as f32,
                    done: next_state == 1,
                },
            );
        }
        table.push(
            1,
            0,
            Outcome {
                prob: 1.0,
                next_state: 1,
                reward: 0.0,
                done: true,
            },
        );
        table
    }

    #[test]
    fn table_indexing() {
        let table = coin_table();
        assert_eq!(table.num_states(), 2, "State count is correct");
        assert_eq!(table.num_actions(), 1, "Action count is correct");
        assert_eq!(table.get(0, 0).len(), 2, "Stochastic pair has two outcomes");
        assert_eq!(table.iter().count(), 2, "Iterates over every pair");
    }

    #[test]
    fn rejects_bad_distributions() {
        assert!(
            DiscreteEnv::new(coin_table(), vec![1.0], None).is_err(),
            "Wrong length is rejected"
        );
        assert!(
            DiscreteEnv::new(coin_table(), vec![0.0, 0.0], None).is_err(),
            "Zero mass is rejected"
        );

        let mut table = coin_table();
        table.push(
            1,
            0,
            Outcome {
                prob: 1.0,
                next_state: 0,
                reward: 0.0,
                done: false,
            },
        );
        assert!(
            DiscreteEnv::new(table, vec![1.0, 0.0], None).is_err(),
            "Outcome probabilities over 1 are rejected"
        );
    }

    #[test]
    fn driver_follows_table() {
        let mut env = DiscreteEnv::new(coin_table(), vec![1.0, 0.0], Some(0)).unwrap();
        assert_eq!(env.reset(), 0, "Only state 0 has start mass");
        assert_eq!(env.last_action(), None, "No action after reset");

        let mut outcome = env.step(0);
        while !outcome.done {
            assert_eq!(env.state(), 0, "Non-terminal outcome stays in state 0");
            outcome = env.step(0);
        }
        assert_eq!(env.state(), 1, "Terminal outcome reaches state 1");
        assert_eq!(env.last_action(), Some(0), "Last action is recorded");
    }

    #[test]
    fn seeding_is_reproducible() {
        let distrib = vec![0.25; 4];
        let mut table = TransitionTable::new(4, 1);
        for s in 0..4 {
            table.push(
                s,
                0,
                Outcome {
                    prob: 1.0,
                    next_state: s,
                    reward: 0.0,
                    done: false,
                },
            );
        }
        let mut env = DiscreteEnv::new(table, distrib, None).unwrap();

        env.seed(42);
        let first: Vec<_> = (0..20).map(|_| env.reset()).collect();
        env.seed(42);
        let second: Vec<_> = (0..20).map(|_| env.reset()).collect();
        assert_eq!(first, second, "Same seed gives the same start states");
    }
}
