use std::{
    collections::BTreeMap,
    ops::{Deref, DerefMut},
};

/// Named scalar metrics accumulated by an environment over one episode
///
/// Dereferences to the underlying map, so entries can be updated in place:
/// ```
/// # use taxi_fuel::env::Report;
/// let mut report = Report::new(vec!["steps"]);
/// report.entry("steps").and_modify(|x| *x += 1.0);
/// assert_eq!(report["steps"], 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    keys: Vec<&'static str>,
    values: BTreeMap<&'static str, f64>,
}

impl Report {
    /// Create a report tracking the given metrics, all starting at zero
    pub fn new(keys: Vec<&'static str>) -> Self {
        let values = keys.iter().map(|&k| (k, 0.0)).collect();
        Self { keys, values }
    }

    /// The tracked metric names, in the order they were declared
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// Take the current values, resetting every metric to zero
    pub fn take(&mut self) -> BTreeMap<&'static str, f64> {
        let fresh = self.keys.iter().map(|&k| (k, 0.0)).collect();
        std::mem::replace(&mut self.values, fresh)
    }
}

impl Deref for Report {
    type Target = BTreeMap<&'static str, f64>;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl DerefMut for Report {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_resets_values() {
        let mut report = Report::new(vec!["reward", "steps"]);
        report.entry("reward").and_modify(|x| *x -= 1.0);
        report.entry("steps").and_modify(|x| *x += 1.0);

        let taken = report.take();
        assert_eq!(taken["reward"], -1.0, "Taken reward is correct");
        assert_eq!(taken["steps"], 1.0, "Taken steps is correct");
        assert_eq!(report["reward"], 0.0, "Reward reset after take");
        assert_eq!(report.keys(), &["reward", "steps"], "Keys keep their order");
    }
}
