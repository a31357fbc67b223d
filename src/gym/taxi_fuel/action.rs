use strum::{Display, EnumCount, EnumIter, FromRepr, VariantArray};

/// The seven deterministic taxi actions, in table index order
#[derive(
    EnumIter, VariantArray, EnumCount, FromRepr, Display, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum Action {
    South = 0,
    North = 1,
    East = 2,
    West = 3,
    Pickup = 4,
    Dropoff = 5,
    Refill = 6,
}

impl Action {
    /// Whether this action drives the taxi (and may burn fuel)
    pub fn is_move(self) -> bool {
        matches!(self, Self::South | Self::North | Self::East | Self::West)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn indices_round_trip() {
        assert_eq!(Action::COUNT, 7, "Seven actions");
        for (i, action) in Action::iter().enumerate() {
            assert_eq!(action as usize, i, "Variants are in index order");
            assert_eq!(Action::from_repr(i), Some(action), "from_repr inverts the index");
        }
        assert_eq!(Action::from_repr(7), None, "Index 7 is not an action");
    }

    #[test]
    fn display_names() {
        assert_eq!(Action::Dropoff.to_string(), "Dropoff", "Display uses the variant name");
        assert!(Action::West.is_move() && !Action::Refill.is_move(), "Only the four directions move");
    }
}
