/// Direction of travel. Declaration order is the turning cycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Heading {
    Right,
    Up,
    Left,
    Down,
}

/// All headings in cyclic order: a turn moves one slot along this array.
pub const HEADINGS: [Heading; 4] = [Heading::Right, Heading::Up, Heading::Left, Heading::Down];

impl Heading {
    /// Returns this heading's slot in [`HEADINGS`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Up => 1,
            Self::Left => 2,
            Self::Down => 3,
        }
    }

    /// Returns the unit step `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
        }
    }

    /// Returns the heading `turn` slots away in the cycle, wrapping both ways.
    #[must_use]
    pub fn turned(self, turn: i32) -> Self {
        let len = HEADINGS.len() as i32;
        let index = (self.index() as i32 + turn).rem_euclid(len);
        HEADINGS[index as usize]
    }
}

/// Discrete actions, relative to the current heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    TurnRight = 0,
    Straight = 1,
    TurnLeft = 2,
}

impl Action {
    /// Size of the action space.
    pub const COUNT: usize = 3;

    /// Maps a raw action id to an action.
    ///
    /// Ids outside `0..3` are not rejected: they become [`Action::Straight`].
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Self::TurnRight,
            2 => Self::TurnLeft,
            _ => Self::Straight,
        }
    }

    #[must_use]
    pub fn index(self) -> i64 {
        self as i64
    }

    /// Signed shift along [`HEADINGS`] applied by this action.
    #[must_use]
    pub fn turn(self) -> i32 {
        self as i32 - 1
    }
}

impl From<Action> for i64 {
    fn from(action: Action) -> Self {
        action.index()
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Heading, HEADINGS};

    #[test]
    fn headings_follow_cycle_order() {
        for (index, heading) in HEADINGS.iter().enumerate() {
            assert_eq!(heading.index(), index);
        }
    }

    #[test]
    fn four_right_turns_return_to_start() {
        let mut heading = Heading::Right;
        let mut visited = Vec::new();

        for _ in 0..4 {
            heading = heading.turned(Action::TurnRight.turn());
            visited.push(heading);
        }

        assert_eq!(
            visited,
            vec![Heading::Down, Heading::Left, Heading::Up, Heading::Right]
        );
    }

    #[test]
    fn left_turn_from_right_heads_up() {
        assert_eq!(Heading::Right.turned(Action::TurnLeft.turn()), Heading::Up);
        assert_eq!(Heading::Down.turned(Action::TurnLeft.turn()), Heading::Right);
        assert_eq!(Heading::Up.turned(Action::Straight.turn()), Heading::Up);
    }

    #[test]
    fn out_of_range_actions_go_straight() {
        assert_eq!(Action::from_index(0), Action::TurnRight);
        assert_eq!(Action::from_index(1), Action::Straight);
        assert_eq!(Action::from_index(2), Action::TurnLeft);
        assert_eq!(Action::from_index(3), Action::Straight);
        assert_eq!(Action::from_index(-1), Action::Straight);
        assert_eq!(Action::from_index(i64::MAX), Action::Straight);
    }

    #[test]
    fn deltas_are_unit_vectors() {
        assert_eq!(Heading::Right.delta(), (1, 0));
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Down.delta(), (0, 1));
    }
}
