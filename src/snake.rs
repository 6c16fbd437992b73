use std::collections::VecDeque;

use crate::action::Heading;
use crate::config::GridSize;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring position one step along `heading`, unwrapped.
    #[must_use]
    pub fn stepped(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One element of the snake body.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Segment {
    Placed(Position),
    /// Growth earned by eating, not on the board yet. It is always the
    /// tail and gets dropped by the next move, which keeps the new length.
    PendingGrowth,
}

impl Segment {
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Placed(position) => Some(position),
            Self::PendingGrowth => None,
        }
    }
}

/// Snake body, ordered tail first and head last.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Segment>,
}

impl Snake {
    /// Creates a horizontal snake of `len` cells whose tail sits at `tail`
    /// and whose head points along increasing x.
    #[must_use]
    pub fn horizontal(tail: Position, len: u16) -> Self {
        let body = (0..i32::from(len))
            .map(|offset| Segment::Placed(Position::new(tail.x + offset, tail.y)))
            .collect();
        Self { body }
    }

    /// Creates a snake from explicit cells, tail first.
    ///
    /// # Panics
    ///
    /// Panics when `cells` is empty.
    #[must_use]
    pub fn from_cells(cells: Vec<Position>) -> Self {
        assert!(!cells.is_empty(), "snake needs at least one cell");
        Self {
            body: cells.into_iter().map(Segment::Placed).collect(),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        match self.body.back() {
            Some(Segment::Placed(position)) => *position,
            _ => unreachable!("snake head is always a placed segment"),
        }
    }

    /// Moves one cell: the tail segment is dropped and `new_head` appended.
    pub fn advance(&mut self, new_head: Position) {
        let _ = self.body.pop_front();
        self.body.push_back(Segment::Placed(new_head));
    }

    /// Adds a pending segment behind the tail.
    pub fn grow(&mut self) {
        self.body.push_front(Segment::PendingGrowth);
    }

    /// Returns true if any placed segment, tail included, occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body
            .iter()
            .any(|segment| *segment == Segment::Placed(position))
    }

    /// Returns the segment count, pending growth included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    /// Iterates over the cells the snake covers on the board, tail to head.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().filter_map(|segment| segment.position())
    }
}
