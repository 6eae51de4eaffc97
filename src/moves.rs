use std::fmt;

use crate::puzzle::{Alignment, ArrangementKey, SLOTS};

/// One flip: for each slot, the slot its tile lands in, and where the rows
/// were slid to make the flip.
struct Transition {
    destinations: [u8; SLOTS],
    alignment: Alignment,
}

// Slots:
//   a b c d e    0 1 2 3 4
//   f g h i j    5 6 7 8 9
//
// The wheel covers the three middle columns of the seven-wide frame; the
// comment above each entry shows the frame once the rows are slid in and
// the wheel has turned.
#[rustfmt::skip]
const TRANSITIONS: [Transition; Move::COUNT] = [
    // - -  f g h  d e
    // - -  a b c  i j
    Transition { destinations: [5, 6, 7, 3, 4, 0, 1, 2, 8, 9], alignment: Alignment::new(2, 2) },
    // - -  g h i  d e
    // - f  a b c  j -
    Transition { destinations: [6, 7, 8, 3, 4, 5, 0, 1, 2, 9], alignment: Alignment::new(2, 1) },
    // - -  h i j  d e
    // f g  a b c  - -
    Transition { destinations: [7, 8, 9, 3, 4, 5, 6, 0, 1, 2], alignment: Alignment::new(2, 0) },
    // - a  f g h  e -
    // - -  b c d  i j
    Transition { destinations: [0, 5, 6, 7, 4, 1, 2, 3, 8, 9], alignment: Alignment::new(1, 2) },
    // - a  g h i  e -
    // - f  b c d  j -
    Transition { destinations: [0, 6, 7, 8, 4, 5, 1, 2, 3, 9], alignment: Alignment::new(1, 1) },
    // - a  h i j  e -
    // f g  b c d  - -
    Transition { destinations: [0, 7, 8, 9, 4, 5, 6, 1, 2, 3], alignment: Alignment::new(1, 0) },
    // a b  f g h  - -
    // - -  c d e  i j
    Transition { destinations: [0, 1, 5, 6, 7, 2, 3, 4, 8, 9], alignment: Alignment::new(0, 2) },
    // a b  g h i  - -
    // - f  c d e  j -
    Transition { destinations: [0, 1, 6, 7, 8, 5, 2, 3, 4, 9], alignment: Alignment::new(0, 1) },
    // a b  h i j  - -
    // f g  c d e  - -
    Transition { destinations: [0, 1, 7, 8, 9, 5, 6, 2, 3, 4], alignment: Alignment::new(0, 0) },
];

/// Index into the fixed table of nine flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u8);

impl Move {
    pub const COUNT: usize = 9;

    pub const ALL: [Move; Move::COUNT] = [
        Move(0),
        Move(1),
        Move(2),
        Move(3),
        Move(4),
        Move(5),
        Move(6),
        Move(7),
        Move(8),
    ];

    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn transition(self) -> &'static Transition {
        &TRANSITIONS[self.index()]
    }

    pub fn destinations(self) -> &'static [u8; SLOTS] {
        &self.transition().destinations
    }

    /// The alignment the rows are left in after this flip.
    pub fn alignment(self) -> Alignment {
        self.transition().alignment
    }

    /// Every flip leaves a distinct alignment, so the flip that produced a
    /// path node can be read back from it.
    pub fn from_alignment(alignment: Alignment) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|movement| movement.alignment() == alignment)
    }

    /// Relocates every tile to its destination slot. The result carries no
    /// annotations.
    pub fn apply(self, key: ArrangementKey) -> (ArrangementKey, Alignment) {
        let destinations = self.destinations();
        let mut tiles = [0; SLOTS];
        for (slot, &destination) in destinations.iter().enumerate() {
            tiles[destination as usize] = key.value_at(slot);
        }
        (ArrangementKey::from_tiles(&tiles), self.alignment())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flip {} ({})", self.0, self.alignment())
    }
}
