use rand::{seq::SliceRandom, Rng};
use std::fmt;

use crate::error::InputError;
use crate::moves::Move;

/// Number of tile slots, five per row.
pub const SLOTS: usize = 10;
pub const ROW_LEN: usize = 5;

/// Width of the legacy raw layout: ten tiles followed by two wheel fields.
pub const RAW_LEN: usize = SLOTS + 2;

const NIBBLE: u32 = 4;
const ARRANGEMENT_BITS: u32 = NIBBLE * SLOTS as u32;
const ARRANGEMENT_MASK: u64 = (1 << ARRANGEMENT_BITS) - 1;

// Annotation bits sit above the arrangement, heuristic highest so that the
// raw integer orders by heuristic, then depth, then arrangement.
const DEPTH_SHIFT: u32 = ARRANGEMENT_BITS;
const DEPTH_MASK: u64 = 0xFFFF;
const HEURISTIC_SHIFT: u32 = 56;
const HEURISTIC_MASK: u64 = 0xFF;

const fn pack_tiles(tiles: &[u8; SLOTS]) -> u64 {
    let mut packed = 0;
    let mut slot = 0;
    while slot < SLOTS {
        packed |= ((tiles[slot] & 0x0F) as u64) << (NIBBLE * slot as u32);
        slot += 1;
    }
    packed
}

/// Ten distinct tile values, one per slot. Slots 0..5 are the top row and
/// slots 5..10 the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arrangement([u8; SLOTS]);

impl Arrangement {
    pub const SOLVED: Self = Self([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    /// The scramble used when no puzzle is supplied.
    pub const DEFAULT_SCRAMBLE: Self = Self([1, 2, 0, 6, 7, 5, 9, 3, 4, 8]);

    pub fn new(tiles: [u8; SLOTS]) -> Result<Self, InputError> {
        check_bijection(&tiles)?;
        Ok(Self(tiles))
    }

    pub fn tiles(&self) -> &[u8; SLOTS] {
        &self.0
    }

    pub fn top(&self) -> &[u8] {
        &self.0[..ROW_LEN]
    }

    pub fn bottom(&self) -> &[u8] {
        &self.0[ROW_LEN..]
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    pub fn key(&self) -> ArrangementKey {
        ArrangementKey(pack_tiles(&self.0))
    }

    pub fn apply(&self, movement: Move) -> (Self, Alignment) {
        let (key, alignment) = movement.apply(self.key());
        (key.arrangement(), alignment)
    }

    /// Scrambles the solved arrangement with a random walk of `moves` flips.
    /// Every flip undoes itself, so the walk never repeats the previous one.
    pub fn scrambled<R: Rng + ?Sized>(rng: &mut R, moves: usize) -> Self {
        let mut arrangement = Self::SOLVED;
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let choices: Vec<Move> = Move::ALL
                .iter()
                .copied()
                .filter(|&candidate| Some(candidate) != last)
                .collect();

            if let Some(&movement) = choices.choose(rng) {
                arrangement = arrangement.apply(movement).0;
                last = Some(movement);
            }
        }

        arrangement
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.top() {
            write!(f, "{}", value)?;
        }
        write!(f, "-")?;
        for value in self.bottom() {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Checks that `tiles` holds every value 0..=9 exactly once.
pub(crate) fn check_bijection(tiles: &[u8]) -> Result<(), InputError> {
    let mut seen = [false; SLOTS];

    for &value in tiles {
        let slot = seen
            .get_mut(value as usize)
            .ok_or(InputError::OutOfRange(value))?;
        if *slot {
            return Err(InputError::DuplicateDigit(value));
        }
        *slot = true;
    }

    match seen.iter().position(|&present| !present) {
        Some(missing) => Err(InputError::MissingDigit(missing as u8)),
        None => Ok(()),
    }
}

/// How far each row is slid out of the centred position, 0..=2 per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    top: u8,
    bottom: u8,
}

impl Alignment {
    pub const MAX_SHIFT: u8 = 2;

    /// Both rows centred; the alignment every search starts from.
    pub const INITIAL: Self = Self { top: 1, bottom: 1 };

    pub const fn new(top: u8, bottom: u8) -> Self {
        assert!(top <= Self::MAX_SHIFT && bottom <= Self::MAX_SHIFT);
        Self { top, bottom }
    }

    pub fn top(self) -> u8 {
        self.top
    }

    pub fn bottom(self) -> u8 {
        self.bottom
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top+{} bottom+{}", self.top, self.bottom)
    }
}

/// The annotation-free identity of a state: ten 4-bit tile values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrangementKey(u64);

impl ArrangementKey {
    pub const GOAL: Self = Self(pack_tiles(&Arrangement::SOLVED.0));

    pub(crate) fn from_tiles(tiles: &[u8; SLOTS]) -> Self {
        Self(pack_tiles(tiles))
    }

    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw & ARRANGEMENT_MASK)
    }

    pub fn value_at(self, slot: usize) -> u8 {
        ((self.0 >> (NIBBLE * slot as u32)) & 0x0F) as u8
    }

    pub fn is_goal(self) -> bool {
        self == Self::GOAL
    }

    pub fn arrangement(self) -> Arrangement {
        Arrangement(std::array::from_fn(|slot| self.value_at(slot)))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// An arrangement plus the depth and heuristic annotations used to order
/// the frontier. Equality looks at the arrangement only.
#[derive(Debug, Clone, Copy)]
pub struct PackedState(u64);

impl PackedState {
    pub fn pack(arrangement: &Arrangement) -> Self {
        Self(arrangement.key().0)
    }

    /// Packs the legacy twelve-byte layout. The two trailing wheel fields are
    /// not stored; alignment travels separately.
    pub fn pack_raw(raw: &[u8; RAW_LEN]) -> Self {
        let mut tiles = [0; SLOTS];
        tiles.copy_from_slice(&raw[..SLOTS]);
        assert!(
            check_bijection(&tiles).is_ok(),
            "raw arrangement {:?} is not a permutation of 0..=9",
            tiles
        );
        Self(pack_tiles(&tiles))
    }

    pub fn key(self) -> ArrangementKey {
        ArrangementKey::from_raw(self.0)
    }

    pub fn with_depth(self, depth: u16) -> Self {
        let cleared = self.0 & !(DEPTH_MASK << DEPTH_SHIFT);
        Self(cleared | (u64::from(depth) << DEPTH_SHIFT))
    }

    pub fn with_heuristic(self, heuristic: u8) -> Self {
        let cleared = self.0 & !(HEURISTIC_MASK << HEURISTIC_SHIFT);
        Self(cleared | (u64::from(heuristic) << HEURISTIC_SHIFT))
    }

    pub fn depth(self) -> u16 {
        ((self.0 >> DEPTH_SHIFT) & DEPTH_MASK) as u16
    }

    pub fn heuristic(self) -> u8 {
        ((self.0 >> HEURISTIC_SHIFT) & HEURISTIC_MASK) as u8
    }

    /// The full integer, annotations included. Frontier order is this value.
    pub fn priority(self) -> u64 {
        self.0
    }
}

impl From<ArrangementKey> for PackedState {
    fn from(key: ArrangementKey) -> Self {
        Self(key.0)
    }
}

impl PartialEq for PackedState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PackedState {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn solved_arrangement_packs_to_goal() {
        let key = PackedState::pack(&Arrangement::SOLVED).key();
        assert!(key.is_goal());
        assert_eq!(key.raw(), 0x98_7654_3210);
        assert!(!Arrangement::DEFAULT_SCRAMBLE.key().is_goal());
    }

    #[test]
    fn annotations_do_not_touch_the_arrangement() {
        let state = PackedState::pack(&Arrangement::DEFAULT_SCRAMBLE)
            .with_depth(513)
            .with_heuristic(17);

        assert_eq!(state.depth(), 513);
        assert_eq!(state.heuristic(), 17);
        assert_eq!(state.key(), Arrangement::DEFAULT_SCRAMBLE.key());
        assert_eq!(state, PackedState::pack(&Arrangement::DEFAULT_SCRAMBLE));

        let rewritten = state.with_depth(2).with_heuristic(40);
        assert_eq!(rewritten.depth(), 2);
        assert_eq!(rewritten.heuristic(), 40);
        assert_eq!(rewritten.key(), state.key());
    }

    #[test]
    fn priority_orders_heuristic_before_depth() {
        let base = PackedState::pack(&Arrangement::SOLVED);
        let shallow_far = base.with_depth(1).with_heuristic(9);
        let deep_near = base.with_depth(300).with_heuristic(8);
        assert!(deep_near.priority() < shallow_far.priority());

        let shallower = base.with_depth(3).with_heuristic(8);
        assert!(shallower.priority() < deep_near.priority());
    }

    #[test]
    fn key_round_trips_to_arrangement() {
        let key = Arrangement::DEFAULT_SCRAMBLE.key();
        assert_eq!(key.arrangement(), Arrangement::DEFAULT_SCRAMBLE);
        assert_eq!(key.value_at(0), 1);
        assert_eq!(key.value_at(9), 8);
    }

    #[test]
    fn pack_raw_ignores_wheel_fields() {
        let raw = [1, 2, 0, 6, 7, 5, 9, 3, 4, 8, 1, 2];
        assert_eq!(
            PackedState::pack_raw(&raw).key(),
            Arrangement::DEFAULT_SCRAMBLE.key()
        );
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn pack_raw_rejects_duplicates() {
        PackedState::pack_raw(&[1, 1, 0, 6, 7, 5, 9, 3, 4, 8, 1, 1]);
    }

    #[test]
    fn new_validates_bijection() {
        assert_eq!(
            Arrangement::new([0, 1, 2, 3, 4, 5, 6, 7, 8, 8]),
            Err(InputError::DuplicateDigit(8))
        );
        assert_eq!(
            Arrangement::new([0, 1, 2, 3, 4, 5, 6, 7, 8, 12]),
            Err(InputError::OutOfRange(12))
        );
        assert_eq!(
            Arrangement::new([1, 2, 0, 6, 7, 5, 9, 3, 4, 8]),
            Ok(Arrangement::DEFAULT_SCRAMBLE)
        );
    }

    #[test]
    fn display_uses_puzzle_notation() {
        assert_eq!(Arrangement::DEFAULT_SCRAMBLE.to_string(), "12067-59348");
        assert_eq!(Arrangement::SOLVED.to_string(), "01234-56789");
    }

    #[test]
    fn scrambled_stays_a_bijection() {
        let mut rng = StdRng::seed_from_u64(7);
        for moves in [0, 1, 5, 40] {
            let arrangement = Arrangement::scrambled(&mut rng, moves);
            assert!(check_bijection(arrangement.tiles()).is_ok());
        }
        assert!(Arrangement::scrambled(&mut rng, 0).is_solved());
        assert!(!Arrangement::scrambled(&mut rng, 1).is_solved());
    }
}
