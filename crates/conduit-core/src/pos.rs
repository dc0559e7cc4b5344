//! Lattice positions, the six axis directions, and direction bitmasks.
//!
//! # Coordinate System
//!
//! Integer triples `(x, y, z)` on the unbounded cubic lattice. Each
//! position has exactly six neighbour slots, one per [`Direction`], and
//! a link between two positions always runs along one of them.
//!
//! # Direction Ids
//!
//! Directions carry stable ids `0..6`. The id is the bit index used by
//! [`DirectionSet`], and that bitmask is also the persisted link encoding,
//! so the ids must never be renumbered.

use smallvec::SmallVec;
use std::fmt;

/// A position on the 3D integer lattice.
///
/// The derived `Ord` is lexicographic on `(x, y, z)`. It carries no
/// spatial meaning and exists so callers can sort positions into a
/// deterministic order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl Pos {
    /// The lattice origin.
    pub const ORIGIN: Pos = Pos { x: 0, y: 0, z: 0 };

    /// Create a position from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent position one step along `dir`.
    ///
    /// Coordinates wrap on `i32` overflow; the lattice is treated as
    /// unbounded and positions that far out are never attached in practice.
    pub fn offset(self, dir: Direction) -> Self {
        self.offset_by(dir, 1)
    }

    /// The position `n` steps along `dir`.
    pub fn offset_by(self, dir: Direction, n: i32) -> Self {
        let (dx, dy, dz) = dir.delta();
        Self {
            x: self.x.wrapping_add(dx.wrapping_mul(n)),
            y: self.y.wrapping_add(dy.wrapping_mul(n)),
            z: self.z.wrapping_add(dz.wrapping_mul(n)),
        }
    }

    /// All six neighbours, paired with the direction that reaches them,
    /// in direction-id order.
    pub fn neighbours(self) -> SmallVec<[(Direction, Pos); 6]> {
        Direction::ALL.iter().map(|&d| (d, self.offset(d))).collect()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six axis-aligned directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Negative y.
    Down = 0,
    /// Positive y.
    Up = 1,
    /// Negative z.
    North = 2,
    /// Positive z.
    South = 3,
    /// Negative x.
    West = 4,
    /// Positive x.
    East = 5,
}

impl Direction {
    /// Every direction, in id order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Stable id in `0..6`.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a direction by id. Returns `None` for ids `>= 6`.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// The direction pointing the other way along the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Unit coordinate delta `(dx, dy, dz)`.
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Lowercase name (`"down"`, `"up"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of directions packed into a `u8` (`bit = 1 << id`).
///
/// This is both the in-memory link-table entry for one position and the
/// persisted `link_bitmask`. Bits 6 and 7 are always clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Mask of the six valid bits.
    pub const MASK: u8 = 0b0011_1111;

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set of all six directions.
    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// Rebuild a set from raw bits. Returns `None` if bit 6 or 7 is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::MASK != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Raw bitmask.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether `dir` is in the set.
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & (1 << dir.id()) != 0
    }

    /// Add `dir`. Returns `true` if it was not already present.
    pub fn insert(&mut self, dir: Direction) -> bool {
        let had = self.contains(dir);
        self.0 |= 1 << dir.id();
        !had
    }

    /// Remove `dir`. Returns `true` if it was present.
    pub fn remove(&mut self, dir: Direction) -> bool {
        let had = self.contains(dir);
        self.0 &= !(1 << dir.id());
        had
    }

    /// Number of directions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in id order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, d) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(d.name())?;
        }
        f.write_str("}")
    }
}
