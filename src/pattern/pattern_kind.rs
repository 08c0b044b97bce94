use std::fmt;
use std::ops::{AddAssign, Index};

/// Tactical line shapes, most severe first.
///
/// Signatures are written over a three-symbol alphabet: `1` is an own stone,
/// `0` an empty cell and `2` an opponent stone or the board edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PatternKind {
    Five,
    OpenFour,
    ClosedFour,
    GappedFour,
    OpenThree,
    ClosedThree,
    GappedThree,
    OpenTwo,
    ClosedTwo,
}

pub const PATTERN_KIND_COUNT: usize = 9;

impl PatternKind {
    pub const ALL: [PatternKind; PATTERN_KIND_COUNT] = [
        PatternKind::Five,
        PatternKind::OpenFour,
        PatternKind::ClosedFour,
        PatternKind::GappedFour,
        PatternKind::OpenThree,
        PatternKind::ClosedThree,
        PatternKind::GappedThree,
        PatternKind::OpenTwo,
        PatternKind::ClosedTwo,
    ];

    pub fn weight(self) -> i32 {
        match self {
            PatternKind::Five => 100_000,
            PatternKind::OpenFour => 10_000,
            PatternKind::ClosedFour => 5_000,
            PatternKind::GappedFour => 4_000,
            PatternKind::OpenThree => 1_000,
            PatternKind::ClosedThree => 500,
            PatternKind::GappedThree => 300,
            PatternKind::OpenTwo => 100,
            PatternKind::ClosedTwo => 50,
        }
    }

    pub fn signatures(self) -> &'static [&'static str] {
        match self {
            PatternKind::Five => &["11111"],
            PatternKind::OpenFour => &["011110"],
            PatternKind::ClosedFour => &["011112", "211110"],
            PatternKind::GappedFour => &["11011", "10111", "11101"],
            PatternKind::OpenThree => &["01110"],
            PatternKind::ClosedThree => &["01112", "21110"],
            PatternKind::GappedThree => &["1011", "1101"],
            PatternKind::OpenTwo => &["0110"],
            PatternKind::ClosedTwo => &["0112", "2110"],
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternKind::Five => "five",
            PatternKind::OpenFour => "open four",
            PatternKind::ClosedFour => "closed four",
            PatternKind::GappedFour => "gapped four",
            PatternKind::OpenThree => "open three",
            PatternKind::ClosedThree => "closed three",
            PatternKind::GappedThree => "gapped three",
            PatternKind::OpenTwo => "open two",
            PatternKind::ClosedTwo => "closed two",
        };
        write!(f, "{}", name)
    }
}

/// Occurrence count per pattern kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PatternCounts {
    counts: [u32; PATTERN_KIND_COUNT],
}

impl PatternCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: PatternKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn add(&mut self, kind: PatternKind, count: u32) {
        self.counts[kind.index()] += count;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatternKind, u32)> + '_ {
        (0..PATTERN_KIND_COUNT).map(move |i| (PatternKind::ALL[i], self.counts[i]))
    }

    /// Sum of `weight * count` over all kinds.
    pub fn weighted_score(&self) -> i32 {
        self.iter()
            .map(|(kind, count)| kind.weight() * count as i32)
            .sum()
    }
}

impl Index<PatternKind> for PatternCounts {
    type Output = u32;

    fn index(&self, kind: PatternKind) -> &u32 {
        &self.counts[kind.index()]
    }
}

impl AddAssign for PatternCounts {
    fn add_assign(&mut self, other: Self) {
        for (count, other_count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += other_count;
        }
    }
}
