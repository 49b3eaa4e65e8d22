//! Resumable sorting algorithms
//!
//! Each algorithm is an explicit state machine holding its loop indices as
//! plain fields. A call to [`StepGenerator::advance`] runs the algorithm until
//! it has performed exactly one mutation of the data, then suspends and
//! reports which indices it touched. This is what lets the interaction loop
//! render one frame per swap.
//!
//! ```text
//! Idle ──advance──▶ Suspended ──advance──▶ Suspended ... ──advance──▶ Exhausted
//! ```
//!
//! An exhausted generator keeps answering [`Step::Done`] and never touches the
//! data again.
//!
//! # Modules
//!
//! - [`bubble`]: one adjacent swap per step
//! - [`insertion`]: one shift-and-insert micro-step per step

pub mod bubble;
pub mod insertion;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;

use rustc_hash::FxHashMap;

/// Target ordering of a sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Whether `left` must move past `right` for the ordering to hold.
    ///
    /// Equal values are never out of order.
    pub fn out_of_order(self, left: i32, right: i32) -> bool {
        match self {
            Direction::Ascending => left > right,
            Direction::Descending => left < right,
        }
    }

    /// Whether `values` already satisfies this ordering
    pub fn is_sorted(self, values: &[i32]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

/// How an index was touched by the last step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Where the moved element landed (drawn green)
    Destination,
    /// Where the moved element came from (drawn red)
    Source,
}

/// Per-index annotations for the frame following a step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    marks: FxHashMap<usize, Mark>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight for a single move from `source` to `destination`
    pub fn pair(destination: usize, source: usize) -> Self {
        let mut highlights = Self::new();
        highlights.insert(destination, Mark::Destination);
        highlights.insert(source, Mark::Source);
        highlights
    }

    pub fn insert(&mut self, index: usize, mark: Mark) {
        self.marks.insert(index, mark);
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.marks.get(&index).copied()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }
}

/// Outcome of one resumption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// One mutation was applied; more may follow
    Moved(Highlights),
    /// The data is ordered; nothing was touched
    Done,
}

impl Step {
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

/// A sorting algorithm that can be suspended after every mutating step
pub trait StepGenerator {
    /// Resume until one mutation has been applied to `data`, or until the
    /// data is fully ordered.
    ///
    /// `data` must be the same slice (same length) the generator was created
    /// for. A shorter slice exhausts the generator.
    fn advance(&mut self, data: &mut [i32]) -> Step;

    /// Whether the generator has reported [`Step::Done`]
    fn is_exhausted(&self) -> bool;

    /// Number of mutating steps performed so far
    fn steps_taken(&self) -> usize;

    /// Direction captured at construction
    fn direction(&self) -> Direction;
}

/// Available algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }

    /// Build a fresh run over `data`, ordering towards `direction`
    pub fn start(self, data: &[i32], direction: Direction) -> SortRun {
        match self {
            Algorithm::Bubble => SortRun::Bubble(BubbleSort::new(data, direction)),
            Algorithm::Insertion => SortRun::Insertion(InsertionSort::new(data, direction)),
        }
    }
}

/// The in-flight generator of whichever algorithm was selected
#[derive(Debug, Clone)]
pub enum SortRun {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
}

impl SortRun {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SortRun::Bubble(_) => Algorithm::Bubble,
            SortRun::Insertion(_) => Algorithm::Insertion,
        }
    }

    /// Advance until exhausted, returning the number of steps taken by this call
    pub fn run_to_end(&mut self, data: &mut [i32]) -> usize {
        let mut steps = 0;
        while !self.advance(data).is_done() {
            steps += 1;
        }
        steps
    }
}

impl StepGenerator for SortRun {
    fn advance(&mut self, data: &mut [i32]) -> Step {
        match self {
            SortRun::Bubble(sort) => sort.advance(data),
            SortRun::Insertion(sort) => sort.advance(data),
        }
    }

    fn is_exhausted(&self) -> bool {
        match self {
            SortRun::Bubble(sort) => sort.is_exhausted(),
            SortRun::Insertion(sort) => sort.is_exhausted(),
        }
    }

    fn steps_taken(&self) -> usize {
        match self {
            SortRun::Bubble(sort) => sort.steps_taken(),
            SortRun::Insertion(sort) => sort.steps_taken(),
        }
    }

    fn direction(&self) -> Direction {
        match self {
            SortRun::Bubble(sort) => sort.direction(),
            SortRun::Insertion(sort) => sort.direction(),
        }
    }
}
