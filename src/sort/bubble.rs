//! Bubble sort, one adjacent swap per step

use super::{Direction, Highlights, Step, StepGenerator};

/// Suspended bubble sort
///
/// `pass` is the outer loop counter (how many largest elements have already
/// settled at the end), `index` the next adjacent pair to compare within the
/// current pass.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    len: usize,
    direction: Direction,
    pass: usize,
    index: usize,
    steps: usize,
    exhausted: bool,
}

impl BubbleSort {
    pub fn new(data: &[i32], direction: Direction) -> Self {
        BubbleSort {
            len: data.len(),
            direction,
            pass: 0,
            index: 0,
            steps: 0,
            exhausted: false,
        }
    }
}

impl StepGenerator for BubbleSort {
    fn advance(&mut self, data: &mut [i32]) -> Step {
        if self.exhausted {
            return Step::Done;
        }
        if data.len() < self.len {
            self.exhausted = true;
            return Step::Done;
        }

        while self.pass + 1 < self.len {
            let limit = self.len - 1 - self.pass;
            while self.index < limit {
                let j = self.index;
                self.index += 1;

                if self.direction.out_of_order(data[j], data[j + 1]) {
                    data.swap(j, j + 1);
                    self.steps += 1;
                    return Step::Moved(Highlights::pair(j, j + 1));
                }
            }
            self.pass += 1;
            self.index = 0;
        }

        self.exhausted = true;
        Step::Done
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn steps_taken(&self) -> usize {
        self.steps
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Mark;

    #[test]
    fn test_first_step_swaps_first_inversion() {
        let mut data = [5, 3, 4, 1, 2];
        let mut sort = BubbleSort::new(&data, Direction::Ascending);

        match sort.advance(&mut data) {
            Step::Moved(highlights) => {
                assert_eq!(highlights.get(0), Some(Mark::Destination));
                assert_eq!(highlights.get(1), Some(Mark::Source));
            }
            Step::Done => panic!("Expected a swap"),
        }
        assert_eq!(data, [3, 5, 4, 1, 2]);
        assert_eq!(sort.steps_taken(), 1);
    }

    #[test]
    fn test_one_swap_per_step() {
        let mut data = [4, 3, 2, 1];
        let mut sort = BubbleSort::new(&data, Direction::Ascending);
        let mut previous = data;

        while let Step::Moved(_) = sort.advance(&mut data) {
            let changed = previous
                .iter()
                .zip(data.iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 2, "each step swaps exactly one adjacent pair");
            previous = data;
        }

        assert_eq!(data, [1, 2, 3, 4]);
        // Reversed input is the worst case: n(n-1)/2 swaps
        assert_eq!(sort.steps_taken(), 6);
    }

    #[test]
    fn test_descending() {
        let mut data = [5, 3, 4, 1, 2];
        let mut sort = BubbleSort::new(&data, Direction::Descending);
        while !sort.advance(&mut data).is_done() {}
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_equal_values_take_no_steps() {
        let mut data = [2, 2, 2];
        let mut sort = BubbleSort::new(&data, Direction::Ascending);
        assert_eq!(sort.advance(&mut data), Step::Done);
        assert!(sort.is_exhausted());
        assert_eq!(sort.steps_taken(), 0);
    }

    #[test]
    fn test_exhausted_is_idempotent() {
        let mut data = [2, 1];
        let mut sort = BubbleSort::new(&data, Direction::Ascending);
        assert!(!sort.advance(&mut data).is_done());
        assert!(sort.advance(&mut data).is_done());

        // Scramble behind its back: an exhausted run must not touch it
        data = [9, 0];
        assert!(sort.advance(&mut data).is_done());
        assert_eq!(data, [9, 0]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        assert!(BubbleSort::new(&empty, Direction::Ascending)
            .advance(&mut empty)
            .is_done());

        let mut single = [42];
        assert!(BubbleSort::new(&single, Direction::Descending)
            .advance(&mut single)
            .is_done());
    }

    #[test]
    fn test_shorter_slice_exhausts() {
        let data = [3, 2, 1];
        let mut sort = BubbleSort::new(&data, Direction::Ascending);
        let mut shorter = [2, 1];
        assert!(sort.advance(&mut shorter).is_done());
        assert_eq!(shorter, [2, 1]);
    }
}
