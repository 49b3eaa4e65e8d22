//! Insertion sort, one shift-and-insert micro-step per step

use super::{Direction, Highlights, Step, StepGenerator};

/// Suspended insertion sort
///
/// `outer` is the index of the element currently being inserted into the
/// ordered prefix; `cursor` is where that element sits right now. Each step
/// moves it one slot to the left.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    len: usize,
    direction: Direction,
    outer: usize,
    cursor: usize,
    steps: usize,
    exhausted: bool,
}

impl InsertionSort {
    pub fn new(data: &[i32], direction: Direction) -> Self {
        InsertionSort {
            len: data.len(),
            direction,
            outer: 0,
            cursor: 0,
            steps: 0,
            exhausted: false,
        }
    }
}

impl StepGenerator for InsertionSort {
    fn advance(&mut self, data: &mut [i32]) -> Step {
        if self.exhausted {
            return Step::Done;
        }
        if data.len() < self.len {
            self.exhausted = true;
            return Step::Done;
        }

        loop {
            let k = self.cursor;
            if k > 0 && self.direction.out_of_order(data[k - 1], data[k]) {
                data.swap(k - 1, k);
                self.cursor = k - 1;
                self.steps += 1;
                return Step::Moved(Highlights::pair(k - 1, k));
            }

            self.outer += 1;
            if self.outer >= self.len {
                self.exhausted = true;
                return Step::Done;
            }
            self.cursor = self.outer;
        }
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

    fn collect_highlights(data: &mut [i32], direction: Direction) -> Vec<Highlights> {
        let mut sort = InsertionSort::new(data, direction);
        let mut steps = Vec::new();
        while let Step::Moved(highlights) = sort.advance(data) {
            steps.push(highlights);
        }
        steps
    }

    #[test]
    fn test_ascending() {
        let mut data = [5, 3, 4, 1, 2];
        let steps = collect_highlights(&mut data, Direction::Ascending);
        assert_eq!(data, [1, 2, 3, 4, 5]);
        // Inversions of [5, 3, 4, 1, 2]
        assert_eq!(steps.len(), 8);
    }

    #[test]
    fn test_descending_actually_descends() {
        let mut data = [1, 4, 2, 5, 3];
        collect_highlights(&mut data, Direction::Descending);
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_highlights_follow_inserted_element() {
        let mut data = [2, 3, 1];
        let steps = collect_highlights(&mut data, Direction::Ascending);

        // 1 walks from index 2 to index 0
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].get(1), Some(Mark::Destination));
        assert_eq!(steps[0].get(2), Some(Mark::Source));
        assert_eq!(steps[1].get(0), Some(Mark::Destination));
        assert_eq!(steps[1].get(1), Some(Mark::Source));
    }

    #[test]
    fn test_highlights_stay_in_range() {
        let mut data = [9, 8, 7, 6, 5, 4];
        let len = data.len();
        for highlights in collect_highlights(&mut data, Direction::Ascending) {
            for index in 0..len + 2 {
                if highlights.get(index).is_some() {
                    assert!(index < len);
                }
            }
            assert_eq!(highlights.len(), 2);
        }
    }

    #[test]
    fn test_equal_values_take_no_steps() {
        let mut data = [2, 2, 2];
        let mut sort = InsertionSort::new(&data, Direction::Descending);
        assert_eq!(sort.advance(&mut data), Step::Done);
        assert_eq!(sort.steps_taken(), 0);
        assert_eq!(sort.advance(&mut data), Step::Done);
        assert_eq!(data, [2, 2, 2]);
    }

    #[test]
    fn test_empty() {
        let mut data: [i32; 0] = [];
        let mut sort = InsertionSort::new(&data, Direction::Ascending);
        assert!(sort.advance(&mut data).is_done());
        assert!(sort.is_exhausted());
    }
}
