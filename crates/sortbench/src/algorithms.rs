//! Quadratic comparison sorts
//!
//! All three sort in place, ascending, using only `>` or `<` between
//! elements. For strings that is byte-lexicographic order.

/// Sorting algorithm under benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
}

impl SortAlgorithm {
    /// Every algorithm, in benchmark order
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
    ];

    /// Name used in report lines
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
        }
    }

    /// Sort `items` in place
    pub fn sort<T: PartialOrd>(&self, items: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(items),
            SortAlgorithm::Selection => selection_sort(items),
            SortAlgorithm::Insertion => insertion_sort(items),
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Exactly `n` passes, no early exit. Pass `i` compares pairs up to
/// `n - i - 1` and swaps only on strict `>`.
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
            }
        }
    }
}

/// The first occurrence of the minimum wins: the candidate only moves on `<`.
pub fn selection_sort<T: PartialOrd>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if items[j] < items[min_idx] {
                min_idx = j;
            }
        }
        items.swap(i, min_idx);
    }
}

/// Stable. Elements strictly greater than the held value shift one slot
/// right, then the held value drops into the gap.
pub fn insertion_sort<T: PartialOrd>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut gap = i;
        while gap > 0 && items[gap - 1] > items[i] {
            gap -= 1;
        }
        // items[gap..i] move right by one and items[i] lands at gap
        items[gap..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Record compared by key only, so equal keys stay distinguishable
    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        key: &'static str,
        line: usize,
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(other.key)
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sorted_with(algorithm: SortAlgorithm, input: &[String]) -> Vec<String> {
        let mut working = input.to_vec();
        algorithm.sort(&mut working);
        working
    }

    fn is_non_decreasing(items: &[String]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = SortAlgorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Bubble Sort", "Selection Sort", "Insertion Sort"]);
        assert_eq!(SortAlgorithm::Insertion.to_string(), "Insertion Sort");
    }

    #[test]
    fn test_duplicate_scenario() {
        let input = strings(&["b", "a", "a", "c"]);
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(sorted_with(algorithm, &input), ["a", "a", "b", "c"], "{}", algorithm);
        }
    }

    #[test]
    fn test_sorted_permutation() {
        let input = strings(&[
            "/var/log/syslog",
            "/etc/passwd",
            "Zebra",
            "apple",
            "",
            "éclair",
            "/etc/hosts",
            "10",
            "9",
            "apple",
            "/bin/sh",
        ]);
        let mut expected = input.clone();
        expected.sort();

        for algorithm in SortAlgorithm::ALL {
            let result = sorted_with(algorithm, &input);
            assert!(is_non_decreasing(&result), "{}", algorithm);
            assert_eq!(result, expected, "{}", algorithm);
        }
    }

    #[test]
    fn test_byte_order_not_natural_order() {
        let input = strings(&["b", "B", "10", "9", "a"]);
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(sorted_with(algorithm, &input), ["10", "9", "B", "a", "b"]);
        }
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let input = strings(&["a", "a", "b", "c", "d"]);
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(sorted_with(algorithm, &input), input, "{}", algorithm);
        }
    }

    #[test]
    fn test_reverse_input() {
        let input: Vec<String> = (0..50).rev().map(|i| format!("{:03}", i)).collect();
        for algorithm in SortAlgorithm::ALL {
            let result = sorted_with(algorithm, &input);
            assert_eq!(result.first().map(String::as_str), Some("000"));
            assert_eq!(result.last().map(String::as_str), Some("049"));
            assert!(is_non_decreasing(&result));
        }
    }

    #[test]
    fn test_empty_and_single() {
        for algorithm in SortAlgorithm::ALL {
            assert!(sorted_with(algorithm, &[]).is_empty());
            assert_eq!(sorted_with(algorithm, &strings(&["only"])), ["only"]);
        }
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut items = vec![
            Tagged { key: "b", line: 0 },
            Tagged { key: "a", line: 1 },
            Tagged { key: "a", line: 2 },
            Tagged { key: "c", line: 3 },
            Tagged { key: "a", line: 4 },
            Tagged { key: "b", line: 5 },
        ];
        insertion_sort(&mut items);

        let order: Vec<(&str, usize)> = items.iter().map(|t| (t.key, t.line)).collect();
        assert_eq!(
            order,
            [("a", 1), ("a", 2), ("a", 4), ("b", 0), ("b", 5), ("c", 3)]
        );
    }

    #[test]
    fn test_selection_sort_takes_first_minimum() {
        // The first "a" is swapped to the front, sending "b" past the second "a".
        let mut items = vec![
            Tagged { key: "b", line: 0 },
            Tagged { key: "a", line: 1 },
            Tagged { key: "a", line: 2 },
        ];
        selection_sort(&mut items);

        let lines: Vec<usize> = items.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 2, 0]);
    }

    #[test]
    fn test_selection_sort_can_reorder_equals() {
        let mut items = vec![
            Tagged { key: "b", line: 0 },
            Tagged { key: "b", line: 1 },
            Tagged { key: "a", line: 2 },
        ];
        selection_sort(&mut items);

        let lines: Vec<usize> = items.iter().map(|t| t.line).collect();
        assert_eq!(lines, [2, 1, 0]);
    }
}
