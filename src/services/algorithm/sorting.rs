//! Traced sorting algorithms
//!
//! Every sort operates on a private copy of the caller's array and returns the
//! full step sequence; the final array state is the last step's array, not a
//! separate return value. A single operations counter is threaded by `&mut`
//! through all helpers so counts are monotonically non-decreasing across the
//! whole trace: comparisons increment it for bubble/merge/quick, swaps for
//! heap, per-element counting/placement for counting sort. Milestone steps
//! never increment it.

use crate::core::error::{EngineError, EngineResult};
use crate::core::step::SortStep;

/// Static complexity annotations, (time, space) per algorithm.
const BUBBLE_COMPLEXITY: (&str, &str) = ("O(n²)", "O(1)");
const MERGE_COMPLEXITY: (&str, &str) = ("O(n log n)", "O(n)");
const QUICK_COMPLEXITY: (&str, &str) = ("O(n log n)", "O(log n)");
const HEAP_COMPLEXITY: (&str, &str) = ("O(n log n)", "O(1)");
const COUNTING_COMPLEXITY: (&str, &str) = ("O(n+k)", "O(k)");

/// Largest `max - min + 1` spread counting sort will allocate a frequency
/// table for.
pub const MAX_COUNTING_RANGE: usize = 1 << 20;

/// Sorting algorithms with step tracing
pub struct SortingAlgorithms;

impl SortingAlgorithms {
    /// Bubble sort: steps per comparison, per swap and per pass-end.
    pub fn bubble_sort(input: &[i32]) -> EngineResult<Vec<SortStep>> {
        log::debug!("bubble_sort: n={}", input.len());
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut ops: u64 = 0;

        let mut steps = vec![SortStep::record(
            &arr,
            vec![],
            vec![],
            "Starting Bubble Sort",
            ops,
            BUBBLE_COMPLEXITY,
        )];

        if n > 1 {
            for i in 0..n - 1 {
                for j in 0..n - i - 1 {
                    ops += 1;
                    steps.push(SortStep::record(
                        &arr,
                        vec![],
                        vec![j, j + 1],
                        format!("Comparing elements at positions {} and {}", j, j + 1),
                        ops,
                        BUBBLE_COMPLEXITY,
                    ));

                    if arr[j] > arr[j + 1] {
                        arr.swap(j, j + 1);
                        steps.push(SortStep::record(
                            &arr,
                            vec![j, j + 1],
                            vec![],
                            "Swapped elements",
                            ops,
                            BUBBLE_COMPLEXITY,
                        ));
                    }
                }
                steps.push(SortStep::record(
                    &arr,
                    vec![n - i - 1],
                    vec![],
                    format!("Element {} is in final position", arr[n - i - 1]),
                    ops,
                    BUBBLE_COMPLEXITY,
                ));
            }
        }

        steps.push(SortStep::record(
            &arr,
            vec![],
            vec![],
            "Bubble Sort Complete!",
            ops,
            BUBBLE_COMPLEXITY,
        ));
        Ok(steps)
    }

    /// Merge sort: steps per divide and per merge-completion, no
    /// per-element-copy steps.
    pub fn merge_sort(input: &[i32]) -> EngineResult<Vec<SortStep>> {
        log::debug!("merge_sort: n={}", input.len());
        let mut arr = input.to_vec();
        let mut ops: u64 = 0;

        let mut steps = vec![SortStep::record(
            &arr,
            vec![],
            vec![],
            "Starting Merge Sort",
            ops,
            MERGE_COMPLEXITY,
        )];

        if arr.len() > 1 {
            let right = arr.len() - 1;
            Self::merge_sort_helper(&mut arr, 0, right, &mut steps, &mut ops);
        }

        steps.push(SortStep::record(
            &arr,
            vec![],
            vec![],
            "Merge Sort Complete!",
            ops,
            MERGE_COMPLEXITY,
        ));
        Ok(steps)
    }

    fn merge_sort_helper(
        arr: &mut [i32],
        left: usize,
        right: usize,
        steps: &mut Vec<SortStep>,
        ops: &mut u64,
    ) {
        if left >= right {
            return;
        }

        let mid = left + (right - left) / 2;

        steps.push(SortStep::record(
            arr,
            (left..=mid).collect(),
            (mid + 1..=right).collect(),
            format!(
                "Dividing array: left[{}...{}] right[{}...{}]",
                left,
                mid,
                mid + 1,
                right
            ),
            *ops,
            MERGE_COMPLEXITY,
        ));

        Self::merge_sort_helper(arr, left, mid, steps, ops);
        Self::merge_sort_helper(arr, mid + 1, right, steps, ops);

        let mut temp = Vec::with_capacity(right - left + 1);
        let mut i = left;
        let mut j = mid + 1;

        while i <= mid && j <= right {
            *ops += 1;
            if arr[i] <= arr[j] {
                temp.push(arr[i]);
                i += 1;
            } else {
                temp.push(arr[j]);
                j += 1;
            }
        }
        while i <= mid {
            temp.push(arr[i]);
            i += 1;
        }
        while j <= right {
            temp.push(arr[j]);
            j += 1;
        }

        arr[left..=right].copy_from_slice(&temp);

        steps.push(SortStep::record(
            arr,
            (left..=right).collect(),
            vec![],
            format!("Merged subarrays [{}...{}]", left, right),
            *ops,
            MERGE_COMPLEXITY,
        ));
    }

    /// Quick sort with Lomuto partitioning, last element of the current
    /// partition as pivot (explicit policy): steps per pivot choice, per
    /// comparison, per swap and per partition-complete.
    pub fn quick_sort(input: &[i32]) -> EngineResult<Vec<SortStep>> {
        log::debug!("quick_sort: n={}", input.len());
        let mut arr = input.to_vec();
        let mut ops: u64 = 0;

        let mut steps = vec![SortStep::record(
            &arr,
            vec![],
            vec![],
            "Starting Quick Sort",
            ops,
            QUICK_COMPLEXITY,
        )];

        if arr.len() > 1 {
            let high = arr.len() - 1;
            Self::quick_sort_helper(&mut arr, 0, high, &mut steps, &mut ops);
        }

        steps.push(SortStep::record(
            &arr,
            vec![],
            vec![],
            "Quick Sort Complete!",
            ops,
            QUICK_COMPLEXITY,
        ));
        Ok(steps)
    }

    fn quick_sort_helper(
        arr: &mut [i32],
        low: usize,
        high: usize,
        steps: &mut Vec<SortStep>,
        ops: &mut u64,
    ) {
        if low >= high {
            return;
        }

        let pi = Self::partition(arr, low, high, steps, ops);

        steps.push(SortStep::record(
            arr,
            vec![pi],
            vec![],
            format!("Pivot {} is in correct position", arr[pi]),
            *ops,
            QUICK_COMPLEXITY,
        ));

        if pi > low {
            Self::quick_sort_helper(arr, low, pi - 1, steps, ops);
        }
        if pi < high {
            Self::quick_sort_helper(arr, pi + 1, high, steps, ops);
        }
    }

    fn partition(
        arr: &mut [i32],
        low: usize,
        high: usize,
        steps: &mut Vec<SortStep>,
        ops: &mut u64,
    ) -> usize {
        let pivot = arr[high];

        steps.push(SortStep::record(
            arr,
            vec![high],
            vec![],
            format!("Choosing pivot: {}", pivot),
            *ops,
            QUICK_COMPLEXITY,
        ));

        let mut i = low;
        for j in low..high {
            *ops += 1;
            steps.push(SortStep::record(
                arr,
                vec![high],
                vec![j],
                format!("Comparing {} with pivot {}", arr[j], pivot),
                *ops,
                QUICK_COMPLEXITY,
            ));

            if arr[j] < pivot {
                arr.swap(i, j);
                steps.push(SortStep::record(
                    arr,
                    vec![i, j],
                    vec![],
                    format!("Swapped {} and {}", arr[i], arr[j]),
                    *ops,
                    QUICK_COMPLEXITY,
                ));
                i += 1;
            }
        }

        arr.swap(i, high);
        steps.push(SortStep::record(
            arr,
            vec![i, high],
            vec![],
            "Placed pivot in correct position",
            *ops,
            QUICK_COMPLEXITY,
        ));

        i
    }

    /// Heap sort: steps per heapify swap, a heap-built milestone, and per
    /// extraction.
    pub fn heap_sort(input: &[i32]) -> EngineResult<Vec<SortStep>> {
        log::debug!("heap_sort: n={}", input.len());
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut ops: u64 = 0;

        let mut steps = vec![SortStep::record(
            &arr,
            vec![],
            vec![],
            "Starting Heap Sort",
            ops,
            HEAP_COMPLEXITY,
        )];

        if n > 1 {
            for i in (0..n / 2).rev() {
                Self::heapify(&mut arr, n, i, &mut steps, &mut ops);
            }

            steps.push(SortStep::record(
                &arr,
                vec![],
                vec![],
                "Max heap built",
                ops,
                HEAP_COMPLEXITY,
            ));

            for i in (1..n).rev() {
                arr.swap(0, i);
                ops += 1;
                steps.push(SortStep::record(
                    &arr,
                    vec![0, i],
                    vec![],
                    format!("Moved max element to position {}", i),
                    ops,
                    HEAP_COMPLEXITY,
                ));

                Self::heapify(&mut arr, i, 0, &mut steps, &mut ops);
            }
        }

        steps.push(SortStep::record(
            &arr,
            vec![],
            vec![],
            "Heap Sort Complete!",
            ops,
            HEAP_COMPLEXITY,
        ));
        Ok(steps)
    }

    fn heapify(
        arr: &mut [i32],
        n: usize,
        root: usize,
        steps: &mut Vec<SortStep>,
        ops: &mut u64,
    ) {
        // sift-down as a loop, recursion depth is not worth the stack risk
        let mut i = root;
        loop {
            let mut largest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;

            if left < n && arr[left] > arr[largest] {
                largest = left;
            }
            if right < n && arr[right] > arr[largest] {
                largest = right;
            }
            if largest == i {
                break;
            }

            arr.swap(i, largest);
            *ops += 1;
            steps.push(SortStep::record(
                arr,
                vec![i, largest],
                vec![],
                format!("Heapifying: swapped {} and {}", arr[i], arr[largest]),
                *ops,
                HEAP_COMPLEXITY,
            ));

            i = largest;
        }
    }

    /// Counting sort: phase milestones only, no per-element steps during the
    /// O(n) counting/placement passes. Empty input short-circuits to a single
    /// "Array is empty" step.
    pub fn counting_sort(input: &[i32]) -> EngineResult<Vec<SortStep>> {
        log::debug!("counting_sort: n={}", input.len());
        let mut ops: u64 = 0;

        if input.is_empty() {
            return Ok(vec![SortStep::record(
                input,
                vec![],
                vec![],
                "Array is empty",
                ops,
                COUNTING_COMPLEXITY,
            )]);
        }

        let mut arr = input.to_vec();
        let min = *arr.iter().min().unwrap_or(&0);
        let max = *arr.iter().max().unwrap_or(&0);
        let range = (max as i64 - min as i64 + 1) as usize;

        if range > MAX_COUNTING_RANGE {
            return Err(EngineError::CountingRangeExceeded {
                range,
                max: MAX_COUNTING_RANGE,
            });
        }

        let mut steps = vec![SortStep::record(
            &arr,
            vec![],
            vec![],
            format!("Starting Counting Sort. Range: {}", range),
            ops,
            COUNTING_COMPLEXITY,
        )];

        let mut count = vec![0usize; range];
        for &value in &arr {
            count[(value as i64 - min as i64) as usize] += 1;
            ops += 1;
        }

        steps.push(SortStep::record(
            &arr,
            vec![],
            vec![],
            "Counted element frequencies",
            ops,
            COUNTING_COMPLEXITY,
        ));

        let mut index = 0;
        for (offset, &occurrences) in count.iter().enumerate() {
            for _ in 0..occurrences {
                arr[index] = (offset as i64 + min as i64) as i32;
                index += 1;
                ops += 1;
            }
        }

        steps.push(SortStep::record(
            &arr,
            vec![],
            vec![],
            "Counting Sort Complete!",
            ops,
            COUNTING_COMPLEXITY,
        ));
        Ok(steps)
    }
}
