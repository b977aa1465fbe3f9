//! 排序算法集成测试
//!
//! 测试范围：
//! - 五种排序算法在随机输入下的最终正确性
//! - 操作计数器在整条轨迹上的单调性
//! - 步骤序列对外 schema 的稳定性

use algoviz::{SortStep, SortingAlgorithms};
use rand::Rng;

type SortFn = fn(&[i32]) -> algoviz::EngineResult<Vec<SortStep>>;

const ALGORITHMS: [(&str, SortFn); 5] = [
    ("bubble", SortingAlgorithms::bubble_sort),
    ("merge", SortingAlgorithms::merge_sort),
    ("quick", SortingAlgorithms::quick_sort),
    ("heap", SortingAlgorithms::heap_sort),
    ("counting", SortingAlgorithms::counting_sort),
];

fn final_array(steps: &[SortStep]) -> Vec<i32> {
    steps.last().expect("Trace should not be empty").array.clone()
}

// ==================== 随机输入正确性 ====================

#[test]
fn test_random_arrays_end_sorted() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let len = rng.gen_range(0..40);
        // 值域受限，计数排序也适用
        let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();

        let mut expected = input.clone();
        expected.sort_unstable();

        for (name, sort) in ALGORITHMS {
            let steps = sort(&input).expect("Sort should succeed");
            if name == "counting" && input.is_empty() {
                // 计数排序对空输入只产生一个 "Array is empty" 步骤
                assert_eq!(steps.len(), 1);
                continue;
            }
            assert_eq!(
                final_array(&steps),
                expected,
                "{} produced wrong result for {:?}",
                name,
                input
            );
        }
    }
}

#[test]
fn test_callers_array_never_mutated() {
    let input = vec![9, 3, 7, 1];
    for (_, sort) in ALGORITHMS {
        sort(&input).expect("Sort should succeed");
        assert_eq!(input, vec![9, 3, 7, 1]);
    }
}

// ==================== 计数器属性 ====================

#[test]
fn test_operation_counters_monotonic() {
    let mut rng = rand::thread_rng();
    let input: Vec<i32> = (0..25).map(|_| rng.gen_range(0..100)).collect();

    for (name, sort) in ALGORITHMS {
        let steps = sort(&input).expect("Sort should succeed");
        for pair in steps.windows(2) {
            assert!(
                pair[1].operations_count >= pair[0].operations_count,
                "{}: counter decreased between steps",
                name
            );
        }
    }
}

#[test]
fn test_start_step_counts_zero() {
    for (name, sort) in ALGORITHMS {
        let steps = sort(&[3, 1, 2]).expect("Sort should succeed");
        assert_eq!(steps[0].operations_count, 0, "{}: start step counted work", name);
    }
}

// ==================== 对外 schema ====================

#[test]
fn test_sort_step_schema_is_stable() {
    let steps = SortingAlgorithms::bubble_sort(&[2, 1]).expect("Sort should succeed");
    let json = serde_json::to_value(&steps[1]).expect("Step should serialize");

    let object = json.as_object().expect("Step should serialize to an object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "array",
            "comparing",
            "highlighted",
            "operation",
            "operations_count",
            "space_complexity",
            "time_complexity",
        ]
    );
}

#[test]
fn test_steps_roundtrip_through_json() {
    let steps = SortingAlgorithms::quick_sort(&[5, 2, 4]).expect("Sort should succeed");
    let json = serde_json::to_string(&steps).expect("Steps should serialize");
    let decoded: Vec<SortStep> = serde_json::from_str(&json).expect("Steps should deserialize");
    assert_eq!(steps, decoded);
}
