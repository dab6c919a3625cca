//! Sample data loaded at startup so a fresh instance is immediately usable.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use common::TestCase;

use crate::store::{ActivityKind, Contest, Difficulty, Example, Problem, Stores, User};

fn starter(javascript: &str, python: &str) -> BTreeMap<String, String> {
    let mut code = BTreeMap::new();
    code.insert("javascript".to_string(), javascript.to_string());
    code.insert("python".to_string(), python.to_string());
    code
}

pub fn seed_sample_data(stores: &Stores) {
    let now = Utc::now();

    // Users, registration order oldest first so leaderboard ties resolve
    // deterministically.
    let mut seeded_users = Vec::new();
    for (offset_days, username, score, solved) in [
        (40, "coderunner24", 150, 15),
        (35, "User123", 150, 12),
        (30, "Alice", 129, 10),
        (25, "Bob", 90, 8),
    ] {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            score,
            problems_solved: solved,
            created_at: now - Duration::days(offset_days),
        };
        // Seeding runs on an empty store, the usernames cannot collide.
        if let Ok(user) = stores.users.insert(user) {
            seeded_users.push(user);
        }
    }

    let two_sum = Problem {
        id: Uuid::new_v4(),
        title: "Two Sum".to_string(),
        description: "Given an array of integers nums and an integer target, \
                      return indices of the two numbers such that they add up \
                      to target. You may assume that each input has exactly \
                      one solution, and you may not use the same element twice."
            .to_string(),
        difficulty: Difficulty::Easy,
        category: "Array".to_string(),
        tags: vec![
            "array".to_string(),
            "hash-table".to_string(),
            "two-pointers".to_string(),
        ],
        examples: vec![Example {
            input: "nums = [2,7,11,15], target = 9".to_string(),
            output: "[0,1]".to_string(),
            explanation: "Because nums[0] + nums[1] == 9, we return [0, 1].".to_string(),
        }],
        constraints: vec![
            "2 <= nums.length <= 10^4".to_string(),
            "-10^9 <= nums[i] <= 10^9".to_string(),
            "Only one valid answer exists.".to_string(),
        ],
        test_cases: vec![
            TestCase {
                input: json!([[2, 7, 11, 15], 9]),
                expected_output: json!([0, 1]),
            },
            TestCase {
                input: json!([[3, 2, 4], 6]),
                expected_output: json!([1, 2]),
            },
            TestCase {
                input: json!([[3, 3], 6]),
                expected_output: json!([0, 1]),
            },
        ],
        starter_code: starter(
            "function twoSum(nums, target) {\n  // Your code here\n}",
            "def two_sum(nums, target):\n    # Your code here\n    pass",
        ),
        entry_point: "twoSum".to_string(),
        accepted_submissions: 152,
        total_submissions: 210,
        created_at: now - Duration::days(20),
    };

    let bubble_sort = Problem {
        id: Uuid::new_v4(),
        title: "Bubble Sort".to_string(),
        description: "Implement bubble sort. Given an array of integers, \
                      return the array sorted in ascending order."
            .to_string(),
        difficulty: Difficulty::Easy,
        category: "Sorting".to_string(),
        tags: vec!["sorting".to_string(), "array".to_string()],
        examples: vec![Example {
            input: "arr = [5,2,8,1,9]".to_string(),
            output: "[1,2,5,8,9]".to_string(),
            explanation: "The array sorted in ascending order.".to_string(),
        }],
        constraints: vec!["1 <= arr.length <= 10^3".to_string()],
        test_cases: vec![
            TestCase {
                input: json!([[5, 2, 8, 1, 9]]),
                expected_output: json!([1, 2, 5, 8, 9]),
            },
            TestCase {
                input: json!([[3, 1, 2]]),
                expected_output: json!([1, 2, 3]),
            },
        ],
        starter_code: starter(
            "function bubbleSort(arr) {\n  // Your code here\n}",
            "def bubble_sort(arr):\n    # Your code here\n    pass",
        ),
        entry_point: "bubbleSort".to_string(),
        accepted_submissions: 98,
        total_submissions: 120,
        created_at: now - Duration::days(18),
    };

    let quick_sort = Problem {
        id: Uuid::new_v4(),
        title: "Quick Sort".to_string(),
        description: "Implement quick sort. Given an array of integers, \
                      return the array sorted in ascending order."
            .to_string(),
        difficulty: Difficulty::Medium,
        category: "Sorting".to_string(),
        tags: vec!["sorting".to_string(), "divide-and-conquer".to_string()],
        examples: vec![Example {
            input: "arr = [10,7,8,9,1,5]".to_string(),
            output: "[1,5,7,8,9,10]".to_string(),
            explanation: "The array sorted in ascending order.".to_string(),
        }],
        constraints: vec!["1 <= arr.length <= 10^4".to_string()],
        test_cases: vec![
            TestCase {
                input: json!([[10, 7, 8, 9, 1, 5]]),
                expected_output: json!([1, 5, 7, 8, 9, 10]),
            },
            TestCase {
                input: json!([[4, 4, 4]]),
                expected_output: json!([4, 4, 4]),
            },
        ],
        starter_code: starter(
            "function quickSort(arr) {\n  // Your code here\n}",
            "def quick_sort(arr):\n    # Your code here\n    pass",
        ),
        entry_point: "quickSort".to_string(),
        accepted_submissions: 61,
        total_submissions: 104,
        created_at: now - Duration::days(15),
    };

    let problem_ids = vec![two_sum.id, bubble_sort.id, quick_sort.id];
    stores.problems.insert(two_sum);
    stores.problems.insert(bubble_sort);
    stores.problems.insert(quick_sort);

    stores.contests.insert(Contest {
        id: Uuid::new_v4(),
        title: "Weekly Contest 1".to_string(),
        description: "Three problems, ninety minutes. All languages welcome.".to_string(),
        start_time: now + Duration::days(7),
        end_time: now + Duration::days(14),
        problems: problem_ids.clone(),
        participants: vec![],
        is_active: true,
        created_at: now - Duration::days(3),
    });

    for (user, kind, description) in [
        (0, ActivityKind::ProblemSolved, "coderunner24 solved Two Sum"),
        (1, ActivityKind::SubmissionMade, "User123 submitted Quick Sort"),
        (2, ActivityKind::ProblemSolved, "Alice solved Bubble Sort"),
        (3, ActivityKind::ContestJoined, "Bob joined Weekly Contest 1"),
    ] {
        if let Some(user) = seeded_users.get(user) {
            stores.activities.append(
                user.id,
                kind,
                description.to_string(),
                json!({ "seeded": true }),
            );
        }
    }
}
