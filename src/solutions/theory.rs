use serde_json::{json, Value};

use crate::harness::{assert_equal, run_tests, TestCase, TestReport};

use super::arg;

/// Palindrome check over lowercase ASCII alphanumerics only.
pub fn is_palindrome(s: &str) -> bool {
    let alnum: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    alnum.iter().eq(alnum.iter().rev())
}

pub fn palindrome_self_test() -> TestReport {
    let cases = [
        TestCase::new(json!(["A man, a plan, a canal: Panama"]), json!(true)),
        TestCase::new(json!(["race a car"]), json!(false)),
    ];
    run_tests("isPalindrome", &cases, |args| {
        let s: String = arg(args, 0).unwrap_or_default();
        json!(is_palindrome(&s))
    })
}

/// Compacts a sorted slice in place; returns the length of the unique prefix.
pub fn remove_duplicates_sorted<T: PartialEq + Copy>(nums: &mut [T]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..nums.len() {
        if nums[read] != nums[read - 1] {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write
}

pub fn remove_duplicates_self_test() -> TestReport {
    let cases = [
        TestCase::new(json!([[0, 0, 1, 1, 1, 2, 2, 3, 3, 4]]), json!([0, 1, 2, 3, 4])),
        TestCase::new(json!([[1, 1, 2]]), json!([1, 2])),
        TestCase::new(json!([[]]), json!([])),
    ];
    run_tests("removeDuplicatesSorted", &cases, |args| {
        let mut nums: Vec<i64> = arg(args, 0).unwrap_or_default();
        let len = remove_duplicates_sorted(&mut nums);
        json!(&nums[..len])
    })
}

#[derive(Debug)]
struct ListNode<T> {
    val: T,
    next: Option<Box<ListNode<T>>>,
}

/// Singly linked list with head insertion and tail append.
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self { head: None }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_front(&mut self, val: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { val, next }));
    }

    pub fn push_back(&mut self, val: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode { val, next: None }));
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.val)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    // Iterative so long lists do not overflow the stack.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

pub fn linked_list_self_test() -> TestReport {
    let mut list = LinkedList::new();
    for v in [1, 2, 3] {
        list.push_back(v);
    }
    list.push_front(0);

    let cases = [TestCase::new(Value::Null, json!([0, 1, 2, 3])).labeled("linked list basic")];
    run_tests("LinkedList", &cases, |_| json!(list.to_vec()))
}

/// One-off check through the assertion helper, no suite around it.
pub fn check_linked_list(values: &[i64], expected: &Value) -> bool {
    let mut list = LinkedList::new();
    for &v in values {
        list.push_back(v);
    }
    assert_equal(&json!(list.to_vec()), expected, "linked list from values")
}
