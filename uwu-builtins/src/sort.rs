use crate::array::{drop, len, reduce, take};
use std::cmp::Ordering;
use uwu_value::ListView;

/// Subtraction-based comparison. A `NaN` difference is not negative, so it
/// compares as [`Ordering::Equal`].
pub fn number_cmp(a: &f64, b: &f64) -> Ordering {
    let difference = a - b;
    if difference < 0.0 {
        Ordering::Less
    } else if difference > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Insert `value` into the sorted `acc`. `value` moves past every element
/// that it does not sort strictly before.
fn swap_till<'a, T: Clone>(
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
    acc: &'a [T],
    value: &'a T,
) -> Vec<T> {
    let mut result = Vec::with_capacity(acc.len() + 1);
    let mut inserting = value;
    let mut rest = ListView::of(acc);
    loop {
        match rest {
            ListView::Empty => {
                result.push(inserting.clone());
                return result;
            }
            ListView::Head(head, tail) => {
                if cmp(inserting, head) == Ordering::Less {
                    result.push(inserting.clone());
                    inserting = head;
                } else {
                    result.push(head.clone());
                }
                rest = ListView::of(tail);
            }
        }
    }
}

pub fn bubble_sort<T: Clone>(mut cmp: impl FnMut(&T, &T) -> Ordering, arr: &[T]) -> Vec<T> {
    reduce(arr, |acc: Vec<T>, value| swap_till(&mut cmp, &acc, value), Vec::new())
}

/// Merge two sorted sequences. On ties the head of `b` goes first.
pub fn merge<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut a, mut b) = (a, b);
    loop {
        match (ListView::of(a), ListView::of(b)) {
            (ListView::Empty, _) => {
                result.extend_from_slice(b);
                return result;
            }
            (_, ListView::Empty) => {
                result.extend_from_slice(a);
                return result;
            }
            (ListView::Head(head_a, rest_a), ListView::Head(head_b, rest_b)) => {
                if head_a < head_b {
                    result.push(head_a.clone());
                    a = rest_a;
                } else {
                    result.push(head_b.clone());
                    b = rest_b;
                }
            }
        }
    }
}

pub fn merge_sort<T: PartialOrd + Clone>(arr: &[T]) -> Vec<T> {
    if len(arr) < 2 {
        return arr.to_vec();
    }
    let half = len(arr) / 2;
    tracing::trace!(len = len(arr), half, "merge_sort split");
    let first = merge_sort(&take(arr, half));
    let second = merge_sort(&drop(arr, half));
    merge(&first, &second)
}
