use crate::{
    array::{concat, drop, filter, get_head, len, map, reduce, take},
    function::{compose, compose2, flip, id, partial},
    option::{chain_do, chain_return, div, traverse},
    sort::{bubble_sort, max, merge, merge_sort, min, number_cmp},
};
use pretty_assertions::assert_eq;
use quickcheck_macros::quickcheck;
use std::cmp::Ordering;
use uwu_value::ListView;

fn sorted<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

fn permutation(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[test]
fn get_head_empty() {
    assert_eq!(get_head::<i32>(&[]), ListView::Empty)
}

#[quickcheck]
fn prop_get_head(seq: Vec<i32>) -> bool {
    match get_head(&seq) {
        ListView::Empty => seq.is_empty(),
        ListView::Head(first, rest) => *first == seq[0] && len(rest) == len(&seq) - 1,
    }
}

#[test]
fn take_and_drop_clamp() {
    let seq = [1, 2, 3];
    assert_eq!(take(&seq, 2), vec![1, 2]);
    assert_eq!(take(&seq, 10), vec![1, 2, 3]);
    assert_eq!(drop(&seq, 2), vec![3]);
    assert_eq!(drop(&seq, 10), Vec::<i32>::new());
    assert_eq!(take(&seq, 0), Vec::<i32>::new());
}

#[quickcheck]
fn prop_take_drop_concat(seq: Vec<i32>, n: usize) -> bool {
    concat(&take(&seq, n), &drop(&seq, n)) == seq
}

#[test]
fn folds() {
    assert_eq!(reduce(&[1, 2, 3], |acc, x| acc * 10 + x, 0), 123);
    assert_eq!(
        filter(&map(&[1, 2, 3], |x| x + 1), |x| x % 2 == 0),
        vec![2, 4]
    );
}

#[test]
fn number_cmp_is_subtraction() {
    assert_eq!(number_cmp(&1.0, &2.0), Ordering::Less);
    assert_eq!(number_cmp(&2.0, &1.0), Ordering::Greater);
    assert_eq!(number_cmp(&2.0, &2.0), Ordering::Equal);
    assert_eq!(number_cmp(&f64::NAN, &1.0), Ordering::Equal);
}

#[test]
fn min_max() {
    assert_eq!(min(1, 2), 1);
    assert_eq!(max(1, 2), 2);
    assert_eq!(min("b", "a"), "a");
}

#[test]
fn sorts_example() {
    let input = [17.0, 9.0, 21.0, 3.0, 0.0];
    let expected = vec![0.0, 3.0, 9.0, 17.0, 21.0];
    assert_eq!(bubble_sort(number_cmp, &input), expected);
    assert_eq!(merge_sort(&input), expected);
}

#[test]
fn merge_example() {
    assert_eq!(merge(&[1, 4, 9], &[2, 3, 10]), vec![1, 2, 3, 4, 9, 10]);
    assert_eq!(merge(&[], &[1]), vec![1]);
    assert_eq!(merge(&[1], &[]), vec![1]);
}

#[test]
fn merge_ties_take_right_head() {
    let a = [(1, 'a')];
    let b = [(1, 'b')];
    // Tuples compare on the whole value, so compare on the key only.
    #[derive(Debug, Clone, PartialEq)]
    struct Keyed(i32, char);
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }
    let keyed = |seq: &[(i32, char)]| -> Vec<Keyed> {
        seq.iter().map(|(key, label)| Keyed(*key, *label)).collect()
    };
    assert_eq!(
        merge(&keyed(&a), &keyed(&b)),
        vec![Keyed(1, 'b'), Keyed(1, 'a')]
    );
}

#[test]
fn bubble_sort_reinserts_displaced_head_past_ties() {
    // A displaced head keeps walking, so it passes later equal keys.
    let input = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    assert_eq!(
        bubble_sort(|a: &(i32, char), b| a.0.cmp(&b.0), &input),
        vec![(1, 'b'), (1, 'd'), (2, 'c'), (2, 'a')]
    );
}

#[test]
fn long_inputs_do_not_recurse() {
    let input: Vec<i32> = (0..100_000).rev().collect();
    let expected: Vec<i32> = (0..100_000).collect();
    assert_eq!(merge_sort(&input), expected);
    assert_eq!(merge(&expected, &[100_000]).len(), 100_001);
}

#[quickcheck]
fn prop_merge_sort_sorts(seq: Vec<i32>) -> bool {
    let result = merge_sort(&seq);
    sorted(&result) && permutation(&result, &seq)
}

#[quickcheck]
fn prop_bubble_sort_agrees_with_merge_sort(seq: Vec<i32>) -> bool {
    let result = bubble_sort(|a: &i32, b| a.cmp(b), &seq);
    sorted(&result) && permutation(&result, &seq) && result == merge_sort(&seq)
}

#[quickcheck]
fn prop_merge_sorted(mut a: Vec<i32>, mut b: Vec<i32>) -> bool {
    a.sort_unstable();
    b.sort_unstable();
    let result = merge(&a, &b);
    sorted(&result) && result.len() == a.len() + b.len() && permutation(&result, &concat(&a, &b))
}

#[test]
fn div_floors() {
    assert_eq!(div(6, 2), Some(3));
    assert_eq!(div(7, 2), Some(3));
    assert_eq!(div(-7, 2), Some(-4));
    assert_eq!(div(7, -2), Some(-4));
    assert_eq!(div(-7, -2), Some(3));
    assert_eq!(div(1, 0), None);
    assert_eq!(div(i64::MIN, -1), None);
}

#[quickcheck]
fn prop_chain_return_none(n: i64) -> bool {
    chain_return(None::<i64>, |x| Some(x + n)).is_none()
}

#[quickcheck]
fn prop_chain_return_some(v: i64, n: i64) -> bool {
    let f = |x: i64| div(x, n);
    chain_return(Some(v), f) == f(v)
}

#[test]
fn chain_do_keeps_payload() {
    assert_eq!(chain_do(Some(2), |x| div(6, x)), Some((2, 3)));
    assert_eq!(chain_do(Some(0), |x| div(6, x)), None);
    assert_eq!(chain_do(None, |x: i64| div(6, x)), None);
}

#[test]
fn pipeline() {
    let step1 = div(6, 2);
    let step2 = chain_do(Some(2), partial(div, 6));
    let step3 = chain_do(step2, |(a, b)| Some(a * b));
    let step4 = chain_return(step3, |((a, b), c)| Some(a + b + c));
    assert_eq!(step1, Some(3));
    assert_eq!(step2, Some((2, 3)));
    assert_eq!(step4, Some(11));
}

#[test]
fn traverse_stops_at_none() {
    let mut calls = 0;
    let result = traverse(&[1, 0, 2], |x| {
        calls += 1;
        div(6, *x)
    });
    assert_eq!(result, None);
    assert_eq!(calls, 2);
    assert_eq!(traverse(&[1, 2, 3], |x| div(6, *x)), Some(vec![6, 3, 2]));
}

#[quickcheck]
fn prop_traverse_empty(n: i64) -> bool {
    traverse(&[] as &[i64], |x| div(*x, n)) == Some(Vec::new())
}

#[test]
fn combinators() {
    let add = |a: i64, b: i64| a + b;
    let multiply = |a: i64, b: i64| a * b;
    let f = compose(
        compose(i64::abs, partial(add, 1)),
        partial(multiply, 2),
    );
    assert_eq!(f(-4), 7);

    let greet = |first: &str, last: &str| format!("{}, {} {}", last, first, last);
    let yell = compose2(|s: String| s.to_uppercase(), greet);
    assert_eq!(yell("James", "Bond"), "BOND, JAMES BOND");

    assert_eq!(flip(|a: i64, b: i64| a - b)(1, 3), 2);
    assert_eq!(id(5), 5);
}
