use crate::{
    array::{drop, items, len, reduce, take},
    operator::Operator,
};
use uwu_match::{match_value, Branch, Compiled, NonExhaustiveMatch, Pattern};
use uwu_value::Value;

/// `a - b`.
pub fn number_cmp(a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    Operator::Subtract.apply(a, b)
}

/// `-1`, `1` or `0` by `<`, for values that cannot be subtracted.
pub fn natural_cmp(a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    let ordering = if Operator::Lt.apply(a, b)? == Value::Bool(true) {
        -1.0
    } else if Operator::Lt.apply(b, a)? == Value::Bool(true) {
        1.0
    } else {
        0.0
    };
    Ok(Value::number(ordering))
}

pub fn min(a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    let less = Operator::Lt.apply(a, b)?;
    let chosen = if less == Value::Bool(true) { a } else { b };
    Ok(chosen.clone())
}

pub fn max(a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    let greater = Operator::Gt.apply(a, b)?;
    let chosen = if greater == Value::Bool(true) { a } else { b };
    Ok(chosen.clone())
}

enum ListArm {
    Empty,
    Head,
}

fn list_branches() -> [Branch<ListArm>; 2] {
    [
        Branch::new(Pattern::empty(), ListArm::Empty),
        Branch::new(
            Pattern::head(Pattern::name("head"), Pattern::Wildcard),
            ListArm::Head,
        ),
    ]
}

/// Whether a comparator result sorts its first argument before its second.
fn is_negative(ordering: &Value) -> Result<bool, NonExhaustiveMatch> {
    match ordering.as_number() {
        Some(n) => Ok(n < 0.0),
        None => Err(NonExhaustiveMatch::new(ordering).within("bubble_sort")),
    }
}

/// Walks `acc` one view at a time; each view shares `acc`'s elements.
fn swap_till(
    cmp: &mut impl FnMut(&Value, &Value) -> Result<Value, NonExhaustiveMatch>,
    branches: &[Branch<ListArm>],
    acc: &Value,
    value: &Value,
) -> Result<Value, NonExhaustiveMatch> {
    let acc = items(acc, "swap_till")?;
    let mut result = Vec::with_capacity(acc.len() + 1);
    let mut inserting = value.clone();
    let mut start = 0;
    loop {
        let view = Value::view_from(acc, start);
        let matched = match_value(&view, branches).map_err(|err| err.within("swap_till"))?;
        match matched.body {
            ListArm::Empty => {
                result.push(inserting);
                return Ok(Value::array(result));
            }
            ListArm::Head => {
                let head = matched
                    .bindings
                    .get("head")
                    .cloned()
                    .ok_or_else(|| NonExhaustiveMatch::new(&view).within("swap_till"))?;
                if is_negative(&cmp(&inserting, &head)?)? {
                    result.push(inserting);
                    inserting = head;
                } else {
                    result.push(head);
                }
                start += 1;
            }
        }
    }
}

/// `cmp` returns a number; negative sorts its first argument first.
pub fn bubble_sort(
    mut cmp: impl FnMut(&Value, &Value) -> Result<Value, NonExhaustiveMatch>,
    arr: &Value,
) -> Result<Value, NonExhaustiveMatch> {
    let branches = list_branches();
    reduce(
        arr,
        |acc, value| swap_till(&mut cmp, &branches, &acc, value),
        Value::array(Vec::new()),
    )
    .map_err(|err| err.within("bubble_sort"))
}

enum MergeArm {
    LeftEmpty,
    RightEmpty,
    BothHeads,
}

fn merge_tree() -> Compiled<MergeArm> {
    Compiled::new(vec![
        Branch::new(
            Pattern::tuple2(Pattern::empty(), Pattern::Wildcard),
            MergeArm::LeftEmpty,
        ),
        Branch::new(
            Pattern::tuple2(Pattern::Wildcard, Pattern::empty()),
            MergeArm::RightEmpty,
        ),
        Branch::new(
            Pattern::tuple2(
                Pattern::head(Pattern::name("head_a"), Pattern::Wildcard),
                Pattern::head(Pattern::name("head_b"), Pattern::Wildcard),
            ),
            MergeArm::BothHeads,
        ),
    ])
}

/// Merge two sorted arrays by `<`. On ties the head of `b` goes first.
pub fn merge(a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    merge_with(&merge_tree(), a, b)
}

fn merge_with(compiled: &Compiled<MergeArm>, a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    let a = items(a, "get_head")?;
    let b = items(b, "get_head")?;
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut start_a, mut start_b) = (0, 0);
    loop {
        let views = Value::tuple2(Value::view_from(a, start_a), Value::view_from(b, start_b));
        let matched = compiled
            .run(&views)
            .map_err(|err| err.within("merge"))?;
        match matched.body {
            MergeArm::LeftEmpty => {
                result.extend(b[start_b..].iter().cloned());
                return Ok(Value::array(result));
            }
            MergeArm::RightEmpty => {
                result.extend(a[start_a..].iter().cloned());
                return Ok(Value::array(result));
            }
            MergeArm::BothHeads => {
                let bound = |name: &str| {
                    matched
                        .bindings
                        .get(name)
                        .ok_or_else(|| NonExhaustiveMatch::new(&views).within("merge"))
                };
                let head_a = bound("head_a")?;
                let head_b = bound("head_b")?;
                if Operator::Lt.apply(head_a, head_b)? == Value::Bool(true) {
                    result.push(head_a.clone());
                    start_a += 1;
                } else {
                    result.push(head_b.clone());
                    start_b += 1;
                }
            }
        }
    }
}

pub fn merge_sort(arr: &Value) -> Result<Value, NonExhaustiveMatch> {
    sort_with(&merge_tree(), arr)
}

fn sort_with(compiled: &Compiled<MergeArm>, arr: &Value) -> Result<Value, NonExhaustiveMatch> {
    let length = len(arr)?;
    if length < 2 {
        return Ok(arr.clone());
    }
    let half = Value::number((length / 2) as f64);
    tracing::trace!(len = length, "merge_sort split");
    let first = sort_with(compiled, &take(arr, &half)?)?;
    let second = sort_with(compiled, &drop(arr, &half)?)?;
    merge_with(compiled, &first, &second)
}
