use std::rc::Rc;
use uwu_match::NonExhaustiveMatch;
use uwu_value::Value;

pub(crate) fn items<'a>(value: &'a Value, site: &str) -> Result<&'a Rc<[Value]>, NonExhaustiveMatch> {
    value
        .as_array()
        .ok_or_else(|| NonExhaustiveMatch::new(value).within(site))
}

/// A count argument, floored and clamped to `0..=len`. `NaN` counts as zero.
fn count(n: &Value, len: usize, site: &str) -> Result<usize, NonExhaustiveMatch> {
    match n.as_number() {
        Some(n) if n.is_nan() || n <= 0.0 => Ok(0),
        Some(n) if n >= len as f64 => Ok(len),
        Some(n) => Ok(n.floor() as usize),
        None => Err(NonExhaustiveMatch::new(n).within(site)),
    }
}

pub fn len(seq: &Value) -> Result<usize, NonExhaustiveMatch> {
    Ok(items(seq, "len")?.len())
}

/// `Head(first, rest)` or `Empty`. The rest shares `seq`'s elements.
pub fn get_head(seq: &Value) -> Result<Value, NonExhaustiveMatch> {
    Ok(Value::view_from(items(seq, "get_head")?, 0))
}

pub fn take(seq: &Value, n: &Value) -> Result<Value, NonExhaustiveMatch> {
    let items = items(seq, "take")?;
    let n = count(n, items.len(), "take")?;
    Ok(Value::array(items[..n].iter().cloned()))
}

pub fn drop(seq: &Value, n: &Value) -> Result<Value, NonExhaustiveMatch> {
    let items = items(seq, "drop")?;
    let n = count(n, items.len(), "drop")?;
    Ok(Value::array(items[n..].iter().cloned()))
}

pub fn concat(a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    let a = items(a, "concat")?;
    let b = items(b, "concat")?;
    Ok(Value::array(a.iter().chain(b.iter()).cloned()))
}

pub fn reduce(
    arr: &Value,
    mut f: impl FnMut(Value, &Value) -> Result<Value, NonExhaustiveMatch>,
    acc: Value,
) -> Result<Value, NonExhaustiveMatch> {
    items(arr, "reduce")?
        .iter()
        .try_fold(acc, |acc, item| f(acc, item))
}

pub fn map(
    arr: &Value,
    f: impl FnMut(&Value) -> Result<Value, NonExhaustiveMatch>,
) -> Result<Value, NonExhaustiveMatch> {
    let result: Vec<Value> = items(arr, "map")?
        .iter()
        .map(f)
        .collect::<Result<_, _>>()?;
    Ok(Value::array(result))
}

/// The predicate must return a `Bool`.
pub fn filter(
    arr: &Value,
    mut f: impl FnMut(&Value) -> Result<Value, NonExhaustiveMatch>,
) -> Result<Value, NonExhaustiveMatch> {
    let mut result = Vec::new();
    for item in items(arr, "filter")?.iter() {
        let keep = f(item)?;
        match keep.as_bool() {
            Some(true) => result.push(item.clone()),
            Some(false) => {}
            None => return Err(NonExhaustiveMatch::new(&keep).within("filter")),
        }
    }
    Ok(Value::array(result))
}
