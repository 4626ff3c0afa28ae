use crate::array::{items, reduce};
use uwu_match::{into_option, NonExhaustiveMatch};
use uwu_value::Value;

/// Floor division. `None` when `b` is zero.
pub fn div(a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
    match (a.as_number(), b.as_number()) {
        (Some(_), Some(b)) if b == 0.0 => Ok(Value::none()),
        (Some(a), Some(b)) => Ok(Value::some(Value::Number((a / b).floor()))),
        _ => Err(NonExhaustiveMatch::new(&Value::tuple2(a.clone(), b.clone())).within("div")),
    }
}

pub fn chain_do(
    option: &Value,
    f: impl FnOnce(&Value) -> Result<Value, NonExhaustiveMatch>,
) -> Result<Value, NonExhaustiveMatch> {
    match into_option(option).map_err(|err| err.within("chain_do"))? {
        None => Ok(Value::none()),
        Some(value) => {
            let result = f(&value)?;
            match into_option(&result).map_err(|err| err.within("chain_do"))? {
                None => Ok(Value::none()),
                Some(result) => Ok(Value::some(Value::tuple2(value, result))),
            }
        }
    }
}

pub fn chain_return(
    option: &Value,
    f: impl FnOnce(&Value) -> Result<Value, NonExhaustiveMatch>,
) -> Result<Value, NonExhaustiveMatch> {
    match into_option(option).map_err(|err| err.within("chain_return"))? {
        None => Ok(Value::none()),
        Some(value) => f(&value),
    }
}

/// `Some` of every payload in order, or `None` from the first `None` on. `f`
/// is not called after it has returned `None`.
pub fn traverse(
    arr: &Value,
    mut f: impl FnMut(&Value) -> Result<Value, NonExhaustiveMatch>,
) -> Result<Value, NonExhaustiveMatch> {
    reduce(
        arr,
        |acc, item| match into_option(&acc).map_err(|err| err.within("traverse"))? {
            None => Ok(Value::none()),
            Some(collected) => {
                let next = f(item)?;
                match into_option(&next).map_err(|err| err.within("traverse"))? {
                    None => Ok(Value::none()),
                    Some(next) => {
                        let mut values = items(&collected, "traverse")?.to_vec();
                        values.push(next);
                        Ok(Value::some(Value::array(values)))
                    }
                }
            }
        },
        Value::some(Value::array(Vec::new())),
    )
}
