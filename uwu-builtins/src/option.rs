/// Floor division. `None` when `b` is zero or the quotient overflows.
pub fn div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Run `f` on the payload and keep the payload next to its result.
pub fn chain_do<A: Clone, B>(
    option: Option<A>,
    f: impl FnOnce(A) -> Option<B>,
) -> Option<(A, B)> {
    match option {
        None => None,
        Some(value) => match f(value.clone()) {
            None => None,
            Some(result) => Some((value, result)),
        },
    }
}

pub fn chain_return<A, B>(option: Option<A>, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
    match option {
        None => None,
        Some(value) => f(value),
    }
}

/// `f` is not called again once it has returned `None`.
pub fn traverse<T, U>(arr: &[T], mut f: impl FnMut(&T) -> Option<U>) -> Option<Vec<U>> {
    let mut result = Vec::with_capacity(arr.len());
    for item in arr {
        result.push(f(item)?);
    }
    Some(result)
}
