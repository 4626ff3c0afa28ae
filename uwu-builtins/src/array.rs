use uwu_value::ListView;

pub fn len<T>(seq: &[T]) -> usize {
    seq.len()
}

pub fn get_head<T>(seq: &[T]) -> ListView<'_, T> {
    ListView::of(seq)
}

/// The first `n` elements, or all of them when there are fewer.
pub fn take<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[..n.min(seq.len())].to_vec()
}

/// Everything after the first `n` elements.
pub fn drop<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[n.min(seq.len())..].to_vec()
}

pub fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    result.extend_from_slice(a);
    result.extend_from_slice(b);
    result
}

/// Left fold.
pub fn reduce<T, A>(arr: &[T], mut f: impl FnMut(A, &T) -> A, acc: A) -> A {
    arr.iter().fold(acc, |acc, item| f(acc, item))
}

pub fn map<T, U>(arr: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    arr.iter().map(f).collect()
}

pub fn filter<T: Clone>(arr: &[T], mut f: impl FnMut(&T) -> bool) -> Vec<T> {
    arr.iter().filter(|&item| f(item)).cloned().collect()
}
