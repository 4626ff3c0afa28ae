pub fn id<A>(a: A) -> A {
    a
}

/// `compose(f, g)(a) == f(g(a))`
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |a| f(g(a))
}

/// `compose2(f, g)(a, b) == f(g(a, b))`
pub fn compose2<A, B, C, D>(f: impl Fn(C) -> D, g: impl Fn(A, B) -> C) -> impl Fn(A, B) -> D {
    move |a, b| f(g(a, b))
}

/// Fix the first argument of a two-argument function.
pub fn partial<A: Clone, B, C>(f: impl Fn(A, B) -> C, a: A) -> impl Fn(B) -> C {
    move |b| f(a.clone(), b)
}

pub fn flip<A, B, C>(f: impl Fn(A, B) -> C) -> impl Fn(B, A) -> C {
    move |b, a| f(a, b)
}
