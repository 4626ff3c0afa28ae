//! Runtime values of the uwu example programs.
//!
//! Every value is immutable once built. Sum types are closed: a variant is one
//! of `Some`, `None`, `Tuple`, `Head` or `Empty`, and is identified by its
//! [`Tag`] alone.


pub mod json;

use quickcheck::{Arbitrary, Gen};
use std::{cmp::Ordering, fmt, ops::Deref, rc::Rc};

/// The discriminant of a [`Value`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Tag {
    Number,
    String,
    Bool,
    Unit,
    Array,

    Some,
    None,
    Tuple,
    Head,
    Empty,
}

pub const TAGS: &[Tag] = &[
    Tag::Number,
    Tag::String,
    Tag::Bool,
    Tag::Unit,
    Tag::Array,
    Tag::Some,
    Tag::None,
    Tag::Tuple,
    Tag::Head,
    Tag::Empty,
];

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Number => "Number",
            Tag::String => "String",
            Tag::Bool => "Bool",
            Tag::Unit => "Unit",
            Tag::Array => "Array",
            Tag::Some => "Some",
            Tag::None => "None",
            Tag::Tuple => "Tuple",
            Tag::Head => "Head",
            Tag::Empty => "Empty",
        }
    }

    pub fn from_name(name: &str) -> Option<Tag> {
        TAGS.iter().copied().find(|tag| tag.name() == name)
    }

    /// Whether this tag names a sum type variant rather than plain data.
    pub fn is_variant(&self) -> bool {
        !self.arities().is_empty()
    }

    /// The numbers of fields a variant with this tag may carry.
    pub fn arities(&self) -> &'static [usize] {
        match self {
            Tag::Some => &[1],
            Tag::None | Tag::Empty => &[0],
            Tag::Tuple => &[2, 3],
            Tag::Head => &[2],
            Tag::Number | Tag::String | Tag::Bool | Tag::Unit | Tag::Array => &[],
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Arbitrary for Tag {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(TAGS).unwrap()
    }
}

/// Access to the discriminant of a sum type value.
pub trait Tagged {
    fn tag(&self) -> Tag;
}

impl<T> Tagged for Option<T> {
    fn tag(&self) -> Tag {
        match self {
            Some(_) => Tag::Some,
            None => Tag::None,
        }
    }
}

impl<A, B> Tagged for (A, B) {
    fn tag(&self) -> Tag {
        Tag::Tuple
    }
}

impl<A, B, C> Tagged for (A, B, C) {
    fn tag(&self) -> Tag {
        Tag::Tuple
    }
}

/// A sequence seen as either empty or a first element followed by the rest.
///
/// The view borrows from the sequence it was taken from and is rebuilt on
/// every decomposition.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a, T> {
    Empty,
    Head(&'a T, &'a [T]),
}

impl<'a, T> Clone for ListView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for ListView<'a, T> {}

impl<'a, T> ListView<'a, T> {
    pub fn of(seq: &'a [T]) -> Self {
        match seq.split_first() {
            None => ListView::Empty,
            Some((first, rest)) => ListView::Head(first, rest),
        }
    }
}

impl<'a, T> Tagged for ListView<'a, T> {
    fn tag(&self) -> Tag {
        match self {
            ListView::Empty => Tag::Empty,
            ListView::Head(_, _) => Tag::Head,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(Rc<str>),
    Bool(bool),
    Unit,
    Array(Rc<[Value]>),
    Variant(Rc<Variant>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Some(Value),
    None,
    Tuple2(Value, Value),
    Tuple3(Value, Value, Value),
    Head(Value, Tail),
    Empty,
}

/// The elements of a list after its head, sharing storage with the list.
#[derive(Clone)]
pub struct Tail {
    items: Rc<[Value]>,
    start: usize,
}

impl Tail {
    pub fn to_rc(&self) -> Rc<[Value]> {
        if self.start == 0 {
            self.items.clone()
        } else {
            self.iter().cloned().collect()
        }
    }
}

impl From<Rc<[Value]>> for Tail {
    fn from(items: Rc<[Value]>) -> Self {
        Tail { items, start: 0 }
    }
}

impl Deref for Tail {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.items[self.start..]
    }
}

impl PartialEq for Tail {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl fmt::Debug for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Variant {
    pub fn tag(&self) -> Tag {
        match self {
            Variant::Some(_) => Tag::Some,
            Variant::None => Tag::None,
            Variant::Tuple2(_, _) | Variant::Tuple3(_, _, _) => Tag::Tuple,
            Variant::Head(_, _) => Tag::Head,
            Variant::Empty => Tag::Empty,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Variant::None | Variant::Empty => 0,
            Variant::Some(_) => 1,
            Variant::Tuple2(_, _) | Variant::Head(_, _) => 2,
            Variant::Tuple3(_, _, _) => 3,
        }
    }

    /// The field at `ix`, in declaration order. `Head`'s rest is an `Array`.
    pub fn field(&self, ix: usize) -> Option<Value> {
        match (self, ix) {
            (Variant::Some(a), 0)
            | (Variant::Tuple2(a, _), 0)
            | (Variant::Tuple3(a, _, _), 0)
            | (Variant::Head(a, _), 0) => Some(a.clone()),
            (Variant::Tuple2(_, b), 1) | (Variant::Tuple3(_, b, _), 1) => Some(b.clone()),
            (Variant::Tuple3(_, _, c), 2) => Some(c.clone()),
            (Variant::Head(_, rest), 1) => Some(Value::Array(rest.to_rc())),
            _ => None,
        }
    }

    pub fn fields(&self) -> Vec<Value> {
        (0..self.arity()).filter_map(|ix| self.field(ix)).collect()
    }
}

impl Tagged for Variant {
    fn tag(&self) -> Tag {
        Variant::tag(self)
    }
}

impl Value {
    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    pub fn string(s: &str) -> Value {
        Value::String(Rc::from(s))
    }

    pub fn array<I: IntoIterator<Item = Value>>(items: I) -> Value {
        Value::Array(items.into_iter().collect())
    }

    fn variant(variant: Variant) -> Value {
        Value::Variant(Rc::new(variant))
    }

    pub fn some(value: Value) -> Value {
        Value::variant(Variant::Some(value))
    }

    pub fn none() -> Value {
        Value::variant(Variant::None)
    }

    pub fn tuple2(a: Value, b: Value) -> Value {
        Value::variant(Variant::Tuple2(a, b))
    }

    pub fn tuple3(a: Value, b: Value, c: Value) -> Value {
        Value::variant(Variant::Tuple3(a, b, c))
    }

    pub fn head(first: Value, rest: Rc<[Value]>) -> Value {
        Value::variant(Variant::Head(first, Tail::from(rest)))
    }

    /// `Head` of `items[start..]`, or `Empty` past the end. The rest is not
    /// copied.
    pub fn view_from(items: &Rc<[Value]>, start: usize) -> Value {
        match items.get(start) {
            None => Value::empty(),
            Some(first) => Value::variant(Variant::Head(
                first.clone(),
                Tail {
                    items: items.clone(),
                    start: start + 1,
                },
            )),
        }
    }

    pub fn empty() -> Value {
        Value::variant(Variant::Empty)
    }

    pub fn tag(&self) -> Tag {
        match self {
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::Bool(_) => Tag::Bool,
            Value::Unit => Tag::Unit,
            Value::Array(_) => Tag::Array,
            Value::Variant(variant) => variant.tag(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Rc<[Value]>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_variant(&self) -> Option<&Variant> {
        match self {
            Value::Variant(variant) => Some(variant),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut s = String::new();
        self.render_into(&mut s);
        s
    }

    fn render_into(&self, s: &mut String) {
        match self {
            Value::Number(n) => s.push_str(&render_number(*n)),
            Value::String(text) => s.push_str(&format!("{:?}", text)),
            Value::Bool(b) => s.push_str(if *b { "true" } else { "false" }),
            Value::Unit => s.push_str("()"),
            Value::Array(items) => render_items(s, '[', items.iter(), ']'),
            Value::Variant(variant) => match variant.as_ref() {
                Variant::None | Variant::Empty => s.push_str(variant.tag().name()),
                Variant::Head(first, rest) => {
                    s.push_str("Head(");
                    first.render_into(s);
                    s.push_str(", ");
                    render_items(s, '[', rest.iter(), ']');
                    s.push(')');
                }
                _ => {
                    s.push_str(variant.tag().name());
                    render_items(s, '(', variant.fields().iter(), ')');
                }
            },
        }
    }
}

fn render_items<'a, I: Iterator<Item = &'a Value>>(s: &mut String, open: char, items: I, close: char) {
    s.push(open);
    for (ix, item) in items.enumerate() {
        if ix > 0 {
            s.push_str(", ");
        }
        item.render_into(s);
    }
    s.push(close);
}

/// Integral numbers print without a decimal point. Magnitudes from `1e21` up
/// and below `1e-6` print in exponent form (`1e+21`, `1.5e-7`).
pub fn render_number(n: f64) -> String {
    if n.is_nan() {
        String::from("NaN")
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        String::from("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let s = format!("{:e}", n);
        match s.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => s,
        }
    } else {
        format!("{}", n)
    }
}

/// Like [`Value::render`], except that a top-level string is written as-is.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            value => f.write_str(&value.render()),
        }
    }
}

impl Tagged for Value {
    fn tag(&self) -> Tag {
        Value::tag(self)
    }
}

/// Numbers order numerically and strings lexicographically. Any other pair is
/// unordered unless the two values are equal.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items.into_iter().map(Into::into))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Value::some(value.into()),
            None => Value::none(),
        }
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::tuple2(a.into(), b.into())
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::tuple3(a.into(), b.into(), c.into())
    }
}

impl<'a, T: Clone + Into<Value>> From<ListView<'a, T>> for Value {
    fn from(view: ListView<'a, T>) -> Self {
        match view {
            ListView::Empty => Value::empty(),
            ListView::Head(first, rest) => Value::head(
                first.clone().into(),
                rest.iter().cloned().map(Into::into).collect(),
            ),
        }
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        arbitrary_value(g, 2)
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let choices: &[u8] = if depth == 0 {
        &[0, 1, 2, 3, 4, 5]
    } else {
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    };
    match *g.choose(choices).unwrap() {
        0 => Value::Number(i8::arbitrary(g) as f64),
        1 => Value::string(g.choose(&["", "a", "uwu", "None"]).unwrap()),
        2 => Value::Bool(bool::arbitrary(g)),
        3 => Value::Unit,
        4 => Value::none(),
        5 => Value::empty(),
        6 => {
            let len = usize::arbitrary(g) % 4;
            Value::array((0..len).map(|_| arbitrary_value(g, depth - 1)))
        }
        7 => Value::some(arbitrary_value(g, depth - 1)),
        8 => Value::tuple2(arbitrary_value(g, depth - 1), arbitrary_value(g, depth - 1)),
        9 => Value::tuple3(
            arbitrary_value(g, depth - 1),
            arbitrary_value(g, depth - 1),
            arbitrary_value(g, depth - 1),
        ),
        _ => {
            let len = usize::arbitrary(g) % 3;
            Value::head(
                arbitrary_value(g, depth - 1),
                (0..len).map(|_| arbitrary_value(g, depth - 1)).collect(),
            )
        }
    }
}
