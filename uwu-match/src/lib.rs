//! Runtime pattern matching over [`Value`]s.
//!
//! Branches are tried in order and the first pattern that matches wins. A
//! value that no pattern matches is a [`NonExhaustiveMatch`]; matching never
//! falls through silently.


pub mod tree;

pub use tree::{CaseTree, Compiled};

use fnv::FnvHashMap;
use std::{fmt, rc::Rc};
use uwu_diagnostic::{Diagnostic, Location, Message, Source};
use uwu_value::{ListView, Tag, Value, Variant};

pub type Path = Vec<usize>;

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Wildcard,
    Name(Rc<str>),
    Number(f64),
    String(Rc<str>),
    Bool(bool),
    Variant { tag: Tag, fields: Vec<Pattern> },
}

impl Pattern {
    pub fn name(name: &str) -> Self {
        Pattern::Name(Rc::from(name))
    }

    pub fn variant(tag: Tag, fields: Vec<Pattern>) -> Self {
        Pattern::Variant { tag, fields }
    }

    pub fn some(value: Pattern) -> Self {
        Pattern::variant(Tag::Some, vec![value])
    }

    pub fn none() -> Self {
        Pattern::variant(Tag::None, Vec::new())
    }

    pub fn tuple2(a: Pattern, b: Pattern) -> Self {
        Pattern::variant(Tag::Tuple, vec![a, b])
    }

    pub fn tuple3(a: Pattern, b: Pattern, c: Pattern) -> Self {
        Pattern::variant(Tag::Tuple, vec![a, b, c])
    }

    pub fn head(first: Pattern, rest: Pattern) -> Self {
        Pattern::variant(Tag::Head, vec![first, rest])
    }

    pub fn empty() -> Self {
        Pattern::variant(Tag::Empty, Vec::new())
    }

    /// Names bound by this pattern, with the path to the field each one binds,
    /// in left-to-right order.
    pub fn binding_paths(&self) -> Vec<(Rc<str>, Path)> {
        fn go(pattern: &Pattern, path: &mut Path, acc: &mut Vec<(Rc<str>, Path)>) {
            match pattern {
                Pattern::Name(name) => acc.push((name.clone(), path.clone())),
                Pattern::Variant { fields, .. } => {
                    for (ix, field) in fields.iter().enumerate() {
                        path.push(ix);
                        go(field, path, acc);
                        path.pop();
                    }
                }
                Pattern::Wildcard | Pattern::Number(_) | Pattern::String(_) | Pattern::Bool(_) => {}
            }
        }

        let mut acc = Vec::new();
        go(self, &mut Vec::new(), &mut acc);
        acc
    }

    fn bind(&self, value: &Value, bindings: &mut Bindings) -> bool {
        match self {
            Pattern::Wildcard => true,
            Pattern::Name(name) => {
                bindings.insert(name.clone(), value.clone());
                true
            }
            Pattern::Number(n) => value.as_number() == Some(*n),
            Pattern::String(s) => value.as_str() == Some(s.as_ref()),
            Pattern::Bool(b) => value.as_bool() == Some(*b),
            Pattern::Variant { tag, fields } => match value.as_variant() {
                Some(variant) if variant.tag() == *tag && variant.arity() == fields.len() => {
                    // Wildcards never read their field.
                    fields.iter().enumerate().all(|(ix, field)| {
                        matches!(field, Pattern::Wildcard)
                            || variant
                                .field(ix)
                                .map_or(false, |value| field.bind(&value, bindings))
                    })
                }
                _ => false,
            },
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => f.write_str("_"),
            Pattern::Name(name) => f.write_str(name),
            Pattern::Number(n) => f.write_str(&uwu_value::render_number(*n)),
            Pattern::String(s) => write!(f, "{:?}", s),
            Pattern::Bool(b) => write!(f, "{}", b),
            Pattern::Variant { tag, fields } => {
                f.write_str(tag.name())?;
                if !fields.is_empty() {
                    f.write_str("(")?;
                    for (ix, field) in fields.iter().enumerate() {
                        if ix > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", field)?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Branch<B> {
    pub pattern: Pattern,
    pub body: B,
}

impl<B> Branch<B> {
    pub fn new(pattern: Pattern, body: B) -> Self {
        Branch { pattern, body }
    }
}

/// Values bound by name in a matched pattern.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Bindings {
    values: FnvHashMap<Rc<str>, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings {
            values: FnvHashMap::default(),
        }
    }

    /// A name bound more than once keeps its last binding.
    fn insert(&mut self, name: Rc<str>, value: Value) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug)]
pub struct Matched<'b, B> {
    pub index: usize,
    pub bindings: Bindings,
    pub body: &'b B,
}

/// No pattern of a match accepted the value.
#[derive(Debug, Clone, PartialEq)]
pub struct NonExhaustiveMatch {
    pub found: Tag,
    pub value: String,
    pub site: Option<Rc<str>>,
}

impl NonExhaustiveMatch {
    pub fn new(value: &Value) -> Self {
        NonExhaustiveMatch {
            found: value.tag(),
            value: value.render(),
            site: None,
        }
    }

    /// Name the match that failed. The innermost name is kept.
    pub fn within(self, site: &str) -> Self {
        match self.site {
            Some(_) => self,
            None => NonExhaustiveMatch {
                site: Some(Rc::from(site)),
                ..self
            },
        }
    }

    pub fn report(&self, diagnostic: &mut Diagnostic) {
        diagnostic.item(
            self.site.as_ref().map(|site| Location {
                source: Source::Interactive {
                    label: String::from(site.as_ref()),
                },
                position: None,
            }),
            Message {
                content: String::from("non-exhaustive pattern match"),
                addendum: Some(format!(
                    "no pattern matched {} (tag {})",
                    self.value, self.found
                )),
            },
        )
    }
}

impl fmt::Display for NonExhaustiveMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("non-exhaustive pattern match")?;
        if let Some(site) = &self.site {
            write!(f, " in {}", site)?;
        }
        write!(f, ": no pattern matched {} (tag {})", self.value, self.found)
    }
}

impl std::error::Error for NonExhaustiveMatch {}

pub fn match_value<'b, B>(
    value: &Value,
    branches: &'b [Branch<B>],
) -> Result<Matched<'b, B>, NonExhaustiveMatch> {
    for (index, branch) in branches.iter().enumerate() {
        let mut bindings = Bindings::new();
        if branch.pattern.bind(value, &mut bindings) {
            tracing::trace!(branch = index, tag = %value.tag(), "pattern matched");
            return Ok(Matched {
                index,
                bindings,
                body: &branch.body,
            });
        }
    }
    let err = NonExhaustiveMatch::new(value);
    tracing::debug!(tag = %err.found, value = %err.value, "no pattern matched");
    Err(err)
}

enum OptionArm {
    Some,
    None,
}

pub fn into_option(value: &Value) -> Result<Option<Value>, NonExhaustiveMatch> {
    let branches = [
        Branch::new(Pattern::some(Pattern::name("value")), OptionArm::Some),
        Branch::new(Pattern::none(), OptionArm::None),
    ];
    let matched = match_value(value, &branches)?;
    Ok(match matched.body {
        OptionArm::Some => Some(
            matched
                .bindings
                .get("value")
                .cloned()
                .ok_or_else(|| NonExhaustiveMatch::new(value))?,
        ),
        OptionArm::None => None,
    })
}

pub fn into_list_view(value: &Value) -> Result<ListView<'_, Value>, NonExhaustiveMatch> {
    match value.as_variant() {
        Some(Variant::Head(first, rest)) => Ok(ListView::Head(first, &**rest)),
        Some(Variant::Empty) => Ok(ListView::Empty),
        _ => Err(NonExhaustiveMatch::new(value)),
    }
}
