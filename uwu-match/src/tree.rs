//! Decision trees for ordered pattern matches.
//!
//! Each node tests one field of the scrutinee; leaves either select a branch
//! or record that no branch can match. A compiled tree selects the same branch
//! as trying the patterns in order.

use crate::{Bindings, Branch, Matched, NonExhaustiveMatch, Path, Pattern};
use std::{cmp::Reverse, rc::Rc};
use uwu_value::{Tag, Value};

#[derive(Debug, Clone)]
pub enum Test {
    Variant { tag: Tag, arity: usize },
    Number(f64),
    String(Rc<str>),
    Bool(bool),
}

impl Test {
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Test::Variant { tag, arity } => value
                .as_variant()
                .map_or(false, |variant| variant.tag() == *tag && variant.arity() == *arity),
            Test::Number(n) => value.as_number() == Some(*n),
            Test::String(s) => value.as_str() == Some(s.as_ref()),
            Test::Bool(b) => value.as_bool() == Some(*b),
        }
    }
}

/// Tests are equal when they accept the same values.
impl PartialEq for Test {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Test::Variant { tag, arity },
                Test::Variant {
                    tag: other_tag,
                    arity: other_arity,
                },
            ) => tag == other_tag && arity == other_arity,
            (Test::Number(a), Test::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Test::String(a), Test::String(b)) => a == b,
            (Test::Bool(a), Test::Bool(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseTree {
    Node {
        path: Path,
        test: Test,
        yes: Box<CaseTree>,
        no: Box<CaseTree>,
    },
    Leaf {
        branch: usize,
        bindings: Vec<(Rc<str>, Path)>,
    },
    Missing,
}

struct Column<'p> {
    path: Path,
    test: Test,
    fields: &'p [Pattern],
}

/// The refutable parts of one branch's pattern that are still unchecked.
struct Row<'p> {
    columns: Vec<Column<'p>>,
    branch: usize,
}

impl<'p> Clone for Row<'p> {
    fn clone(&self) -> Self {
        Row {
            columns: self
                .columns
                .iter()
                .map(|column| Column {
                    path: column.path.clone(),
                    test: column.test.clone(),
                    fields: column.fields,
                })
                .collect(),
            branch: self.branch,
        }
    }
}

const NO_FIELDS: &[Pattern] = &[];

fn refutable(path: Path, pattern: &Pattern) -> Option<Column<'_>> {
    let (test, fields) = match pattern {
        Pattern::Wildcard | Pattern::Name(_) => return None,
        Pattern::Number(n) => (Test::Number(*n), NO_FIELDS),
        Pattern::String(s) => (Test::String(s.clone()), NO_FIELDS),
        Pattern::Bool(b) => (Test::Bool(*b), NO_FIELDS),
        Pattern::Variant { tag, fields } => (
            Test::Variant {
                tag: *tag,
                arity: fields.len(),
            },
            fields.as_slice(),
        ),
    };
    Some(Column { path, test, fields })
}

impl<'p> Row<'p> {
    fn new(branch: usize, pattern: &'p Pattern) -> Self {
        Row {
            columns: refutable(Vec::new(), pattern).into_iter().collect(),
            branch,
        }
    }

    fn find(&self, path: &[usize]) -> Option<usize> {
        self.columns.iter().position(|column| column.path == path)
    }

    /// Replace a column whose test passed with the columns of its fields.
    fn specialize(mut self, ix: usize) -> Self {
        let column = self.columns.remove(ix);
        let fields: Vec<Column<'p>> = column
            .fields
            .iter()
            .enumerate()
            .filter_map(|(field_ix, field)| {
                let mut path = column.path.clone();
                path.push(field_ix);
                refutable(path, field)
            })
            .collect();
        self.columns.splice(ix..ix, fields);
        self
    }
}

/// Test the first row's column that the most rows constrain. Ties go to the
/// leftmost column.
fn choose_column(first: &Row<'_>, rows: &[Row<'_>]) -> Option<(Path, Test)> {
    first
        .columns
        .iter()
        .enumerate()
        .max_by_key(|(ix, column)| {
            let constrained = rows
                .iter()
                .filter(|row| row.find(&column.path).is_some())
                .count();
            (constrained, Reverse(*ix))
        })
        .map(|(_, column)| (column.path.clone(), column.test.clone()))
}

fn compile_rows(rows: Vec<Row<'_>>, bindings: &[Vec<(Rc<str>, Path)>]) -> CaseTree {
    let (path, test) = match rows.first() {
        None => return CaseTree::Missing,
        Some(first) => match choose_column(first, &rows) {
            None => {
                return CaseTree::Leaf {
                    branch: first.branch,
                    bindings: bindings[first.branch].clone(),
                }
            }
            Some(column) => column,
        },
    };

    let mut yes = Vec::new();
    let mut no = Vec::new();
    for row in rows {
        match row.find(&path) {
            None => {
                yes.push(row.clone());
                no.push(row);
            }
            Some(ix) if row.columns[ix].test == test => yes.push(row.specialize(ix)),
            Some(_) => no.push(row),
        }
    }

    CaseTree::Node {
        path,
        test,
        yes: Box::new(compile_rows(yes, bindings)),
        no: Box::new(compile_rows(no, bindings)),
    }
}

fn resolve(value: &Value, path: &[usize]) -> Option<Value> {
    let mut current = value.clone();
    for ix in path {
        current = current.as_variant()?.field(*ix)?;
    }
    Some(current)
}

impl CaseTree {
    pub fn compile(patterns: &[Pattern]) -> Self {
        let bindings: Vec<Vec<(Rc<str>, Path)>> =
            patterns.iter().map(Pattern::binding_paths).collect();
        let rows = patterns
            .iter()
            .enumerate()
            .map(|(branch, pattern)| Row::new(branch, pattern))
            .collect();
        let tree = compile_rows(rows, &bindings);
        tracing::debug!(
            branches = patterns.len(),
            nodes = tree.size(),
            "compiled case tree"
        );
        tree
    }

    /// The number of nodes and leaves.
    pub fn size(&self) -> usize {
        match self {
            CaseTree::Node { yes, no, .. } => 1 + yes.size() + no.size(),
            CaseTree::Leaf { .. } | CaseTree::Missing => 1,
        }
    }

    pub fn eval(&self, value: &Value) -> Result<(usize, Bindings), NonExhaustiveMatch> {
        let mut tree = self;
        loop {
            match tree {
                CaseTree::Node {
                    path,
                    test,
                    yes,
                    no,
                } => {
                    tree = if resolve(value, path).map_or(false, |field| test.check(&field)) {
                        &**yes
                    } else {
                        &**no
                    };
                }
                CaseTree::Leaf { branch, bindings } => {
                    let mut result = Bindings::new();
                    for (name, path) in bindings {
                        match resolve(value, path) {
                            Some(field) => result.insert(name.clone(), field),
                            None => return Err(NonExhaustiveMatch::new(value)),
                        }
                    }
                    tracing::trace!(branch = *branch, tag = %value.tag(), "case tree matched");
                    return Ok((*branch, result));
                }
                CaseTree::Missing => {
                    let err = NonExhaustiveMatch::new(value);
                    tracing::debug!(tag = %err.found, value = %err.value, "case tree missed");
                    return Err(err);
                }
            }
        }
    }
}

/// Branches with their patterns compiled into a [`CaseTree`].
#[derive(Debug)]
pub struct Compiled<B> {
    tree: CaseTree,
    bodies: Vec<B>,
}

impl<B> Compiled<B> {
    pub fn new(branches: Vec<Branch<B>>) -> Self {
        let patterns: Vec<Pattern> = branches
            .iter()
            .map(|branch| branch.pattern.clone())
            .collect();
        Compiled {
            tree: CaseTree::compile(&patterns),
            bodies: branches.into_iter().map(|branch| branch.body).collect(),
        }
    }

    pub fn tree(&self) -> &CaseTree {
        &self.tree
    }

    pub fn run(&self, value: &Value) -> Result<Matched<'_, B>, NonExhaustiveMatch> {
        let (index, bindings) = self.tree.eval(value)?;
        Ok(Matched {
            index,
            bindings,
            body: &self.bodies[index],
        })
    }
}
