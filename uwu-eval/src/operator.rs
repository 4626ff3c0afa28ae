use fnv::FnvHashMap;
use lazy_static::lazy_static;
use std::{fmt, rc::Rc};
use uwu_match::NonExhaustiveMatch;
use uwu_value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,

    Append,
    Concat,

    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

pub static OPERATORS: &[Operator] = &[
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::FloorDivide,
    Operator::Modulo,
    Operator::Append,
    Operator::Concat,
    Operator::Eq,
    Operator::Neq,
    Operator::Lt,
    Operator::Gt,
    Operator::Lte,
    Operator::Gte,
];

lazy_static! {
    static ref SYMBOLS: FnvHashMap<&'static str, Operator> = OPERATORS
        .iter()
        .map(|operator| (operator.symbol(), *operator))
        .collect();
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        SYMBOLS.get(symbol).copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::FloorDivide => "//",
            Operator::Modulo => "%",
            Operator::Append => "<>",
            Operator::Concat => "++",
            Operator::Eq => "==",
            Operator::Neq => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
        }
    }

    pub fn apply(&self, a: &Value, b: &Value) -> Result<Value, NonExhaustiveMatch> {
        match (self, a, b) {
            (Operator::Eq, _, _) => Ok(Value::Bool(same_value(a, b))),
            (Operator::Neq, _, _) => Ok(Value::Bool(!same_value(a, b))),

            (_, Value::Number(x), Value::Number(y)) => match self {
                Operator::Add => Ok(Value::Number(x + y)),
                Operator::Subtract => Ok(Value::Number(x - y)),
                Operator::Multiply => Ok(Value::Number(x * y)),
                Operator::Divide => Ok(Value::Number(x / y)),
                Operator::FloorDivide => Ok(Value::Number((x / y).floor())),
                Operator::Modulo => Ok(Value::Number(x % y)),
                Operator::Lt => Ok(Value::Bool(x < y)),
                Operator::Gt => Ok(Value::Bool(x > y)),
                Operator::Lte => Ok(Value::Bool(x <= y)),
                Operator::Gte => Ok(Value::Bool(x >= y)),
                _ => Err(self.mismatch(a, b)),
            },

            (_, Value::String(x), Value::String(y)) => match self {
                Operator::Append => {
                    let mut result = String::with_capacity(x.len() + y.len());
                    result.push_str(x);
                    result.push_str(y);
                    Ok(Value::String(Rc::from(result)))
                }
                Operator::Lt => Ok(Value::Bool(x < y)),
                Operator::Gt => Ok(Value::Bool(x > y)),
                Operator::Lte => Ok(Value::Bool(x <= y)),
                Operator::Gte => Ok(Value::Bool(x >= y)),
                _ => Err(self.mismatch(a, b)),
            },

            (Operator::Concat, Value::Array(x), Value::Array(y)) => {
                Ok(Value::array(x.iter().chain(y.iter()).cloned()))
            }

            _ => Err(self.mismatch(a, b)),
        }
    }

    fn mismatch(&self, a: &Value, b: &Value) -> NonExhaustiveMatch {
        NonExhaustiveMatch::new(&Value::tuple2(a.clone(), b.clone())).within(self.symbol())
    }
}

/// Structural equality in which numbers are the same when they are both `NaN`
/// or have identical bits, so `NaN == NaN` and `0 != -0`.
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
        }
        (Value::Array(xs), Value::Array(ys)) => same_items(xs, ys),
        (Value::Variant(x), Value::Variant(y)) => {
            x.tag() == y.tag() && x.arity() == y.arity() && same_items(&x.fields(), &y.fields())
        }
        _ => a == b,
    }
}

fn same_items(xs: &[Value], ys: &[Value]) -> bool {
    xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value(x, y))
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
