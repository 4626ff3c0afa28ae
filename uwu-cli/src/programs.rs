//! The bundled example programs.

use crate::run::RunError;
use std::io::Write;
use uwu_builtins::{function, option, sort};
use uwu_eval::{array, NonExhaustiveMatch, Operator};
use uwu_match::{match_value, Branch, Pattern};
use uwu_value::Value;

pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    body: fn(&mut dyn Write) -> Result<(), RunError>,
}

impl Program {
    pub fn run(&self, out: &mut dyn Write) -> Result<(), RunError> {
        tracing::debug!(program = self.name, "running program");
        (self.body)(out)
    }
}

pub static PROGRAMS: &[Program] = &[
    Program {
        name: "index",
        description: "sort a list both ways, then match an option and a tuple",
        body: index,
    },
    Program {
        name: "merge",
        description: "merge two sorted lists",
        body: merge,
    },
    Program {
        name: "return",
        description: "pick a greeting, then map and filter an array",
        body: r#return,
    },
    Program {
        name: "currying",
        description: "compose partially applied functions",
        body: currying,
    },
    Program {
        name: "pipeline",
        description: "chain divisions through options",
        body: pipeline,
    },
];

pub fn find(name: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|program| program.name == name)
}

fn index(out: &mut dyn Write) -> Result<(), RunError> {
    let input = [17.0, 9.0, 21.0, 3.0, 0.0];
    writeln!(
        out,
        "{}",
        Value::from(sort::bubble_sort(sort::number_cmp, &input))
    )?;
    writeln!(out, "{}", Value::from(sort::merge_sort(&input)))?;

    let option = [
        Branch::new(Pattern::some(Pattern::name("x")), "Some"),
        Branch::new(Pattern::none(), "None"),
    ];
    let matched = match_value(&Value::some(Value::number(1.0)), &option)
        .map_err(|err| err.within("index"))?;
    tracing::debug!(branch = *matched.body, "matched option");

    let tuple = [Branch::new(
        Pattern::tuple2(Pattern::Wildcard, Pattern::Wildcard),
        "Tuple",
    )];
    let matched = match_value(
        &Value::tuple2(Value::number(1.0), Value::string("12")),
        &tuple,
    )
    .map_err(|err| err.within("index"))?;
    tracing::debug!(branch = *matched.body, "matched tuple");
    Ok(())
}

fn merge(out: &mut dyn Write) -> Result<(), RunError> {
    let merged = sort::merge(&[1.0, 4.0, 9.0], &[2.0, 3.0, 10.0]);
    writeln!(out, "{}", Value::from(merged))?;
    Ok(())
}

fn r#return(out: &mut dyn Write) -> Result<(), RunError> {
    let is_morning = false;
    let message = if is_morning { "Good morning!" } else { "Hello!" };
    writeln!(out, "{}", Value::string(message))?;

    let add_one = |x: &Value| Operator::Add.apply(x, &Value::number(1.0));
    let is_even = |x: &Value| -> Result<Value, NonExhaustiveMatch> {
        let remainder = Operator::Modulo.apply(x, &Value::number(2.0))?;
        Operator::Eq.apply(&remainder, &Value::number(0.0))
    };
    let incremented = array::map(&Value::from(vec![1.0, 2.0, 3.0]), add_one)?;
    writeln!(out, "{}", array::filter(&incremented, is_even)?)?;
    Ok(())
}

fn classy_greeting(first_name: &str, last_name: &str) -> String {
    ["The name's ", last_name, ", ", first_name, " ", last_name].concat()
}

fn currying(out: &mut dyn Write) -> Result<(), RunError> {
    let yell_greetings = function::compose2(|s: String| s.to_uppercase(), classy_greeting);
    writeln!(out, "{}", Value::string(&yell_greetings("James", "Bond")))?;

    let add = |a: f64, b: f64| a + b;
    let multiply = |a: f64, b: f64| a * b;
    let f = function::compose(
        function::compose(f64::abs, function::partial(add, 1.0)),
        function::partial(multiply, 2.0),
    );
    writeln!(out, "{}", Value::number(f(-4.0)))?;
    Ok(())
}

fn pipeline(out: &mut dyn Write) -> Result<(), RunError> {
    writeln!(out, "{}", Value::from(option::div(6, 2)))?;

    let pair = option::chain_do(Some(2), function::partial(option::div, 6));
    writeln!(out, "{}", Value::from(pair))?;

    let product = option::chain_do(pair, |(a, b)| Some(a * b));
    let sum = option::chain_return(product, |((a, b), c)| Some(a + b + c));
    writeln!(out, "{}", Value::from(sum))?;
    Ok(())
}
