//! The tagged-record wire format of the generated programs.
//!
//! A variant is an object with a `"TAG"` name and positional fields `"_0"`,
//! `"_1"`, ...; unit variants carry no fields (`{"TAG": "None"}`). `null` is
//! `Unit`. Everything else maps onto the corresponding JSON type.

use crate::{Tag, Value, Variant};
use serde_json::{Map, Value as Json};
use std::{fmt, rc::Rc};

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    Number {
        value: String,
    },
    Object {
        keys: Vec<String>,
    },
    UnknownTag {
        tag: String,
    },
    UnexpectedField {
        tag: Tag,
        field: String,
    },
    Arity {
        tag: Tag,
        found: usize,
    },
    ExpectedArray {
        tag: Tag,
        field: String,
    },
}

impl DecodeError {
    /// The 1-indexed line and column of a syntax error.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            DecodeError::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Syntax { message, .. } => f.write_str(message),
            DecodeError::Number { value } => write!(f, "number {} is out of range", value),
            DecodeError::Object { keys } => {
                write!(f, "object without a \"TAG\" field (keys: {:?})", keys)
            }
            DecodeError::UnknownTag { tag } => write!(f, "unknown tag {:?}", tag),
            DecodeError::UnexpectedField { tag, field } => {
                write!(f, "unexpected field {:?} in {}", field, tag)
            }
            DecodeError::Arity { tag, found } => write!(
                f,
                "{} takes {} field(s), found {}",
                tag,
                tag.arities()
                    .iter()
                    .map(|arity| arity.to_string())
                    .collect::<Vec<_>>()
                    .join(" or "),
                found
            ),
            DecodeError::ExpectedArray { tag, field } => {
                write!(f, "field {:?} of {} must be an array", field, tag)
            }
        }
    }
}

pub fn parse(input: &str) -> Result<Value, DecodeError> {
    let json: Json = serde_json::from_str(input).map_err(|err| {
        let message = err.to_string();
        // The position is reported separately.
        let message = match message.rfind(" at line ") {
            Some(ix) => String::from(&message[..ix]),
            None => message,
        };
        DecodeError::Syntax {
            line: err.line(),
            column: err.column(),
            message,
        }
    })?;
    decode(&json)
}

pub fn decode(json: &Json) -> Result<Value, DecodeError> {
    match json {
        Json::Null => Ok(Value::Unit),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => match n.as_f64() {
            Some(n) => Ok(Value::Number(n)),
            None => Err(DecodeError::Number {
                value: n.to_string(),
            }),
        },
        Json::String(s) => Ok(Value::string(s)),
        Json::Array(items) => decode_items(items).map(Value::Array),
        Json::Object(fields) => decode_variant(fields),
    }
}

fn decode_items(items: &[Json]) -> Result<Rc<[Value]>, DecodeError> {
    items.iter().map(decode).collect()
}

fn decode_variant(object: &Map<String, Json>) -> Result<Value, DecodeError> {
    let tag = match object.get("TAG") {
        Some(Json::String(name)) => match Tag::from_name(name) {
            Some(tag) if tag.is_variant() => tag,
            _ => return Err(DecodeError::UnknownTag { tag: name.clone() }),
        },
        _ => {
            return Err(DecodeError::Object {
                keys: object.keys().cloned().collect(),
            })
        }
    };

    let mut fields: Vec<&Json> = Vec::new();
    while let Some(field) = object.get(&field_name(fields.len())) {
        fields.push(field);
    }
    if let Some(field) = object
        .keys()
        .find(|key| key.as_str() != "TAG" && !(0..fields.len()).any(|ix| **key == field_name(ix)))
    {
        return Err(DecodeError::UnexpectedField {
            tag,
            field: field.clone(),
        });
    }

    match (tag, fields.as_slice()) {
        (Tag::Some, [value]) => Ok(Value::some(decode(value)?)),
        (Tag::None, []) => Ok(Value::none()),
        (Tag::Tuple, [a, b]) => Ok(Value::tuple2(decode(a)?, decode(b)?)),
        (Tag::Tuple, [a, b, c]) => Ok(Value::tuple3(decode(a)?, decode(b)?, decode(c)?)),
        (Tag::Head, [first, rest]) => match rest {
            Json::Array(rest) => Ok(Value::head(decode(first)?, decode_items(rest)?)),
            _ => Err(DecodeError::ExpectedArray {
                tag,
                field: field_name(1),
            }),
        },
        (Tag::Empty, []) => Ok(Value::empty()),
        (tag, fields) => Err(DecodeError::Arity {
            tag,
            found: fields.len(),
        }),
    }
}

fn field_name(ix: usize) -> String {
    format!("_{}", ix)
}

/// Non-finite numbers have no JSON representation and encode as `null`.
pub fn encode(value: &Value) -> Json {
    match value {
        Value::Number(n) => encode_number(*n),
        Value::String(s) => Json::String(String::from(s.as_ref())),
        Value::Bool(b) => Json::Bool(*b),
        Value::Unit => Json::Null,
        Value::Array(items) => Json::Array(items.iter().map(encode).collect()),
        Value::Variant(variant) => {
            let mut object = Map::new();
            object.insert(
                String::from("TAG"),
                Json::String(String::from(variant.tag().name())),
            );
            let fields = match variant.as_ref() {
                Variant::Head(first, rest) => vec![
                    encode(first),
                    Json::Array(rest.iter().map(encode).collect()),
                ],
                variant => variant.fields().iter().map(encode).collect(),
            };
            for (ix, field) in fields.into_iter().enumerate() {
                object.insert(field_name(ix), field);
            }
            Json::Object(object)
        }
    }
}

const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

fn encode_number(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Json::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number)
    }
}

pub fn to_string(value: &Value) -> String {
    encode(value).to_string()
}
