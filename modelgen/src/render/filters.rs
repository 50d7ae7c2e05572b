//! Case-conversion filters registered on every template set.

use std::collections::HashMap;

use tera::{Result, Tera, Value};

use crate::names::NameCase;

pub(super) fn register(tera: &mut Tera) {
    tera.register_filter("snake_case", snake_case);
    tera.register_filter("screaming_snake_case", screaming_snake_case);
    tera.register_filter("kebab_case", kebab_case);
    tera.register_filter("screaming_kebab_case", screaming_kebab_case);
    tera.register_filter("pascal_case", pascal_case);
    tera.register_filter("camel_case", camel_case);
    tera.register_filter("delimited", delimited);
}

fn name_arg(value: &Value, filter: &str) -> Result<NameCase> {
    value
        .as_str()
        .map(NameCase::from)
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter expects a string")))
}

fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(name_arg(value, "snake_case")?.to_snake()))
}

fn screaming_snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(
        name_arg(value, "screaming_snake_case")?.to_screaming_snake(),
    ))
}

fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(name_arg(value, "kebab_case")?.to_kebab()))
}

fn screaming_kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(
        name_arg(value, "screaming_kebab_case")?.to_screaming_kebab(),
    ))
}

fn pascal_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(name_arg(value, "pascal_case")?.to_pascal()))
}

fn camel_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(name_arg(value, "camel_case")?.to_camel()))
}

/// `{{ name | delimited(delimiter=".", ignore="", screaming=false) }}`
fn delimited(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let name = name_arg(value, "delimited")?;
    let delimiter = args
        .get("delimiter")
        .and_then(Value::as_str)
        .and_then(|text| text.chars().next())
        .ok_or_else(|| tera::Error::msg("delimited filter requires a `delimiter` character"))?;
    let ignore = args.get("ignore").and_then(Value::as_str).unwrap_or_default();
    let screaming = args
        .get("screaming")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Ok(Value::String(
        name.to_screaming_delimited(delimiter, ignore, screaming),
    ))
}
