use cfmeta_core::{FunctionMetadata, ParseTreeResult};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use super::*;

mod results;

fn parse(source: &str) -> ParseTreeResult {
    parse_tree(source, "functions.ts")
}

fn only_function(source: &str) -> FunctionMetadata {
    let result = parse(source);
    assert_eq!(result.functions.len(), 1, "expected exactly one function");
    result.functions.into_iter().next().unwrap()
}

fn to_json(function: &FunctionMetadata) -> Value {
    serde_json::to_value(function).unwrap()
}

fn messages(result: &ParseTreeResult) -> Vec<String> {
    result.diagnostics().map(|(_, d)| d.to_string()).collect()
}
