use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn result_of(return_type: &str) -> Value {
    let source = format!("/** @customfunction */\nfunction f(){return_type} {{ return 0 as any; }}\n");
    to_json(&only_function(&source))
        .get("result")
        .cloned()
        .unwrap_or(Value::Null)
}

#[rstest]
#[case(": number", json!({ "type": "number" }))]
#[case(": Promise<string>", json!({ "type": "string" }))]
#[case(": Promise<number[][]>", json!({ "type": "number", "dimensionality": "matrix" }))]
#[case(": boolean[][]", json!({ "type": "boolean", "dimensionality": "matrix" }))]
#[case(": any", Value::Null)]
#[case(": void", Value::Null)]
#[case(": string | number", Value::Null)]
#[case("", Value::Null)]
fn declared_return_types(#[case] return_type: &str, #[case] expected: Value) {
    assert_eq!(result_of(return_type), expected);
}

#[test]
fn streaming_with_non_void_return_forces_empty_result() {
    let source = "\
/**
 * @customfunction
 * @param handler Handler.
 */
function f(handler: CustomFunctions.StreamingHandler<number>): number { return 1; }
";
    let result = parse(source);
    assert_eq!(
        messages(&result),
        vec![
            "A streaming function should return 'void'. Use CustomFunctions.StreamingHandler.setResult() to set results. (5,12)"
                .to_string()
        ]
    );
    let function = to_json(&result.functions[0]);
    assert_eq!(function["result"], json!({}));
    assert_eq!(function["options"], json!({ "stream": true }));
}

#[test]
fn streaming_handler_without_type_argument() {
    let source = "\
/** @customfunction */
function f(handler: CustomFunctions.StreamingHandler): void {}
";
    let result = parse(source);
    assert_eq!(
        messages(&result),
        vec![
            "The 'CustomFunctions.StreamingHandler' needs to be passed in a single result type (e.g., 'CustomFunctions.StreamingHandler < number >') : (2,12)"
                .to_string()
        ]
    );
    assert_eq!(to_json(&result.functions[0])["result"], json!({}));
}

#[test]
fn declared_handler_argument_beats_bare_doc_type() {
    let source = "\
/**
 * @customfunction
 * @param {CustomFunctions.StreamingHandler} handler Handler.
 */
function tick(handler: CustomFunctions.StreamingHandler<number>): void {}
";
    let result = parse(source);
    assert_eq!(messages(&result), Vec::<String>::new());
    let function = to_json(&result.functions[0]);
    assert_eq!(function["result"], json!({ "type": "number" }));
    assert_eq!(function["options"], json!({ "stream": true }));
}

#[test]
fn declared_handler_argument_beats_doc_argument() {
    let source = "\
/**
 * @customfunction
 * @param {CustomFunctions.StreamingHandler<string>} handler Handler.
 */
function tick(handler: CustomFunctions.StreamingHandler<number>): void {}
";
    let function = only_function(source);
    assert_eq!(to_json(&function)["result"], json!({ "type": "number" }));
}

#[test]
fn untyped_handler_takes_doc_argument() {
    let source = "\
/**
 * @customfunction
 * @param {CustomFunctions.StreamingHandler<boolean>} handler Handler.
 */
function tick(handler): void {}
";
    let result = parse(source);
    assert!(!result.has_errors());
    assert_eq!(
        to_json(&result.functions[0])["result"],
        json!({ "type": "boolean" })
    );
}

#[test]
fn streaming_matrix_result() {
    let source = "\
/** @customfunction */
function f(handler: CustomFunctions.StreamingInvocation<string[][]>): void {}
";
    let result = parse(source);
    assert!(!result.has_errors());
    assert_eq!(
        to_json(&result.functions[0])["result"],
        json!({ "type": "string", "dimensionality": "matrix" })
    );
}

#[test]
fn streaming_tag_alone_does_not_change_result() {
    let source = "\
/**
 * @customfunction
 * @streaming
 */
function f(x: number): number { return x; }
";
    let function = to_json(&only_function(source));
    assert_eq!(function["result"], json!({ "type": "number" }));
    assert_eq!(function["options"], json!({ "stream": true }));
}

#[test]
fn documented_return_overrides_declared() {
    let source = "\
/**
 * @customfunction
 * @returns {string} Text.
 */
function f(): number { return 1; }
";
    let result = parse(source);
    assert_eq!(
        messages(&result),
        vec!["Type {number:string} doesn't match for return type : f (3,4)".to_string()]
    );
    assert_eq!(to_json(&result.functions[0])["result"], json!({ "type": "string" }));
}

#[test]
fn documented_promise_return_is_unwrapped() {
    let source = "\
/**
 * @customfunction
 * @returns {Promise<number>} Count.
 */
async function f() { return 1; }
";
    let result = parse(source);
    assert!(!result.has_errors());
    assert_eq!(to_json(&result.functions[0])["result"], json!({ "type": "number" }));
}
