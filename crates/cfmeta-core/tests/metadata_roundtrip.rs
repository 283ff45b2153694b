//! Serde roundtrip and JsonSchema validation tests for the output types.

use cfmeta_core::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn streaming_clock() -> FunctionMetadata {
    FunctionMetadata {
        id: "CLOCK".into(),
        name: "CLOCK".into(),
        description: Some("Displays the current time once a second.".into()),
        help_url: None,
        parameters: vec![],
        result: Some(ResultMetadata::new(ValueType::String, Dimensionality::Scalar)),
        options: Some(OptionsMetadata {
            stream: true,
            ..OptionsMetadata::default()
        }),
    }
}

fn matrix_sum() -> FunctionMetadata {
    FunctionMetadata {
        id: "SUMALL".into(),
        name: "SumAll".into(),
        description: None,
        help_url: Some("https://example.com/help/sumall".into()),
        parameters: vec![
            ParameterMetadata {
                name: "values".into(),
                value_type: ValueType::Number,
                dimensionality: Dimensionality::Matrix,
                description: Some("Cells to add".into()),
                ..ParameterMetadata::default()
            },
            ParameterMetadata {
                name: "extra".into(),
                value_type: ValueType::Number,
                optional: true,
                repeating: true,
                ..ParameterMetadata::default()
            },
        ],
        result: Some(ResultMetadata::new(ValueType::Number, Dimensionality::Matrix)),
        options: None,
    }
}

roundtrip_and_validate!(streaming_function_roundtrip, FunctionMetadata, streaming_clock());

roundtrip_and_validate!(matrix_function_roundtrip, FunctionMetadata, matrix_sum());

roundtrip_and_validate!(
    registration_document_roundtrip,
    RegistrationDocument,
    RegistrationDocument {
        functions: vec![streaming_clock(), matrix_sum()],
    }
);

roundtrip_and_validate!(
    parse_tree_result_roundtrip,
    ParseTreeResult,
    ParseTreeResult {
        associate: vec![Association {
            function_name: "clock".into(),
            id: "CLOCK".into(),
        }],
        extras: vec![FunctionExtras {
            errors: vec![Diagnostic::at(
                "A streaming function should return 'void'. Use CustomFunctions.StreamingHandler.setResult() to set results.",
                SourcePosition { line: 14, column: 23 },
            )],
            runtime_function_name: "clock".into(),
        }],
        functions: vec![streaming_clock()],
    }
);

roundtrip_and_validate!(
    function_parse_result_roundtrip,
    FunctionParseResult,
    FunctionParseResult {
        metadata: matrix_sum(),
        runtime_function_name: "sumAll".into(),
        status: FunctionStatus::Good,
        errors: vec![],
    }
);

#[test]
fn registration_document_rejects_missing_id() {
    let schema = serde_json::to_value(schema_for!(RegistrationDocument)).unwrap();
    let invalid = serde_json::json!({
        "functions": [{ "name": "ADD", "parameters": [] }]
    });
    assert!(!validate_against_schema(&schema, &invalid).is_empty());
}

#[test]
fn registration_document_rejects_unknown_value_type() {
    let schema = serde_json::to_value(schema_for!(RegistrationDocument)).unwrap();
    let invalid = serde_json::json!({
        "functions": [{
            "id": "ADD",
            "name": "ADD",
            "parameters": [{ "name": "a", "type": "integer" }]
        }]
    });
    assert!(!validate_against_schema(&schema, &invalid).is_empty());
}
