use cfmeta_core::to_json_pretty;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable value in the requested format.
///
/// `Json` pretty-prints with `indent` spaces per level.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    indent: usize,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(to_json_pretty(value, indent)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable value in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat, indent: usize) -> anyhow::Result<()> {
    let rendered = render(value, format, indent)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_uses_indent() {
        let value = json!({ "functions": [] });
        assert_eq!(
            render(&value, OutputFormat::Json, 4).unwrap(),
            "{\n    \"functions\": []\n}"
        );
        assert_eq!(
            render(&json!({ "a": 1 }), OutputFormat::Json, 2).unwrap(),
            "{\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn raw_is_compact() {
        let value = json!({ "id": "ADD", "parameters": [] });
        assert_eq!(
            render(&value, OutputFormat::Raw, 4).unwrap(),
            r#"{"id":"ADD","parameters":[]}"#
        );
    }
}
