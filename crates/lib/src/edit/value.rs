use serde_json::Value;

/// Convert a raw command-line value into JSON.
///
/// Anything that parses as JSON (numbers, booleans, `null`, quoted strings,
/// objects, arrays) is used as parsed; everything else becomes a plain
/// string, so `production` and `3` both work without quoting.
pub fn parse_value(raw: &str) -> Value {
  serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
