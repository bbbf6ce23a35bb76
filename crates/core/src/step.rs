use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Structured step record, the schema the extraction model fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct StructuredStep {
  /// Sequential number of the step in the procedure, starting at 1
  pub step_number: u32,
  /// Kind of operation, e.g. filtration, centrifugation, heating
  pub step_type: String,
  /// Materials or substances used in this step
  pub input: String,
  /// Result or product obtained from this step
  pub output: String,
  /// Core operation performed, e.g. heat, filter, mix
  pub action: String,
  /// Key-value pairs describing step-specific parameters
  #[serde(default, alias = "parameter")]
  #[schema(value_type = Object)]
  pub parameters: Map<String, Value>,
}

impl StructuredStep {
  fn to_semantic_text(&self) -> String {
    let mut parts = Vec::new();

    let step_type = self.step_type.trim().to_lowercase();
    let action = self.action.trim().to_lowercase();
    if !step_type.is_empty() && !action.is_empty() {
      parts.push(format!("{step_type}: {action}"));
    }

    if !self.input.is_empty() {
      parts.push(format!("input: {}", self.input.to_lowercase()));
    }
    if !self.output.is_empty() {
      parts.push(format!("output: {}", self.output.to_lowercase()));
    }

    let params: Vec<String> = self
      .parameters
      .iter()
      .filter_map(|(key, value)| scalar_text(value).map(|value| format!("{key}: {value}")))
      .collect();
    if !params.is_empty() {
      parts.push(format!("parameters: {}", params.join("; ")));
    }

    parts.join(" | ")
  }
}

/// One step of a protocol as submitted by a caller.
///
/// A closed set of shapes, each with exactly one formatting rule. The rule is
/// resolved once when the vector sequence is built and never re-inspected
/// downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProtocolStep {
  /// Structured record from the extractor.
  Structured(StructuredStep),
  /// Free-form step text.
  FreeText(String),
  /// Anything else; formatted from its raw JSON value.
  #[schema(value_type = Object)]
  Unknown(Value),
}

impl ProtocolStep {
  /// Render the semantic string that gets embedded for this step.
  #[must_use]
  pub fn to_semantic_text(&self) -> String {
    match self {
      Self::Structured(step) => step.to_semantic_text(),
      Self::FreeText(text) => text.to_lowercase(),
      Self::Unknown(Value::Array(items)) => items
        .iter()
        .map(value_text)
        .collect::<Vec<_>>()
        .join(" | ")
        .to_lowercase(),
      Self::Unknown(value) => value_text(value).to_lowercase(),
    }
  }
}

/// Scalar parameter rendering; nested structures are dropped from the
/// semantic string.
fn scalar_text(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => None,
  }
}

fn value_text(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn structured_step_formats_all_fields() {
    let step: StructuredStep = serde_json::from_value(json!({
      "step_number": 3,
      "step_type": "Heating",
      "input": "Filtered extract",
      "output": "Autoclaved solution",
      "action": "Heat",
      "parameters": { "temperature": "180 C", "duration_h": 4 }
    }))
    .unwrap();

    let text = step.to_semantic_text();
    assert!(text.starts_with("heating: heat | input: filtered extract | output: autoclaved solution | parameters: "));
    assert!(text.contains("temperature: 180 C"));
    assert!(text.contains("duration_h: 4"));
  }

  #[test]
  fn structured_step_skips_empty_fields() {
    let step: StructuredStep = serde_json::from_value(json!({
      "step_number": 1,
      "step_type": "filtration",
      "input": "",
      "output": "",
      "action": "filter",
      "parameters": {}
    }))
    .unwrap();

    assert_eq!(step.to_semantic_text(), "filtration: filter");
  }

  #[test]
  fn nested_parameters_are_dropped() {
    let step: StructuredStep = serde_json::from_value(json!({
      "step_number": 1,
      "step_type": "mixing",
      "input": "",
      "output": "",
      "action": "mix",
      "parameters": { "speed": 300, "profile": { "ramp": true } }
    }))
    .unwrap();

    assert_eq!(step.to_semantic_text(), "mixing: mix | parameters: speed: 300");
  }

  #[test]
  fn accepts_legacy_parameter_key() {
    let step: StructuredStep = serde_json::from_value(json!({
      "step_number": 1,
      "step_type": "heating",
      "input": "",
      "output": "",
      "action": "heat",
      "parameter": { "temperature": "50 C" }
    }))
    .unwrap();

    assert!(step.to_semantic_text().contains("temperature: 50 C"));
  }

  #[test]
  fn free_text_is_lowercased() {
    let step: ProtocolStep = serde_json::from_value(json!("Stir at 50 C for 2 h")).unwrap();
    assert_eq!(step, ProtocolStep::FreeText("Stir at 50 C for 2 h".to_owned()));
    assert_eq!(step.to_semantic_text(), "stir at 50 c for 2 h");
  }

  #[test]
  fn unknown_list_joins_elements() {
    let step: ProtocolStep = serde_json::from_value(json!(["Heat", 180, "4 h"])).unwrap();
    assert!(matches!(step, ProtocolStep::Unknown(_)));
    assert_eq!(step.to_semantic_text(), "heat | 180 | 4 h");
  }

  #[test]
  fn untagged_decoding_prefers_structured() {
    let step: ProtocolStep = serde_json::from_value(json!({
      "step_number": 1,
      "step_type": "heating",
      "input": "water",
      "output": "hot water",
      "action": "heat",
      "parameters": {}
    }))
    .unwrap();

    assert!(matches!(step, ProtocolStep::Structured(_)));
  }
}
