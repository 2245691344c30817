//! The JSON adapter: a straightforward structural mapping of the model,
//! stable key order, two-space indentation.

use crate::model::StructuralModel;

pub fn to_json(model: &StructuralModel) -> String {
    serde_json::to_string_pretty(model).unwrap_or_else(|_| "{}".to_string())
}

/// Serialize a batch of models as one JSON array.
pub fn to_json_batch(models: &[StructuralModel]) -> String {
    serde_json::to_string_pretty(models).unwrap_or_else(|_| "[]".to_string())
}
