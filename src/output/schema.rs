//! JSON Schema of the input document.

use crate::error::PlanError;
use crate::models::NetworkDocument;

pub fn json_schema() -> Result<String, PlanError> {
    let schema = schemars::schema_for!(NetworkDocument);
    serde_json::to_string_pretty(&schema).map_err(|e| PlanError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        let schema: serde_json::Value = serde_json::from_str(&json_schema().unwrap()).unwrap();
        assert_eq!(schema["title"], "NetworkStructureConfiguration");
        assert_eq!(schema["properties"]["structure"]["type"], "array");
        assert!(schema["definitions"]["StructureItem"]["anyOf"].is_array());
        assert!(schema["definitions"]["MetadataRecord"].is_object());
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&"network_cidr".into()));
        assert!(required.contains(&"structure".into()));
        assert!(!required.contains(&"metadata".into()));
    }
}
