//! Declarative output schemas for flow replies.
//!
//! Each flow declares the shape of the object it expects back from the
//! model. The same declaration serves three duties:
//! - rendered to a JSON Schema value sent to the provider as the
//!   structured-output format,
//! - rendered to a field-by-field instruction block appended to the prompt,
//! - validated against the raw reply before typed deserialization.
//!
//! Keeping the schema declarative and separate from the instruction text
//! avoids prompt/schema drift between the two.

use forge_core::{AppError, AppResult};
use serde_json::{json, Map, Value};

/// The type of a schema field.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// Free-form string
    String,
    /// String restricted to a fixed set of values
    StringEnum(&'static [&'static str]),
    /// Array of items, optionally bounded
    Array {
        items: Box<FieldType>,
        min_items: Option<usize>,
        max_items: Option<usize>,
    },
    /// Nested object
    Object(ObjectSchema),
}

impl FieldType {
    /// Unbounded array of the given item type.
    pub fn array(items: FieldType) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: None,
            max_items: None,
        }
    }

    /// Array bounded to `min..=max` items.
    pub fn bounded_array(items: FieldType, min: usize, max: usize) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: Some(min),
            max_items: Some(max),
        }
    }

    fn to_json_schema(&self) -> Value {
        match self {
            Self::String => json!({"type": "string"}),
            Self::StringEnum(values) => json!({"type": "string", "enum": values}),
            Self::Array {
                items,
                min_items,
                max_items,
            } => {
                let mut schema = Map::new();
                schema.insert("type".to_string(), json!("array"));
                schema.insert("items".to_string(), items.to_json_schema());
                if let Some(min) = min_items {
                    schema.insert("minItems".to_string(), json!(min));
                }
                if let Some(max) = max_items {
                    schema.insert("maxItems".to_string(), json!(max));
                }
                Value::Object(schema)
            }
            Self::Object(object) => object.to_json_schema(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::StringEnum(values) => format!("one of {}", values.join(" | ")),
            Self::Array {
                items,
                min_items,
                max_items,
            } => match (min_items, max_items) {
                (Some(min), Some(max)) => format!("array of {}-{} {}", min, max, items.describe()),
                _ => format!("array of {}", items.describe()),
            },
            Self::Object(_) => "object".to_string(),
        }
    }

    fn validate(&self, value: &Value, path: &str) -> AppResult<()> {
        match self {
            Self::String => {
                if !value.is_string() {
                    return Err(AppError::Schema(format!(
                        "Field '{}' must be a string",
                        path
                    )));
                }
                Ok(())
            }
            Self::StringEnum(allowed) => {
                let text = value.as_str().ok_or_else(|| {
                    AppError::Schema(format!("Field '{}' must be a string", path))
                })?;
                if !allowed.contains(&text) {
                    return Err(AppError::Schema(format!(
                        "Field '{}' must be one of {}, got '{}'",
                        path,
                        allowed.join(", "),
                        text
                    )));
                }
                Ok(())
            }
            Self::Array {
                items,
                min_items,
                max_items,
            } => {
                let entries = value.as_array().ok_or_else(|| {
                    AppError::Schema(format!("Field '{}' must be an array", path))
                })?;
                if let Some(min) = min_items {
                    if entries.len() < *min {
                        return Err(AppError::Schema(format!(
                            "Field '{}' must have at least {} items, got {}",
                            path,
                            min,
                            entries.len()
                        )));
                    }
                }
                if let Some(max) = max_items {
                    if entries.len() > *max {
                        return Err(AppError::Schema(format!(
                            "Field '{}' must have at most {} items, got {}",
                            path,
                            max,
                            entries.len()
                        )));
                    }
                }
                for (index, entry) in entries.iter().enumerate() {
                    items.validate(entry, &format!("{}[{}]", path, index))?;
                }
                Ok(())
            }
            Self::Object(object) => object.validate_at(value, path),
        }
    }
}

/// A single field in an object schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldSpec {
    /// Create a required field.
    pub fn new(name: &'static str, description: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            description,
            ty,
            required: true,
        }
    }

    /// Mark this field optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Declarative description of an expected reply object.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Render to a JSON Schema value for the provider's structured-output
    /// mechanism.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut schema = field.ty.to_json_schema();
            if let Value::Object(ref mut map) = schema {
                map.insert("description".to_string(), json!(field.description));
            }
            properties.insert(field.name.to_string(), schema);
            if field.required {
                required.push(json!(field.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Render a field-by-field instruction block for the prompt.
    pub fn instructions(&self) -> String {
        let mut output = String::new();
        self.write_instructions(&mut output, 0);
        output
    }

    fn write_instructions(&self, output: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        for field in &self.fields {
            let requirement = if field.required { "required" } else { "optional" };
            output.push_str(&format!(
                "{}- \"{}\" ({}, {}): {}\n",
                indent,
                field.name,
                field.ty.describe(),
                requirement,
                field.description
            ));
            if let Some(object) = field.ty.innermost_object() {
                object.write_instructions(output, depth + 1);
            }
        }
    }

    /// Validate a raw reply value against this schema.
    ///
    /// Required fields must be present and non-null; enum fields must take
    /// declared values; array bounds are enforced. Unknown extra fields are
    /// tolerated.
    pub fn validate(&self, value: &Value) -> AppResult<()> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> AppResult<()> {
        let object = value.as_object().ok_or_else(|| {
            AppError::Schema(format!("Expected an object at '{}'", path))
        })?;

        for field in &self.fields {
            let field_path = if path == "$" {
                field.name.to_string()
            } else {
                format!("{}.{}", path, field.name)
            };
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(AppError::Schema(format!(
                            "Missing required field '{}'",
                            field_path
                        )));
                    }
                }
                Some(entry) => field.ty.validate(entry, &field_path)?,
            }
        }

        Ok(())
    }
}

impl FieldType {
    fn innermost_object(&self) -> Option<&ObjectSchema> {
        match self {
            Self::Object(object) => Some(object),
            Self::Array { items, .. } => items.innermost_object(),
            _ => None,
        }
    }
}
