use std::collections::HashMap;

/// Placeholder used when no parameter list could be recovered from a starter.
pub const ARGS_PLACEHOLDER: &str = "/* args */";

/// Placeholder used when no function name could be recovered from a starter.
pub const DEFAULT_FUNCTION_NAME: &str = "solve";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Number,
    String,
    Boolean,
    NumberArray,
    StringArray,
    BooleanArray,
    Unknown,
}

impl TypeTag {
    /// Maps free-form JSDoc type text onto a tag.
    ///
    /// Checks are ordered substring tests on the lowercased text, array forms
    /// first, so `number|number[]` is a `NumberArray`. Anything else is
    /// `Unknown`.
    pub fn from_doc_type(text: &str) -> TypeTag {
        let lower = text.to_lowercase();
        const RULES: [(&str, TypeTag); 6] = [
            ("number[]", TypeTag::NumberArray),
            ("string[]", TypeTag::StringArray),
            ("boolean[]", TypeTag::BooleanArray),
            ("number", TypeTag::Number),
            ("string", TypeTag::String),
            ("boolean", TypeTag::Boolean),
        ];
        RULES
            .iter()
            .find(|(needle, _)| lower.contains(needle))
            .map(|(_, tag)| *tag)
            .unwrap_or(TypeTag::Unknown)
    }

    pub fn ts_name(&self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::NumberArray => "number[]",
            TypeTag::StringArray => "string[]",
            TypeTag::BooleanArray => "boolean[]",
            TypeTag::Unknown => "any",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSignature {
    pub function_name: String,
    pub parameters: Vec<String>,
    pub parameter_types: HashMap<String, TypeTag>,
    pub return_type: TypeTag,
}

impl ExtractedSignature {
    pub fn type_of(&self, param: &str) -> TypeTag {
        self.parameter_types
            .get(param)
            .copied()
            .unwrap_or(TypeTag::Unknown)
    }

    /// True when the parameter list fell back to the placeholder.
    pub fn has_placeholder_params(&self) -> bool {
        self.parameters.is_empty()
            || (self.parameters.len() == 1 && self.parameters[0] == ARGS_PLACEHOLDER)
    }

    /// `name: type` pairs joined for a TypeScript parameter list.
    pub fn typed_params(&self) -> String {
        if self.has_placeholder_params() {
            return ARGS_PLACEHOLDER.to_string();
        }
        self.parameters
            .iter()
            .map(|p| format!("{}: {}", p, self.type_of(p).ts_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
