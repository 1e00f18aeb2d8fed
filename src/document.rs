use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const INPUT_MODE: &str = "input-mode";
pub const ARRAY: &str = "array";
pub const FILE: &str = "file";

/// One entry of the documents array.
///
/// Only `parsed.steps` (and `code`, for reporting) is interpreted; every other key is
/// kept as-is and written back in its original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn code(&self) -> Option<&str> {
        self.0.get("code").and_then(Value::as_str)
    }

    /// The `parsed.steps` array, or `None` when any level is missing or not the expected shape.
    pub fn steps(&self) -> Option<&Vec<Value>> {
        self.0.get("parsed")?.as_object()?.get("steps")?.as_array()
    }

    pub fn steps_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.0
            .get_mut("parsed")?
            .as_object_mut()?
            .get_mut("steps")?
            .as_array_mut()
    }
}

/// Read-only view over a step object.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a>(&'a Map<String, Value>);

impl<'a> Step<'a> {
    /// `None` for step entries that are not JSON objects.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self)
    }

    // numeric ids are accepted and rendered the way they appear in the file
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<&'a str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn is_input_mode(&self) -> bool {
        self.kind() == Some(INPUT_MODE)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Raw `fields` entries; empty when the key is missing, null or not an array.
    pub fn fields(&self) -> &'a [Value] {
        self.0
            .get("fields")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.0
    }
}

/// Read-only view over one entry of a step's `fields`.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a>(&'a Value);

impl<'a> Field<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    // absent or non-string names count as ""
    pub fn name(&self) -> &'a str {
        self.0.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn kind(&self) -> Option<&'a str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn is_file(&self) -> bool {
        self.kind() == Some(FILE)
    }
}
