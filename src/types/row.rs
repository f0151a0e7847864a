use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored field value, tagged by shape.
///
/// Every row field is one of these variants; coercion to the column's
/// declared type happens at the model boundary (projection/edit), so read
/// sites never need to re-check shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    /// Plain text. Also carries dates (ISO-8601) and url/image targets.
    Text(String),
    List(Vec<String>),
}

impl Value {
    /// Truthy coercion for boolean cells: empty text and zero are `false`,
    /// everything else (including a non-empty list) is `true`.
    pub fn as_bool_lossy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::List(_) => true,
        }
    }

    /// Numeric coercion for number cells. Unparseable text coerces to zero.
    pub fn as_number_lossy(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Text(s) => s.trim().parse().unwrap_or(0.0),
            Value::List(_) => 0.0,
        }
    }

    /// Normalize scalar-or-sequence input into an ordered list of strings.
    /// Empty text normalizes to the empty list.
    pub fn as_list_lossy(&self) -> Vec<String> {
        match self {
            Value::List(items) => items.clone(),
            Value::Text(s) if s.is_empty() => Vec::new(),
            other => vec![other.to_display_string()],
        }
    }

    /// String form used for text cells and for search matching.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => format!("{n}"),
            Value::Bool(b) => b.to_string(),
            Value::List(items) => items.join(","),
        }
    }
}

/// One data item: a stable identifier plus a mapping from column id to value.
///
/// A row need not carry a value for every column; absent fields render as the
/// column type's empty default.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u64,
    pub fields: HashMap<String, Value>,
}

impl Row {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    pub fn get(&self, column_id: &str) -> Option<&Value> {
        self.fields.get(column_id)
    }

    pub fn set(&mut self, column_id: impl Into<String>, value: Value) {
        self.fields.insert(column_id.into(), value);
    }

    /// Builder-style field insertion.
    #[must_use]
    pub fn with_field(mut self, column_id: impl Into<String>, value: Value) -> Self {
        self.set(column_id, value);
        self
    }
}

// Rows cross the JS boundary as flat objects: `{ id: 1, name: "Google", ... }`.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a row object with an `id` field")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Row, A::Error> {
                let mut id: Option<u64> = None;
                let mut fields = HashMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    if key == "id" {
                        id = Some(access.next_value()?);
                    } else {
                        fields.insert(key, access.next_value()?);
                    }
                }
                let id = id.ok_or_else(|| serde::de::Error::missing_field("id"))?;
                Ok(Row { id, fields })
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}
