use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Helper to deserialize an optional numeric field that the backend may send
/// as either a number or a numeric string.
fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct OptIdVisitor;

    impl<'de> Visitor<'de> for OptIdVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a numeric string or null")
        }

        fn visit_none<E>(self) -> Result<Option<i64>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Option<i64>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<i64>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<i64>, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map(Some).map_err(E::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<i64>, E>
        where
            E: de::Error,
        {
            value.trim().parse().map(Some).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(OptIdVisitor)
}

/// An entity type (a table-like grouping of entities) as served by
/// `GET /entity-types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    pub id: i64,
    pub entity_type: String,
}

impl EntityType {
    pub fn new(id: i64, entity_type: impl Into<String>) -> Self {
        Self {
            id,
            entity_type: entity_type.into(),
        }
    }
}

/// An entity row as served by `GET /entities/{type_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: i64,
    pub entity_type_id: i64,
    pub entity: String,
    /// Creation time exactly as the backend formats it
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: Option<String>,
}

/// `createdAt` arrives either as an ISO string or as epoch seconds depending on
/// the backend's serializer settings; keep it as display text.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => {
            let formatted = n
                .as_f64()
                .and_then(|secs| chrono::DateTime::from_timestamp(secs as i64, 0))
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string());
            Some(formatted.unwrap_or_else(|| n.to_string()))
        }
        Some(other) => Some(other.to_string()),
    })
}

/// Storage type of an attribute's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    Str,
    Int,
    Float,
    Time,
    Bool,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Str => "str",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Time => "time",
            ValueType::Bool => "bool",
        }
    }
}

/// A stored value as accepted by `POST /value` (create, `id` 0) and
/// `PUT /value` (update). Exactly one `value_*` column is set, matching the
/// attribute's [`ValueType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttrValue {
    pub id: i64,
    pub entity_id: i64,
    pub attr_id: i64,
    pub value_str: Option<String>,
    pub value_int: Option<i64>,
    pub value_float: Option<f64>,
    pub value_time: Option<String>,
    pub value_bool: Option<bool>,
}

/// Why typed-in text cannot become an [`AttrValue`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueInputError {
    #[error("Row has no entity or attribute id")]
    MissingIds,

    #[error("Attribute has no value type")]
    UnknownType,

    #[error("Expected an integer, got '{0}'")]
    InvalidInt(String),

    #[error("Expected a number, got '{0}'")]
    InvalidFloat(String),

    #[error("Expected true or false, got '{0}'")]
    InvalidBool(String),

    #[error("Expected an RFC 3339 time such as 2024-01-31T12:00:00Z, got '{0}'")]
    InvalidTime(String),
}

impl AttrValue {
    /// Parse `input` for the attribute of `row`.
    ///
    /// Rows that already hold a value update it; rows without one create a
    /// new value.
    pub fn from_input(row: &EavView, input: &str) -> Result<Self, ValueInputError> {
        let (Some(entity_id), Some(attr_id)) = (row.entity_id, row.attr_id) else {
            return Err(ValueInputError::MissingIds);
        };
        let mut value = AttrValue {
            id: row.value_id.unwrap_or(0),
            entity_id,
            attr_id,
            ..Default::default()
        };

        let text = input.trim();
        match row.value_type.ok_or(ValueInputError::UnknownType)? {
            ValueType::Str => value.value_str = Some(input.to_string()),
            ValueType::Int => {
                value.value_int = Some(
                    text.parse()
                        .map_err(|_| ValueInputError::InvalidInt(text.to_string()))?,
                )
            }
            ValueType::Float => {
                value.value_float = Some(
                    text.parse()
                        .map_err(|_| ValueInputError::InvalidFloat(text.to_string()))?,
                )
            }
            ValueType::Bool => {
                value.value_bool = Some(match text.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "1" => true,
                    "false" | "no" | "0" => false,
                    _ => return Err(ValueInputError::InvalidBool(text.to_string())),
                })
            }
            ValueType::Time => {
                let time = chrono::DateTime::parse_from_rfc3339(text)
                    .map_err(|_| ValueInputError::InvalidTime(text.to_string()))?;
                value.value_time = Some(
                    time.with_timezone(&chrono::Utc)
                        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                );
            }
        }
        Ok(value)
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// One flattened attribute/value row of an entity as served by
/// `GET /view/entity/{entity_id}`.
///
/// Every attribute of the entity's type appears, so value columns are
/// null when the entity has no value for that attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EavView {
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub entity_type_id: Option<i64>,
    pub entity_type: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub entity_id: Option<i64>,
    pub entity: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub attr_id: Option<i64>,
    pub attr: Option<String>,
    pub value_type: Option<ValueType>,
    pub allow_multiple: Option<bool>,
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub value_id: Option<i64>,
    pub value_str: Option<String>,
    pub value_int: Option<i64>,
    pub value_float: Option<f64>,
    pub value_time: Option<serde_json::Value>,
    pub value_bool: Option<bool>,
}

impl EavView {
    /// Render whichever value column is populated.
    pub fn display_value(&self) -> String {
        if let Some(ref s) = self.value_str {
            return s.clone();
        }
        if let Some(i) = self.value_int {
            return i.to_string();
        }
        if let Some(f) = self.value_float {
            return f.to_string();
        }
        if let Some(ref t) = self.value_time {
            return match t {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
        if let Some(b) = self.value_bool {
            return b.to_string();
        }
        String::new()
    }

    /// Whether a saved `value` belongs in this row: the same stored value,
    /// or the empty slot of its attribute when the value was just created.
    pub fn holds(&self, value: &AttrValue) -> bool {
        if self.entity_id != Some(value.entity_id) || self.attr_id != Some(value.attr_id) {
            return false;
        }
        match self.value_id {
            Some(id) => id == value.id,
            None => true,
        }
    }

    /// Replace the value columns with those of `value`.
    pub fn apply_value(&mut self, value: &AttrValue) {
        self.value_id = Some(value.id);
        self.value_str = value.value_str.clone();
        self.value_int = value.value_int;
        self.value_float = value.value_float;
        self.value_time = value.value_time.clone().map(serde_json::Value::String);
        self.value_bool = value.value_bool;
    }
}

/// Database connection settings posted to `POST /connect`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbAccess {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub db_name: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

impl DbAccess {
    /// The backend refuses a connect request without a host and database name.
    pub fn is_valid(&self) -> bool {
        !self.host.trim().is_empty() && !self.db_name.trim().is_empty()
    }
}
