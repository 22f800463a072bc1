//! Context attached to errors for the log file and status bar.

use chrono::{DateTime, Utc};

/// Where and when an error happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Entity type the operation was scoped to, if any.
    pub entity_type_id: Option<i64>,

    /// Entity the operation was scoped to, if any.
    pub entity_id: Option<i64>,

    /// Component/module where the error originated.
    pub component: Option<String>,

    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            entity_type_id: None,
            entity_id: None,
            component: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_entity_type(mut self, id: i64) -> Self {
        self.entity_type_id = Some(id);
        self
    }

    pub fn with_entity(mut self, id: i64) -> Self {
        self.entity_id = Some(id);
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// `key=value` pairs for structured log lines.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(id) = self.entity_type_id {
            parts.push(format!("entity_type_id={}", id));
        }
        if let Some(id) = self.entity_id {
            parts.push(format!("entity_id={}", id));
        }
        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(id) = self.entity_type_id {
            write!(f, " entity_type={}", id)?;
        }
        if let Some(id) = self.entity_id {
            write!(f, " entity={}", id)?;
        }

        Ok(())
    }
}
