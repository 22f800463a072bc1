use crate::models::EavView;

/// Panel that receives ↑/↓.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Entities,
    Values,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Entities => Focus::Values,
            Focus::Values => Focus::Entities,
        }
    }
}

/// What an open edit prompt writes back to.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    /// A value row of the open entity
    Value(EavView),
    /// The name of an entity in the list
    EntityName { id: i64 },
}

/// An edit prompt shown in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub target: EditTarget,
    pub input: String,
    /// Last rejected input, shown until the next keystroke
    pub error: Option<String>,
}

impl EditState {
    pub fn new(target: EditTarget, input: String) -> Self {
        Self {
            target,
            input,
            error: None,
        }
    }

    /// Prompt label: the attribute name, or "Name" for a rename.
    pub fn label(&self) -> String {
        match self.target {
            EditTarget::Value(ref row) => row.attr.clone().unwrap_or_else(|| "Value".to_string()),
            EditTarget::EntityName { .. } => "Name".to_string(),
        }
    }
}
