//! Inline editing of values and entity names.
//!
//! `e` opens a prompt for the row under the focused panel's cursor. The
//! prompt owns the keyboard until Enter dispatches the write or Esc drops
//! it; rejected input keeps the prompt open with the parse error.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{EditState, EditTarget};
use super::{App, Focus};
use crate::models::AttrValue;
use crate::store::Action;
use crate::traits::EavStore;

impl App {
    /// Open an edit prompt for the focused panel's current row. Does nothing
    /// when there is no row to edit.
    pub fn begin_edit(&mut self) {
        let state = self.store.snapshot();
        let edit = match self.focus {
            Focus::Entities => state.entities.get(self.entity_cursor).map(|entity| {
                EditState::new(
                    EditTarget::EntityName { id: entity.id },
                    entity.entity.clone(),
                )
            }),
            Focus::Values if !state.loading_values => {
                state.values.get(self.values_scroll).map(|row| {
                    EditState::new(EditTarget::Value(row.clone()), row.display_value())
                })
            }
            Focus::Values => None,
        };
        if let Some(ref edit) = edit {
            tracing::debug!(edit_target = ?edit.target, "begin edit");
        }
        self.edit = edit;
        self.mark_dirty();
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.mark_dirty();
    }

    /// Key handling while a prompt is open.
    pub(super) fn handle_edit_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        match key.code {
            KeyCode::Esc => return self.cancel_edit(),
            KeyCode::Enter => return self.submit_edit(),
            _ => {}
        }
        let Some(ref mut edit) = self.edit else {
            return;
        };
        match key.code {
            KeyCode::Backspace => {
                edit.input.pop();
                edit.error = None;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                edit.input.push(c);
                edit.error = None;
            }
            _ => {}
        }
    }

    /// Validate the prompt and dispatch its write. Invalid input leaves the
    /// prompt open with an error.
    pub fn submit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        let action = match edit.target {
            EditTarget::EntityName { id } => {
                let name = edit.input.trim();
                if name.is_empty() {
                    Err("name cannot be empty".to_string())
                } else {
                    Ok(Action::RenameEntity {
                        id,
                        name: name.to_string(),
                    })
                }
            }
            EditTarget::Value(ref row) => AttrValue::from_input(row, &edit.input)
                .map(Action::SaveValue)
                .map_err(|e| e.to_string()),
        };

        match action {
            Ok(action) => {
                tracing::debug!(action = action.name(), "submit edit");
                self.store.dispatch(action);
            }
            Err(error) => {
                self.edit = Some(EditState {
                    error: Some(error),
                    ..edit
                });
            }
        }
        self.mark_dirty();
    }
}
