//! Tab, entity and focus navigation.

use super::App;
use crate::store::Action;
use crate::traits::EavStore;

impl App {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        self.mark_dirty();
    }

    /// Select a tab by id, resetting the panels below it.
    pub fn select_tab(&mut self, id: i64) {
        self.tabs.select_tab(&self.store, id);
        self.entity_cursor = 0;
        self.values_scroll = 0;
        self.mark_dirty();
    }

    /// Select the `index`-th tab (0-based). Ignored while disconnected or
    /// when out of range.
    pub fn select_tab_index(&mut self, index: usize) {
        if !self.store.connected() {
            return;
        }
        if let Some(id) = self.store.entity_types().get(index).map(|t| t.id) {
            self.select_tab(id);
        }
    }

    /// Move the tab selection by `delta`, wrapping around. With no tab
    /// selected, moving forward selects the first and back the last.
    pub fn cycle_tab(&mut self, delta: isize) {
        if !self.store.connected() {
            return;
        }
        let types = self.store.entity_types();
        if types.is_empty() {
            return;
        }
        let len = types.len() as isize;
        let current = types
            .iter()
            .position(|t| self.tabs.is_selected(t.id))
            .map(|i| i as isize);
        let next = match current {
            Some(i) => (i + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.select_tab(types[next as usize].id);
    }

    /// Move the focused panel's cursor by `delta` rows.
    pub fn move_cursor(&mut self, delta: isize) {
        let state = self.store.snapshot();
        let (cursor, len) = match self.focus {
            super::Focus::Entities => (&mut self.entity_cursor, state.entities.len()),
            super::Focus::Values => (&mut self.values_scroll, state.values.len()),
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let max = len as isize - 1;
        *cursor = (*cursor as isize + delta).clamp(0, max) as usize;
        self.mark_dirty();
    }

    /// Load the values of the entity under the cursor.
    pub fn open_selected_entity(&mut self) {
        let entity_id = self
            .store
            .snapshot()
            .entities
            .get(self.entity_cursor)
            .map(|e| e.id);
        if let Some(id) = entity_id {
            self.select_entity(id);
        }
    }

    /// Move the cursor to `id` and load its values.
    pub fn select_entity(&mut self, id: i64) {
        let state = self.store.snapshot();
        if let Some(pos) = state.entities.iter().position(|e| e.id == id) {
            self.entity_cursor = pos;
        }
        tracing::debug!(entity_id = id, "select entity");
        self.values_scroll = 0;
        self.store.dispatch(Action::FetchValues(id));
        self.mark_dirty();
    }
}
