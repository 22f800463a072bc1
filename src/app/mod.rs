//! Application state for the EAV browser.
//!
//! `App` ties the injected store to the tab strip and the two panels below
//! it. Key and mouse handling live in `handlers`, selection movement in
//! `navigation`, the edit prompt in `edit`.

mod edit;
mod handlers;
mod navigation;
mod types;

pub use types::{EditState, EditTarget, Focus};

use crate::store::StoreHandle;
use crate::ui::components::EntityTypeTabs;
use crate::ui::interaction::HitAreaRegistry;

pub struct App {
    pub store: StoreHandle,
    pub tabs: EntityTypeTabs,
    /// Cursor row in the entity list
    pub entity_cursor: usize,
    /// First visible row of the value table
    pub values_scroll: usize,
    pub focus: Focus,
    /// Open edit prompt, which takes all key input
    pub edit: Option<EditState>,
    /// Click targets of the last rendered frame
    pub hit_registry: HitAreaRegistry,
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Drives the loading spinner
    pub tick_count: u64,
}

impl App {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            tabs: EntityTypeTabs::new(),
            entity_cursor: 0,
            values_scroll: 0,
            focus: Focus::default(),
            edit: None,
            hit_registry: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    /// Mount the tab strip against the store.
    pub fn mount(&mut self) {
        self.tabs.mount(&self.store);
        self.mark_dirty();
    }

    /// Let the tab strip react to a `connected` change. Returns whether it did.
    pub fn poll_store(&mut self) -> bool {
        let ran = self.tabs.poll(&self.store);
        if ran {
            self.mark_dirty();
        }
        ran
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Whether anything is in flight, so the spinner needs redraws.
    pub fn is_busy(&self) -> bool {
        self.store.is_busy()
    }
}
