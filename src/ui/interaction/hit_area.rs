//! Hit area registry for mouse interaction.
//!
//! Components register clickable regions while rendering; the event loop
//! queries the registry to find out what a mouse click landed on, and the
//! renderer paints the hover style of whatever is under the pointer.

use ratatui::layout::Rect;
use ratatui::style::Style;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Select the entity type tab with this id
    SelectTab(i64),
    /// Select an entity in the list and load its values
    SelectEntity(i64),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Hit areas of the last rendered frame.
///
/// Cleared at the start of every render. Later registrations win for
/// overlapping regions. The pointer position outlives `clear`, so the next
/// frame can recompute hover with [`HitAreaRegistry::refresh_hover`].
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. The pointer position is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|idx| self.areas[idx].action)
    }

    /// Update the hovered area from a pointer position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self.find_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Recompute the hovered area from the last pointer position, after a
    /// frame has registered its areas.
    pub fn refresh_hover(&mut self) {
        self.hovered = self.pointer.and_then(|(x, y)| self.find_index(x, y));
    }

    /// Rect and style to paint over the hovered area, if it has a style.
    pub fn hover_highlight(&self) -> Option<(Rect, Style)> {
        let area = self.get_hovered()?;
        area.hover_style.map(|style| (area.rect, style))
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    /// Areas registered for tabs, in registration order.
    pub fn tab_areas(&self) -> impl Iterator<Item = &HitArea> {
        self.areas
            .iter()
            .filter(|a| matches!(a.action, ClickAction::SelectTab(_)))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 10, 20, 1), ClickAction::SelectTab(1));

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 10));
        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10));
        assert!(!area.contains(10, 11));
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(Rect::new(5, 5, 0, 0), ClickAction::SelectTab(1));
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_hit_test_prefers_last_registered() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 20, 5), ClickAction::SelectEntity(1), None);
        registry.register(Rect::new(5, 0, 5, 1), ClickAction::SelectTab(2), None);

        assert_eq!(registry.hit_test(6, 0), Some(ClickAction::SelectTab(2)));
        assert_eq!(registry.hit_test(1, 3), Some(ClickAction::SelectEntity(1)));
        assert_eq!(registry.hit_test(30, 30), None);
    }

    #[test]
    fn test_hover_tracking() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::SelectTab(7), None);

        assert!(registry.update_hover(2, 0));
        assert_eq!(registry.get_hovered().map(|a| a.action), Some(ClickAction::SelectTab(7)));
        assert!(!registry.update_hover(3, 0));
        assert!(registry.update_hover(10, 0));
        assert!(registry.get_hovered().is_none());
    }

    #[test]
    fn test_clear_resets() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::SelectTab(7), None);
        registry.update_hover(1, 0);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get_hovered().is_none());
        assert_eq!(registry.tab_areas().count(), 0);
    }

    #[test]
    fn test_hover_survives_clear_and_reregister() {
        let underline = Style::default().add_modifier(ratatui::style::Modifier::UNDERLINED);
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::SelectTab(7), Some(underline));
        registry.update_hover(1, 0);

        registry.clear();
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::SelectTab(7), Some(underline));
        registry.refresh_hover();

        assert_eq!(registry.get_hovered().map(|a| a.action), Some(ClickAction::SelectTab(7)));
        assert_eq!(
            registry.hover_highlight(),
            Some((Rect::new(0, 0, 5, 1), underline))
        );
    }

    #[test]
    fn test_hover_highlight_needs_style() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::SelectEntity(3), None);
        registry.update_hover(0, 0);

        assert!(registry.get_hovered().is_some());
        assert_eq!(registry.hover_highlight(), None);
    }
}
