//! Property inspector - shows and edits the selected entity
//!
//! Edits are not applied here. Each stepper click becomes an
//! `InspectorRequest` that the UI manager forwards to the scene, which owns
//! the entity data.

use macroquad::prelude::*;
use crate::ui::{
    draw_button, draw_panel, draw_text_left, panel_content_rect, theme, ButtonStyle, ButtonVisual, Rect,
    UiContext,
};
use crate::world::{Entity, EntityId, PlatformConfig, Property, PropertyValue};
use super::EventQueue;

const ROW_HEIGHT: f32 = 26.0;
const HEADER_ROWS: f32 = 2.0;
const STEP_BUTTON: f32 = 24.0;

/// Change or deletion asked for by the inspector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectorRequest {
    Change {
        entity: EntityId,
        property: Property,
        value: PropertyValue,
    },
    Delete(EntityId),
}

/// Screen rects for one property row
#[derive(Debug, Clone, Copy)]
struct RowLayout {
    label: Rect,
    minus: Rect,
    value: Rect,
    plus: Rect,
}

pub struct PropertyInspector {
    /// Entity being displayed (mirrors the UI manager's selection)
    entity: Option<EntityId>,
    /// Position step for X/Y, normally the grid size
    position_step: f32,
    requests: EventQueue<InspectorRequest>,
    hovered: Option<Rect>,
}

impl PropertyInspector {
    pub fn new(position_step: f32) -> Self {
        Self {
            entity: None,
            position_step,
            requests: EventQueue::new(),
            hovered: None,
        }
    }

    /// Show `entity` (or the empty state)
    pub fn display(&mut self, entity: Option<EntityId>) {
        self.entity = entity;
        self.hovered = None;
    }

    pub fn displayed(&self) -> Option<EntityId> {
        self.entity
    }

    pub fn drain_requests(&mut self) -> Vec<InspectorRequest> {
        self.requests.take()
    }

    fn row_layout(content: Rect, index: usize) -> RowLayout {
        let y = content.y + (HEADER_ROWS + index as f32) * ROW_HEIGHT;
        let row = Rect::new(content.x, y, content.w, ROW_HEIGHT - 2.0);
        let plus = Rect::new(row.right() - STEP_BUTTON, row.y, STEP_BUTTON, row.h);
        let value = Rect::new(plus.x - 64.0, row.y, 64.0, row.h);
        let minus = Rect::new(value.x - STEP_BUTTON, row.y, STEP_BUTTON, row.h);
        let label = Rect::new(row.x, row.y, minus.x - row.x, row.h);
        RowLayout { label, minus, value, plus }
    }

    fn delete_rect(content: Rect, rows: usize) -> Rect {
        let y = content.y + (HEADER_ROWS + rows as f32) * ROW_HEIGHT + 8.0;
        Rect::new(content.x, y, content.w, ROW_HEIGHT)
    }

    /// New value for `property` after one step in direction `delta` (-1/+1)
    fn stepped_value(&self, entity: &Entity, property: Property, delta: i64) -> Option<PropertyValue> {
        match entity.property(property)? {
            PropertyValue::Number(v) => Some(PropertyValue::Number(v + delta as f32 * self.position_step)),
            PropertyValue::Count(n) => {
                let next = PlatformConfig::clamp_segments(n as i64 + delta);
                (next != n).then_some(PropertyValue::Count(next))
            }
            PropertyValue::Flag(b) => Some(PropertyValue::Flag(!b)),
        }
    }

    /// Hit-test steppers and the delete button for the displayed entity.
    /// `entity` is the scene's current data for the displayed id.
    pub fn handle_input(&mut self, ctx: &mut UiContext, rect: Rect, entity: Option<&Entity>) {
        self.hovered = None;
        let content = panel_content_rect(rect, true);

        if let Some(entity) = entity.filter(|e| Some(e.id) == self.entity) {
            let properties = entity.properties();
            for (i, &property) in properties.iter().enumerate() {
                let row = Self::row_layout(content, i);
                for (button, delta) in [(row.minus, -1), (row.plus, 1)] {
                    if ctx.hovering(&button) {
                        self.hovered = Some(button);
                    }
                    if ctx.take_click(&button) {
                        if let Some(value) = self.stepped_value(entity, property, delta) {
                            self.requests.send(InspectorRequest::Change { entity: entity.id, property, value });
                        }
                    }
                }
            }

            let delete = Self::delete_rect(content, properties.len());
            if ctx.hovering(&delete) {
                self.hovered = Some(delete);
            }
            if ctx.take_click(&delete) {
                log::debug!("Inspector: delete {}", entity.id);
                self.requests.send(InspectorRequest::Delete(entity.id));
            }
        }

        ctx.block(&rect);
    }

    /// Rect of a property's minus/plus button (used by tests and tooling)
    pub fn stepper_rect(&self, rect: Rect, entity: &Entity, property: Property, increase: bool) -> Option<Rect> {
        let index = entity.properties().iter().position(|p| *p == property)?;
        let row = Self::row_layout(panel_content_rect(rect, true), index);
        Some(if increase { row.plus } else { row.minus })
    }

    pub fn delete_button_rect(&self, rect: Rect, entity: &Entity) -> Rect {
        Self::delete_rect(panel_content_rect(rect, true), entity.properties().len())
    }

    pub fn draw(&self, rect: Rect, entity: Option<&Entity>) {
        draw_panel(rect, Some("Inspector"), theme::PANEL_BG);
        let content = panel_content_rect(rect, true);

        let Some(entity) = entity.filter(|e| Some(e.id) == self.entity) else {
            let line = Rect::new(content.x, content.y, content.w, ROW_HEIGHT);
            draw_text_left("Nothing selected", line, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
            return;
        };

        let title = Rect::new(content.x, content.y, content.w, ROW_HEIGHT);
        draw_text_left(&format!("{} {}", entity.kind.label(), entity.id), title, theme::FONT_SIZE_HEADER, WHITE);
        let size = title.offset(0.0, ROW_HEIGHT);
        draw_text_left(
            &format!("Size: {:.0} x {:.0}", entity.width, entity.height),
            size,
            theme::FONT_SIZE_SMALL,
            theme::TEXT_DIM,
        );

        let visual = |r: Rect| ButtonVisual { hovered: self.hovered == Some(r), ..Default::default() };

        let properties = entity.properties();
        for (i, &property) in properties.iter().enumerate() {
            let row = Self::row_layout(content, i);
            draw_text_left(property.label(), row.label, theme::FONT_SIZE_CONTENT, theme::TEXT_COLOR);

            let text = match entity.property(property) {
                Some(PropertyValue::Number(v)) => format!("{:.0}", v),
                Some(PropertyValue::Count(n)) => n.to_string(),
                Some(PropertyValue::Flag(b)) => if b { "Yes".to_string() } else { "No".to_string() },
                None => "-".to_string(),
            };
            draw_rectangle(row.value.x, row.value.y, row.value.w, row.value.h, theme::BG_COLOR);
            crate::ui::draw_text_centered(&text, row.value, theme::FONT_SIZE_CONTENT, WHITE);

            draw_button(row.minus, "-", ButtonStyle::Normal, visual(row.minus));
            draw_button(row.plus, "+", ButtonStyle::Normal, visual(row.plus));
        }

        let delete = Self::delete_rect(content, properties.len());
        draw_button(delete, "Delete", ButtonStyle::Danger, visual(delete));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;
    use crate::world::EntityKind;

    fn inspector_rect() -> Rect {
        Rect::new(600.0, 32.0, 220.0, 400.0)
    }

    fn click(inspector: &mut PropertyInspector, at: Rect, entity: &Entity) {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::pressed_at(at.center_x(), at.center_y()));
        inspector.handle_input(&mut ctx, inspector_rect(), Some(entity));
    }

    #[test]
    fn test_position_steps_by_grid() {
        let entity = Entity::new(EntityId(4), EntityKind::Enemy, 64.0, 32.0, None);
        let mut inspector = PropertyInspector::new(32.0);
        inspector.display(Some(entity.id));

        let plus = inspector.stepper_rect(inspector_rect(), &entity, Property::X, true).unwrap();
        click(&mut inspector, plus, &entity);

        assert_eq!(
            inspector.drain_requests(),
            vec![InspectorRequest::Change {
                entity: EntityId(4),
                property: Property::X,
                value: PropertyValue::Number(96.0),
            }]
        );
    }

    #[test]
    fn test_segments_stepper_clamps() {
        let config = PlatformConfig::default().with_segments(10);
        let entity = Entity::new(EntityId(1), EntityKind::Platform, 0.0, 0.0, Some(config));
        let mut inspector = PropertyInspector::new(32.0);
        inspector.display(Some(entity.id));

        // Already at the max: no request
        let plus = inspector.stepper_rect(inspector_rect(), &entity, Property::Segments, true).unwrap();
        click(&mut inspector, plus, &entity);
        assert!(inspector.drain_requests().is_empty());

        let minus = inspector.stepper_rect(inspector_rect(), &entity, Property::Segments, false).unwrap();
        click(&mut inspector, minus, &entity);
        assert_eq!(
            inspector.drain_requests(),
            vec![InspectorRequest::Change {
                entity: EntityId(1),
                property: Property::Segments,
                value: PropertyValue::Count(9),
            }]
        );
    }

    #[test]
    fn test_vertical_toggles() {
        let entity = Entity::new(EntityId(1), EntityKind::Platform, 0.0, 0.0, None);
        let mut inspector = PropertyInspector::new(32.0);
        inspector.display(Some(entity.id));

        let plus = inspector.stepper_rect(inspector_rect(), &entity, Property::Vertical, true).unwrap();
        click(&mut inspector, plus, &entity);
        assert_eq!(
            inspector.drain_requests(),
            vec![InspectorRequest::Change {
                entity: EntityId(1),
                property: Property::Vertical,
                value: PropertyValue::Flag(true),
            }]
        );
    }

    #[test]
    fn test_delete_request() {
        let entity = Entity::new(EntityId(7), EntityKind::Coin, 0.0, 0.0, None);
        let mut inspector = PropertyInspector::new(32.0);
        inspector.display(Some(entity.id));

        let delete = inspector.delete_button_rect(inspector_rect(), &entity);
        click(&mut inspector, delete, &entity);
        assert_eq!(inspector.drain_requests(), vec![InspectorRequest::Delete(EntityId(7))]);
    }

    #[test]
    fn test_ignores_entity_it_is_not_displaying() {
        let entity = Entity::new(EntityId(7), EntityKind::Coin, 0.0, 0.0, None);
        let mut inspector = PropertyInspector::new(32.0);
        inspector.display(None);

        let delete = inspector.delete_button_rect(inspector_rect(), &entity);
        click(&mut inspector, delete, &entity);
        assert!(inspector.drain_requests().is_empty());
    }
}
