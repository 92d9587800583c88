//! Render-state snapshot with screen coordinates

use serde::Serialize;
use crate::config::RenderQuality;
use crate::input::{ListenerSet, ManipulationState};
use crate::item::{Item, ItemFilter, ItemId, ItemKind, ItemPayload, Position};
use crate::math::{Projection, Rect, Transform, Vec2};
use super::CanvasEngine;

/// Card with screen-space coordinates for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub kind: ItemKind,
    pub content: ItemPayload,
    /// Canvas-space placement
    pub position: Position,
    /// Unrotated bounds in viewport pixels under the displayed transform
    pub screen_rect: Rect,
    pub state: ManipulationState,
    pub focused: bool,
}

/// Everything a renderer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    /// Committed camera transform
    pub transform: Transform,
    /// Eased transform for this instant (equals `transform` outside a transition)
    pub displayed_transform: Transform,
    pub transitioning: bool,
    pub filter: ItemFilter,
    pub render_quality: RenderQuality,
    pub focused_index: usize,
    pub dragging_id: Option<ItemId>,
    pub resizing_id: Option<ItemId>,
    pub listeners: ListenerSet,
    /// Visible cards, back to front
    pub items: Vec<ItemView>,
}

impl CanvasEngine {
    /// Snapshot the engine for rendering at `now_ms`
    pub fn render_state(&self, now_ms: f64) -> RenderState {
        let displayed = self.viewport.displayed_transform(now_ms);
        let viewport = self.viewport.viewport();
        let projection = if viewport.is_empty() {
            Projection::identity()
        } else {
            displayed.projection(viewport)
        };
        let focused_id = self.focused_item().map(|item| item.id.clone());

        let items = self
            .items
            .by_z()
            .into_iter()
            .filter(|item| self.filter.matches(item))
            .map(|item| self.item_view(item, &projection, focused_id.as_deref()))
            .collect();

        RenderState {
            transform: self.viewport.transform(),
            displayed_transform: displayed,
            transitioning: self.viewport.is_transitioning(now_ms),
            filter: self.filter,
            render_quality: self.config.render_quality,
            focused_index: self.focus.index(),
            dragging_id: self.manipulator.dragging_id().map(str::to_string),
            resizing_id: self.manipulator.resizing_id().map(str::to_string),
            listeners: self.listeners(),
            items,
        }
    }

    /// Convert a card to its screen-space view
    fn item_view(&self, item: &Item, projection: &Projection, focused_id: Option<&str>) -> ItemView {
        let rect = item.position.rect();
        let top_left = projection.to_screen(Vec2::new(rect.x, rect.y));
        let size = item.position.size().scale(projection.scale);

        ItemView {
            id: item.id.clone(),
            kind: item.kind(),
            content: item.content.clone(),
            position: item.position,
            screen_rect: Rect::new(top_left.x, top_left.y, size.width, size.height),
            state: self.manipulator.state_of(&item.id),
            focused: focused_id == Some(item.id.as_str()),
        }
    }
}
