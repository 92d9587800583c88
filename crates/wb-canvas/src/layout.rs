//! Initial card placement
//!
//! Cards are laid out on a square-ish grid centered on the canvas origin,
//! row-major in load order. Optional jitter and rotation come from the
//! caller's RNG so a fixed seed reproduces the same board.

use rand::Rng;
use tracing::debug;
use crate::config::CanvasConfig;
use crate::item::{ContentItem, Item, Position};
use crate::math::Size;

/// Layout parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Center-to-center distance between grid cells
    pub spacing: f64,
    /// Footprint used when a card has no explicit size
    pub default_size: Size,
    /// Total width of the symmetric position jitter range
    pub jitter_range: f64,
    /// Total width of the symmetric rotation range (degrees)
    pub rotation_range: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from(&CanvasConfig::default())
    }
}

impl From<&CanvasConfig> for LayoutOptions {
    fn from(config: &CanvasConfig) -> Self {
        Self {
            spacing: config.grid_spacing,
            default_size: config.sticky_size(),
            jitter_range: config.jitter_range,
            rotation_range: config.rotation_range,
        }
    }
}

/// Number of grid columns for `count` cards
#[inline]
pub fn columns_for(count: usize) -> usize {
    (count as f64).sqrt().ceil() as usize
}

/// Place every content item on the grid
pub fn layout<R: Rng + ?Sized>(
    contents: &[ContentItem],
    options: &LayoutOptions,
    rng: &mut R,
) -> Vec<Item> {
    let count = contents.len();
    if count == 0 {
        return Vec::new();
    }

    let columns = columns_for(count);
    let rows = count.div_ceil(columns);
    let spacing = options.spacing;
    let start_x = -(columns as f64 * spacing) / 2.0 + spacing / 2.0;
    let start_y = -(rows as f64 * spacing) / 2.0 + spacing / 2.0;

    debug!(count, columns, rows, "laying out cards");

    contents
        .iter()
        .enumerate()
        .map(|(i, content)| {
            let row = i / columns;
            let col = i % columns;
            let size = content
                .size
                .filter(|size| !size.is_empty())
                .unwrap_or(options.default_size);

            let position = Position {
                x: start_x + col as f64 * spacing + symmetric(rng, options.jitter_range),
                y: start_y + row as f64 * spacing + symmetric(rng, options.jitter_range),
                z: i as i64,
                width: size.width,
                height: size.height,
                rotation_degrees: symmetric(rng, options.rotation_range),
                expanded: false,
            };
            Item::new(content.resolved_id(), content.content.clone(), position)
        })
        .collect()
}

/// Uniform value in `[-range/2, range/2]`; zero ranges draw nothing
fn symmetric<R: Rng + ?Sized>(rng: &mut R, range: f64) -> f64 {
    if range > 0.0 && range.is_finite() {
        let half = range / 2.0;
        rng.random_range(-half..=half)
    } else {
        0.0
    }
}

/// Return a copy of `items` with `id` raised above every other card
pub fn update_z_order(items: &[Item], id: &str) -> Vec<Item> {
    let mut items = items.to_vec();
    raise_to_front(&mut items, id);
    items
}

/// Set the named card's `z` to one above the current maximum
///
/// Returns `false` if no card has that id.
pub fn raise_to_front(items: &mut [Item], id: &str) -> bool {
    let Some(max_z) = items.iter().map(|item| item.position.z).max() else {
        return false;
    };
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.position.z = max_z + 1;
            true
        }
        None => false,
    }
}
