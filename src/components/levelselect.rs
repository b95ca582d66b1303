//! Level selection screen component.
//!
//! A [`LevelSelect`] lays the level catalog out on a fixed grid of slots and
//! tracks which one is highlighted. Navigation and activation are handled by
//! [`crate::systems::levelselect::level_select_observer`]; rendering happens
//! in the screen-space pass.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::resources::levelcatalog::LevelCatalog;
use crate::resources::theme::MapTheme;

/// One selectable slot on the grid.
#[derive(Clone, Debug)]
pub struct LevelSlot {
    pub id: String,
    pub name: String,
    pub theme: MapTheme,
    pub locked: bool,
    /// Top-left corner of the slot tile, in screen pixels.
    pub position: Vector2,
}

/// The level selection screen.
#[derive(Component, Clone, Debug)]
pub struct LevelSelect {
    pub slots: Vec<LevelSlot>,
    pub selected_index: usize,
    pub columns: usize,
    pub slot_size: Vector2,
    pub normal_color: Color,
    pub selected_color: Color,
    pub locked_color: Color,
}

impl LevelSelect {
    /// Lay the catalog out on a grid: `columns` wide, row-major, with
    /// `spacing` between slot origins.
    pub fn new(
        catalog: &LevelCatalog,
        origin: Vector2,
        columns: usize,
        slot_size: Vector2,
        spacing: Vector2,
    ) -> Self {
        let columns = columns.max(1);
        let slots = catalog
            .levels
            .iter()
            .enumerate()
            .map(|(i, entry)| LevelSlot {
                id: entry.id.clone(),
                name: entry.name.clone(),
                theme: entry.theme,
                locked: entry.locked,
                position: Vector2 {
                    x: origin.x + (i % columns) as f32 * spacing.x,
                    y: origin.y + (i / columns) as f32 * spacing.y,
                },
            })
            .collect();
        LevelSelect {
            slots,
            selected_index: 0,
            columns,
            slot_size,
            normal_color: Color::new(60, 60, 80, 255),
            selected_color: Color::new(250, 220, 90, 255),
            locked_color: Color::new(40, 40, 48, 255),
        }
    }

    /// Move the highlight by one slot in each axis, clamped to the grid.
    pub fn move_selection(&mut self, dx: i32, dy: i32) {
        if self.slots.is_empty() {
            return;
        }
        let cols = self.columns as i32;
        let count = self.slots.len() as i32;
        let rows = (count as u32).div_ceil(cols as u32) as i32;
        let mut col = self.selected_index as i32 % cols;
        let mut row = self.selected_index as i32 / cols;
        col = (col + dx).clamp(0, cols - 1);
        row = (row + dy).clamp(0, rows - 1);
        let index = (row * cols + col).min(count - 1);
        self.selected_index = index as usize;
    }

    /// The currently highlighted slot.
    pub fn selected(&self) -> &LevelSlot {
        &self.slots[self.selected_index]
    }
}
