//! Grid inventory
//!
//! Items occupy a `width x height` rectangle of cells, anchored at its
//! top-left cell. Every cell of the rectangle refers to the same stack
//! through a [`StackHandle`], and no two stacks share a cell.

use crate::arena::{PlacedStack, StackArena, StackHandle};
use std::sync::Arc;
use thiserror::Error;
use void_items::{Item, ItemStack};

/// Why a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceErrorKind {
    /// Anchor outside the grid, or footprint crosses the grid edge
    #[error("position out of bounds")]
    OutOfBounds,
    /// At least one footprint cell holds another stack
    #[error("cells already occupied")]
    Occupied,
    /// Stack holds nothing
    #[error("stack is empty")]
    EmptyStack,
}

/// Rejected placement. Carries the stack back to the caller unchanged.
#[derive(Debug, Clone, Error)]
#[error("cannot place {stack} at ({x}, {y}): {kind}")]
pub struct PlaceError {
    pub kind: PlaceErrorKind,
    pub x: i32,
    pub y: i32,
    stack: ItemStack,
}

impl PlaceError {
    /// The stack that could not be placed
    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Take the stack back
    pub fn into_stack(self) -> ItemStack {
        self.stack
    }
}

/// Grid inventory with a gold purse
#[derive(Debug, Clone)]
pub struct Inventory {
    width: u32,
    height: u32,
    /// Row-major cells, `y * width + x`
    cells: Vec<Option<StackHandle>>,
    stacks: StackArena,
    gold: u32,
}

impl Inventory {
    /// Create an empty grid
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            stacks: StackArena::new(),
            gold: 0,
        }
    }

    pub fn grid_width(&self) -> u32 {
        self.width
    }

    pub fn grid_height(&self) -> u32 {
        self.height
    }

    // ---- Gold ----

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Set gold, clamped to zero
    pub fn set_gold(&mut self, amount: i64) {
        self.gold = amount.clamp(0, u32::MAX as i64) as u32;
    }

    /// Add gold. Negative amounts subtract; the purse floors at zero.
    pub fn add_gold(&mut self, amount: i64) {
        self.set_gold(i64::from(self.gold).saturating_add(amount));
    }

    /// Remove gold, flooring at zero rather than failing
    pub fn remove_gold(&mut self, amount: i64) {
        self.set_gold(i64::from(self.gold).saturating_sub(amount));
    }

    // ---- Cells ----

    /// Check if a position is within grid bounds
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Handle of the stack covering a cell
    pub fn handle_at(&self, x: i32, y: i32) -> Option<StackHandle> {
        if !self.is_valid_position(x, y) {
            return None;
        }
        self.cells[self.cell_index(x as u32, y as u32)]
    }

    /// Stack covering a cell. Every cell of a multi-cell item returns the
    /// same stack.
    pub fn get_item_at(&self, x: i32, y: i32) -> Option<&ItemStack> {
        self.handle_at(x, y).and_then(|h| self.stack(h))
    }

    /// Look up a placed stack by handle
    pub fn stack(&self, handle: StackHandle) -> Option<&ItemStack> {
        self.stacks.get(handle).map(|p| &p.stack)
    }

    /// Top-left cell of a placed stack
    pub fn anchor_of(&self, handle: StackHandle) -> Option<(u32, u32)> {
        self.stacks.get(handle).map(|p| p.anchor)
    }

    fn check_placement(&self, item: &Item, x: i32, y: i32) -> Result<(u32, u32), PlaceErrorKind> {
        if !self.is_valid_position(x, y) {
            return Err(PlaceErrorKind::OutOfBounds);
        }
        let (x, y) = (x as u32, y as u32);

        if x as u64 + item.width() as u64 > self.width as u64
            || y as u64 + item.height() as u64 > self.height as u64
        {
            return Err(PlaceErrorKind::OutOfBounds);
        }

        for cy in y..y + item.height() {
            for cx in x..x + item.width() {
                if self.cells[self.cell_index(cx, cy)].is_some() {
                    return Err(PlaceErrorKind::Occupied);
                }
            }
        }

        Ok((x, y))
    }

    /// Check if an item fits with its top-left cell at `(x, y)`
    pub fn can_place_item(&self, item: &Item, x: i32, y: i32) -> bool {
        self.check_placement(item, x, y).is_ok()
    }

    fn fill_footprint(&mut self, anchor: (u32, u32), width: u32, height: u32, value: Option<StackHandle>) {
        let x_end = (anchor.0 + width).min(self.width);
        let y_end = (anchor.1 + height).min(self.height);
        for cy in anchor.1..y_end {
            for cx in anchor.0..x_end {
                let index = self.cell_index(cx, cy);
                self.cells[index] = value;
            }
        }
    }

    /// Place a stack with its top-left cell at `(x, y)`.
    ///
    /// On success every footprint cell refers to the new stack. On failure
    /// nothing changes and the stack comes back inside the error. Empty
    /// stacks are never placed.
    pub fn place_item(&mut self, stack: ItemStack, x: i32, y: i32) -> Result<StackHandle, PlaceError> {
        if stack.is_empty() {
            return Err(PlaceError {
                kind: PlaceErrorKind::EmptyStack,
                x,
                y,
                stack,
            });
        }
        let anchor = match self.check_placement(stack.item(), x, y) {
            Ok(anchor) => anchor,
            Err(kind) => return Err(PlaceError { kind, x, y, stack }),
        };

        let (width, height) = (stack.item().width(), stack.item().height());
        log::debug!("Placed {} at ({}, {})", stack, anchor.0, anchor.1);
        let handle = self.stacks.insert(PlacedStack { stack, anchor });
        self.fill_footprint(anchor, width, height, Some(handle));
        Ok(handle)
    }

    /// Remove whichever stack covers `(x, y)`, clearing its whole footprint
    pub fn remove_item(&mut self, x: i32, y: i32) -> Option<ItemStack> {
        let handle = self.handle_at(x, y)?;
        let placed = self.stacks.remove(handle)?;

        let item = placed.stack.item();
        self.fill_footprint(placed.anchor, item.width(), item.height(), None);
        log::debug!(
            "Removed {} from ({}, {})",
            placed.stack,
            placed.anchor.0,
            placed.anchor.1
        );
        Some(placed.stack)
    }

    /// Move the stack covering `from` so that its top-left cell lands on
    /// `to`. The target may overlap the stack's current footprint. If the
    /// target does not fit the stack stays where it was.
    pub fn move_item(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        let Some(handle) = self.handle_at(from_x, from_y) else {
            return false;
        };
        let Some(anchor) = self.anchor_of(handle) else {
            return false;
        };
        let Some(stack) = self.remove_item(from_x, from_y) else {
            return false;
        };

        match self.place_item(stack, to_x, to_y) {
            Ok(_) => true,
            Err(rejected) => {
                let stack = rejected.into_stack();
                // Source footprint is vacant again
                if let Err(e) = self.place_item(stack, anchor.0 as i32, anchor.1 as i32) {
                    log::error!("Lost stack while restoring failed move: {}", e);
                }
                false
            }
        }
    }

    /// Remove up to `amount` items from the stack covering `(x, y)`.
    ///
    /// Returns how many were removed. A stack that runs out is taken off
    /// the grid.
    pub fn consume_at(&mut self, x: i32, y: i32, amount: u32) -> u32 {
        let Some(handle) = self.handle_at(x, y) else {
            return 0;
        };
        let Some(placed) = self.stacks.get_mut(handle) else {
            return 0;
        };

        let removed = amount.min(placed.stack.quantity());
        placed.stack.remove_quantity(removed);
        if placed.stack.is_empty() {
            self.remove_item(x, y);
        }
        removed
    }

    // ---- Auto placement ----

    /// Add `quantity` of an item wherever it fits.
    ///
    /// Stackable items first top up existing stacks of the same item,
    /// scanning columns left to right (top to bottom within a column). The
    /// rest goes into new stacks of at most `max_stack_size`, each placed at
    /// the first free position scanning rows top to bottom (left to right
    /// within a row).
    ///
    /// Returns the quantity that could not be placed; 0 means everything
    /// fit. A non-zero result may still have changed the grid: stacks
    /// topped up and new stacks placed before space ran out are kept.
    pub fn add_item(&mut self, item: &Arc<Item>, quantity: u32) -> u32 {
        let mut remaining = quantity;

        if item.is_stackable() {
            'columns: for x in 0..self.width {
                for y in 0..self.height {
                    if remaining == 0 {
                        break 'columns;
                    }
                    let Some(handle) = self.cells[self.cell_index(x, y)] else {
                        continue;
                    };
                    let Some(placed) = self.stacks.get_mut(handle) else {
                        continue;
                    };
                    if placed.stack.item_id() == item.id() {
                        let to_add = placed.stack.remaining_capacity().min(remaining);
                        placed.stack.add_quantity(to_add);
                        remaining -= to_add;
                    }
                }
            }
        }

        while remaining > 0 {
            let stack_size = remaining.min(item.max_stack_size());
            let Some((x, y)) = self.find_free_position(item) else {
                log::warn!(
                    "No room for {} x{} ({} of {} placed)",
                    item.id(),
                    remaining,
                    quantity - remaining,
                    quantity
                );
                return remaining;
            };

            let stack = ItemStack::new(Arc::clone(item), stack_size);
            if let Err(e) = self.place_item(stack, x as i32, y as i32) {
                log::error!("Free position rejected placement: {}", e);
                return remaining;
            }
            remaining -= stack_size;
        }

        log::debug!("Added {} x{}", item.id(), quantity);
        0
    }

    /// First position (row-major) where `item` fits
    pub fn find_free_position(&self, item: &Item) -> Option<(u32, u32)> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .find(|&(x, y)| self.can_place_item(item, x as i32, y as i32))
    }

    // ---- Queries ----

    /// Total quantity of an item across all stacks. Each stack counts once
    /// no matter how many cells it covers.
    pub fn count_item(&self, item_id: &str) -> u32 {
        self.stacks
            .iter()
            .filter(|(_, p)| p.stack.item_id() == item_id)
            .map(|(_, p)| p.stack.quantity())
            .sum()
    }

    /// Every placed stack with its anchor, in arena order
    pub fn stacks(&self) -> impl Iterator<Item = (StackHandle, (u32, u32), &ItemStack)> {
        self.stacks.iter().map(|(h, p)| (h, p.anchor, &p.stack))
    }

    /// Number of distinct stacks on the grid
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.len() == 0
    }

    /// Number of cells not covered by any stack
    pub fn free_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Empty every cell and reset gold to zero
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.stacks.clear();
        self.gold = 0;
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(8, 6)
    }
}
