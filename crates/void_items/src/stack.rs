//! Item stacks

use crate::item::Item;
use std::fmt;
use std::sync::Arc;

/// A quantity of one item kind.
///
/// The quantity always stays within `0..=item.max_stack_size()`. Every
/// mutator clamps instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    item: Arc<Item>,
    quantity: u32,
}

impl ItemStack {
    /// Create a new stack, clamping `quantity` to the item's stack limit
    pub fn new(item: Arc<Item>, quantity: u32) -> Self {
        let quantity = quantity.min(item.max_stack_size());
        Self { item, quantity }
    }

    /// Create a stack of one
    pub fn single(item: Arc<Item>) -> Self {
        Self::new(item, 1)
    }

    /// Shared definition of the stacked item
    pub fn item(&self) -> &Arc<Item> {
        &self.item
    }

    pub fn item_id(&self) -> &str {
        self.item.id()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn max_stack_size(&self) -> u32 {
        self.item.max_stack_size()
    }

    /// Set the quantity, clamped to the stack limit
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.min(self.item.max_stack_size());
    }

    /// Add to this stack. Anything past the stack limit is dropped, so use
    /// [`merge`](Self::merge) when the overflow matters.
    pub fn add_quantity(&mut self, amount: u32) {
        self.set_quantity(self.quantity.saturating_add(amount));
    }

    /// Remove from this stack, flooring at zero
    pub fn remove_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_sub(amount);
    }

    pub fn is_full(&self) -> bool {
        self.quantity >= self.item.max_stack_size()
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// How many more items fit before the stack is full
    pub fn remaining_capacity(&self) -> u32 {
        self.item.max_stack_size().saturating_sub(self.quantity)
    }

    /// Check if stacks hold the same item kind
    pub fn can_merge(&self, other: &ItemStack) -> bool {
        self.item.id() == other.item.id()
    }

    /// Move as much of `other` into this stack as fits.
    ///
    /// Returns what is left in `other` (0 = fully absorbed). Stacks of
    /// different items are left untouched.
    pub fn merge(&mut self, other: &mut ItemStack) -> u32 {
        if !self.can_merge(other) {
            return other.quantity;
        }

        let moved = self.remaining_capacity().min(other.quantity);
        self.quantity += moved;
        other.quantity -= moved;
        other.quantity
    }

    /// Split `amount` off into a new stack. Only splits when both halves
    /// end up non-empty.
    pub fn split(&mut self, amount: u32) -> Option<ItemStack> {
        if amount > 0 && amount < self.quantity {
            self.quantity -= amount;
            Some(ItemStack {
                item: Arc::clone(&self.item),
                quantity: amount,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.item.name(), self.quantity)
    }
}
