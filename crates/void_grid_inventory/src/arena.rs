//! Generational storage for the stacks placed in a grid
//!
//! Every grid cell stores a [`StackHandle`] instead of the stack itself, so a
//! multi-cell item is one arena entry referenced from many cells. Handles
//! carry a generation; a handle to a removed stack never resolves to a stack
//! placed later in the same arena slot.

use void_items::ItemStack;

/// Stable identity of a stack placed in an [`Inventory`](crate::Inventory)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackHandle {
    index: u32,
    generation: u32,
}

impl StackHandle {
    #[inline]
    const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Raw arena index
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

impl std::fmt::Debug for StackHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StackHandle({}v{})", self.index, self.generation)
    }
}

/// A placed stack and the top-left cell of its footprint
#[derive(Debug, Clone)]
pub(crate) struct PlacedStack {
    pub stack: ItemStack,
    pub anchor: (u32, u32),
}

#[derive(Clone)]
struct Entry {
    value: Option<PlacedStack>,
    generation: u32,
}

/// Arena of placed stacks
#[derive(Default, Clone)]
pub(crate) struct StackArena {
    entries: Vec<Entry>,
    free_list: Vec<u32>,
    len: usize,
}

impl StackArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, placed: PlacedStack) -> StackHandle {
        self.len += 1;

        if let Some(index) = self.free_list.pop() {
            let entry = &mut self.entries[index as usize];
            entry.value = Some(placed);
            StackHandle::new(index, entry.generation)
        } else {
            let index = self.entries.len() as u32;
            self.entries.push(Entry {
                value: Some(placed),
                generation: 0,
            });
            StackHandle::new(index, 0)
        }
    }

    pub fn remove(&mut self, handle: StackHandle) -> Option<PlacedStack> {
        let entry = self.entries.get_mut(handle.index as usize)?;
        if entry.generation != handle.generation || entry.value.is_none() {
            return None;
        }

        entry.generation = entry.generation.wrapping_add(1);
        self.free_list.push(handle.index);
        self.len -= 1;
        entry.value.take()
    }

    pub fn get(&self, handle: StackHandle) -> Option<&PlacedStack> {
        let entry = self.entries.get(handle.index as usize)?;
        if entry.generation != handle.generation {
            return None;
        }
        entry.value.as_ref()
    }

    pub fn get_mut(&mut self, handle: StackHandle) -> Option<&mut PlacedStack> {
        let entry = self.entries.get_mut(handle.index as usize)?;
        if entry.generation != handle.generation {
            return None;
        }
        entry.value.as_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            if entry.value.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
                self.free_list.push(i as u32);
            }
        }
        self.len = 0;
    }

    /// Live stacks in arena order
    pub fn iter(&self) -> impl Iterator<Item = (StackHandle, &PlacedStack)> {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry
                .value
                .as_ref()
                .map(|placed| (StackHandle::new(i as u32, entry.generation), placed))
        })
    }
}

impl std::fmt::Debug for StackArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(h, p)| (h, (&p.stack, p.anchor))))
            .finish()
    }
}
