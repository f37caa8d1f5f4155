//! Effect installers, one per page region.
//!
//! Each module exposes `install`, which binds its selector's elements and
//! returns how many it bound, plus the pure functions mapping pointer input
//! to tween requests so they can be checked without a page.

pub mod global_reveal;
pub mod hero;
pub mod loader;
pub mod magnetic;
pub mod menu;
pub mod navbar;
pub mod tilt;

use crate::host::Host;
use std::cell::RefCell;

/// Overlay child fetched from the host on first use and reused after.
pub(crate) struct LazySlot<E> {
    class_name: &'static str,
    slot: RefCell<Option<E>>,
}

impl<E: Clone> LazySlot<E> {
    pub(crate) fn new(class_name: &'static str) -> Self {
        Self {
            class_name,
            slot: RefCell::new(None),
        }
    }

    pub(crate) fn get_or_create<H: Host<Element = E>>(&self, host: &H, owner: &E) -> Option<E> {
        if let Some(el) = self.slot.borrow().as_ref() {
            return Some(el.clone());
        }
        let el = host.overlay_slot(owner, self.class_name)?;
        *self.slot.borrow_mut() = Some(el.clone());
        Some(el)
    }

    /// The slot if a move has already created it.
    pub(crate) fn existing(&self) -> Option<E> {
        self.slot.borrow().clone()
    }
}
