//! The interning pool.
//!
//! An arena of reference-counted slots plus a content-hash index from value to
//! slot. Interning looks the value up first and only allocates on a miss.
//! Cloning an [`Atom`] bumps its slot's count; dropping the last one frees the
//! slot and unindexes the value.
//!
//! The pool is per thread and created on first use. Atoms are `!Send`, so an
//! atom is always released into the pool it came from.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::value::AtomValue;

thread_local! {
    static POOL: RefCell<Pool> = RefCell::new(Pool::default());
}

struct Slot {
    value: Rc<AtomValue>,
    refs: usize,
}

#[derive(Default)]
struct Pool {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    index: HashMap<Rc<AtomValue>, usize>,
}

impl Pool {
    fn intern(&mut self, value: AtomValue) -> Atom {
        if let Some(&slot) = self.index.get(&value) {
            if let Some(Some(entry)) = self.slots.get_mut(slot) {
                entry.refs += 1;
                return Atom { slot, value: Rc::clone(&entry.value) };
            }
        }

        let value = Rc::new(value);
        let entry = Slot { value: Rc::clone(&value), refs: 1 };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.index.insert(Rc::clone(&value), slot);
        crate::log::trace!(slot, value = %value, "interned new entry");
        Atom { slot, value }
    }

    fn retain(&mut self, slot: usize) {
        if let Some(Some(entry)) = self.slots.get_mut(slot) {
            entry.refs += 1;
        }
    }

    fn release(&mut self, slot: usize) {
        let Some(Some(entry)) = self.slots.get_mut(slot) else {
            return;
        };
        entry.refs -= 1;
        if entry.refs > 0 {
            return;
        }
        if let Some(entry) = self.slots[slot].take() {
            self.index.remove(&*entry.value);
            self.free.push(slot);
            crate::log::trace!(slot, value = %entry.value, "released entry");
        }
    }

    fn refs(&self, slot: usize) -> usize {
        match self.slots.get(slot) {
            Some(Some(entry)) => entry.refs,
            _ => 0,
        }
    }
}

/// A counted handle to one interned value.
///
/// Two atoms are equal exactly when they share a slot, which holds exactly
/// when their values are equal.
pub(crate) struct Atom {
    slot: usize,
    value: Rc<AtomValue>,
}

impl Atom {
    pub(crate) fn intern(value: AtomValue) -> Atom {
        POOL.with_borrow_mut(|pool| pool.intern(value))
    }

    pub(crate) fn value(&self) -> &AtomValue {
        &self.value
    }

    pub(crate) fn slot(&self) -> usize {
        self.slot
    }

    pub(crate) fn ref_count(&self) -> usize {
        POOL.with_borrow(|pool| pool.refs(self.slot))
    }
}

impl Clone for Atom {
    fn clone(&self) -> Atom {
        POOL.with_borrow_mut(|pool| pool.retain(self.slot));
        Atom { slot: self.slot, value: Rc::clone(&self.value) }
    }
}

impl Drop for Atom {
    fn drop(&mut self) {
        // The pool may already be gone while thread-locals are torn down.
        let _ = POOL.try_with(|pool| pool.borrow_mut().release(self.slot));
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Atom) -> bool {
        self.slot == other.slot
    }
}

impl Eq for Atom {}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {:?}", self.slot, self.value)
    }
}

/// Number of distinct values currently interned on this thread.
pub fn live_entries() -> usize {
    POOL.with_borrow(|pool| pool.index.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn equal_values_share_a_slot() {
        let before = live_entries();
        let a = Atom::intern(AtomValue::text("pool-shared"));
        let b = Atom::intern(AtomValue::text("pool-shared"));
        assert_eq!(a, b);
        assert_eq!(a.ref_count(), 2);
        assert_eq!(live_entries(), before + 1);
    }

    #[test]
    fn last_release_frees_the_entry() {
        let before = live_entries();
        let a = Atom::intern(AtomValue::point(Point::new(3.0, 4.0)));
        let b = a.clone();
        assert_eq!(b.ref_count(), 2);
        drop(a);
        assert_eq!(b.ref_count(), 1);
        assert_eq!(live_entries(), before + 1);
        drop(b);
        assert_eq!(live_entries(), before);
    }

    #[test]
    fn freed_slots_are_reused() {
        let a = Atom::intern(AtomValue::text("pool-first"));
        let slot = a.slot();
        drop(a);
        let b = Atom::intern(AtomValue::text("pool-second"));
        assert_eq!(b.slot(), slot);
        assert_eq!(b.value().as_text(), Some("pool-second"));
    }

    #[test]
    fn reinterning_after_release_starts_fresh() {
        let a = Atom::intern(AtomValue::scalar(8.5));
        drop(a);
        let b = Atom::intern(AtomValue::scalar(8.5));
        assert_eq!(b.ref_count(), 1);
    }

    #[test]
    fn pools_are_per_thread() {
        let _held = Atom::intern(AtomValue::text("pool-thread-local"));
        let other = std::thread::spawn(live_entries).join();
        assert_eq!(other.ok(), Some(0));
    }
}
