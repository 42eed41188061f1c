use crate::SlotId;

/// Up to two selected slots, in the order they were selected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    first: Option<SlotId>,
    second: Option<SlotId>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.second.is_some()
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        self.first == Some(slot) || self.second == Some(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = SlotId> {
        self.first.into_iter().chain(self.second)
    }

    /// Both selected slots, if two are selected
    pub fn pair(&self) -> Option<(SlotId, SlotId)> {
        Some((self.first?, self.second?))
    }

    /// Adds a slot. Returns false if two slots are already selected.
    pub(crate) fn insert(&mut self, slot: SlotId) -> bool {
        debug_assert!(!self.contains(slot));
        match (self.first, self.second) {
            (None, _) => self.first = Some(slot),
            (Some(_), None) => self.second = Some(slot),
            (Some(_), Some(_)) => return false,
        }
        true
    }

    /// Removes a slot, keeping the order of the other. Returns false if it was not selected.
    pub(crate) fn remove(&mut self, slot: SlotId) -> bool {
        if self.second == Some(slot) {
            self.second = None;
        } else if self.first == Some(slot) {
            self.first = self.second.take();
        } else {
            return false;
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
