//! Two-click linking of pins.
//!
//! The first click on a pin leaves it pending, a click on a different pin
//! completes the link. Clicking the pending pin again changes nothing.

use std::collections::BTreeMap;

use crate::data::points::PointId;

/// State of the two-click gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Pending(PointId),
}

/// What a call to [`LinkGraph::begin_selection`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No selection was pending; `id` is now pending.
    Started(PointId),
    /// The pending pin was selected again; nothing changed.
    Unchanged(PointId),
    /// A link between the pending pin and the newly selected one was recorded.
    Linked(PointId, PointId),
}

/// Undirected links between pins, stored as neighbor lists on both ends.
///
/// Linking the same pair twice records the pair twice.
#[derive(Debug, Default, Clone)]
pub struct LinkGraph {
    neighbors: BTreeMap<PointId, Vec<PointId>>,
    /// Links in recording order, `(pending, selected)`.
    links: Vec<(PointId, PointId)>,
    selection: Selection,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `id` an empty neighbor list so it shows up in [`Self::neighbors`].
    pub fn register_point(&mut self, id: PointId) {
        self.neighbors.entry(id).or_default();
    }

    /// Feed one pin click into the gesture.
    pub fn begin_selection(&mut self, id: PointId) -> SelectionOutcome {
        match self.selection {
            Selection::Idle => {
                self.selection = Selection::Pending(id);
                SelectionOutcome::Started(id)
            }
            Selection::Pending(pending) if pending == id => SelectionOutcome::Unchanged(id),
            Selection::Pending(pending) => {
                self.selection = Selection::Idle;
                self.record(pending, id);
                SelectionOutcome::Linked(pending, id)
            }
        }
    }

    fn record(&mut self, a: PointId, b: PointId) {
        self.neighbors.entry(b).or_default().push(a);
        self.neighbors.entry(a).or_default().push(b);
        self.links.push((a, b));
    }

    /// Drop a pending selection, if any. Returns the id that was pending.
    pub fn cancel_selection(&mut self) -> Option<PointId> {
        let pending = self.pending();
        self.selection = Selection::Idle;
        pending
    }

    pub fn are_linked(&self, a: PointId, b: PointId) -> bool {
        self.neighbors
            .get(&a)
            .map_or(false, |list| list.contains(&b))
    }

    pub fn neighbors(&self, id: PointId) -> &[PointId] {
        self.neighbors.get(&id).map_or(&[], |v| v.as_slice())
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pending(&self) -> Option<PointId> {
        match self.selection {
            Selection::Pending(id) => Some(id),
            Selection::Idle => None,
        }
    }

    pub fn links(&self) -> &[(PointId, PointId)] {
        &self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn clear(&mut self) {
        self.neighbors.clear();
        self.links.clear();
        self.selection = Selection::Idle;
    }
}
