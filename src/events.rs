//! Event system for the pin board.
//!
//! Embedding code subscribes through [`EventController`] and receives
//! [`PinEvent`]s on an `mpsc` channel. Each event carries a set of
//! [`EventKind`] flags so that one occurrence can match several categories
//! (a click that completes a link is `PIN_SELECTED`, `LINK_CREATED` and
//! `MATRIX_UPDATED` at once).
//!
//! Subscribers pass an [`EventFilter`]; an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::geo::{Bounds, LatLon};
use crate::data::points::PointId;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    // ── Pins ────────────────────────────────────────────────────────────
    /// A pin was placed on the map.
    pub const PIN_PLACED: Self = Self(1 << 0);
    /// An existing pin was clicked.
    pub const PIN_SELECTED: Self = Self(1 << 1);

    // ── Linking ─────────────────────────────────────────────────────────
    /// A first pin is now waiting for its partner.
    pub const SELECTION_PENDING: Self = Self(1 << 2);
    /// A pending selection was dropped without linking.
    pub const SELECTION_CANCELLED: Self = Self(1 << 3);
    /// Two pins were linked.
    pub const LINK_CREATED: Self = Self(1 << 4);

    // ── Views ───────────────────────────────────────────────────────────
    /// The distance matrix changed and should be redrawn.
    pub const MATRIX_UPDATED: Self = Self(1 << 5);
    /// Search results were applied to the map.
    pub const SEARCH_APPLIED: Self = Self(1 << 6);

    // ── Output ──────────────────────────────────────────────────────────
    /// The matrix was exported to a file.
    pub const EXPORT: Self = Self(1 << 7);
    /// All pins and links were removed.
    pub const BOARD_RESET: Self = Self(1 << 8);

    pub const ALL: Self = Self(u64::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::PIN_PLACED, "PIN_PLACED"),
            (EventKind::PIN_SELECTED, "PIN_SELECTED"),
            (EventKind::SELECTION_PENDING, "SELECTION_PENDING"),
            (EventKind::SELECTION_CANCELLED, "SELECTION_CANCELLED"),
            (EventKind::LINK_CREATED, "LINK_CREATED"),
            (EventKind::MATRIX_UPDATED, "MATRIX_UPDATED"),
            (EventKind::SEARCH_APPLIED, "SEARCH_APPLIED"),
            (EventKind::EXPORT, "EXPORT"),
            (EventKind::BOARD_RESET, "BOARD_RESET"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PlacementMeta {
    pub id: PointId,
    pub position: LatLon,
}

#[derive(Debug, Clone)]
pub struct SelectionMeta {
    /// The pin that was clicked.
    pub id: PointId,
    /// Pin waiting for a partner after this click, if any.
    pub pending: Option<PointId>,
}

#[derive(Debug, Clone)]
pub struct LinkMeta {
    pub from: PointId,
    pub to: PointId,
    pub distance_m: u64,
    /// Where the distance label sits.
    pub midpoint: LatLon,
}

#[derive(Debug, Clone)]
pub struct SearchMeta {
    pub query: String,
    pub result_count: usize,
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone)]
pub struct ExportMeta {
    /// "html" or "csv".
    pub format: String,
    pub path: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// PinEvent
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PinEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created; set on emit.
    pub timestamp: f64,

    pub placement: Option<PlacementMeta>,
    pub selection: Option<SelectionMeta>,
    pub link: Option<LinkMeta>,
    pub search: Option<SearchMeta>,
    pub export: Option<ExportMeta>,
}

impl PinEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            placement: None,
            selection: None,
            link: None,
            search: None,
            export: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &PinEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<PinEvent>,
}

/// Collects board events and fans them out to subscribers.
///
/// Clones share the same subscriber list, so one clone can live in the
/// [`PinBoard`](crate::board::PinBoard) while another is handed to the
/// embedding application.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    pub fn subscribe(&self, filter: EventFilter) -> Receiver<PinEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<PinEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Deliver `event` to every subscriber whose filter matches.
    ///
    /// Subscribers whose receiver has been dropped are removed the next time
    /// a matching event is sent to them.
    pub fn emit(&self, mut event: PinEvent) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .subscribers
            .len()
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let combined = EventKind::PIN_SELECTED | EventKind::LINK_CREATED;
        assert!(combined.contains(EventKind::PIN_SELECTED));
        assert!(combined.contains(EventKind::LINK_CREATED));
        assert!(!combined.contains(EventKind::PIN_PLACED));
        assert!(!EventKind::EXPORT.intersects(combined));
    }

    #[test]
    fn event_filter_matches() {
        let filter = EventFilter::only(EventKind::LINK_CREATED);
        assert!(filter.matches(&PinEvent::new(
            EventKind::PIN_SELECTED | EventKind::LINK_CREATED
        )));
        assert!(!filter.matches(&PinEvent::new(EventKind::PIN_PLACED)));
        assert!(EventFilter::all().matches(&PinEvent::new(EventKind::BOARD_RESET)));
    }

    #[test]
    fn event_controller_subscribe_and_emit() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_links = ctrl.subscribe(EventFilter::only(EventKind::LINK_CREATED));

        ctrl.emit(PinEvent::new(EventKind::PIN_PLACED));
        assert!(rx_all.try_recv().is_ok());
        assert!(rx_links.try_recv().is_err());

        ctrl.emit(PinEvent::new(EventKind::PIN_SELECTED | EventKind::LINK_CREATED));
        assert!(rx_all.try_recv().is_ok());
        assert!(rx_links.try_recv().is_ok());
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();
        drop(rx1);

        ctrl.emit(PinEvent::new(EventKind::PIN_PLACED));
        assert!(rx2.try_recv().is_ok());
        assert_eq!(ctrl.subscriber_count(), 1);
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(EventKind::PIN_PLACED.to_string(), "PIN_PLACED");
        assert_eq!(
            (EventKind::LINK_CREATED | EventKind::MATRIX_UPDATED).to_string(),
            "LINK_CREATED|MATRIX_UPDATED"
        );
        assert_eq!(EventKind::ALL.to_string(), "ALL");
        assert_eq!(EventKind(0).to_string(), "EMPTY");
        assert!(EventKind(1 << 63).to_string().starts_with("0x"));
    }

    #[test]
    fn event_kinds_do_not_overlap() {
        let all_kinds = [
            EventKind::PIN_PLACED,
            EventKind::PIN_SELECTED,
            EventKind::SELECTION_PENDING,
            EventKind::SELECTION_CANCELLED,
            EventKind::LINK_CREATED,
            EventKind::MATRIX_UPDATED,
            EventKind::SEARCH_APPLIED,
            EventKind::EXPORT,
            EventKind::BOARD_RESET,
        ];
        for (i, a) in all_kinds.iter().enumerate() {
            for (j, b) in all_kinds.iter().enumerate() {
                if i != j {
                    assert!(!a.intersects(*b), "EventKind bits {i} and {j} overlap");
                }
            }
        }
    }
}
