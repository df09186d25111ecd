//! The pin board: all state behind the map, and its two entry points.
//!
//! The hosting UI calls [`PinBoard::on_placement`] when the user clicks on
//! empty map and [`PinBoard::on_selection`] when a pin is clicked. Both
//! return [`DrawRequest`]s describing what to add to the map; the board never
//! draws anything itself.

use crate::config::{BoardConfig, RulerStyle};
use crate::data::geo::{interpolate, LatLon};
use crate::data::links::{LinkGraph, Selection, SelectionOutcome};
use crate::data::matrix::DistanceMatrix;
use crate::data::points::{Point, PointId, PointRegistry};
use crate::error::Result;
use crate::events::{EventController, EventKind, LinkMeta, PinEvent, PlacementMeta, SelectionMeta};

/// Where along a link its distance label is placed.
pub const LABEL_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawRequest {
    Marker {
        id: PointId,
        position: LatLon,
        label: String,
    },
    Ruler {
        from: LatLon,
        to: LatLon,
        style: RulerStyle,
    },
    DistanceLabel {
        position: LatLon,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub point: Point,
    pub draws: Vec<DrawRequest>,
}

#[derive(Default)]
pub struct PinBoard {
    registry: PointRegistry,
    graph: LinkGraph,
    config: BoardConfig,
    events: Option<EventController>,
}

impl PinBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_events(mut self, events: EventController) -> Self {
        self.events = Some(events);
        self
    }

    pub fn registry(&self) -> &PointRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &LinkGraph {
        &self.graph
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn selection(&self) -> Selection {
        self.graph.selection()
    }

    fn emit(&self, event: PinEvent) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(event);
        }
    }

    /// Place a pin at `position`.
    pub fn on_placement(&mut self, position: LatLon) -> Placement {
        let point = self.registry.add(position).clone();
        self.graph.register_point(point.id);
        tracing::debug!(id = point.id, %position, "pin placed");

        let mut evt = PinEvent::new(EventKind::PIN_PLACED | EventKind::MATRIX_UPDATED);
        evt.placement = Some(PlacementMeta {
            id: point.id,
            position,
        });
        self.emit(evt);

        let draws = vec![DrawRequest::Marker {
            id: point.id,
            position: point.position,
            label: point.label.clone(),
        }];
        Placement { point, draws }
    }

    /// Feed a click on pin `id` into the linking gesture.
    pub fn on_selection(&mut self, id: PointId) -> Result<Vec<DrawRequest>> {
        self.registry.get(id)?;
        let outcome = self.graph.begin_selection(id);

        let mut evt = PinEvent::new(EventKind::PIN_SELECTED);
        evt.selection = Some(SelectionMeta {
            id,
            pending: self.graph.pending(),
        });

        let draws = match outcome {
            SelectionOutcome::Started(_) => {
                tracing::debug!(id, "selection pending");
                evt.kinds |= EventKind::SELECTION_PENDING;
                Vec::new()
            }
            SelectionOutcome::Unchanged(_) => Vec::new(),
            SelectionOutcome::Linked(a, b) => {
                let (draws, meta) = self.link_draws(a, b)?;
                tracing::info!(from = a, to = b, distance_m = meta.distance_m, "pins linked");
                evt.kinds |= EventKind::LINK_CREATED | EventKind::MATRIX_UPDATED;
                evt.link = Some(meta);
                draws
            }
        };
        self.emit(evt);
        Ok(draws)
    }

    /// Ruler and label for the link `a`-`b`. The label sits halfway along
    /// the great circle from `b` back to `a`.
    fn link_draws(&self, a: PointId, b: PointId) -> Result<(Vec<DrawRequest>, LinkMeta)> {
        let pa = self.registry.get(a)?.position;
        let pb = self.registry.get(b)?.position;
        let distance_m = pb.chord_distance_m(&pa);
        let midpoint = interpolate(pb, pa, LABEL_FRACTION);
        let draws = vec![
            DrawRequest::Ruler {
                from: pa,
                to: pb,
                style: self.config.ruler.clone(),
            },
            DrawRequest::DistanceLabel {
                position: midpoint,
                text: format!("{distance_m}{}", self.config.distance_unit),
            },
        ];
        let meta = LinkMeta {
            from: a,
            to: b,
            distance_m,
            midpoint,
        };
        Ok((draws, meta))
    }

    /// Drop a pending selection, e.g. on Escape.
    pub fn cancel_selection(&mut self) -> Option<PointId> {
        let pending = self.graph.cancel_selection();
        if let Some(id) = pending {
            tracing::debug!(id, "selection cancelled");
            let mut evt = PinEvent::new(EventKind::SELECTION_CANCELLED);
            evt.selection = Some(SelectionMeta { id, pending: None });
            self.emit(evt);
        }
        pending
    }

    /// Everything needed to draw the board from scratch: markers, then a
    /// ruler and label per recorded link.
    pub fn draw_requests(&self) -> Vec<DrawRequest> {
        let mut draws: Vec<DrawRequest> = self
            .registry
            .iter()
            .map(|p| DrawRequest::Marker {
                id: p.id,
                position: p.position,
                label: p.label.clone(),
            })
            .collect();
        for &(a, b) in self.graph.links() {
            if let Ok((link, _)) = self.link_draws(a, b) {
                draws.extend(link);
            }
        }
        draws
    }

    /// Nearest pin within `radius_deg` of `position` (planar degrees).
    pub fn pick(&self, position: LatLon, radius_deg: f64) -> Option<PointId> {
        self.registry
            .iter()
            .map(|p| {
                let dx = p.position.lon - position.lon;
                let dy = p.position.lat - position.lat;
                (p.id, dx * dx + dy * dy)
            })
            .filter(|&(_, d2)| d2 <= radius_deg * radius_deg)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    pub fn matrix(&self) -> DistanceMatrix {
        DistanceMatrix::render(&self.registry, &self.graph)
    }

    pub fn matrix_html(&self) -> String {
        self.matrix().to_html(&self.config.distance_unit)
    }

    pub fn ids_text(&self) -> String {
        self.registry.ids_text()
    }

    /// Remove every pin and link; numbering restarts at 0.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.graph.clear();
        tracing::info!("board reset");
        self.emit(PinEvent::new(EventKind::BOARD_RESET | EventKind::MATRIX_UPDATED));
    }
}
