//! Desktop front-end for the pin board.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`map_view`]     | Central map: pins, rulers, labels, click handling |
//! | [`side_panel`]   | Pin list, distance matrix table, search box, export |
//! | [`run`]          | [`run_pinruler()`] entry point |

mod map_view;
mod side_panel;
mod run;

pub use run::run_pinruler;

use eframe::egui;
use egui::Color32;

use crate::board::PinBoard;
use crate::config::{MapConfig, PinRulerConfig};
use crate::data::geo::Bounds;
use crate::events::{EventController, EventKind, PinEvent, SearchMeta};
use crate::search::{apply_places, LocalSearch, PlaceSearch, SearchView};

const FALLBACK_RULER_COLOR: Color32 = Color32::from_rgba_premultiplied(178, 178, 0, 178);

pub struct PinRulerApp {
    pub board: PinBoard,
    map: MapConfig,
    ruler_color: Color32,
    search: LocalSearch,
    search_query: String,
    search_view: Option<SearchView>,
    /// Bounds the map should jump to on the next frame.
    fit_to: Option<Bounds>,
    /// Bounds shown in the last frame; biases search results.
    view_bounds: Option<Bounds>,
    events: Option<EventController>,
    status: Option<String>,
}

impl PinRulerApp {
    pub fn new(cfg: &mut PinRulerConfig) -> Self {
        let events = cfg.event_controller.take();
        let mut board = PinBoard::new(cfg.board.clone());
        if let Some(ctrl) = &events {
            board = board.with_events(ctrl.clone());
        }
        let ruler_color = match cfg.board.ruler.rgba() {
            Ok([r, g, b, a]) => Color32::from_rgba_unmultiplied(r, g, b, a),
            Err(e) => {
                tracing::warn!("{e}; using default ruler color");
                FALLBACK_RULER_COLOR
            }
        };
        Self {
            board,
            map: cfg.map.clone(),
            ruler_color,
            search: LocalSearch::from_config(&cfg.places),
            search_query: String::new(),
            search_view: None,
            fit_to: Some(cfg.map.initial_bounds(1.0)),
            view_bounds: None,
            events,
            status: None,
        }
    }

    fn emit(&self, event: PinEvent) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(event);
        }
    }

    /// Run the search box query and move the map onto the hits.
    pub(crate) fn run_search(&mut self) {
        let query = self.search_query.trim().to_string();
        let places = self.search.search(&query, self.view_bounds.as_ref());
        let Some(view) = apply_places(&places) else {
            self.status = Some(format!("No results for \"{query}\""));
            return;
        };
        if let Some(b) = view.bounds {
            self.fit_to = Some(self.padded(b));
        }

        let mut evt = PinEvent::new(EventKind::SEARCH_APPLIED);
        evt.search = Some(SearchMeta {
            query,
            result_count: view.markers.len(),
            bounds: view.bounds,
        });
        self.emit(evt);
        self.status = None;
        self.search_view = Some(view);
    }

    /// Grow tiny boxes (single points) to at least the initial view size.
    fn padded(&self, b: Bounds) -> Bounds {
        let min = self.map.initial_bounds(1.0);
        let (min_lat, min_lon) = min.span();
        let (lat, lon) = b.span();
        if lat >= min_lat && lon >= min_lon {
            b
        } else {
            Bounds::around(b.center(), lat.max(min_lat), lon.max(min_lon))
        }
    }

    pub(crate) fn reset(&mut self) {
        self.board.reset();
        self.search_view = None;
        self.status = None;
    }
}

impl eframe::App for PinRulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.board.cancel_selection();
        }

        egui::SidePanel::right("pin_side_panel")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| self.show_side_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.show_map(ui));
    }
}
