//! Central map panel: draws pins, rulers and labels, and turns clicks into
//! placements or selections.

use eframe::egui;
use egui::{Align2, Color32, RichText};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotResponse, Points, Text};

use crate::board::DrawRequest;
use crate::data::geo::{Bounds, LatLon};

use super::PinRulerApp;

const PIN_COLOR: Color32 = Color32::from_rgb(220, 50, 47);
const PENDING_COLOR: Color32 = Color32::from_rgb(38, 139, 210);
const SEARCH_COLOR: Color32 = Color32::from_rgb(133, 153, 0);
const PIN_RADIUS: f32 = 6.0;

impl PinRulerApp {
    /// Central map. Longitude runs along x, latitude along y.
    pub(crate) fn show_map(&mut self, ui: &mut egui::Ui) {
        let draws = self.board.draw_requests();
        let pending = self.board.graph().pending();
        let pending_pos = pending.and_then(|id| self.board.registry().get(id).ok().map(|p| p.position));
        let fit_to = self.fit_to.take();
        let ruler_color = self.ruler_color;
        let search_view = self.search_view.as_ref();

        let plot = Plot::new("pin_map")
            .data_aspect(1.0)
            .allow_double_click_reset(false)
            .show_grid(true)
            .x_axis_label("longitude")
            .y_axis_label("latitude");

        let resp: PlotResponse<()> = plot.show(ui, |plot_ui| {
            if let Some(b) = fit_to {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    b.south_west.to_xy(),
                    b.north_east.to_xy(),
                ));
            }

            for draw in &draws {
                match draw {
                    DrawRequest::Ruler { from, to, style } => {
                        plot_ui.line(
                            Line::new("ruler", vec![from.to_xy(), to.to_xy()])
                                .color(ruler_color)
                                .width(style.weight),
                        );
                    }
                    DrawRequest::DistanceLabel { position, text } => {
                        let [x, y] = position.to_xy();
                        plot_ui.text(Text::new(
                            "distance",
                            PlotPoint::new(x, y),
                            RichText::new(text).strong().background_color(Color32::from_black_alpha(160)),
                        ));
                    }
                    DrawRequest::Marker { position, label, .. } => {
                        let [x, y] = position.to_xy();
                        plot_ui.points(
                            Points::new("pins", vec![[x, y]])
                                .radius(PIN_RADIUS)
                                .color(PIN_COLOR),
                        );
                        plot_ui.text(
                            Text::new("pins", PlotPoint::new(x, y), RichText::new(label).strong())
                                .anchor(Align2::CENTER_BOTTOM),
                        );
                    }
                }
            }

            if let Some(p) = pending_pos {
                plot_ui.points(
                    Points::new("pending", vec![p.to_xy()])
                        .radius(PIN_RADIUS * 1.6)
                        .filled(false)
                        .color(PENDING_COLOR),
                );
            }

            if let Some(view) = search_view {
                for m in &view.markers {
                    let [x, y] = m.position.to_xy();
                    plot_ui.points(
                        Points::new("search", vec![[x, y]])
                            .radius(PIN_RADIUS)
                            .shape(egui_plot::MarkerShape::Diamond)
                            .color(SEARCH_COLOR),
                    );
                    plot_ui.text(
                        Text::new("search", PlotPoint::new(x, y), m.title.as_str())
                            .anchor(Align2::CENTER_TOP),
                    );
                }
            }
        });

        let bounds = resp.transform.bounds();
        self.view_bounds = Some(Bounds {
            south_west: LatLon::from_xy(bounds.min()),
            north_east: LatLon::from_xy(bounds.max()),
        });

        self.handle_map_click(&resp);
    }

    /// A click near a pin selects it, anywhere else places a new pin.
    fn handle_map_click(&mut self, resp: &PlotResponse<()>) {
        if !resp.response.clicked() {
            return;
        }
        let Some(screen_pos) = resp.response.interact_pointer_pos() else {
            return;
        };
        let transform = resp.transform;
        let plot_pos = transform.value_from_position(screen_pos);
        let position = LatLon::from_xy([plot_pos.x, plot_pos.y]);
        let radius_deg = self.map.pick_radius_px as f64 * transform.dvalue_dpos()[0].abs();

        match self.board.pick(position, radius_deg) {
            Some(id) => {
                if let Err(e) = self.board.on_selection(id) {
                    tracing::warn!("selection failed: {e}");
                }
            }
            None => {
                self.board.on_placement(position);
            }
        }
    }
}
