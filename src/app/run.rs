//! Top-level entry point for running the pin ruler as a native window.

use eframe::egui;

use crate::config::PinRulerConfig;

use super::PinRulerApp;

/// Open the pin ruler window and block until it is closed.
///
/// Any [`EventController`](crate::events::EventController) set on `cfg` is
/// moved into the app and receives board events for the lifetime of the
/// window.
pub fn run_pinruler(mut cfg: PinRulerConfig) -> eframe::Result<()> {
    let app = PinRulerApp::new(&mut cfg);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1400.0, 900.0));
    }

    tracing::info!(%title, "opening window");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
