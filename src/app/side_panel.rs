//! Side panel with the pin list, search box, export buttons and the
//! distance matrix table.

use eframe::egui;
use egui_phosphor::regular::{BROOM, EXPORT, MAGNIFYING_GLASS, MAP_PIN};
use egui_table::{Column, HeaderRow, Table, TableDelegate};

use crate::data::export::{save_matrix, ExportFormat};
use crate::data::links::Selection;
use crate::data::matrix::{DistanceMatrix, CORNER_LABEL};
use crate::events::{EventKind, ExportMeta, PinEvent};

use super::PinRulerApp;

const HEADER_COLUMN_WIDTH: f32 = 72.0;
const CELL_COLUMN_WIDTH: f32 = 110.0;

/// Renders the distance matrix with `egui_table`. Column 0 holds the row ids.
struct MatrixDelegate<'a> {
    matrix: &'a DistanceMatrix,
    unit: &'a str,
}

impl TableDelegate for MatrixDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let col = cell.col_range.start;
        ui.add_space(4.0);
        if col == 0 {
            ui.strong(CORNER_LABEL);
        } else if let Some(id) = self.matrix.ids().get(col - 1) {
            ui.strong(id.to_string());
        }
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        let row = cell.row_nr as usize;
        let col = cell.col_nr;
        ui.add_space(4.0);
        if col == 0 {
            if let Some(id) = self.matrix.ids().get(row) {
                ui.strong(id.to_string());
            }
        } else {
            ui.label(self.matrix.cell_text(row, col - 1, self.unit));
        }
    }
}

impl PinRulerApp {
    pub(crate) fn show_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("{MAP_PIN} Pins"));
        let ids = self.board.ids_text();
        ui.label(if ids.is_empty() { "none yet".to_string() } else { ids });
        match self.board.selection() {
            Selection::Idle => ui.weak("Click a pin, then another, to link them."),
            Selection::Pending(id) => ui.label(format!("Pin {id} selected; click a second pin (Esc cancels).")),
        };

        ui.separator();
        self.show_search(ui);

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(format!("{EXPORT} HTML")).on_hover_text("Save the matrix as an HTML table").clicked() {
                self.export_matrix(ExportFormat::Html);
            }
            if ui.button(format!("{EXPORT} CSV")).on_hover_text("Save the matrix as CSV").clicked() {
                self.export_matrix(ExportFormat::Csv);
            }
            if ui.button(format!("{BROOM} Clear")).on_hover_text("Remove all pins and links").clicked() {
                self.reset();
            }
        });
        if let Some(status) = &self.status {
            ui.weak(status);
        }

        ui.separator();
        ui.strong("Distance matrix");
        let matrix = self.board.matrix();
        let n = matrix.size();
        let mut columns = vec![Column::new(HEADER_COLUMN_WIDTH)];
        columns.extend((0..n).map(|_| Column::new(CELL_COLUMN_WIDTH)));
        let mut delegate = MatrixDelegate {
            matrix: &matrix,
            unit: &self.board.config().distance_unit,
        };
        Table::new()
            .id_salt("distance_matrix")
            .num_rows(n as u64)
            .columns(columns)
            .headers(vec![HeaderRow::new(24.0)])
            .show(ui, &mut delegate);
    }

    fn show_search(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Place name or lat, lon"),
            );
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(MAGNIFYING_GLASS).clicked() || submitted {
                self.run_search();
            }
        });
        if let Some(view) = &self.search_view {
            for m in &view.markers {
                ui.label(format!("{}  {}", m.title, m.position));
            }
        }
    }

    fn export_matrix(&mut self, format: ExportFormat) {
        let (label, ext) = match format {
            ExportFormat::Html => ("HTML", format.extension()),
            ExportFormat::Csv => ("CSV", format.extension()),
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format.default_file_name())
            .add_filter(label, &[ext])
            .save_file()
        else {
            return;
        };
        let matrix = self.board.matrix();
        match save_matrix(&path, &matrix, &self.board.config().distance_unit, format) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "exported distance matrix");
                self.status = Some(format!("Saved {}", path.display()));
                let mut evt = PinEvent::new(EventKind::EXPORT);
                evt.export = Some(ExportMeta {
                    format: ext.to_string(),
                    path: Some(path.display().to_string()),
                });
                self.emit(evt);
            }
            Err(e) => {
                tracing::warn!("Failed to export distance matrix: {e}");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }
}
