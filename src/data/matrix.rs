//! Pairwise distance matrix over all placed pins.
//!
//! The matrix is rebuilt from scratch from the registry and the link graph
//! every time it is requested; nothing is cached between calls.

use std::io::Write;

use crate::data::links::LinkGraph;
use crate::data::points::{PointId, PointRegistry};

/// Text shown for pairs that are not linked (including the diagonal).
pub const UNDEFINED: &str = "undefined";

/// Unit suffix appended to distances unless configured otherwise.
pub const DEFAULT_UNIT: &str = " meter";

/// Corner label of the header row.
pub const CORNER_LABEL: &str = "from / to";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixCell {
    /// Chord distance in meters between two linked pins.
    Distance(u64),
    Undefined,
}

impl MatrixCell {
    pub fn text(&self, unit: &str) -> String {
        match self {
            MatrixCell::Distance(m) => format!("{m}{unit}"),
            MatrixCell::Undefined => UNDEFINED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    ids: Vec<PointId>,
    /// Row-major, `ids.len()` squared entries.
    cells: Vec<MatrixCell>,
}

impl DistanceMatrix {
    pub fn render(registry: &PointRegistry, graph: &LinkGraph) -> Self {
        let points: Vec<_> = registry.iter().collect();
        let n = points.len();
        let mut cells = Vec::with_capacity(n * n);
        for a in &points {
            for b in &points {
                let cell = if graph.are_linked(a.id, b.id) {
                    MatrixCell::Distance(a.position.chord_distance_m(&b.position))
                } else {
                    MatrixCell::Undefined
                };
                cells.push(cell);
            }
        }
        Self {
            ids: points.iter().map(|p| p.id).collect(),
            cells,
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    /// Cell at row `i`, column `j`; `None` outside the matrix.
    pub fn cell(&self, i: usize, j: usize) -> Option<MatrixCell> {
        let n = self.size();
        (i < n && j < n).then(|| self.cells[i * n + j])
    }

    pub fn cell_text(&self, i: usize, j: usize, unit: &str) -> String {
        self.cell(i, j)
            .unwrap_or(MatrixCell::Undefined)
            .text(unit)
    }

    pub fn rows(&self) -> impl Iterator<Item = (PointId, &[MatrixCell])> {
        let n = self.size().max(1);
        self.ids.iter().copied().zip(self.cells.chunks(n))
    }

    /// Bootstrap-styled HTML table, header row then one row per pin.
    pub fn to_html(&self, unit: &str) -> String {
        let mut s = String::from(r#"<table class="table table-bordered">"#);
        s.push_str("<tbody>");
        s.push_str("<tr>");
        s.push_str(&format!("<td>{CORNER_LABEL}</td>"));
        for id in &self.ids {
            s.push_str(&format!("<td>{id}</td>"));
        }
        s.push_str("</tr>");
        for (id, row) in self.rows() {
            s.push_str("<tr>");
            s.push_str(&format!("<td>{id}</td>"));
            for cell in row {
                s.push_str("<td>");
                s.push_str(&cell.text(unit));
                s.push_str("</td>");
            }
            s.push_str("</tr>");
        }
        s.push_str("</tbody>");
        s.push_str("</table>");
        s
    }

    pub fn write_csv<W: Write>(&self, mut w: W, unit: &str) -> std::io::Result<()> {
        w.write_all(self.to_csv(unit).as_bytes())
    }

    /// Header `from / to,0,1,...` then one line per row id.
    pub fn to_csv(&self, unit: &str) -> String {
        let mut s = String::from(CORNER_LABEL);
        for id in &self.ids {
            s.push_str(&format!(",{id}"));
        }
        s.push('\n');
        for (id, row) in self.rows() {
            s.push_str(&id.to_string());
            for cell in row {
                s.push(',');
                s.push_str(&cell.text(unit));
            }
            s.push('\n');
        }
        s
    }
}
