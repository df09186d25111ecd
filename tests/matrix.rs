use pinruler::data::links::LinkGraph;
use pinruler::data::matrix::{DistanceMatrix, MatrixCell, DEFAULT_UNIT, UNDEFINED};
use pinruler::data::points::PointRegistry;

fn three_points_first_pair_linked() -> (PointRegistry, LinkGraph) {
    let mut reg = PointRegistry::new();
    let mut graph = LinkGraph::new();
    for (lat, lon) in [(-6.891161, 107.610633), (-6.892000, 107.611000), (-6.9, 107.62)] {
        let id = reg.add_lat_lon(lat, lon).id;
        graph.register_point(id);
    }
    graph.begin_selection(0);
    graph.begin_selection(1);
    (reg, graph)
}

#[test]
fn only_linked_cells_carry_a_distance() {
    let (reg, graph) = three_points_first_pair_linked();
    let m = DistanceMatrix::render(&reg, &graph);
    assert_eq!(m.size(), 3);
    assert_eq!(m.ids(), &[0, 1, 2]);
    assert_eq!(m.cell(0, 1), Some(MatrixCell::Distance(102)));
    assert_eq!(m.cell_text(0, 1, DEFAULT_UNIT), "102 meter");
    assert_eq!(m.cell_text(1, 0, DEFAULT_UNIT), "102 meter");
    for (i, j) in [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 2), (2, 1)] {
        assert_eq!(m.cell_text(i, j, DEFAULT_UNIT), UNDEFINED, "cell ({i}, {j})");
    }
    assert_eq!(m.cell(3, 0), None);
}

#[test]
fn empty_board_renders_header_only() {
    let m = DistanceMatrix::render(&PointRegistry::new(), &LinkGraph::new());
    assert_eq!(m.size(), 0);
    assert_eq!(
        m.to_html(DEFAULT_UNIT),
        r#"<table class="table table-bordered"><tbody><tr><td>from / to</td></tr></tbody></table>"#
    );
}

#[test]
fn html_table_layout() {
    let mut reg = PointRegistry::new();
    let mut graph = LinkGraph::new();
    reg.add_lat_lon(0.0, 0.0);
    reg.add_lat_lon(0.001, 0.0);
    graph.begin_selection(1);
    graph.begin_selection(0);
    let html = DistanceMatrix::render(&reg, &graph).to_html(DEFAULT_UNIT);
    assert_eq!(
        html,
        concat!(
            r#"<table class="table table-bordered"><tbody>"#,
            "<tr><td>from / to</td><td>0</td><td>1</td></tr>",
            "<tr><td>0</td><td>undefined</td><td>111 meter</td></tr>",
            "<tr><td>1</td><td>111 meter</td><td>undefined</td></tr>",
            "</tbody></table>"
        )
    );
}

#[test]
fn csv_has_header_and_one_row_per_pin() {
    let (reg, graph) = three_points_first_pair_linked();
    let csv = DistanceMatrix::render(&reg, &graph).to_csv(" m");
    let lines: Vec<&str> = csv.trim().split('\n').collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "from / to,0,1,2");
    assert_eq!(lines[1], "0,undefined,102 m,undefined");
    assert_eq!(lines[3], "2,undefined,undefined,undefined");
}

#[test]
fn rendering_reflects_current_state() {
    let (reg, mut graph) = three_points_first_pair_linked();
    let before = DistanceMatrix::render(&reg, &graph);
    assert_eq!(before, DistanceMatrix::render(&reg, &graph));
    graph.begin_selection(2);
    graph.begin_selection(0);
    let after = DistanceMatrix::render(&reg, &graph);
    assert_eq!(after.cell(2, 0), Some(MatrixCell::Distance(1427)));
    assert_ne!(before, after);
}

#[test]
fn csv_writer_and_string_agree() {
    let (reg, graph) = three_points_first_pair_linked();
    let m = DistanceMatrix::render(&reg, &graph);
    let mut buf = Vec::new();
    m.write_csv(&mut buf, DEFAULT_UNIT).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), m.to_csv(DEFAULT_UNIT));

    let empty = DistanceMatrix::render(&PointRegistry::new(), &LinkGraph::new());
    assert_eq!(empty.to_csv(DEFAULT_UNIT), "from / to\n");
}
