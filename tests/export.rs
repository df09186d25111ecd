use pinruler::data::export::{save_matrix, ExportFormat};
use pinruler::{LatLon, PinBoard};

#[test]
fn default_file_names_carry_the_extension() {
    let html = ExportFormat::Html.default_file_name();
    assert!(html.starts_with("distance_matrix_") && html.ends_with(".html"));
    assert!(ExportFormat::Csv.default_file_name().ends_with(".csv"));
}

#[test]
fn saves_html_and_csv() {
    let mut board = PinBoard::default();
    board.on_placement(LatLon::new(0.0, 0.0));
    board.on_placement(LatLon::new(0.001, 0.0));
    board.on_selection(0).unwrap();
    board.on_selection(1).unwrap();
    let matrix = board.matrix();

    let dir = std::env::temp_dir();
    let html_path = dir.join(format!("pinruler_export_{}.html", std::process::id()));
    let csv_path = dir.join(format!("pinruler_export_{}.csv", std::process::id()));

    save_matrix(&html_path, &matrix, " meter", ExportFormat::Html).unwrap();
    let html = std::fs::read_to_string(&html_path).unwrap();
    assert_eq!(html.trim_end(), board.matrix_html());

    save_matrix(&csv_path, &matrix, " meter", ExportFormat::Csv).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "from / to,0,1\n0,undefined,111 meter\n1,111 meter,undefined\n");

    let _ = std::fs::remove_file(html_path);
    let _ = std::fs::remove_file(csv_path);
}
