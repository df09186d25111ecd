use pinruler::config::{parse_hex_color, PinRulerConfig, RulerStyle, DEFAULT_CENTER};
use pinruler::LatLon;

#[test]
fn defaults_match_the_original_map() {
    let cfg = PinRulerConfig::default();
    assert_eq!(cfg.map.center, LatLon::new(-6.891161, 107.610633));
    assert_eq!(cfg.map.zoom, 17);
    assert_eq!(cfg.board.distance_unit, " meter");
    assert_eq!(cfg.board.ruler, RulerStyle::default());
    assert_eq!(cfg.board.ruler.rgba().unwrap(), [255, 255, 0, 178]);
}

#[test]
fn partial_yaml_keeps_defaults() {
    let cfg = PinRulerConfig::from_yaml_str(
        "title: Survey\nmap:\n  zoom: 15\nboard:\n  ruler:\n    color: \"#00FF00\"\nplaces:\n  - name: Gate\n    location: { lat: 1.0, lon: 2.0 }\n",
    )
    .unwrap();
    assert_eq!(cfg.title, "Survey");
    assert_eq!(cfg.map.zoom, 15);
    assert_eq!(cfg.map.center, DEFAULT_CENTER);
    assert_eq!(cfg.board.ruler.rgba().unwrap(), [0, 255, 0, 178]);
    assert_eq!(cfg.board.ruler.weight, 7.0);
    assert_eq!(cfg.board.distance_unit, " meter");
    assert_eq!(cfg.places.len(), 1);
    assert_eq!(cfg.places[0].location, Some(LatLon::new(1.0, 2.0)));
    assert!(cfg.places[0].viewport.is_none());
}

#[test]
fn bad_yaml_is_rejected() {
    assert!(PinRulerConfig::from_yaml_str("map: [1, 2").is_err());
}

#[test]
fn hex_colors() {
    assert_eq!(parse_hex_color("#FFFF00").unwrap(), [255, 255, 0]);
    assert_eq!(parse_hex_color("#0a0B0c").unwrap(), [10, 11, 12]);
    assert!(parse_hex_color("FFFF00").is_err());
    assert!(parse_hex_color("#FFF").is_err());
    assert!(parse_hex_color("#GG0000").is_err());
}

#[test]
fn zoom_halves_the_span() {
    let mut cfg = PinRulerConfig::default();
    let at_17 = cfg.map.initial_lon_span();
    cfg.map.zoom = 16;
    assert!((cfg.map.initial_lon_span() - 2.0 * at_17).abs() < 1e-12);
    let b = cfg.map.initial_bounds(2.0);
    let (lat, lon) = b.span();
    assert!((lon - 2.0 * lat).abs() < 1e-12);
    assert!(b.contains(&cfg.map.center));
}

#[test]
fn yaml_and_json_files_load() {
    let dir = std::env::temp_dir().join(format!("pinruler_cfg_{}", std::process::id()));
    let yaml = dir.join("nested").join("cfg.yaml");
    let mut cfg = PinRulerConfig::default();
    cfg.title = "Saved".into();
    cfg.map.zoom = 12;
    cfg.save_yaml(&yaml).unwrap();
    let loaded = PinRulerConfig::load(&yaml).unwrap();
    assert_eq!(loaded.title, "Saved");
    assert_eq!(loaded.map.zoom, 12);

    let json = dir.join("cfg.json");
    std::fs::write(&json, r#"{"board": {"distance_unit": " m"}}"#).unwrap();
    let loaded = PinRulerConfig::load(&json).unwrap();
    assert_eq!(loaded.board.distance_unit, " m");
    assert_eq!(loaded.map.zoom, 17);

    assert!(PinRulerConfig::load(dir.join("missing.yaml")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
