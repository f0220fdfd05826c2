use data_runtime::scenario;

#[test]
fn shipped_scenarios_parse_and_validate() {
    let dir = data_runtime::loader::data_root().join("scenarios");
    let mut n = 0;
    for entry in std::fs::read_dir(&dir).expect("scenarios dir") {
        let path = entry.expect("entry").path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let scen = scenario::load(&path).expect("load scenario");
        assert!(scen.frame_count() > 0, "{}", path.display());
        scen.camera_config().expect("scenario config");
        scen.check_config().expect("scenario config in range");
        n += 1;
    }
    assert!(n > 0, "no scenarios under {}", dir.display());
}

#[test]
fn relative_paths_resolve_under_data() {
    let scen = scenario::load("scenarios/drag_and_zoom.json").expect("load");
    assert_eq!(scen.name, "drag_and_zoom");
}

#[test]
fn out_of_range_config_fails_check_but_loads_clamped() {
    let scen = scenario::parse_str(
        r#"{ "name": "bad_cfg", "config": "fixtures/out_of_range_camera.toml", "frames": [ { "dt": 0.1 } ] }"#,
    )
    .expect("parse");
    let err = scen.check_config().expect_err("out-of-range config must fail");
    assert!(format!("{err:#}").contains("focus_centering"));

    let cfg = scen.camera_config().expect("clamped load");
    assert_eq!(cfg.focus_centering, 1.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn raw_load_keeps_values_as_written() {
    let path = data_runtime::loader::data_root().join("fixtures/out_of_range_camera.toml");
    let cfg = data_runtime::configs::orbit_camera::load_raw(&path).expect("load raw");
    assert_eq!(cfg.focus_centering, 3.0);
    assert_eq!((cfg.zoom_min, cfg.zoom_max), (30.0, 20.0));
    assert!(cfg.validate().is_err());
}
