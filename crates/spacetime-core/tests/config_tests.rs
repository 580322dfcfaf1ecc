use glam::Vec3;
use spacetime_core::config::{RadicandPolicy, SimulationConfig, C, DEFAULT_DAMPENING, G, METERS_PER_UNIT};
use spacetime_core::constraints::boundary::{BoundedAxes, BoundingBox};

#[test]
fn test_config_default_values() {
    let config = SimulationConfig::default();

    assert_eq!(config.gravitational_constant, G);
    assert_eq!(config.gravitational_constant, 6.6743e-11);
    assert_eq!(config.speed_of_light, C);
    assert_eq!(config.speed_of_light, 299_792_458.0);
    assert_eq!(config.dampening, DEFAULT_DAMPENING);
    assert_eq!(config.dampening, 150.0);
    assert_eq!(config.min_distance_factor, 4.0);
    assert_eq!(config.meters_per_unit, METERS_PER_UNIT);
    assert_eq!(config.meters_per_unit, 1000.0);
    assert_eq!(config.collisions_enabled, false);
    assert_eq!(config.height_gain, 2.0);
    assert_eq!(config.height_offset, 300.0);
    assert_eq!(config.radicand_policy, RadicandPolicy::Propagate);
    assert_eq!(config.depth_watch, [-100_000.0, 10_000.0]);
    assert_eq!(config.bounds.extent, Vec3::new(1000.0, 1000.0, 1000.0));
    assert_eq!(config.bounds.axes, BoundedAxes { x: true, y: true, z: false });
    assert_eq!(config.bounds.restitution, -0.1);
}

#[test]
fn test_depth_watch() {
    let config = SimulationConfig::default();
    assert!(config.in_depth_watch(Vec3::new(0.0, 0.0, 0.0)));
    assert!(config.in_depth_watch(Vec3::new(0.0, 0.0, 10_000.0)));
    assert!(!config.in_depth_watch(Vec3::new(0.0, 0.0, 10_001.0)));
    assert!(!config.in_depth_watch(Vec3::new(0.0, 0.0, -100_001.0)));
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: SimulationConfig =
        serde_json::from_str(r#"{ "collisions_enabled": true, "radicand_policy": "clamp", "dampening": 60.0 }"#)
            .unwrap();

    assert!(config.collisions_enabled);
    assert_eq!(config.radicand_policy, RadicandPolicy::Clamp);
    assert_eq!(config.dampening, 60.0);
    assert_eq!(config.gravitational_constant, G);
    assert_eq!(config.bounds, BoundingBox::default());
}

#[test]
fn test_json_bounds_axes() {
    let config: SimulationConfig =
        serde_json::from_str(r#"{ "bounds": { "axes": { "x": true, "y": false, "z": true } } }"#).unwrap();

    assert_eq!(config.bounds.axes, BoundedAxes { x: true, y: false, z: true });
    assert_eq!(config.bounds.restitution, -0.1);
}

#[test]
fn test_json_round_trip() {
    let mut config = SimulationConfig::default();
    config.collisions_enabled = true;
    config.bounds.axes = BoundedAxes::ALL;

    let text = serde_json::to_string(&config).unwrap();
    let back: SimulationConfig = serde_json::from_str(&text).unwrap();

    assert_eq!(back, config);
}

#[test]
fn test_unknown_policy_is_an_error() {
    let result: Result<SimulationConfig, _> = serde_json::from_str(r#"{ "radicand_policy": "skip" }"#);
    assert!(result.is_err());
}
