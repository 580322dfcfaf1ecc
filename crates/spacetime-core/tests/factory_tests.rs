use rand::rngs::StdRng;
use rand::SeedableRng;
use spacetime_core::body::Body;
use spacetime_core::error::SimError;
use spacetime_core::factory::{BodyFactory, MAX_PLACEMENT_ATTEMPTS, PLACEMENT_MARGIN};

fn overlap_count(bodies: &[Body]) -> usize {
    let mut violations = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let d = bodies[i].position.distance(bodies[j].position);
            if d < bodies[i].radius + bodies[j].radius + PLACEMENT_MARGIN {
                violations += 1;
            }
        }
    }
    violations
}

#[test]
fn test_default_factory() {
    let factory = BodyFactory::default();
    assert_eq!(factory.max_attempts, MAX_PLACEMENT_ATTEMPTS);
    assert_eq!(factory.max_attempts, 50);
    assert_eq!(factory.mass, 6.0e22);
    assert_eq!(factory.radius, 4.0..=10.0);
    for axis in 0..3 {
        assert_eq!(factory.position[axis], 0.0..=500.0);
        assert_eq!(factory.velocity[axis], 0.0..=0.0);
    }
}

#[test]
fn test_generate_count_and_ranges() {
    let factory = BodyFactory {
        velocity: [-5.0..=5.0, 0.0..=0.0, 10.0..=20.0],
        ..BodyFactory::default()
    };
    let mut rng = StdRng::seed_from_u64(7);

    let bodies = factory.generate(40, &mut rng).unwrap();

    assert_eq!(bodies.len(), 40);
    for b in &bodies {
        assert!(b.radius >= 4.0 && b.radius <= 10.0, "radius {}", b.radius);
        for axis in 0..3 {
            assert!(b.position[axis] >= 0.0 && b.position[axis] <= 500.0, "position {}", b.position);
        }
        assert!(b.velocity.x >= -5.0 && b.velocity.x <= 5.0);
        assert_eq!(b.velocity.y, 0.0);
        assert!(b.velocity.z >= 10.0 && b.velocity.z <= 20.0);
        assert_eq!(b.mass, 6.0e22);
        assert!(!b.is_emitter);
    }
}

#[test]
fn test_generous_spacing_never_overlaps() {
    let factory = BodyFactory {
        position: [0.0..=10_000.0, 0.0..=10_000.0, 0.0..=10_000.0],
        ..BodyFactory::default()
    };

    let mut violations = 0;
    for trial in 0..1000 {
        let mut rng = StdRng::seed_from_u64(trial);
        let bodies = factory.generate(10, &mut rng).unwrap();
        assert_eq!(bodies.len(), 10);
        violations += overlap_count(&bodies);
    }

    assert_eq!(violations, 0, "generous spacing should always place cleanly");
}

#[test]
fn test_tight_spacing_still_produces_every_body() {
    let factory = BodyFactory {
        position: [0.0..=20.0, 0.0..=20.0, 0.0..=20.0],
        ..BodyFactory::default()
    };
    let mut rng = StdRng::seed_from_u64(3);

    let bodies = factory.generate(20, &mut rng).unwrap();

    assert_eq!(bodies.len(), 20);
    let violations = overlap_count(&bodies);
    assert!(violations > 0, "20 bodies cannot fit a 20-unit cube without overlap");
    assert!(violations <= 20 * 19 / 2);
}

#[test]
fn test_single_attempt_is_still_best_effort() {
    let factory = BodyFactory {
        position: [0.0..=1.0, 0.0..=1.0, 0.0..=1.0],
        max_attempts: 0,
        ..BodyFactory::default()
    };
    let mut rng = StdRng::seed_from_u64(11);

    let bodies = factory.generate(5, &mut rng).unwrap();

    assert_eq!(bodies.len(), 5);
}

#[test]
fn test_same_seed_same_bodies() {
    let factory = BodyFactory::default();

    let a = factory.generate(25, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = factory.generate(25, &mut StdRng::seed_from_u64(42)).unwrap();
    let c = factory.generate(25, &mut StdRng::seed_from_u64(43)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_zero_count() {
    let bodies = BodyFactory::default()
        .generate(0, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert!(bodies.is_empty());
}

#[test]
fn test_inverted_range_is_rejected() {
    let factory = BodyFactory {
        position: [0.0..=500.0, 10.0..=5.0, 0.0..=500.0],
        ..BodyFactory::default()
    };

    let err = factory.generate(1, &mut StdRng::seed_from_u64(0)).unwrap_err();

    assert_eq!(
        err,
        SimError::InvalidRange {
            name: "position.y",
            min: 10.0,
            max: 5.0
        }
    );
}

#[test]
fn test_non_finite_range_is_rejected() {
    let factory = BodyFactory {
        velocity: [0.0..=f32::INFINITY, 0.0..=0.0, 0.0..=0.0],
        ..BodyFactory::default()
    };
    assert!(matches!(
        factory.validate(),
        Err(SimError::InvalidRange { name: "velocity.x", .. })
    ));
}

#[test]
fn test_negative_radius_and_mass_are_rejected() {
    let negative_radius = BodyFactory {
        radius: -1.0..=3.0,
        ..BodyFactory::default()
    };
    assert_eq!(negative_radius.validate(), Err(SimError::InvalidRadius(-1.0)));

    let negative_mass = BodyFactory {
        mass: -6.0e22,
        ..BodyFactory::default()
    };
    assert_eq!(negative_mass.validate(), Err(SimError::InvalidMass(-6.0e22)));
}

#[test]
fn test_span_overflowing_f32_is_rejected() {
    let factory = BodyFactory {
        position: [-f32::MAX..=f32::MAX, 0.0..=500.0, 0.0..=500.0],
        ..BodyFactory::default()
    };

    assert!(factory.validate().is_err());
    let err = factory.generate(1, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, SimError::InvalidRange { name: "position.x", .. }), "{:?}", err);

    let near_max = BodyFactory {
        velocity: [0.0..=0.0, 0.0..=f32::MAX, 0.0..=0.0],
        ..BodyFactory::default()
    };
    assert!(matches!(
        near_max.validate(),
        Err(SimError::InvalidRange { name: "velocity.y", .. })
    ));
}
