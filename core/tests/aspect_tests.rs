use astraea_core::aspects::{AspectDetector, AspectKind, OrbPolicy};
use astraea_core::bodies::CelestialBody;
use astraea_core::error::ChartError;
use astraea_core::positions::BodyPosition;

fn detector() -> AspectDetector {
    AspectDetector::new(OrbPolicy::default())
}

#[test]
fn opposite_bodies_classify_as_opposition() {
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 10.0),
        BodyPosition::new(CelestialBody::Moon, 190.0),
    ];
    let aspects = detector().detect(&positions);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Opposition);
    assert!((aspects[0].separation - 180.0).abs() < 1e-12);
    assert!(aspects[0].orb < 1e-12);
}

#[test]
fn sixty_degree_separation_is_a_sextile() {
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 10.0),
        BodyPosition::new(CelestialBody::Mercury, 70.0),
    ];
    let aspects = detector().detect(&positions);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Sextile);
}

#[test]
fn separation_at_orb_boundary_is_not_an_aspect() {
    // 85 degrees sits exactly at the default 5-degree orb of a square
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 10.0),
        BodyPosition::new(CelestialBody::Venus, 95.0),
    ];
    assert!(detector().detect(&positions).is_empty());
}

#[test]
fn separation_inside_orb_is_a_square() {
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 10.0),
        BodyPosition::new(CelestialBody::Venus, 96.0),
    ];
    let aspects = detector().detect(&positions);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Square);
    assert!((aspects[0].separation - 86.0).abs() < 1e-12);
    assert!((aspects[0].orb - 4.0).abs() < 1e-12);
}

#[test]
fn conjunction_wraps_through_zero() {
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 359.0),
        BodyPosition::new(CelestialBody::Moon, 2.0),
    ];
    let aspects = detector().detect(&positions);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Conjunction);
    assert!((aspects[0].separation - 3.0).abs() < 1e-12);
}

#[test]
fn each_pair_appears_at_most_once_in_chart_order() {
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 10.0),
        BodyPosition::new(CelestialBody::Moon, 190.0),
        BodyPosition::new(CelestialBody::Mars, 70.0),
    ];
    let aspects = detector().detect(&positions);

    for aspect in &aspects {
        assert!(
            aspect.first.index() < aspect.second.index(),
            "{:?} precedes {:?}",
            aspect.first,
            aspect.second
        );
    }
    // no (B, A) duplicate of any (A, B)
    for (i, a) in aspects.iter().enumerate() {
        for b in &aspects[i + 1..] {
            assert!(!(a.first == b.second && a.second == b.first));
        }
    }
}

#[test]
fn unaspected_pairs_produce_nothing() {
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 0.0),
        BodyPosition::new(CelestialBody::Moon, 40.0),
    ];
    assert!(detector().detect(&positions).is_empty());
}

#[test]
fn orb_policy_rejects_overlapping_configurations() {
    assert!(matches!(
        OrbPolicy::new(15.0),
        Err(ChartError::InvalidOrb { .. })
    ));
    assert!(matches!(
        OrbPolicy::new(20.0),
        Err(ChartError::InvalidOrb { .. })
    ));
    assert!(matches!(
        OrbPolicy::new(0.0),
        Err(ChartError::InvalidOrb { .. })
    ));
    assert!(matches!(
        OrbPolicy::new(-1.0),
        Err(ChartError::InvalidOrb { .. })
    ));
    assert!(OrbPolicy::new(14.9).is_ok());
    assert!(OrbPolicy::new(3.0).is_ok());
}

#[test]
fn wider_orb_admits_looser_aspects() {
    let wide = AspectDetector::new(OrbPolicy::new(8.0).unwrap());
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 10.0),
        BodyPosition::new(CelestialBody::Venus, 97.0),
    ];
    let aspects = wide.detect(&positions);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Square);
}
