use astraea_core::bodies::CelestialBody;
use astraea_core::ephemeris::{HouseSystem, RawHouses};
use astraea_core::error::ChartError;
use astraea_core::houses::{assign_houses, HouseWheel};
use astraea_core::positions::BodyPosition;
use astraea_core::zodiac::ZodiacSign;

fn equal_wheel(start: f64) -> RawHouses {
    RawHouses {
        cusps: (0..12).map(|i| (start + f64::from(i) * 30.0) % 360.0).collect(),
        ascendant: start,
    }
}

// Placidus-like: uneven spans, wrap between houses 9 and 10
fn quadrant_wheel() -> RawHouses {
    RawHouses {
        cusps: vec![
            100.0, 125.0, 155.0, 190.0, 222.0, 250.0, 280.0, 305.0, 335.0, 10.0, 42.0, 70.0,
        ],
        ascendant: 100.0,
    }
}

#[test]
fn wheel_wrapping_through_zero_assigns_correctly() {
    let wheel = HouseWheel::from_raw(equal_wheel(330.0), HouseSystem::Equal).unwrap();

    // house 1 spans [330, 0), house 2 spans [0, 30)
    assert_eq!(wheel.house_of(345.0), 1);
    assert_eq!(wheel.house_of(15.0), 2);
    assert_eq!(wheel.house_of(329.9), 12);
}

#[test]
fn body_exactly_on_cusp_opens_that_house() {
    let wheel = HouseWheel::from_raw(equal_wheel(0.0), HouseSystem::Equal).unwrap();
    assert_eq!(wheel.house_of(0.0), 1);
    assert_eq!(wheel.house_of(30.0), 2);
    assert_eq!(wheel.house_of(330.0), 12);
}

#[test]
fn every_longitude_falls_in_exactly_one_house() {
    let wheel = HouseWheel::from_raw(quadrant_wheel(), HouseSystem::Placidus).unwrap();

    let mut lon = 0.0;
    while lon < 360.0 {
        let house = wheel.house_of(lon);
        assert!((1..=12).contains(&house), "longitude {lon} got house {house}");

        // the returned house's interval must actually contain the longitude
        let start = wheel.cusps[(house - 1) as usize].longitude;
        let end = wheel.cusps[(house % 12) as usize].longitude;
        let forward = |from: f64, to: f64| (to - from).rem_euclid(360.0);
        assert!(
            forward(start, lon) < forward(start, end),
            "house {house} does not contain {lon}"
        );
        lon += 0.5;
    }
}

#[test]
fn cusps_keep_house_order_and_signs() {
    let wheel = HouseWheel::from_raw(quadrant_wheel(), HouseSystem::Placidus).unwrap();

    for (i, cusp) in wheel.cusps.iter().enumerate() {
        assert_eq!(cusp.house, (i + 1) as u8);
        assert_eq!(cusp.sign.index(), (cusp.longitude / 30.0).floor() as usize);
        assert!(cusp.degree_in_sign >= 0.0 && cusp.degree_in_sign < 30.0);
    }
    assert_eq!(wheel.cusps[0].sign, ZodiacSign::Cancer);
}

#[test]
fn ascendant_is_its_own_entity() {
    // some systems report an ascendant away from cusp 1
    let raw = RawHouses {
        ascendant: 104.5,
        ..quadrant_wheel()
    };
    let wheel = HouseWheel::from_raw(raw, HouseSystem::WholeSign).unwrap();
    assert!((wheel.ascendant.longitude - 104.5).abs() < 1e-12);
    assert_eq!(wheel.ascendant.sign, ZodiacSign::Cancer);
    assert!((wheel.cusps[0].longitude - 100.0).abs() < 1e-12);
}

#[test]
fn short_cusp_output_is_rejected() {
    let raw = RawHouses {
        cusps: vec![0.0, 30.0, 60.0],
        ascendant: 0.0,
    };
    let err = HouseWheel::from_raw(raw, HouseSystem::Placidus).unwrap_err();
    assert!(matches!(err, ChartError::HouseCalculation { .. }));
}

#[test]
fn coinciding_cusps_are_rejected() {
    let mut raw = equal_wheel(0.0);
    raw.cusps[5] = raw.cusps[4];
    let err = HouseWheel::from_raw(raw, HouseSystem::Placidus).unwrap_err();
    assert!(matches!(err, ChartError::HouseCalculation { .. }));
}

#[test]
fn disordered_cusps_are_rejected() {
    // swapping two cusps makes the spans overlap instead of partitioning
    let mut raw = equal_wheel(0.0);
    raw.cusps.swap(2, 6);
    let err = HouseWheel::from_raw(raw, HouseSystem::Placidus).unwrap_err();
    assert!(matches!(err, ChartError::HouseCalculation { .. }));
}

#[test]
fn assignment_copies_placement_data() {
    let wheel = HouseWheel::from_raw(equal_wheel(330.0), HouseSystem::Equal).unwrap();
    let positions = [
        BodyPosition::new(CelestialBody::Sun, 345.0),
        BodyPosition::new(CelestialBody::Moon, 95.0),
    ];

    let assignments = assign_houses(&wheel, &positions);
    assert_eq!(assignments.len(), 2);

    assert_eq!(assignments[0].body, CelestialBody::Sun);
    assert_eq!(assignments[0].house, 1);
    assert_eq!(assignments[0].sign, ZodiacSign::Pisces);

    assert_eq!(assignments[1].body, CelestialBody::Moon);
    assert_eq!(assignments[1].house, 5);
    assert_eq!(assignments[1].sign, ZodiacSign::Cancer);
}
