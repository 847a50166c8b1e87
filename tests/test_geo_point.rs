use approx::assert_relative_eq;
use geo_cell_area::{GeoPoint, MercPoint, MercatorCorrector, PlainGeoPoint};
use geojson::{Geometry, Value};

#[test]
fn test_is_equal() {
    assert!(GeoPoint::new(50.0, 50.0).is_equal(&GeoPoint::new(50.0, 50.0)));
    assert!(GeoPoint::new(50.000000000000001, 50.0).is_equal(&GeoPoint::new(50.0, 50.0)));
    assert!(!GeoPoint::new(50.0, 50.0).is_equal(&GeoPoint::new(40.0, 50.0)));
}

#[test]
fn test_is_closer_through_anti_meridian() {
    assert!(!GeoPoint::new(50.0, 50.0).is_closer_through_anti_meridian(&GeoPoint::new(50.0, 60.0)));
    assert!(GeoPoint::new(50.0, 170.0).is_closer_through_anti_meridian(&GeoPoint::new(50.0, -170.0)));
}

#[test]
fn test_to_opposite_hemisphere() {
    let point = GeoPoint::new(50.0, 50.0).to_opposite_hemisphere();

    assert_eq!(point.lat, -50.0);
    assert_eq!(point.lng, -130.0);
}

#[test]
fn test_calc_merc_distance() {
    let distance = GeoPoint::new(10.0, 10.0).calc_merc_distance(&GeoPoint::new(20.0, 20.0));
    assert_relative_eq!(distance, 0.04001270885895247, epsilon = 1e-12);

    // Short way round across the anti-meridian
    let distance = GeoPoint::new(10.0, 170.0).calc_merc_distance(&GeoPoint::new(10.0, -170.0));
    assert_relative_eq!(distance, 0.05555555555555558, epsilon = 1e-12);
}

#[test]
fn test_to_merc() {
    let point = GeoPoint::new(66.0, 90.0).to_merc();

    assert_relative_eq!(point.x, 0.75);
    assert_relative_eq!(point.y, 0.2535410659142879, epsilon = 1e-12);
}

#[test]
fn test_to_merc_clamps_polar_latitude() {
    let pole = GeoPoint::new(90.0, 0.0).to_merc();
    let limit = GeoPoint::new(85.05112878, 0.0).to_merc();

    assert!(pole.y.is_finite());
    assert_relative_eq!(pole.y, limit.y);
    assert_relative_eq!(limit.y, 0.0, epsilon = 1e-8);
}

#[test]
fn test_from_merc() {
    let point = GeoPoint::from_merc(&MercPoint::new(0.4, 0.4));

    assert_relative_eq!(point.lat, 33.84122032047678, epsilon = 1e-12);
    assert_relative_eq!(point.lng, -36.0, epsilon = 1e-12);
}

#[test]
fn test_merc_round_trip() {
    for (lat, lng) in [(0.0, 0.0), (48.8566, 2.3522), (-33.9, 151.2), (84.9, -179.9)] {
        let point = GeoPoint::new(lat, lng);
        let back = GeoPoint::from_merc(&point.to_merc());

        assert!(back.is_equal(&point), "{point:?} came back as {back:?}");
    }
}

#[test]
fn test_semi_sphere() {
    let point = GeoPoint::new(66.0, 90.0).to_semi_sphere();
    assert_relative_eq!(point.lat, 44.36260813542818, epsilon = 1e-12);
    assert_eq!(point.lng, 90.0);

    let point = GeoPoint::new(44.36260813542816, 90.0).from_semi_sphere();
    assert_relative_eq!(point.lat, 66.0, epsilon = 1e-12);
}

#[test]
fn test_semi_sphere_round_trip() {
    for lat in [-80.0, -45.5, 0.0, 12.25, 66.0, 85.0] {
        let point = GeoPoint::new(lat, 10.0);

        assert!(point.to_semi_sphere().from_semi_sphere().is_equal(&point));
    }
}

#[test]
fn test_to_formatted() {
    let point = GeoPoint::new(45.0000000000000001, 90.0).to_formatted();

    assert_eq!(point.lat, 45.0);
}

#[test]
fn test_is_eastern_to() {
    let point = GeoPoint::new(10.0, 10.0);
    assert!(!point.is_eastern_to(&GeoPoint::new(10.0, 10.0)));
    assert!(point.is_eastern_to(&GeoPoint::new(10.0, -10.0)));
    assert!(!point.is_eastern_to(&GeoPoint::new(10.0, 20.0)));

    assert!(GeoPoint::new(10.0, -170.0).is_eastern_to(&GeoPoint::new(10.0, 170.0)));
    assert!(!GeoPoint::new(10.0, 170.0).is_eastern_to(&GeoPoint::new(10.0, -170.0)));
}

#[test]
fn test_is_western_to() {
    let point = GeoPoint::new(10.0, 10.0);
    assert!(!point.is_western_to(&GeoPoint::new(10.0, 10.0)));
    assert!(point.is_western_to(&GeoPoint::new(10.0, 20.0)));
    assert!(!point.is_western_to(&GeoPoint::new(10.0, -10.0)));

    assert!(GeoPoint::new(10.0, 170.0).is_western_to(&GeoPoint::new(10.0, -170.0)));
    assert!(!GeoPoint::new(10.0, -170.0).is_western_to(&GeoPoint::new(10.0, 170.0)));
}

#[test]
fn test_is_northern_and_southern_to() {
    let point = GeoPoint::new(60.0, 10.0);

    assert!(!point.is_northern_to(&point));
    assert!(point.is_northern_to(&GeoPoint::new(50.0, 10.0)));
    assert!(!point.is_northern_to(&GeoPoint::new(70.0, 10.0)));

    assert!(!point.is_southern_to(&point));
    assert!(point.is_southern_to(&GeoPoint::new(70.0, 10.0)));
    assert!(!point.is_southern_to(&GeoPoint::new(50.0, 10.0)));
}

#[test]
fn test_plain_round_trip() {
    let point = GeoPoint::new(50.0, 60.0);
    let plain = point.to_plain();

    assert_eq!(plain, PlainGeoPoint { lat: 50.0, lng: 60.0 });
    assert_eq!(GeoPoint::from_plain(&plain), point);

    let json = serde_json::to_value(plain).unwrap();
    assert_eq!(json, serde_json::json!({"lat": 50.0, "lng": 60.0}));
}

#[test]
fn test_geojson_uses_lng_lat_order() {
    let geometry = GeoPoint::new(50.0, 60.0).to_geojson();
    assert_eq!(geometry.value, Value::Point(vec![60.0, 50.0]));

    let point = GeoPoint::from_geojson(&Geometry::new(Value::Point(vec![60.0, 50.0]))).unwrap();
    assert_eq!(point.to_plain(), PlainGeoPoint { lat: 50.0, lng: 60.0 });
}

#[test]
fn test_from_geojson_rejects_short_position() {
    let result = GeoPoint::from_geojson(&Geometry::new(Value::Point(vec![60.0])));

    assert!(result.is_err());
}

#[test]
fn test_create_formatted() {
    let point = GeoPoint::create_formatted(50.00000000000001, 60.0);
    assert_eq!(point.to_plain(), PlainGeoPoint { lat: 50.0, lng: 60.0 });

    // Latitude is clamped
    let point = GeoPoint::create_formatted(100.0, 60.0);
    assert_eq!(point.to_plain(), PlainGeoPoint { lat: 90.0, lng: 60.0 });

    let point = GeoPoint::create_formatted(50.0, 350.0);
    assert_eq!(point.to_plain(), PlainGeoPoint { lat: 50.0, lng: -10.0 });
}

#[test]
fn test_from_unsafe_coords() {
    let point = GeoPoint::from_unsafe_coords(50.0, 60.0);
    assert_eq!(point.to_plain(), PlainGeoPoint { lat: 50.0, lng: 60.0 });

    // Latitude is reflected back over the pole
    let point = GeoPoint::from_unsafe_coords(100.0, 60.0);
    assert_eq!(point.to_plain(), PlainGeoPoint { lat: 80.0, lng: 60.0 });

    let point = GeoPoint::from_unsafe_coords(60.0, 350.0);
    assert_eq!(point.to_plain(), PlainGeoPoint { lat: 60.0, lng: -10.0 });
}

#[test]
fn test_corrector_round_trip() {
    let corrector = MercatorCorrector::new();
    let point = GeoPoint::new(-23.55, -46.63);

    let back = corrector.correct_for_geo(&corrector.correct_for_grid(&point));

    assert!(back.is_equal(&point));
}
