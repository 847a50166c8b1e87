//! Geographic points in degrees
//!
//! `GeoPoint` carries the coordinate conventions the rest of the crate relies
//! on: tolerance based equality, anti-meridian aware direction queries,
//! Mercator and semi-sphere conversions, and the two interchange formats
//! (`{lat, lng}` records and GeoJSON `Point` geometry, which is `[lng, lat]`).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use geojson::{Geometry, Position, Value as GeoValue};
use serde::{Deserialize, Serialize};

use crate::error::AreaError;
use crate::merc_point::MercPoint;
use crate::point::{round_coord_with_precision, PlanarPoint, FORMAT_PRECISION};

/// Tolerance for comparing geographic coordinates, in degrees
pub const GEO_EPSILON: f64 = 1e-9;

/// Web Mercator latitude limit where the projection becomes a square
pub const MAX_MERCATOR_LAT: f64 = 85.05112878;

/// Wrap a longitude into (-180, 180]
pub(crate) fn wrap_lng(lng: f64) -> f64 {
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Signed longitude difference `to - from`, taken the short way round
pub(crate) fn lng_diff(from: f64, to: f64) -> f64 {
    wrap_lng(to - from)
}

/// Plain `{lat, lng}` record used for interchange
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlainGeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A point on the sphere as (latitude, longitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point without any normalization
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a point from coordinates that may be slightly out of range.
    ///
    /// Latitude is clamped into [-90, 90], longitude wrapped into (-180, 180]
    /// and both are rounded to [`FORMAT_PRECISION`] decimal places.
    pub fn create_formatted(lat: f64, lng: f64) -> Self {
        let lat = lat.clamp(-90.0, 90.0);
        let lng = wrap_lng(lng);

        Self {
            lat: round_coord_with_precision(lat, FORMAT_PRECISION),
            lng: round_coord_with_precision(lng, FORMAT_PRECISION),
        }
    }

    /// Create a point from arbitrary, untrusted coordinates.
    ///
    /// Unlike [`GeoPoint::create_formatted`], a latitude past a pole is
    /// reflected back over it (100 becomes 80) instead of being clamped.
    /// The longitude is wrapped and never flipped.
    pub fn from_unsafe_coords(lat: f64, lng: f64) -> Self {
        let mut lat = wrap_lng(lat);
        if lat > 90.0 {
            lat = 180.0 - lat;
        } else if lat < -90.0 {
            lat = -180.0 - lat;
        }

        Self::create_formatted(lat, lng)
    }

    /// This point passed through [`GeoPoint::create_formatted`]
    pub fn to_formatted(&self) -> Self {
        Self::create_formatted(self.lat, self.lng)
    }

    /// Tolerance based equality; longitudes are compared across the anti-meridian
    pub fn is_equal(&self, other: &GeoPoint) -> bool {
        (self.lat - other.lat).abs() < GEO_EPSILON && lng_diff(self.lng, other.lng).abs() < GEO_EPSILON
    }

    /// True when the short way between the two points crosses the anti-meridian
    pub fn is_closer_through_anti_meridian(&self, other: &GeoPoint) -> bool {
        (self.lng - other.lng).abs() > 180.0
    }

    pub fn is_eastern_to(&self, other: &GeoPoint) -> bool {
        if self.is_closer_through_anti_meridian(other) {
            self.lng < other.lng
        } else {
            self.lng > other.lng
        }
    }

    pub fn is_western_to(&self, other: &GeoPoint) -> bool {
        if self.is_closer_through_anti_meridian(other) {
            self.lng > other.lng
        } else {
            self.lng < other.lng
        }
    }

    pub fn is_northern_to(&self, other: &GeoPoint) -> bool {
        self.lat > other.lat
    }

    pub fn is_southern_to(&self, other: &GeoPoint) -> bool {
        self.lat < other.lat
    }

    /// The antipodal point
    pub fn to_opposite_hemisphere(&self) -> Self {
        Self::new(-self.lat, wrap_lng(self.lng + 180.0))
    }

    /// Forward Mercator projection onto the unit square
    pub fn to_merc(&self) -> MercPoint {
        let lat = self.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let x = (self.lng + 180.0) / 360.0;
        let y = 0.5 - (FRAC_PI_4 + lat / 2.0).tan().ln() / (2.0 * PI);

        MercPoint::new(x, y)
    }

    /// Inverse Mercator projection from the unit square
    pub fn from_merc(point: &MercPoint) -> Self {
        let lng = point.x * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * point.y)).sinh().atan().to_degrees();

        Self::new(lat, lng)
    }

    /// Distance between the Mercator projections, the short way round
    pub fn calc_merc_distance(&self, other: &GeoPoint) -> f64 {
        let a = self.to_merc();
        let b = other.to_merc();

        let dx = (a.x - b.x).abs();
        let dx = dx.min(1.0 - dx);
        let dy = a.y - b.y;

        dx.hypot(dy)
    }

    /// Remap latitude onto the semi-sphere (half the Mercator stretch)
    pub fn to_semi_sphere(&self) -> Self {
        let lat = self.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let semi_lat = (FRAC_PI_4 + lat / 2.0).tan().ln() / 2.0;

        Self::new(semi_lat.to_degrees(), self.lng)
    }

    /// Inverse of [`GeoPoint::to_semi_sphere`]
    pub fn from_semi_sphere(&self) -> Self {
        let semi_lat = self.lat.to_radians();
        let lat = 2.0 * (2.0 * semi_lat).exp().atan() - FRAC_PI_2;

        Self::new(lat.to_degrees(), self.lng)
    }

    pub fn to_plain(&self) -> PlainGeoPoint {
        PlainGeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }

    pub fn from_plain(plain: &PlainGeoPoint) -> Self {
        Self::new(plain.lat, plain.lng)
    }

    /// GeoJSON position, longitude first
    pub fn to_position(&self) -> Position {
        vec![self.lng, self.lat]
    }

    /// GeoJSON position rounded to `precision` decimal places
    pub fn to_position_with_precision(&self, precision: u32) -> Position {
        vec![
            round_coord_with_precision(self.lng, precision),
            round_coord_with_precision(self.lat, precision),
        ]
    }

    /// GeoJSON `Point` geometry
    pub fn to_geojson(&self) -> Geometry {
        Geometry::new(GeoValue::Point(self.to_position()))
    }

    /// Read a GeoJSON `Point` geometry
    pub fn from_geojson(geometry: &Geometry) -> Result<Self, AreaError> {
        match &geometry.value {
            GeoValue::Point(coords) if coords.len() >= 2 => Ok(Self::new(coords[1], coords[0])),
            GeoValue::Point(coords) => Err(AreaError::InvalidGeoJson(format!(
                "point has {} coordinates",
                coords.len()
            ))),
            _ => Err(AreaError::InvalidGeoJson("expected Point geometry".to_string())),
        }
    }
}

impl From<PlainGeoPoint> for GeoPoint {
    fn from(plain: PlainGeoPoint) -> Self {
        Self::from_plain(&plain)
    }
}

impl From<GeoPoint> for PlainGeoPoint {
    fn from(point: GeoPoint) -> Self {
        point.to_plain()
    }
}

/// Longitude as `x`, latitude as `y`
impl PlanarPoint for GeoPoint {
    fn x(&self) -> f64 {
        self.lng
    }

    fn y(&self) -> f64 {
        self.lat
    }

    fn from_xy(x: f64, y: f64) -> Self {
        Self::new(y, x)
    }

    fn is_equal(&self, other: &Self) -> bool {
        GeoPoint::is_equal(self, other)
    }
}
