//! Spherical helpers: chord distance, great-circle interpolation and bounding boxes.
//!
//! Distances are chord lengths through a sphere of radius [`EARTH_RADIUS_KM`],
//! not surface (geodesic) distances. The chord is always a little shorter
//! than the path along the surface and the gap grows with the angle between
//! the two points; at city scale the difference is below a meter.

use serde::{Deserialize, Serialize};

/// Mean earth radius used for every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Below this `sin(angle)` two points are treated as coincident when interpolating.
const COINCIDENT_SIN: f64 = 1e-6;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Cartesian position (km) on the sphere.
    fn to_cartesian_km(self) -> [f64; 3] {
        let theta = self.lat.to_radians();
        let phi = self.lon.to_radians();
        [
            EARTH_RADIUS_KM * theta.cos() * phi.cos(),
            EARTH_RADIUS_KM * theta.cos() * phi.sin(),
            EARTH_RADIUS_KM * theta.sin(),
        ]
    }

    /// Chord distance to `other`, rounded to whole meters.
    pub fn chord_distance_m(&self, other: &LatLon) -> u64 {
        let a = self.to_cartesian_km();
        let b = other.to_cartesian_km();
        let d = a
            .iter()
            .zip(b.iter())
            .map(|(p, q)| (p - q) * (p - q))
            .sum::<f64>()
            .sqrt();
        (d * 1000.0).round() as u64
    }

    /// Central angle to `other` in radians (haversine form).
    pub fn angle_to(&self, other: &LatLon) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * h.sqrt().min(1.0).asin()
    }

    /// Plot-space coordinates, longitude on x and latitude on y.
    pub fn to_xy(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    pub fn from_xy(xy: [f64; 2]) -> Self {
        Self::new(xy[1], xy[0])
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Chord distance in meters between `(lat1, lon1)` and `(lat2, lon2)`.
pub fn estimate_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> u64 {
    LatLon::new(lat1, lon1).chord_distance_m(&LatLon::new(lat2, lon2))
}

/// Point at `fraction` of the way from `from` to `to` along the great circle.
///
/// `fraction` 0 yields `from`, 1 yields `to`. Nearly coincident endpoints
/// fall back to linear interpolation of the degrees.
pub fn interpolate(from: LatLon, to: LatLon, fraction: f64) -> LatLon {
    let angle = from.angle_to(&to);
    let sin_angle = angle.sin();
    if sin_angle < COINCIDENT_SIN {
        return LatLon::new(
            from.lat + fraction * (to.lat - from.lat),
            from.lon + fraction * (to.lon - from.lon),
        );
    }

    let a = ((1.0 - fraction) * angle).sin() / sin_angle;
    let b = (fraction * angle).sin() / sin_angle;

    let (lat1, lon1) = (from.lat.to_radians(), from.lon.to_radians());
    let (lat2, lon2) = (to.lat.to_radians(), to.lon.to_radians());

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    LatLon::new(
        z.atan2((x * x + y * y).sqrt()).to_degrees(),
        y.atan2(x).to_degrees(),
    )
}

/// Axis aligned latitude/longitude box. Does not wrap across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

impl Bounds {
    pub fn from_point(p: LatLon) -> Self {
        Self {
            south_west: p,
            north_east: p,
        }
    }

    /// Box centered on `center` spanning `lat_span` x `lon_span` degrees.
    pub fn around(center: LatLon, lat_span: f64, lon_span: f64) -> Self {
        Self {
            south_west: LatLon::new(center.lat - lat_span / 2.0, center.lon - lon_span / 2.0),
            north_east: LatLon::new(center.lat + lat_span / 2.0, center.lon + lon_span / 2.0),
        }
    }

    pub fn extend(&mut self, p: LatLon) {
        self.south_west.lat = self.south_west.lat.min(p.lat);
        self.south_west.lon = self.south_west.lon.min(p.lon);
        self.north_east.lat = self.north_east.lat.max(p.lat);
        self.north_east.lon = self.north_east.lon.max(p.lon);
    }

    pub fn union(&mut self, other: &Bounds) {
        self.extend(other.south_west);
        self.extend(other.north_east);
    }

    pub fn contains(&self, p: &LatLon) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lon..=self.north_east.lon).contains(&p.lon)
    }

    pub fn center(&self) -> LatLon {
        LatLon::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }

    /// `(lat_span, lon_span)` in degrees.
    pub fn span(&self) -> (f64, f64) {
        (
            self.north_east.lat - self.south_west.lat,
            self.north_east.lon - self.south_west.lon,
        )
    }
}
