use std::{fmt, str::FromStr};

use thiserror::Error;

pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = i32::MIN;
const RAW_COORD_MAX: RawCoord = i32::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

/// Compact fixed-point integer representation of a geographical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_COORD_INVALID);

    pub const fn max() -> Self {
        Self(RAW_COORD_MAX)
    }

    pub const fn min() -> Self {
        Self(RAW_COORD_MIN)
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(raw)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        let res = Self::INVALID;
        debug_assert!(!res.is_valid());
        res
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else if self.is_valid() && other.is_valid() {
            Some(self.to_raw().cmp(&other.to_raw()))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd)]
pub struct LatCoord(GeoCoord);

impl LatCoord {
    const RAD_MAX: f64 = std::f64::consts::FRAC_PI_2;
    const RAD_MIN: f64 = -std::f64::consts::FRAC_PI_2;
    const TO_RAD: f64 =
        (Self::RAD_MAX - Self::RAD_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);

    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;
    const TO_DEG: f64 =
        (Self::DEG_MAX - Self::DEG_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);
    const FROM_DEG: f64 =
        (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64) / (Self::DEG_MAX - Self::DEG_MIN);

    pub const fn max() -> Self {
        Self(GeoCoord::max())
    }

    pub const fn min() -> Self {
        Self(GeoCoord::min())
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0.to_raw()
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(GeoCoord::from_raw(raw))
    }

    pub fn is_valid(self) -> bool {
        self.0.is_valid()
    }

    pub fn to_rad(self) -> f64 {
        if self.is_valid() {
            let rad = f64::from(self.to_raw()) * Self::TO_RAD;
            debug_assert!(rad >= Self::RAD_MIN);
            debug_assert!(rad <= Self::RAD_MAX);
            rad
        } else {
            f64::NAN
        }
    }

    pub fn to_deg(self) -> f64 {
        if self.is_valid() {
            let deg = f64::from(self.to_raw()) * Self::TO_DEG;
            debug_assert!(deg >= Self::DEG_MIN);
            debug_assert!(deg <= Self::DEG_MAX);
            deg
        } else {
            f64::NAN
        }
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        let raw = f64::round(deg * Self::FROM_DEG) as RawCoord;
        let res = Self::from_raw(raw);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self::from_deg(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd)]
pub struct LngCoord(GeoCoord);

impl LngCoord {
    const RAD_MAX: f64 = std::f64::consts::PI;
    const RAD_MIN: f64 = -std::f64::consts::PI;
    const TO_RAD: f64 =
        (Self::RAD_MAX - Self::RAD_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);

    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;
    const TO_DEG: f64 =
        (Self::DEG_MAX - Self::DEG_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);
    const FROM_DEG: f64 =
        (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64) / (Self::DEG_MAX - Self::DEG_MIN);

    pub const fn max() -> Self {
        Self(GeoCoord::max())
    }

    pub const fn min() -> Self {
        Self(GeoCoord::min())
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0.to_raw()
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(GeoCoord::from_raw(raw))
    }

    pub fn is_valid(self) -> bool {
        self.0.is_valid()
    }

    pub fn to_rad(self) -> f64 {
        if self.is_valid() {
            let rad = f64::from(self.to_raw()) * Self::TO_RAD;
            debug_assert!(rad >= Self::RAD_MIN);
            debug_assert!(rad <= Self::RAD_MAX);
            rad
        } else {
            f64::NAN
        }
    }

    pub fn to_deg(self) -> f64 {
        if self.is_valid() {
            let deg = f64::from(self.to_raw()) * Self::TO_DEG;
            debug_assert!(deg >= Self::DEG_MIN);
            debug_assert!(deg <= Self::DEG_MAX);
            deg
        } else {
            f64::NAN
        }
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        let raw = f64::round(deg * Self::FROM_DEG) as RawCoord;
        let res = Self::from_raw(raw);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self::from_deg(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Compact internal representation of a geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Missing separator between latitude and longitude")]
    MissingSeparator,
    #[error("Invalid coordinate value: {0}")]
    InvalidValue(String),
    #[error("Coordinates out of range: {0},{1}")]
    OutOfRange(f64, f64),
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_str, lng_str) = s
            .split_once(',')
            .ok_or(MapPointParseError::MissingSeparator)?;
        let lat_deg = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::InvalidValue(lat_str.trim().to_owned()))?;
        let lng_deg = lng_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::InvalidValue(lng_str.trim().to_owned()))?;
        Self::try_from_lat_lng_deg(lat_deg, lng_deg)
            .ok_or(MapPointParseError::OutOfRange(lat_deg, lng_deg))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}m", self.0)
    }
}

pub const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Some(Distance::from_meters(
            MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom),
        ))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        debug_assert!(pt.is_valid());
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // inverse (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }

    /// The smallest box enclosing both boxes.
    ///
    /// Boxes spanning the antimeridian are not merged across it.
    pub fn merged(&self, other: &MapBbox) -> MapBbox {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => {
                let sw_lat = self.sw.lat().to_raw().min(other.sw.lat().to_raw());
                let sw_lng = self.sw.lng().to_raw().min(other.sw.lng().to_raw());
                let ne_lat = self.ne.lat().to_raw().max(other.ne.lat().to_raw());
                let ne_lng = self.ne.lng().to_raw().max(other.ne.lng().to_raw());
                MapBbox::new(
                    MapPoint::new(LatCoord::from_raw(sw_lat), LngCoord::from_raw(sw_lng)),
                    MapPoint::new(LatCoord::from_raw(ne_lat), LngCoord::from_raw(ne_lng)),
                )
            }
            (true, false) => *self,
            _ => *other,
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

/// Closed area on the map, described by its exterior ring.
///
/// The ring is stored without a duplicated closing vertex.
/// Interior rings (holes) are not supported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapPolygon {
    exterior: Vec<MapPoint>,
}

impl MapPolygon {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(exterior: Vec<MapPoint>) -> Self {
        Self { exterior }
    }

    pub fn exterior(&self) -> &[MapPoint] {
        &self.exterior
    }

    pub fn into_exterior(self) -> Vec<MapPoint> {
        self.exterior
    }

    pub fn is_valid(&self) -> bool {
        self.exterior.len() >= Self::MIN_VERTICES && self.exterior.iter().all(|pt| pt.is_valid())
    }

    pub fn bbox(&self) -> MapBbox {
        if !self.is_valid() {
            return MapBbox::default();
        }
        let mut lat_min = RAW_COORD_MAX;
        let mut lat_max = RAW_COORD_MIN;
        let mut lng_min = RAW_COORD_MAX;
        let mut lng_max = RAW_COORD_MIN;
        for pt in &self.exterior {
            lat_min = lat_min.min(pt.lat().to_raw());
            lat_max = lat_max.max(pt.lat().to_raw());
            lng_min = lng_min.min(pt.lng().to_raw());
            lng_max = lng_max.max(pt.lng().to_raw());
        }
        MapBbox::new(
            MapPoint::new(LatCoord::from_raw(lat_min), LngCoord::from_raw(lng_min)),
            MapPoint::new(LatCoord::from_raw(lat_max), LngCoord::from_raw(lng_max)),
        )
    }
}

impl From<Vec<MapPoint>> for MapPolygon {
    fn from(exterior: Vec<MapPoint>) -> Self {
        Self::new(exterior)
    }
}

/// Geometry of a stored object, point-shaped or area-shaped.
#[derive(Clone, Debug, PartialEq)]
pub enum MapGeometry {
    Point(MapPoint),
    Polygon(MapPolygon),
    MultiPolygon(Vec<MapPolygon>),
}

impl MapGeometry {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Point(pt) => pt.is_valid(),
            Self::Polygon(polygon) => polygon.is_valid(),
            Self::MultiPolygon(polygons) => {
                !polygons.is_empty() && polygons.iter().all(MapPolygon::is_valid)
            }
        }
    }

    pub fn bbox(&self) -> MapBbox {
        match self {
            Self::Point(pt) => MapBbox::new(*pt, *pt),
            Self::Polygon(polygon) => polygon.bbox(),
            Self::MultiPolygon(polygons) => polygons
                .iter()
                .map(MapPolygon::bbox)
                .fold(MapBbox::default(), |acc, bbox| acc.merged(&bbox)),
        }
    }
}

impl From<MapPoint> for MapGeometry {
    fn from(from: MapPoint) -> Self {
        Self::Point(from)
    }
}

impl From<MapPolygon> for MapGeometry {
    fn from(from: MapPolygon) -> Self {
        Self::Polygon(from)
    }
}
