//! Team areas used to favour staff already working near a job.

use serde::Serialize;

use plumbline_core::model::GeoPoint;

use crate::geo::haversine_km;

/// A rectangular service area with a nominal center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub center: GeoPoint,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Zone {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        center: GeoPoint,
        (min_lat, max_lat): (f64, f64),
        (min_lng, max_lng): (f64, f64),
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            center,
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Bounds are inclusive on every side.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}

/// Ordered set of zones; earlier zones win where boxes overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneMap {
    zones: Vec<Zone>,
}

impl ZoneMap {
    #[must_use]
    pub const fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// North and south teams for Johannesburg and Cape Town.
    #[must_use]
    pub fn service_area() -> Self {
        Self::new(vec![
            Zone::new(
                "jhb-north",
                "Johannesburg North",
                GeoPoint::new(-26.05, 28.02),
                (-26.20, -25.85),
                (27.75, 28.35),
            ),
            Zone::new(
                "jhb-south",
                "Johannesburg South",
                GeoPoint::new(-26.30, 28.02),
                (-26.55, -26.20),
                (27.75, 28.35),
            ),
            Zone::new(
                "cpt-north",
                "Cape Town North",
                GeoPoint::new(-33.83, 18.60),
                (-33.95, -33.55),
                (18.35, 18.95),
            ),
            Zone::new(
                "cpt-south",
                "Cape Town South",
                GeoPoint::new(-34.05, 18.47),
                (-34.35, -33.95),
                (18.30, 18.95),
            ),
        ])
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// ## Summary
    /// Zone for `point`: the first whose box contains it, otherwise the one
    /// with the nearest center. `None` only for an empty map.
    #[must_use]
    pub fn locate(&self, point: GeoPoint) -> Option<&Zone> {
        self.zones
            .iter()
            .find(|zone| zone.contains(point))
            .or_else(|| {
                self.zones.iter().min_by(|a, b| {
                    haversine_km(point, a.center).total_cmp(&haversine_km(point, b.center))
                })
            })
    }
}

impl Default for ZoneMap {
    fn default() -> Self {
        Self::service_area()
    }
}
