//! Place search for the map's search box.
//!
//! A [`PlaceSearch`] turns a query into candidate [`Place`]s;
//! [`apply_places`] turns those into markers plus the box the map should
//! fit. Places without any geometry are skipped with a warning.

use crate::config::NamedPlace;
use crate::data::geo::{Bounds, LatLon};

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub location: Option<LatLon>,
    /// Only geocoded areas carry a viewport.
    pub viewport: Option<Bounds>,
}

impl From<&NamedPlace> for Place {
    fn from(p: &NamedPlace) -> Self {
        Self {
            name: p.name.clone(),
            location: p.location,
            viewport: p.viewport,
        }
    }
}

pub trait PlaceSearch {
    /// Candidates for `query`. `bias` is the current view; results inside it
    /// should come first.
    fn search(&self, query: &str, bias: Option<&Bounds>) -> Vec<Place>;
}

/// Marker for one search hit; lives apart from the pins.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMarker {
    pub title: String,
    pub position: LatLon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub markers: Vec<SearchMarker>,
    /// Box that covers every hit; `None` when every place lacked geometry.
    pub bounds: Option<Bounds>,
}

/// Markers and fit box for a result list. `None` for an empty list.
pub fn apply_places(places: &[Place]) -> Option<SearchView> {
    if places.is_empty() {
        return None;
    }

    let mut markers = Vec::new();
    let mut bounds: Option<Bounds> = None;
    for place in places {
        let Some(location) = place.location else {
            tracing::warn!(name = %place.name, "Returned place contains no geometry");
            continue;
        };
        markers.push(SearchMarker {
            title: place.name.clone(),
            position: location,
        });
        let next = match (bounds, place.viewport) {
            (Some(mut b), Some(vp)) => {
                b.union(&vp);
                b
            }
            (Some(mut b), None) => {
                b.extend(location);
                b
            }
            (None, Some(vp)) => vp,
            (None, None) => Bounds::from_point(location),
        };
        bounds = Some(next);
    }
    Some(SearchView { markers, bounds })
}

/// Parse `"lat, lon"` (comma and/or whitespace separated) in degrees.
pub fn parse_coordinates(query: &str) -> Option<LatLon> {
    let mut parts = query
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let lat: f64 = parts.next()?.parse().ok()?;
    let lon: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon)
    {
        return None;
    }
    Some(LatLon::new(lat, lon))
}

/// Search over coordinates typed into the box and a fixed gazetteer.
#[derive(Debug, Clone, Default)]
pub struct LocalSearch {
    places: Vec<Place>,
}

impl LocalSearch {
    pub fn new(places: impl IntoIterator<Item = Place>) -> Self {
        Self {
            places: places.into_iter().collect(),
        }
    }

    pub fn from_config(places: &[NamedPlace]) -> Self {
        Self::new(places.iter().map(Place::from))
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl PlaceSearch for LocalSearch {
    fn search(&self, query: &str, bias: Option<&Bounds>) -> Vec<Place> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        if let Some(location) = parse_coordinates(query) {
            return vec![Place {
                name: query.to_string(),
                location: Some(location),
                viewport: None,
            }];
        }

        let needle = query.to_lowercase();
        let mut hits: Vec<Place> = self
            .places
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        if let Some(view) = bias {
            // Stable sort keeps gazetteer order within each group.
            hits.sort_by_key(|p| !p.location.map_or(false, |l| view.contains(&l)));
        }
        hits
    }
}
