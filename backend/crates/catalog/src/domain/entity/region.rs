//! Region Entity
//!
//! A geographic region that walks belong to.

use chrono::{DateTime, Utc};
use kernel::id::RegionId;

use crate::domain::value_object::{name::Name, region_code::RegionCode};

/// Region entity
#[derive(Debug, Clone)]
pub struct Region {
    /// Internal UUID identifier
    pub region_id: RegionId,
    /// Short administrative code (e.g. `AKL`)
    pub code: RegionCode,
    /// Display name
    pub name: Name,
    /// Land area in square kilometres
    pub area: f64,
    /// Latitude of the region centre
    pub lat: f64,
    /// Longitude of the region centre
    pub long: f64,
    /// Resident population
    pub population: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Region {
    /// Create a new region with a fresh server-assigned id
    pub fn new(
        code: RegionCode,
        name: Name,
        area: f64,
        lat: f64,
        long: f64,
        population: i64,
    ) -> Self {
        let now = Utc::now();

        Self {
            region_id: RegionId::new(),
            code,
            name,
            area,
            lat,
            long,
            population,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the mutable fields (PUT semantics)
    pub fn update_details(
        &mut self,
        code: RegionCode,
        name: Name,
        area: f64,
        lat: f64,
        long: f64,
        population: i64,
    ) {
        self.code = code;
        self.name = name;
        self.area = area;
        self.lat = lat;
        self.long = long;
        self.population = population;
        self.updated_at = Utc::now();
    }
}
