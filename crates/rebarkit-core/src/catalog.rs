//! Rebar stock catalog.
//!
//! This module provides:
//! - Bar specifications (diameter, unit weight, price)
//! - A catalog keyed by diameter with copy-on-write updates
//! - The standard hard-coded catalog used on startup
//!
//! Updates return a new catalog instead of mutating in place, which keeps
//! every computation a pure function of the catalog snapshot it was given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::error::{CostingError, Result};

/// Stock specification for one bar diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarSpec {
    /// Nominal bar diameter in millimeters.
    pub diameter_mm: u32,
    /// Unit weight in kilograms per meter of bar.
    pub weight_per_meter: f64,
    /// Material price per kilogram.
    pub price_per_kg: f64,
}

impl RebarSpec {
    pub fn new(diameter_mm: u32, weight_per_meter: f64, price_per_kg: f64) -> Self {
        Self {
            diameter_mm,
            weight_per_meter,
            price_per_kg,
        }
    }
}

impl fmt::Display for RebarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Φ{} ({} kg/m, {} per kg)",
            self.diameter_mm, self.weight_per_meter, self.price_per_kg
        )
    }
}

/// Catalog of bar specifications, keyed by diameter.
///
/// Diameters are unique by construction. Iteration is ordered by diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebarCatalog {
    specs: BTreeMap<u32, RebarSpec>,
}

impl RebarCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            specs: BTreeMap::new(),
        }
    }

    /// The standard catalog loaded on startup.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for spec in [
            RebarSpec::new(6, 0.222, 2.84),
            RebarSpec::new(8, 0.395, 2.84),
            RebarSpec::new(10, 0.617, 2.84),
            RebarSpec::new(12, 0.888, 2.84),
        ] {
            catalog.specs.insert(spec.diameter_mm, spec);
        }
        catalog
    }

    /// Looks up the specification for a diameter.
    pub fn get(&self, diameter_mm: u32) -> Result<&RebarSpec> {
        self.specs
            .get(&diameter_mm)
            .ok_or(CostingError::UnknownDiameter { diameter_mm })
    }

    pub fn contains(&self, diameter_mm: u32) -> bool {
        self.specs.contains_key(&diameter_mm)
    }

    /// All catalog diameters, ascending.
    pub fn diameters(&self) -> impl Iterator<Item = u32> + '_ {
        self.specs.keys().copied()
    }

    /// All specifications, ordered by diameter.
    pub fn specs(&self) -> impl Iterator<Item = &RebarSpec> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Returns a catalog with `spec` inserted, replacing any entry for the
    /// same diameter.
    pub fn with_spec(&self, spec: RebarSpec) -> Self {
        debug!(diameter_mm = spec.diameter_mm, "replacing catalog entry");
        let mut specs = self.specs.clone();
        specs.insert(spec.diameter_mm, spec);
        Self { specs }
    }

    /// Returns a catalog with the unit weight of one entry replaced.
    pub fn with_weight(&self, diameter_mm: u32, weight_per_meter: f64) -> Result<Self> {
        let spec = self.get(diameter_mm)?;
        Ok(self.with_spec(RebarSpec {
            weight_per_meter,
            ..*spec
        }))
    }

    /// Returns a catalog with the kilogram price of one entry replaced.
    pub fn with_price(&self, diameter_mm: u32, price_per_kg: f64) -> Result<Self> {
        let spec = self.get(diameter_mm)?;
        Ok(self.with_spec(RebarSpec {
            price_per_kg,
            ..*spec
        }))
    }
}

impl Default for RebarCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
