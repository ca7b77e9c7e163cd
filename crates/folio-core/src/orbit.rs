//! Orbital placement of skill icons around a shared center.

use crate::config::OrbitConfig;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OrbitError {
    #[error("orbit item at position {0} has an empty label")]
    EmptyLabel(usize),
}

/// Static descriptor of one orbiting element.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitItem {
    pub label: String,
    pub glyph: String,
    /// Fixed angular position; any real value, not reduced to `[0, 360)`.
    pub base_angle_degrees: f64,
}

impl OrbitItem {
    pub fn new(
        label: impl Into<String>,
        glyph: impl Into<String>,
        base_angle_degrees: f64,
    ) -> Self {
        Self {
            label: label.into(),
            glyph: glyph.into(),
            base_angle_degrees,
        }
    }
}

/// Offset of one item from the orbit center, in the unit of the configured radii.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedPosition {
    pub x: f64,
    pub y: f64,
}

#[inline]
pub fn radius_for_index(index: usize, config: &OrbitConfig) -> f64 {
    if index % 2 == 0 {
        config.outer_radius
    } else {
        config.inner_radius
    }
}

/// Project an item at `index` with `base_angle_degrees` under the current rotation offset.
#[inline]
pub fn project(
    base_angle_degrees: f64,
    index: usize,
    offset_degrees: f64,
    config: &OrbitConfig,
) -> ProjectedPosition {
    let theta = (base_angle_degrees + offset_degrees).to_radians();
    let radius = radius_for_index(index, config);
    ProjectedPosition {
        x: theta.cos() * radius,
        y: theta.sin() * radius,
    }
}

/// Ordered, immutable set of orbit items plus the geometry they are laid out with.
#[derive(Clone, Debug)]
pub struct Orbit {
    items: Box<[OrbitItem]>,
    config: OrbitConfig,
}

impl Orbit {
    pub fn new(items: Vec<OrbitItem>, config: OrbitConfig) -> Result<Self, OrbitError> {
        if let Some(i) = items.iter().position(|it| it.label.trim().is_empty()) {
            return Err(OrbitError::EmptyLabel(i));
        }
        Ok(Self {
            items: items.into_boxed_slice(),
            config,
        })
    }

    pub fn items(&self) -> &[OrbitItem] {
        &self.items
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Positions of every item, in item order, for the given rotation offset.
    pub fn layout(&self, offset_degrees: f64) -> SmallVec<[ProjectedPosition; 16]> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, it)| project(it.base_angle_degrees, i, offset_degrees, &self.config))
            .collect()
    }
}
