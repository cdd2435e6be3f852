#![warn(missing_docs)]
//! Module for handling optical surfaces
//!
//! This module contains the purely geometric surface shapes ([`Plane`], [`Sphere`]) behind
//! the [`GeoSurface`] trait as well as the [`OpticalSurface`] which combines a shape with a
//! material and its placement on the optical axis.

mod geo_surface;
mod optical_surface;
mod plane;
mod sphere;

pub use geo_surface::GeoSurface;
pub use optical_surface::{OpticalSurface, SurfaceRecord};
pub use plane::Plane;
pub use sphere::Sphere;
