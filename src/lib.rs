//! This is the documentation for the **OPTRACE** software package, a sequential
//! geometric-optics ray tracing engine.
//!
//! An optical system is modeled as an ordered stack of refracting surfaces. The engine
//! places the surfaces in a shared global coordinate frame (derived from the surface
//! thicknesses), generates ray bundles from a field / aperture definition and sequentially
//! intersects and refracts every ray at each surface, using wavelength-dependent refractive
//! indices drawn from an injected glass catalog. The traced rays keep their full position
//! history for downstream analysis and plotting.
//!
//! Configuration-file parsing, glass-catalog file parsing and any visualization are *not*
//! part of this crate: an external loader supplies [`SurfaceRecord`](surface::SurfaceRecord)
//! lists and a filled [`GlassCatalog`](material::GlassCatalog), while analysis code consumes
//! the read-only surface list and the traced-ray histories.
//!
//! ## Example
//!
//! ```rust
//! use optrace::{
//!     aperture::Aperture,
//!     material::{GlassCatalog, GlassEntry, Material},
//!     millimeter,
//!     sequential_system::{SequentialSystem, SystemType},
//!     surface::SurfaceRecord,
//! };
//!
//! // catalog data is normally ingested by an external glass catalog parser
//! let mut catalog = GlassCatalog::new("demo");
//! catalog.add_glass(
//!     "N-BK7",
//!     GlassEntry::new(
//!         2,
//!         vec![
//!             1.03961212,
//!             0.00600069867,
//!             0.231792344,
//!             0.0200179144,
//!             1.01046945,
//!             103.560653,
//!         ],
//!         None,
//!         1.5168,
//!         64.17,
//!     )
//!     .unwrap(),
//! );
//! // a biconvex singlet followed by an image plane
//! let records = vec![
//!     SurfaceRecord {
//!         radius: millimeter!(50.0),
//!         thickness: millimeter!(5.0),
//!         material: Material::Glass("N-BK7".into()),
//!         ..Default::default()
//!     },
//!     SurfaceRecord {
//!         radius: millimeter!(-50.0),
//!         thickness: millimeter!(45.0),
//!         ..Default::default()
//!     },
//!     SurfaceRecord::default(),
//! ];
//! let mut system = SequentialSystem::new(SystemType::Sequential, &records, &catalog).unwrap();
//! system.set_aperture(Aperture::new_entrance_pupil_diameter(millimeter!(10.0)).unwrap());
//! let traced = system.trace().unwrap();
//! assert_eq!(traced.len(), 5);
//! assert!(traced.iter().all(|t| t.is_complete()));
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod aperture;
pub mod error;
pub mod fields;
pub mod material;
pub mod ray;
pub mod rays;
pub mod refractive_index;
pub mod sequential_system;
pub mod surface;
pub mod utils;

pub use sequential_system::{SequentialSystem, SystemType, TraceAbort, TracedRay};
