#![warn(missing_docs)]
//! Module for handling sequential optical systems
//!
//! A [`SequentialSystem`] is an ordered stack of refracting surfaces which every ray crosses
//! in the same order. The system owns the derived global coordinates of its surfaces (the
//! prefix sums of the surface thicknesses) and orchestrates the full trace: a ray bundle is
//! generated from the field / aperture definition and every ray is sequentially refracted at
//! each surface. Failures of a single ray (no intersection, total internal reflection,
//! wavelength outside a dispersion model's domain) stop only that ray and are recorded
//! together with the surface index; they never abort the whole bundle.
use log::{debug, info, warn};
use num::Zero;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::millimeter};

use crate::{
    aperture::Aperture,
    error::{OptResult, OptraceError},
    fields::FieldData,
    material::GlassCatalog,
    nanometer,
    ray::Ray,
    rays::Rays,
    surface::{OpticalSurface, SurfaceRecord},
};

/// Type tag of an optical system description.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SystemType {
    /// strictly ordered surface list, every ray crosses all surfaces in the same order
    #[default]
    Sequential,
    /// non-sequential (splitting / branching) systems, not supported by this crate
    NonSequential,
}

/// Reason why the trace of a single ray was stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceAbort {
    /// index of the surface at which the trace was stopped
    pub surface_index: usize,
    /// the error which stopped the trace
    pub error: OptraceError,
}

/// Result of tracing a single ray through the surface stack.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedRay {
    ray: Ray,
    abort: Option<TraceAbort>,
}
impl TracedRay {
    /// Returns the traced [`Ray`] with its full position history.
    #[must_use]
    pub const fn ray(&self) -> &Ray {
        &self.ray
    }
    /// Returns the abort record if the trace of this ray was stopped prematurely.
    #[must_use]
    pub fn abort(&self) -> Option<&TraceAbort> {
        self.abort.as_ref()
    }
    /// Returns true if the ray passed all surfaces of the system.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.abort.is_none()
    }
}

/// A sequential optical system: an ordered, index-addressed stack of refracting surfaces
/// together with an aperture, a field definition and a list of sampling wavelengths.
///
/// The global z coordinates of the surfaces are derived state. They are recomputed eagerly
/// on every mutation of the surface list (or the entrance reference), so that a trace never
/// runs on stale coordinates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SequentialSystem {
    surfaces: Vec<OpticalSurface>,
    aperture: Aperture,
    field: FieldData,
    wavelengths: Vec<Length>,
    entrance_z: Length,
    nr_of_pupil_samples: usize,
}
impl SequentialSystem {
    /// Create a new [`SequentialSystem`] from a list of surface records.
    ///
    /// All material names are resolved against the given catalog during construction. The
    /// field definition defaults to a single on-axis field point, the wavelength table to a
    /// single sample at 550 nm and the pupil sampling to 5 points; all of them can be
    /// replaced afterwards.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given system type is not [`SystemType::Sequential`].
    ///  - a surface record is malformed (negative thickness, non-finite radius, ...).
    ///  - a material cannot be resolved against the catalog.
    ///
    /// In all of these cases no (partially constructed) system is returned.
    pub fn new(
        system_type: SystemType,
        records: &[SurfaceRecord],
        catalog: &GlassCatalog,
    ) -> OptResult<Self> {
        if system_type != SystemType::Sequential {
            return Err(OptraceError::SystemSetup(
                "only sequential optical systems are supported".into(),
            ));
        }
        let mut system = Self {
            surfaces: Vec::new(),
            aperture: Aperture::default(),
            field: FieldData::default(),
            wavelengths: vec![nanometer!(550.0)],
            entrance_z: Length::zero(),
            nr_of_pupil_samples: 5,
        };
        system.load(records, catalog)?;
        Ok(system)
    }
    /// Replace the surface list of this system.
    ///
    /// All records are resolved before the surface list is swapped, so a failed load leaves
    /// the previous state untouched. The global surface coordinates are recomputed
    /// immediately.
    ///
    /// # Errors
    ///
    /// This function will return an error if a surface record is malformed or a material
    /// cannot be resolved against the catalog.
    pub fn load(&mut self, records: &[SurfaceRecord], catalog: &GlassCatalog) -> OptResult<()> {
        let mut surfaces = Vec::with_capacity(records.len());
        for record in records {
            surfaces.push(OpticalSurface::new(record, catalog)?);
        }
        self.surfaces = surfaces;
        self.assign_coordinates();
        info!("loaded {} surfaces", self.surfaces.len());
        Ok(())
    }
    /// Assign the global z coordinate of each surface.
    ///
    /// The first surface sits at the entrance reference, each subsequent surface at the
    /// previous surface's coordinate plus the previous surface's thickness. The coordinates
    /// are always fully recomputed (no partial invalidation).
    fn assign_coordinates(&mut self) {
        let mut z = self.entrance_z;
        for surface in &mut self.surfaces {
            surface.set_z(z);
            z += surface.thickness();
        }
        debug!(
            "assigned global coordinates up to z = {:.4} mm",
            z.get::<millimeter>()
        );
    }
    /// Returns the ordered surfaces of this system (e.g. for drawing surface profiles).
    #[must_use]
    pub fn surfaces(&self) -> &[OpticalSurface] {
        &self.surfaces
    }
    /// Returns the aperture definition of this system.
    #[must_use]
    pub const fn aperture(&self) -> &Aperture {
        &self.aperture
    }
    /// Sets the aperture definition of this system.
    pub fn set_aperture(&mut self, aperture: Aperture) {
        self.aperture = aperture;
    }
    /// Returns the field definition of this system.
    #[must_use]
    pub const fn field(&self) -> &FieldData {
        &self.field
    }
    /// Sets the field definition of this system.
    pub fn set_field(&mut self, field: FieldData) {
        self.field = field;
    }
    /// Returns the sampling wavelengths of this system.
    #[must_use]
    pub fn wavelengths(&self) -> &[Length] {
        &self.wavelengths
    }
    /// Sets the sampling wavelengths of this system.
    ///
    /// # Errors
    ///
    /// This function will return an error if the list is empty or a wavelength is <= 0.0 or
    /// not finite.
    pub fn set_wavelengths(&mut self, wavelengths: Vec<Length>) -> OptResult<()> {
        if wavelengths.is_empty() {
            return Err(OptraceError::SystemSetup(
                "at least one wavelength must be given".into(),
            ));
        }
        if wavelengths
            .iter()
            .any(|w| w.is_zero() || w.is_sign_negative() || !w.is_finite())
        {
            return Err(OptraceError::SystemSetup(
                "all wavelengths must be >0.0 and finite".into(),
            ));
        }
        self.wavelengths = wavelengths;
        Ok(())
    }
    /// Returns the entrance reference z coordinate (0 by convention).
    #[must_use]
    pub fn entrance_z(&self) -> Length {
        self.entrance_z
    }
    /// Overrides the entrance reference z coordinate and recomputes all global surface
    /// coordinates.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given coordinate is not finite.
    pub fn set_entrance_z(&mut self, entrance_z: Length) -> OptResult<()> {
        if !entrance_z.is_finite() {
            return Err(OptraceError::SystemSetup(
                "entrance reference must be finite".into(),
            ));
        }
        self.entrance_z = entrance_z;
        self.assign_coordinates();
        Ok(())
    }
    /// Returns the number of pupil samples used during ray generation.
    #[must_use]
    pub const fn nr_of_pupil_samples(&self) -> usize {
        self.nr_of_pupil_samples
    }
    /// Sets the number of pupil samples used during ray generation.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given number is zero.
    pub fn set_pupil_sampling(&mut self, nr_of_pupil_samples: usize) -> OptResult<()> {
        if nr_of_pupil_samples == 0 {
            return Err(OptraceError::SystemSetup(
                "number of pupil samples must be >0".into(),
            ));
        }
        self.nr_of_pupil_samples = nr_of_pupil_samples;
        Ok(())
    }
    /// Generate the initial ray bundles of this system, one bundle per sampling wavelength.
    ///
    /// # Errors
    ///
    /// This function will return an error if the ray generation fails (see
    /// [`Rays::from_field_sampling`]).
    pub fn generate_rays(&self) -> OptResult<Vec<Rays>> {
        let mut bundles: Vec<Rays> = Vec::with_capacity(self.wavelengths.len());
        for wavelength in &self.wavelengths {
            bundles.push(Rays::from_field_sampling(
                &self.field,
                &self.aperture,
                self.nr_of_pupil_samples,
                self.entrance_z,
                *wavelength,
            )?);
        }
        Ok(bundles)
    }
    /// Trace a single ray through all surfaces of this system.
    ///
    /// The incident medium of the first surface is the system's default non-refractive
    /// medium (as stored in a newly created ray); behind each surface it is the surface's
    /// own material, carried along in the ray state. The first refraction failure stops the
    /// trace, marks the ray invalid and is returned together with the surface index. The
    /// partial position history of the ray is preserved.
    pub fn trace_ray(&self, ray: &mut Ray) -> Option<TraceAbort> {
        for (surface_index, surface) in self.surfaces.iter().enumerate() {
            let refraction = surface
                .refractive_index()
                .get_refractive_index(ray.wavelength())
                .and_then(|n2| ray.refract_on_surface(surface, n2));
            if let Err(error) = refraction {
                warn!("ray stopped at surface {surface_index}: {error}");
                ray.set_invalid();
                return Some(TraceAbort {
                    surface_index,
                    error,
                });
            }
        }
        None
    }
    /// Trace a bundle of rays through this system.
    ///
    /// Rays are traced independently: a stopped ray never affects the remaining rays of the
    /// bundle. The output order matches the input order.
    #[must_use]
    pub fn trace_bundle(&self, rays: Rays) -> Vec<TracedRay> {
        rays.into_iter()
            .map(|mut ray| {
                let abort = self.trace_ray(&mut ray);
                TracedRay { ray, abort }
            })
            .collect()
    }
    /// Trace a bundle of rays through this system in parallel.
    ///
    /// Since rays share no mutable state, the bundle is traced with a parallel map, one ray
    /// per task. The output order matches the input order.
    #[must_use]
    pub fn trace_bundle_par(&self, rays: Rays) -> Vec<TracedRay> {
        rays.into_vec()
            .into_par_iter()
            .map(|mut ray| {
                let abort = self.trace_ray(&mut ray);
                TracedRay { ray, abort }
            })
            .collect()
    }
    /// Generate and trace all ray bundles of this system.
    ///
    /// The returned list concatenates the traced bundles of all sampling wavelengths (in
    /// wavelength order); within a bundle the rays keep their field-major, pupil-minor
    /// generation order.
    ///
    /// # Errors
    ///
    /// This function will return an error if the ray generation fails.
    pub fn trace(&self) -> OptResult<Vec<TracedRay>> {
        let mut traced: Vec<TracedRay> = Vec::new();
        for rays in self.generate_rays()? {
            traced.extend(self.trace_bundle(rays));
        }
        self.log_trace_summary(&traced);
        Ok(traced)
    }
    /// Generate and trace all ray bundles of this system using a thread pool.
    ///
    /// This function returns the same result as [`trace`](Self::trace).
    ///
    /// # Errors
    ///
    /// This function will return an error if the ray generation fails.
    pub fn trace_parallel(&self) -> OptResult<Vec<TracedRay>> {
        let mut traced: Vec<TracedRay> = Vec::new();
        for rays in self.generate_rays()? {
            traced.extend(self.trace_bundle_par(rays));
        }
        self.log_trace_summary(&traced);
        Ok(traced)
    }
    fn log_trace_summary(&self, traced: &[TracedRay]) {
        let nr_of_stopped = traced.iter().filter(|t| !t.is_complete()).count();
        info!(
            "traced {} rays through {} surfaces ({} stopped)",
            traced.len(),
            self.surfaces.len(),
            nr_of_stopped
        );
    }
}
