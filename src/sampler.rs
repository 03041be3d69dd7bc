//! Orbit path sampling for display.
//!
//! The sampler walks the orbit by true anomaly in equal angular steps,
//! which spreads the points evenly around the focus and keeps the drawn
//! curve smooth at both ends of an eccentric orbit. This is a different
//! parametrization from the solver's, which walks by mean anomaly (time),
//! and it is not meant for physical time sampling.

use core::f64::consts::TAU;
use core::iter::FusedIterator;

use glam::DVec3;

use crate::OrbitTrait;

/// Samples the orbit path as a closed polyline of `segment_count + 1`
/// points.
///
/// Point `i` sits at true anomaly `i / segment_count * 2π`, at the distance
/// given by the polar conic equation `a(1 - e²) / (1 + e cos θ)`, tilted into
/// the scene frame by the same transform the solver uses. The last point is
/// an exact copy of the first, so the loop closes without a seam.
///
/// A `segment_count` of zero returns the single periapsis point.
///
/// # Performance
/// Cost and memory grow linearly with `segment_count`. Somewhere between 64
/// and 512 segments is usually smooth enough for a planet's orbit.
///
/// # Example
/// ```
/// use orrery_sim::{sample, OrbitalElements};
///
/// let elements = OrbitalElements::new(5.0, 0.3, 0.4, 1.2, 2.0, 0.0, 1.0);
/// let points = sample(&elements, 128);
///
/// assert_eq!(points.len(), 129);
/// assert_eq!(points.first(), points.last());
/// ```
pub fn sample(elements: &impl OrbitTrait, segment_count: usize) -> Vec<DVec3> {
    sample_iter(elements, segment_count).collect()
}

/// Lazily samples the orbit path; see [`sample`].
///
/// Useful for writing the points straight into a vertex buffer without an
/// intermediate `Vec`.
///
/// # Example
/// ```
/// use orrery_sim::{sample_iter, OrbitalElements};
///
/// let elements = OrbitalElements::default();
/// let mut buffer: Vec<[f32; 3]> = Vec::new();
///
/// buffer.extend(sample_iter(&elements, 64).map(|p| p.as_vec3().to_array()));
///
/// assert_eq!(buffer.len(), 65);
/// ```
pub fn sample_iter<O: OrbitTrait>(elements: &O, segment_count: usize) -> OrbitPath<'_, O> {
    OrbitPath {
        elements,
        segment_count,
        next: 0,
        end: segment_count + 1,
    }
}

/// An iterator over the points of a sampled orbit path.
///
/// Created by [`sample_iter`].
#[derive(Clone, Debug)]
pub struct OrbitPath<'a, O: OrbitTrait> {
    elements: &'a O,
    segment_count: usize,
    next: usize,
    end: usize,
}

impl<O: OrbitTrait> OrbitPath<'_, O> {
    fn point(&self, index: usize) -> DVec3 {
        self.elements.get_position_at_true_anomaly(self.angle_at(index))
    }

    fn angle_at(&self, index: usize) -> f64 {
        if self.segment_count == 0 {
            return 0.0;
        }

        // The closing point reuses angle 0 instead of 2π
        let index = index % self.segment_count;
        index as f64 / self.segment_count as f64 * TAU
    }
}

impl<O: OrbitTrait> Iterator for OrbitPath<'_, O> {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.next >= self.end {
            return None;
        }

        let point = self.point(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<O: OrbitTrait> DoubleEndedIterator for OrbitPath<'_, O> {
    fn next_back(&mut self) -> Option<DVec3> {
        if self.next >= self.end {
            return None;
        }

        self.end -= 1;
        Some(self.point(self.end))
    }
}

impl<O: OrbitTrait> ExactSizeIterator for OrbitPath<'_, O> {}

impl<O: OrbitTrait> FusedIterator for OrbitPath<'_, O> {}
