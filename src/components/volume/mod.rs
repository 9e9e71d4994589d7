mod builder;

pub use builder::PlanarImgBuilder;

use rayon::prelude::*;
use std::fmt::Debug;

use crate::components::{ElementKind, PlaneView, PlaneViewMut, TypedArray, TypedArrayMut};

/// 3D image stored as one view per z slice.
///
/// Shape is fixed once built. Pixel access goes straight to the
/// borrowed plane buffers.
pub struct PlanarImg<V> {
    /// `[width, height, slices]`
    dimensions: [usize; 3],
    planes: Box<[V]>,
    kind: ElementKind,
}

/// Volume of shared plane views.
pub type PlanarVolume<'a, T> = PlanarImg<PlaneView<'a, T>>;
/// Volume of exclusive plane views, writes reach the stack.
pub type PlanarVolumeMut<'a, T> = PlanarImg<PlaneViewMut<'a, T>>;

impl<V> Debug for PlanarImg<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanarImg")
            .field("dimensions", &self.dimensions)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<V: TypedArray> PlanarImg<V> {
    fn new(dimensions: [usize; 3], planes: Box<[V]>, kind: ElementKind) -> Self {
        Self {
            dimensions,
            planes,
            kind,
        }
    }

    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions[0]
    }

    pub fn height(&self) -> usize {
        self.dimensions[1]
    }

    pub fn num_slices(&self) -> usize {
        self.dimensions[2]
    }

    /// Element type bound to this volume.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn plane(&self, slice: usize) -> Option<&V> {
        self.planes.get(slice)
    }

    pub fn planes(&self) -> std::slice::Iter<'_, V> {
        self.planes.iter()
    }

    fn locate(&self, position: [usize; 3]) -> Option<(usize, usize)> {
        let [x, y, z] = position;
        let [width, height, slices] = self.dimensions;
        (x < width && y < height && z < slices).then_some((z, y * width + x))
    }

    /// Element at `[x, y, z]`.
    pub fn get(&self, position: [usize; 3]) -> Option<&V::Element> {
        let (slice, index) = self.locate(position)?;
        self.planes[slice].as_slice().get(index)
    }

    pub fn into_planes(self) -> Box<[V]> {
        self.planes
    }
}

impl<V: TypedArrayMut> PlanarImg<V> {
    pub fn plane_mut(&mut self, slice: usize) -> Option<&mut V> {
        self.planes.get_mut(slice)
    }

    pub fn planes_mut(&mut self) -> std::slice::IterMut<'_, V> {
        self.planes.iter_mut()
    }

    pub fn get_mut(&mut self, position: [usize; 3]) -> Option<&mut V::Element> {
        let (slice, index) = self.locate(position)?;
        self.planes[slice].as_mut_slice().get_mut(index)
    }
}

impl<V: TypedArray + Sync> PlanarImg<V> {
    pub fn par_planes(&self) -> rayon::slice::Iter<'_, V> {
        self.planes[..].par_iter()
    }
}

impl<V: TypedArrayMut + Send> PlanarImg<V> {
    pub fn par_planes_mut(&mut self) -> rayon::slice::IterMut<'_, V> {
        self.planes[..].par_iter_mut()
    }
}
