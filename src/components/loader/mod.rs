mod any;
mod setup;

pub use any::StackImageLoader;
pub use setup::{ImgLoaderHint, SetupImgLoader, SetupImgLoaderMut};

use log::{debug, info, trace};
use std::{fmt::Debug, marker::PhantomData};

use crate::{
    components::{
        volume::{PlanarImgBuilder, PlanarVolume, PlanarVolumeMut},
        ElementKind, PixelFormat, PlaneStack, PlaneStackMut, StackGeometry,
    },
    errors::{Result, StackViewError},
};

/// Builds planar volumes over a borrowed plane stack.
///
/// One setup per stack channel, one timepoint per stack frame. Every
/// plane of the stack is read as `F`.
pub struct PlanarVolumeLoader<S, F: PixelFormat> {
    stack: S,
    geometry: StackGeometry,
    _format: PhantomData<F>,
}

impl<S, F: PixelFormat> Debug for PlanarVolumeLoader<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanarVolumeLoader")
            .field("geometry", &self.geometry)
            .field("kind", &F::KIND)
            .finish()
    }
}

impl<S: PlaneStack, F: PixelFormat> PlanarVolumeLoader<S, F> {
    /// Fails on stacks with an empty dimension or planes of another kind.
    pub fn new(stack: S) -> Result<Self> {
        let geometry = stack.geometry().validate()?;
        let kind = stack.element_kind();
        if kind != F::KIND {
            return Err(StackViewError::KindMismatch {
                expected: F::KIND,
                found: kind,
            });
        }
        let loader = Self {
            stack,
            geometry,
            _format: PhantomData,
        };
        info!("new {loader:?}");
        Ok(loader)
    }

    pub fn geometry(&self) -> StackGeometry {
        self.geometry
    }

    pub fn image_type(&self) -> ElementKind {
        F::KIND
    }

    pub fn num_setups(&self) -> usize {
        self.geometry.channels
    }

    pub fn num_timepoints(&self) -> usize {
        self.geometry.frames
    }

    fn check_setup(&self, setup_id: usize) -> Result<()> {
        if setup_id >= self.num_setups() {
            return Err(StackViewError::SetupOutOfRange {
                setup: setup_id,
                num_setups: self.num_setups(),
            });
        }
        Ok(())
    }

    pub fn get_setup_img_loader(&self, setup_id: usize) -> Result<SetupImgLoader<'_, S, F>> {
        self.check_setup(setup_id)?;
        Ok(SetupImgLoader::new(self, setup_id))
    }

    pub fn get_setup_img_loader_mut(
        &mut self,
        setup_id: usize,
    ) -> Result<SetupImgLoaderMut<'_, S, F>> {
        self.check_setup(setup_id)?;
        Ok(SetupImgLoaderMut::new(self, setup_id))
    }

    /// Setup loaders in setup id order.
    pub fn setup_img_loaders(&self) -> impl Iterator<Item = SetupImgLoader<'_, S, F>> {
        (0..self.num_setups()).map(move |setup_id| SetupImgLoader::new(self, setup_id))
    }

    /// Physical indexes of the slices of `(setup_id, timepoint)`, in slice order.
    ///
    /// The stack addresses planes 1-based, setups and timepoints are 0-based.
    fn plane_indexes(
        &self,
        setup_id: usize,
        timepoint: usize,
    ) -> Result<impl Iterator<Item = usize>> {
        if timepoint >= self.num_timepoints() {
            return Err(StackViewError::TimepointOutOfRange {
                timepoint,
                num_timepoints: self.num_timepoints(),
            });
        }
        let geometry = self.geometry;
        let (channel, frame) = (setup_id + 1, timepoint + 1);
        Ok((1..=geometry.slices).map(move |slice| geometry.stack_index(channel, slice, frame)))
    }

    fn volume(&self, setup_id: usize, timepoint: usize) -> Result<PlanarVolume<'_, F::Element>> {
        let shape = self.geometry.plane_shape();
        let mut builder = PlanarImgBuilder::new(self.geometry.volume_dimensions());
        for index in self.plane_indexes(setup_id, timepoint)? {
            let raw = self
                .stack
                .plane(index)
                .ok_or(StackViewError::MissingPlane(index))?;
            trace!("wrapping plane {index} as {}", F::KIND);
            builder.push(F::wrap(raw, shape)?)?;
        }
        let volume = F::link_type(builder)?;
        debug!("setup {setup_id} timepoint {timepoint}: {volume:?}");
        Ok(volume)
    }
}

impl<S: PlaneStackMut, F: PixelFormat> PlanarVolumeLoader<S, F> {
    fn volume_mut(
        &mut self,
        setup_id: usize,
        timepoint: usize,
    ) -> Result<PlanarVolumeMut<'_, F::Element>> {
        let indexes: Vec<usize> = self.plane_indexes(setup_id, timepoint)?.collect();
        let shape = self.geometry.plane_shape();
        let mut builder = PlanarImgBuilder::new(self.geometry.volume_dimensions());
        for raw in self.stack.planes_mut(&indexes)? {
            builder.push(F::wrap_mut(raw, shape)?)?;
        }
        let volume = F::link_type(builder)?;
        debug!("setup {setup_id} timepoint {timepoint}: {volume:?} (mutable)");
        Ok(volume)
    }
}
