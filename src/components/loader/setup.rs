use crate::{
    components::{
        loader::PlanarVolumeLoader,
        volume::{PlanarVolume, PlanarVolumeMut},
        ElementKind, PixelFormat, PlaneStack, PlaneStackMut,
    },
    errors::Result,
};

/// Hints accepted by the image getters.
///
/// Volumes are always views over the stack, hints change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum ImgLoaderHint {
    LoadCompletely,
}

/// Loader of one setup (stack channel).
#[derive(Debug)]
pub struct SetupImgLoader<'l, S, F: PixelFormat> {
    loader: &'l PlanarVolumeLoader<S, F>,
    setup_id: usize,
}

impl<S, F: PixelFormat> Clone for SetupImgLoader<'_, S, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, F: PixelFormat> Copy for SetupImgLoader<'_, S, F> {}

impl<'l, S: PlaneStack, F: PixelFormat> SetupImgLoader<'l, S, F> {
    pub(super) fn new(loader: &'l PlanarVolumeLoader<S, F>, setup_id: usize) -> Self {
        Self { loader, setup_id }
    }

    pub fn setup_id(&self) -> usize {
        self.setup_id
    }

    /// Volume of `timepoint`, built anew on every call.
    pub fn get_image(
        &self,
        timepoint: usize,
        _hints: &[ImgLoaderHint],
    ) -> Result<PlanarVolume<'l, F::Element>> {
        self.loader.volume(self.setup_id, timepoint)
    }

    pub fn get_image_type(&self) -> ElementKind {
        F::KIND
    }
}

/// Loader of one setup handing out writable volumes.
#[derive(Debug)]
pub struct SetupImgLoaderMut<'l, S, F: PixelFormat> {
    loader: &'l mut PlanarVolumeLoader<S, F>,
    setup_id: usize,
}

impl<'l, S: PlaneStack, F: PixelFormat> SetupImgLoaderMut<'l, S, F> {
    pub(super) fn new(loader: &'l mut PlanarVolumeLoader<S, F>, setup_id: usize) -> Self {
        Self { loader, setup_id }
    }

    pub fn setup_id(&self) -> usize {
        self.setup_id
    }

    pub fn get_image_type(&self) -> ElementKind {
        F::KIND
    }

    /// Shared volume of `timepoint`.
    pub fn get_image(
        &self,
        timepoint: usize,
        _hints: &[ImgLoaderHint],
    ) -> Result<PlanarVolume<'_, F::Element>> {
        self.loader.volume(self.setup_id, timepoint)
    }
}

impl<S: PlaneStackMut, F: PixelFormat> SetupImgLoaderMut<'_, S, F> {
    /// Volume of `timepoint` whose writes land in the stack's planes.
    pub fn get_image_mut(
        &mut self,
        timepoint: usize,
        _hints: &[ImgLoaderHint],
    ) -> Result<PlanarVolumeMut<'_, F::Element>> {
        self.loader.volume_mut(self.setup_id, timepoint)
    }
}
