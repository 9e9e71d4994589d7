//! Zero-copy planar volumes over channel/slice/frame plane stacks.
//!
//! A [PlaneStack] owns 2D planes addressed by 1-based `(channel, slice, frame)`.
//! A [PlanarVolumeLoader] borrows it and, per `(setup, timepoint)`, wraps the
//! planes of every z slice into a [PlanarVolume] without copying pixels.

mod components;
mod errors;

pub use components::{
    Argb, Argb32, ElementKind, Float, ImageStack, ImgLoaderHint, PixelFormat, PlanarImg,
    PlanarImgBuilder, PlanarVolume, PlanarVolumeLoader, PlanarVolumeMut, PlaneBuffer, PlaneStack,
    PlaneStackMut, PlaneView, PlaneViewMut, RawPlane, RawPlaneMut, SetupImgLoader,
    SetupImgLoaderMut, StackGeometry, StackImageLoader, TypedArray, TypedArrayMut, UnsignedByte,
    UnsignedShort,
};
pub use errors::{Result, StackViewError};
