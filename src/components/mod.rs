pub mod format;
pub mod kind;
pub mod loader;
pub mod plane;
pub mod stack;
pub mod view;
pub mod volume;

pub use format::{Argb32, Float, PixelFormat, UnsignedByte, UnsignedShort};
pub use kind::{Argb, ElementKind};
pub use loader::{
    ImgLoaderHint, PlanarVolumeLoader, SetupImgLoader, SetupImgLoaderMut, StackImageLoader,
};
pub use plane::{RawPlane, RawPlaneMut};
pub use stack::{ImageStack, PlaneBuffer, PlaneStack, PlaneStackMut, StackGeometry};
pub use view::{PlaneView, PlaneViewMut, TypedArray, TypedArrayMut};
pub use volume::{PlanarImg, PlanarImgBuilder, PlanarVolume, PlanarVolumeMut};
