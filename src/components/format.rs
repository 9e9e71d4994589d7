use std::fmt::Debug;

use crate::{
    components::{
        volume::{PlanarImg, PlanarImgBuilder},
        ElementKind, PlaneView, PlaneViewMut, RawPlane, RawPlaneMut, TypedArray,
    },
    errors::{Result, StackViewError},
};

/// Strategy binding one [ElementKind] to its native element type.
///
/// Implemented by exactly four formats, one per [ElementKind].
pub trait PixelFormat: sealed::Sealed + Debug + Send + Sync + 'static {
    type Element: Copy + Debug + PartialEq + Send + Sync + 'static;
    const KIND: ElementKind;

    /// Wrap a plane without copying it.
    ///
    /// Planes of another kind are rejected, never reinterpreted.
    fn wrap<'a>(raw: RawPlane<'a>, shape: (usize, usize))
        -> Result<PlaneView<'a, Self::Element>>;

    fn wrap_mut<'a>(
        raw: RawPlaneMut<'a>,
        shape: (usize, usize),
    ) -> Result<PlaneViewMut<'a, Self::Element>>;

    /// Bind [Self::KIND] to a builder holding every slice.
    fn link_type<V>(builder: PlanarImgBuilder<V>) -> Result<PlanarImg<V>>
    where
        V: TypedArray<Element = Self::Element>,
    {
        builder.link_type(Self::KIND)
    }
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! pixel_format {
    ($(#[$meta:meta])* $name:ident, $element:ty, $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl PixelFormat for $name {
            type Element = $element;
            const KIND: ElementKind = ElementKind::$variant;

            fn wrap<'a>(
                raw: RawPlane<'a>,
                shape: (usize, usize),
            ) -> Result<PlaneView<'a, $element>> {
                match raw {
                    RawPlane::$variant(data) => PlaneView::new(data, shape),
                    other => Err(StackViewError::KindMismatch {
                        expected: Self::KIND,
                        found: other.kind(),
                    }),
                }
            }

            fn wrap_mut<'a>(
                raw: RawPlaneMut<'a>,
                shape: (usize, usize),
            ) -> Result<PlaneViewMut<'a, $element>> {
                match raw {
                    RawPlaneMut::$variant(data) => PlaneViewMut::new(data, shape),
                    other => Err(StackViewError::KindMismatch {
                        expected: Self::KIND,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

pixel_format!(
    /// Unsigned 8 bit planes.
    UnsignedByte,
    u8,
    UInt8
);
pixel_format!(
    /// Unsigned 16 bit planes.
    UnsignedShort,
    u16,
    UInt16
);
pixel_format!(
    /// 32 bit float planes.
    Float,
    f32,
    Float32
);
pixel_format!(
    /// Packed ARGB planes, read elements through [crate::Argb].
    Argb32,
    u32,
    PackedArgb32
);
