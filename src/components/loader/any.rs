use crate::{
    components::{
        loader::PlanarVolumeLoader, Argb32, ElementKind, Float, PlaneStack, StackGeometry,
        UnsignedByte, UnsignedShort,
    },
    errors::Result,
};

/// Loader over a stack whose element kind is only known at runtime.
#[derive(Debug)]
pub enum StackImageLoader<S> {
    UInt8(PlanarVolumeLoader<S, UnsignedByte>),
    UInt16(PlanarVolumeLoader<S, UnsignedShort>),
    Float32(PlanarVolumeLoader<S, Float>),
    PackedArgb32(PlanarVolumeLoader<S, Argb32>),
}

macro_rules! dispatch {
    ($self:ident, $loader:ident => $body:expr) => {
        match $self {
            StackImageLoader::UInt8($loader) => $body,
            StackImageLoader::UInt16($loader) => $body,
            StackImageLoader::Float32($loader) => $body,
            StackImageLoader::PackedArgb32($loader) => $body,
        }
    };
}

impl<S: PlaneStack> StackImageLoader<S> {
    /// Pick the pixel format from the kind the stack reports.
    pub fn open(stack: S) -> Result<Self> {
        match stack.element_kind() {
            ElementKind::UInt8 => Self::unsigned_byte(stack),
            ElementKind::UInt16 => Self::unsigned_short(stack),
            ElementKind::Float32 => Self::float(stack),
            ElementKind::PackedArgb32 => Self::argb(stack),
        }
    }

    pub fn unsigned_byte(stack: S) -> Result<Self> {
        Ok(Self::UInt8(PlanarVolumeLoader::new(stack)?))
    }

    pub fn unsigned_short(stack: S) -> Result<Self> {
        Ok(Self::UInt16(PlanarVolumeLoader::new(stack)?))
    }

    pub fn float(stack: S) -> Result<Self> {
        Ok(Self::Float32(PlanarVolumeLoader::new(stack)?))
    }

    pub fn argb(stack: S) -> Result<Self> {
        Ok(Self::PackedArgb32(PlanarVolumeLoader::new(stack)?))
    }

    pub fn image_type(&self) -> ElementKind {
        dispatch!(self, loader => loader.image_type())
    }

    pub fn geometry(&self) -> StackGeometry {
        dispatch!(self, loader => loader.geometry())
    }

    pub fn num_setups(&self) -> usize {
        dispatch!(self, loader => loader.num_setups())
    }

    pub fn num_timepoints(&self) -> usize {
        dispatch!(self, loader => loader.num_timepoints())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{ImageStack, PlaneBuffer, TypedArray},
        errors::StackViewError,
        Argb,
    };
    use rstest::rstest;

    #[rstest]
    #[case(ElementKind::UInt8)]
    #[case(ElementKind::UInt16)]
    #[case(ElementKind::Float32)]
    #[case(ElementKind::PackedArgb32)]
    fn open_follows_stack_kind(#[case] kind: ElementKind) {
        let stack = ImageStack::zeroed(StackGeometry::new(3, 2, 2, 2, 1), kind).unwrap();
        let loader = StackImageLoader::open(&stack).unwrap();
        assert_eq!(loader.image_type(), kind);
        assert_eq!(loader.num_setups(), 2);
        assert_eq!(loader.num_timepoints(), 1);
        assert_eq!(loader.geometry(), stack.geometry());
    }

    #[rstest]
    fn explicit_format_must_match() {
        let stack =
            ImageStack::zeroed(StackGeometry::new(1, 1, 1, 1, 1), ElementKind::Float32).unwrap();
        assert!(matches!(
            StackImageLoader::unsigned_short(&stack),
            Err(StackViewError::KindMismatch { .. })
        ));
    }

    #[rstest]
    fn argb_volume() {
        let color = Argb::new(0xff, 1, 2, 3);
        let stack = ImageStack::from_planes(
            StackGeometry::new(2, 1, 1, 1, 1),
            ElementKind::PackedArgb32,
            vec![PlaneBuffer::from(vec![0u32, color.into()])],
        )
        .unwrap();
        match StackImageLoader::open(&stack).unwrap() {
            StackImageLoader::PackedArgb32(loader) => {
                let volume = loader
                    .get_setup_img_loader(0)
                    .unwrap()
                    .get_image(0, &[])
                    .unwrap();
                let pixel = Argb::from(*volume.get([1, 0, 0]).unwrap());
                assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (1, 2, 3));
                assert_eq!(volume.plane(0).unwrap().array().unwrap().dim(), (1, 2));
            }
            other => panic!("unexpected loader {other:?}"),
        }
    }
}
