use crate::{
    components::{volume::PlanarImg, ElementKind, TypedArray},
    errors::{Result, StackViewError},
};

/// Collects per slice views of a volume before its element type is bound.
///
/// Only [crate::PixelFormat::link_type] turns a builder into a
/// [PlanarImg], and only once every slice is present.
#[derive(Debug)]
pub struct PlanarImgBuilder<V> {
    dimensions: [usize; 3],
    planes: Vec<V>,
}

impl<V: TypedArray> PlanarImgBuilder<V> {
    /// Empty builder for a `[width, height, slices]` volume.
    pub fn new(dimensions: [usize; 3]) -> Self {
        Self {
            dimensions,
            planes: Vec::with_capacity(dimensions[2]),
        }
    }

    /// Append the view of the next slice.
    pub fn push(&mut self, plane: V) -> Result<()> {
        let [width, height, slices] = self.dimensions;
        if self.planes.len() == slices {
            return Err(StackViewError::VolumeFull(slices));
        }
        if plane.shape() != (width, height) {
            return Err(StackViewError::PlaneLength {
                expected: width * height,
                found: plane.as_slice().len(),
            });
        }
        self.planes.push(plane);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub(crate) fn link_type(self, kind: ElementKind) -> Result<PlanarImg<V>> {
        let slices = self.dimensions[2];
        if self.planes.len() != slices {
            return Err(StackViewError::IncompleteVolume {
                expected: slices,
                found: self.planes.len(),
            });
        }
        Ok(PlanarImg::new(
            self.dimensions,
            self.planes.into_boxed_slice(),
            kind,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{PixelFormat, PlaneView, UnsignedByte};
    use rstest::rstest;

    #[rstest]
    fn incomplete_volume_is_not_linked() {
        let data = [0u8; 4];
        let mut builder = PlanarImgBuilder::new([2, 2, 2]);
        builder.push(PlaneView::new(&data, (2, 2)).unwrap()).unwrap();
        assert!(matches!(
            UnsignedByte::link_type(builder),
            Err(StackViewError::IncompleteVolume {
                expected: 2,
                found: 1
            })
        ));
    }

    #[rstest]
    fn rejects_extra_slice() {
        let data = [0u8; 4];
        let mut builder = PlanarImgBuilder::new([2, 2, 1]);
        builder.push(PlaneView::new(&data, (2, 2)).unwrap()).unwrap();
        assert!(matches!(
            builder.push(PlaneView::new(&data, (2, 2)).unwrap()),
            Err(StackViewError::VolumeFull(1))
        ));
        assert_eq!(builder.len(), 1);
    }

    #[rstest]
    fn rejects_foreign_shape() {
        let data = [0u8; 6];
        let mut builder = PlanarImgBuilder::new([2, 2, 1]);
        assert!(matches!(
            builder.push(PlaneView::new(&data, (3, 2)).unwrap()),
            Err(StackViewError::PlaneLength {
                expected: 4,
                found: 6
            })
        ));
        assert!(builder.is_empty());
    }
}
