use itertools::Itertools;

use crate::{
    components::{ElementKind, RawPlane, RawPlaneMut},
    errors::{Result, StackViewError},
};

/// Shape of a channel/slice/frame hyperstack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct StackGeometry {
    pub width: usize,
    pub height: usize,
    pub slices: usize,
    pub channels: usize,
    pub frames: usize,
}

impl StackGeometry {
    pub fn new(width: usize, height: usize, slices: usize, channels: usize, frames: usize) -> Self {
        Self {
            width,
            height,
            slices,
            channels,
            frames,
        }
    }

    /// Fails if any dimension is empty or the element and plane counts
    /// overflow `usize`.
    pub fn validate(self) -> Result<Self> {
        self.sizes().map(|_| self)
    }

    /// `(plane_len, num_planes)` of a valid geometry.
    fn sizes(self) -> Result<(usize, usize)> {
        let Self {
            width,
            height,
            slices,
            channels,
            frames,
        } = self;
        let invalid = StackViewError::InvalidGeometry(self);
        if [width, height, slices, channels, frames].contains(&0) {
            return Err(invalid);
        }
        self.plane_len().zip(self.num_planes()).ok_or(invalid)
    }

    /// Plane shape as (width, height).
    pub fn plane_shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Elements per plane, `None` on overflow.
    pub fn plane_len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// `[width, height, slices]` of one (channel, frame) volume.
    pub fn volume_dimensions(&self) -> [usize; 3] {
        [self.width, self.height, self.slices]
    }

    /// Planes in the whole stack, `None` on overflow.
    pub fn num_planes(&self) -> Option<usize> {
        self.channels
            .checked_mul(self.slices)?
            .checked_mul(self.frames)
    }

    /// Whether 1-based `(channel, slice, frame)` lies inside the stack.
    pub fn contains(&self, channel: usize, slice: usize, frame: usize) -> bool {
        (1..=self.channels).contains(&channel)
            && (1..=self.slices).contains(&slice)
            && (1..=self.frames).contains(&frame)
    }

    /// Physical 0-based plane index of 1-based `(channel, slice, frame)`.
    ///
    /// Planes are ordered channel fastest, then slice, then frame.
    /// Coordinates must satisfy [Self::contains].
    pub fn stack_index(&self, channel: usize, slice: usize, frame: usize) -> usize {
        debug_assert!(self.contains(channel, slice, frame));
        (frame - 1) * self.channels * self.slices + (slice - 1) * self.channels + (channel - 1)
    }
}

/// Externally owned store of 2D planes.
pub trait PlaneStack {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn num_slices(&self) -> usize;
    fn num_channels(&self) -> usize;
    fn num_frames(&self) -> usize;
    /// Kind shared by every plane of the stack.
    fn element_kind(&self) -> ElementKind;
    /// Plane at a physical index, see [StackGeometry::stack_index].
    fn plane(&self, index: usize) -> Option<RawPlane<'_>>;

    fn geometry(&self) -> StackGeometry {
        StackGeometry::new(
            self.width(),
            self.height(),
            self.num_slices(),
            self.num_channels(),
            self.num_frames(),
        )
    }

    /// Plane at 1-based `(channel, slice, frame)`.
    fn plane_buffer(&self, channel: usize, slice: usize, frame: usize) -> Option<RawPlane<'_>> {
        let geometry = self.geometry();
        if !geometry.contains(channel, slice, frame) {
            return None;
        }
        self.plane(geometry.stack_index(channel, slice, frame))
    }
}

pub trait PlaneStackMut: PlaneStack {
    /// Exclusive borrows of several planes at once, in the order of `indexes`.
    fn planes_mut(&mut self, indexes: &[usize]) -> Result<Vec<RawPlaneMut<'_>>>;
}

impl<S: PlaneStack + ?Sized> PlaneStack for &S {
    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn num_slices(&self) -> usize {
        (**self).num_slices()
    }
    fn num_channels(&self) -> usize {
        (**self).num_channels()
    }
    fn num_frames(&self) -> usize {
        (**self).num_frames()
    }
    fn element_kind(&self) -> ElementKind {
        (**self).element_kind()
    }
    fn plane(&self, index: usize) -> Option<RawPlane<'_>> {
        (**self).plane(index)
    }
}

impl<S: PlaneStack + ?Sized> PlaneStack for &mut S {
    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn num_slices(&self) -> usize {
        (**self).num_slices()
    }
    fn num_channels(&self) -> usize {
        (**self).num_channels()
    }
    fn num_frames(&self) -> usize {
        (**self).num_frames()
    }
    fn element_kind(&self) -> ElementKind {
        (**self).element_kind()
    }
    fn plane(&self, index: usize) -> Option<RawPlane<'_>> {
        (**self).plane(index)
    }
}

impl<S: PlaneStackMut + ?Sized> PlaneStackMut for &mut S {
    fn planes_mut(&mut self, indexes: &[usize]) -> Result<Vec<RawPlaneMut<'_>>> {
        (**self).planes_mut(indexes)
    }
}

/// Owned native storage of one plane.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneBuffer {
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    Float32(Vec<f32>),
    PackedArgb32(Vec<u32>),
}

impl PlaneBuffer {
    pub fn zeroed(kind: ElementKind, len: usize) -> Self {
        match kind {
            ElementKind::UInt8 => PlaneBuffer::UInt8(vec![0; len]),
            ElementKind::UInt16 => PlaneBuffer::UInt16(vec![0; len]),
            ElementKind::Float32 => PlaneBuffer::Float32(vec![0.; len]),
            ElementKind::PackedArgb32 => PlaneBuffer::PackedArgb32(vec![0; len]),
        }
    }

    pub fn as_raw(&self) -> RawPlane<'_> {
        match self {
            PlaneBuffer::UInt8(data) => RawPlane::UInt8(data),
            PlaneBuffer::UInt16(data) => RawPlane::UInt16(data),
            PlaneBuffer::Float32(data) => RawPlane::Float32(data),
            PlaneBuffer::PackedArgb32(data) => RawPlane::PackedArgb32(data),
        }
    }

    pub fn as_raw_mut(&mut self) -> RawPlaneMut<'_> {
        match self {
            PlaneBuffer::UInt8(data) => RawPlaneMut::UInt8(data),
            PlaneBuffer::UInt16(data) => RawPlaneMut::UInt16(data),
            PlaneBuffer::Float32(data) => RawPlaneMut::Float32(data),
            PlaneBuffer::PackedArgb32(data) => RawPlaneMut::PackedArgb32(data),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.as_raw().kind()
    }

    pub fn len(&self) -> usize {
        self.as_raw().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for PlaneBuffer {
    fn from(value: Vec<u8>) -> Self {
        PlaneBuffer::UInt8(value)
    }
}

impl From<Vec<u16>> for PlaneBuffer {
    fn from(value: Vec<u16>) -> Self {
        PlaneBuffer::UInt16(value)
    }
}

impl From<Vec<f32>> for PlaneBuffer {
    fn from(value: Vec<f32>) -> Self {
        PlaneBuffer::Float32(value)
    }
}

impl From<Vec<u32>> for PlaneBuffer {
    fn from(value: Vec<u32>) -> Self {
        PlaneBuffer::PackedArgb32(value)
    }
}

fn check_plane(plane: &PlaneBuffer, kind: ElementKind, plane_len: usize) -> Result<()> {
    if plane.kind() != kind {
        return Err(StackViewError::KindMismatch {
            expected: kind,
            found: plane.kind(),
        });
    }
    if plane.len() != plane_len {
        return Err(StackViewError::PlaneLength {
            expected: plane_len,
            found: plane.len(),
        });
    }
    Ok(())
}

/// In memory hyperstack, planes in [StackGeometry::stack_index] order.
#[derive(Debug, Clone)]
pub struct ImageStack {
    geometry: StackGeometry,
    kind: ElementKind,
    planes: Vec<PlaneBuffer>,
}

impl ImageStack {
    /// Stack with every plane set to zero.
    pub fn zeroed(geometry: StackGeometry, kind: ElementKind) -> Result<Self> {
        let (plane_len, num_planes) = geometry.sizes()?;
        let planes = (0..num_planes)
            .map(|_| PlaneBuffer::zeroed(kind, plane_len))
            .collect();
        Ok(Self {
            geometry,
            kind,
            planes,
        })
    }

    /// Stack over existing planes.
    ///
    /// Every plane must be of `kind` and hold `width * height` elements.
    pub fn from_planes(
        geometry: StackGeometry,
        kind: ElementKind,
        planes: Vec<PlaneBuffer>,
    ) -> Result<Self> {
        let (plane_len, num_planes) = geometry.sizes()?;
        if planes.len() != num_planes {
            return Err(StackViewError::PlaneCount {
                expected: num_planes,
                found: planes.len(),
            });
        }
        planes
            .iter()
            .try_for_each(|plane| check_plane(plane, kind, plane_len))?;
        Ok(Self {
            geometry,
            kind,
            planes,
        })
    }

    fn index_of(&self, channel: usize, slice: usize, frame: usize) -> Option<usize> {
        self.geometry
            .contains(channel, slice, frame)
            .then(|| self.geometry.stack_index(channel, slice, frame))
    }

    /// Plane at 1-based `(channel, slice, frame)`.
    pub fn plane_at(&self, channel: usize, slice: usize, frame: usize) -> Option<&PlaneBuffer> {
        self.index_of(channel, slice, frame)
            .and_then(|index| self.planes.get(index))
    }

    /// Writable elements of the plane at 1-based `(channel, slice, frame)`.
    pub fn plane_at_mut(
        &mut self,
        channel: usize,
        slice: usize,
        frame: usize,
    ) -> Option<RawPlaneMut<'_>> {
        self.index_of(channel, slice, frame)
            .and_then(|index| self.planes.get_mut(index))
            .map(PlaneBuffer::as_raw_mut)
    }

    /// Swap in a new plane at 1-based `(channel, slice, frame)` and return
    /// the old one.
    ///
    /// The new plane must match the stack's kind and plane length.
    pub fn replace_plane(
        &mut self,
        channel: usize,
        slice: usize,
        frame: usize,
        plane: PlaneBuffer,
    ) -> Result<PlaneBuffer> {
        let (plane_len, _) = self.geometry.sizes()?;
        check_plane(&plane, self.kind, plane_len)?;
        let index = self
            .index_of(channel, slice, frame)
            .ok_or(StackViewError::PlaneOutOfRange {
                channel,
                slice,
                frame,
            })?;
        let slot = self
            .planes
            .get_mut(index)
            .ok_or(StackViewError::MissingPlane(index))?;
        Ok(std::mem::replace(slot, plane))
    }

    pub fn into_planes(self) -> Vec<PlaneBuffer> {
        self.planes
    }
}

impl PlaneStack for ImageStack {
    fn width(&self) -> usize {
        self.geometry.width
    }
    fn height(&self) -> usize {
        self.geometry.height
    }
    fn num_slices(&self) -> usize {
        self.geometry.slices
    }
    fn num_channels(&self) -> usize {
        self.geometry.channels
    }
    fn num_frames(&self) -> usize {
        self.geometry.frames
    }
    fn element_kind(&self) -> ElementKind {
        self.kind
    }
    fn plane(&self, index: usize) -> Option<RawPlane<'_>> {
        self.planes.get(index).map(PlaneBuffer::as_raw)
    }
}

impl PlaneStackMut for ImageStack {
    fn planes_mut(&mut self, indexes: &[usize]) -> Result<Vec<RawPlaneMut<'_>>> {
        if let Some(index) = indexes.iter().duplicates().next() {
            return Err(StackViewError::DuplicatePlane(*index));
        }
        let mut slots: Vec<Option<&mut PlaneBuffer>> = self.planes.iter_mut().map(Some).collect();
        indexes
            .iter()
            .map(|&index| {
                slots
                    .get_mut(index)
                    .and_then(Option::take)
                    .map(PlaneBuffer::as_raw_mut)
                    .ok_or(StackViewError::MissingPlane(index))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case((1, 1, 1), 0)]
    #[case((2, 1, 1), 1)]
    #[case((1, 2, 1), 3)]
    #[case((3, 2, 1), 5)]
    #[case((1, 1, 2), 12)]
    #[case((3, 4, 2), 23)]
    fn channel_fastest_order(#[case] czt: (usize, usize, usize), #[case] index: usize) {
        let geometry = StackGeometry::new(2, 2, 4, 3, 2);
        assert_eq!(geometry.stack_index(czt.0, czt.1, czt.2), index);
    }

    #[rstest]
    #[case(StackGeometry::new(0, 1, 1, 1, 1))]
    #[case(StackGeometry::new(1, 0, 1, 1, 1))]
    #[case(StackGeometry::new(1, 1, 0, 1, 1))]
    #[case(StackGeometry::new(1, 1, 1, 0, 1))]
    #[case(StackGeometry::new(1, 1, 1, 1, 0))]
    fn empty_dimension_is_invalid(#[case] geometry: StackGeometry) {
        assert!(matches!(
            geometry.validate(),
            Err(StackViewError::InvalidGeometry(_))
        ));
    }

    #[rstest]
    #[case(StackGeometry::new(usize::MAX / 2 + 1, 2, 1, 1, 1))]
    #[case(StackGeometry::new(2, usize::MAX, 1, 1, 1))]
    #[case(StackGeometry::new(1, 1, usize::MAX / 2 + 1, 2, 1))]
    #[case(StackGeometry::new(1, 1, 2, 2, usize::MAX / 3))]
    fn overflowing_geometry_is_invalid(#[case] geometry: StackGeometry) {
        assert!(matches!(
            geometry.validate(),
            Err(StackViewError::InvalidGeometry(found)) if found == geometry
        ));
        assert!(matches!(
            ImageStack::zeroed(geometry, ElementKind::UInt8),
            Err(StackViewError::InvalidGeometry(_))
        ));
        assert!(matches!(
            ImageStack::from_planes(geometry, ElementKind::UInt8, vec![]),
            Err(StackViewError::InvalidGeometry(_))
        ));
    }

    #[rstest]
    #[case(StackGeometry::new(4, 3, 2, 5, 7), Some(12), Some(70))]
    #[case(StackGeometry::new(usize::MAX, 2, 1, 1, 1), None, Some(1))]
    #[case(StackGeometry::new(1, 1, usize::MAX, 1, 2), Some(1), None)]
    fn counts_are_checked(
        #[case] geometry: StackGeometry,
        #[case] plane_len: Option<usize>,
        #[case] num_planes: Option<usize>,
    ) {
        assert_eq!(geometry.plane_len(), plane_len);
        assert_eq!(geometry.num_planes(), num_planes);
    }

    #[rstest]
    fn plane_buffer_is_one_based() {
        let geometry = StackGeometry::new(1, 1, 2, 2, 1);
        let planes = (0..4u8).map(|value| PlaneBuffer::from(vec![value])).collect();
        let stack = ImageStack::from_planes(geometry, ElementKind::UInt8, planes).unwrap();

        assert!(matches!(
            stack.plane_buffer(2, 1, 1),
            Some(RawPlane::UInt8([1]))
        ));
        assert!(matches!(
            stack.plane_buffer(1, 2, 1),
            Some(RawPlane::UInt8([2]))
        ));
        assert!(stack.plane_buffer(0, 1, 1).is_none());
        assert!(stack.plane_buffer(1, 1, 2).is_none());
        assert_eq!(stack.plane_at(2, 2, 1), Some(&PlaneBuffer::UInt8(vec![3])));
    }

    #[rstest]
    fn from_planes_checks_planes() {
        let geometry = StackGeometry::new(2, 1, 1, 1, 1);
        assert!(matches!(
            ImageStack::from_planes(geometry, ElementKind::UInt8, vec![]),
            Err(StackViewError::PlaneCount {
                expected: 1,
                found: 0
            })
        ));
        assert!(matches!(
            ImageStack::from_planes(geometry, ElementKind::UInt8, vec![vec![0u16, 0].into()]),
            Err(StackViewError::KindMismatch { .. })
        ));
        assert!(matches!(
            ImageStack::from_planes(geometry, ElementKind::UInt8, vec![vec![0u8].into()]),
            Err(StackViewError::PlaneLength {
                expected: 2,
                found: 1
            })
        ));
    }

    #[rstest]
    fn planes_mut_are_disjoint() {
        let mut stack =
            ImageStack::zeroed(StackGeometry::new(1, 1, 3, 1, 1), ElementKind::UInt16).unwrap();
        {
            let planes = stack.planes_mut(&[2, 0]).unwrap();
            assert_eq!(planes.len(), 2);
            for (value, plane) in planes.into_iter().enumerate() {
                if let RawPlaneMut::UInt16(data) = plane {
                    data[0] = value as u16 + 7;
                }
            }
        }
        assert_eq!(stack.plane_at(1, 3, 1), Some(&PlaneBuffer::UInt16(vec![7])));
        assert_eq!(stack.plane_at(1, 1, 1), Some(&PlaneBuffer::UInt16(vec![8])));
        assert!(matches!(
            stack.planes_mut(&[1, 1]),
            Err(StackViewError::DuplicatePlane(1))
        ));
        assert!(matches!(
            stack.planes_mut(&[3]),
            Err(StackViewError::MissingPlane(3))
        ));
    }

    #[rstest]
    fn plane_at_mut_writes_elements() {
        let mut stack =
            ImageStack::zeroed(StackGeometry::new(2, 1, 1, 2, 1), ElementKind::Float32).unwrap();
        match stack.plane_at_mut(2, 1, 1) {
            Some(RawPlaneMut::Float32(data)) => data[1] = 4.5,
            other => panic!("unexpected plane {other:?}"),
        }
        assert!(stack.plane_at_mut(3, 1, 1).is_none());
        assert_eq!(
            stack.plane_at(2, 1, 1),
            Some(&PlaneBuffer::Float32(vec![0., 4.5]))
        );
    }

    #[rstest]
    fn replace_plane_keeps_stack_consistent() {
        let mut stack =
            ImageStack::zeroed(StackGeometry::new(2, 1, 2, 1, 1), ElementKind::UInt8).unwrap();
        let old = stack.replace_plane(1, 2, 1, vec![5u8, 6].into()).unwrap();
        assert_eq!(old, PlaneBuffer::UInt8(vec![0, 0]));
        assert_eq!(stack.plane_at(1, 2, 1), Some(&PlaneBuffer::UInt8(vec![5, 6])));

        assert!(matches!(
            stack.replace_plane(1, 1, 1, vec![1u16, 2].into()),
            Err(StackViewError::KindMismatch {
                expected: ElementKind::UInt8,
                found: ElementKind::UInt16
            })
        ));
        assert!(matches!(
            stack.replace_plane(1, 1, 1, vec![1u8].into()),
            Err(StackViewError::PlaneLength {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            stack.replace_plane(1, 3, 1, vec![1u8, 2].into()),
            Err(StackViewError::PlaneOutOfRange {
                channel: 1,
                slice: 3,
                frame: 1
            })
        ));
        assert_eq!(stack.plane_at(1, 1, 1), Some(&PlaneBuffer::UInt8(vec![0, 0])));
    }
}
