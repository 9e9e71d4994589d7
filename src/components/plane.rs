use crate::components::ElementKind;

/// Borrowed native storage of one 2D plane.
#[derive(Debug, Clone, Copy)]
pub enum RawPlane<'a> {
    UInt8(&'a [u8]),
    UInt16(&'a [u16]),
    Float32(&'a [f32]),
    PackedArgb32(&'a [u32]),
}

/// Exclusively borrowed native storage of one 2D plane.
#[derive(Debug)]
pub enum RawPlaneMut<'a> {
    UInt8(&'a mut [u8]),
    UInt16(&'a mut [u16]),
    Float32(&'a mut [f32]),
    PackedArgb32(&'a mut [u32]),
}

impl RawPlane<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            RawPlane::UInt8(_) => ElementKind::UInt8,
            RawPlane::UInt16(_) => ElementKind::UInt16,
            RawPlane::Float32(_) => ElementKind::Float32,
            RawPlane::PackedArgb32(_) => ElementKind::PackedArgb32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RawPlane::UInt8(data) => data.len(),
            RawPlane::UInt16(data) => data.len(),
            RawPlane::Float32(data) => data.len(),
            RawPlane::PackedArgb32(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RawPlaneMut<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            RawPlaneMut::UInt8(_) => ElementKind::UInt8,
            RawPlaneMut::UInt16(_) => ElementKind::UInt16,
            RawPlaneMut::Float32(_) => ElementKind::Float32,
            RawPlaneMut::PackedArgb32(_) => ElementKind::PackedArgb32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RawPlaneMut::UInt8(data) => data.len(),
            RawPlaneMut::UInt16(data) => data.len(),
            RawPlaneMut::Float32(data) => data.len(),
            RawPlaneMut::PackedArgb32(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
