use crate::components::{ElementKind, StackGeometry};

pub type Result<T> = std::result::Result<T, StackViewError>;

#[derive(thiserror::Error, Debug)]
pub enum StackViewError {
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
    #[error("Stack geometry {0:?} has an empty dimension or overflows usize")]
    InvalidGeometry(StackGeometry),
    #[error("Plane shape {0:?} overflows usize")]
    ShapeOverflow((usize, usize)),
    #[error("Setup {setup} is out of range, stack has {num_setups} setups")]
    SetupOutOfRange { setup: usize, num_setups: usize },
    #[error("Timepoint {timepoint} is out of range, stack has {num_timepoints} timepoints")]
    TimepointOutOfRange {
        timepoint: usize,
        num_timepoints: usize,
    },
    #[error("Plane (c={channel}, z={slice}, t={frame}) is outside the stack")]
    PlaneOutOfRange {
        channel: usize,
        slice: usize,
        frame: usize,
    },
    #[error("Stack has no plane at index {0}")]
    MissingPlane(usize),
    #[error("Stack holds {found} planes, its geometry needs {expected}")]
    PlaneCount { expected: usize, found: usize },
    #[error("Plane at index {0} was requested more than once")]
    DuplicatePlane(usize),
    #[error("Expected {expected} plane, found {found}")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
    #[error("Plane holds {found} elements, expected {expected}")]
    PlaneLength { expected: usize, found: usize },
    #[error("Volume has {found} of {expected} slices")]
    IncompleteVolume { expected: usize, found: usize },
    #[error("Volume already holds all {0} slices")]
    VolumeFull(usize),
}
