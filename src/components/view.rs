use ndarray::{ArrayView2, ArrayViewMut2};
use shrinkwraprs::Shrinkwrap;
use std::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use crate::errors::{Result, StackViewError};

/// Uniform access to the elements of one plane.
pub trait TypedArray {
    type Element;

    /// Plane shape as (width, height).
    fn shape(&self) -> (usize, usize);

    fn as_slice(&self) -> &[Self::Element];

    /// Row major `(height, width)` array over the same memory.
    fn array(&self) -> Result<ArrayView2<'_, Self::Element>> {
        let (width, height) = self.shape();
        Ok(ArrayView2::from_shape((height, width), self.as_slice())?)
    }
}

pub trait TypedArrayMut: TypedArray {
    fn as_mut_slice(&mut self) -> &mut [Self::Element];

    fn array_mut(&mut self) -> Result<ArrayViewMut2<'_, Self::Element>> {
        let (width, height) = self.shape();
        Ok(ArrayViewMut2::from_shape(
            (height, width),
            self.as_mut_slice(),
        )?)
    }
}

fn check_len(len: usize, shape: (usize, usize)) -> Result<()> {
    let expected = shape
        .0
        .checked_mul(shape.1)
        .ok_or(StackViewError::ShapeOverflow(shape))?;
    if len != expected {
        return Err(StackViewError::PlaneLength {
            expected,
            found: len,
        });
    }
    Ok(())
}

/// Shared view over a plane buffer owned by the stack.
#[derive(Shrinkwrap, Debug, Clone, Copy)]
pub struct PlaneView<'a, T> {
    #[shrinkwrap(main_field)]
    data: &'a [T],
    shape: (usize, usize),
}

impl<'a, T> PlaneView<'a, T> {
    pub fn new(data: &'a [T], shape: (usize, usize)) -> Result<Self> {
        check_len(data.len(), shape)?;
        Ok(Self { data, shape })
    }

    /// Underlying buffer with the lifetime of the stack borrow.
    pub fn into_slice(self) -> &'a [T] {
        self.data
    }
}

impl<T> TypedArray for PlaneView<'_, T> {
    type Element = T;

    fn shape(&self) -> (usize, usize) {
        self.shape
    }

    fn as_slice(&self) -> &[T] {
        self.data
    }
}

/// Exclusive view over a plane buffer owned by the stack.
///
/// Writes land directly in the stack's buffer. Derefs to the elements
/// only, the borrowed slice itself can't be replaced.
#[derive(Debug)]
pub struct PlaneViewMut<'a, T> {
    data: &'a mut [T],
    shape: (usize, usize),
}

impl<'a, T> PlaneViewMut<'a, T> {
    pub fn new(data: &'a mut [T], shape: (usize, usize)) -> Result<Self> {
        check_len(data.len(), shape)?;
        Ok(Self { data, shape })
    }

    pub fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }
}

impl<T> Deref for PlaneViewMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &*self.data
    }
}

impl<T> DerefMut for PlaneViewMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T> TypedArray for PlaneViewMut<'_, T> {
    type Element = T;

    fn shape(&self) -> (usize, usize) {
        self.shape
    }

    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T> TypedArrayMut for PlaneViewMut<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}
