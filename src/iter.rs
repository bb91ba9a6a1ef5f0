use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use rawpointer::PointerExt;

use crate::element::{Element, ElementMut};
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;

/// Strided cursor over one lane of a matrix: the whole storage, a row, or a
/// column (stride = number of columns).
pub struct Iter<'a, E: Element> {
    base: *const E,
    stride: isize,
    pos: usize,
    end: usize,
    life: PhantomData<&'a E>,
}

pub struct IterMut<'a, E: ElementMut> {
    base: *mut E,
    stride: isize,
    pos: usize,
    end: usize,
    life: PhantomData<&'a mut E>,
}

unsafe impl<'a, E: Element + Sync> Send for Iter<'a, E> {}
unsafe impl<'a, E: Element + Sync> Sync for Iter<'a, E> {}
unsafe impl<'a, E: ElementMut + Send> Send for IterMut<'a, E> {}
unsafe impl<'a, E: ElementMut + Sync> Sync for IterMut<'a, E> {}

impl<'a, E: Element> Iter<'a, E> {
    // `base` must point at element 0 of a lane whose `len` elements lie
    // `stride` apart inside one allocation borrowed for `'a`.
    unsafe fn new(base: *const E, len: usize, stride: isize) -> Self {
        Iter {
            base,
            stride,
            pos: 0,
            end: len,
            life: PhantomData,
        }
    }

    // Only called with `i < self.end`, so the offset stays inside the lane.
    #[inline]
    unsafe fn at(&self, i: usize) -> &'a E::Scalar {
        (*self.base.stride_offset(self.stride, i)).value()
    }

    pub fn get(&self, n: usize) -> Option<&'a E::Scalar> {
        match self.pos.checked_add(n) {
            Some(i) if i < self.end => unsafe { Some(self.at(i)) },
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        self.pos
    }

    /// Moves the front back by `n` steps. Returns `false`, leaving the
    /// cursor where it was, when that would pass the start of the lane.
    pub fn retreat(&mut self, n: usize) -> bool {
        if n > self.pos {
            return false;
        }
        self.pos -= n;
        true
    }

    /// Signed number of steps from `self` to `other`, `None` when the two
    /// cursors walk different lanes.
    pub fn distance(&self, other: &Self) -> Option<isize> {
        if self.base != other.base || self.stride != other.stride {
            return None;
        }
        Some(other.pos as isize - self.pos as isize)
    }

    /// Orders the fronts of two cursors over the same lane with the same
    /// back end. Equal exactly when `self == other`.
    pub fn cmp_position(&self, other: &Self) -> Option<Ordering> {
        if self.base != other.base || self.stride != other.stride || self.end != other.end {
            return None;
        }
        Some(self.pos.cmp(&other.pos))
    }
}

impl<'a, E: Element> Clone for Iter<'a, E> {
    fn clone(&self) -> Self {
        Iter {
            base: self.base,
            stride: self.stride,
            pos: self.pos,
            end: self.end,
            life: PhantomData,
        }
    }
}

impl<'a, E: Element> Iterator for Iter<'a, E> {
    type Item = &'a E::Scalar;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let item = unsafe { self.at(self.pos) };
        self.pos += 1;
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.pos = self.end;
            return None;
        }
        self.pos += n;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end.saturating_sub(self.pos);
        (len, Some(len))
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, E: Element> DoubleEndedIterator for Iter<'a, E> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        self.end -= 1;
        unsafe { Some(self.at(self.end)) }
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.end = self.pos;
            return None;
        }
        self.end -= n;
        self.next_back()
    }
}

impl<'a, E: Element> ExactSizeIterator for Iter<'a, E> {}

impl<'a, E: Element> FusedIterator for Iter<'a, E> {}

impl<'a, E: Element> PartialEq for Iter<'a, E> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.stride == other.stride
            && self.pos == other.pos
            && self.end == other.end
    }
}

impl<'a, E: Element> PartialOrd for Iter<'a, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp_position(other)
    }
}

impl<'a, E: ElementMut> IterMut<'a, E> {
    // Same contract as `Iter::new`, and no other live reference may alias
    // the lane.
    unsafe fn new(base: *mut E, len: usize, stride: isize) -> Self {
        IterMut {
            base,
            stride,
            pos: 0,
            end: len,
            life: PhantomData,
        }
    }

    #[inline]
    unsafe fn at_mut(&self, i: usize) -> &'a mut E::Scalar {
        (*self.base.stride_offset(self.stride, i)).value_mut()
    }

    pub fn get_mut(&mut self, n: usize) -> Option<&mut E::Scalar> {
        match self.pos.checked_add(n) {
            Some(i) if i < self.end => unsafe { Some(self.at_mut(i)) },
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        self.pos
    }

    pub fn fill(self, value: E::Scalar) {
        for v in self {
            *v = value;
        }
    }

    /// Sorts the remaining elements in ascending order. Incomparable values
    /// (NaN) are treated as equal.
    pub fn sort(self) {
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    pub fn sort_by<F>(self, mut compare: F)
    where
        F: FnMut(&E::Scalar, &E::Scalar) -> Ordering,
    {
        let mut slots: Vec<&'a mut E::Scalar> = self.collect();
        let mut values: Vec<E::Scalar> = slots.iter().map(|v| **v).collect();
        values.sort_by(|a, b| compare(a, b));
        for (slot, v) in slots.iter_mut().zip(values) {
            **slot = v;
        }
    }

    pub fn sort_by_key<K, F>(self, mut f: F)
    where
        K: Ord,
        F: FnMut(&E::Scalar) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)))
    }
}

impl<'a, E: ElementMut> Iterator for IterMut<'a, E> {
    type Item = &'a mut E::Scalar;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let item = unsafe { self.at_mut(self.pos) };
        self.pos += 1;
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.pos = self.end;
            return None;
        }
        self.pos += n;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end.saturating_sub(self.pos);
        (len, Some(len))
    }
}

impl<'a, E: ElementMut> DoubleEndedIterator for IterMut<'a, E> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        self.end -= 1;
        unsafe { Some(self.at_mut(self.end)) }
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.end = self.pos;
            return None;
        }
        self.end -= n;
        self.next_back()
    }
}

impl<'a, E: ElementMut> ExactSizeIterator for IterMut<'a, E> {}

impl<'a, E: ElementMut> FusedIterator for IterMut<'a, E> {}

impl<E: Element> Matrix<E> {
    pub fn iter(&self) -> Iter<'_, E> {
        unsafe { Iter::new(self.data.as_ptr(), self.data.len(), 1) }
    }

    pub fn row(&self, n: usize) -> MatResult<Iter<'_, E>> {
        if n >= self.rows {
            return Err(MatError::out_of_range(n, 0, self.shape()));
        }
        unsafe {
            Ok(Iter::new(
                self.data.as_ptr().add(n * self.columns),
                self.columns,
                1,
            ))
        }
    }

    pub fn column(&self, n: usize) -> MatResult<Iter<'_, E>> {
        if n >= self.columns {
            return Err(MatError::out_of_range(0, n, self.shape()));
        }
        unsafe {
            Ok(Iter::new(
                self.data.as_ptr().add(n),
                self.rows,
                self.columns as isize,
            ))
        }
    }
}

impl<E: ElementMut> Matrix<E> {
    pub fn iter_mut(&mut self) -> IterMut<'_, E> {
        unsafe { IterMut::new(self.data.as_mut_ptr(), self.data.len(), 1) }
    }

    pub fn row_mut(&mut self, n: usize) -> MatResult<IterMut<'_, E>> {
        if n >= self.rows {
            return Err(MatError::out_of_range(n, 0, self.shape()));
        }
        unsafe {
            Ok(IterMut::new(
                self.data.as_mut_ptr().add(n * self.columns),
                self.columns,
                1,
            ))
        }
    }

    pub fn column_mut(&mut self, n: usize) -> MatResult<IterMut<'_, E>> {
        if n >= self.columns {
            return Err(MatError::out_of_range(0, n, self.shape()));
        }
        unsafe {
            Ok(IterMut::new(
                self.data.as_mut_ptr().add(n),
                self.rows,
                self.columns as isize,
            ))
        }
    }
}

impl<'a, E: Element> IntoIterator for &'a Matrix<E> {
    type Item = &'a E::Scalar;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E: ElementMut> IntoIterator for &'a mut Matrix<E> {
    type Item = &'a mut E::Scalar;
    type IntoIter = IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
