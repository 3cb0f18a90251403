use std::iter::FusedIterator;
use std::ops::Index;

use crate::error::{KernelError, Result};
use crate::math::vector::Vector;

/// Anything with a known length and positional, read-only access.
///
/// Kernels are written against this trait so that slices, [`Vector`]s and
/// [`IndexedView`]s can be mixed freely as operands.
pub trait Indexed {
    type Item;

    fn len(&self) -> usize;

    /// Must return `Some` for every `index < self.len()`; [`Iter`] reports an
    /// exact size on that basis.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a new traversal from position 0.
    fn iter(&self) -> Iter<'_, Self> {
        Iter {
            source: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl<T> Indexed for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Indexed for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Indexed for Vector<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// Cursor over an [`Indexed`] source.
///
/// The position lives here rather than on the source, so any number of
/// traversals may run side by side.
#[derive(Debug)]
pub struct Iter<'a, S: ?Sized> {
    source: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: ?Sized> Clone for Iter<'a, S> {
    fn clone(&self) -> Self {
        Iter {
            source: self.source,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S> Iterator for Iter<'a, S>
where
    S: Indexed + ?Sized,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let source: &'a S = self.source;
        let item = source.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, S> DoubleEndedIterator for Iter<'a, S>
where
    S: Indexed + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let source: &'a S = self.source;
        self.back -= 1;
        source.get(self.back)
    }
}

impl<'a, S> ExactSizeIterator for Iter<'a, S> where S: Indexed + ?Sized {}

impl<'a, S> FusedIterator for Iter<'a, S> where S: Indexed + ?Sized {}

/// Read-only re-indexing of `arr` through `idx`: `view[i] == arr[idx[i]]`.
///
/// Nothing is copied. Repeated indices are allowed, so the view may be
/// longer than `arr`.
#[derive(Debug)]
pub struct IndexedView<'a, A: ?Sized> {
    arr: &'a A,
    idx: &'a [usize],
}

impl<'a, A: ?Sized> Clone for IndexedView<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: ?Sized> Copy for IndexedView<'a, A> {}

impl<'a, A> IndexedView<'a, A>
where
    A: Indexed + ?Sized,
{
    /// Fails with `IndexOutOfRange` on the first entry of `idx` that does
    /// not address an element of `arr`.
    pub fn new(arr: &'a A, idx: &'a [usize]) -> Result<Self> {
        let len = arr.len();
        if let Some(&index) = idx.iter().find(|&&k| k >= len) {
            log::debug!("IndexedView: index {} out of range for length {}", index, len);
            return Err(KernelError::IndexOutOfRange { index, len });
        }
        Ok(Self { arr, idx })
    }

    /// Element at view position `i`.
    pub fn at(&self, i: usize) -> Result<&'a A::Item> {
        let arr: &'a A = self.arr;
        let view_len = self.idx.len();
        self.idx
            .get(i)
            .and_then(|&k| arr.get(k))
            .ok_or(KernelError::IndexOutOfRange {
                index: i,
                len: view_len,
            })
    }

    /// The positions this view reads `arr` through.
    pub fn indices(&self) -> &'a [usize] {
        self.idx
    }

    pub fn to_vector(&self) -> Vector<A::Item>
    where
        A::Item: Clone,
    {
        Indexed::iter(self).cloned().collect()
    }
}

impl<'a, A> Indexed for IndexedView<'a, A>
where
    A: Indexed + ?Sized,
{
    type Item = A::Item;

    fn len(&self) -> usize {
        self.idx.len()
    }

    fn get(&self, index: usize) -> Option<&A::Item> {
        self.idx.get(index).and_then(|&k| self.arr.get(k))
    }
}

impl<'a, A> Index<usize> for IndexedView<'a, A>
where
    A: Indexed + ?Sized,
{
    type Output = A::Item;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'v, 'a, A> IntoIterator for &'v IndexedView<'a, A>
where
    A: Indexed + ?Sized,
{
    type Item = &'v A::Item;
    type IntoIter = Iter<'v, IndexedView<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        Indexed::iter(self)
    }
}
