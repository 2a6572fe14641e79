use std::{fmt::Debug, hash::Hash, ops::Deref};

/// Fixed-capacity inline vector for small `Copy` values.
///
/// Equality and hashing only look at the first `len` elements, so two
/// vectors holding the same items compare equal regardless of stale slots.
#[derive(Clone, Copy)]
pub struct TinyVec<T, const N: usize>
where
    T: Copy + Default,
{
    buf: [T; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + Default,
{
    pub fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { buf: [T::default(); N], len: 0 }
    }

    /// Appends `val`. Returns it back when the vector is full.
    pub fn push(&mut self, val: T) -> Result<(), T> {
        if self.len as usize == N {
            return Err(val);
        }
        self.buf[self.len as usize] = val;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf[self.len as usize])
    }

    pub fn is_full(&self) -> bool {
        self.len as usize == N
    }
}

impl<T: Copy + Default, const N: usize> Default for TinyVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Deref for TinyVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len as usize]
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for TinyVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for TinyVec<T, N> {}

impl<T: Copy + Default + Hash, const N: usize> Hash for TinyVec<T, N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

impl<T: Copy + Default + Debug, const N: usize> Debug for TinyVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
