use super::{storage::Storage, Pack, DEFAULT_CAPACITY};
use crate::error::PackResult;
use auto_enums::auto_enum;
use std::fmt::{self, Debug};

/// Kind of a fixed width numeric buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
    F32,
    F64,
}

impl BufferKind {
    /// Narrowest unsigned kind that holds maximum.
    pub fn unsigned_up_to(maximum: u32) -> Self {
        if maximum <= u8::MAX as u32 {
            Self::U8
        } else if maximum <= u16::MAX as u32 {
            Self::U16
        } else {
            Self::U32
        }
    }

    /// Narrowest signed kind that holds maximum.
    pub fn signed_up_to(maximum: i32) -> Self {
        if maximum <= i8::MAX as i32 {
            Self::I8
        } else if maximum <= i16::MAX as i32 {
            Self::I16
        } else {
            Self::I32
        }
    }

    pub fn bits(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 | Self::F32 => 32,
            Self::F64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        !matches!(self, Self::U8 | Self::U16 | Self::U32)
    }
}

/// Element of a numeric buffer.
pub trait Numeric: Copy + Default + PartialOrd + Debug + 'static {
    const KIND: BufferKind;

    /// Appends little endian bytes of self.
    fn extend_bytes(self, bytes: &mut Vec<u8>);
}

macro_rules! numeric {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const KIND: BufferKind = BufferKind::$kind;

                fn extend_bytes(self, bytes: &mut Vec<u8>) {
                    bytes.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

numeric!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    f32 => F32,
    f64 => F64,
);

/// Pack over a fixed width numeric buffer. Filler is always zero.
///
/// Values are stored verbatim in `N`, so reallocation keeps the kind and
/// never widens it.
#[derive(Clone)]
pub struct BufferPack<N: Numeric> {
    values: Box<[N]>,
    size: usize,
}

impl<N: Numeric> BufferPack<N> {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: vec![N::default(); capacity].into_boxed_slice(),
            size: 0,
        }
    }

    /// Pack holding values with capacity of their count.
    pub fn from_slice(values: &[N]) -> Self {
        Self {
            values: values.into(),
            size: values.len(),
        }
    }

    pub fn kind(&self) -> BufferKind {
        N::KIND
    }

    /// Makes this pack a copy of source.
    pub fn copy_from(&mut self, source: &[N]) {
        if source.len() > self.capacity() {
            self.reallocate(source.len());
        }
        self.values[..source.len()].copy_from_slice(source);
        let end = self.size.max(source.len());
        self.values[source.len()..end].fill(N::default());
        self.size = source.len();
    }

    /// Little endian image of live elements.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size * N::KIND.bits() / 8);
        for &value in self.as_slice() {
            value.extend_bytes(&mut bytes);
        }
        bytes
    }
}

impl<N: Numeric> Storage for BufferPack<N> {
    type Item = N;

    fn slots(&self) -> &[N] {
        &self.values
    }

    fn slots_mut(&mut self) -> &mut [N] {
        &mut self.values
    }

    fn live(&self) -> usize {
        self.size
    }

    fn set_live(&mut self, size: usize) {
        self.size = size;
    }

    fn filler(&mut self) -> N {
        N::default()
    }

    fn reset(&mut self, index: usize) {
        self.values[index] = N::default();
    }

    fn resize(&mut self, capacity: usize) {
        let mut values = vec![N::default(); capacity].into_boxed_slice();
        let kept = self.size.min(capacity);
        values[..kept].copy_from_slice(&self.values[..kept]);
        self.values = values;
    }
}

impl<N: Numeric> crate::algorithm::Sequence for BufferPack<N> {
    type Item = N;

    fn len(&self) -> usize {
        self.size
    }

    fn at(&self, index: usize) -> &N {
        &self.as_slice()[index]
    }
}

impl<N: Numeric> crate::algorithm::SwapSequence for BufferPack<N> {
    fn swap_at(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

impl<N: Numeric> Default for BufferPack<N> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<N: Numeric> PartialEq for BufferPack<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<N: Numeric> Debug for BufferPack<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", N::KIND)?;
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<N: Numeric> FromIterator<N> for BufferPack<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let values = iter.into_iter().collect::<Vec<_>>();
        Self::from_slice(&values)
    }
}

macro_rules! dispatch {
    ($self:expr, $pack:ident => $body:expr) => {
        match $self {
            Self::Small($pack) => $body,
            Self::Medium($pack) => $body,
            Self::Large($pack) => $body,
        }
    };
}

/// Unsigned buffer pack of the narrowest kind for a maximum value.
///
/// Values are narrowed with `as` into the chosen kind.
#[derive(Debug, Clone, PartialEq)]
pub enum UnsignedPack {
    Small(BufferPack<u8>),
    Medium(BufferPack<u16>),
    Large(BufferPack<u32>),
}

/// Smallest unsigned pack able to store values up to maximum.
pub fn unsigned_up_to(maximum: u32, capacity: usize) -> UnsignedPack {
    match BufferKind::unsigned_up_to(maximum) {
        BufferKind::U8 => UnsignedPack::Small(BufferPack::new(capacity)),
        BufferKind::U16 => UnsignedPack::Medium(BufferPack::new(capacity)),
        _ => UnsignedPack::Large(BufferPack::new(capacity)),
    }
}

impl UnsignedPack {
    pub fn kind(&self) -> BufferKind {
        dispatch!(self, pack => pack.kind())
    }

    pub fn size(&self) -> usize {
        dispatch!(self, pack => pack.size())
    }

    pub fn capacity(&self) -> usize {
        dispatch!(self, pack => pack.capacity())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn get(&self, index: usize) -> PackResult<u32> {
        dispatch!(self, pack => pack.get(index).map(|&value| value as u32))
    }

    pub fn set(&mut self, index: usize, value: u32) {
        match self {
            Self::Small(pack) => pack.set(index, value as u8),
            Self::Medium(pack) => pack.set(index, value as u16),
            Self::Large(pack) => pack.set(index, value),
        }
    }

    pub fn push(&mut self, value: u32) {
        let size = self.size();
        self.set(size, value);
    }

    pub fn pop(&mut self) -> PackResult<u32> {
        dispatch!(self, pack => pack.pop().map(|value| value as u32))
    }

    pub fn set_size(&mut self, size: usize) {
        dispatch!(self, pack => pack.set_size(size))
    }

    pub fn reallocate(&mut self, capacity: usize) {
        dispatch!(self, pack => pack.reallocate(capacity))
    }

    pub fn fit(&mut self) {
        dispatch!(self, pack => pack.fit())
    }

    pub fn sort(&mut self) {
        dispatch!(self, pack => pack.sort())
    }

    pub fn clear(&mut self) {
        dispatch!(self, pack => pack.clear())
    }

    #[auto_enum(Iterator)]
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        match self {
            Self::Small(pack) => pack.iter().map(|&value| value as u32),
            Self::Medium(pack) => pack.iter().map(|&value| value as u32),
            Self::Large(pack) => pack.iter().copied(),
        }
    }
}

/// Signed buffer pack of the narrowest kind for a maximum value.
///
/// Values are narrowed with `as` into the chosen kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SignedPack {
    Small(BufferPack<i8>),
    Medium(BufferPack<i16>),
    Large(BufferPack<i32>),
}

/// Smallest signed pack able to store values up to maximum.
pub fn signed_up_to(maximum: i32, capacity: usize) -> SignedPack {
    match BufferKind::signed_up_to(maximum) {
        BufferKind::I8 => SignedPack::Small(BufferPack::new(capacity)),
        BufferKind::I16 => SignedPack::Medium(BufferPack::new(capacity)),
        _ => SignedPack::Large(BufferPack::new(capacity)),
    }
}

impl SignedPack {
    pub fn kind(&self) -> BufferKind {
        dispatch!(self, pack => pack.kind())
    }

    pub fn size(&self) -> usize {
        dispatch!(self, pack => pack.size())
    }

    pub fn capacity(&self) -> usize {
        dispatch!(self, pack => pack.capacity())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn get(&self, index: usize) -> PackResult<i32> {
        dispatch!(self, pack => pack.get(index).map(|&value| value as i32))
    }

    pub fn set(&mut self, index: usize, value: i32) {
        match self {
            Self::Small(pack) => pack.set(index, value as i8),
            Self::Medium(pack) => pack.set(index, value as i16),
            Self::Large(pack) => pack.set(index, value),
        }
    }

    pub fn push(&mut self, value: i32) {
        let size = self.size();
        self.set(size, value);
    }

    pub fn pop(&mut self) -> PackResult<i32> {
        dispatch!(self, pack => pack.pop().map(|value| value as i32))
    }

    pub fn set_size(&mut self, size: usize) {
        dispatch!(self, pack => pack.set_size(size))
    }

    pub fn reallocate(&mut self, capacity: usize) {
        dispatch!(self, pack => pack.reallocate(capacity))
    }

    pub fn fit(&mut self) {
        dispatch!(self, pack => pack.fit())
    }

    pub fn sort(&mut self) {
        dispatch!(self, pack => pack.sort())
    }

    pub fn clear(&mut self) {
        dispatch!(self, pack => pack.clear())
    }

    #[auto_enum(Iterator)]
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        match self {
            Self::Small(pack) => pack.iter().map(|&value| value as i32),
            Self::Medium(pack) => pack.iter().map(|&value| value as i32),
            Self::Large(pack) => pack.iter().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_thresholds() {
        assert_eq!(BufferKind::unsigned_up_to(0), BufferKind::U8);
        assert_eq!(BufferKind::unsigned_up_to(255), BufferKind::U8);
        assert_eq!(BufferKind::unsigned_up_to(256), BufferKind::U16);
        assert_eq!(BufferKind::unsigned_up_to(65535), BufferKind::U16);
        assert_eq!(BufferKind::unsigned_up_to(65536), BufferKind::U32);
        assert_eq!(BufferKind::signed_up_to(-5), BufferKind::I8);
        assert_eq!(BufferKind::signed_up_to(127), BufferKind::I8);
        assert_eq!(BufferKind::signed_up_to(128), BufferKind::I16);
        assert_eq!(BufferKind::signed_up_to(32767), BufferKind::I16);
        assert_eq!(BufferKind::signed_up_to(32768), BufferKind::I32);
        assert_eq!(BufferKind::F64.bits(), 64);
        assert!(BufferKind::F32.is_signed());
        assert!(!BufferKind::U16.is_signed());
    }

    #[test]
    fn reallocate_keeps_kind() {
        let mut pack = BufferPack::<i8>::new(2);
        pack.push(100);
        pack.push(-3);
        pack.push(7);
        assert_eq!(pack.kind(), BufferKind::I8);
        assert!(pack.capacity() >= 3);
        assert_eq!(pack.as_slice(), &[100, -3, 7]);
        pack.fit();
        assert_eq!(pack.capacity(), 3);
        assert_eq!(pack.kind(), BufferKind::I8);
    }

    #[test]
    fn copy_round_trip() {
        let source = BufferPack::from_slice(&[1.5f32, -2.0, 8.25]);
        let mut pack = BufferPack::<f32>::new(8);
        pack.extend_from_iter([9.0, 9.0, 9.0, 9.0, 9.0]);
        pack.copy_from(source.as_slice());
        assert_eq!(pack, source);
        assert_eq!(pack.capacity(), 8);
        assert_eq!(&pack.slots()[3..5], &[0.0, 0.0]);

        let mut small = BufferPack::<f32>::new(1);
        small.copy_from(source.as_slice());
        assert_eq!(small, source);
    }

    #[test]
    fn bytes() {
        let pack = [1u16, 0x0203].into_iter().collect::<BufferPack<u16>>();
        assert_eq!(pack.as_bytes(), vec![1, 0, 3, 2]);
        assert_eq!(BufferPack::<u8>::new(4).as_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn float_sort_and_search() {
        let mut pack = BufferPack::from_slice(&[3.0f64, -1.0, 2.5, 0.0]);
        pack.sort();
        assert_eq!(pack.as_slice(), &[-1.0, 0.0, 2.5, 3.0]);
        let comparator = |value: &f64, element: &f64| crate::algorithm::natural(value, element);
        assert_eq!(pack.bisect_by(&2.5, comparator), 2);
        assert_eq!(pack.bisect_by(&1.0, comparator), -3);
    }

    #[test]
    fn unsigned_narrowing() {
        let mut pack = unsigned_up_to(200, 4);
        assert_eq!(pack.kind(), BufferKind::U8);
        pack.push(200);
        pack.push(300);
        assert_eq!(pack.get(0), Ok(200));
        assert_eq!(pack.get(1), Ok(300 % 256));
        assert!(pack.get(2).unwrap_err().is_out_of_range());

        let mut pack = unsigned_up_to(70_000, 0);
        assert_eq!(pack.kind(), BufferKind::U32);
        for value in [5, 70_000, 1] {
            pack.push(value);
        }
        pack.sort();
        assert_eq!(pack.iter().collect::<Vec<_>>(), vec![1, 5, 70_000]);
        assert_eq!(pack.pop(), Ok(70_000));
        pack.fit();
        assert_eq!(pack.capacity(), 2);
    }

    #[test]
    fn signed_narrowing() {
        let mut pack = signed_up_to(1000, 2);
        assert_eq!(pack.kind(), BufferKind::I16);
        pack.set(2, -40_000);
        assert_eq!(pack.size(), 3);
        assert_eq!(pack.iter().collect::<Vec<_>>(), vec![0, 0, -40_000i32 as i16 as i32]);
        pack.clear();
        assert!(pack.is_empty());
        assert!(pack.pop().unwrap_err().is_empty_collection());
    }
}
