//! Colour triples consumed by the non-separable operators.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// An (R, G, B) triple of channel values in device space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T: Copy> Rgb<T> {
    /// Create a new triple.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// Triple with the same value in every channel.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Apply `f` to each channel.
    #[inline]
    pub fn map<U: Copy>(self, mut f: impl FnMut(T) -> U) -> Rgb<U> {
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    /// Combine two triples channel by channel.
    #[inline]
    pub fn zip_with<U: Copy, V: Copy>(self, other: Rgb<U>, mut f: impl FnMut(T, U) -> V) -> Rgb<V> {
        Rgb {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
        }
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.r, self.g, self.b]
    }
}

impl<T: Channel> Rgb<T> {
    pub const BLACK: Self = Self::splat(T::ZERO);
    pub const WHITE: Self = Self::splat(T::UNIT);

    /// Rescale into another channel representation through the float domain.
    #[inline]
    pub fn convert<U: Channel>(self) -> Rgb<U> {
        self.map(|c| U::from_f64(c.to_f64()))
    }
}

impl<T: Copy> From<[T; 3]> for Rgb<T> {
    #[inline]
    fn from(v: [T; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl<T: Copy> From<Rgb<T>> for [T; 3] {
    #[inline]
    fn from(c: Rgb<T>) -> Self {
        c.to_array()
    }
}
