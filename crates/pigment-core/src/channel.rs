//! Normalized channel arithmetic.
//!
//! Blend formulas are written once against [`Channel`] and monomorphised for
//! each storage type. Integer channels carry a signed composite type wide
//! enough to hold sums and products of two channel values, so intermediate
//! results never wrap before [`Channel::saturate`] brings them back into
//! `[ZERO, UNIT]`.
//!
//! | Storage | Range        | Composite |
//! |---------|--------------|-----------|
//! | `u8`    | 0 – 255      | `i32`     |
//! | `u16`   | 0 – 65535    | `i64`     |
//! | `f32`   | 0.0 – 1.0    | `f64`     |
//! | `f64`   | 0.0 – 1.0    | `f64`     |

use bytemuck::Pod;
use std::fmt::Debug;

/// A normalized colour channel value.
pub trait Channel: Pod + PartialOrd + Debug + Send + Sync {
    /// Accumulator for intermediate arithmetic.
    type Composite: Copy
        + PartialOrd
        + Debug
        + From<Self>
        + std::ops::Add<Output = Self::Composite>
        + std::ops::Sub<Output = Self::Composite>
        + std::ops::Mul<Output = Self::Composite>
        + std::ops::Div<Output = Self::Composite>;

    /// Black / fully transparent.
    const ZERO: Self;
    /// White / fully opaque.
    const UNIT: Self;
    /// Midpoint. For integer channels this rounds down (127 for `u8`).
    const HALF: Self;
    /// The constant two, in composite space.
    const TWO: Self::Composite;

    /// Saturating clamp of a composite value into `[ZERO, UNIT]`.
    fn saturate(value: Self::Composite) -> Self;

    /// Normalized product `a * b / UNIT`, rounded for integer channels.
    fn mul(self, other: Self) -> Self;

    /// Normalized quotient `a * UNIT / b`, rounded for integer channels.
    ///
    /// The result is not clamped. Callers must guard `other == ZERO`.
    fn div(self, other: Self) -> Self::Composite;

    /// `UNIT - self`.
    fn inv(self) -> Self;

    /// Scale to the `[0.0, 1.0]` float domain.
    fn to_f64(self) -> f64;

    /// Scale from the float domain, clamping to `[ZERO, UNIT]`.
    fn from_f64(value: f64) -> Self;

    /// Widen into the composite type.
    #[inline]
    fn wide(self) -> Self::Composite {
        self.into()
    }
}

/// Smaller of two partially ordered values, preferring `a` on ties.
#[inline]
pub fn min_of<C: PartialOrd>(a: C, b: C) -> C {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two partially ordered values, preferring `a` on ties.
#[inline]
pub fn max_of<C: PartialOrd>(a: C, b: C) -> C {
    if b > a {
        b
    } else {
        a
    }
}

/// Absolute value in composite space.
#[inline]
pub fn abs_wide<T: Channel>(x: T::Composite) -> T::Composite {
    let zero = T::ZERO.wide();
    if x < zero {
        zero - x
    } else {
        x
    }
}

macro_rules! impl_integer_channel {
    ($t:ty, $wide:ty, $prod:ty, $shift:expr, $round:expr) => {
        impl Channel for $t {
            type Composite = $wide;

            const ZERO: Self = 0;
            const UNIT: Self = <$t>::MAX;
            const HALF: Self = <$t>::MAX / 2;
            const TWO: $wide = 2;

            #[inline]
            fn saturate(value: $wide) -> Self {
                value.clamp(0, <$t>::MAX as $wide) as $t
            }

            #[inline]
            fn mul(self, other: Self) -> Self {
                let t = self as $prod * other as $prod + $round;
                (((t >> $shift) + t) >> $shift) as $t
            }

            #[inline]
            fn div(self, other: Self) -> $wide {
                let divisor = other as $wide;
                (self as $wide * <$t>::MAX as $wide + divisor / 2) / divisor
            }

            #[inline]
            fn inv(self) -> Self {
                <$t>::MAX - self
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64 / <$t>::MAX as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                (value * <$t>::MAX as f64)
                    .round()
                    .clamp(0.0, <$t>::MAX as f64) as $t
            }
        }
    };
}

impl_integer_channel!(u8, i32, u32, 8, 0x80);
impl_integer_channel!(u16, i64, u64, 16, 0x8000);

macro_rules! impl_float_channel {
    ($t:ty) => {
        impl Channel for $t {
            type Composite = f64;

            const ZERO: Self = 0.0;
            const UNIT: Self = 1.0;
            const HALF: Self = 0.5;
            const TWO: f64 = 2.0;

            #[inline]
            fn saturate(value: f64) -> Self {
                value.clamp(0.0, 1.0) as $t
            }

            #[inline]
            fn mul(self, other: Self) -> Self {
                self * other
            }

            #[inline]
            fn div(self, other: Self) -> f64 {
                self as f64 / other as f64
            }

            #[inline]
            fn inv(self) -> Self {
                1.0 - self
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value.clamp(0.0, 1.0) as $t
            }
        }
    };
}

impl_float_channel!(f32);
impl_float_channel!(f64);

/// Floating-point channel used by the non-separable operators.
///
/// Implemented for `f32` and `f64` so the HSX formulas are written once.
/// Unlike [`Channel::from_f64`], [`Real::of`] does not clamp.
pub trait Real:
    Channel<Composite = f64>
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
{
    const EPSILON: Self;

    fn of(value: f64) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn is_nan(self) -> bool;
}

macro_rules! impl_real {
    ($t:ty) => {
        impl Real for $t {
            const EPSILON: Self = <$t>::EPSILON;

            #[inline]
            fn of(value: f64) -> Self {
                value as $t
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
            #[inline]
            fn min(self, other: Self) -> Self {
                <$t>::min(self, other)
            }
            #[inline]
            fn max(self, other: Self) -> Self {
                <$t>::max(self, other)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
