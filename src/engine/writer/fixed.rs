//! 26.6 fixed-point sub-pixel units.
//!
//! The low 6 bits hold the fraction, so one device pixel is `64`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(64);

    /// Largest whole pixel count that fits in 26.6.
    pub const MAX_PX: i32 = i32::MAX >> 6;
    pub const MIN_PX: i32 = i32::MIN >> 6;

    /// Whole device pixels, saturating at [`MAX_PX`](Self::MAX_PX) / [`MIN_PX`](Self::MIN_PX).
    pub const fn from_int(v: i32) -> Self {
        let v = if v > Self::MAX_PX {
            Self::MAX_PX
        } else if v < Self::MIN_PX {
            Self::MIN_PX
        } else {
            v
        };
        Fixed(v << 6)
    }

    /// Canvas extents and paddings; saturates like [`from_int`](Self::from_int).
    pub const fn from_px(v: u32) -> Self {
        if v > Self::MAX_PX as u32 {
            Fixed::from_int(Self::MAX_PX)
        } else {
            Fixed::from_int(v as i32)
        }
    }

    /// Fractional pixels, rounded to the nearest 1/64.
    pub fn from_f32(v: f32) -> Self {
        Fixed((v * 64.0).round() as i32)
    }

    /// Largest integer not greater than the value.
    pub const fn floor(self) -> i32 {
        self.0 >> 6
    }

    /// Smallest integer not less than the value.
    pub const fn ceil(self) -> i32 {
        self.0.saturating_add(0x3f) >> 6
    }

    /// Half of the value, rounded toward negative infinity at 1/64 precision.
    pub const fn half(self) -> Self {
        Fixed(self.0 >> 1)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / 64.0
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = self.0 & 0x3f;
        write!(f, "{}:{:02}", self.floor(), frac)
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Fixed>>(iter: I) -> Fixed {
        iter.fold(Fixed::ZERO, Add::add)
    }
}
