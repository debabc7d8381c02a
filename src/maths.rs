//! Fixed-point helpers shared by the decoder.

pub trait BitLen {
    fn bitlen(self) -> u32;
}

impl BitLen for i32 {
    fn bitlen(self) -> u32 {
        32 - self.leading_zeros()
    }
}

pub trait ExMath: Into<i64> + Copy {
    fn mul_shift<I: Into<i64>>(self, other: I, bits: u32) -> i32 {
        ((self.into() * other.into()) >> bits) as i32
    }

    fn mul_round<I: Into<i64>>(self, other: I, bits: u32) -> i32 {
        ((self.into() * other.into() + (1 << (bits - 1))) >> bits) as i32
    }
}

impl ExMath for i32 {}

/// Q7 log scale to linear Q16, `2**(inLog/128)`.
pub trait Log2Lin: Copy {
    fn log2lin(self) -> i32;
}

impl Log2Lin for i32 {
    fn log2lin(self) -> i32 {
        let i = 1 << (self >> 7);
        let f = self & 127;

        i + ((-174 * f * (128 - f) >> 16) + f) * (i >> 7)
    }
}
