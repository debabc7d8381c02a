//! Range decoding of a compressed frame.
//!
//! See [section 4.1](https://tools.ietf.org/html/rfc6716#section-4.1)

/// Cumulative distribution for an entropy-coded symbol.
#[derive(Debug)]
pub struct ICDFContext {
    pub total: u32,
    pub dist: &'static [u32],
}

macro_rules! icdf {
    ($($v:expr),+ $(,)?) => {
        &$crate::entropy::ICDFContext {
            total: 256,
            dist: &[$($v),+],
        }
    };
}

pub(crate) use icdf;

const SYM_BITS: u32 = 8;
const SYM_MAX: u32 = (1 << SYM_BITS) - 1;
const CODE_BITS: u32 = 32;
const CODE_TOP: u32 = 1 << (CODE_BITS - 1);
const CODE_BOT: u32 = CODE_TOP >> SYM_BITS;

/// Entropy cursor over the bytes of one frame.
#[derive(Debug)]
pub struct RangeDecoder<'a> {
    buf: &'a [u8],
    bits_read: u32,
    range: u32,
    value: u32,
}

impl<'a> RangeDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        let mut rd = RangeDecoder {
            buf,
            bits_read: 0,
            range: (SYM_MAX >> 1) + 1,
            value: 0,
        };

        rd.value = (SYM_MAX >> 1) - rd.get_bits(SYM_BITS - 1);
        rd.normalize();
        rd
    }

    /// Rebuilds a cursor from a mid-stream register snapshot.
    #[cfg(test)]
    pub fn from_parts(buf: &'a [u8], bits_read: u32, range: u32, value: u32) -> Self {
        RangeDecoder {
            buf,
            bits_read,
            range,
            value,
        }
    }

    fn get_bit(&mut self) -> u32 {
        let idx = (self.bits_read / 8) as usize;
        let shift = 7 - self.bits_read % 8;

        self.bits_read += 1;

        if idx < self.buf.len() {
            (u32::from(self.buf[idx]) >> shift) & 1
        } else {
            0
        }
    }

    fn get_bits(&mut self, len: u32) -> u32 {
        let mut val = 0;

        for _ in 0..len {
            val = val << 1 | self.get_bit();
        }

        val
    }

    fn normalize(&mut self) {
        while self.range <= CODE_BOT {
            let byte = self.get_bits(SYM_BITS);

            self.value = (self.value << SYM_BITS | (byte ^ SYM_MAX)) & (CODE_TOP - 1);
            self.range <<= SYM_BITS;
        }
    }

    fn update(&mut self, scale: u32, low: u32, high: u32, total: u32) {
        self.value -= scale * (total - high);

        self.range = if low != 0 {
            scale * (high - low)
        } else {
            self.range - scale * (total - high)
        };

        self.normalize();
    }

    pub fn decode_logp(&mut self, logp: u32) -> bool {
        let scale = self.range >> logp;

        let k = if scale > self.value {
            self.range = scale;
            true
        } else {
            self.value -= scale;
            self.range -= scale;
            false
        };

        self.normalize();

        k
    }

    pub fn decode_icdf(&mut self, icdf: &ICDFContext) -> usize {
        let total = icdf.total;
        let dist = icdf.dist;
        let scale = self.range / total;
        let symbol = total - (self.value / scale + 1).min(total);

        let k = dist
            .iter()
            .position(|&v| v > symbol)
            .unwrap_or(dist.len() - 1);

        let high = dist[k];
        let low = if k > 0 { dist[k - 1] } else { 0 };

        self.update(scale, low, high, total);

        k
    }

    /// Bits pulled from the buffer so far, padding included.
    pub fn bits_read(&self) -> u32 {
        self.bits_read
    }
}
