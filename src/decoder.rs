//! SILK frame decoder.
//!
//! Decodes one 20 ms SILK frame into normalized `f32` samples, following
//! [section 4.2](https://tools.ietf.org/html/rfc6716#section-4.2).

use log::trace;
use thiserror::Error;

use crate::entropy::{ICDFContext, RangeDecoder};
use crate::maths::{BitLen, ExMath, Log2Lin};
use crate::tables::*;

/// Frame duration accepted by [`Decoder::decode`].
pub const NANOSECONDS_20MS: u64 = 20_000_000;

const SUBFRAMES: usize = 4;
const LTP_ORDER: usize = 5;
// Enough room for the longest pitch lag plus half the LTP filter.
const RES_HISTORY: usize = 288 + LTP_ORDER / 2;
const LPC_HISTORY: usize = 322;
const MAX_FRAME_SAMPLES: usize = 320;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("only 20 ms frames are supported")]
    UnsupportedFrameDuration,
    #[error("stereo frames are not supported")]
    UnsupportedStereo,
    #[error("output holds {capacity} samples but the frame decodes to {required}")]
    OutputBufferTooSmall { required: usize, capacity: usize },
    #[error("low bitrate redundancy frames are not supported")]
    UnsupportedLowBitrateRedundancy,
}

/// Audio bandwidth of the encoded frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bandwidth {
    Narrow,
    Medium,
    Wide,
}

impl Bandwidth {
    /// Samples produced by one 20 ms frame at this bandwidth.
    pub fn frame_samples(self) -> usize {
        match self {
            Bandwidth::Narrow => 160,
            Bandwidth::Medium => 240,
            Bandwidth::Wide => 320,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Signal {
    Inactive,
    Unvoiced,
    Voiced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrameType {
    signal: Signal,
    quant_offset_high: bool,
}

impl FrameType {
    fn voiced(self) -> bool {
        self.signal == Signal::Voiced
    }

    fn signal_index(self) -> usize {
        match self.signal {
            Signal::Inactive => 0,
            Signal::Unvoiced => 1,
            Signal::Voiced => 2,
        }
    }

    fn voiced_index(self) -> usize {
        self.voiced() as usize
    }

    fn quant_offset_index(self) -> usize {
        self.quant_offset_high as usize
    }
}

/// Per-bandwidth codebooks and layout constants, with the fixed-point
/// filter reconstruction that depends on them.
trait BandParams {
    const ORDER: usize;
    const STEP: i32;
    const SUBFRAME_SIZE: usize;
    const SHELL_BLOCKS: usize;
    const FRAME_SAMPLES: usize = Self::SUBFRAME_SIZE * SUBFRAMES;

    const STAGE1: &'static [&'static ICDFContext];
    const MAP: &'static [&'static [&'static ICDFContext]];
    const PRED_WEIGHT: &'static [&'static [u8]];
    const PRED_WEIGHT_INDEX: &'static [&'static [usize]];
    const CODEBOOK: &'static [&'static [u8]];
    const WEIGHT: &'static [&'static [u16]];
    const MIN_SPACING: &'static [i16];
    const ORDERING: &'static [u8];

    const PITCH_LOW_PART: &'static ICDFContext;
    const PITCH_SCALE: i32;
    const PITCH_MIN_LAG: i32;
    const PITCH_MAX_LAG: i32;
    const PITCH_OFFSET: &'static [&'static [i8]];
    const PITCH_CONTOUR: &'static ICDFContext;

    fn stabilize(nlsfs: &mut [i16]) {
        for _ in 0..20 {
            let mut k = 0;
            let mut min_diff = 0;

            for (i, &spacing) in Self::MIN_SPACING.iter().enumerate() {
                let low = if i == 0 { 0 } else { i32::from(nlsfs[i - 1]) };
                let high = if i == Self::ORDER {
                    32768
                } else {
                    i32::from(nlsfs[i])
                };
                let diff = high - low - i32::from(spacing);

                if diff < min_diff {
                    min_diff = diff;
                    k = i;
                }
            }

            if min_diff == 0 {
                return;
            }

            if k == 0 {
                nlsfs[0] = Self::MIN_SPACING[0];
            } else if k == Self::ORDER {
                nlsfs[Self::ORDER - 1] =
                    (32768 - i32::from(Self::MIN_SPACING[Self::ORDER])) as i16;
            } else {
                let half_delta = i32::from(Self::MIN_SPACING[k]) >> 1;
                let min_center =
                    Self::MIN_SPACING[..k].iter().map(|&v| i32::from(v)).sum::<i32>() + half_delta;
                let max_center = 32768
                    - Self::MIN_SPACING[k + 1..]
                        .iter()
                        .map(|&v| i32::from(v))
                        .sum::<i32>()
                    - half_delta;
                let delta = i32::from(nlsfs[k - 1]) + i32::from(nlsfs[k]);
                let center = (delta >> 1) + (delta & 1);

                nlsfs[k - 1] = (center.max(min_center).min(max_center) - half_delta) as i16;
                nlsfs[k] = nlsfs[k - 1] + Self::MIN_SPACING[k];
            }
        }

        nlsfs.sort_unstable();

        let mut prev = 0;
        for (nlsf, &spacing) in nlsfs.iter_mut().zip(Self::MIN_SPACING) {
            let v = prev + i32::from(spacing);
            if i32::from(*nlsf) < v {
                *nlsf = v as i16;
            }
            prev = i32::from(*nlsf);
        }

        let mut next = 32768;
        for (nlsf, &spacing) in nlsfs.iter_mut().zip(&Self::MIN_SPACING[1..]).rev() {
            let v = next - i32::from(spacing);
            if i32::from(*nlsf) > v {
                *nlsf = v as i16;
            }
            next = i32::from(*nlsf);
        }
    }

    /// Converts stabilized NLSFs to Q17 LPC coefficients.
    fn nlsfs_to_lpc(nlsfs: &[i16]) -> [i32; 16] {
        let mut lsps = [0i32; 16];

        for (&ord, &nlsf) in Self::ORDERING.iter().zip(nlsfs.iter()) {
            let idx = (nlsf >> 8) as usize;
            let off = i32::from(nlsf & 255);
            let cos = i32::from(COSINE[idx]);
            let next_cos = i32::from(COSINE[idx + 1]);

            lsps[ord as usize] = (cos * 256 + (next_cos - cos) * off + 4) >> 3;
        }

        let mut p = [0i32; 9];
        let mut q = [0i32; 9];

        p[0] = 65536;
        q[0] = 65536;
        p[1] = -lsps[0];
        q[1] = -lsps[1];

        for (i, lsp) in lsps[2..Self::ORDER].chunks(2).enumerate() {
            p[i + 2] = p[i] * 2 - lsp[0].mul_round(p[i + 1], 16);
            q[i + 2] = q[i] * 2 - lsp[1].mul_round(q[i + 1], 16);

            for j in (2..i + 2).rev() {
                p[j] += p[j - 2] - lsp[0].mul_round(p[j - 1], 16);
                q[j] += q[j - 2] - lsp[1].mul_round(q[j - 1], 16);
            }

            p[1] -= lsp[0];
            q[1] -= lsp[1];
        }

        let mut a32 = [0i32; 16];
        for k in 0..Self::ORDER / 2 {
            let ps = p[k] + p[k + 1];
            let qs = q[k + 1] - q[k];

            a32[k] = -ps - qs;
            a32[Self::ORDER - 1 - k] = qs - ps;
        }

        a32
    }

    fn is_stable(lpcs: &[i16]) -> bool {
        let mut dc_resp = 0;
        let mut even = [0i32; 16];
        let mut odd = [0i32; 16];
        let mut invgain = 1 << 30;

        for (c, &lpc) in even.iter_mut().zip(lpcs.iter()) {
            let l = i32::from(lpc);
            dc_resp += l;
            *c = l * 4096;
        }

        if dc_resp > 4096 {
            return false;
        }

        let mut k = Self::ORDER - 1;
        let mut a = even[k];

        loop {
            if a.abs() > 16773022 {
                return false;
            }

            let rc = -a * 128;
            let div = (1 << 30) - rc.mul_shift(rc, 32);

            invgain = invgain.mul_shift(div, 32) << 2;

            if k == 0 {
                return invgain >= 107374;
            }

            let b1 = div.bitlen();
            let b2 = b1 - 16;
            let inv = ((1 << 29) - 1) / (div >> (b2 + 1));
            let err = (1 << 29) - (div << (15 - b2)).mul_shift(inv, 16);
            let gain = (inv << 16) + (err * inv >> 13);

            let (prev, cur) = if k & 1 != 0 {
                (&mut even, &mut odd)
            } else {
                (&mut odd, &mut even)
            };

            for j in 0..k {
                let v = prev[j] - prev[k - j - 1].mul_shift(rc, 31);
                cur[j] = v.mul_shift(gain, b1);
            }

            k -= 1;

            a = cur[k];
        }
    }

    /// Limits the Q17 coefficients into Q12 range, then keeps bandwidth
    /// expanding until the filter is provably stable.
    fn limit_prediction_gain(mut a32: [i32; 16]) -> [f32; 16] {
        let a = &mut a32[..Self::ORDER];
        let mut lpc = [0i16; 16];
        let lpc = &mut lpc[..Self::ORDER];
        let mut deadline = true;

        for _ in 0..10 {
            // max_by_key() keeps the last maximum, walking backwards
            // yields the first one.
            let (k, &maxval) = a
                .iter()
                .enumerate()
                .rev()
                .max_by_key(|&(_i, v)| v.abs())
                .unwrap();

            let maxabs = ((maxval.abs() + (1 << 4)) >> 5) as u32;

            if maxabs > 32767 {
                let max = maxabs.max(163838);
                let start = 65470 - ((max - 32767) << 14) / ((max * (k as u32 + 1)) >> 2);
                let mut chirp = start;

                for v in a.iter_mut() {
                    *v = v.mul_round(chirp, 16);
                    chirp = (start * chirp + 32768) >> 16;
                }
            } else {
                deadline = false;
                break;
            }
        }

        if deadline {
            for (v, l) in a.iter_mut().zip(lpc.iter_mut()) {
                let v16 = ((*v + (1 << 4)) >> 5)
                    .min(i32::from(i16::MAX))
                    .max(i32::from(i16::MIN));
                *l = v16 as i16;
                *v = v16 << 5;
            }
        } else {
            for (&v, l) in a.iter().zip(lpc.iter_mut()) {
                *l = ((v + (1 << 4)) >> 5) as i16;
            }
        }

        for round in 1..=16 {
            if Self::is_stable(lpc) {
                break;
            }

            let start = 65536u32 - (1 << round);
            let mut chirp = start;

            for (v, l) in a.iter_mut().zip(lpc.iter_mut()) {
                *v = v.mul_round(chirp, 16);
                *l = ((*v + (1 << 4)) >> 5) as i16;
                chirp = (start * chirp + 32768) >> 16;
            }
        }

        let mut out = [0f32; 16];
        for (o, &l) in out.iter_mut().zip(lpc.iter()) {
            *o = f32::from(l);
        }

        out
    }
}

struct Narrowband;
struct Mediumband;
struct Wideband;

impl BandParams for Narrowband {
    const ORDER: usize = 10;
    const STEP: i32 = 11796;
    const SUBFRAME_SIZE: usize = 40;
    const SHELL_BLOCKS: usize = 10;

    const STAGE1: &'static [&'static ICDFContext] = LSF_STAGE1_NB_MB;
    const MAP: &'static [&'static [&'static ICDFContext]] = LSF_MAP_NB_MB;
    const PRED_WEIGHT: &'static [&'static [u8]] = LSF_PRED_WEIGHT_NB_MB;
    const PRED_WEIGHT_INDEX: &'static [&'static [usize]] = LSF_PRED_WEIGHT_INDEX_NB_MB;
    const CODEBOOK: &'static [&'static [u8]] = LSF_CODEBOOK_NB_MB;
    const WEIGHT: &'static [&'static [u16]] = LSF_WEIGHT_NB_MB;
    const MIN_SPACING: &'static [i16] = LSF_MIN_SPACING_NB_MB;
    const ORDERING: &'static [u8] = LSF_ORDERING_NB_MB;

    const PITCH_LOW_PART: &'static ICDFContext = PITCH_LOW_PART_NB;
    const PITCH_SCALE: i32 = 4;
    const PITCH_MIN_LAG: i32 = 16;
    const PITCH_MAX_LAG: i32 = 144;
    const PITCH_OFFSET: &'static [&'static [i8]] = PITCH_OFFSET_NB;
    const PITCH_CONTOUR: &'static ICDFContext = PITCH_CONTOUR_NB;
}

impl BandParams for Mediumband {
    const ORDER: usize = 10;
    const STEP: i32 = 11796;
    const SUBFRAME_SIZE: usize = 60;
    const SHELL_BLOCKS: usize = 15;

    const STAGE1: &'static [&'static ICDFContext] = LSF_STAGE1_NB_MB;
    const MAP: &'static [&'static [&'static ICDFContext]] = LSF_MAP_NB_MB;
    const PRED_WEIGHT: &'static [&'static [u8]] = LSF_PRED_WEIGHT_NB_MB;
    const PRED_WEIGHT_INDEX: &'static [&'static [usize]] = LSF_PRED_WEIGHT_INDEX_NB_MB;
    const CODEBOOK: &'static [&'static [u8]] = LSF_CODEBOOK_NB_MB;
    const WEIGHT: &'static [&'static [u16]] = LSF_WEIGHT_NB_MB;
    const MIN_SPACING: &'static [i16] = LSF_MIN_SPACING_NB_MB;
    const ORDERING: &'static [u8] = LSF_ORDERING_NB_MB;

    const PITCH_LOW_PART: &'static ICDFContext = PITCH_LOW_PART_MB;
    const PITCH_SCALE: i32 = 6;
    const PITCH_MIN_LAG: i32 = 24;
    const PITCH_MAX_LAG: i32 = 216;
    const PITCH_OFFSET: &'static [&'static [i8]] = PITCH_OFFSET_MB_WB;
    const PITCH_CONTOUR: &'static ICDFContext = PITCH_CONTOUR_MB_WB;
}

impl BandParams for Wideband {
    const ORDER: usize = 16;
    const STEP: i32 = 9830;
    const SUBFRAME_SIZE: usize = 80;
    const SHELL_BLOCKS: usize = 20;

    const STAGE1: &'static [&'static ICDFContext] = LSF_STAGE1_WB;
    const MAP: &'static [&'static [&'static ICDFContext]] = LSF_MAP_WB;
    const PRED_WEIGHT: &'static [&'static [u8]] = LSF_PRED_WEIGHT_WB;
    const PRED_WEIGHT_INDEX: &'static [&'static [usize]] = LSF_PRED_WEIGHT_INDEX_WB;
    const CODEBOOK: &'static [&'static [u8]] = LSF_CODEBOOK_WB;
    const WEIGHT: &'static [&'static [u16]] = LSF_WEIGHT_WB;
    const MIN_SPACING: &'static [i16] = LSF_MIN_SPACING_WB;
    const ORDERING: &'static [u8] = LSF_ORDERING_WB;

    const PITCH_LOW_PART: &'static ICDFContext = PITCH_LOW_PART_WB;
    const PITCH_SCALE: i32 = 8;
    const PITCH_MIN_LAG: i32 = 32;
    const PITCH_MAX_LAG: i32 = 288;
    const PITCH_OFFSET: &'static [&'static [i8]] = PITCH_OFFSET_MB_WB;
    const PITCH_CONTOUR: &'static ICDFContext = PITCH_CONTOUR_MB_WB;
}

/// Stateful SILK decoder.
///
/// Carries the quantization gain, normalized LSFs and synthesis history
/// from one frame into the next.
pub struct Decoder {
    bandwidth: Option<Bandwidth>,
    have_decoded: bool,
    log_gain: i32,
    nlsfs: [i16; 16],
    // Clamped synthesis output followed by scratch for the next frame.
    output: Vec<f32>,
    // Unclamped short-term filter history.
    lpc_history: Vec<f32>,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder {
            bandwidth: None,
            have_decoded: false,
            log_gain: 0,
            nlsfs: [0; 16],
            output: vec![0f32; LPC_HISTORY + MAX_FRAME_SAMPLES],
            lpc_history: vec![0f32; LPC_HISTORY + MAX_FRAME_SAMPLES],
        }
    }
}

impl Decoder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Decodes one frame into `out`, which must hold at least
    /// [`Bandwidth::frame_samples`] samples.
    pub fn decode(
        &mut self,
        frame: &[u8],
        out: &mut [f32],
        stereo: bool,
        nanoseconds: u64,
        bandwidth: Bandwidth,
    ) -> Result<(), Error> {
        if nanoseconds != NANOSECONDS_20MS {
            return Err(Error::UnsupportedFrameDuration);
        }

        if stereo {
            return Err(Error::UnsupportedStereo);
        }

        let required = bandwidth.frame_samples();
        if out.len() < required {
            return Err(Error::OutputBufferTooSmall {
                required,
                capacity: out.len(),
            });
        }

        let mut rd = RangeDecoder::new(frame);

        let voice_activity = rd.decode_logp(1);
        if rd.decode_logp(1) {
            return Err(Error::UnsupportedLowBitrateRedundancy);
        }

        if self.bandwidth != Some(bandwidth) {
            self.reset();
            self.bandwidth = Some(bandwidth);
        }

        let out = &mut out[..required];

        match bandwidth {
            Bandwidth::Narrow => self.decode_frame::<Narrowband>(&mut rd, voice_activity, out),
            Bandwidth::Medium => self.decode_frame::<Mediumband>(&mut rd, voice_activity, out),
            Bandwidth::Wide => self.decode_frame::<Wideband>(&mut rd, voice_activity, out),
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.have_decoded = false;
        self.log_gain = 0;
        self.nlsfs = [0; 16];
        for v in self.output.iter_mut() {
            *v = 0f32;
        }
        for v in self.lpc_history.iter_mut() {
            *v = 0f32;
        }
    }

    fn decode_frame<B: BandParams>(
        &mut self,
        rd: &mut RangeDecoder,
        voice_activity: bool,
        out: &mut [f32],
    ) {
        let frame_type = self.determine_frame_type(rd, voice_activity);
        let gains_q16 = self.decode_subframe_gains(rd, frame_type);

        trace!("frame type {:?} gains {:?}", frame_type, gains_q16);

        let stage1 = self.decode_lsf_stage_one::<B>(rd, frame_type);

        trace!("lsf stage1 index {}", stage1);

        let residuals_q10 = self.decode_lsf_residuals::<B>(rd, stage1);
        let nlsfs = self.reconstruct_nlsfs::<B>(&residuals_q10, stage1);
        let interpolated_nlsfs = self.interpolate_nlsfs::<B>(rd, &nlsfs);

        let interpolated_lpc_q12 = interpolated_nlsfs
            .map(|n1| B::limit_prediction_gain(B::nlsfs_to_lpc(&n1[..B::ORDER])));
        let lpc_q12 = B::limit_prediction_gain(B::nlsfs_to_lpc(&nlsfs[..B::ORDER]));

        self.nlsfs = nlsfs;

        let voiced = frame_type.voiced();
        let (pitch_lags, ltp_taps) = if voiced {
            (self.decode_pitch_lags::<B>(rd), self.decode_ltp_filter_taps(rd))
        } else {
            ([0; SUBFRAMES], [[0i8; LTP_ORDER]; SUBFRAMES])
        };
        let ltp_scale_q14 = self.decode_ltp_scale(rd, voiced);

        trace!("lags {:?} ltp scale {}", pitch_lags, ltp_scale_q14);

        let excitation_q23 = self.decode_excitation::<B>(rd, frame_type);

        self.synthesize::<B>(
            out,
            frame_type,
            &gains_q16,
            &lpc_q12,
            interpolated_lpc_q12.as_ref(),
            &pitch_lags,
            &ltp_taps,
            ltp_scale_q14,
            &excitation_q23,
        );

        self.have_decoded = true;
    }

    fn determine_frame_type(&self, rd: &mut RangeDecoder, voice_activity: bool) -> FrameType {
        if voice_activity {
            let k = rd.decode_icdf(FRAME_TYPE_ACTIVE);

            FrameType {
                signal: if k < 2 { Signal::Unvoiced } else { Signal::Voiced },
                quant_offset_high: k & 1 != 0,
            }
        } else {
            FrameType {
                signal: Signal::Inactive,
                quant_offset_high: rd.decode_icdf(FRAME_TYPE_INACTIVE) != 0,
            }
        }
    }

    /// Dequantizes the four subframe gains to linear Q16.
    fn decode_subframe_gains(&mut self, rd: &mut RangeDecoder, frame_type: FrameType) -> [f32; 4] {
        let mut gains = [0f32; SUBFRAMES];

        for (i, gain) in gains.iter_mut().enumerate() {
            let log_gain = if i == 0 {
                let msb = rd.decode_icdf(GAIN_MSB[frame_type.signal_index()]) as i32;
                let lsb = rd.decode_icdf(GAIN_LSB) as i32;
                let v = (msb << 3) | lsb;

                if self.have_decoded {
                    v.max(self.log_gain - 16)
                } else {
                    v
                }
            } else {
                let delta = rd.decode_icdf(GAIN_DELTA) as i32;

                (delta * 2 - 16)
                    .max(self.log_gain + delta - 4)
                    .max(0)
                    .min(63)
            };

            self.log_gain = log_gain;

            let in_log_q7 = (log_gain * 0x1D1C71 >> 16) + 2090;
            *gain = in_log_q7.log2lin() as f32;
        }

        gains
    }

    fn decode_lsf_stage_one<B: BandParams>(
        &self,
        rd: &mut RangeDecoder,
        frame_type: FrameType,
    ) -> usize {
        rd.decode_icdf(B::STAGE1[frame_type.voiced_index()])
    }

    /// Stage-2 VQ indices, dequantized to Q10 residuals with backwards
    /// prediction undone.
    fn decode_lsf_residuals<B: BandParams>(&self, rd: &mut RangeDecoder, stage1: usize) -> [i16; 16] {
        let mut indices = [0i32; 16];

        for (i, idx) in indices[..B::ORDER].iter_mut().enumerate() {
            let mut v = rd.decode_icdf(B::MAP[stage1][i]) as i32 - 4;

            if v == -4 {
                v -= rd.decode_icdf(LSF_STAGE2_EXTENSION) as i32;
            } else if v == 4 {
                v += rd.decode_icdf(LSF_STAGE2_EXTENSION) as i32;
            }

            *idx = v;
        }

        let mut residuals = [0i16; 16];
        let mut prev = None;

        for i in (0..B::ORDER).rev() {
            let idx = indices[i];
            let fix = if idx < 0 {
                102
            } else if idx > 0 {
                -102
            } else {
                0
            };

            let mut r = (idx * 1024 + fix) * B::STEP >> 16;

            if let Some(p) = prev {
                let weight = i32::from(B::PRED_WEIGHT[B::PRED_WEIGHT_INDEX[stage1][i]][i]);
                r += (p * weight) >> 8;
            }

            residuals[i] = r as i16;
            prev = Some(r);
        }

        residuals
    }

    fn reconstruct_nlsfs<B: BandParams>(&self, residuals_q10: &[i16; 16], stage1: usize) -> [i16; 16] {
        let mut nlsfs = [0i16; 16];

        for (i, nlsf) in nlsfs[..B::ORDER].iter_mut().enumerate() {
            let codebook = i32::from(B::CODEBOOK[stage1][i]);
            let weight = i32::from(B::WEIGHT[stage1][i]);
            let v = (codebook << 7) + (i32::from(residuals_q10[i]) << 14) / weight;

            *nlsf = v.max(0).min((1 << 15) - 1) as i16;
        }

        B::stabilize(&mut nlsfs[..B::ORDER]);

        nlsfs
    }

    /// Consumes the interpolation weight and, when a previous frame
    /// exists and the weight asks for it, blends the previous NLSFs in.
    fn interpolate_nlsfs<B: BandParams>(
        &self,
        rd: &mut RangeDecoder,
        nlsfs: &[i16; 16],
    ) -> Option<[i16; 16]> {
        let weight = rd.decode_icdf(LSF_INTERPOLATION_INDEX) as i32;

        if !self.have_decoded || weight == 4 {
            return None;
        }

        let mut blended = [0i16; 16];
        for (b, (&n0, &n2)) in blended[..B::ORDER]
            .iter_mut()
            .zip(self.nlsfs.iter().zip(nlsfs.iter()))
        {
            let n0 = i32::from(n0);
            let n2 = i32::from(n2);
            *b = (n0 + (weight * (n2 - n0) >> 2)) as i16;
        }

        Some(blended)
    }

    fn decode_pitch_lags<B: BandParams>(&self, rd: &mut RangeDecoder) -> [i32; SUBFRAMES] {
        let high = rd.decode_icdf(PITCH_HIGH_PART) as i32;
        let low = rd.decode_icdf(B::PITCH_LOW_PART) as i32;
        let lag = high * B::PITCH_SCALE + low + B::PITCH_MIN_LAG;
        let contour = rd.decode_icdf(B::PITCH_CONTOUR);

        let mut lags = [0; SUBFRAMES];
        for (l, &offset) in lags.iter_mut().zip(B::PITCH_OFFSET[contour]) {
            *l = (lag + i32::from(offset))
                .max(B::PITCH_MIN_LAG)
                .min(B::PITCH_MAX_LAG);
        }

        lags
    }

    fn decode_ltp_filter_taps(&self, rd: &mut RangeDecoder) -> [[i8; LTP_ORDER]; SUBFRAMES] {
        let periodicity = rd.decode_icdf(LTP_PERIODICITY);

        let mut taps = [[0i8; LTP_ORDER]; SUBFRAMES];
        for row in taps.iter_mut() {
            let filter = rd.decode_icdf(LTP_FILTER[periodicity]);
            row.copy_from_slice(LTP_TAPS[periodicity][filter]);
        }

        taps
    }

    /// Q14 rewhitening scale, decoded for voiced frames only.
    fn decode_ltp_scale(&self, rd: &mut RangeDecoder, voiced: bool) -> f32 {
        if voiced {
            f32::from(LTP_SCALE[rd.decode_icdf(LTP_SCALE_INDEX)])
        } else {
            f32::from(LTP_SCALE[0])
        }
    }

    fn split_pulses(rd: &mut RangeDecoder, level: usize, avail: i32) -> (i32, i32) {
        if avail == 0 {
            return (0, 0);
        }

        let left = rd.decode_icdf(PULSE_LOCATION[level][avail as usize - 1]) as i32;

        (left, avail - left)
    }

    /// Shell-coded excitation for the whole frame, in Q23.
    fn decode_excitation<B: BandParams>(
        &self,
        rd: &mut RangeDecoder,
        frame_type: FrameType,
    ) -> Vec<i32> {
        let mut seed = rd.decode_icdf(LCG_SEED) as u32;
        let rate_level = rd.decode_icdf(EXC_RATE[frame_type.voiced_index()]);

        trace!("lcg seed {} rate level {}", seed, rate_level);

        let mut pulse_counts = [0usize; 20];
        let mut lsb_counts = [0usize; 20];

        for (pulses, lsbs) in pulse_counts[..B::SHELL_BLOCKS]
            .iter_mut()
            .zip(lsb_counts[..B::SHELL_BLOCKS].iter_mut())
        {
            let mut p = rd.decode_icdf(PULSE_COUNT[rate_level]);

            if p == 17 {
                let mut l = 0;
                while p == 17 {
                    l += 1;
                    if l == 10 {
                        break;
                    }
                    p = rd.decode_icdf(PULSE_COUNT[9]);
                }
                if l == 10 {
                    p = rd.decode_icdf(PULSE_COUNT[10]);
                }
                *lsbs = l;
            }

            *pulses = p;
        }

        let mut excitation = vec![0i32; B::SHELL_BLOCKS * 16];

        for (block, &pulses) in excitation
            .chunks_mut(16)
            .zip(pulse_counts[..B::SHELL_BLOCKS].iter())
        {
            if pulses == 0 {
                continue;
            }

            let half = Self::split_pulses(rd, 0, pulses as i32);

            for (quarter_block, &avail8) in block.chunks_mut(8).zip([half.0, half.1].iter()) {
                let quarter = Self::split_pulses(rd, 1, avail8);

                for (pair_block, &avail4) in
                    quarter_block.chunks_mut(4).zip([quarter.0, quarter.1].iter())
                {
                    let pair = Self::split_pulses(rd, 2, avail4);

                    for (sample_pair, &avail2) in
                        pair_block.chunks_mut(2).zip([pair.0, pair.1].iter())
                    {
                        let (left, right) = Self::split_pulses(rd, 3, avail2);
                        sample_pair[0] = left;
                        sample_pair[1] = right;
                    }
                }
            }
        }

        for (block, &lsbs) in excitation
            .chunks_mut(16)
            .zip(lsb_counts[..B::SHELL_BLOCKS].iter())
        {
            for sample in block.iter_mut() {
                for _ in 0..lsbs {
                    *sample = *sample << 1 | rd.decode_icdf(EXC_LSB) as i32;
                }
            }
        }

        let signal_index = frame_type.signal_index();
        let quant_index = frame_type.quant_offset_index();

        for (block, &pulses) in excitation
            .chunks_mut(16)
            .zip(pulse_counts[..B::SHELL_BLOCKS].iter())
        {
            for sample in block.iter_mut() {
                if *sample != 0
                    && rd.decode_icdf(EXC_SIGN[signal_index][quant_index][pulses.min(6)]) == 0
                {
                    *sample = -*sample;
                }
            }
        }

        let offset = QUANT_OFFSET[frame_type.voiced_index()][quant_index];

        for sample in excitation.iter_mut() {
            let pulse = *sample;
            let mut v = (pulse * 256 | offset) - 20 * pulse.signum();

            seed = seed.wrapping_mul(196314165).wrapping_add(907633515);
            if seed & 0x8000_0000 != 0 {
                v = -v;
            }
            seed = seed.wrapping_add(pulse as u32);

            *sample = v;
        }

        excitation
    }

    /// Rewhitens the pitch history, applies the LTP filter and runs the
    /// short-term synthesis filter over the four subframes.
    #[allow(clippy::too_many_arguments)]
    fn synthesize<B: BandParams>(
        &mut self,
        out: &mut [f32],
        frame_type: FrameType,
        gains_q16: &[f32; SUBFRAMES],
        lpc_q12: &[f32; 16],
        interpolated_lpc_q12: Option<&[f32; 16]>,
        pitch_lags: &[i32; SUBFRAMES],
        ltp_taps: &[[i8; LTP_ORDER]; SUBFRAMES],
        ltp_scale_q14: f32,
        excitation_q23: &[i32],
    ) {
        let order = B::ORDER;
        let sf_size = B::SUBFRAME_SIZE;
        let frame_size = B::FRAME_SAMPLES;
        let ltp_scale = ltp_scale_q14 / 16384f32;
        let voiced = frame_type.voiced();

        let gains = gains_q16.map(|g| g / 65536f32);

        let mut residuals = [0f32; RES_HISTORY + MAX_FRAME_SAMPLES];
        for (r, &e) in residuals[RES_HISTORY..].iter_mut().zip(excitation_q23) {
            *r = e as f32 / 8388608f32;
        }

        for i in 0..SUBFRAMES {
            let coeffs = match interpolated_lpc_q12 {
                Some(interpolated) if i < 2 => interpolated,
                _ => lpc_q12,
            };
            let gain = gains[i];

            if voiced {
                let lag = pitch_lags[i] as usize;
                let before = lag + LTP_ORDER / 2;
                let (end, scale) = if i < 2 || interpolated_lpc_q12.is_none() {
                    (i * sf_size, ltp_scale)
                } else {
                    ((i - 2) * sf_size, 1f32)
                };

                if before > end {
                    // Rewhiten the previous output into residuals.
                    let start = LPC_HISTORY + i * sf_size - before;
                    let stop = LPC_HISTORY + i * sf_size - end;
                    let start_res = RES_HISTORY + i * sf_size - before;

                    for t in start..stop {
                        let mut sum = self.output[t];
                        for (k, &c) in coeffs[..order].iter().enumerate() {
                            sum -= c / 4096f32 * self.output[t - 1 - k];
                        }

                        residuals[start_res + (t - start)] =
                            sum.max(-1f32).min(1f32) * scale / gain;
                    }
                }

                if end != 0 {
                    // Rescale residuals shared with the previous subframe.
                    let rescale = gains[i - 1] / gains[i];
                    for r in residuals[RES_HISTORY + i * sf_size - end..RES_HISTORY + i * sf_size]
                        .iter_mut()
                    {
                        *r *= rescale;
                    }
                }

                for t in RES_HISTORY + i * sf_size..RES_HISTORY + (i + 1) * sf_size {
                    let mut sum = residuals[t];
                    for (o, &tap) in ltp_taps[i].iter().enumerate() {
                        sum += f32::from(tap) / 128f32 * residuals[t - lag + LTP_ORDER / 2 - o];
                    }
                    residuals[t] = sum;
                }
            }

            let base = LPC_HISTORY + i * sf_size;
            for j in 0..sf_size {
                let mut sum = residuals[RES_HISTORY + i * sf_size + j] * gain;
                for (k, &c) in coeffs[..order].iter().enumerate() {
                    sum += c / 4096f32 * self.lpc_history[base + j - 1 - k];
                }

                self.lpc_history[base + j] = sum;

                let clamped = sum.max(-1f32).min(1f32);
                self.output[base + j] = clamped;
                out[i * sf_size + j] = clamped;
            }
        }

        for i in 0..LPC_HISTORY {
            self.lpc_history[i] = self.lpc_history[i + frame_size];
            self.output[i] = self.output[i + frame_size];
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEST_FRAME: &[u8] = &[0x0b, 0xe4, 0xc1, 0x36, 0xec, 0xc5, 0x80];
    const TEST_FRAME_FOLLOWUP: &[u8] = &[0x07, 0xc9, 0x72, 0x27, 0xe1, 0x44, 0xea, 0x50];
    const INTERP_FRAME: &[u8] = &[
        0xac, 0xbd, 0xa9, 0xf7, 0x26, 0x24, 0x5a, 0xa4, 0x00, 0x37, 0xbf, 0x9c, 0xde, 0x0e, 0xcf,
        0x94, 0x64, 0xaa, 0xf9, 0x87, 0xd0, 0x79, 0x19, 0xa8, 0x21, 0xc0,
    ];
    const VOICED_FRAME: &[u8] = &[
        0xb4, 0xe2, 0x2c, 0x0e, 0x10, 0x65, 0x1d, 0xa9, 0x07, 0x5c, 0x36, 0x8f, 0x96, 0x7b, 0xf4,
        0x89, 0x41, 0x55, 0x98, 0x7a, 0x39, 0x2e, 0x6b, 0x71, 0xa4, 0x03, 0x70, 0xbf,
    ];
    const EXCITATION_FRAME: &[u8] = &[
        0x84, 0x2e, 0x67, 0xd3, 0x85, 0x65, 0x54, 0xe3, 0x9d, 0x90, 0x0a, 0xfa, 0x98, 0xea, 0xfd,
        0x98, 0x94, 0x41, 0xf9, 0x6d, 0x1d, 0xa0,
    ];

    const INACTIVE_LOW: FrameType = FrameType {
        signal: Signal::Inactive,
        quant_offset_high: false,
    };
    const UNVOICED_LOW: FrameType = FrameType {
        signal: Signal::Unvoiced,
        quant_offset_high: false,
    };

    const TEST_NLSFS: [i16; 16] = [
        2132, 3584, 5504, 7424, 9472, 11392, 13440, 15360, 17280, 19200, 21120, 23040, 25088,
        27008, 28928, 30848,
    ];

    const TEST_A32_Q17: [i32; 16] = [
        12974, 9765, 4176, 3646, -3766, -4429, -2292, -4663, -3441, -3848, -4493, -1614, -1960,
        -3112, -2153, -2898,
    ];

    const TEST_A_Q12: [f32; 16] = [
        405.0, 305.0, 131.0, 114.0, -118.0, -138.0, -72.0, -146.0, -108.0, -120.0, -140.0, -50.0,
        -61.0, -97.0, -67.0, -91.0,
    ];

    const EXPECTED_EXCITATION: [i32; 320] = [
        25, -25, -25, -25, 25, 25, -25, 25, 25, -25, 25, -25,
        -25, -25, 25, 25, -25, 25, 25, 25, 25, -211, -25, -25,
        25, -25, 25, -25, 25, -25, -25, -25, 25, 25, -25, -25,
        261, 517, -25, 25, -25, -25, -25, -25, -25, -25, 25, -25,
        -25, 25, -25, 25, -25, 25, 25, 25, 25, -25, 25, -25,
        25, 25, 25, 25, -25, 25, 25, 25, 25, -25, -25, -25,
        -25, -25, -25, -25, 25, 25, -25, 25, 211, 25, -25, -25,
        25, 211, 25, 25, 25, -25, 25, 25, -25, -25, -25, 25,
        25, 25, 25, -25, 25, 25, -25, 25, 25, 25, 25, 25,
        -25, -25, 25, -25, -25, 25, 25, -25, 25, 25, 25, -25,
        -25, -25, -25, -25, -25, 25, 25, 25, 25, 25, -25, 25,
        -25, -25, 25, 25, 25, 25, 25, 25, 25, -25, 25, -211,
        25, -25, -25, 25, 25, -25, -25, -25, -25, -25, -25, -25,
        25, 25, -25, -25, 25, 25, -25, 25, -25, -25, -25, 25,
        25, -25, 25, -25, -211, -25, 25, 25, 25, -25, -25, -25,
        -25, 25, 25, -25, -25, 25, -25, -25, 25, 25, 25, -25,
        -25, -25, -25, -25, 25, 25, -25, -211, 25, -25, 25, 25,
        -25, -25, 25, -25, 25, -25, 25, 25, -25, -211, -25, 25,
        25, -25, 25, 25, -25, -211, -25, 25, 25, 25, -25, -25,
        -25, -25, 25, -211, 25, 25, 25, 25, 25, 25, -25, -25,
        25, -25, 517, 517, -467, -25, 25, 25, -25, -25, 25, -25,
        25, 25, 25, -25, -25, -25, 25, 25, -25, -25, 25, -25,
        25, -25, 25, -25, 25, -25, -25, -25, 25, 25, -25, -25,
        211, 25, 25, 25, 25, -25, -25, 25, -25, -25, -25, -25,
        211, -25, 25, -25, -25, 25, -25, -25, 25, -25, 25, -25,
        25, 25, -25, 25, -25, 25, 25, 25, 25, -25, -25, -25,
        25, -25, 25, 25, -25, -25, -25, 25,
    ];

    const SYNTH_RESIDUALS: [f32; 320] = [
        7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06,
        -7.152557373046875e-06, 7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, -7.152557373046875e-06, 7.152557373046875e-06,
        7.152557373046875e-06, 7.152557373046875e-06,
    ];

    const SYNTH_EXPECTED: [f32; 320] = [
        2.3e-05, 2.5e-05, 2.7e-05, -1.8e-05, 2.5e-05, -2.1e-05,
        2.1e-05, -2.4e-05, 2.1e-05, 2.1e-05, -2.2e-05, -2.6e-05,
        1.8e-05, 2.2e-05, -2.3e-05, -2.5e-05, -2.7e-05, 1.7e-05,
        2e-05, -2.1e-05, 2.3e-05, 2.7e-05, -1.8e-05, -2.3e-05,
        -2.4e-05, 2e-05, -2.4e-05, 2.1e-05, 2.3e-05, 2.7e-05,
        2.9e-05, -1.6e-05, -2e-05, -2.5e-05, 1.8e-05, -2.6e-05,
        -2.8e-05, -2.8e-05, -2.8e-05, 1.6e-05, -2.5e-05, -2.5e-05,
        2.1e-05, 2.5e-05, 2.7e-05, -1.6e-05, 3e-05, -1.6e-05,
        -2e-05, -2.4e-05, -2.6e-05, 1.9e-05, 2.2e-05, 2.5e-05,
        -1.9e-05, -2.1e-05, -2.4e-05, -2.7e-05, -2.9e-05, -3e-05,
        1.7e-05, 2.2e-05, 2.6e-05, 3e-05, 3.3e-05, -1.2e-05,
        -1.8e-05, -2.3e-05, -2.6e-05, -2.9e-05, -2.9e-05, 1.6e-05,
        -2.5e-05, 2.1e-05, 2.4e-05, 2.8e-05, -1.7e-05, 2.7e-05,
        2.8e-05, 2.9e-05, -6e-06, 1.7e-05, 1.5e-05, 1.5e-05,
        -1.1e-05, 1.1e-05, 1.1e-05, -1.4e-05, 8e-06, -1.6e-05,
        8e-06, -1.6e-05, -1.6e-05, -1.8e-05, -1.7e-05, -1.7e-05,
        8e-06, -1.4e-05, -1.3e-05, -1.3e-05, -1.2e-05, 1.1e-05,
        -1e-05, 1.5e-05, 1.6e-05, -6e-06, 1.5e-05, -8e-06,
        -9e-06, -1.2e-05, 1.2e-05, 1.2e-05, 1.3e-05, -9e-06,
        -1.1e-05, 1.1e-05, 1.2e-05, -1.2e-05, 1.2e-05, 1.3e-05,
        1.4e-05, -1.1e-05, 1.3e-05, -1.1e-05, -1.3e-05, -1.6e-05,
        8e-06, -1.5e-05, 1e-05, -1.3e-05, -1.3e-05, -1.5e-05,
        1e-05, -1.3e-05, 1.1e-05, -1.1e-05, -1.1e-05, -1.3e-05,
        1.2e-05, -1.1e-05, 1.3e-05, 1.5e-05, 1.6e-05, 1.6e-05,
        1.7e-05, -7e-06, -1e-05, -1.3e-05, -1.5e-05, -1.7e-05,
        7e-06, -1.5e-05, -1.5e-05, 9e-06, 1.2e-05, -1.1e-05,
        1.2e-05, -1e-05, 1.3e-05, -1.1e-05, 1.2e-05, 1.2e-05,
        1.4e-05, 1.4e-05, -7e-06, 1.2e-05, -1e-05, 1e-05,
        1e-05, 1.1e-05, -1e-05, 9e-06, -1.1e-05, 8e-06,
        9e-06, -1e-05, -1.3e-05, -1.3e-05, -1.4e-05, 6e-06,
        9e-06, -1e-05, -1.1e-05, -1.1e-05, -1.2e-05, 8e-06,
        1.1e-05, 1.3e-05, -7e-06, -8e-06, -1e-05, -1.1e-05,
        9e-06, -1e-05, -1.1e-05, 9e-06, -1e-05, -1.1e-05,
        1e-05, 1.2e-05, -9e-06, -1e-05, -1e-05, -1.2e-05,
        9e-06, 1.1e-05, 1.2e-05, 1.4e-05, -7e-06, 1.2e-05,
        -9e-06, 1.1e-05, -1e-05, 1e-05, -1.1e-05, -1.2e-05,
        -1.3e-05, -1.3e-05, -1.4e-05, 7e-06, -1.2e-05, 9e-06,
        -1e-05, -1e-05, -1.1e-05, 1e-05, 1.2e-05, 1.3e-05,
        -6e-06, 1.3e-05, -7e-06, -9e-06, 1e-05, -1e-05,
        -1.1e-05, 8e-06, -1e-05, -1.2e-05, -1.2e-05, 9e-06,
        9e-06, 1.1e-05, 1.3e-05, 1.4e-05, 1.5e-05, 1.4e-05,
        -7e-06, 1.2e-05, 1.1e-05, 1.2e-05, -1e-05, -1.2e-05,
        8e-06, 8e-06, 9e-06, 9e-06, -1e-05, -1.2e-05,
        -1.4e-05, -1.4e-05, 6e-06, 8e-06, -1e-05, -1.2e-05,
        1e-05, -1e-05, 1e-05, 1.2e-05, 1.3e-05, -8e-06,
        -9e-06, -1e-05, 9e-06, -1e-05, -1.1e-05, 8e-06,
        -1.1e-05, -1.2e-05, -1.2e-05, -1.2e-05, -1.3e-05, 8e-06,
        -1.1e-05, -1.1e-05, 1e-05, 1.3e-05, -7e-06, -8e-06,
        -9e-06, -1e-05, 9e-06, 1.1e-05, 1.3e-05, -7e-06,
        1.3e-05, -8e-06, 1.1e-05, -1e-05, 1.1e-05, 1.1e-05,
        1.2e-05, 1.2e-05, 1.3e-05, -8e-06, 1e-05, -1.1e-05,
        9e-06, -1.2e-05, -1.3e-05, -1.4e-05, 6e-06, -1.3e-05,
        -1.3e-05, 8e-06, -1.1e-05, -1.2e-05, -1.2e-05, 1e-05,
        1.1e-05, 1.3e-05,
    ];

    const FRAME1_EXPECTED: [f32; 320] = [
        2.3e-05, 2.5e-05, 2.7e-05, -1.8e-05, 2.5e-05, -2.1e-05,
        2.1e-05, -2.4e-05, 2.1e-05, 2.1e-05, -2.2e-05, -2.6e-05,
        1.8e-05, 2.2e-05, -2.3e-05, -2.5e-05, -2.7e-05, 1.7e-05,
        2e-05, -2.1e-05, 2.3e-05, 2.7e-05, -1.8e-05, -2.3e-05,
        -2.4e-05, 2e-05, -2.4e-05, 2.1e-05, 2.3e-05, 2.7e-05,
        2.9e-05, -1.6e-05, -2e-05, -2.5e-05, 1.8e-05, -2.6e-05,
        -2.8e-05, -2.8e-05, -2.8e-05, 1.6e-05, -2.5e-05, -2.5e-05,
        2.1e-05, 2.5e-05, 2.7e-05, -1.6e-05, 3e-05, -1.6e-05,
        -2e-05, -2.4e-05, -2.6e-05, 1.9e-05, 2.2e-05, 2.5e-05,
        -1.9e-05, -2.1e-05, -2.4e-05, -2.7e-05, -2.9e-05, -3e-05,
        1.7e-05, 2.2e-05, 2.6e-05, 3e-05, 3.3e-05, -1.2e-05,
        -1.8e-05, -2.3e-05, -2.6e-05, -2.9e-05, -2.9e-05, 1.6e-05,
        -2.5e-05, 2.1e-05, 2.4e-05, 2.8e-05, -1.7e-05, 2.7e-05,
        2.8e-05, 2.9e-05, -6e-06, 1.7e-05, 1.5e-05, 1.5e-05,
        -1.1e-05, 1.1e-05, 1.1e-05, -1.4e-05, 8e-06, -1.6e-05,
        8e-06, -1.6e-05, -1.6e-05, -1.8e-05, -1.7e-05, -1.7e-05,
        8e-06, -1.4e-05, -1.3e-05, -1.3e-05, -1.2e-05, 1.1e-05,
        -1e-05, 1.5e-05, 1.6e-05, -6e-06, 1.5e-05, -8e-06,
        -9e-06, -1.2e-05, 1.2e-05, 1.2e-05, 1.3e-05, -9e-06,
        -1.1e-05, 1.1e-05, 1.2e-05, -1.2e-05, 1.2e-05, 1.3e-05,
        1.4e-05, -1.1e-05, 1.3e-05, -1.1e-05, -1.3e-05, -1.6e-05,
        8e-06, -1.5e-05, 1e-05, -1.3e-05, -1.3e-05, -1.5e-05,
        1e-05, -1.3e-05, 1.1e-05, -1.1e-05, -1.1e-05, -1.3e-05,
        1.2e-05, -1.1e-05, 1.3e-05, 1.5e-05, 1.6e-05, 1.6e-05,
        1.7e-05, -7e-06, -1e-05, -1.3e-05, -1.5e-05, -1.7e-05,
        7e-06, -1.5e-05, -1.5e-05, 9e-06, 1.2e-05, -1.1e-05,
        1.2e-05, -1e-05, 1.3e-05, -1.1e-05, 1.2e-05, 1.2e-05,
        1.4e-05, 1.4e-05, -7e-06, 1.2e-05, -1e-05, 1e-05,
        1e-05, 1.1e-05, -1e-05, 9e-06, -1.1e-05, 8e-06,
        9e-06, -1e-05, -1.3e-05, -1.3e-05, -1.4e-05, 6e-06,
        9e-06, -1e-05, -1.1e-05, -1.1e-05, -1.2e-05, 8e-06,
        1.1e-05, 1.3e-05, -7e-06, -8e-06, -1e-05, -1.1e-05,
        9e-06, -1e-05, -1.1e-05, 9e-06, -1e-05, -1.1e-05,
        1e-05, 1.2e-05, -9e-06, -1e-05, -1e-05, -1.2e-05,
        9e-06, 1.1e-05, 1.2e-05, 1.4e-05, -7e-06, 1.2e-05,
        -9e-06, 1.1e-05, -1e-05, 1e-05, -1.1e-05, -1.2e-05,
        -1.3e-05, -1.3e-05, -1.4e-05, 7e-06, -1.2e-05, 9e-06,
        -1e-05, -1e-05, -1.1e-05, 1e-05, 1.2e-05, 1.3e-05,
        -6e-06, 1.3e-05, -7e-06, -9e-06, 1e-05, -1e-05,
        -1.1e-05, 8e-06, -1e-05, -1.2e-05, -1.2e-05, 9e-06,
        9e-06, 1.1e-05, 1.3e-05, 1.4e-05, 1.5e-05, 1.4e-05,
        -7e-06, 1.2e-05, 1.1e-05, 1.2e-05, -1e-05, -1.2e-05,
        8e-06, 8e-06, 9e-06, 9e-06, -1e-05, -1.2e-05,
        -1.4e-05, -1.4e-05, 6e-06, 8e-06, -1e-05, -1.2e-05,
        1e-05, -1e-05, 1e-05, 1.2e-05, 1.3e-05, -8e-06,
        -9e-06, -1e-05, 9e-06, -1e-05, -1.1e-05, 8e-06,
        -1.1e-05, -1.2e-05, -1.2e-05, -1.2e-05, -1.3e-05, 8e-06,
        -1.1e-05, -1.1e-05, 1e-05, 1.3e-05, -7e-06, -8e-06,
        -9e-06, -1e-05, 9e-06, 1.1e-05, 1.3e-05, -7e-06,
        1.3e-05, -8e-06, 1.1e-05, -1e-05, 1.1e-05, 1.1e-05,
        1.2e-05, 1.2e-05, 1.3e-05, -8e-06, 1e-05, -1.1e-05,
        9e-06, -1.2e-05, -1.3e-05, -1.4e-05, 6e-06, -1.3e-05,
        -1.3e-05, 8e-06, -1.1e-05, -1.2e-05, -1.2e-05, 1e-05,
        1.1e-05, 1.3e-05,
    ];

    const FRAME2_EXPECTED: [f32; 320] = [
        1.4e-05, -6e-06, -7e-06, -9e-06, 1e-05, 1.1e-05,
        -9e-06, 1.1e-05, 1.1e-05, -9e-06, 1e-05, -1e-05,
        -1.1e-05, -1.4e-05, 7e-06, 8e-06, -1.1e-05, 1.1e-05,
        1.1e-05, 1.3e-05, 1.3e-05, 1.4e-05, -7e-06, 1.1e-05,
        1.1e-05, 1.2e-05, 1.1e-05, 1.2e-05, -9e-06, 9e-06,
        -1.2e-05, -1.3e-05, 6e-06, 8e-06, 8e-06, 1e-05,
        1.2e-05, 1.2e-05, 1.2e-05, -9e-06, -1.1e-05, -1.3e-05,
        7e-06, -1.3e-05, 8e-06, 9e-06, 1.1e-05, -9e-06,
        -1.1e-05, 9e-06, -1.1e-05, -1.2e-05, -1.3e-05, 8e-06,
        1e-05, -9e-06, 1.1e-05, -8e-06, -1e-05, 9e-06,
        -1e-05, 1e-05, 1.1e-05, -8e-06, 1.1e-05, -9e-06,
        -1e-05, 2.9e-05, -8e-06, -1e-05, 9e-06, 1.2e-05,
        -1e-05, -1.1e-05, 1e-05, 1e-05, -1e-05, -1.1e-05,
        9e-06, 1.1e-05, 1.1e-05, 1.2e-05, -8e-06, 1.1e-05,
        -9e-06, -1.1e-05, 8e-06, -1.1e-05, -1.2e-05, 7e-06,
        -1.1e-05, -1.2e-05, -1.3e-05, 9e-06, 9e-06, 1.2e-05,
        -8e-06, -9e-06, 1.1e-05, -9e-06, -1e-05, -1.1e-05,
        -1.2e-05, -1.3e-05, 8e-06, -1.1e-05, 1e-05, -9e-06,
        -9e-06, -1.2e-05, 1e-05, -1e-05, -1e-05, 1.1e-05,
        1.2e-05, -8e-06, 1.2e-05, -7e-06, 1.2e-05, -9e-06,
        1.1e-05, 1.1e-05, 1.2e-05, -8e-06, 1.1e-05, 1.2e-05,
        1.2e-05, 1.2e-05, 1.2e-05, 1.2e-05, 1.2e-05, -9e-06,
        -1.2e-05, -1.4e-05, -1.5e-05, 5e-06, 7e-06, 9e-06,
        -1.1e-05, -1.1e-05, 9e-06, -1.1e-05, 9e-06, -1e-05,
        -1e-05, -1.2e-05, -1.2e-05, 9e-06, 1.1e-05, -8e-06,
        1.2e-05, -8e-06, 1.2e-05, -9e-06, -9e-06, -1.1e-05,
        9e-06, -1e-05, 9e-06, 1.2e-05, 1.3e-05, -8e-06,
        -9e-06, -1.1e-05, 9e-06, 1e-05, 1.1e-05, -9e-06,
        -1e-05, 1e-05, 1e-05, 1.1e-05, -9e-06, -1e-05,
        2.9e-05, -9e-06, 1e-05, -1e-05, -1e-05, 8e-06,
        -1.2e-05, 9e-06, 9e-06, -9e-06, 1e-05, -1e-05,
        1e-05, -1.1e-05, -1.1e-05, 9e-06, -1.1e-05, 1e-05,
        -1.1e-05, 1.1e-05, 1.1e-05, 1.2e-05, -8e-06, 1.1e-05,
        -9e-06, 1e-05, 1e-05, -9e-06, -1.1e-05, 9e-06,
        -1.1e-05, 8e-06, 1e-05, -9e-06, -1.2e-05, 9e-06,
        1e-05, 1.1e-05, 1.3e-05, 1.3e-05, -8e-06, -1e-05,
        -1.2e-05, -1.3e-05, -1.4e-05, 6e-06, 8e-06, -1.1e-05,
        1e-05, 1.2e-05, 1.3e-05, -8e-06, 1.2e-05, -9e-06,
        1e-05, 1.1e-05, 1.2e-05, 1.3e-05, -8e-06, -1e-05,
        -1.3e-05, 7e-06, 8e-06, 1e-05, -1e-05, 1e-05,
        1e-05, 1.2e-05, -9e-06, 1.1e-05, -1e-05, -1.2e-05,
        7e-06, 1e-05, 1.1e-05, -9e-06, -1e-05, -1.3e-05,
        -1.3e-05, 7e-06, 9e-06, 1.1e-05, -9e-06, 1.1e-05,
        -9e-06, 1.1e-05, 1.2e-05, 1.3e-05, -8e-06, -1e-05,
        9e-06, -1.1e-05, 2.9e-05, -9e-06, -1e-05, -1.3e-05,
        8e-06, -1.2e-05, 8e-06, -1.1e-05, 1e-05, 1e-05,
        1.2e-05, 1.3e-05, -7e-06, -9e-06, -1.2e-05, -1.3e-05,
        7e-06, 9e-06, -1e-05, -1.1e-05, 9e-06, 1.1e-05,
        -1e-05, -1e-05, -1.1e-05, -1.2e-05, 8e-06, -1.1e-05,
        -1.1e-05, -1.1e-05, -1.1e-05, 9e-06, -1e-05, 1.1e-05,
        1.3e-05, -7e-06, -9e-06, 1.1e-05, -8e-06, -1e-05,
        -1.1e-05, 1e-05, -1.1e-05, -1.1e-05, -1.2e-05, 9e-06,
        -1e-05, 1e-05, -9e-06, -1e-05, -1.1e-05, 1e-05,
        -1e-05, 1.1e-05,
    ];

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                (a - e).abs() < 1e-6,
                "sample {} differs: {} vs {}",
                i,
                a,
                e
            );
        }
    }

    #[test]
    fn rejects_unsupported_duration() {
        let mut out = [0f32; 320];

        assert_eq!(
            Decoder::new().decode(TEST_FRAME, &mut out, false, 1, Bandwidth::Wide),
            Err(Error::UnsupportedFrameDuration)
        );
    }

    #[test]
    fn rejects_stereo() {
        let mut out = [0f32; 320];

        assert_eq!(
            Decoder::new().decode(TEST_FRAME, &mut out, true, NANOSECONDS_20MS, Bandwidth::Wide),
            Err(Error::UnsupportedStereo)
        );
    }

    #[test]
    fn rejects_short_output_buffer() {
        let mut out = [0f32; 50];

        assert_eq!(
            Decoder::new().decode(TEST_FRAME, &mut out, false, NANOSECONDS_20MS, Bandwidth::Wide),
            Err(Error::OutputBufferTooSmall {
                required: 320,
                capacity: 50,
            })
        );
    }

    #[test]
    fn rejects_low_bitrate_redundancy() {
        let mut d = Decoder::new();
        let mut out = [0f32; 320];

        let frame = [0x40, 0xe4, 0xc1, 0x36, 0xec, 0xc5, 0x80];
        assert_eq!(
            d.decode(&frame, &mut out, false, NANOSECONDS_20MS, Bandwidth::Wide),
            Err(Error::UnsupportedLowBitrateRedundancy)
        );
        assert_eq!(d.bandwidth, None);
        assert!(!d.have_decoded);

        d.decode(TEST_FRAME, &mut out, false, NANOSECONDS_20MS, Bandwidth::Wide)
            .unwrap();
        assert_close(&out, &FRAME1_EXPECTED);
    }

    #[test]
    fn frame_type_for_inactive_signal() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(TEST_FRAME, 31, 536_870_912, 437_100_388);

        let frame_type = d.determine_frame_type(&mut rd, false);

        assert_eq!(frame_type.signal, Signal::Inactive);
        assert!(frame_type.quant_offset_high);
    }

    #[test]
    fn subframe_gain_dequantization() {
        let mut d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(TEST_FRAME, 31, 482_344_960, 437_100_388);

        let gains = d.decode_subframe_gains(&mut rd, INACTIVE_LOW);

        assert_eq!(gains, [210944.0, 112640.0, 96256.0, 96256.0]);
    }

    #[test]
    fn lsf_stage_one_index() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(TEST_FRAME, 47, 722_810_880, 387_065_757);

        assert_eq!(d.decode_lsf_stage_one::<Wideband>(&mut rd, UNVOICED_LOW), 9);
    }

    #[test]
    fn lsf_stage_two_residuals() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(TEST_FRAME, 47, 50_822_640, 5_895_957);

        let mut expected = [0i16; 16];
        expected[0] = 138;

        assert_eq!(d.decode_lsf_residuals::<Wideband>(&mut rd, 9), expected);
    }

    #[test]
    fn nlsf_reconstruction() {
        let d = Decoder::new();
        let mut residuals = [0i16; 16];
        residuals[0] = 138;

        assert_eq!(d.reconstruct_nlsfs::<Wideband>(&residuals, 9), TEST_NLSFS);
    }

    #[test]
    fn nlsf_reconstruction_clamps_overflow() {
        let d = Decoder::new();
        let mut residuals = [0i16; 16];
        residuals[15] = 20000;

        assert_eq!(
            d.reconstruct_nlsfs::<Wideband>(&residuals, 0),
            [
                896, 2944, 4864, 6912, 8832, 10880, 12800, 14848, 16768, 18816, 20736, 22784,
                24704, 26624, 28544, 32421
            ]
        );
    }

    #[test]
    fn stabilization_leaves_valid_nlsfs_alone() {
        let mut nlsfs = TEST_NLSFS;

        Wideband::stabilize(&mut nlsfs);

        assert_eq!(nlsfs, TEST_NLSFS);
    }

    #[test]
    fn stabilization_spreads_degenerate_nlsfs() {
        let mut nlsfs = [0i16; 16];

        Wideband::stabilize(&mut nlsfs);

        assert_eq!(
            nlsfs,
            [100, 103, 143, 146, 149, 152, 157, 171, 185, 195, 206, 209, 217, 226, 233, 236]
        );
    }

    #[test]
    fn stabilization_sorts_descending_nlsfs() {
        let mut nlsfs = [0i16; 16];
        for (i, v) in nlsfs.iter_mut().enumerate() {
            *v = 32000 - 100 * i as i16;
        }

        Wideband::stabilize(&mut nlsfs);

        assert_eq!(
            nlsfs,
            [
                30604, 30607, 30702, 30800, 30900, 31005, 31101, 31201, 31298, 31495, 31506,
                31595, 31690, 31781, 31831, 31914
            ]
        );
    }

    #[test]
    fn interpolation_skipped_at_full_weight() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(TEST_FRAME, 55, 493_249_168, 174_371_199);

        assert_eq!(d.interpolate_nlsfs::<Wideband>(&mut rd, &TEST_NLSFS), None);
    }

    #[test]
    fn interpolation_blends_previous_nlsfs() {
        let mut d = Decoder::new();
        d.have_decoded = true;
        d.nlsfs = [
            518, 380, 4444, 6982, 8752, 10510, 12381, 14102, 15892, 17651, 19340, 21888, 23936,
            25984, 28160, 30208,
        ];

        let n2 = [
            215, 1447, 3712, 5120, 7168, 9088, 11264, 13184, 15232, 17536, 19712, 21888, 24192,
            26240, 28416, 30336,
        ];
        let mut rd = RangeDecoder::from_parts(INTERP_FRAME, 65, 1_231_761_776, 1_068_195_183);

        assert_eq!(
            d.interpolate_nlsfs::<Wideband>(&mut rd, &n2),
            Some([
                442, 646, 4261, 6516, 8356, 10154, 12101, 13872, 15727, 17622, 19433, 21888,
                24000, 26048, 28224, 30240
            ])
        );
    }

    #[test]
    fn interpolation_skipped_without_previous_frame() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(INTERP_FRAME, 65, 1_231_761_776, 1_068_195_183);

        let n2 = [0i16; 16];

        assert_eq!(d.interpolate_nlsfs::<Wideband>(&mut rd, &n2), None);
    }

    #[test]
    fn lpc_coefficients_from_nlsfs() {
        assert_eq!(Wideband::nlsfs_to_lpc(&TEST_NLSFS), TEST_A32_Q17);
    }

    #[test]
    fn prediction_gain_limiting() {
        assert_eq!(Wideband::limit_prediction_gain(TEST_A32_Q17), TEST_A_Q12);
    }

    #[test]
    fn prediction_gain_limiting_is_idempotent() {
        let mut requantized = [0i32; 16];
        for (r, &l) in requantized.iter_mut().zip(TEST_A_Q12.iter()) {
            *r = (l as i32) << 5;
        }

        assert_eq!(Wideband::limit_prediction_gain(requantized), TEST_A_Q12);
    }

    #[test]
    fn pitch_lag_decoding() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(VOICED_FRAME, 73, 30_770_362, 1_380_489);

        assert_eq!(d.decode_pitch_lags::<Wideband>(&mut rd), [206, 206, 206, 206]);
    }

    #[test]
    fn ltp_filter_taps() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(VOICED_FRAME, 89, 253_853_952, 138_203_876);

        assert_eq!(
            d.decode_ltp_filter_taps(&mut rd),
            [
                [1, 1, 8, 1, 1],
                [2, 0, 77, 11, 9],
                [1, 1, 8, 1, 1],
                [-1, 36, 64, 27, -6],
            ]
        );
    }

    #[test]
    fn ltp_scaling_voiced() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(VOICED_FRAME, 105, 160_412_192, 164_623_240);

        assert_eq!(d.decode_ltp_scale(&mut rd, true), 15565.0);
    }

    #[test]
    fn ltp_scaling_unvoiced_consumes_nothing() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(VOICED_FRAME, 105, 160_412_192, 164_623_240);

        assert_eq!(d.decode_ltp_scale(&mut rd, false), 15565.0);
        assert_eq!(rd.bits_read(), 105);
    }

    #[test]
    fn excitation_decoding() {
        let d = Decoder::new();
        let mut rd = RangeDecoder::from_parts(EXCITATION_FRAME, 71, 851_775_140, 846_837_397);

        let excitation = d.decode_excitation::<Wideband>(&mut rd, UNVOICED_LOW);

        assert_eq!(excitation, EXPECTED_EXCITATION);
    }

    #[test]
    fn excitation_decoding_is_deterministic() {
        let d = Decoder::new();
        let mut first = RangeDecoder::from_parts(EXCITATION_FRAME, 71, 851_775_140, 846_837_397);
        let mut second = RangeDecoder::from_parts(EXCITATION_FRAME, 71, 851_775_140, 846_837_397);

        assert_eq!(
            d.decode_excitation::<Wideband>(&mut first, UNVOICED_LOW),
            d.decode_excitation::<Wideband>(&mut second, UNVOICED_LOW)
        );
    }

    #[test]
    fn lpc_synthesis_unvoiced() {
        let mut d = Decoder::new();
        let mut out = [0f32; 320];

        let excitation: Vec<i32> = SYNTH_RESIDUALS
            .iter()
            .map(|&r| (r * 8388608.0) as i32)
            .collect();

        d.synthesize::<Wideband>(
            &mut out,
            UNVOICED_LOW,
            &[210944.0, 112640.0, 96256.0, 96256.0],
            &TEST_A_Q12,
            None,
            &[0; 4],
            &[[0; 5]; 4],
            15565.0,
            &excitation,
        );

        assert_close(&out, &SYNTH_EXPECTED);
    }

    #[test]
    fn decode_sequential_frames() {
        let mut d = Decoder::new();
        let mut out = [0f32; 320];

        d.decode(TEST_FRAME, &mut out, false, NANOSECONDS_20MS, Bandwidth::Wide)
            .unwrap();
        assert_close(&out, &FRAME1_EXPECTED);

        d.decode(
            TEST_FRAME_FOLLOWUP,
            &mut out,
            false,
            NANOSECONDS_20MS,
            Bandwidth::Wide,
        )
        .unwrap();
        assert_close(&out, &FRAME2_EXPECTED);
    }

    #[test]
    fn decode_mediumband_frame() {
        let mut d = Decoder::new();
        let mut out = [0f32; 240];

        d.decode(TEST_FRAME, &mut out, false, NANOSECONDS_20MS, Bandwidth::Medium)
            .unwrap();
        assert!(out.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn bandwidth_switch_resets_state() {
        let mut d = Decoder::new();
        let mut out = [0f32; 320];

        d.decode(TEST_FRAME, &mut out, false, NANOSECONDS_20MS, Bandwidth::Wide)
            .unwrap();

        let mut narrow = [0f32; 160];
        d.decode(TEST_FRAME, &mut narrow, false, NANOSECONDS_20MS, Bandwidth::Narrow)
            .unwrap();

        d.decode(TEST_FRAME, &mut out, false, NANOSECONDS_20MS, Bandwidth::Wide)
            .unwrap();
        assert_close(&out, &FRAME1_EXPECTED);
    }
}
