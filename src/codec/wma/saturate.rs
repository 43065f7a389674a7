//! Conversion of engine fixed-point output to 32-bit PCM

/// Left shift that removes the engine's fixed-point headroom
const FIXED_POINT_SHIFT: u32 = 2;

const SAMPLE_MAX: i64 = i32::MAX as i64;
const SAMPLE_MIN: i64 = -SAMPLE_MAX;

/// Scale one native sample, pinning it to `[-(2^31 - 1), 2^31 - 1]`
#[inline]
pub fn saturate_sample(v: i32) -> i32 {
    ((v as i64) << FIXED_POINT_SHIFT).clamp(SAMPLE_MIN, SAMPLE_MAX) as i32
}

/// Scale and saturate every sample in place
pub fn saturate_in_place(samples: &mut [i32]) {
    for sample in samples.iter_mut() {
        *sample = saturate_sample(*sample);
    }
}
