pub(crate) const CHANNEL_MAX: i32 = 255;

/// Round half away from zero; every caller feeds non-negative sums so this is round-half-up.
pub(crate) fn round_i32(v: f64) -> i32 {
    let r = v.round();
    if r >= f64::from(i32::MAX) {
        i32::MAX
    } else if r <= f64::from(i32::MIN) {
        i32::MIN
    } else {
        r as i32
    }
}

pub(crate) fn clamp_channel(v: i32) -> i32 {
    v.clamp(0, CHANNEL_MAX)
}

/// Round to the nearest integer, then clamp into `[0, 255]`.
pub(crate) fn round_clamp_channel(v: f64) -> i32 {
    clamp_channel(round_i32(v))
}

pub(crate) fn saturating_channel_add(channel: i32, increment: i32) -> i32 {
    clamp_channel(channel.saturating_add(increment))
}

/// Pack a channel value for 8-bit codecs.
pub(crate) fn channel_to_u8(v: i32) -> u8 {
    clamp_channel(v) as u8
}
