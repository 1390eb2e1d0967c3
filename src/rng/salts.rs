use crate::HOUSE_EDGE;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;

/// the crash/slide family does not run on the seed-pair stream. each round
/// publishes a game hash, and the multiplier is the keyed hash of that
/// round hash under the site salt:
///
///   n = first 4 bytes of HMAC-SHA256(key = salt, msg = game_hash), big-endian
///   multiplier = max(1.00, trunc2((2^32 / (n + 1)) * (1 - house edge)))
pub fn crash_point(game_hash: &str, salt: &str) -> f64 {
    let mut mac = Hmac::<Sha256>::new_from_slice(salt.as_bytes())
        .expect("hmac accepts keys of any length");
    mac.update(game_hash.as_bytes());
    let digest = mac.finalize().into_bytes();
    let n = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let point = (4_294_967_296.0 / (n as f64 + 1.0)) * (1.0 - HOUSE_EDGE);
    trunc2(point).max(1.0)
}

/// approximation of `crash_point` from a seed-pair float, used when no
/// game hash / salt are supplied so the scanner can still enumerate the
/// family. n/2^32 ~ f maps 2^32/(n+1) onto 1/(1-f) under the complement,
/// so the two modes share a distribution but not individual outcomes.
pub fn fallback_point(f: f64) -> f64 {
    let point = (1.0 - HOUSE_EDGE) / (1.0 - f);
    trunc2(point).max(1.0)
}

/// multipliers are published truncated, not rounded, to 2 decimals
pub fn trunc2(x: f64) -> f64 {
    (x * 100.0).floor() / 100.0
}
