//! Default salts for new stamps.

use hashcash_core::charset::is_field_byte;
use rand::RngCore;

/// Draw `seed_length` random bytes and keep those that, masked to 7 bits,
/// fall in the stamp field alphabet.
///
/// The result is at most `seed_length` characters and may be shorter.
pub fn random_salt<R: RngCore + ?Sized>(rng: &mut R, seed_length: usize) -> String {
    let mut seed = vec![0u8; seed_length];
    rng.fill_bytes(&mut seed);
    seed.into_iter()
        .map(|b| b & 0x7f)
        .filter(|b| is_field_byte(*b))
        .map(char::from)
        .collect()
}
