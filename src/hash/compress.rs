//! SHA-1 compression function.

use super::{BLOCK_SIZE, STATE_WORDS, schedule::expand};

/// Additive constants, one per 20-round stage.
const ROUND_CONSTANTS: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

#[inline(always)]
fn choice(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn majority(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Boolean mix and constant for `round`.
#[inline(always)]
pub(crate) fn round_function(round: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match round {
        0..=19 => (choice(b, c, d), ROUND_CONSTANTS[0]),
        20..=39 => (parity(b, c, d), ROUND_CONSTANTS[1]),
        40..=59 => (majority(b, c, d), ROUND_CONSTANTS[2]),
        _ => (parity(b, c, d), ROUND_CONSTANTS[3]),
    }
}

/// Fold one 512-bit block into the chaining state.
///
/// Runs the 80 rounds over the working registers, then adds them back into
/// `state` modulo 2^32.
pub fn compress(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
    let w = expand(block);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (t, &word) in w.iter().enumerate() {
        let (f, k) = round_function(t, b, c, d);
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::INITIAL_STATE;
    use crate::hash::padding::pad_bytes;

    #[test]
    fn choice_selects_c_or_d_by_b() {
        assert_eq!(choice(0xFFFF_0000, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
        assert_eq!(choice(0, 0xFFFF_FFFF, 0), 0);
    }

    #[test]
    fn majority_is_bitwise_vote() {
        assert_eq!(majority(0b1100, 0b1010, 0b0110), 0b1110);
        assert_eq!(majority(0, 0, u32::MAX), 0);
    }

    #[test]
    fn stage_boundaries() {
        let (b, c, d) = (0xF0F0_F0F0, 0xCCCC_CCCC, 0xAAAA_AAAA);
        assert_eq!(round_function(19, b, c, d), (choice(b, c, d), 0x5A82_7999));
        assert_eq!(round_function(20, b, c, d), (parity(b, c, d), 0x6ED9_EBA1));
        assert_eq!(round_function(39, b, c, d).1, 0x6ED9_EBA1);
        assert_eq!(round_function(40, b, c, d), (majority(b, c, d), 0x8F1B_BCDC));
        assert_eq!(round_function(59, b, c, d).1, 0x8F1B_BCDC);
        assert_eq!(round_function(60, b, c, d), (parity(b, c, d), 0xCA62_C1D6));
        assert_eq!(round_function(79, b, c, d).1, 0xCA62_C1D6);
    }

    #[test]
    fn single_block_abc() {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(&pad_bytes(b"abc"));

        let mut state = INITIAL_STATE;
        compress(&mut state, &block);
        assert_eq!(
            state,
            [0xA999_3E36, 0x4706_816A, 0xBA3E_2571, 0x7850_C26C, 0x9CD0_D89D]
        );
    }

    #[test]
    fn state_carries_across_blocks() {
        let block = [0x5Au8; BLOCK_SIZE];
        let mut once = INITIAL_STATE;
        compress(&mut once, &block);
        let mut twice = once;
        compress(&mut twice, &block);
        assert_ne!(once, twice);
        assert_ne!(once, INITIAL_STATE);
    }
}
