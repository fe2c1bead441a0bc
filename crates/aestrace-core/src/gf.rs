//! Arithmetic in GF(2^8) under the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1.

/// Multiplies a field element by x: shift left one bit and reduce with 0x1b
/// if a bit fell off the top.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Peasant multiplication over all 8 bits of `b`.
pub fn multiply(a: u8, b: u8) -> u8 {
    let mut product = 0u8;
    let mut addend = a;
    for bit in 0..8 {
        if b & (1 << bit) != 0 {
            product ^= addend;
        }
        addend = xtime(addend);
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_identity_and_zero_annihilates() {
        for a in 0..=255u8 {
            assert_eq!(multiply(a, 1), a);
            assert_eq!(multiply(a, 0), 0);
        }
    }

    #[test]
    fn multiply_by_two_matches_xtime() {
        for a in 0..=255u8 {
            assert_eq!(multiply(a, 2), xtime(a));
        }
    }

    #[test]
    fn fips_worked_example() {
        // {57} x {83} = {c1}, from FIPS-197 section 4.2.
        assert_eq!(multiply(0x57, 0x83), 0xc1);
        assert_eq!(multiply(0x57, 0x13), 0xfe);
    }

    #[test]
    fn multiplication_commutes_with_high_bit_set() {
        // A multiplier with bit 7 set exercises the final loop iteration.
        assert_eq!(multiply(0x02, 0x80), multiply(0x80, 0x02));
        for a in [0x01u8, 0x53, 0xca, 0xff] {
            for b in [0x80u8, 0x9a, 0xf1] {
                assert_eq!(multiply(a, b), multiply(b, a));
            }
        }
    }
}
