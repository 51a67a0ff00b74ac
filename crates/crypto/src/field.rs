//! Residue arithmetic modulo p = 2^255 - 19.
//!
//! Everything here keeps the invariant that inputs and outputs are
//! reduced below p; the point code relies on it.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

/// Field prime p = 2^255 - 19.
pub(crate) static P: Lazy<BigUint> =
    Lazy::new(|| (BigUint::one() << 255usize) - BigUint::from(19u32));

/// Group order q = 2^252 + 27742317777372353535851937790883648493.
pub(crate) static Q: Lazy<BigUint> = Lazy::new(|| {
    (BigUint::one() << 252usize) + BigUint::from(27742317777372353535851937790883648493u128)
});

/// Edwards curve constant d = -121665/121666 mod p.
pub(crate) static D: Lazy<BigUint> = Lazy::new(|| {
    let num = &*P - BigUint::from(121_665u32);
    mul(&num, &inv(&BigUint::from(121_666u32)))
});

/// 2d, precomputed for the unified addition formulas.
pub(crate) static D2: Lazy<BigUint> = Lazy::new(|| add(&D, &D));

/// A square root of -1 mod p, which exists because p = 1 mod 4.
pub(crate) static SQRT_M1: Lazy<BigUint> = Lazy::new(|| {
    let exp = (&*P - BigUint::one()) >> 2usize;
    BigUint::from(2u32).modpow(&exp, &P)
});

/// Exponent (p+3)/8 used to pull candidate square roots.
pub(crate) static SQRT_EXP: Lazy<BigUint> =
    Lazy::new(|| (&*P + BigUint::from(3u32)) >> 3usize);

pub(crate) fn add(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % &*P
}

pub(crate) fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    ((&*P + a) - b) % &*P
}

pub(crate) fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % &*P
}

/// Fermat inverse. Maps 0 to 0, which the compression and Montgomery maps
/// rely on for the neutral element.
pub(crate) fn inv(a: &BigUint) -> BigUint {
    a.modpow(&(&*P - BigUint::from(2u32)), &P)
}

/// Value as 32 little-endian bytes. Callers only pass residues below
/// 2^256.
pub(crate) fn le32(v: &BigUint) -> [u8; 32] {
    let le = v.to_bytes_le();
    let mut out = [0u8; 32];
    out[..le.len()].copy_from_slice(&le);
    out
}
