//! The twisted Edwards group behind the chain's signature scheme, in
//! extended homogeneous coordinates.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::error::CurveError;
use crate::field::{add, inv, le32, mul, sub, D, D2, P, SQRT_EXP, SQRT_M1};

/// Curve point as (X : Y : Z : T) with x = X/Z, y = Y/Z and T = XY/Z.
#[derive(Debug, Clone)]
pub struct EdwardsPoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
    t: BigUint,
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        // projective equality, cross-multiplied to avoid inversions
        mul(&self.x, &other.z) == mul(&other.x, &self.z)
            && mul(&self.y, &other.z) == mul(&other.y, &self.z)
    }
}

impl Eq for EdwardsPoint {}

impl EdwardsPoint {
    /// Neutral element (0, 1).
    pub fn identity() -> EdwardsPoint {
        EdwardsPoint {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::one(),
            t: BigUint::zero(),
        }
    }

    /// Unified addition; the same formulas double a point when both
    /// operands coincide.
    pub fn add(&self, other: &EdwardsPoint) -> EdwardsPoint {
        let a = mul(&sub(&self.y, &self.x), &sub(&other.y, &other.x));
        let b = mul(&add(&self.y, &self.x), &add(&other.y, &other.x));
        let c = mul(&mul(&self.t, &D2), &other.t);
        let d = mul(&add(&self.z, &self.z), &other.z);
        let e = sub(&b, &a);
        let f = sub(&d, &c);
        let g = add(&d, &c);
        let h = add(&b, &a);
        EdwardsPoint {
            x: mul(&e, &f),
            y: mul(&g, &h),
            z: mul(&f, &g),
            t: mul(&e, &h),
        }
    }

    /// Double-and-add over the scalar's bits, most significant first.
    pub fn scalar_mul(&self, scalar: &BigUint) -> EdwardsPoint {
        let mut acc = EdwardsPoint::identity();
        for i in (0..scalar.bits()).rev() {
            acc = acc.add(&acc);
            if scalar.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    pub fn negate(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: sub(&BigUint::zero(), &self.x),
            y: self.y.clone(),
            z: self.z.clone(),
            t: sub(&BigUint::zero(), &self.t),
        }
    }

    /// 32-byte compressed form: little-endian y with the sign of x in the
    /// top bit.
    pub fn compress(&self) -> [u8; 32] {
        let zi = inv(&self.z);
        let x = mul(&self.x, &zi);
        let y = mul(&self.y, &zi);
        let mut out = le32(&y);
        if x.bit(0) {
            out[31] |= 0x80;
        }
        out
    }

    /// Inverse of [`EdwardsPoint::compress`]. Rejects encodings whose y
    /// is not a canonical residue and encodings naming no curve point, so
    /// compress-then-decompress is exactly the identity.
    pub fn decompress(bytes: &[u8; 32]) -> Result<EdwardsPoint, CurveError> {
        let mut le = *bytes;
        let sign = le[31] & 0x80 != 0;
        le[31] &= 0x7f;
        let y = BigUint::from_bytes_le(&le);
        if y >= *P {
            return Err(CurveError::InvalidPoint);
        }
        let x = recover_x(&y, sign)?;
        let t = mul(&x, &y);
        Ok(EdwardsPoint {
            x,
            y,
            z: BigUint::one(),
            t,
        })
    }

    /// Birational map to the Montgomery u-coordinate, u = (1+y)/(1-y).
    /// The neutral element maps to 0.
    pub fn montgomery_u(&self) -> BigUint {
        let zi = inv(&self.z);
        let y = mul(&self.y, &zi);
        let one = BigUint::one();
        mul(&add(&one, &y), &inv(&sub(&one, &y)))
    }

    /// Lift a 32-byte Montgomery-form public key back onto the Edwards
    /// curve, y = (u-1)/(u+1), picking the root named by `sign`.
    ///
    /// The top bit of the encoding is ignored and u is reduced mod p,
    /// mirroring how deployed verifiers read these keys.
    pub fn from_montgomery(u_bytes: &[u8; 32], sign: bool) -> Result<EdwardsPoint, CurveError> {
        let mut le = *u_bytes;
        le[31] &= 0x7f;
        let u = BigUint::from_bytes_le(&le) % &*P;
        let one = BigUint::one();
        let y = mul(&sub(&u, &one), &inv(&add(&u, &one)));
        let x = recover_x(&y, sign)?;
        let t = mul(&x, &y);
        Ok(EdwardsPoint {
            x,
            y,
            z: BigUint::one(),
            t,
        })
    }
}

/// Solve x^2 = (y^2 - 1) / (d y^2 + 1) for the root whose low bit equals
/// `sign`.
fn recover_x(y: &BigUint, sign: bool) -> Result<BigUint, CurveError> {
    let yy = mul(y, y);
    let u = sub(&yy, &BigUint::one());
    let v = add(&mul(&D, &yy), &BigUint::one());
    let xx = mul(&u, &inv(&v));

    let mut x = xx.modpow(&SQRT_EXP, &P);
    if mul(&x, &x) != xx {
        x = mul(&x, &SQRT_M1);
    }
    if mul(&x, &x) != xx {
        return Err(CurveError::InvalidPoint);
    }
    if x.is_zero() && sign {
        return Err(CurveError::InvalidPoint);
    }
    if x.bit(0) != sign {
        x = sub(&BigUint::zero(), &x);
    }
    Ok(x)
}

/// Fixed basepoint G: y = 4/5, even x.
pub(crate) fn basepoint() -> &'static EdwardsPoint {
    static G: Lazy<EdwardsPoint> = Lazy::new(|| {
        let y = mul(&BigUint::from(4u32), &inv(&BigUint::from(5u32)));
        let x = recover_x(&y, false).expect("basepoint is on the curve");
        let t = mul(&x, &y);
        EdwardsPoint {
            x,
            y,
            z: BigUint::one(),
            t,
        }
    });
    &G
}
