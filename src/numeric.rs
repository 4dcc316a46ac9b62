//! Klasifikasi angka floating point: tanda, finite-check, dan perbandingan
//! dengan toleransi.

/// Toleransi absolut untuk `is_equal`
pub const EQUAL_EPSILON: f64 = 0.00001;

/// Mask 11 bit exponent pada IEEE-754 double
const EXPONENT_MASK: u64 = 0x7ff << 52;

/// Tanda angka: -1, 0, atau 1.
///
/// `-0.0` dan NaN menghasilkan 0 karena tidak lebih kecil maupun lebih besar
/// dari nol.
#[inline(always)]
pub fn signum(x: f64) -> i32 {
    if x < 0.0 {
        return -1;
    }
    if x > 0.0 {
        return 1;
    }
    0
}

/// Cek finite langsung dari bit pattern.
///
/// Normal, subnormal, dan nol adalah finite. Infinity dan NaN punya semua
/// bit exponent menyala.
#[inline(always)]
pub fn is_finite(x: f64) -> bool {
    x.to_bits() & EXPONENT_MASK != EXPONENT_MASK
}

/// Cek apakah `a` berada di `[b - EQUAL_EPSILON, b + EQUAL_EPSILON]`.
///
/// # Panics
/// Panic jika salah satu argumen tidak finite
#[inline]
pub fn is_equal(a: f64, b: f64) -> bool {
    assert!(is_finite(a), "is_equal: left operand {a} is not finite");
    assert!(is_finite(b), "is_equal: right operand {b} is not finite");

    (a - b).abs() <= EQUAL_EPSILON
}
