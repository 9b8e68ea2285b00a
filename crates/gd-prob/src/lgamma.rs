//! Log-gamma via the Lanczos approximation.
//!
//! Uses the 9-term series for g=7 (one leading term plus eight partial
//! fractions). Accurate to roughly 15 significant digits for positive
//! arguments when the scalar has double-precision range.

use gd_ad::Scalar;

/// Lanczos g parameter.
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients for g=7, N=8: `c_0` followed by `c_1..c_8`.
const LANCZOS_7_C: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// `ln(sqrt(2*pi))`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// `ln Γ(y)` for a generic scalar.
///
/// Intended for `y > 0`. No domain check is made: the partial fractions have
/// poles at `y = 0, -1, ..., -7`, and arguments at or near them produce
/// extreme or non-finite values without any signal.
///
/// Computes `(x + 0.5) * ln((x + g + 0.5) / e) + ln(sqrt(2*pi)) + ln(A_g(x)) - g`
/// with `x = y - 1`. Folding `-(x + g + 0.5)` into the log argument avoids
/// subtracting two large terms.
pub fn loggamma<S: Scalar>(y: S) -> S {
    // Lanczos writes z! instead of Gamma(z).
    let x = y - S::from_f64(1.0);

    let mut ag = S::from_f64(LANCZOS_7_C[0]);
    for (k, &c) in LANCZOS_7_C.iter().enumerate().skip(1) {
        ag = ag + S::from_f64(c) / (x + S::from_f64(k as f64));
    }

    let t = x + S::from_f64(LANCZOS_G + 0.5);
    let term1 = (x + S::from_f64(0.5)) * (t / S::from_f64(std::f64::consts::E)).ln();
    let term2 = S::from_f64(LN_SQRT_2PI) + ag.ln();
    term1 + (term2 - S::from_f64(LANCZOS_G))
}
