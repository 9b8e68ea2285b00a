#![no_main]

use libfuzzer_sys::fuzz_target;

fn f64_at(data: &[u8], i: usize) -> f64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&data[i * 8..i * 8 + 8]);
    f64::from_le_bytes(b)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }

    let a = f64_at(data, 0);
    let b = f64_at(data, 1);
    let c = f64_at(data, 2);
    let d = f64_at(data, 3);
    let give_log = data[32] & 1 == 1;

    // The core never validates; any input must come back as a value, never a panic.
    let _ = gd_prob::loggamma(a);
    let _ = gd_prob::dnbinom(a, b, c, give_log);
    let _ = gd_prob::dnbinom2(a, b, c, give_log);
    let _ = gd_prob::dpois(a, b, give_log);
    let _ = gd_prob::dgamma(a, b, d, give_log);
    let _ = gd_prob::dlgamma(a, b, d, give_log);

    // Validated layer: on success the value must equal the core's bit-for-bit.
    if let Ok(v) = gd_prob::distributions::dgamma_checked(a, b, d, give_log) {
        let core = gd_prob::dgamma(a, b, d, give_log);
        assert!(v.to_bits() == core.to_bits() || (v.is_nan() && core.is_nan()));
    }
});
