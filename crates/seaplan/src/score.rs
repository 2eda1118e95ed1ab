//! Weighted composite index of a marine area.
//!
//! `value = 0.5 · biodiversity + 0.3 · vulnerabilities + 0.2 · connectivity`,
//! rounded to two decimals. Inputs are indices on [0, 1]; anything outside is
//! clamped back into range and reported with a `warn` event.

use crate::round2;

/// Weights for (biodiversity, vulnerabilities, connectivity). Sum to 1.
pub const WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Composite score on [0, 1], rounded to two decimals.
pub fn score(biodiversity: f64, vulnerabilities: f64, connectivity: f64) -> f64 {
    let b = unit_index("biodiversity", biodiversity);
    let v = unit_index("vulnerabilities", vulnerabilities);
    let c = unit_index("connectivity", connectivity);
    round2(WEIGHTS[0] * b + WEIGHTS[1] * v + WEIGHTS[2] * c)
}

/// Clamp an index into [0, 1]; NaN maps to 0.
fn unit_index(name: &'static str, x: f64) -> f64 {
    if (0.0..=1.0).contains(&x) {
        return x;
    }
    let clamped = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    tracing::warn!(index = name, value = x, clamped, "index outside [0, 1]");
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((WEIGHTS.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn extremes() {
        assert_eq!(score(1.0, 1.0, 1.0), 1.0);
        assert_eq!(score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 0.5*0.33 + 0.3*0.47 + 0.2*0.91 = 0.488
        assert_eq!(score(0.33, 0.47, 0.91), 0.49);
        assert_eq!(score(1.0, 0.0, 0.0), 0.5);
        assert_eq!(score(0.0, 1.0, 0.0), 0.3);
        assert_eq!(score(0.0, 0.0, 1.0), 0.2);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(score(1.7, 1.0, 1.0), 1.0);
        assert_eq!(score(-3.0, 0.0, 0.0), 0.0);
        assert_eq!(score(f64::NAN, 1.0, 1.0), 0.5);
    }

    /// Formatted log output of `f`, captured through a scoped subscriber.
    fn captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct Sink(Arc<Mutex<Vec<u8>>>);
        impl io::Write for Sink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = Sink(Arc::new(Mutex::new(Vec::new())));
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        (out, logs)
    }

    #[test]
    fn clamping_emits_a_warning() {
        let (s, logs) = captured_logs(|| score(1.7, 0.5, 0.5));
        assert_eq!(s, 0.75);
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("index outside [0, 1]"), "{logs}");
        assert!(logs.contains("biodiversity"), "{logs}");
        assert_eq!(logs.matches("index outside").count(), 1);

        let (_, quiet) = captured_logs(|| score(0.2, 0.4, 0.6));
        assert!(quiet.is_empty(), "{quiet}");
    }

    proptest! {
        #[test]
        fn monotone_in_each_index(
            b in 0.0f64..=1.0, v in 0.0f64..=1.0, c in 0.0f64..=1.0, d in 0.0f64..=1.0,
        ) {
            let base = score(b, v, c);
            prop_assert!(score((b + d).min(1.0), v, c) >= base);
            prop_assert!(score(b, (v + d).min(1.0), c) >= base);
            prop_assert!(score(b, v, (c + d).min(1.0)) >= base);
        }

        #[test]
        fn stays_in_unit_interval(b in -2.0f64..3.0, v in -2.0f64..3.0, c in -2.0f64..3.0) {
            let s = score(b, v, c);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
