//! Property tests for random fills over arbitrary seeds, counters and lengths

mod common;

use common::{normal_vec, uniform_vec};
use ctrand::prelude::*;
use proptest::prelude::*;

fn engine() -> impl Strategy<Value = RandomEngineType> {
    prop_oneof![
        Just(RandomEngineType::Philox),
        Just(RandomEngineType::Threefry)
    ]
}

proptest! {
    #[test]
    fn uniform_is_deterministic(engine in engine(), seed: u64, counter: u64, n in 0usize..200) {
        let a: Vec<u32> = uniform_vec(n, engine, seed, counter);
        let b: Vec<u32> = uniform_vec(n, engine, seed, counter);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn uniform_floats_in_unit_interval(engine in engine(), seed: u64, counter: u64) {
        let a: Vec<f32> = uniform_vec(64, engine, seed, counter);
        prop_assert!(a.iter().all(|&v| (0.0..=1.0).contains(&v)));

        let b: Vec<f64> = uniform_vec(64, engine, seed, counter);
        prop_assert!(b.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn shorter_fill_is_prefix(engine in engine(), seed: u64, counter: u64, n in 0usize..100) {
        let full: Vec<i16> = uniform_vec(100, engine, seed, counter);
        let short: Vec<i16> = uniform_vec(n, engine, seed, counter);
        prop_assert_eq!(&full[..n], short.as_slice());

        let full: Vec<f64> = normal_vec(100, engine, seed, counter);
        let short: Vec<f64> = normal_vec(n, engine, seed, counter);
        prop_assert_eq!(&full[..n], short.as_slice());
    }

    #[test]
    fn signed_and_unsigned_share_bits(engine in engine(), seed: u64, counter: u64) {
        let u: Vec<u32> = uniform_vec(32, engine, seed, counter);
        let i: Vec<i32> = uniform_vec(32, engine, seed, counter);
        prop_assert!(u.iter().zip(&i).all(|(&a, &b)| a as i32 == b));
    }

    #[test]
    fn generator_steps_match_direct_fills(engine in engine(), seed: u64, first in 0usize..40, second in 0usize..40) {
        let mut rng = Generator::new(engine, seed);
        let mut a = vec![0u8; first];
        let mut b = vec![0u8; second];
        rng.uniform(&mut a);
        rng.uniform(&mut b);

        let expected: Vec<u8> = uniform_vec(second, engine, seed, first as u64);
        prop_assert_eq!(b, expected);
        prop_assert_eq!(rng.counter(), (first + second) as u64);
    }
}
