use proptest::prelude::*;

use seeded_dungeon::random::{clamp, unit_pair_to_gaussian};
use seeded_dungeon::{
    generate, normalize_walls, Dungeon, DungeonError, GaussianOptions, GenerationOptions, Grid, RandomStream,
};

fn options_strategy() -> impl Strategy<Value = GenerationOptions> {
    (
        ".{0,12}",
        3i32..70,
        3i32..50,
        (-0.5f64..1.5, prop_oneof![Just(0.0f64), 0.0f64..2.0]),
        (0.0f64..0.6, 0.0f64..2.0),
    )
        .prop_map(|(seed, width, height, (part_mu, part_sigma), (pad_mu, pad_sigma))| {
            GenerationOptions::new(seed, width, height)
                .with_partition(part_mu, part_sigma)
                .with_padding(pad_mu, pad_sigma)
        })
}

/// Generate, treating a partition that never terminates as "no dungeon".
/// Any other error fails the property.
fn outcome(options: &GenerationOptions) -> Result<Option<Dungeon>, TestCaseError> {
    match generate(options) {
        Ok(dungeon) => Ok(Some(dungeon)),
        Err(DungeonError::PartitionDiverged { .. }) => Ok(None),
        Err(err) => Err(TestCaseError::fail(format!("unexpected error: {err}"))),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_terminates_deterministically(options in options_strategy()) {
        prop_assert_eq!(outcome(&options)?, outcome(&options)?);
    }

    #[test]
    fn grid_has_requested_shape(options in options_strategy()) {
        let Some(dungeon) = outcome(&options)? else { return Ok(()) };
        prop_assert_eq!(dungeon.width(), options.width as usize);
        prop_assert_eq!(dungeon.height(), options.height as usize);
        prop_assert_eq!(dungeon.walls().cells().len(), (options.width * options.height) as usize);
    }

    #[test]
    fn border_is_always_wall(options in options_strategy()) {
        let Some(dungeon) = outcome(&options)? else { return Ok(()) };
        let (w, h) = (options.width, options.height);
        for x in 0..w {
            prop_assert!(!dungeon.is_floor(x, 0));
            prop_assert!(!dungeon.is_floor(x, h - 1));
        }
        for y in 0..h {
            prop_assert!(!dungeon.is_floor(0, y));
            prop_assert!(!dungeon.is_floor(w - 1, y));
        }
    }

    #[test]
    fn clamped_gaussian_is_bounded(
        mu in -1e6f64..1e6,
        sigma in -1e3f64..1e3,
        u0 in 0.0f64..1.0,
        u1 in 0.0f64..1.0,
        min in -100.0f64..100.0,
        span in 0.0f64..100.0,
    ) {
        let max = min + span;
        let value = clamp(min, max, unit_pair_to_gaussian(GaussianOptions::new(mu, sigma), u0, u1));
        prop_assert!(value >= min && value <= max);
    }

    #[test]
    fn normalizer_is_idempotent(width in 1usize..24, height in 1usize..24, bits in prop::collection::vec(any::<bool>(), 576)) {
        let walls = Grid::from_fn(width, height, |x, y| bits[y * 24 + x]);
        let once = normalize_walls(&walls);
        prop_assert_eq!(normalize_walls(&once), once);
    }

    #[test]
    fn equal_seeds_give_equal_streams(seed in ".{0,16}", count in 1usize..200) {
        let mut a = RandomStream::new(&seed);
        let mut b = RandomStream::new(&seed);
        for _ in 0..count {
            prop_assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}

#[test]
fn zero_unit_draw_stays_bounded() {
    // ln(0) is -inf, and a zero sigma turns that into NaN
    let value = clamp(0.0, 5.0, unit_pair_to_gaussian(GaussianOptions::new(2.0, 0.0), 0.0, 0.3));
    assert_eq!(value, 0.0);
    let value = clamp(0.0, 5.0, unit_pair_to_gaussian(GaussianOptions::new(2.0, 1.0), 0.0, 0.0));
    assert_eq!(value, 5.0);
}

#[test]
fn changing_the_seed_changes_the_layout() {
    let base = GenerationOptions::new("1234", 80, 40).with_padding(0.2, 1.0);
    let reference = generate(&base).unwrap();
    for i in 0..32 {
        let options = GenerationOptions {
            seed: format!("seed-{i}"),
            ..base.clone()
        };
        assert_ne!(generate(&options).unwrap(), reference, "seed-{i} reproduced seed 1234");
    }
}

#[test]
fn concurrent_runs_do_not_interfere() {
    let options = GenerationOptions::new("threads", 60, 40).with_padding(0.2, 1.0);
    let expected = generate(&options).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let options = options.clone();
            std::thread::spawn(move || generate(&options).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
