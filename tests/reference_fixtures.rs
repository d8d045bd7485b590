//! Generated layouts must match reference grids cell for cell.
//!
//! Fixtures use `#` for wall and `.` for floor, one line per row.

use seeded_dungeon::{generate, render, GenerationOptions, RenderOptions};

fn assert_matches_fixture(options: &GenerationOptions, fixture: &str) {
    let dungeon = generate(options).expect("options are valid");
    let actual = render(&RenderOptions::default(), &dungeon);
    let expected = fixture.trim_end_matches('\n');

    if actual != expected {
        let mismatches: Vec<(usize, usize)> = actual
            .lines()
            .zip(expected.lines())
            .enumerate()
            .flat_map(|(y, (a, e))| {
                a.chars()
                    .zip(e.chars())
                    .enumerate()
                    .filter(|(_, (ac, ec))| ac != ec)
                    .map(move |(x, _)| (x, y))
                    .collect::<Vec<_>>()
            })
            .collect();
        panic!(
            "layout differs from fixture at {} cells, first {:?}\nactual:\n{actual}\nexpected:\n{expected}",
            mismatches.len(),
            mismatches.first()
        );
    }
}

#[test]
fn seed_1234_80x40() {
    let options = GenerationOptions::new("1234", 80, 40)
        .with_partition(0.5, 0.5)
        .with_padding(0.2, 1.0);
    assert_matches_fixture(&options, include_str!("fixtures/seed_1234_80x40.txt"));
}

#[test]
fn seed_1234_minimum_size() {
    let options = GenerationOptions::new("1234", 10, 10)
        .with_partition(0.5, 0.5)
        .with_padding(0.2, 1.0);
    assert_matches_fixture(&options, include_str!("fixtures/seed_1234_10x10.txt"));
}

#[test]
fn empty_seed_with_overlapping_margins() {
    // Heavy padding inverts most rooms; corridors still run between them
    let options = GenerationOptions::new("", 30, 16)
        .with_partition(0.5, 0.5)
        .with_padding(0.5, 0.5);
    assert_matches_fixture(&options, include_str!("fixtures/empty_seed_30x16.txt"));
}

#[test]
fn non_ascii_seed() {
    let options = GenerationOptions::new("h\u{e9}llo \u{1f3b2}", 48, 24)
        .with_partition(0.5, 0.5)
        .with_padding(0.2, 1.0);
    assert_matches_fixture(&options, include_str!("fixtures/unicode_seed_48x24.txt"));
}

#[test]
fn options_from_json_match_fixture() {
    let json = r#"{
        "seed": "1234",
        "width": 80,
        "height": 40,
        "partition": { "mu": 0.5, "sigma": 0.5 },
        "padding": { "mu": 0.2, "sigma": 1 }
    }"#;
    let options = GenerationOptions::from_json_str(json).unwrap();
    assert_matches_fixture(&options, include_str!("fixtures/seed_1234_80x40.txt"));
}
