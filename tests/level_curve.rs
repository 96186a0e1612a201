use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use xpcurve::progression::{xp, CurveParams, Level, LevelCurve};

fn lvl(n: u32) -> Level {
    Level::new(n).unwrap()
}

#[test]
fn step_cost_matches_floor_formula() {
    let curve = LevelCurve::default();
    for n in 1..500u32 {
        let expected = (100.0 * (n as f64).powf(1.5)).floor() as u64;
        assert_eq!(curve.step_cost(lvl(n)), expected, "level {}", n);
    }
}

#[test]
fn steps_and_thresholds_strictly_increase() {
    let curve = LevelCurve::default();
    for n in 1..1_000u32 {
        assert!(curve.step_cost(lvl(n + 1)) > curve.step_cost(lvl(n)));
        assert!(curve.threshold_for_level(lvl(n + 1)) > curve.threshold_for_level(lvl(n)));
        assert_eq!(
            curve.threshold_for_level(lvl(n + 1)),
            curve.threshold_for_level(lvl(n)) + curve.step_cost(lvl(n))
        );
    }
}

#[test]
fn level_lookup_round_trips_on_random_xp() {
    let curve = LevelCurve::default();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..2_000 {
        let total: u64 = rng.gen_range(0..50_000_000);
        let level = curve.level_for_xp(total);

        assert!(curve.threshold_for_level(level) <= total);
        assert!(total < curve.threshold_for_level(level.next()));

        let progress = curve.progress_in_level(total);
        assert!(progress < curve.step_cost(level));
        assert!(curve.progress_percentage(total) <= 100);
        assert!(!curve.did_level_up(total, total));
    }
}

#[test]
fn cached_and_linear_lookup_agree_at_boundaries() {
    let curve = LevelCurve::default();
    for n in 1..300u32 {
        let t = curve.threshold_for_level(lvl(n));
        for total in [t.saturating_sub(1), t, t + 1] {
            assert_eq!(curve.level_for_xp(total), curve.level_for_xp_linear(total));
        }
    }
}

#[test]
fn custom_curve_is_independent_of_standard() {
    let steep = LevelCurve::new(CurveParams { base_xp: 50, exponent: 2.0 }).unwrap();
    assert_eq!(steep.step_cost(lvl(3)), 450);
    assert_eq!(steep.threshold_for_level(lvl(3)), 250);
    assert_eq!(xp::threshold_for_level(lvl(3)), 382);
}

#[test]
fn curve_is_shared_across_threads() {
    let curve = LevelCurve::default();
    std::thread::scope(|s| {
        for t in 0..4u64 {
            let curve = &curve;
            s.spawn(move || {
                for total in (t * 1_000..t * 1_000 + 200_000).step_by(997) {
                    assert_eq!(curve.level_for_xp(total), curve.level_for_xp_linear(total));
                }
            });
        }
    });
}

#[test]
fn largest_xp_totals_stay_inside_their_band() {
    let curves = [
        LevelCurve::default(),
        LevelCurve::new(CurveParams { base_xp: 50, exponent: 2.0 }).unwrap(),
    ];
    for curve in &curves {
        for total in [u64::MAX, u64::MAX - 1, u64::MAX / 2] {
            let level = curve.level_for_xp(total);
            let progress = curve.progress_in_level(total);
            assert!(
                progress < curve.step_cost(level),
                "progress {} not below step {} at level {}",
                progress,
                curve.step_cost(level),
                level
            );
            assert!(level < Level::MAX);
        }
    }
}

#[test]
fn shallow_curves_are_rejected() {
    assert!(LevelCurve::new(CurveParams { base_xp: 1, exponent: 1.0 }).is_err());
}
