use stripanim_value_core::{Const, MovePerHour, OpAdd, OpMod, OpStep, Percent, Rand, Value};

#[test]
fn const_ignores_time() {
    assert_eq!(Const(2).eval(23, 0), 2);
    assert_eq!(Const(-7).eval(u32::MAX, 1000), -7);
}

#[test]
fn percent_scales_level_length() {
    let data: &[(i32, u32, i32, i32)] = &[
        (0, 0, 0, 0),
        (65536, 0, 0, 0),
        (65536, 1000, 0, 0),
        (65536, 0, 1000, 1000),
        (6554, 0, 1000, 100),
        (-65536, 0, 1000, -1000),
        (-6554, 0, 1000, -100),
    ];
    for (i, &(p, time_ms, l, expected)) in data.iter().enumerate() {
        assert_eq!(
            Percent(p).eval(time_ms, l),
            expected,
            "{i}: Percent({p}).eval({time_ms}, {l})"
        );
    }
}

#[test]
fn op_add_offsets_time() {
    assert_eq!(OpAdd { add_ms: 2 }.eval(23, 0), 25);
    assert_eq!(OpAdd { add_ms: -2 }.eval(23, 0), 21);
}

#[test]
fn op_mod_and_op_step() {
    assert_eq!(OpMod::new(2).unwrap().eval(23, 0), 1);
    assert_eq!(OpStep::new(21).unwrap().eval(23, 0), 21);
    assert_eq!(OpStep::new(21).unwrap().eval(20, 0), 0);
}

#[test]
fn rand_depends_on_time_plus_seed() {
    let r1 = Rand { seed: 0 };
    let r2 = Rand { seed: 16 };
    assert_eq!(r1.eval(16, 0), r2.eval(0, 0));
    assert_eq!(r1.eval(1016, 0), r2.eval(1000, 0));
    assert_ne!(r1.eval(15, 0), r2.eval(16, 0));
    // Seeds shift the sequence in time; they do not quantize it.
    assert_ne!(r1.eval(23, 0), r2.eval(23, 0));
    // Deterministic and independent of the strip length.
    assert_eq!(r1.eval(23, 0), Rand { seed: 0 }.eval(23, 300));
}

#[test]
fn rand_spreads_over_consecutive_times() {
    let r = Rand { seed: 7 };
    let mut outputs: Vec<i32> = (0..256).map(|t| r.eval(t, 0)).collect();
    outputs.sort_unstable();
    outputs.dedup();
    assert_eq!(outputs.len(), 256);
    assert!(outputs.iter().any(|v| *v < 0));
    assert!(outputs.iter().any(|v| *v > 0));
}

#[test]
fn move_per_hour_wraps_on_cycle() {
    const HOUR: u32 = 3_600_000;
    let data: &[(i32, u32, i32, i64)] = &[
        (1, 0, 10, 0),
        (1, HOUR, 10, 1),
        (1, 2 * HOUR, 10, 2),
        (1, 3 * HOUR, 10, 3),
        (1, 4 * HOUR, 10, 4),
        (1, 5 * HOUR, 10, 5),
        (1, 6 * HOUR, 10, 6),
        (1, 7 * HOUR, 10, 7),
        (1, 8 * HOUR, 10, 8),
        (1, 9 * HOUR, 10, 9),
        (1, 10 * HOUR, 10, 0),
        (1, 10 * HOUR, 11, 10),
        (60, 16, 10, 0),
        (60, 1000, 9, 0),
        (60, 1000, 10, 0),
        (60, HOUR, 10, 0),
        (3600, HOUR, 10, 0),
        (3_600_000, 0, 10, 0),
        (3_600_000, 1, 10, 1),
        (3_600_000, 2, 10, 2),
        (2 * 3_600_000, 1, 10, 1),
        (2 * 3_600_000, 2, 10, 2),
        (2 * 3_600_000, 2, 0, 2),
    ];
    for (i, &(speed, time_ms, cycle, expected)) in data.iter().enumerate() {
        let m = MovePerHour::new(Const(speed));
        assert_eq!(
            m.eval(time_ms, 0, cycle),
            expected,
            "{i}: MovePerHour({speed}).eval({time_ms}, 0, {cycle})"
        );
    }
}

#[test]
fn move_per_hour_speed_can_vary_over_time() {
    // Speed follows time itself: 100_000 moves/hour at t=100_000.
    let m = MovePerHour::new(OpAdd { add_ms: 0 });
    assert_eq!(m.eval(100_000, 0, 0), 2777);
    assert_eq!(m.eval(100_000, 0, 100), 77);
}
