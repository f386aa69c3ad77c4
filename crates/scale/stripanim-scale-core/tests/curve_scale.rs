use stripanim_scale_core::{curve_table, Bell, Config, Curve, CurveTable, Scaler};

const HALF: u16 = 65535 >> 1;

#[test]
fn bell_reference_points() {
    let data: &[(u16, u16)] = &[
        (0, 0),
        (0x1000, 2093),
        (HALF, 0xffff),
        (0xefff, 2093),
        (0xffff, 0),
    ];
    for (i, &(v, expected)) in data.iter().enumerate() {
        assert_eq!(Bell.scale(v), expected, "{i}: Bell.scale({v})");
    }
}

#[test]
fn continuous_curves_hit_both_limits() {
    let curves = [
        Curve::from(""),
        Curve::Ease,
        Curve::EaseIn,
        Curve::EaseInOut,
        Curve::EaseOut,
        Curve::Direct,
    ];
    for curve in curves {
        assert_eq!(curve.scale(0), 0, "{curve} low");
        assert_eq!(curve.scale(65535), 65535, "{curve} high");
    }
}

#[test]
fn curve_reference_points() {
    let data: &[(Curve, u16, u16)] = &[
        (Curve::Ease, HALF, 0xcd01),
        (Curve::EaseIn, HALF, 0x50df),
        (Curve::EaseInOut, HALF, 0x7ffe),
        (Curve::EaseOut, HALF, 0xaf1d),
        (Curve::from(""), HALF, 0xaf1d),
        (Curve::from("bleh"), HALF, 0xaf1d),
        (Curve::Direct, HALF, HALF),
        (Curve::StepStart, 0, 0),
        (Curve::StepStart, 255, 0),
        (Curve::StepStart, 256, 0xffff),
        (Curve::StepStart, 0xffff, 0xffff),
        (Curve::StepMiddle, 0, 0),
        (Curve::StepMiddle, 0x7fff, 0),
        (Curve::StepMiddle, 0x8000, 0xffff),
        (Curve::StepMiddle, 0xffff, 0xffff),
        (Curve::StepEnd, 0, 0),
        (Curve::StepEnd, 0xfefe, 0),
        (Curve::StepEnd, 0xfeff, 0xffff),
        (Curve::StepEnd, 0xffff, 0xffff),
    ];
    for (i, &(curve, v, expected)) in data.iter().enumerate() {
        assert_eq!(curve.scale(v), expected, "{i}: {curve}.scale({v})");
        assert_eq!(
            curve.scale8(v),
            (expected >> 8) as u8,
            "{i}: {curve}.scale8({v})"
        );
    }
}

#[test]
fn curves_are_monotonic_over_the_domain() {
    for curve in Curve::ALL {
        let mut previous = 0u16;
        for v in (0..=u16::MAX).step_by(97).chain([u16::MAX]) {
            let scaled = curve.scale(v);
            assert!(scaled >= previous, "{curve} dips at {v}");
            previous = scaled;
        }
    }
}

#[test]
fn shared_table_matches_fresh_table() {
    let fresh = CurveTable::new();
    assert_eq!(curve_table(), &fresh);
    let custom = CurveTable::with_config(&Config {
        lut_steps: 64,
        ..Config::default()
    });
    assert_eq!(custom.lut(Curve::Ease).unwrap().points().len(), 64);
    assert_eq!(custom.scale(Curve::Ease, 0), 0);
    assert_eq!(custom.scale(Curve::Ease, 65535), 65535);
    assert_eq!(custom.scale(Curve::StepMiddle, 0x8000), 65535);
}

#[test]
fn curves_serialize_as_tags() {
    assert_eq!(
        serde_json::to_string(&Curve::StepMiddle).unwrap(),
        r#""steps(1,middle)""#
    );
    let parsed: Vec<Curve> = serde_json::from_str(r#"["ease-in", "", "wobble"]"#).unwrap();
    assert_eq!(parsed, vec![Curve::EaseIn, Curve::EaseOut, Curve::EaseOut]);
}
