use stripanim_scale_core::{Color, Config, Interpolation};

fn gray_frame(values: &[u8]) -> Vec<Color> {
    values.iter().copied().map(Color::gray).collect()
}

const MARK: Color = Color::new(1, 2, 3);

#[test]
fn empty_frames_are_left_alone() {
    let mut out = vec![MARK; 3];
    for interpolation in Interpolation::ALL {
        interpolation.scale(&[], &mut out);
        assert_eq!(out, vec![MARK; 3]);
        let mut none: Vec<Color> = Vec::new();
        interpolation.scale(&gray_frame(&[9]), &mut none);
        assert!(none.is_empty());
    }
}

#[test]
fn nearest_upscales_by_repeating() {
    let input = gray_frame(&[10, 20]);
    let mut out = vec![MARK; 4];
    Interpolation::Nearest.scale(&input, &mut out);
    assert_eq!(out, gray_frame(&[10, 10, 20, 20]));
}

#[test]
fn nearest_downscales_by_picking_centers() {
    let input = gray_frame(&[10, 20, 30, 40]);
    let mut out = vec![MARK; 2];
    Interpolation::Nearest.scale(&input, &mut out);
    assert_eq!(out, gray_frame(&[20, 40]));
}

#[test]
fn nearest_skip_leaves_gaps_when_upscaling() {
    let input = gray_frame(&[10, 20]);
    let mut out = vec![MARK; 4];
    Interpolation::NearestSkip.scale(&input, &mut out);
    assert_eq!(out, vec![MARK, Color::gray(10), MARK, Color::gray(20)]);
}

#[test]
fn nearest_skip_downscales_like_nearest() {
    let input = gray_frame(&[10, 20, 30, 40, 50, 60]);
    for lo in 1..=6 {
        let mut skip = vec![MARK; lo];
        let mut nearest = vec![MARK; lo];
        Interpolation::NearestSkip.scale(&input, &mut skip);
        Interpolation::Nearest.scale(&input, &mut nearest);
        assert_eq!(skip, nearest, "lo={lo}");
    }
}

#[test]
fn linear_blends_toward_next_sample() {
    let input = gray_frame(&[0, 255]);
    let mut out = vec![MARK; 4];
    Interpolation::Linear.scale(&input, &mut out);
    // The last input sample has no successor and is copied as is.
    assert_eq!(out, gray_frame(&[127, 127, 255, 255]));
}

#[test]
fn linear_same_length_still_blends() {
    let input = gray_frame(&[0, 100, 200]);
    let mut out = vec![MARK; 3];
    Interpolation::Linear.scale(&input, &mut out);
    assert_eq!(out, gray_frame(&[49, 149, 200]));
}

#[test]
fn linear_blend_is_configurable() {
    let input = gray_frame(&[0, 255]);
    let mut out = vec![MARK; 2];
    let config = Config {
        linear_blend: 0,
        ..Config::default()
    };
    Interpolation::Linear.scale_with(&config, &input, &mut out);
    assert_eq!(out, gray_frame(&[0, 255]));
}

#[test]
fn interpolation_tags_in_json() {
    let parsed: Vec<Interpolation> =
        serde_json::from_str(r#"["linear", "nearestskip", "bicubic"]"#).unwrap();
    assert_eq!(
        parsed,
        vec![
            Interpolation::Linear,
            Interpolation::NearestSkip,
            Interpolation::Nearest
        ]
    );
    assert_eq!(
        serde_json::to_string(&Interpolation::Linear).unwrap(),
        r#""linear""#
    );
}
