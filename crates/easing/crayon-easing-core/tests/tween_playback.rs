use crayon_easing_core::{EasingCurve, FadeDirection, Tween, TweenStep};
use crayon_test_fixtures::{tweens, TweenRecording};

fn curve_of(rec: &TweenRecording) -> EasingCurve {
    serde_json::from_value(rec.curve.clone()).expect("fixture curve")
}

fn play<const N: usize>(mut tween: Tween<[f32; N]>, dt: f32) -> (Vec<[f32; N]>, [f32; N]) {
    let mut frames = Vec::new();
    loop {
        match tween.advance(dt) {
            TweenStep::Running(v) => frames.push(v),
            TweenStep::Finished(v) => return (frames, v),
        }
        assert!(frames.len() < 10_000, "tween never finished");
    }
}

fn assert_frames<const N: usize>(got: &[[f32; N]], expected: &[Vec<f32>]) {
    assert_eq!(got.len(), expected.len(), "frame count");
    for (i, (g, e)) in got.iter().zip(expected).enumerate() {
        for (a, b) in g.iter().zip(e) {
            assert!((a - b).abs() < 1e-3, "frame {i}: {g:?} vs {e:?}");
        }
    }
}

#[test]
fn relative_position_with_named_curve() {
    let rec = tweens::load("position-cubic").expect("fixture");
    let start: [f32; 3] = rec.start.as_slice().try_into().unwrap();
    let delta: [f32; 3] = rec.delta.as_slice().try_into().unwrap();
    let tween = Tween::relative(start, delta, rec.duration, curve_of(&rec));

    let (frames, end) = play(tween, rec.dt);
    assert_frames(&frames, &rec.frames);
    // The final step is the exact target, not an eased approximation.
    assert_eq!(end.as_slice(), rec.end.as_slice());
}

#[test]
fn fade_in_with_custom_bezier() {
    let rec = tweens::load("fade-custom").expect("fixture");
    let color: [f32; 4] = rec.color.as_slice().try_into().unwrap();
    let direction: FadeDirection =
        serde_json::from_value(serde_json::Value::String(rec.direction.clone().unwrap()))
            .unwrap();
    let tween = Tween::fade(
        color,
        direction,
        rec.opacity.unwrap(),
        rec.duration,
        curve_of(&rec),
    );

    let (frames, end) = play(tween, rec.dt);
    assert_frames(&frames, &rec.frames);
    assert_eq!(end, color);
}

#[test]
fn overshooting_curve_passes_target_mid_tween() {
    let tween = Tween::new(0.0f32, 1.0, 1.0, crayon_easing_core::Easing::BackOut);
    let peak = (0..100)
        .map(|i| tween.sample(i as f32 / 100.0))
        .fold(f32::NEG_INFINITY, f32::max);
    assert!(peak > 1.0);
    assert_eq!(tween.sample(1.0), 1.0);
}
