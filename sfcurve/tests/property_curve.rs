use sfcurve::{endpoint, expand, expanded_len, Line, Template};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = Line> {
    (-720i16..=720, 0u16..=400, any::<bool>(), any::<bool>()).prop_map(|(r, l, rev, flip)| {
        Line::new(r as f64 * 0.5, l as f64 * 0.025, rev, flip)
    })
}

fn template_strategy() -> impl Strategy<Value = Template> {
    prop::collection::vec(line_strategy(), 1..6)
        .prop_filter_map("degenerate template", |lines| {
            // keep the span well away from zero so tolerances below hold
            let t = Template::new(lines).ok()?;
            (t.span() > 0.25).then_some(t)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn zero_rounds_is_identity(t in template_strategy(), seed in prop::collection::vec(line_strategy(), 0..8)) {
        let out = expand(&seed, &t, 0).unwrap();
        prop_assert_eq!(out, seed);
    }

    #[test]
    fn size_law(t in template_strategy(), seed in prop::collection::vec(line_strategy(), 0..4), n in 0i32..4) {
        let out = expand(&seed, &t, n).unwrap();
        prop_assert_eq!(Some(out.len()), expanded_len(seed.len(), t.len(), n as u32));
        prop_assert_eq!(out.len(), seed.len() * t.len().pow(n as u32));
    }

    #[test]
    fn endpoint_preserved(t in template_strategy(), seed in prop::collection::vec(line_strategy(), 1..4), n in 1i32..3) {
        let e0 = endpoint(&seed);
        let e1 = endpoint(&expand(&seed, &t, n).unwrap());
        let total: f64 = seed.iter().map(|l| l.length).sum();
        let tol = 1e-6 * (1.0 + total);
        prop_assert!((e0.x - e1.x).abs() <= tol && (e0.y - e1.y).abs() <= tol,
            "{:?} vs {:?}", e0, e1);
    }

    #[test]
    fn lengths_scale_linearly(t in template_strategy(), seed in prop::collection::vec(line_strategy(), 1..4), k in 1u8..50) {
        let k = k as f64 * 0.5;
        let scaled: Vec<Line> = seed.iter().map(|l| l.scaled(k)).collect();
        let a = expand(&seed, &t, 2).unwrap();
        let b = expand(&scaled, &t, 2).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert!((y.length - x.length * k).abs() <= 1e-9 * (1.0 + y.length));
            prop_assert_eq!(x.rotation.to_bits(), y.rotation.to_bits());
            prop_assert_eq!(x.mirror_flip, y.mirror_flip);
            prop_assert_eq!(x.mirror_reverse, y.mirror_reverse);
        }
    }
}
