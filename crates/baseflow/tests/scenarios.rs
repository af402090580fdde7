//! Worked examples on small hand-checked records.

use approx::assert_relative_eq;
use hydrosep_baseflow::{
    Discharge, LyneHollickCache, Method, SeparationConfig, chapman_maxwell, ewma, fixed_interval,
    hysep_interval, local_minimum, lyne_hollick, separate, ukih,
};

const Q: [f64; 12] = [
    10.0, 8.0, 6.0, 9.0, 12.0, 7.0, 5.0, 6.0, 8.0, 11.0, 9.0, 6.0,
];

fn scenario() -> Discharge {
    Discharge::new(Q.to_vec()).unwrap()
}

#[test]
fn lyne_hollick_twelve_samples() {
    let b = lyne_hollick(&scenario(), 0.925);
    let expected = [
        5.710216995083495,
        5.443477832522697,
        5.31727333245697,
        5.257356305358886,
        5.174679958496093,
        5.0626604492187495,
        5.0,
        5.0375,
        5.184687499999999,
        5.508335937499999,
        5.845210742187499,
        5.969319936523437,
    ];
    for (got, want) in b.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-9);
    }
}

#[test]
fn ewma_twelve_samples() {
    let b = ewma(&scenario(), 0.05);
    assert_eq!(b[0], 10.0);
    assert_eq!(b[1], 8.0);
    assert_eq!(b[2], 6.0);
    assert_relative_eq!(b[3], 6.15, epsilon = 1e-12);
    assert_eq!(b[6], 5.0);
    assert_relative_eq!(b[11], 5.680081562499999, epsilon = 1e-9);
}

#[test]
fn chapman_maxwell_twelve_samples() {
    let b = chapman_maxwell(&scenario(), 0.925);
    assert_relative_eq!(b[3], 5.790697674418604, epsilon = 1e-9);
    assert_relative_eq!(b[7], 4.72093023255814, epsilon = 1e-9);
    assert_relative_eq!(b[11], 4.47067358573412, epsilon = 1e-9);
}

#[test]
fn fixed_interval_five_five_two() {
    let b = fixed_interval(&scenario(), None).unwrap();
    assert_eq!(&b[..5], &[6.0; 5]);
    assert_eq!(&b[5..10], &[5.0; 5]);
    assert_eq!(&b[10..], &[6.0; 2]);
}

#[test]
fn default_interval_is_five() {
    assert_eq!(hysep_interval(None), 5);
}

#[test]
fn interval_is_odd_and_bounded() {
    let mut area = 0.01;
    while area < 1.0e7 {
        let k = hysep_interval(Some(area));
        assert_eq!(k % 2, 1, "area {area}");
        assert!((3..=11).contains(&k), "area {area}: {k}");
        area *= 1.7;
    }
}

#[test]
fn increasing_record_degenerates() {
    // Block minima grow faster than 1 / 0.9, so UKIH finds no turning point.
    let q = Discharge::new((0..80).map(|i| 1.05f64.powi(i)).collect()).unwrap();
    let cache = LyneHollickCache::new(&q, 0.925);
    assert!(ukih(&q, cache.get()).unwrap().iter().all(|&v| v == 0.0));
    for area in [None, Some(50.0), Some(1.0e6)] {
        assert!(
            local_minimum(&q, cache.get(), area)
                .unwrap()
                .iter()
                .all(|&v| v == 0.0)
        );
    }

    let sep = separate(&q, &SeparationConfig::default()).unwrap();
    assert!(sep.is_degenerate(Method::Ukih));
    assert!(sep.is_degenerate(Method::LocalMinimum));
    let summary = sep.summary();
    let ukih_summary = summary
        .methods
        .iter()
        .find(|s| s.method == Method::Ukih)
        .unwrap();
    assert!(ukih_summary.degenerate);
    assert_eq!(ukih_summary.baseflow_index, Some(0.0));
}

#[test]
fn cache_reused_across_dependents() {
    let q = scenario();
    let cache = LyneHollickCache::new(&q, 0.925);
    let first = cache.get().as_ptr();
    let _ = ukih(&q, cache.get()).unwrap();
    let _ = local_minimum(&q, cache.get(), None).unwrap();
    assert_eq!(cache.get().as_ptr(), first);
    assert_eq!(cache.get(), lyne_hollick(&q, 0.925).as_slice());
}
