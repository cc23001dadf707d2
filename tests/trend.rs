use hrd_rs::models::Trend;
use hrd_rs::stats::trend;

#[test]
fn equal_on_identical_values() {
    for v in [0u64, 1, 150, u64::MAX] {
        assert_eq!(trend(v, v), Trend::Equal);
    }
}

#[test]
fn antisymmetric_over_value_pairs() {
    let pairs = [(0u64, 1u64), (1, 150), (100, 150), (7423, 10805)];
    for (a, b) in pairs {
        assert_eq!(trend(a, b), Trend::Below);
        assert_eq!(trend(b, a), Trend::Above);
    }
}

#[test]
fn markers_match_direction() {
    assert_eq!(Trend::Above.marker(), "▲");
    assert_eq!(Trend::Below.marker(), "▼");
    assert_eq!(Trend::Equal.marker(), "●");
}
