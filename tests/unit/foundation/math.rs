use super::*;

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn splitmix_is_deterministic_per_seed() {
    let mut a = SplitMix64::new(7);
    let mut b = SplitMix64::new(7);
    let mut c = SplitMix64::new(8);
    let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
    let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
    let zs: Vec<u64> = (0..8).map(|_| c.next_u64()).collect();
    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
}

#[test]
fn splitmix_ranges_stay_in_bounds() {
    let mut rng = SplitMix64::new(42);
    for _ in 0..1000 {
        let f = rng.next_f64();
        assert!((0.0..1.0).contains(&f));
        let i = rng.range_i64(-2, 2);
        assert!((-2..=2).contains(&i));
    }
    assert_eq!(rng.range_i64(3, 3), 3);
}

#[test]
fn damped_converges_without_overshoot() {
    let mut d = Damped::new(0.0, 0.05);
    d.target = 1.0;
    let mut prev = d.current;
    for _ in 0..200 {
        let v = d.step();
        assert!(v >= prev && v <= 1.0);
        prev = v;
    }
    assert!((1.0 - d.current).abs() < 1e-4);
}

#[test]
fn damped_first_step_covers_factor_of_distance() {
    let mut d = Damped::new(0.0, 0.05);
    d.target = 0.2;
    assert!((d.step() - 0.01).abs() < 1e-12);
}
