use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use signal_chart::domain::errors::ErrorKind;
use signal_chart::domain::market_data::{Bar, Series, SeriesGenerator, moving_average};
use wasm_bindgen_test::*;

fn flat_bar(close: f64) -> Bar {
    Bar::new(close, close, close, close)
}

#[quickcheck]
fn length_is_count_minus_window_plus_one(seed: u64, count: u8, window: u8) -> bool {
    let count = count as usize % 100 + 1;
    let window = window as usize % count + 1;
    let mut rng = StdRng::seed_from_u64(seed);
    let series = SeriesGenerator::default().generate(count, 1.0850, &mut rng).unwrap();

    moving_average(&series, window).unwrap().len() == count - window + 1
}

#[wasm_bindgen_test]
fn averages_trailing_closes() {
    let series = Series::new((1..=5).map(|c| flat_bar(c as f64)).collect()).unwrap();
    let ma = moving_average(&series, 3).unwrap();
    assert_eq!(ma, vec![2.0, 3.0, 4.0]);
}

#[wasm_bindgen_test]
fn window_one_is_the_closes() {
    let series = Series::new(vec![flat_bar(1.1), flat_bar(1.3), flat_bar(1.2)]).unwrap();
    assert_eq!(moving_average(&series, 1).unwrap(), vec![1.1, 1.3, 1.2]);
}

#[wasm_bindgen_test]
fn full_window_gives_single_point() {
    let series = Series::new(vec![flat_bar(1.0), flat_bar(2.0), flat_bar(3.0), flat_bar(4.0)]).unwrap();
    let ma = moving_average(&series, 4).unwrap();
    assert_eq!(ma.len(), 1);
    assert!((ma[0] - 2.5).abs() < f64::EPSILON);
}

#[wasm_bindgen_test]
fn out_of_range_window_rejected() {
    let series = Series::new(vec![flat_bar(1.0), flat_bar(2.0)]).unwrap();

    assert_eq!(moving_average(&series, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(moving_average(&series, 3).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn rolling_sum_does_not_drift() {
    let closes: Vec<f64> = (0..10_000).map(|i| 1.0 + (i % 7) as f64 * 1e-4).collect();
    let series = Series::new(closes.iter().copied().map(flat_bar).collect()).unwrap();
    let ma = moving_average(&series, 10).unwrap();

    let last_window = &closes[closes.len() - 10..];
    let expected = last_window.iter().sum::<f64>() / 10.0;
    assert!((ma[ma.len() - 1] - expected).abs() < 1e-9);
}
