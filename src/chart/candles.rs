//! Synthetic candlestick data

use super::Candle;
use crate::consts::cli_consts::chart::{CANDLE_COUNT, MAX_CANDLE_MOVE, MAX_WICK, START_PRICE};
use crate::ui::store::Timeframe;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates [`CANDLE_COUNT`] candles ending at `end_time`, spaced by the
/// timeframe's interval.
///
/// The series is a random walk from [`START_PRICE`]: each close moves by up
/// to half of [`MAX_CANDLE_MOVE`] from the open, wicks extend up to
/// [`MAX_WICK`] past the body, and each open equals the previous close.
/// The same seed always yields the same series.
pub fn generate_candles(seed: u64, end_time: i64, timeframe: Timeframe) -> Vec<Candle> {
    let interval = timeframe.interval_secs();
    let start = end_time - interval * CANDLE_COUNT as i64;
    random_walk(seed, start, interval, CANDLE_COUNT)
}

fn random_walk(seed: u64, start: i64, interval: i64, count: usize) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut candles = Vec::with_capacity(count);
    let mut time = start;
    let mut price = START_PRICE;

    for _ in 0..count {
        let change = (rng.gen_range(0.0..1.0) - 0.5) * MAX_CANDLE_MOVE;
        let open = price;
        let close = price + change;
        let high = open.max(close) + rng.gen_range(0.0..1.0) * MAX_WICK;
        let low = open.min(close) - rng.gen_range(0.0..1.0) * MAX_WICK;
        candles.push(Candle {
            time,
            open,
            high,
            low,
            close,
        });
        price = close;
        time += interval;
    }
    candles
}

#[cfg(test)]
mod tests {
    use super::*;

    const END: i64 = 1_760_000_000;

    #[test]
    fn test_generates_one_hundred_candles() {
        let candles = generate_candles(7, END, Timeframe::OneHour);
        assert_eq!(candles.len(), 100);
        assert_eq!(candles[0].open, START_PRICE);
    }

    #[test]
    // Wicks always contain the body and each candle opens at the previous close.
    fn test_candles_are_well_formed() {
        let candles = generate_candles(42, END, Timeframe::FiveMinutes);
        for candle in &candles {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
            assert!((candle.close - candle.open).abs() <= MAX_CANDLE_MOVE / 2.0);
        }
        for pair in candles.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
        }
    }

    #[test]
    // Candles are spaced by the timeframe and the series ends at the given time.
    fn test_spacing_follows_timeframe() {
        for timeframe in [Timeframe::OneMinute, Timeframe::OneHour, Timeframe::OneDay] {
            let candles = generate_candles(1, END, timeframe);
            let interval = timeframe.interval_secs();
            for pair in candles.windows(2) {
                assert_eq!(pair[1].time - pair[0].time, interval);
            }
            assert_eq!(candles.last().unwrap().time, END - interval);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = generate_candles(99, END, Timeframe::OneHour);
        let b = generate_candles(99, END, Timeframe::OneHour);
        let c = generate_candles(100, END, Timeframe::OneHour);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
