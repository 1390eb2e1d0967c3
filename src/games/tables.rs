//! Embedded payout data, loaded once into immutable structures at startup.
//! Nothing here is re-parsed per scan.

use super::params::Difficulty;
use super::params::KenoRisk;
use super::params::Risk;
use crate::rng::trunc2;
use once_cell::sync::Lazy;

/// plinko multiplier rows, indexed by the count of rightward steps.
/// a board with n rows has n + 1 prize slots.
pub fn plinko(risk: Risk, rows: usize) -> &'static [f64] {
    match (risk, rows) {
        (Risk::Low, 8) => &[5.6, 2.1, 1.1, 1.0, 0.5, 1.0, 1.1, 2.1, 5.6],
        (Risk::Low, 9) => &[5.6, 2.0, 1.6, 1.0, 0.7, 0.7, 1.0, 1.6, 2.0, 5.6],
        (Risk::Low, 10) => &[8.9, 3.0, 1.4, 1.1, 1.0, 0.5, 1.0, 1.1, 1.4, 3.0, 8.9],
        (Risk::Low, 11) => &[8.4, 3.0, 1.9, 1.3, 1.0, 0.7, 0.7, 1.0, 1.3, 1.9, 3.0, 8.4],
        (Risk::Low, 12) => &[10.0, 3.0, 1.6, 1.4, 1.1, 1.0, 0.5, 1.0, 1.1, 1.4, 1.6, 3.0, 10.0],
        (Risk::Low, 13) => &[8.1, 4.0, 3.0, 1.9, 1.2, 0.9, 0.7, 0.7, 0.9, 1.2, 1.9, 3.0, 4.0, 8.1],
        (Risk::Low, 14) => &[7.1, 4.0, 1.9, 1.4, 1.3, 1.1, 1.0, 0.5, 1.0, 1.1, 1.3, 1.4, 1.9, 4.0, 7.1],
        (Risk::Low, 15) => &[15.0, 8.0, 3.0, 2.0, 1.5, 1.1, 1.0, 0.7, 0.7, 1.0, 1.1, 1.5, 2.0, 3.0, 8.0, 15.0],
        (Risk::Low, 16) => &[16.0, 9.0, 2.0, 1.4, 1.4, 1.2, 1.1, 1.0, 0.5, 1.0, 1.1, 1.2, 1.4, 1.4, 2.0, 9.0, 16.0],
        (Risk::Medium, 8) => &[13.0, 3.0, 1.3, 0.7, 0.4, 0.7, 1.3, 3.0, 13.0],
        (Risk::Medium, 9) => &[18.0, 4.0, 1.7, 0.9, 0.5, 0.5, 0.9, 1.7, 4.0, 18.0],
        (Risk::Medium, 10) => &[22.0, 5.0, 2.0, 1.4, 0.6, 0.4, 0.6, 1.4, 2.0, 5.0, 22.0],
        (Risk::Medium, 11) => &[24.0, 6.0, 3.0, 1.8, 0.7, 0.5, 0.5, 0.7, 1.8, 3.0, 6.0, 24.0],
        (Risk::Medium, 12) => &[33.0, 11.0, 4.0, 2.0, 1.1, 0.6, 0.3, 0.6, 1.1, 2.0, 4.0, 11.0, 33.0],
        (Risk::Medium, 13) => &[43.0, 13.0, 6.0, 3.0, 1.3, 0.7, 0.4, 0.4, 0.7, 1.3, 3.0, 6.0, 13.0, 43.0],
        (Risk::Medium, 14) => &[58.0, 15.0, 7.0, 4.0, 1.9, 1.0, 0.5, 0.2, 0.5, 1.0, 1.9, 4.0, 7.0, 15.0, 58.0],
        (Risk::Medium, 15) => &[88.0, 18.0, 11.0, 5.0, 3.0, 1.3, 0.5, 0.3, 0.3, 0.5, 1.3, 3.0, 5.0, 11.0, 18.0, 88.0],
        (Risk::Medium, 16) => &[110.0, 41.0, 10.0, 5.0, 3.0, 1.5, 1.0, 0.5, 0.3, 0.5, 1.0, 1.5, 3.0, 5.0, 10.0, 41.0, 110.0],
        (Risk::High, 8) => &[29.0, 4.0, 1.5, 0.3, 0.2, 0.3, 1.5, 4.0, 29.0],
        (Risk::High, 9) => &[43.0, 7.0, 2.0, 0.6, 0.2, 0.2, 0.6, 2.0, 7.0, 43.0],
        (Risk::High, 10) => &[76.0, 10.0, 3.0, 0.9, 0.3, 0.2, 0.3, 0.9, 3.0, 10.0, 76.0],
        (Risk::High, 11) => &[120.0, 14.0, 5.2, 1.4, 0.4, 0.2, 0.2, 0.4, 1.4, 5.2, 14.0, 120.0],
        (Risk::High, 12) => &[170.0, 24.0, 8.1, 2.0, 0.7, 0.2, 0.2, 0.2, 0.7, 2.0, 8.1, 24.0, 170.0],
        (Risk::High, 13) => &[260.0, 37.0, 11.0, 4.0, 1.0, 0.2, 0.2, 0.2, 0.2, 1.0, 4.0, 11.0, 37.0, 260.0],
        (Risk::High, 14) => &[420.0, 56.0, 18.0, 5.0, 1.9, 0.3, 0.2, 0.2, 0.2, 0.3, 1.9, 5.0, 18.0, 56.0, 420.0],
        (Risk::High, 15) => &[620.0, 83.0, 27.0, 8.0, 3.0, 0.5, 0.2, 0.2, 0.2, 0.2, 0.5, 3.0, 8.0, 27.0, 83.0, 620.0],
        (Risk::High, 16) => &[1000.0, 130.0, 26.0, 9.0, 4.0, 2.0, 0.2, 0.2, 0.2, 0.2, 0.2, 2.0, 4.0, 9.0, 26.0, 130.0, 1000.0],
        _ => unreachable!("rows validated to [8, 16]"),
    }
}

/// wheel segment multipliers. the low tier is a repeating 10-segment
/// pattern, the high tier is all-or-nothing on the last segment, and the
/// medium tiers are bespoke per segment count.
pub fn wheel(risk: Risk, segments: usize) -> &'static [f64] {
    let tier = segments / 10 - 1;
    match risk {
        Risk::Low => &WHEEL_LOW[tier],
        Risk::Medium => WHEEL_MEDIUM[tier],
        Risk::High => &WHEEL_HIGH[tier],
    }
}

const WHEEL_LOW_PATTERN: [f64; 10] = [1.5, 1.2, 1.2, 1.2, 0.0, 1.2, 1.2, 1.2, 1.2, 0.0];

static WHEEL_LOW: Lazy<[Vec<f64>; 5]> = Lazy::new(|| {
    [10, 20, 30, 40, 50].map(|n| WHEEL_LOW_PATTERN.iter().cycle().take(n).copied().collect())
});

static WHEEL_MEDIUM: [&[f64]; 5] = [
    &[0.0, 1.9, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0],
    &[1.5, 0.0, 2.0, 0.0, 2.0, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.8, 0.0, 2.0, 0.0, 2.0, 0.0, 2.0, 0.0],
    &[1.5, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0, 2.0, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.5, 0.0, 2.0, 0.0, 2.0, 0.0, 1.7, 0.0, 4.0, 0.0, 1.5, 0.0, 2.0, 0.0],
    &[2.0, 0.0, 3.0, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.5, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.5, 0.0, 2.0, 0.0, 2.0, 0.0, 1.6, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0],
    &[2.0, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.5, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0, 2.0, 0.0, 2.0, 0.0, 1.5, 0.0, 3.0, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0, 1.5, 0.0, 5.0, 0.0, 1.5, 0.0, 2.0, 0.0, 1.5, 0.0],
];

static WHEEL_HIGH: Lazy<[Vec<f64>; 5]> = Lazy::new(|| {
    [10, 20, 30, 40, 50].map(|n| {
        let mut row = vec![0.0; n - 1];
        row.push(trunc2(n as f64 * 0.99));
        row
    })
});

/// keno payout rows, indexed by hit count, for 1..=10 picks
pub fn keno(risk: KenoRisk, picks: usize) -> &'static [f64] {
    match risk {
        KenoRisk::Classic => KENO_CLASSIC[picks - 1],
        KenoRisk::Low => KENO_LOW[picks - 1],
        KenoRisk::Medium => KENO_MEDIUM[picks - 1],
        KenoRisk::High => KENO_HIGH[picks - 1],
    }
}

static KENO_CLASSIC: [&[f64]; 10] = [
    &[0.7, 1.85],
    &[0.0, 2.0, 3.8],
    &[0.0, 1.1, 1.38, 26.0],
    &[0.0, 0.0, 2.2, 7.9, 90.0],
    &[0.0, 0.0, 1.5, 4.2, 13.0, 300.0],
    &[0.0, 0.0, 1.1, 2.0, 6.2, 100.0, 700.0],
    &[0.0, 0.0, 1.1, 1.6, 3.5, 15.0, 225.0, 700.0],
    &[0.0, 0.0, 1.1, 1.5, 2.0, 5.5, 39.0, 100.0, 800.0],
    &[0.0, 0.0, 1.1, 1.3, 1.7, 2.5, 7.5, 50.0, 250.0, 1000.0],
    &[0.0, 0.0, 1.1, 1.2, 1.3, 1.8, 3.5, 13.0, 50.0, 250.0, 1000.0],
];

static KENO_LOW: [&[f64]; 10] = [
    &[0.7, 1.85],
    &[0.0, 1.9, 4.5],
    &[0.0, 1.0, 3.1, 10.4],
    &[0.0, 0.8, 1.8, 5.0, 22.5],
    &[0.0, 0.25, 1.4, 4.1, 16.5, 36.0],
    &[0.0, 0.0, 1.0, 3.68, 7.0, 16.5, 40.0],
    &[0.0, 0.0, 0.47, 3.0, 4.5, 14.0, 31.0, 60.0],
    &[0.0, 0.0, 0.0, 2.2, 4.0, 13.0, 22.0, 55.0, 70.0],
    &[0.0, 0.0, 0.0, 1.55, 3.0, 8.0, 15.0, 44.0, 60.0, 85.0],
    &[0.0, 0.0, 0.0, 1.4, 2.25, 4.5, 8.0, 17.0, 50.0, 80.0, 100.0],
];

static KENO_MEDIUM: [&[f64]; 10] = [
    &[0.4, 2.75],
    &[0.0, 1.8, 5.1],
    &[0.0, 0.0, 2.8, 50.0],
    &[0.0, 0.0, 1.7, 10.0, 100.0],
    &[0.0, 0.0, 1.4, 4.0, 14.0, 390.0],
    &[0.0, 0.0, 0.0, 3.0, 9.0, 180.0, 710.0],
    &[0.0, 0.0, 0.0, 2.0, 7.0, 30.0, 400.0, 800.0],
    &[0.0, 0.0, 0.0, 2.0, 4.0, 11.0, 67.0, 400.0, 900.0],
    &[0.0, 0.0, 0.0, 2.0, 2.5, 5.0, 15.0, 100.0, 500.0, 1000.0],
    &[0.0, 0.0, 0.0, 1.6, 2.0, 4.0, 7.0, 26.0, 100.0, 500.0, 1000.0],
];

static KENO_HIGH: [&[f64]; 10] = [
    &[0.0, 3.96],
    &[0.0, 0.0, 17.1],
    &[0.0, 0.0, 0.0, 81.5],
    &[0.0, 0.0, 0.0, 10.0, 259.0],
    &[0.0, 0.0, 0.0, 4.5, 48.0, 450.0],
    &[0.0, 0.0, 0.0, 0.0, 11.0, 350.0, 710.0],
    &[0.0, 0.0, 0.0, 0.0, 7.0, 90.0, 400.0, 800.0],
    &[0.0, 0.0, 0.0, 0.0, 5.0, 20.0, 270.0, 600.0, 900.0],
    &[0.0, 0.0, 0.0, 0.0, 4.0, 11.0, 56.0, 500.0, 800.0, 1000.0],
    &[0.0, 0.0, 0.0, 0.0, 3.5, 8.0, 13.0, 63.0, 500.0, 800.0, 1000.0],
];

/// pump multiplier by safe-step count. compiled at startup from the
/// hypergeometric survival odds: surviving s pumps against m pops among
/// 25 slots has probability C(25-m, s) / C(25, s), and the multiplier is
/// the fair inverse shaved by the house edge and truncated to 2 decimals.
pub fn pump(difficulty: Difficulty) -> &'static [f64] {
    let tier = match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
        Difficulty::Expert => 3,
    };
    &PUMP[tier]
}

static PUMP: Lazy<[Vec<f64>; 4]> = Lazy::new(|| {
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert]
        .map(|d| pump_row(d.pops()))
});

fn pump_row(pops: usize) -> Vec<f64> {
    (0..=(25 - pops))
        .map(|steps| match steps {
            0 => 1.0,
            _ => trunc2((1.0 - crate::HOUSE_EDGE) / survival(pops, steps)),
        })
        .collect()
}

fn survival(pops: usize, steps: usize) -> f64 {
    (0..steps).fold(1.0, |p, i| p * (25 - pops - i) as f64 / (25 - i) as f64)
}
