use tabstat_model::{NumericSummary, Quartiles};

use crate::options::SummaryOptions;

/// Summarize parsed numeric values (missing values already excluded).
///
/// Uses the population standard deviation. With no values the mean and
/// standard deviation are 0 and the extrema are undefined.
pub fn summarize_numeric(values: &[f64], missing: usize, options: &SummaryOptions) -> NumericSummary {
    let count = values.len();
    if count == 0 {
        return NumericSummary {
            count: 0,
            missing,
            mean: 0.0,
            min: None,
            max: None,
            std: 0.0,
            quartiles: None,
        };
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
            (lo.min(value), hi.max(value))
        });
    let n = count as f64;
    // Running mean over scaled terms: never overflows for finite input.
    let mut mean = 0.0;
    for (idx, &value) in values.iter().enumerate() {
        let k = (idx + 1) as f64;
        mean += value / k - mean / k;
    }
    // Deviations are taken relative to the largest magnitude, then rescaled.
    let scale = min.abs().max(max.abs());
    let std = if scale == 0.0 {
        0.0
    } else {
        let variance = values
            .iter()
            .map(|value| {
                let delta = value / scale - mean / scale;
                delta * delta
            })
            .sum::<f64>()
            / n;
        variance.sqrt() * scale
    };

    NumericSummary {
        count,
        missing,
        mean,
        min: Some(min),
        max: Some(max),
        std,
        quartiles: options.quartiles.then(|| quartiles(values)),
    }
}

fn quartiles(values: &[f64]) -> Quartiles {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Quartiles {
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
    }
}

/// Linear interpolation between closest ranks over sorted, non-empty input.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
