//! Linear sample schedules that drive the effect generators.

/// `steps` evenly spaced samples from `start` to `end`, both endpoints included.
///
/// A single step yields `[start]`; zero steps yield an empty schedule.
pub fn linear(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (steps - 1) as f64;
            (0..steps)
                .map(|i| start + (end - start) * (i as f64 / last))
                .collect()
        }
    }
}

/// `values` followed by its own reverse, sharing the peak sample once.
///
/// `n` input samples produce `2n - 1` outputs (or none for empty input).
pub fn mirrored(mut values: Vec<f64>) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return values;
    }
    values.reserve(n - 1);
    for i in (0..n - 1).rev() {
        values.push(values[i]);
    }
    values
}

/// Angles (degrees) of a full turn split into `steps`, truncated to whole degrees.
///
/// `reverse` walks the turn from 360 downwards.
pub fn turn_degrees(steps: usize, reverse: bool) -> Vec<f64> {
    let steps_f = steps as f64;
    (0..steps)
        .map(|i| {
            let swept = 360.0 * i as f64 / steps_f;
            let angle = if reverse { 360.0 - swept } else { swept };
            angle.trunc()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ramp.rs"]
mod tests;
