// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::nice::pow10;
use crate::request::ScaleMode;
use crate::ticks::TickSet;

/// Largest number of decimals a [`TickFormat`] will use.
pub const MAX_DECIMALS: u8 = 9;

/// Number notation for tick labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Plain decimal notation, e.g. `12.5`.
    #[default]
    Fixed,
    /// Mantissa and exponent, e.g. `1.25E+01`.
    Scientific,
}

/// How tick values are rendered as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TickFormat {
    /// Notation.
    pub notation: Notation,
    /// Digits after the decimal point (of the mantissa, for scientific notation).
    pub decimals: u8,
}

impl TickFormat {
    /// Chooses a format that tells adjacent ticks apart without trailing noise.
    ///
    /// The decimal count follows the smallest tick increment. Ticks whose magnitudes reach
    /// above `1e5` or below `1e-3` switch to scientific notation. Log plans always use
    /// scientific notation with one decimal.
    pub fn for_ticks(ticks: &TickSet) -> Self {
        if ticks.mode() == ScaleMode::Logarithmic {
            return Self {
                notation: Notation::Scientific,
                decimals: 1,
            };
        }
        let Some(delta) = ticks.min_increment().filter(|d| *d > 0.0 && d.is_finite()) else {
            return Self::default();
        };

        let exponent = -delta.log10().ceil();
        let mut decimals = exponent + f64::from(significant_digits(delta * pow10_f(exponent)));

        let mut orders = ticks
            .values()
            .iter()
            .map(|v| v.abs())
            .filter(|a| *a > 0.1 * delta)
            .map(f64::log10);
        let Some(first) = orders.next() else {
            return Self {
                notation: Notation::Fixed,
                decimals: clamp_decimals(decimals),
            };
        };
        let (min_order, max_order) =
            orders.fold((first, first), |(lo, hi), o| (lo.min(o), hi.max(o)));

        if max_order > 5.0 || min_order < -3.0 {
            let max_tick = ticks
                .values()
                .iter()
                .map(|v| v.abs())
                .fold(0.0, f64::max);
            decimals += max_tick.log10().floor();
            return Self {
                notation: Notation::Scientific,
                decimals: clamp_decimals(decimals),
            };
        }
        Self {
            notation: Notation::Fixed,
            decimals: clamp_decimals(decimals),
        }
    }

    /// Renders `value` with this format.
    pub fn format(&self, value: f64) -> String {
        // Avoid "-0.0".
        let value = if value == 0.0 { 0.0 } else { value };
        let decimals = usize::from(self.decimals);
        match self.notation {
            Notation::Fixed => format!("{value:.decimals$}"),
            Notation::Scientific => {
                let raw = format!("{value:.decimals$e}");
                match raw.split_once('e') {
                    Some((mantissa, exp)) => {
                        let (sign, digits) = match exp.strip_prefix('-') {
                            Some(d) => ('-', d),
                            None => ('+', exp),
                        };
                        format!("{mantissa}E{sign}{digits:0>2}")
                    }
                    None => raw,
                }
            }
        }
    }
}

/// Returns how many decimals `x` needs in fixed notation.
///
/// Counts multiplications by ten until `|x|` is at least `0.99` and within `1e-6` of a
/// whole number. Zero needs none. The count is capped at 17, the useful precision of `f64`.
pub fn significant_digits(x: f64) -> u8 {
    let mut x = x.abs();
    if x == 0.0 || !x.is_finite() {
        return 0;
    }
    let mut digits = 0;
    while (x < 0.99 || !almost_whole(x, 1e-6)) && digits < 17 {
        x *= 10.0;
        digits += 1;
    }
    digits
}

fn almost_whole(x: f64, epsilon: f64) -> bool {
    (x - x.round()).abs() <= epsilon
}

fn pow10_f(exponent: f64) -> f64 {
    #[allow(clippy::cast_possible_truncation, reason = "integral and clamped")]
    let k = exponent.clamp(-400.0, 400.0) as i32;
    pow10(k)
}

fn clamp_decimals(decimals: f64) -> u8 {
    let d = decimals.clamp(0.0, f64::from(MAX_DECIMALS));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=9")]
    {
        d as u8
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn linear(values: &[f64]) -> TickSet {
        TickSet::new(values.iter().copied(), ScaleMode::Linear, None)
    }

    fn fmt(values: &[f64]) -> TickFormat {
        TickFormat::for_ticks(&linear(values))
    }

    #[test]
    fn half_steps_need_one_decimal() {
        assert_eq!(
            fmt(&[1.0, 1.5, 2.0, 2.5]),
            TickFormat {
                notation: Notation::Fixed,
                decimals: 1
            }
        );
    }

    #[test]
    fn large_values_switch_to_scientific() {
        assert_eq!(
            fmt(&[0.0, 100_000.0, 200_000.0]),
            TickFormat {
                notation: Notation::Scientific,
                decimals: 0
            }
        );
    }

    #[test]
    fn tiny_values_switch_to_scientific() {
        assert_eq!(
            fmt(&[0.0, 5.5e-8, 11e-8]),
            TickFormat {
                notation: Notation::Scientific,
                decimals: 2
            }
        );
    }

    #[test]
    fn whole_steps_need_no_decimals() {
        assert_eq!(fmt(&[0.0, 20.0, 40.0]).decimals, 0);
        assert_eq!(fmt(&[0.0, 0.25, 0.5]).decimals, 2);
    }

    #[test]
    fn log_plans_use_one_scientific_decimal() {
        let set = TickSet::new([1.0, 10.0, 100.0], ScaleMode::Logarithmic, None);
        assert_eq!(
            TickFormat::for_ticks(&set),
            TickFormat {
                notation: Notation::Scientific,
                decimals: 1
            }
        );
    }

    #[test]
    fn renders_fixed_and_scientific_labels() {
        let fixed = TickFormat {
            notation: Notation::Fixed,
            decimals: 2,
        };
        assert_eq!(fixed.format(1.5), "1.50");
        assert_eq!(fixed.format(-0.0), "0.00");

        let sci = TickFormat {
            notation: Notation::Scientific,
            decimals: 1,
        };
        assert_eq!(sci.format(13_000.0), "1.3E+04");
        assert_eq!(sci.format(0.00042), "4.2E-04");
        assert_eq!(sci.format(1e100), "1.0E+100");
    }

    #[test]
    fn significant_digit_counts() {
        assert_eq!(significant_digits(30.01), 2);
        assert_eq!(significant_digits(30.0001), 4);
        assert_eq!(significant_digits(0.0), 0);
        assert_eq!(significant_digits(5.0), 0);
        assert_eq!(significant_digits(0.25), 2);
    }
}
