//! Composite signal evaluation under an indicator policy.
//!
//! Pure function of its inputs: a bar series, a live quote, the policy,
//! and an optional pre-fetched news snapshot. Insufficient warm-up inside
//! an individual indicator (NaN) means "not triggered"; only a series too
//! short for the longest enabled lookback is an error.

use crate::error::EngineError;
use crate::indicators::{bollinger, macd, relative_volume, rsi, sma, vwap};
use crate::models::bar::{closes, volumes};
use crate::models::{Bar, IndicatorPolicy};
use crate::services::news::NewsSnapshot;
use crate::signals::triggers::{Decision, IndicatorKind, Trigger, TriggerSet};

pub struct SignalEvaluator;

impl SignalEvaluator {
    /// Evaluate the policy against a bar series and live quote.
    ///
    /// Fails with `InsufficientHistory` when the series cannot satisfy the
    /// longest enabled lookback; callers skip the symbol for this cycle.
    pub fn evaluate(
        bars: &[Bar],
        live_quote: f64,
        policy: &IndicatorPolicy,
        news: Option<&NewsSnapshot>,
    ) -> Result<Decision, EngineError> {
        let need = policy.min_history();
        if bars.len() < need {
            return Err(EngineError::InsufficientHistory {
                have: bars.len(),
                need,
            });
        }

        let close = closes(bars);
        let volume = volumes(bars);
        let n = close.len();
        let last_price = close[n - 1];

        let mut triggers: TriggerSet = Vec::new();

        if policy.sma_on {
            let sma_val = sma(&close, policy.sma_length)?;
            triggers.push(if last_price > sma_val {
                Trigger::fired(IndicatorKind::Sma, "SMA 🟡")
            } else {
                Trigger::quiet(IndicatorKind::Sma)
            });
        }

        // RSI series is shared by the level and slope triggers.
        let rsi_series = if policy.rsi_on || policy.rsi_slope_on {
            Some(rsi(&close, policy.rsi_length)?)
        } else {
            None
        };

        if policy.rsi_on {
            let val = rsi_series.as_ref().map(|s| s[n - 1]).unwrap_or(f64::NAN);
            // Overbought and oversold are mutually exclusive by construction.
            triggers.push(if !val.is_nan() && val > policy.rsi_overbought {
                Trigger::fired(IndicatorKind::Rsi, "RSI 📈")
            } else if !val.is_nan() && val < policy.rsi_oversold {
                Trigger::fired(IndicatorKind::Rsi, "RSI 📉")
            } else {
                Trigger::quiet(IndicatorKind::Rsi)
            });
        }

        // MACD lines are shared by the crossover and histogram triggers.
        let macd_lines = if policy.macd_on || policy.macd_hist_on {
            Some(macd(
                &close,
                policy.macd_fast,
                policy.macd_slow,
                policy.macd_signal,
            ))
        } else {
            None
        };

        if policy.macd_on {
            let fired = macd_lines
                .as_ref()
                .map(|(m, s)| m[n - 1] > s[n - 1])
                .unwrap_or(false);
            triggers.push(if fired {
                Trigger::fired(IndicatorKind::Macd, "MACD 🚀")
            } else {
                Trigger::quiet(IndicatorKind::Macd)
            });
        }

        if policy.bb_on {
            let bands = bollinger(&close, policy.bb_length, policy.bb_stddev)?;
            let upper_last = bands.upper[n - 1];
            let mut fired = !upper_last.is_nan() && last_price > upper_last;
            if fired && policy.bb_breakout_on {
                // Breakout variant: the previous close must have been at or
                // below the band (a crossing, not just "above").
                let upper_prev = bands.upper[n - 2];
                fired = !upper_prev.is_nan() && close[n - 2] <= upper_prev;
            }
            triggers.push(if fired {
                Trigger::fired(IndicatorKind::Bollinger, "BB 📈")
            } else {
                Trigger::quiet(IndicatorKind::Bollinger)
            });
        }

        if policy.volume_on {
            match relative_volume(&volume) {
                Some(ratio) if ratio >= policy.volume_multiplier => {
                    triggers.push(Trigger::fired(
                        IndicatorKind::Volume,
                        format!("VOL 🔊 ({ratio:.2}×)"),
                    ));
                }
                _ => triggers.push(Trigger::quiet(IndicatorKind::Volume)),
            }
        }

        // VWAP is computed unconditionally: the alert payload carries it
        // even when the VWAP trigger is disabled.
        let vwap_last = vwap(bars).last().copied().unwrap_or(f64::NAN);
        let (vwap_value, vwap_diff) = if vwap_last.is_nan() {
            (None, None)
        } else {
            (Some(vwap_last), Some(live_quote - vwap_last))
        };

        if policy.vwap_on {
            match vwap_diff {
                Some(diff) if diff >= policy.vwap_threshold => {
                    triggers.push(Trigger::fired(
                        IndicatorKind::Vwap,
                        format!("VWAP+ (${diff:.2})"),
                    ));
                }
                _ => triggers.push(Trigger::quiet(IndicatorKind::Vwap)),
            }
        }

        if policy.rsi_slope_on {
            let fired = rsi_series
                .as_ref()
                .map(|s| {
                    let (prev, last) = (s[n - 2], s[n - 1]);
                    !prev.is_nan() && !last.is_nan() && last - prev > 0.0
                })
                .unwrap_or(false);
            triggers.push(if fired {
                Trigger::fired(IndicatorKind::RsiSlope, "RSI ↗")
            } else {
                Trigger::quiet(IndicatorKind::RsiSlope)
            });
        }

        if policy.macd_hist_on {
            let fired = macd_lines
                .as_ref()
                .map(|(m, s)| m[n - 1] - s[n - 1] > 0.0)
                .unwrap_or(false);
            triggers.push(if fired {
                Trigger::fired(IndicatorKind::MacdHistogram, "MACD Δ+")
            } else {
                Trigger::quiet(IndicatorKind::MacdHistogram)
            });
        }

        if policy.news_on {
            let fired = news.map(NewsSnapshot::triggered).unwrap_or(false);
            triggers.push(if fired {
                Trigger::fired(IndicatorKind::News, "News 📰")
            } else {
                Trigger::quiet(IndicatorKind::News)
            });
        }

        let fired_count = triggers.iter().filter(|t| t.fired).count();
        let required = policy.required_matches();
        let fires = fired_count >= required;

        let display = if fires {
            triggers
                .iter()
                .filter_map(|t| t.label.clone())
                .collect()
        } else {
            Vec::new()
        };

        Ok(Decision {
            fires,
            triggers,
            display,
            fired_count,
            required,
            last_price,
            vwap: vwap_value,
            vwap_diff,
        })
    }
}
