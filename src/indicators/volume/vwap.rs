//! Volume-weighted average price.

use crate::models::Bar;

/// Cumulative VWAP series over the supplied window.
///
/// vwap[i] = Σ(typical_price·volume) / Σ(volume) over bars 0..=i, where
/// typical_price = (high + low + close) / 3. Slots where the cumulative
/// volume is still zero are NaN.
pub fn vwap(bars: &[Bar]) -> Vec<f64> {
    let mut out = Vec::with_capacity(bars.len());
    let mut cum_tpv = 0.0;
    let mut cum_vol = 0.0;
    for bar in bars {
        cum_tpv += bar.typical_price() * bar.volume;
        cum_vol += bar.volume;
        out.push(if cum_vol > 0.0 {
            cum_tpv / cum_vol
        } else {
            f64::NAN
        });
    }
    out
}
