//! Text formatting for the funding panel.

/// Fixed-point text with exact halves rounded away from zero.
///
/// `format!` breaks exact ties to even (`12.25` → `"12.2"`); browsers show
/// `"12.3"` for the same value, so ties are resolved here first.
fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // A tie only counts when the product is exact: the fused residual is zero.
    let exact = value.mul_add(scale, -scaled) == 0.0;
    if scaled.is_finite() && exact && scaled.fract().abs() == 0.5 {
        return format!("{:.*}", digits, scaled.round() / scale);
    }
    format!("{:.*}", digits, value)
}

/// Progress with one decimal place, e.g. `"12.5"`.
pub fn format_progress(percent: f64) -> String {
    to_fixed(percent, 1)
}

/// Raised amount with four decimal places.
pub fn format_raised(raised: f64) -> String {
    to_fixed(raised, 4)
}

/// Goal in its shortest form: `1.0` renders as `"1"`.
pub fn format_target(needed: f64) -> String {
    needed.to_string()
}

/// Inline style for the filled part of a progress bar. Not clamped.
pub fn bar_width_style(value: f64) -> String {
    format!("width: {}%", value)
}
