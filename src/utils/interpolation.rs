/// Piecewise-linear lookup over a table of `(x, y)` breakpoints sorted by `x`.
///
/// The segment used is the one whose lower breakpoint is the last one `<= x`;
/// values at or past the final breakpoint fall in the last segment, so the top
/// breakpoint itself returns its tabulated value.
pub fn piecewise_linear(table: &[(f64, f64)], x: f64) -> f64 {
    match table {
        [] => f64::NAN,
        [(_, y)] => *y,
        _ => {
            let segment = table
                .windows(2)
                .position(|pair| x < pair[1].0)
                .unwrap_or(table.len() - 2);
            let (x0, y0) = table[segment];
            let (x1, y1) = table[segment + 1];
            lerp(x0, y0, x1, y1, x)
        }
    }
}

fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    let ratio = (x - x0) / (x1 - x0);
    y0 + ratio * (y1 - y0)
}
