use crate::summary::RegressionView;

/// Width in characters of the longest bar.
pub const BAR_WIDTH: usize = 40;

/// Points listed before the scatter listing is truncated.
pub const MAX_SCATTER_POINTS: usize = 20;

/// Least-squares line through a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Ordinary least-squares fit of y on x.
///
/// Returns `None` when fewer than two points exist or all x are equal.
pub fn fit_line(pairs: &[(f64, f64)]) -> Option<LineFit> {
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (sxy, sxx) = pairs.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
        let dx = x - mean_x;
        (sxy + dx * (y - mean_y), sxx + dx * dx)
    });

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LineFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Render a horizontal bar chart.
///
/// Bars scale to the largest magnitude; negative values are drawn with `-`.
pub fn bar_chart(title: &str, entries: &[(String, f64)]) -> String {
    let mut lines = vec![title.to_string()];

    if entries.is_empty() {
        lines.push("  (no data)".to_string());
        return join_lines(lines);
    }

    let label_width = entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let max_abs = entries.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max);

    for (label, value) in entries {
        let len = if max_abs > 0.0 {
            ((value.abs() / max_abs) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let mark = if *value < 0.0 { "-" } else { "#" };

        lines.push(format!(
            "  {:<width$} | {:<bar$} {:.1} g",
            label,
            mark.repeat(len),
            value,
            width = label_width,
            bar = BAR_WIDTH
        ));
    }

    join_lines(lines)
}

/// Render the regression view as a point listing with its best-fit line.
pub fn scatter_listing(title: &str, view: &RegressionView) -> String {
    let (x_min, x_max) = view.x_bounds;
    let mut lines = vec![
        title.to_string(),
        format!("  Plate Size (cm) axis: {} to {}", x_min, x_max),
    ];

    if view.pairs.is_empty() {
        lines.push("  (no data)".to_string());
        return join_lines(lines);
    }

    for (x, y) in view.pairs.iter().take(MAX_SCATTER_POINTS) {
        lines.push(format!("  {:>5.1} cm  {:>8.1} g", x, y));
    }
    if view.pairs.len() > MAX_SCATTER_POINTS {
        lines.push(format!(
            "  ... {} more points",
            view.pairs.len() - MAX_SCATTER_POINTS
        ));
    }

    match fit_line(&view.pairs) {
        Some(fit) => lines.push(format!(
            "  Best fit: waste = {:.2} * size {:+.2}  ({:.1} g at {} cm, {:.1} g at {} cm)",
            fit.slope,
            fit.intercept,
            fit.at(x_min),
            x_min,
            fit.at(x_max),
            x_max
        )),
        None => lines.push("  Best fit: needs at least two distinct plate sizes".to_string()),
    }

    join_lines(lines)
}

/// Join chart lines, each terminated by a newline.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
