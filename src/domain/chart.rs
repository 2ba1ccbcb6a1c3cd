//! Text line chart for the member-count log.
//!
//! Renders a series of `(label, value)` points as a fixed-height grid:
//! `*` marks each point, `.` traces the segment between neighbours, and
//! the x-axis labels are printed vertically (rotated 90 degrees) under
//! their column. Points are plotted in the order given.

/// Layout parameters for `render_line_chart`.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Plot rows between the top and bottom value (at least 2).
    pub height: usize,
    /// Characters between neighbouring points (at least 1).
    pub column_width: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: 12,
            column_width: 3,
            title: "Gym Member Count Over Time".to_string(),
            x_label: "Date".to_string(),
            y_label: "Number of Members".to_string(),
        }
    }
}

const POINT: char = '*';
const TRACE: char = '.';

/// Render `points` as a multi-line string, or `None` when there is
/// nothing to plot.
pub fn render_line_chart(points: &[(String, i64)], options: &ChartOptions) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let height = options.height.max(2);
    let stride = options.column_width.max(1);
    let width = (points.len() - 1) * stride + 1;

    let min = points.iter().map(|(_, v)| *v).min().unwrap_or_default();
    let max = points.iter().map(|(_, v)| *v).max().unwrap_or_default();
    let scale = Scale { min, max, height };

    let mut grid = vec![vec![' '; width]; height];
    let plotted: Vec<(usize, usize)> = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (i * stride, scale.row(*v)))
        .collect();

    for pair in plotted.windows(2) {
        trace_segment(&mut grid, pair[0], pair[1]);
    }
    for &(col, row) in &plotted {
        grid[row][col] = POINT;
    }

    let label_width = [min, max]
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    let mut lines = Vec::with_capacity(height + 6);
    lines.push(options.title.clone());
    lines.push(options.y_label.clone());

    for row in (0..height).rev() {
        let label = scale.label(row).map(|v| v.to_string()).unwrap_or_default();
        let cells: String = grid[row].iter().collect();
        lines.push(
            format!("{label:>label_width$} | {cells}")
                .trim_end()
                .to_string(),
        );
    }
    lines.push(format!("{:>label_width$} +{}", "", "-".repeat(width + 1)));

    // Rotated x labels: one character per line, top to bottom.
    let longest = points.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    for depth in 0..longest {
        let mut row = vec![' '; width];
        for (i, (label, _)) in points.iter().enumerate() {
            if let Some(ch) = label.chars().nth(depth) {
                row[i * stride] = ch;
            }
        }
        let row: String = row.into_iter().collect();
        lines.push(
            format!("{:>label_width$}   {row}", "")
                .trim_end()
                .to_string(),
        );
    }

    let plot_width = label_width + 3 + width;
    let pad = plot_width.saturating_sub(options.x_label.len()) / 2;
    lines.push(format!("{:pad$}{}", "", options.x_label));

    let mut out = lines.join("\n");
    out.push('\n');
    Some(out)
}

/// Maps values onto grid rows, row 0 at the bottom.
struct Scale {
    min: i64,
    max: i64,
    height: usize,
}

impl Scale {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn row(&self, value: i64) -> usize {
        if self.max == self.min {
            return (self.height - 1) / 2;
        }
        // Widen before subtracting: counts span the full i64 range.
        let span = self.max as f64 - self.min as f64;
        let offset = value as f64 - self.min as f64;
        let row = (offset / span * (self.height - 1) as f64).round() as usize;
        row.min(self.height - 1)
    }

    fn label(&self, row: usize) -> Option<i64> {
        if self.max == self.min {
            return (row == (self.height - 1) / 2).then_some(self.min);
        }
        if row == self.height - 1 {
            Some(self.max)
        } else if row == 0 {
            Some(self.min)
        } else {
            None
        }
    }
}

/// Mark the cells strictly between two plotted points.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
fn trace_segment(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (x1, y1) = (to.0 as f64, to.1 as f64);
    let steps = (to.0 as i64 - from.0 as i64)
        .abs()
        .max((to.1 as i64 - from.1 as i64).abs());

    for step in 1..steps {
        let t = step as f64 / steps as f64;
        let col = (x0 + (x1 - x0) * t).round() as usize;
        let row = (y0 + (y1 - y0) * t).round() as usize;
        if grid[row][col] == ' ' {
            grid[row][col] = TRACE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(height: usize, column_width: usize) -> ChartOptions {
        ChartOptions {
            height,
            column_width,
            ..ChartOptions::default()
        }
    }

    fn point(label: &str, value: i64) -> (String, i64) {
        (label.to_string(), value)
    }

    #[test]
    fn test_empty_series_renders_nothing() {
        assert!(render_line_chart(&[], &ChartOptions::default()).is_none());
    }

    #[test]
    fn test_rising_series_layout() {
        let chart = render_line_chart(
            &[point("2024-05-01", 10), point("2024-06-01", 20)],
            &options(3, 2),
        )
        .unwrap();
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Gym Member Count Over Time");
        assert_eq!(lines[1], "Number of Members");
        assert_eq!(lines[2], "20 |   *");
        assert_eq!(lines[3], "   |  .");
        assert_eq!(lines[4], "10 | *");
        assert_eq!(lines[5], "   +----");
        // Rotated labels start right under the plot columns.
        assert_eq!(lines[6], "     2 2");
        assert_eq!(lines[10], "     - -");
        assert_eq!(lines[12], "     5 6");
        assert_eq!(lines.last().unwrap().trim(), "Date");
    }

    #[test]
    fn test_flat_series_sits_mid_height() {
        let chart =
            render_line_chart(&[point("a", 7), point("b", 7)], &options(5, 1)).unwrap();
        let lines: Vec<&str> = chart.lines().collect();
        // Rows are printed top-down: 4, 3, 2, 1, 0. Row 2 is the middle.
        assert_eq!(lines[4], "7 | **");
        assert_eq!(lines[2], "  |");
    }

    #[test]
    fn test_follows_input_order_not_value_order() {
        let chart = render_line_chart(
            &[point("b", 30), point("a", 10), point("c", 20)],
            &options(3, 1),
        )
        .unwrap();
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[2], "30 | *");
        assert_eq!(lines[3], "   |  .*");
        assert_eq!(lines[4], "10 |  *");
        assert_eq!(lines[6], "     bac");
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let chart = render_line_chart(
            &[point("a", i64::MIN), point("b", i64::MAX)],
            &options(3, 1),
        )
        .unwrap();
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[2], " 9223372036854775807 |  *");
        assert_eq!(lines[3], "                     |  .");
        assert_eq!(lines[4], "-9223372036854775808 | *");
    }

    #[test]
    fn test_single_point() {
        let chart = render_line_chart(&[point("2024-01-01", 3)], &options(2, 3)).unwrap();
        assert!(chart.contains('*'));
        assert_eq!(chart.matches('*').count(), 1);
    }
}
