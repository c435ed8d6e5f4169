use std::f64::consts::PI;

/// Donut chart input: one slice per joined plan, in join order.
///
/// The three sequences are private and only grow together through `push`,
/// so index `i` always describes the same slice in all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    labels: Vec<String>,
    values: Vec<f64>,
    colors: Vec<String>,
}

/// Borrowed view of a single slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSlice<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: &'a str,
}

impl ChartData {
    pub fn push(&mut self, label: impl Into<String>, value: f64, color: impl Into<String>) {
        self.labels.push(label.into());
        self.values.push(value);
        self.colors.push(color.into());
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[cfg(test)]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn slices(&self) -> impl Iterator<Item = ChartSlice<'_>> {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| ChartSlice {
                label,
                value: *value,
                color,
            })
    }
}

/// Cumulative `(start, end)` fractions of the full turn for each value.
///
/// Returns nothing when the total is zero or not finite, since there is no
/// sensible way to split the ring.
pub fn slice_fractions(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let end = start + value / total;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

/// Outline of one ring segment in canvas pixels.
///
/// Fractions are measured clockwise from twelve o'clock. The outer arc is
/// walked forwards and the inner arc backwards so the points form a closed
/// polygon.
pub fn ring_segment_points(
    center: (i32, i32),
    outer_radius: f64,
    inner_radius: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    let sweep = (end - start).max(0.0);
    let steps = ((sweep * 120.0).ceil() as usize).max(1);

    let point = |radius: f64, fraction: f64| {
        let angle = fraction * 2.0 * PI - PI / 2.0;
        (
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        )
    };

    let mut points = Vec::with_capacity(2 * (steps + 1));
    for i in 0..=steps {
        points.push(point(outer_radius, start + sweep * i as f64 / steps as f64));
    }
    for i in (0..=steps).rev() {
        points.push(point(inner_radius, start + sweep * i as f64 / steps as f64));
    }
    points
}
