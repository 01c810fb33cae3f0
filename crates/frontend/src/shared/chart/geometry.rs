//! Pure geometry for the SVG charts. Coordinates are in viewBox units.

use std::f64::consts::PI;

const FLAT_EPSILON: f64 = 1e-9;

/// Plot area: full viewBox size and the padding reserved for axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    /// X of point `index` out of `count` evenly spaced points
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.inner_width() / 2.0;
        }
        self.padding + self.inner_width() * index as f64 / (count - 1) as f64
    }

    /// Centre of band `index` out of `count` bands (bar charts)
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        let count = count.max(1);
        self.padding + self.inner_width() * (index as f64 + 0.5) / count as f64
    }

    pub fn band_width(&self, count: usize) -> f64 {
        self.inner_width() / count.max(1) as f64 * 0.7
    }

    pub fn y_at(&self, value: f64, range: &ValueRange) -> f64 {
        self.padding + self.inner_height() * (1.0 - range.fraction(value))
    }

    /// X for a continuous value (scatter charts)
    pub fn x_for(&self, value: f64, range: &ValueRange) -> f64 {
        self.padding + self.inner_width() * range.fraction(value)
    }
}

/// Value range of an axis; always includes zero and is never empty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if max - min < FLAT_EPSILON {
            Self { min, max: min + 1.0 }
        } else {
            Self { min, max }
        }
    }

    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// `count` evenly spaced tick values from min to max
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (count - 1) as f64;
        (0..count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Split a sparse series into runs of consecutive present values.
/// Gaps (`None`) break the line; they are never bridged.
pub fn segments(values: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(usize, f64)> = Vec::new();
    for (index, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((index, *v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// `points` attribute of an SVG `<polyline>` for one segment
pub fn polyline(segment: &[(usize, f64)], count: usize, range: &ValueRange, frame: &Frame) -> String {
    segment
        .iter()
        .map(|(index, value)| {
            format!(
                "{:.1},{:.1}",
                frame.x_at(*index, count),
                frame.y_at(*value, range)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Start/end angles (radians, clockwise from 12 o'clock) of each pie slice.
/// Non-positive values get an empty slice; an all-zero pie has no slices.
pub fn pie_slices(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = if *v > 0.0 { v / total * 2.0 * PI } else { 0.0 };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// SVG path of a pie slice centred at (cx, cy)
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let point = |angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let sweep = end - start;
    if sweep >= 2.0 * PI - FLAT_EPSILON {
        // a single arc cannot describe a full circle
        let (x0, y0) = point(0.0);
        let (x1, y1) = point(PI);
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            x0,
            y0,
            x1,
            y1,
            x0,
            y0,
            r = r
        );
    }
    let (x0, y0) = point(start);
    let (x1, y1) = point(end);
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z",
        cx,
        cy,
        x0,
        y0,
        large_arc,
        x1,
        y1,
        r = r
    )
}

/// Show every n-th axis label so at most `max_labels` are drawn
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 || count <= max_labels {
        return 1;
    }
    count.div_ceil(max_labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_break_on_gaps() {
        let values = [Some(1.0), Some(2.0), None, None, Some(3.0), None, Some(4.0), Some(5.0)];
        assert_eq!(
            segments(&values),
            vec![
                vec![(0, 1.0), (1, 2.0)],
                vec![(4, 3.0)],
                vec![(6, 4.0), (7, 5.0)],
            ]
        );
        assert!(segments(&[None, None]).is_empty());
    }

    #[test]
    fn test_range_includes_zero_and_is_never_flat() {
        let range = ValueRange::from_values([5.0, 10.0]);
        assert_eq!(range, ValueRange { min: 0.0, max: 10.0 });

        let flat = ValueRange::from_values([0.0, 0.0]);
        assert_eq!(flat, ValueRange { min: 0.0, max: 1.0 });

        let negative = ValueRange::from_values([-4.0, 2.0, f64::NAN]);
        assert_eq!(negative, ValueRange { min: -4.0, max: 2.0 });
    }

    #[test]
    fn test_polyline_maps_into_frame() {
        let frame = Frame::new(120.0, 70.0, 10.0);
        let range = ValueRange::from_values([0.0, 10.0]);
        let points = polyline(&[(0, 0.0), (2, 10.0)], 3, &range, &frame);
        assert_eq!(points, "10.0,60.0 110.0,10.0");
    }

    #[test]
    fn test_single_point_is_centred() {
        let frame = Frame::new(100.0, 50.0, 10.0);
        assert_eq!(frame.x_at(0, 1), 50.0);
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(&[1.0, 0.0, 3.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0], (0.0, PI / 2.0));
        assert_eq!(slices[1].0, slices[1].1);
        assert!((slices[2].1 - 2.0 * PI).abs() < 1e-12);
        assert!(pie_slices(&[0.0, -1.0]).is_empty());
    }

    #[test]
    fn test_arc_path_flags_large_arcs() {
        let small = arc_path(50.0, 50.0, 40.0, 0.0, PI / 2.0);
        assert!(small.contains(" 0 0 1 "));
        let large = arc_path(50.0, 50.0, 40.0, 0.0, 1.5 * PI);
        assert!(large.contains(" 0 1 1 "));
        let full = arc_path(50.0, 50.0, 40.0, 0.0, 2.0 * PI);
        assert_eq!(full.matches(" A ").count(), 2);
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(5, 10), 1);
        assert_eq!(label_stride(30, 10), 3);
        assert_eq!(label_stride(31, 10), 4);
    }
}
