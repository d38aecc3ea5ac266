//! One-dimensional position plots.
//!
//! [`PositionPlot`] is the renderer-neutral description of a plot: a list of
//! `(x, y)` points, a title and an x-axis label. A [`Renderer`] turns it into
//! a file. The built-in [`SvgRenderer`] draws a red dot per point on a single
//! horizontal track, with the x-range labelled at both ends.
//!
//! ### Example
//! ```rust,no_run
//! use gma::{PositionPlot, Renderer, SvgRenderer};
//! let plot = PositionPlot::for_positions("Motif 'ATG' positions in genome chr1", &[0, 4, 8]);
//! SvgRenderer::default().render(&plot, std::path::Path::new("atg.svg")).unwrap();
//! ```
use std::path::Path;
use svg::node::element::{Circle, Line, Rectangle, Text};
use svg::Document;
use crate::common::GmaError;

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 40.0;
const TITLE_Y: f64 = 28.0;

/// Renderer-neutral plot description.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionPlot {
    pub title: String,
    pub x_label: String,
    pub points: Vec<(f64, f64)>,
}

impl PositionPlot {
    /// Scatter of `positions` at a constant height of 1, x-axis "Position".
    pub fn for_positions(title: impl Into<String>, positions: &[usize]) -> Self {
        Self {
            title: title.into(),
            x_label: "Position".to_string(),
            points: positions.iter().map(|&p| (p as f64, 1.0)).collect(),
        }
    }

    /// Smallest and largest x, widened by one on each side when they coincide.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut it = self.points.iter().map(|p| p.0);
        let first = it.next()?;
        let (lo, hi) = it.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
        if hi - lo < f64::EPSILON { Some((lo - 1.0, hi + 1.0)) } else { Some((lo, hi)) }
    }
}

/// Something that can write a [`PositionPlot`] to a file.
pub trait Renderer {
    /// File extension (without the dot) of the artifacts this renderer writes.
    fn extension(&self) -> &str;

    /// Write `plot` to `path`. Any failure is a [`GmaError::Render`].
    fn render(&self, plot: &PositionPlot, path: &Path) -> Result<(), GmaError>;
}

/// SVG renderer backed by the `svg` crate.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    pub width: f64,
    pub height: f64,
    /// Dot radius in pixels.
    pub point_radius: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        // 10 x 2 inch figure at 100 dpi
        Self { width: 1000.0, height: 200.0, point_radius: 4.0 }
    }
}

impl SvgRenderer {
    /// Build the SVG document for `plot`.
    pub fn document(&self, plot: &PositionPlot) -> Document {
        let (w, h) = (self.width, self.height);
        let left = MARGIN_LEFT;
        let right = w - MARGIN_RIGHT;
        let axis_y = h - 50.0;
        let track_y = (TITLE_Y + axis_y) / 2.0;

        let mut doc = Document::new()
            .set("viewBox", (0, 0, w, h))
            .set("width", w)
            .set("height", h)
            .add(Rectangle::new().set("x", 0).set("y", 0).set("width", w).set("height", h).set("fill", "#ffffff"))
            .add(
                Text::new(plot.title.clone())
                    .set("x", w / 2.0)
                    .set("y", TITLE_Y)
                    .set("text-anchor", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", 16),
            )
            .add(
                Line::new()
                    .set("x1", left)
                    .set("y1", axis_y)
                    .set("x2", right)
                    .set("y2", axis_y)
                    .set("stroke", "#000000")
                    .set("stroke-width", 1),
            )
            .add(
                Text::new(plot.x_label.clone())
                    .set("x", w / 2.0)
                    .set("y", h - 12.0)
                    .set("text-anchor", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", 13),
            );

        let Some((lo, hi)) = plot.x_range() else {
            return doc;
        };
        let to_x = |x: f64| left + (x - lo) / (hi - lo) * (right - left);

        for (value, anchor) in [(lo, "start"), (hi, "end")] {
            let x = to_x(value);
            doc = doc
                .add(
                    Line::new()
                        .set("x1", x)
                        .set("y1", axis_y)
                        .set("x2", x)
                        .set("y2", axis_y + 5.0)
                        .set("stroke", "#000000")
                        .set("stroke-width", 1),
                )
                .add(
                    Text::new(format!("{}", value.round() as i64))
                        .set("x", x)
                        .set("y", axis_y + 18.0)
                        .set("text-anchor", anchor)
                        .set("font-family", "monospace")
                        .set("font-size", 11),
                );
        }

        // y is constant for motif plots; any other value is drawn relative to 1.0
        for &(x, y) in &plot.points {
            doc = doc.add(
                Circle::new()
                    .set("cx", to_x(x))
                    .set("cy", track_y - (y - 1.0) * 10.0)
                    .set("r", self.point_radius)
                    .set("fill", "#d62728"),
            );
        }
        doc
    }
}

impl Renderer for SvgRenderer {
    fn extension(&self) -> &str {
        "svg"
    }

    fn render(&self, plot: &PositionPlot, path: &Path) -> Result<(), GmaError> {
        svg::save(path, &self.document(plot)).map_err(|e| GmaError::render(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_become_flat_points() {
        let p = PositionPlot::for_positions("t", &[0, 4, 8]);
        assert_eq!(p.points, vec![(0.0, 1.0), (4.0, 1.0), (8.0, 1.0)]);
        assert_eq!(p.x_label, "Position");
        assert_eq!(p.x_range(), Some((0.0, 8.0)));
    }

    #[test]
    fn single_point_range_is_widened() {
        let p = PositionPlot::for_positions("t", &[5]);
        assert_eq!(p.x_range(), Some((4.0, 6.0)));
        assert_eq!(PositionPlot::for_positions("t", &[]).x_range(), None);
    }

    #[test]
    fn svg_contains_title_label_and_dots() {
        let plot = PositionPlot::for_positions("Motif 'ATG' positions in genome g", &[0, 4, 8]);
        let text = SvgRenderer::default().document(&plot).to_string();
        assert!(text.contains("positions in genome g"));
        assert!(text.contains("Position"));
        assert_eq!(text.matches("<circle").count(), 3);
    }

    #[test]
    fn render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let plot = PositionPlot::for_positions("t", &[1, 2]);
        SvgRenderer::default().render(&plot, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"));
    }

    #[test]
    fn render_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("plot.svg");
        let plot = PositionPlot::for_positions("t", &[1]);
        let err = SvgRenderer::default().render(&plot, &path).unwrap_err();
        assert!(matches!(err, GmaError::Render { .. }));
    }
}
