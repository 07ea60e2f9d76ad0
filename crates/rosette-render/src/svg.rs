//! SVG rendering of an orbit sample sequence
//!
//! Pure glue over the numeric core: maps the (x, y) sequence into an
//! equal-aspect viewport with dashed reference lines through the
//! origin, matching the reference plot layout.

use rosette_sim::OrbitSample;
use std::fmt::Write as _;
use std::io;
use std::path::Path;

/// Plot configuration; `Default` gives an 800×800 canvas
#[derive(Clone, Debug)]
pub struct SvgPlot {
    pub width: u32,
    pub height: u32,
    pub margin: f64,
}

impl Default for SvgPlot {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            margin: 40.0,
        }
    }
}

impl SvgPlot {
    /// Render the sample sequence to an SVG document.
    ///
    /// Both axes share one scale (equal aspect). Samples with a
    /// non-finite radius split the curve: singular directions render
    /// as gaps, never as bogus segments.
    pub fn render(&self, samples: &[OrbitSample]) -> String {
        let (w, h) = (self.width as f64, self.height as f64);
        let inner_w = (w - 2.0 * self.margin).max(1.0);
        let inner_h = (h - 2.0 * self.margin).max(1.0);

        // Data bounds over finite samples; the origin is always kept in
        // view so the reference axes stay visible.
        let mut min_x: f64 = 0.0;
        let mut max_x: f64 = 0.0;
        let mut min_y: f64 = 0.0;
        let mut max_y: f64 = 0.0;
        for s in samples.iter().filter(|s| is_finite(s)) {
            min_x = min_x.min(s.x);
            max_x = max_x.max(s.x);
            min_y = min_y.min(s.y);
            max_y = max_y.max(s.y);
        }

        let span_x = (max_x - min_x).max(f64::EPSILON);
        let span_y = (max_y - min_y).max(f64::EPSILON);
        let scale = (inner_w / span_x).min(inner_h / span_y);

        let center_x = (min_x + max_x) / 2.0;
        let center_y = (min_y + max_y) / 2.0;
        // SVG y grows downward, so flip the vertical axis
        let map_x = |x: f64| (x - center_x) * scale + w / 2.0;
        let map_y = |y: f64| (center_y - y) * scale + h / 2.0;

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(
            out,
            r#"  <rect width="100%" height="100%" fill="white"/>"#
        );

        // Dashed reference lines through the origin
        let (ox, oy) = (map_x(0.0), map_y(0.0));
        let _ = writeln!(
            out,
            r#"  <line x1="0" y1="{oy:.2}" x2="{w:.0}" y2="{oy:.2}" stroke="red" stroke-dasharray="6 4"/>"#
        );
        let _ = writeln!(
            out,
            r#"  <line x1="{ox:.2}" y1="0" x2="{ox:.2}" y2="{h:.0}" stroke="red" stroke-dasharray="6 4"/>"#
        );

        // Orbit curve, split wherever a sample is non-finite
        for run in samples.split(|s| !is_finite(s)) {
            if run.len() < 2 {
                continue;
            }
            let points: Vec<String> = run
                .iter()
                .map(|s| format!("{:.2},{:.2}", map_x(s.x), map_y(s.y)))
                .collect();
            let _ = writeln!(
                out,
                r#"  <polyline fill="none" stroke="steelblue" stroke-width="1" points="{}"/>"#,
                points.join(" ")
            );
        }

        out.push_str("</svg>\n");
        out
    }

    /// Render and write the document to a file
    pub fn write_to(&self, samples: &[OrbitSample], path: &Path) -> io::Result<()> {
        std::fs::write(path, self.render(samples))
    }
}

fn is_finite(s: &OrbitSample) -> bool {
    s.radius.is_finite() && s.x.is_finite() && s.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(theta: f64, radius: f64) -> OrbitSample {
        OrbitSample {
            theta,
            radius,
            x: radius * theta.cos(),
            y: radius * theta.sin(),
        }
    }

    fn circle(n: usize) -> Vec<OrbitSample> {
        (0..n)
            .map(|i| sample(i as f64 / n as f64 * std::f64::consts::TAU, 2.0))
            .collect()
    }

    #[test]
    fn test_render_contains_curve_and_axes() {
        let svg = SvgPlot::default().render(&circle(100));

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert_eq!(svg.matches("<polyline").count(), 1);
    }

    #[test]
    fn test_nonfinite_samples_split_the_curve() {
        let mut samples = circle(100);
        samples[50] = sample(0.0, f64::INFINITY);

        let svg = SvgPlot::default().render(&samples);
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn test_empty_input_still_renders_axes() {
        let svg = SvgPlot::default().render(&[]);
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert_eq!(svg.matches("<polyline").count(), 0);
    }

    #[test]
    fn test_equal_aspect_mapping() {
        // A unit circle must land in the viewport as a circle: the x and
        // y extents of the mapped points have to agree.
        let plot = SvgPlot {
            width: 800,
            height: 400,
            margin: 20.0,
        };
        let svg = plot.render(&circle(720));

        let coords: Vec<(f64, f64)> = svg
            .lines()
            .filter(|l| l.contains("<polyline"))
            .flat_map(|l| {
                let start = l.find("points=\"").unwrap() + 8;
                let end = l[start..].find('"').unwrap() + start;
                l[start..end]
                    .split(' ')
                    .map(|p| {
                        let (x, y) = p.split_once(',').unwrap();
                        (x.parse().unwrap(), y.parse().unwrap())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let xs: Vec<f64> = coords.iter().map(|c| c.0).collect();
        let ys: Vec<f64> = coords.iter().map(|c| c.1).collect();
        let span = |v: &[f64]| {
            v.iter().cloned().fold(f64::MIN, f64::max) - v.iter().cloned().fold(f64::MAX, f64::min)
        };

        assert!((span(&xs) - span(&ys)).abs() < 1.0);
    }
}
