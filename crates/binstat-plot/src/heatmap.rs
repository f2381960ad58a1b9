//! Annotated heatmap descriptions
//!
//! [`plot_heatmap`] turns a matrix into everything a backend needs to draw an
//! image-style heatmap: per-cell colors, value and label text placed at cell
//! centers, cell grid lines, colorbar range and tick visibility. Cell `(i, j)`
//! is centered at `x = j`, `y = i` with the row axis pointing down, so the
//! axes span `[-0.5, ncols - 0.5]` and `[nrows - 0.5, -0.5]`.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};

use crate::colormap::{get_colormap, Color, DEFAULT_HEATMAP_COLORMAP};
use crate::error::{PlotError, PlotResult};
use crate::format::ValueFormat;

/// Vertical offset of value text when labels are drawn too
const VALUE_OFFSET: f64 = 0.2;
/// Vertical offset of label text when values are drawn too
const LABEL_OFFSET: f64 = -0.2;
/// Lines closer than this to the upper limit are not drawn
const GRID_EDGE_MARGIN: f64 = 0.01;

/// Which grid lines to draw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridAxis {
    #[default]
    Both,
    /// Vertical lines at x positions
    X,
    /// Horizontal lines at y positions
    Y,
}

impl GridAxis {
    fn has_x(&self) -> bool {
        matches!(self, GridAxis::Both | GridAxis::X)
    }

    fn has_y(&self) -> bool {
        matches!(self, GridAxis::Both | GridAxis::Y)
    }
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridAxis::Both => "both",
            GridAxis::X => "x",
            GridAxis::Y => "y",
        })
    }
}

impl FromStr for GridAxis {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(GridAxis::Both),
            "x" => Ok(GridAxis::X),
            "y" => Ok(GridAxis::Y),
            other => Err(PlotError::UnknownAxis(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Appearance and spacing of heatmap grid lines
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub axis: GridAxis,
    /// Distance between lines in data units
    pub step: f64,
    pub line_style: LineStyle,
    pub color: Color,
    pub line_width: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            axis: GridAxis::Both,
            step: 1.0,
            line_style: LineStyle::Solid,
            color: Color::BLACK,
            line_width: 0.5,
        }
    }
}

/// A straight line in data coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Color,
    pub line_width: f32,
    pub line_style: LineStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationKind {
    Value,
    Label,
}

/// Text centered at a point in data coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f32,
    pub kind: AnnotationKind,
}

/// Colorbar accompanying a heatmap
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Colorbar {
    pub colormap: String,
    /// Fraction of the axes height the bar occupies
    pub shrink: f32,
    pub label: Option<String>,
    pub vmin: f64,
    pub vmax: f64,
}

/// Heatmap options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Colormap name, see [`crate::colormap::get_colormap`]
    pub cmap: String,
    pub colorbar: bool,
    pub cbar_size: f32,
    pub cbar_label: Option<String>,
    /// Write each cell's value into the cell
    pub print_vals: bool,
    pub val_fmt: ValueFormat,
    pub font_size: f32,
    pub grid: bool,
    pub grid_style: GridStyle,
    /// Hide axis ticks
    pub del_ticks: bool,
    /// Values drawn as empty cells
    pub ignore_vals: Vec<f64>,
}

impl HeatmapConfig {
    pub fn with_cmap(mut self, cmap: impl Into<String>) -> Self {
        self.cmap = cmap.into();
        self
    }

    pub fn with_cbar_label(mut self, label: impl Into<String>) -> Self {
        self.cbar_label = Some(label.into());
        self
    }

    pub fn with_val_fmt(mut self, val_fmt: ValueFormat) -> Self {
        self.val_fmt = val_fmt;
        self
    }

    pub fn with_ignore_vals(mut self, values: Vec<f64>) -> Self {
        self.ignore_vals = values;
        self
    }

    pub fn without_values(mut self) -> Self {
        self.print_vals = false;
        self
    }

    pub fn without_colorbar(mut self) -> Self {
        self.colorbar = false;
        self
    }

    pub fn without_grid(mut self) -> Self {
        self.grid = false;
        self
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cmap: DEFAULT_HEATMAP_COLORMAP.to_string(),
            colorbar: true,
            cbar_size: 0.8,
            cbar_label: None,
            print_vals: true,
            val_fmt: ValueFormat::default(),
            font_size: 6.0,
            grid: true,
            grid_style: GridStyle::default(),
            del_ticks: true,
            ignore_vals: Vec::new(),
        }
    }
}

/// Everything needed to draw one heatmap
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Input values with ignored values replaced by NaN
    pub values: Array2<f64>,
    /// Cell colors; `None` for NaN cells
    pub colors: Array2<Option<Color>>,
    /// Finite value range used for color normalization
    pub value_range: Option<(f64, f64)>,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub annotations: Vec<TextAnnotation>,
    pub grid_lines: Vec<LineSegment>,
    pub colorbar: Option<Colorbar>,
    pub show_ticks: bool,
}

impl Heatmap {
    /// Number of `(rows, columns)`
    pub fn dim(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn annotations_of(&self, kind: AnnotationKind) -> impl Iterator<Item = &TextAnnotation> {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }
}

/// Describe `x` as an annotated heatmap
///
/// `labels`, when given, must have the shape of `x`; its text is drawn in
/// each cell, shifted up when values are printed as well.
pub fn plot_heatmap<S>(
    x: &ArrayBase<S, Ix2>,
    labels: Option<&Array2<String>>,
    config: &HeatmapConfig,
) -> PlotResult<Heatmap>
where
    S: Data<Elem = f64>,
{
    if let Some(labels) = labels {
        if labels.dim() != x.dim() {
            return Err(PlotError::LabelShape {
                labels: labels.dim(),
                data: x.dim(),
            });
        }
    }

    let cmap = get_colormap(&config.cmap)?;
    let (rows, cols) = x.dim();

    let values = x.mapv(|v| {
        if config.ignore_vals.contains(&v) {
            f64::NAN
        } else {
            v
        }
    });

    let value_range = values
        .iter()
        .filter(|v| v.is_finite())
        .fold(None, |range: Option<(f64, f64)>, &v| match range {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        });

    let colors = values.mapv(|v| {
        let (lo, hi) = value_range?;
        if !v.is_finite() {
            return None;
        }
        let t = if hi > lo { (v - lo) / (hi - lo) } else { 0.5 };
        Some(cmap.sample(t as f32))
    });

    let mut annotations = Vec::new();
    if config.print_vals {
        let offset = if labels.is_some() { VALUE_OFFSET } else { 0.0 };
        for ((i, j), &v) in x.indexed_iter() {
            annotations.push(TextAnnotation {
                x: j as f64,
                y: i as f64 + offset,
                text: config.val_fmt.format(v),
                font_size: config.font_size,
                kind: AnnotationKind::Value,
            });
        }
    }
    if let Some(labels) = labels {
        let offset = if config.print_vals { LABEL_OFFSET } else { 0.0 };
        for ((i, j), label) in labels.indexed_iter() {
            annotations.push(TextAnnotation {
                x: j as f64,
                y: i as f64 + offset,
                text: label.clone(),
                font_size: config.font_size,
                kind: AnnotationKind::Label,
            });
        }
    }

    let xlim = (-0.5, cols as f64 - 0.5);
    let ylim = (rows as f64 - 0.5, -0.5);

    let grid_lines = if config.grid {
        grid_heatmap(xlim, ylim, &config.grid_style)?
    } else {
        Vec::new()
    };

    let colorbar = match (config.colorbar, value_range) {
        (true, Some((vmin, vmax))) => Some(Colorbar {
            colormap: cmap.name.clone(),
            shrink: config.cbar_size,
            label: config.cbar_label.clone(),
            vmin,
            vmax,
        }),
        _ => None,
    };

    tracing::debug!(
        rows,
        cols,
        annotations = annotations.len(),
        grid_lines = grid_lines.len(),
        "prepared heatmap"
    );

    Ok(Heatmap {
        values,
        colors,
        value_range,
        xlim,
        ylim,
        annotations,
        grid_lines,
        colorbar,
        show_ticks: !config.del_ticks,
    })
}

/// Grid lines between heatmap cells
///
/// Lines sit at `min + step, min + 2 * step, ...` up to (not including)
/// `max - 0.01` along each requested axis and span the full other axis.
/// Limits may be given in either order.
pub fn grid_heatmap(
    xlim: (f64, f64),
    ylim: (f64, f64),
    style: &GridStyle,
) -> PlotResult<Vec<LineSegment>> {
    if !(style.step > 0.0) {
        return Err(PlotError::Precondition(format!(
            "grid step must be positive, got {}",
            style.step
        )));
    }

    let (xmin, xmax) = ordered(xlim);
    let (ymin, ymax) = ordered(ylim);

    let line = |from, to| LineSegment {
        from,
        to,
        color: style.color,
        line_width: style.line_width,
        line_style: style.line_style,
    };

    let mut lines = Vec::new();
    if style.axis.has_x() {
        for x in arange(xmin + style.step, xmax - GRID_EDGE_MARGIN, style.step) {
            lines.push(line((x, ymin), (x, ymax)));
        }
    }
    if style.axis.has_y() {
        for y in arange(ymin + style.step, ymax - GRID_EDGE_MARGIN, style.step) {
            lines.push(line((xmin, y), (xmax, y)));
        }
    }

    Ok(lines)
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// `start, start + step, ...` strictly below `stop`
fn arange(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..n).map(move |i| start + i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_grid_axis_parse() {
        assert_eq!("x".parse::<GridAxis>().unwrap(), GridAxis::X);
        assert_eq!(GridAxis::Both.to_string(), "both");
        let err = "z".parse::<GridAxis>().unwrap_err();
        assert!(err.to_string().contains("'both', 'x', 'y'"));
    }

    #[test]
    fn test_grid_lines_between_cells() {
        let lines = grid_heatmap((-0.5, 2.5), (1.5, -0.5), &GridStyle::default()).unwrap();
        // Two vertical lines (x = 0.5, 1.5), one horizontal (y = 0.5)
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].from, (0.5, -0.5));
        assert_eq!(lines[0].to, (0.5, 1.5));
        assert_eq!(lines[1].from.0, 1.5);
        assert_eq!(lines[2].from, (-0.5, 0.5));
        assert_eq!(lines[2].to, (2.5, 0.5));
    }

    #[test]
    fn test_grid_single_axis() {
        let style = GridStyle {
            axis: GridAxis::Y,
            ..GridStyle::default()
        };
        let lines = grid_heatmap((-0.5, 2.5), (-0.5, 2.5), &style).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.from.1 == l.to.1));
    }

    #[test]
    fn test_grid_rejects_bad_step() {
        let style = GridStyle {
            step: 0.0,
            ..GridStyle::default()
        };
        assert!(matches!(
            grid_heatmap((0.0, 1.0), (0.0, 1.0), &style),
            Err(PlotError::Precondition(_))
        ));
    }

    #[test]
    fn test_heatmap_colors_and_values() {
        let x = array![[1.0, 2.0], [3.0, 5.0]];
        let heatmap = plot_heatmap(&x, None, &HeatmapConfig::default()).unwrap();

        assert_eq!(heatmap.dim(), (2, 2));
        assert_eq!(heatmap.value_range, Some((1.0, 5.0)));
        assert_eq!(heatmap.colors[[0, 0]].unwrap().to_hex(), "#FFFFCC");
        assert_eq!(heatmap.colors[[1, 1]].unwrap().to_hex(), "#800026");

        let values: Vec<_> = heatmap.annotations_of(AnnotationKind::Value).collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values[1].text, "2.0e+00");
        assert_eq!((values[1].x, values[1].y), (1.0, 0.0));

        assert_eq!(heatmap.xlim, (-0.5, 1.5));
        assert_eq!(heatmap.ylim, (1.5, -0.5));
        assert_eq!(heatmap.grid_lines.len(), 2);
        assert!(!heatmap.show_ticks);
        assert_eq!(heatmap.colorbar.as_ref().unwrap().shrink, 0.8);
    }

    #[test]
    fn test_heatmap_ignore_vals() {
        let x = array![[0.0, 2.0], [4.0, 0.0]];
        let config = HeatmapConfig::default().with_ignore_vals(vec![0.0]);
        let heatmap = plot_heatmap(&x, None, &config).unwrap();

        assert!(heatmap.values[[0, 0]].is_nan());
        assert!(heatmap.colors[[0, 0]].is_none());
        assert!(heatmap.colors[[0, 1]].is_some());
        assert_eq!(heatmap.value_range, Some((2.0, 4.0)));
        // Text still shows the original value
        assert_eq!(heatmap.annotations[0].text, "0.0e+00");
    }

    #[test]
    fn test_heatmap_labels() {
        let x = array![[1.0, 2.0]];
        let labels = array![["a".to_string(), "b".to_string()]];
        let heatmap = plot_heatmap(&x, Some(&labels), &HeatmapConfig::default()).unwrap();

        let value = heatmap.annotations_of(AnnotationKind::Value).next().unwrap();
        let label = heatmap.annotations_of(AnnotationKind::Label).next().unwrap();
        assert!((value.y - 0.2).abs() < 1e-12);
        assert!((label.y + 0.2).abs() < 1e-12);
        assert_eq!(label.text, "a");

        let only_labels =
            plot_heatmap(&x, Some(&labels), &HeatmapConfig::default().without_values()).unwrap();
        assert_eq!(only_labels.annotations.len(), 2);
        assert_eq!(only_labels.annotations[0].y, 0.0);
    }

    #[test]
    fn test_heatmap_label_shape_mismatch() {
        let x = array![[1.0, 2.0]];
        let labels = array![["a".to_string()]];
        let err = plot_heatmap(&x, Some(&labels), &HeatmapConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PlotError::LabelShape {
                labels: (1, 1),
                data: (1, 2)
            }
        );
    }

    #[test]
    fn test_heatmap_constant_and_empty() {
        let flat = array![[3.0, 3.0]];
        let heatmap = plot_heatmap(&flat, None, &HeatmapConfig::default().without_grid()).unwrap();
        assert!(heatmap.grid_lines.is_empty());
        assert_eq!(heatmap.colors[[0, 0]], heatmap.colors[[0, 1]]);

        let all_nan = array![[f64::NAN]];
        let heatmap = plot_heatmap(&all_nan, None, &HeatmapConfig::default()).unwrap();
        assert_eq!(heatmap.value_range, None);
        assert!(heatmap.colorbar.is_none());
        assert!(heatmap.colors[[0, 0]].is_none());
    }

    #[test]
    fn test_heatmap_unknown_cmap() {
        let x = array![[1.0]];
        let config = HeatmapConfig::default().with_cmap("rainbow");
        assert!(matches!(
            plot_heatmap(&x, None, &config),
            Err(PlotError::UnknownColormap(_))
        ));
    }
}
