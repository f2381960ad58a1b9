//! Post-step polylines for ECDF curves

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// A step curve where each `y` holds until the next `x`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepLine {
    /// Vertices of the drawn polyline
    pub points: Vec<(f64, f64)>,
    pub label: Option<String>,
}

impl StepLine {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Value of the step function at `x` (0 left of the first step)
    pub fn value_at(&self, x: f64) -> f64 {
        self.points
            .iter()
            .take_while(|p| p.0 <= x)
            .last()
            .map_or(0.0, |p| p.1)
    }
}

/// Polyline for an ECDF given as step coordinates
///
/// Accepts the `(x, y)` output of the histogram or raw-value ECDF functions
/// and inserts the horizontal segments of a post-step plot.
pub fn plot_ecdf(x: &[f64], y: &[f64]) -> PlotResult<StepLine> {
    if x.len() != y.len() {
        return Err(PlotError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let mut points = Vec::with_capacity(x.len() * 2);
    for (i, (&xi, &yi)) in x.iter().zip(y).enumerate() {
        if i > 0 {
            points.push((xi, y[i - 1]));
        }
        points.push((xi, yi));
    }

    Ok(StepLine {
        points,
        label: None,
    })
}
