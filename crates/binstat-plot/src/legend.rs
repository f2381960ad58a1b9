//! Legends spanning several axes

use serde::{Deserialize, Serialize};

use crate::colormap::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleKind {
    Line,
    Patch,
    Marker,
}

/// The swatch drawn next to a legend label
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendHandle {
    pub kind: HandleKind,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub handle: LegendHandle,
    pub label: String,
}

impl LegendEntry {
    pub fn line(label: impl Into<String>, color: Color) -> Self {
        Self {
            handle: LegendHandle {
                kind: HandleKind::Line,
                color,
            },
            label: label.into(),
        }
    }

    pub fn patch(label: impl Into<String>, color: Color) -> Self {
        Self {
            handle: LegendHandle {
                kind: HandleKind::Patch,
                color,
            },
            label: label.into(),
        }
    }
}

/// Merge the legend entries of several axes into one legend
///
/// Returns `(handles, labels)` in axes order, duplicates included.
pub fn combine_legends<'a, I>(axes: I) -> (Vec<LegendHandle>, Vec<String>)
where
    I: IntoIterator<Item = &'a [LegendEntry]>,
{
    axes.into_iter()
        .flatten()
        .map(|entry| (entry.handle, entry.label.clone()))
        .unzip()
}
