//! binstat-plot - Plot descriptions for binned statistics
//!
//! Produces backend-agnostic descriptions of the figures used to inspect
//! histograms and their statistics; a renderer only has to draw what it is
//! given.
//!
//! - **Heatmap**: colored cells with value/label text, grid lines, colorbar
//! - **Step**: post-step ECDF polylines
//! - **Legend**: combined legends across axes
//! - **Colormap**: sequential colormaps for cell colors

pub mod colormap;
pub mod error;
pub mod format;
pub mod heatmap;
pub mod legend;
pub mod step;

pub use colormap::*;
pub use error::*;
pub use format::*;
pub use heatmap::*;
pub use legend::*;
pub use step::*;
