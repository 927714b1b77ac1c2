//! SVG path-command and document builders
//!
//! Path strings accumulate `M x y L x y` commands; the document builder
//! wraps them in `<path>` elements on a black background: the trail
//! strip, the arm segments, and (when toggled) one circle per arm of
//! radius `length` centered at the arm's attachment point.

use spirokit_core::{ArmChain, Trail};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting a scene.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The output canvas has a zero dimension.
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    /// I/O error while writing the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stroke colors for the exported scene
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Stroke color for the arm segments
    pub arm_color: String,
    /// Stroke color for the traced trail
    pub trail_color: String,
    /// Stroke color for the rotation circles
    pub circle_color: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            arm_color: "green".to_string(),
            trail_color: "white".to_string(),
            circle_color: "blue".to_string(),
        }
    }
}

/// Render the trail as one polyline path string
pub fn render_trail_path(trail: &Trail) -> String {
    let mut path = String::new();
    for (index, point) in trail.points().iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{} {:.3} {:.3} ", command, point.x, point.y));
    }
    path
}

/// Render the arm segments as path commands, anchor to tip
pub fn render_arm_path(chain: &ArmChain) -> String {
    let mut path = String::new();
    let mut attach = chain.anchor();
    for arm in chain.arms() {
        let tip = arm.endpoint();
        path.push_str(&format!(
            "M {:.3} {:.3} L {:.3} {:.3} ",
            attach.x, attach.y, tip.x, tip.y
        ));
        attach = tip;
    }
    path
}

/// Render one `<circle>` element per arm, centered at the arm's
/// attachment point with the arm's length as radius
pub fn render_circles(chain: &ArmChain, style: &SvgStyle) -> String {
    let mut out = String::new();
    for (index, arm) in chain.arms().iter().enumerate() {
        // joint(index) exists for every in-range index
        let Some(center) = chain.joint(index) else {
            continue;
        };
        out.push_str(&format!(
            "  <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            center.x,
            center.y,
            arm.length(),
            style.circle_color
        ));
    }
    out
}

/// Build a complete standalone SVG document for the scene
pub fn render_document(
    chain: &ArmChain,
    trail: &Trail,
    width: u32,
    height: u32,
    style: &SvgStyle,
    show_circles: bool,
) -> Result<String, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidCanvasSize { width, height });
    }

    let mut doc = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n  <rect width=\"100%\" height=\"100%\" fill=\"black\"/>\n"
    );

    let trail_path = render_trail_path(trail);
    if !trail_path.is_empty() {
        doc.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            trail_path.trim_end(),
            style.trail_color
        ));
    }

    let arm_path = render_arm_path(chain);
    if !arm_path.is_empty() {
        doc.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            arm_path.trim_end(),
            style.arm_color
        ));
    }

    if show_circles {
        doc.push_str(&render_circles(chain, style));
    }

    doc.push_str("</svg>\n");
    Ok(doc)
}

/// Write an SVG document to disk
pub fn write_svg(path: &Path, document: &str) -> Result<(), RenderError> {
    std::fs::write(path, document)?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "wrote svg");
    Ok(())
}
