//! SVG export of spirograph scenes
//!
//! Turns a chain's endpoints, the accumulated trail, and the optional
//! per-arm rotation circles into SVG path commands and complete documents.
//! Pure string output: window and event-loop management stay with the
//! host the same way on-screen drawing does.

mod svg;

pub use svg::{
    render_arm_path, render_circles, render_document, render_trail_path, write_svg, RenderError,
    SvgStyle,
};
