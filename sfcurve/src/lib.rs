//! Self-similar curve generation by recursive template substitution.
//!
//! A [`Template`] is an ordered list of segments; expanding a seed replaces
//! every segment with a scaled, rotated and possibly mirrored copy of the
//! template, once per iteration. The result is a flat list of [`Line`]s with
//! absolute directions and lengths, walked head to tail from the origin.
//!
//! ```
//! use sfcurve::{expand, library};
//!
//! let koch = library::by_name("koch").unwrap();
//! let curve = expand(koch.lines(), &koch, 2).unwrap();
//! assert_eq!(curve.len(), 64);
//! ```

pub mod error;
pub mod library;
pub mod model;
pub mod template;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod expand;
}
pub mod json;
pub mod svg;

pub use algorithms::expand::{expand, expand_template, expand_with_limit, expanded_len};
pub use error::CurveError;
pub use geometry::math::{bounding_box, endpoint, points, BoundingBox};
pub use model::{Color, Line, Vec2};
pub use svg::{render_svg, RenderConfig, RenderStyle};
pub use template::Template;
