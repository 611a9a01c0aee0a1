//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub(crate) use self::dominant_axis::dominant_axis;
pub(crate) use self::inv::inv;
pub use self::perp::perp2;
pub(crate) use self::sort::sort2;

mod ccw_face_normal;
mod dominant_axis;
mod inv;
mod perp;
mod sort;
