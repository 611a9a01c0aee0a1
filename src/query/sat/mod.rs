//! Application of the Separating Axis Theorem (SAT).

mod sat_oblique_cone_aabb;
