/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

mod bound_box;
mod near_far;
mod ray;

pub use bound_box::SceneBounds;
pub use near_far::NearFar;
pub use ray::Ray;
