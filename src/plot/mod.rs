//! Plot primitives shared by every visualisation: value → pixel mapping,
//! margins, axes with tick labels, and range-filtered line series.

pub mod axis;
pub mod layout;
pub mod mapper;
pub mod series;
