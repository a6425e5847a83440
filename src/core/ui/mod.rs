//=========================================================================
// UI Geometry
//=========================================================================
//
// Hit-testing contract consumed by the scenes. Drawing lives elsewhere.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod layout;
pub mod region;

//=== Public API ==========================================================

pub use region::{hit_test, ClickRegion, Rect};
