//! Project structure: where things live and whether the native crate is set up
//! for static linking.

mod layout;
mod manifest;

pub use layout::{NATIVE_CRATE_DIR, ProjectLayout, STATIC_LIB_NAME};
pub use manifest::{
    CrateTypeCheck, REQUIRED_CRATE_TYPE, check_crate_type, check_crate_type_str,
};
