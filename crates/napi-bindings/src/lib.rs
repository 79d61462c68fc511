#[macro_use]
extern crate napi_derive;

pub mod render_api;
pub mod report_api;

#[napi]
pub fn version() -> String {
    trueview_core::TRUEVIEW_VERSION.to_string()
}
