//! HTTP protocol layer module
//!
//! Response builders and form-body decoding, decoupled from wiki business
//! logic.

pub mod form;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_413_response, build_500_response,
    build_html_response, build_options_response, build_redirect_response,
};
