mod multipart;
mod report_handler;

pub use multipart::parse_report_multipart;
pub use report_handler::*;
