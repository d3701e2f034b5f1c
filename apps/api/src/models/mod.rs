pub mod college;
pub mod profile;
pub mod quiz_result;
pub mod timeline;
