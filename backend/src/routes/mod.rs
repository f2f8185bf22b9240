pub mod timeline;
pub mod videos;
