pub mod edges;
pub mod nodes;
pub mod timeline;
