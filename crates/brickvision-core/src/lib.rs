pub mod annotate;
pub mod consts;
pub mod error;
pub mod io;
pub mod label_image;
pub mod pipeline;
pub mod regions;
pub mod segmentation;
