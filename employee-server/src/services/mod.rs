//! 服务模块
//!
//! - [`PhotoStore`] - 员工照片的文件系统存储

pub mod photo_store;

pub use photo_store::{PhotoStore, PhotoUpload};
