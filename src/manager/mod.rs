pub mod image_manager;
pub mod registry;
pub mod shared;
pub mod store;

pub use image_manager::{ImageManager, ManagerOpts};
pub use registry::{Operation, OperationRegistry, OperationSpec};
pub use shared::SharedImageManager;
pub use store::ImageStore;
