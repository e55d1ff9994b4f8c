mod authorizer;
mod connections;
mod gallery;
mod notification;
mod search_sync;
mod thumbnails;

pub use authorizer::{AuthorizerImpl, bearer_token};
pub use connections::ConnectionRegistry;
pub use gallery::GalleryImpl;
pub use notification::UploadNotifier;
pub use search_sync::SearchSync;
pub use thumbnails::ThumbnailGenerator;
