//! This module defines all of the ports that the udagram domain requires

use std::sync::Arc;

use chrono::{DateTime, Utc};
use model_udagram::{
    connection::Connection,
    group::{Group, NewGroup},
    image::{CreatedImage, Image, NewImage},
    search::ImageDocument,
};

use crate::domain::models::{DeliveryErr, GalleryErr};

/// Storage of [Group] records
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait GroupRepo: Send + Sync + 'static {
    /// fetch a single group, [None] if it does not exist
    fn get_group(
        &self,
        group_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Group>>> + Send;

    /// every group, in no particular order
    fn list_groups(&self) -> impl Future<Output = anyhow::Result<Vec<Group>>> + Send;

    /// write a new group
    fn put_group(&self, group: &Group) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Storage of [Image] records
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ImageRepo: Send + Sync + 'static {
    /// write a new image record
    fn put_image(&self, image: &Image) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// the images of a group ordered newest first
    fn images_for_group(
        &self,
        group_id: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Image>>> + Send;

    /// look an image up by its id
    fn get_image(
        &self,
        image_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Image>>> + Send;
}

/// Storage of the active websocket [Connection]s
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ConnectionRepo: Send + Sync + 'static {
    fn put_connection(
        &self,
        connection: &Connection,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// every registered connection
    fn list_connections(&self) -> impl Future<Output = anyhow::Result<Vec<Connection>>> + Send;

    fn delete_connection(
        &self,
        connection_id: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Object storage holding the uploaded images and their thumbnails
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ObjectStore: Send + Sync + 'static {
    /// read a whole object
    fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;

    /// write a whole object
    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// a url a client can PUT the object to directly, valid for `expires_in_seconds`
    fn upload_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in_seconds: u64,
    ) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Pushes messages to websocket connections
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ConnectionNotifier: Send + Sync + 'static {
    fn post(
        &self,
        connection_id: &str,
        payload: &[u8],
    ) -> impl Future<Output = Result<(), DeliveryErr>> + Send;
}

/// The external search index of images
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SearchIndex: Send + Sync + 'static {
    /// write the document under its image id
    fn index_image(
        &self,
        document: &ImageDocument,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Source of the secret bearer tokens are signed with
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SigningSecret: Send + Sync + 'static {
    fn signing_secret(&self) -> impl Future<Output = anyhow::Result<Arc<str>>> + Send;
}

/// port for getting the current system time
/// Having a trait allows tests to be consistent
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TimeGetter: Send + Sync + 'static {
    /// get the current system time
    fn now(&self) -> DateTime<Utc>;
}

/// The http api over groups and images
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait GalleryService: Send + Sync + 'static {
    /// every group
    fn get_groups(&self) -> impl Future<Output = Result<Vec<Group>, GalleryErr>> + Send;

    /// store a new group under a freshly minted id
    fn create_group(&self, req: NewGroup)
    -> impl Future<Output = Result<Group, GalleryErr>> + Send;

    /// the images of an existing group, newest first
    fn get_images(
        &self,
        group_id: &str,
    ) -> impl Future<Output = Result<Vec<Image>, GalleryErr>> + Send;

    /// a single image by id
    fn get_image(&self, image_id: &str) -> impl Future<Output = Result<Image, GalleryErr>> + Send;

    /// store the image record of an existing group and hand out the url to upload its bytes to
    fn create_image(
        &self,
        group_id: &str,
        req: NewImage,
    ) -> impl Future<Output = Result<CreatedImage, GalleryErr>> + Send;
}
