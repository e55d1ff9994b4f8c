//! The dynamodb tables back the group, image and connection repositories

use dynamodb_client::{Connections, Groups, Images};
use model_udagram::{connection::Connection, group::Group, image::Image};

use crate::domain::ports::{ConnectionRepo, GroupRepo, ImageRepo};

impl GroupRepo for Groups {
    async fn get_group(&self, group_id: &str) -> anyhow::Result<Option<Group>> {
        Groups::get_group(self, group_id).await
    }

    async fn list_groups(&self) -> anyhow::Result<Vec<Group>> {
        self.scan_groups().await
    }

    async fn put_group(&self, group: &Group) -> anyhow::Result<()> {
        Groups::put_group(self, group).await
    }
}

impl ImageRepo for Images {
    async fn put_image(&self, image: &Image) -> anyhow::Result<()> {
        Images::put_image(self, image).await
    }

    async fn images_for_group(&self, group_id: &str) -> anyhow::Result<Vec<Image>> {
        self.get_images_for_group(group_id).await
    }

    async fn get_image(&self, image_id: &str) -> anyhow::Result<Option<Image>> {
        Images::get_image(self, image_id).await
    }
}

impl ConnectionRepo for Connections {
    async fn put_connection(&self, connection: &Connection) -> anyhow::Result<()> {
        Connections::put_connection(self, connection).await
    }

    async fn list_connections(&self) -> anyhow::Result<Vec<Connection>> {
        self.scan_connections().await
    }

    async fn delete_connection(&self, connection_id: &str) -> anyhow::Result<()> {
        Connections::delete_connection(self, connection_id).await
    }
}
