use model_udagram::{
    group::{Group, NewGroup},
    image::{CreatedImage, Image, NewImage},
};

use crate::domain::{
    models::{GalleryConfig, GalleryErr},
    ports::{GalleryService, GroupRepo, ImageRepo, ObjectStore, TimeGetter},
};


/// struct which handles the actual implementation of the gallery with abstracted interfaces for mocking
pub struct GalleryImpl<G, I, O, T> {
    groups: G,
    images: I,
    objects: O,
    time: T,
    config: GalleryConfig,
}

impl<G, I, O, T> GalleryImpl<G, I, O, T>
where
    G: GroupRepo,
    I: ImageRepo,
    O: ObjectStore,
    T: TimeGetter,
{
    pub fn new(groups: G, images: I, objects: O, time: T, config: GalleryConfig) -> Self {
        GalleryImpl {
            groups,
            images,
            objects,
            time,
            config,
        }
    }

    async fn ensure_group_exists(&self, group_id: &str) -> Result<(), GalleryErr> {
        match self.groups.get_group(group_id).await? {
            Some(_) => Ok(()),
            None => Err(GalleryErr::GroupNotFound),
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), GalleryErr> {
    if value.trim().is_empty() {
        return Err(GalleryErr::InvalidRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl<G, I, O, T> GalleryService for GalleryImpl<G, I, O, T>
where
    G: GroupRepo,
    I: ImageRepo,
    O: ObjectStore,
    T: TimeGetter,
{
    #[tracing::instrument(err, skip(self))]
    async fn get_groups(&self) -> Result<Vec<Group>, GalleryErr> {
        Ok(self.groups.list_groups().await?)
    }

    #[tracing::instrument(err, skip(self))]
    async fn create_group(&self, req: NewGroup) -> Result<Group, GalleryErr> {
        require_text("name", &req.name)?;
        require_text("description", &req.description)?;

        let group = req.into_group(new_id());
        self.groups.put_group(&group).await?;

        tracing::info!(group_id = %group.id, "created group");
        Ok(group)
    }

    #[tracing::instrument(err, skip(self))]
    async fn get_images(&self, group_id: &str) -> Result<Vec<Image>, GalleryErr> {
        self.ensure_group_exists(group_id).await?;

        Ok(self.images.images_for_group(group_id).await?)
    }

    #[tracing::instrument(err, skip(self))]
    async fn get_image(&self, image_id: &str) -> Result<Image, GalleryErr> {
        self.images
            .get_image(image_id)
            .await?
            .ok_or(GalleryErr::ImageNotFound)
    }

    #[tracing::instrument(err, skip(self))]
    async fn create_image(&self, group_id: &str, req: NewImage) -> Result<CreatedImage, GalleryErr> {
        self.ensure_group_exists(group_id).await?;
        require_text("title", &req.title)?;

        let image_id = new_id();
        let image = Image::new(
            group_id,
            &image_id,
            req,
            self.time.now(),
            &self.config.images_bucket,
        );

        // the record is visible before the object is uploaded
        self.images.put_image(&image).await?;
        tracing::info!(image_id = %image_id, "stored new image");

        let upload_url = self
            .objects
            .upload_url(
                &self.config.images_bucket,
                &image_id,
                self.config.url_expiration_seconds,
            )
            .await?;

        Ok(CreatedImage {
            new_item: image,
            upload_url,
        })
    }
}
