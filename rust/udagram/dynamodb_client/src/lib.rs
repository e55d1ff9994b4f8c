use aws_config::SdkConfig;
use model_udagram::{connection::Connection, group::Group, image::Image};

mod connections;
mod groups;
mod images;

/// The names of the tables a lambda has been granted access to.
/// Each lambda only receives the tables it needs, the rest stay [None].
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub groups: Option<String>,
    pub images: Option<String>,
    pub image_id_index: Option<String>,
    pub connections: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub groups: Groups,
    pub images: Images,
    pub connections: Connections,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, tables: Tables) -> Self {
        let client = aws_sdk_dynamodb::Client::new(aws_config);

        Self::new_from_client(client, tables)
    }

    pub fn new_from_client(client: aws_sdk_dynamodb::Client, tables: Tables) -> Self {
        Self {
            groups: Groups {
                table: tables.groups,
                client: client.clone(),
            },
            images: Images {
                table: tables.images,
                image_id_index: tables.image_id_index,
                client: client.clone(),
            },
            connections: Connections {
                table: tables.connections,
                client,
            },
        }
    }
}

fn configured<'a>(value: &'a Option<String>, name: &str) -> anyhow::Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("{name} is not configured"))
}

#[derive(Debug, Clone)]
pub struct Groups {
    table: Option<String>,
    client: aws_sdk_dynamodb::Client,
}

impl Groups {
    fn table(&self) -> anyhow::Result<&str> {
        configured(&self.table, "groups table")
    }

    /// Gets a single group by id
    #[tracing::instrument(skip(self))]
    pub async fn get_group(&self, group_id: &str) -> anyhow::Result<Option<Group>> {
        groups::get_group(&self.client, self.table()?, group_id).await
    }

    /// Returns every group the table scan yields in one page
    #[tracing::instrument(skip(self))]
    pub async fn scan_groups(&self) -> anyhow::Result<Vec<Group>> {
        groups::scan_groups(&self.client, self.table()?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn put_group(&self, group: &Group) -> anyhow::Result<()> {
        groups::put_group(&self.client, self.table()?, group).await
    }
}

#[derive(Debug, Clone)]
pub struct Images {
    table: Option<String>,
    image_id_index: Option<String>,
    client: aws_sdk_dynamodb::Client,
}

impl Images {
    fn table(&self) -> anyhow::Result<&str> {
        configured(&self.table, "images table")
    }

    fn image_id_index(&self) -> anyhow::Result<&str> {
        configured(&self.image_id_index, "image id index")
    }

    #[tracing::instrument(skip(self))]
    pub async fn put_image(&self, image: &Image) -> anyhow::Result<()> {
        images::put_image(&self.client, self.table()?, image).await
    }

    /// Gets the images of a group, newest first
    #[tracing::instrument(skip(self))]
    pub async fn get_images_for_group(&self, group_id: &str) -> anyhow::Result<Vec<Image>> {
        images::get_images_for_group(&self.client, self.table()?, group_id).await
    }

    /// Looks an image up through the image id index
    #[tracing::instrument(skip(self))]
    pub async fn get_image(&self, image_id: &str) -> anyhow::Result<Option<Image>> {
        images::get_image(
            &self.client,
            self.table()?,
            self.image_id_index()?,
            image_id,
        )
        .await
    }
}

#[derive(Debug, Clone)]
pub struct Connections {
    table: Option<String>,
    client: aws_sdk_dynamodb::Client,
}

impl Connections {
    fn table(&self) -> anyhow::Result<&str> {
        configured(&self.table, "connections table")
    }

    #[tracing::instrument(skip(self))]
    pub async fn put_connection(&self, connection: &Connection) -> anyhow::Result<()> {
        connections::put_connection(&self.client, self.table()?, connection).await
    }

    /// Returns every connection the table scan yields in one page
    #[tracing::instrument(skip(self))]
    pub async fn scan_connections(&self) -> anyhow::Result<Vec<Connection>> {
        connections::scan_connections(&self.client, self.table()?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_connection(&self, connection_id: &str) -> anyhow::Result<()> {
        connections::delete_connection(&self.client, self.table()?, connection_id).await
    }
}
