use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use udagram::{
    domain::{ports::ObjectStore, service::ThumbnailGenerator},
    inbound::s3_notification::uploaded_keys,
};

/// Creates a thumbnail for every uploaded key. A failing image does not stop the others.
#[tracing::instrument(skip_all)]
pub async fn handler<O: ObjectStore>(
    generator: &ThumbnailGenerator<O>,
    event: LambdaEvent<SnsEvent>,
) -> Result<(), Error> {
    let keys = uploaded_keys(&event.payload);
    let uploads = keys.len();

    let mut processed = 0;
    for key in keys {
        match generator.process(&key).await {
            Ok(_) => processed += 1,
            Err(e) => tracing::error!(error = ?e, key = %key, "unable to create thumbnail"),
        }
    }

    tracing::info!(
        records = event.payload.records.len(),
        uploads,
        processed,
        skipped = uploads - processed,
        "processed uploads"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use lambda_runtime::Context;
    use mockall::predicate::eq;
    use std::io::Cursor;
    use udagram::domain::{models::ThumbnailConfig, ports::MockObjectStore};

    fn event() -> LambdaEvent<SnsEvent> {
        let payload = serde_json::from_str(include_str!("../fixtures/sns_s3_put.json")).unwrap();
        LambdaEvent::new(payload, Context::default())
    }

    fn png() -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 20, Rgb([9, 9, 9])))
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn a_failing_upload_does_not_stop_the_batch() {
        let mut objects = MockObjectStore::new();
        objects
            .expect_get_object()
            .with(eq("images"), eq("my dog!.png"))
            .returning(|_, _| Box::pin(async { Err(anyhow::anyhow!("NoSuchKey")) }));
        objects
            .expect_get_object()
            .with(eq("images"), eq("0b6f1f0e-8a3c-4d7e-9d57-2f0d6f0a1c11"))
            .returning(|_, _| {
                let bytes = png();
                Box::pin(async move { Ok(bytes) })
            });
        objects
            .expect_put_object()
            .withf(|bucket, key, _, _| {
                bucket == "thumbnails" && key == "0b6f1f0e-8a3c-4d7e-9d57-2f0d6f0a1c11.jpeg"
            })
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(()) }));

        let generator = ThumbnailGenerator::new(
            objects,
            ThumbnailConfig {
                images_bucket: "images".to_string(),
                thumbnails_bucket: "thumbnails".to_string(),
            },
        );

        handler(&generator, event()).await.unwrap();
    }
}
