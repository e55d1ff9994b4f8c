//! Decoding of the lambda events udagram reacts to

pub mod image_stream;
pub mod s3_notification;
