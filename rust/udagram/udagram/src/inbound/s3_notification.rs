//! Uploads to the images bucket reach the lambdas as s3 events wrapped in sns messages

use aws_lambda_events::event::{s3::S3Event, sns::SnsEvent};

/// The decoded keys of every object an sns delivery reports.
///
/// A message that is not an s3 event is logged and skipped, the rest of the batch is still returned.
pub fn uploaded_keys(event: &SnsEvent) -> Vec<String> {
    let mut keys = Vec::new();

    for record in &event.records {
        let s3_event: S3Event = match serde_json::from_str(&record.sns.message) {
            Ok(s3_event) => s3_event,
            Err(e) => {
                tracing::warn!(error = ?e, message_id = ?record.sns.message_id, "sns message is not an s3 event");
                continue;
            }
        };

        keys.extend(s3_event_keys(&s3_event));
    }

    keys
}

/// The decoded object keys of an s3 event
pub fn s3_event_keys(event: &S3Event) -> Vec<String> {
    event
        .records
        .iter()
        .filter_map(|record| record.s3.object.key.as_deref())
        .filter_map(|key| match decode_key(key) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(error = ?e, key = %key, "unable to decode key");
                None
            }
        })
        .collect()
}

/// Keys arrive url encoded, with spaces as `+`
fn decode_key(key: &str) -> Result<String, std::string::FromUtf8Error> {
    urlencoding::decode(&key.replace('+', " ")).map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn s3_event(keys: &[&str]) -> serde_json::Value {
        let records: Vec<_> = keys
            .iter()
            .map(|key| {
                json!({
                    "eventVersion": "2.1",
                    "eventSource": "aws:s3",
                    "awsRegion": "us-east-1",
                    "eventTime": "2022-05-01T12:00:00.000Z",
                    "eventName": "ObjectCreated:Put",
                    "userIdentity": { "principalId": "EXAMPLE" },
                    "requestParameters": { "sourceIPAddress": "127.0.0.1" },
                    "responseElements": {
                        "x-amz-request-id": "EXAMPLE123456789",
                        "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
                    },
                    "s3": {
                        "s3SchemaVersion": "1.0",
                        "configurationId": "testConfigRule",
                        "bucket": {
                            "name": "udagram-images-dev",
                            "ownerIdentity": { "principalId": "EXAMPLE" },
                            "arn": "arn:aws:s3:::udagram-images-dev"
                        },
                        "object": {
                            "key": key,
                            "size": 1024,
                            "eTag": "0123456789abcdef0123456789abcdef",
                            "sequencer": "0A1B2C3D4E5F678901"
                        }
                    }
                })
            })
            .collect();

        json!({ "Records": records })
    }

    fn sns_event(messages: &[String]) -> SnsEvent {
        let records: Vec<_> = messages
            .iter()
            .map(|message| {
                json!({
                    "EventVersion": "1.0",
                    "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:images-topic:2bcfbf39-05c3-41de-beaa-fcfcc21c8f55",
                    "EventSource": "aws:sns",
                    "Sns": {
                        "SignatureVersion": "1",
                        "Timestamp": "2022-05-01T12:00:00.000Z",
                        "Signature": "EXAMPLE",
                        "SigningCertUrl": "https://sns.us-east-1.amazonaws.com/SimpleNotificationService-000000000.pem",
                        "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                        "Message": message,
                        "MessageAttributes": {},
                        "Type": "Notification",
                        "UnsubscribeUrl": "https://sns.us-east-1.amazonaws.com/?Action=Unsubscribe",
                        "TopicArn": "arn:aws:sns:us-east-1:123456789012:images-topic",
                        "Subject": "Amazon S3 Notification"
                    }
                })
            })
            .collect();

        serde_json::from_value(json!({ "Records": records })).unwrap()
    }

    #[test]
    fn it_unwraps_s3_events_from_sns() {
        let event = sns_event(&[
            s3_event(&["first"]).to_string(),
            s3_event(&["second", "third"]).to_string(),
        ]);

        assert_eq!(uploaded_keys(&event), vec!["first", "second", "third"]);
    }

    #[test]
    fn keys_are_url_decoded() {
        let event = sns_event(&[s3_event(&["my+dog%21.png"]).to_string()]);

        assert_eq!(uploaded_keys(&event), vec!["my dog!.png"]);
    }

    #[test]
    fn messages_that_are_not_s3_events_are_skipped() {
        let event = sns_event(&[
            "not json at all".to_string(),
            s3_event(&["kept"]).to_string(),
        ]);

        assert_eq!(uploaded_keys(&event), vec!["kept"]);
    }
}
