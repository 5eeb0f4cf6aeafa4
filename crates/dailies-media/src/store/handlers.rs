use serde_json::Value;

use dailies_core::MediaError;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use super::{JsonStoreActor, deep_merge, ensure_pointer};

/// Fetch the document at a pointer path; the empty path is the whole tree.
pub struct GetJsonMessage {
    pub path: String,
}

impl Message for GetJsonMessage {
    type Response = Result<Value, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetJsonMessage> for JsonStoreActor {
    async fn handle(
        &mut self,
        message: GetJsonMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<Value, MediaError> {
        if message.path.is_empty() {
            return Ok(self.tree.clone());
        }
        self.tree
            .pointer(&message.path)
            .cloned()
            .ok_or_else(|| MediaError::generic(format!("no value at {}", message.path)))
    }
}

/// Replace the document at a pointer path, creating intermediate objects.
/// The empty path replaces the whole tree.
pub struct SetJsonMessage {
    pub value: Value,
    pub path: String,
}

impl Message for SetJsonMessage {
    type Response = bool;
}

#[async_trait::async_trait]
impl Handler<SetJsonMessage> for JsonStoreActor {
    async fn handle(&mut self, message: SetJsonMessage, _ctx: &mut ActorContext<Self>) -> bool {
        match ensure_pointer(&mut self.tree, &message.path) {
            Some(slot) => {
                *slot = message.value;
                true
            }
            None => false,
        }
    }
}

/// Deep-merge a document into the one at a pointer path.
pub struct MergeJsonMessage {
    pub value: Value,
    pub path: String,
}

impl Message for MergeJsonMessage {
    type Response = bool;
}

#[async_trait::async_trait]
impl Handler<MergeJsonMessage> for JsonStoreActor {
    async fn handle(&mut self, message: MergeJsonMessage, _ctx: &mut ActorContext<Self>) -> bool {
        match ensure_pointer(&mut self.tree, &message.path) {
            Some(slot) => {
                deep_merge(slot, &message.value);
                true
            }
            None => false,
        }
    }
}

pub struct ShutdownMessage;

impl Message for ShutdownMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<ShutdownMessage> for JsonStoreActor {
    async fn handle(&mut self, _message: ShutdownMessage, ctx: &mut ActorContext<Self>) {
        ctx.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::{Value, json};

    use super::{GetJsonMessage, MergeJsonMessage, SetJsonMessage};
    use crate::store::spawn_store;

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn set_then_get_round_trips_paths() {
        dailies_runtime::block_on(async {
            let store = spawn_store(Value::Null);
            assert!(
                store
                    .call(
                        SetJsonMessage {
                            value: json!({"ocio": "aces"}),
                            path: "/colour_pipeline".to_string(),
                        },
                        TEST_TIMEOUT,
                    )
                    .await
                    .expect("call set")
            );
            let value = store
                .call(
                    GetJsonMessage {
                        path: "/colour_pipeline".to_string(),
                    },
                    TEST_TIMEOUT,
                )
                .await
                .expect("call get")
                .expect("value present");
            assert_eq!(value, json!({"ocio": "aces"}));
        });
    }

    #[test]
    fn get_on_a_missing_path_is_an_error() {
        dailies_runtime::block_on(async {
            let store = spawn_store(Value::Null);
            let result = store
                .call(
                    GetJsonMessage {
                        path: "/metadata/media".to_string(),
                    },
                    TEST_TIMEOUT,
                )
                .await
                .expect("call get");
            assert!(result.is_err());
        });
    }

    #[test]
    fn merge_keeps_sibling_keys() {
        dailies_runtime::block_on(async {
            let store = spawn_store(json!({"metadata": {"media": {"@": {"codec": "h264"}}}}));
            assert!(
                store
                    .call(
                        MergeJsonMessage {
                            value: json!({"metadata": {"media": {"@": {"bitrate": 12}}}}),
                            path: String::new(),
                        },
                        TEST_TIMEOUT,
                    )
                    .await
                    .expect("call merge")
            );
            let tree = store
                .call(
                    GetJsonMessage {
                        path: String::new(),
                    },
                    TEST_TIMEOUT,
                )
                .await
                .expect("call get")
                .expect("tree");
            assert_eq!(tree.pointer("/metadata/media/@/codec"), Some(&json!("h264")));
            assert_eq!(tree.pointer("/metadata/media/@/bitrate"), Some(&json!(12)));
        });
    }
}
