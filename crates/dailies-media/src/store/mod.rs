pub mod handlers;

use serde_json::{Map, Value};
use uuid::Uuid;

use dailies_runtime::actor::{ActorRef, spawn_actor};

pub type StoreRef = ActorRef<JsonStoreActor>;

/// Key-path (JSON pointer) to document store, owned by one media source.
/// Holds `/metadata/media/...` and `/colour_pipeline`. Pure leaf: it emits no
/// events; the owning source broadcasts on its behalf.
pub struct JsonStoreActor {
    uuid: Uuid,
    tree: Value,
}

impl JsonStoreActor {
    pub fn new(uuid: Uuid, tree: Value) -> Self {
        let tree = if tree.is_object() {
            tree
        } else {
            Value::Object(Map::new())
        };
        Self { uuid, tree }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

pub fn spawn_store(tree: Value) -> StoreRef {
    let (store_ref, _join) = spawn_actor(JsonStoreActor::new(Uuid::new_v4(), tree));
    store_ref
}

/// Walk a JSON pointer, creating intermediate objects, and return the slot.
fn ensure_pointer<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    if path.is_empty() {
        return Some(root);
    }
    if !path.starts_with('/') {
        return None;
    }
    let mut cursor = root;
    for token in path.split('/').skip(1) {
        let token = token.replace("~1", "/").replace("~0", "~");
        if !cursor.is_object() {
            *cursor = Value::Object(Map::new());
        }
        let Value::Object(map) = cursor else {
            return None;
        };
        cursor = map.entry(token).or_insert(Value::Null);
    }
    Some(cursor)
}

/// Recursive object merge; non-object values are replaced wholesale.
fn deep_merge(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_map), Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                deep_merge(
                    target_map.entry(key.clone()).or_insert(Value::Null),
                    value,
                );
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}
