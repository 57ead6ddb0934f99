//! Raw gateway updates as the webhook receives them.

use serde_json::{json, Value};

pub const QUERY_ID: i64 = 5_000_000_001;
pub const USER_ID: i64 = 101_202;

pub fn inline_query_update(query: &str) -> Value {
    json!({
        "_": "updateBotInlineQuery",
        "query_id": QUERY_ID,
        "user_id": USER_ID,
        "query": query,
        "offset": "",
    })
}

pub fn new_message_update(text: &str) -> Value {
    json!({
        "_": "updateNewMessage",
        "message": {
            "_": "message",
            "id": 42,
            "out": false,
            "message": text,
            "peer_id": { "_": "peerUser", "user_id": USER_ID },
            "from_id": { "_": "peerUser", "user_id": USER_ID },
        },
        "pts": 1,
        "pts_count": 1,
    })
}

pub const CHANNEL_ID: i64 = 1_500_000_001;

pub fn new_channel_message_update(text: &str) -> Value {
    json!({
        "_": "updateNewChannelMessage",
        "message": {
            "_": "message",
            "id": 77,
            "out": false,
            "message": text,
            "peer_id": { "_": "peerChannel", "channel_id": CHANNEL_ID },
        },
        "pts": 5,
        "pts_count": 1,
    })
}
