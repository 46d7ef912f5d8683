//! Tweet id generation

use once_cell::sync::Lazy;
use uuid::Uuid;

/// Random node id for this process, with the multicast bit set so it can
/// never collide with a real MAC address.
static NODE_ID: Lazy<[u8; 6]> = Lazy::new(|| {
    let mut node: [u8; 6] = rand::random();
    node[0] |= 0x01;
    node
});

/// Generate a version 1 (time-based) UUID.
///
/// Ids generated later sort after earlier ones under timeuuid ordering; ids
/// generated within the same clock tick are disambiguated by the clock
/// sequence.
pub fn time_uuid() -> Uuid {
    Uuid::now_v1(&NODE_ID)
}

/// Hyphenated lower-case form used in API responses
pub fn new_tweet_id() -> String {
    time_uuid().to_string()
}
