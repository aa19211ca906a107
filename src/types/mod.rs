// ABOUTME: Validated domain types shared across modules.
// ABOUTME: Currently the store key prefix and key-joining helpers.

mod key_prefix;

pub use key_prefix::{
    DEFAULT_KEY_PREFIX, KeyPrefix, KeyPrefixError, STATUS_SEGMENT, clean_key, join_key,
};
