/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a prefixed, collision-resistant resource ID.
///
/// Layout: `{prefix}-{uuid v4}`, e.g. `customer-3f0c...`. The prefix keeps ids
/// readable in logs; uniqueness comes from the UUID alone.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// Next `updated_at` value that is strictly greater than `previous`.
///
/// Two updates landing in the same millisecond would otherwise share a
/// timestamp.
pub fn next_timestamp(previous: Option<i64>) -> i64 {
    let now = now_millis();
    match previous {
        Some(prev) if prev >= now => prev + 1,
        _ => now,
    }
}
