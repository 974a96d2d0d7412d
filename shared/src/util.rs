/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a snowflake-style token for use as a room ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so GUI
/// callers can round-trip it through a Number without loss):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// Rendered as a decimal string: ids are opaque strings on the wire.
pub fn room_id() -> String {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    ((ts << 12) | rand_bits).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_is_monotonic_across_millis() {
        let a: i64 = room_id().parse().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b: i64 = room_id().parse().unwrap();
        assert!(b > a);
    }
}
