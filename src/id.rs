/// Derives a component id that is stable across re-renders of the same
/// callsite. Two `Fab`s built on different lines get different ids, so their
/// entries in the keyed store never collide.
#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

/// Child-element id under a component id, e.g. `fab-0123..::trigger`.
pub fn slot_id(id: &str, slot: &str) -> String {
    format!("{id}::{slot}")
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
