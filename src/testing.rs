use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn init_test() {
    drop(env_logger::try_init());
}

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
