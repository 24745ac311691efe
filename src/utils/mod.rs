pub mod deep_link;

pub use deep_link::build_share_link;

/// Generate a random lowercase alphanumeric identifier of the given length.
pub fn generate_link_id(length: usize) -> String {
    use std::iter;

    let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}
