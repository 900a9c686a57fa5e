//! Cache key construction for generation requests

use super::entity::PasswordGenerationRequest;

/// Separator between per-request entries inside a batch fingerprint
const BATCH_SEPARATOR: &str = ";";

/// Key for a single generation: `{length}_{complexity}_{owner}`
pub fn generation_key(length: i32, complexity: i32, owner: &str) -> String {
    format!("{}_{}_{}", length, complexity, owner)
}

/// Order-sensitive fingerprint of a batch of requests
///
/// Each entry is `{length}_{complexity}_{owner byte length}:{owner}`, so an
/// owner containing the separator cannot be read as the start of another entry.
pub fn batch_key<'a, I>(requests: I) -> String
where
    I: IntoIterator<Item = &'a PasswordGenerationRequest>,
{
    requests
        .into_iter()
        .map(|r| format!("{}_{}_{}:{}", r.length, r.complexity, r.owner.len(), r.owner))
        .collect::<Vec<_>>()
        .join(BATCH_SEPARATOR)
}
