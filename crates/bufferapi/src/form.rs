//! Flat key/value encoding for POST bodies.
//!
//! The Buffer API takes `application/x-www-form-urlencoded` bodies where
//! list fields repeat a bracketed key (`profile_ids[]=a&profile_ids[]=b`)
//! and map fields nest the map key in brackets (`media[link]=...`).

use crate::types::NewUpdate;

/// A payload that can be sent as a form-encoded POST body.
pub trait FormEncode: Send + Sync {
    /// Ordered key/value pairs; keys may repeat.
    fn form_pairs(&self) -> Vec<(String, String)>;
}

/// The empty payload.
impl FormEncode for () {
    fn form_pairs(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

impl<K, V, const N: usize> FormEncode for [(K, V); N]
where
    K: AsRef<str> + Sync + Send,
    V: AsRef<str> + Sync + Send,
{
    fn form_pairs(&self) -> Vec<(String, String)> {
        string_pairs(self)
    }
}

impl<K, V> FormEncode for Vec<(K, V)>
where
    K: AsRef<str> + Sync + Send,
    V: AsRef<str> + Sync + Send,
{
    fn form_pairs(&self) -> Vec<(String, String)> {
        string_pairs(self)
    }
}

fn string_pairs<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
        .collect()
}

impl FormEncode for NewUpdate {
    fn form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3 + self.profile_ids.len() + self.media.len());
        pairs.push(("text".to_owned(), self.text.clone()));
        for id in &self.profile_ids {
            pairs.push(("profile_ids[]".to_owned(), id.clone()));
        }
        pairs.push(("shorten".to_owned(), self.shorten.to_string()));
        pairs.push(("now".to_owned(), self.now.to_string()));

        // HashMap order is random; sort so request bodies are reproducible.
        let mut media: Vec<_> = self.media.iter().collect();
        media.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, value) in media {
            pairs.push((format!("media[{key}]"), value.clone()));
        }
        pairs
    }
}
