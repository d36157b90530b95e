use crate::errors::FormResult;
use crate::models::FormSchema;

/// A durable key → bytes map, in the manner of browser local storage.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> FormResult<Option<Vec<u8>>>;
    /// Overwrites any previous value.
    fn set(&self, key: &str, value: &[u8]) -> FormResult<()>;
    fn remove(&self, key: &str) -> FormResult<()>;
}

/// Loads and stores the whole saved-schema collection.
///
/// Implementations never fail outward: unreadable data loads as an empty
/// collection and write failures are reported through the boolean result.
pub trait IFormRepository: Send + Sync {
    fn load(&self) -> Vec<FormSchema>;
    /// Replace the stored collection with `forms`.
    fn save(&self, forms: &[FormSchema]) -> bool;
    fn clear(&self) -> bool;
}

impl<T: IKeyValueStore + ?Sized> IKeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> FormResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> FormResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> FormResult<()> {
        (**self).remove(key)
    }
}
