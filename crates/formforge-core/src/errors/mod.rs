mod form_error;
mod storage_error;

pub use form_error::{FormError, FormResult};
pub use storage_error::StorageError;
