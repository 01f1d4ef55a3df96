//! The keyed, copy-on-write environment store

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A typed configuration slot in the environment
///
/// Keys are zero-sized marker types; each declares the type of the value it
/// stores and a default returned when the key was never written along the
/// current path. Lookup therefore never fails.
///
/// # Example
///
/// ```
/// use sitewright::EnvironmentKey;
///
/// struct AuthorKey;
///
/// impl EnvironmentKey for AuthorKey {
///     type Value = String;
///     fn default_value() -> String {
///         "anonymous".to_string()
///     }
/// }
/// ```
pub trait EnvironmentKey: 'static {
    /// The type of value stored under this key
    type Value: Clone + 'static;

    /// The value observed when the key was never overridden
    fn default_value() -> Self::Value;
}

/// The configuration context passed down the rule tree
///
/// Clones are cheap (values are `Arc`-shared) and fully value-semantic:
/// overriding a key on a copy replaces the shared handle and never affects
/// the original. The output directory is a required field rather than a key,
/// since every sink resolves paths against it.
#[derive(Clone)]
pub struct EnvironmentValues {
    output_directory: PathBuf,
    custom: HashMap<TypeId, Arc<dyn Any>>,
}

impl EnvironmentValues {
    /// Create the root environment for a run
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
            custom: HashMap::new(),
        }
    }

    /// Look up the value for `K`, falling back to its declared default
    pub fn get<K: EnvironmentKey>(&self) -> K::Value {
        self.custom
            .get(&TypeId::of::<K>())
            .and_then(|value| value.downcast_ref::<K::Value>())
            .cloned()
            .unwrap_or_else(K::default_value)
    }

    /// Override the value for `K` in this copy
    pub fn set<K: EnvironmentKey>(&mut self, value: K::Value) {
        self.custom.insert(TypeId::of::<K>(), Arc::new(value));
    }

    /// Consuming form of [`set`](Self::set), for building environments inline
    pub fn setting<K: EnvironmentKey>(mut self, value: K::Value) -> Self {
        self.set::<K>(value);
        self
    }

    /// The directory output paths are resolved against
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Join a relative segment onto the output directory
    pub fn push_output_path(&mut self, segment: impl AsRef<Path>) {
        self.output_directory.push(segment);
    }
}

impl fmt::Debug for EnvironmentValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentValues")
            .field("output_directory", &self.output_directory)
            .field("custom_keys", &self.custom.len())
            .finish()
    }
}
