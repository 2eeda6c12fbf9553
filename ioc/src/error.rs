use crate::core::TypeKey;

use thiserror::Error;

/// Why a resolution produced no value.
///
/// [`Container::resolve`](crate::Container::resolve) folds all of these into
/// `None`. [`Container::try_resolve`](crate::Container::try_resolve) reports
/// the reason for the requested type itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  /// Nothing is registered for the requested type.
  #[error("no registration for service type {0}")]
  NotRegistered(TypeKey),

  /// The type is already being constructed further up the current path.
  /// The edge that closes the cycle is left empty.
  #[error("circular dependency on {key} (resolution path: {})", format_path(.path))]
  CircularDependency { key: TypeKey, path: Vec<TypeKey> },

  /// The registration produced a handle of a different type than the one it
  /// is keyed under.
  #[error("registration for {key} produced a handle of a different type")]
  TypeMismatch { key: TypeKey },
}

fn format_path(path: &[TypeKey]) -> String {
  path
    .iter()
    .map(TypeKey::name)
    .collect::<Vec<_>>()
    .join(" -> ")
}
