//! Core data structures shared by the container and its resolvers.

use crate::error::ResolveError;

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

/// A stable identifier for a service type.
///
/// Two keys compare equal exactly when they were built from the same type.
/// The type name is carried along for diagnostics only and takes no part in
/// equality or hashing.
#[derive(Clone, Copy)]
pub struct TypeKey {
  type_id: TypeId,
  name: &'static str,
}

impl TypeKey {
  /// Returns the key for `T`. Works for unsized types such as `dyn Trait`.
  pub fn of<T: ?Sized + 'static>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      name: type_name::<T>(),
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  /// The compiler-provided name of the type. Not guaranteed to be stable
  /// across compiler versions.
  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.name)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// The keys currently being constructed on the active resolution path.
///
/// One context is created per top-level `resolve` call and threaded through
/// every nested resolution that call triggers. A key appearing twice on the
/// path is the circular dependency condition.
#[derive(Debug, Default)]
pub struct ResolutionContext {
  in_flight: Vec<TypeKey>,
}

impl ResolutionContext {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// The in-flight keys, outermost first.
  pub fn path(&self) -> &[TypeKey] {
    &self.in_flight
  }

  pub fn depth(&self) -> usize {
    self.in_flight.len()
  }

  pub fn contains(&self, key: &TypeKey) -> bool {
    self.in_flight.contains(key)
  }
}

/// An RAII guard marking a key as in flight.
///
/// Entering fails with [`ResolveError::CircularDependency`] if the key is
/// already on the path. Dropping the guard pops the key again, including
/// when a factory panics, so sibling branches always see a consistent path.
pub(crate) struct InFlight<'a> {
  context: &'a mut ResolutionContext,
}

impl<'a> InFlight<'a> {
  pub(crate) fn enter(context: &'a mut ResolutionContext, key: TypeKey) -> Result<Self, ResolveError> {
    if context.contains(&key) {
      return Err(ResolveError::CircularDependency {
        key,
        path: context.in_flight.clone(),
      });
    }
    context.in_flight.push(key);
    Ok(Self { context })
  }
}

impl Deref for InFlight<'_> {
  type Target = ResolutionContext;

  fn deref(&self) -> &Self::Target {
    self.context
  }
}

impl DerefMut for InFlight<'_> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.context
  }
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    self.context.in_flight.pop();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  trait Marker {}
  struct First;
  struct Second;

  #[test]
  fn keys_compare_by_type() {
    assert_eq!(TypeKey::of::<First>(), TypeKey::of::<First>());
    assert_ne!(TypeKey::of::<First>(), TypeKey::of::<Second>());
    assert_ne!(TypeKey::of::<dyn Marker>(), TypeKey::of::<First>());
    assert!(TypeKey::of::<dyn Marker>().name().contains("Marker"));
  }

  #[test]
  fn guard_pushes_and_pops() {
    let mut context = ResolutionContext::new();
    {
      let mut outer = InFlight::enter(&mut context, TypeKey::of::<First>()).unwrap();
      assert_eq!(outer.depth(), 1);
      {
        let inner = InFlight::enter(&mut outer, TypeKey::of::<Second>()).unwrap();
        assert_eq!(inner.path(), &[TypeKey::of::<First>(), TypeKey::of::<Second>()]);
      }
      assert_eq!(outer.path(), &[TypeKey::of::<First>()]);
    }
    assert_eq!(context.depth(), 0);
  }

  #[test]
  fn reentering_a_key_is_a_cycle() {
    let mut context = ResolutionContext::new();
    let mut outer = InFlight::enter(&mut context, TypeKey::of::<First>()).unwrap();
    let err = InFlight::enter(&mut outer, TypeKey::of::<First>()).err().unwrap();

    match err {
      ResolveError::CircularDependency { key, path } => {
        assert_eq!(key, TypeKey::of::<First>());
        assert_eq!(path, vec![TypeKey::of::<First>()]);
      }
      other => panic!("unexpected error: {other:?}"),
    }
    // The failed attempt must not have touched the path.
    assert_eq!(outer.depth(), 1);
  }

  #[test]
  fn guard_pops_on_panic() {
    let mut context = ResolutionContext::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
      let _guard = InFlight::enter(&mut context, TypeKey::of::<First>()).unwrap();
      panic!("factory failed");
    }));

    assert!(result.is_err());
    assert_eq!(context.depth(), 0);
  }
}
