//! The `Container` struct and its registration and resolution methods.

use crate::constructor::{Constructor, Resolver};
use crate::core::{InFlight, ResolutionContext, TypeKey};
use crate::error::ResolveError;

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

// Produces an `Rc<I>` for the key it is stored under, erased to `Any`.
type Factory = Box<dyn Fn(&mut Resolver<'_>) -> Box<dyn Any>>;

/// How a registration produces its instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
  /// A constructor with injected dependencies. A new instance per resolve.
  Type,
  /// A pre-built instance. Every resolve returns the same handle.
  Instance,
  /// A free-form factory. A new instance per resolve.
  Factory,
}

struct Registration {
  kind: RegistrationKind,
  dependencies: Vec<TypeKey>,
  factory: Factory,
}

/// The Inversion of Control (IoC) container.
///
/// Holds at most one registration per service type. Registering a type again
/// replaces the previous registration.
///
/// # Threading
///
/// `Container` is single-threaded. It hands out `Rc` handles and stores
/// closures that need not be `Send`, so it is neither `Send` nor `Sync`.
/// Registration takes `&mut self` and resolution takes `&self`, which rules
/// out changing registrations while a resolve is in progress.
#[derive(Default)]
pub struct Container {
  registrations: HashMap<TypeKey, Registration>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- PRIVATE HELPERS ---

  fn insert(&mut self, key: TypeKey, registration: Registration) {
    let kind = registration.kind;
    let replaced = self.registrations.insert(key, registration).is_some();
    debug!(%key, ?kind, replaced, "registered service");
  }

  // --- Registration ---

  /// Registers a constructor for `I`.
  ///
  /// The constructor's parameters are its dependencies: each one is an
  /// `Option<Rc<D>>` and is resolved from this container, in order, every
  /// time `I` is resolved. The constructor runs on every resolve; nothing is
  /// cached.
  ///
  /// The constructor must return `Rc<I>`, so registering an implementation
  /// against a trait it does not implement fails to compile.
  ///
  /// ```
  /// use factory_ioc::Container;
  /// use std::rc::Rc;
  ///
  /// struct Milk;
  /// struct Breakfast {
  ///   milk: Option<Rc<Milk>>,
  /// }
  ///
  /// let mut container = Container::new();
  /// container.register_type(|| Rc::new(Milk));
  /// container.register_type(|milk: Option<Rc<Milk>>| Rc::new(Breakfast { milk }));
  ///
  /// let breakfast = container.resolve::<Breakfast>().unwrap();
  /// assert!(breakfast.milk.is_some());
  /// ```
  pub fn register_type<I, Args, F>(&mut self, constructor: F)
  where
    I: ?Sized + 'static,
    F: Constructor<I, Args>,
  {
    let registration = Registration {
      kind: RegistrationKind::Type,
      dependencies: F::dependencies(),
      factory: Box::new(move |resolver: &mut Resolver<'_>| -> Box<dyn Any> {
        Box::new(constructor.construct(resolver))
      }),
    };
    self.insert(TypeKey::of::<I>(), registration);
  }

  /// Registers an existing instance as the singleton for `I`.
  ///
  /// Every resolve of `I` returns a clone of `instance`, pointing at the same
  /// allocation.
  pub fn register_instance<I: ?Sized + 'static>(&mut self, instance: Rc<I>) {
    let registration = Registration {
      kind: RegistrationKind::Instance,
      dependencies: Vec::new(),
      factory: Box::new(move |_: &mut Resolver<'_>| -> Box<dyn Any> {
        Box::new(Rc::clone(&instance))
      }),
    };
    self.insert(TypeKey::of::<I>(), registration);
  }

  /// Registers a factory for `I` that pulls its own dependencies through the
  /// [`Resolver`]. The factory runs on every resolve.
  ///
  /// Nested resolutions share the caller's context, so cycles are broken the
  /// same way as for [`register_type`](Self::register_type). The container
  /// cannot see which types the factory asks for, so
  /// [`dependencies`](Self::dependencies) reports an empty list.
  pub fn register_factory<I, F>(&mut self, factory: F)
  where
    I: ?Sized + 'static,
    F: Fn(&mut Resolver<'_>) -> Rc<I> + 'static,
  {
    let registration = Registration {
      kind: RegistrationKind::Factory,
      dependencies: Vec::new(),
      factory: Box::new(move |resolver: &mut Resolver<'_>| -> Box<dyn Any> {
        Box::new(factory(resolver))
      }),
    };
    self.insert(TypeKey::of::<I>(), registration);
  }

  /// Removes the registration for `I`. Returns `false` if there was none.
  pub fn unregister<I: ?Sized + 'static>(&mut self) -> bool {
    let key = TypeKey::of::<I>();
    let removed = self.registrations.remove(&key).is_some();
    debug!(%key, removed, "unregistered service");
    removed
  }

  /// Removes every registration. Instances still referenced elsewhere stay
  /// alive.
  pub fn clear(&mut self) {
    debug!(count = self.registrations.len(), "clearing container");
    self.registrations.clear();
  }

  // --- Introspection ---

  pub fn contains<I: ?Sized + 'static>(&self) -> bool {
    self.contains_key(&TypeKey::of::<I>())
  }

  pub fn contains_key(&self, key: &TypeKey) -> bool {
    self.registrations.contains_key(key)
  }

  /// The dependency keys declared by the registration for `I`, in
  /// resolution order. `None` if `I` is not registered.
  pub fn dependencies<I: ?Sized + 'static>(&self) -> Option<&[TypeKey]> {
    self
      .registrations
      .get(&TypeKey::of::<I>())
      .map(|registration| registration.dependencies.as_slice())
  }

  pub fn kind<I: ?Sized + 'static>(&self) -> Option<RegistrationKind> {
    self
      .registrations
      .get(&TypeKey::of::<I>())
      .map(|registration| registration.kind)
  }

  /// The registered keys, in no particular order.
  pub fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
    self.registrations.keys().copied()
  }

  pub fn len(&self) -> usize {
    self.registrations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.registrations.is_empty()
  }

  // --- Resolution ---

  /// Resolves `I` and everything it depends on.
  ///
  /// Returns `None` if `I` is not registered. Dependencies that are missing,
  /// or that would close a cycle, are passed to their constructors as `None`
  /// while the rest of the graph is still built.
  pub fn resolve<I: ?Sized + 'static>(&self) -> Option<Rc<I>> {
    self.try_resolve::<I>().ok()
  }

  /// Like [`resolve`](Self::resolve), but reports why `I` produced no value.
  pub fn try_resolve<I: ?Sized + 'static>(&self) -> Result<Rc<I>, ResolveError> {
    let mut context = ResolutionContext::new();
    self.resolve_in::<I>(&mut context)
  }

  pub(crate) fn resolve_dependency<I: ?Sized + 'static>(
    &self,
    context: &mut ResolutionContext,
  ) -> Option<Rc<I>> {
    match self.resolve_in::<I>(context) {
      Ok(handle) => Some(handle),
      Err(ResolveError::CircularDependency { key, path }) => {
        debug!(%key, ?path, "circular dependency, leaving edge unresolved");
        None
      }
      Err(ResolveError::NotRegistered(key)) => {
        trace!(%key, "dependency not registered");
        None
      }
      // Already logged where the downcast failed.
      Err(ResolveError::TypeMismatch { .. }) => None,
    }
  }

  fn resolve_in<I: ?Sized + 'static>(
    &self,
    context: &mut ResolutionContext,
  ) -> Result<Rc<I>, ResolveError> {
    let key = TypeKey::of::<I>();
    let registration = self
      .registrations
      .get(&key)
      .ok_or(ResolveError::NotRegistered(key))?;

    let mut in_flight = InFlight::enter(context, key)?;
    trace!(%key, depth = in_flight.depth(), "resolving");
    let produced = (registration.factory)(&mut Resolver::new(self, &mut in_flight));
    drop(in_flight);

    produced
      .downcast::<Rc<I>>()
      .map(|handle| {
        trace!(%key, "resolved");
        *handle
      })
      .map_err(|_| {
        warn!(%key, "registration produced a handle of a different type");
        ResolveError::TypeMismatch { key }
      })
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map()
      .entries(
        self
          .registrations
          .iter()
          .map(|(key, registration)| (key, registration.kind)),
      )
      .finish()
  }
}
