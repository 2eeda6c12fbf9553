//! Constructor injection: resolving a constructor's parameters and calling it.

use crate::container::Container;
use crate::core::{ResolutionContext, TypeKey};

use std::rc::Rc;

/// A handle into an in-progress resolution.
///
/// Factories receive a `Resolver` instead of the bare container so that every
/// nested resolution shares the same [`ResolutionContext`] and cycles are
/// detected across the whole object graph. The container itself is not
/// reachable from here: resolving through it would start a fresh context and
/// lose the path.
pub struct Resolver<'a> {
  container: &'a Container,
  context: &'a mut ResolutionContext,
}

impl<'a> Resolver<'a> {
  pub(crate) fn new(container: &'a Container, context: &'a mut ResolutionContext) -> Self {
    Self { container, context }
  }

  /// Resolves a dependency as part of the current resolution.
  ///
  /// Returns `None` if `T` is not registered or if `T` is already being
  /// constructed further up the path (the cyclic edge is left empty).
  pub fn resolve<T: ?Sized + 'static>(&mut self) -> Option<Rc<T>> {
    self.container.resolve_dependency::<T>(self.context)
  }

  /// The keys currently in flight, outermost first.
  pub fn context(&self) -> &ResolutionContext {
    &*self.context
  }

  /// Whether `T` has a registration. Does not resolve anything.
  pub fn contains<T: ?Sized + 'static>(&self) -> bool {
    self.container.contains::<T>()
  }
}

/// A function that builds an `Rc<I>` from positionally injected dependencies.
///
/// Implemented for every `Fn(Option<Rc<D1>>, .., Option<Rc<Dn>>) -> Rc<I>`
/// with up to eight parameters. `Args` only exists to keep the arities
/// apart and is always inferred.
///
/// Each parameter is `Option` because a dependency may be unregistered or may
/// close a cycle; the constructor has to cope with an absent edge.
pub trait Constructor<I: ?Sized, Args>: 'static {
  /// Keys of the parameters, in the order they are resolved.
  fn dependencies() -> Vec<TypeKey>;

  /// Resolves every parameter left to right, then calls the constructor.
  fn construct(&self, resolver: &mut Resolver<'_>) -> Rc<I>;
}

macro_rules! impl_constructor {
  ($($dep:ident),*) => {
    impl<F, I, $($dep,)*> Constructor<I, ($(Option<Rc<$dep>>,)*)> for F
    where
      F: Fn($(Option<Rc<$dep>>),*) -> Rc<I> + 'static,
      I: ?Sized + 'static,
      $($dep: ?Sized + 'static,)*
    {
      fn dependencies() -> Vec<TypeKey> {
        vec![$(TypeKey::of::<$dep>()),*]
      }

      #[allow(non_snake_case, unused_variables)]
      fn construct(&self, resolver: &mut Resolver<'_>) -> Rc<I> {
        // Siblings resolve independently; one absent edge does not stop the rest.
        $(let $dep = resolver.resolve::<$dep>();)*
        (self)($($dep),*)
      }
    }
  };
}

impl_constructor!();
impl_constructor!(D1);
impl_constructor!(D1, D2);
impl_constructor!(D1, D2, D3);
impl_constructor!(D1, D2, D3, D4);
impl_constructor!(D1, D2, D3, D4, D5);
impl_constructor!(D1, D2, D3, D4, D5, D6);
impl_constructor!(D1, D2, D3, D4, D5, D6, D7);
impl_constructor!(D1, D2, D3, D4, D5, D6, D7, D8);
