//! # Factory IoC
//!
//! A small, single-threaded Inversion of Control (IoC) container with
//! constructor injection.
//!
//! Each service type maps to exactly one registration. Resolving a type runs
//! its constructor, resolving the constructor's parameters from the same
//! container first, and hands back an `Rc` to the result.
//!
//! ## Core Concepts
//!
//! - **Container**: The registry mapping a service type to the registration that builds it.
//! - **Type registrations**: A constructor whose parameters are injected. A fresh
//!   instance is built on every resolve.
//! - **Instance registrations**: A pre-built `Rc` that every resolve hands back.
//! - **Traits**: Services can be registered against `dyn Trait` and resolved as
//!   `Rc<dyn Trait>`.
//! - **Cycles**: If a type depends on itself, directly or transitively, the edge
//!   that would close the loop is passed to its constructor as `None`. The rest of
//!   the graph is still built and no reference cycle is ever created.
//!
//! ## Quick Start
//!
//! ```
//! use factory_ioc::Container;
//! use std::rc::Rc;
//!
//! trait Number {
//!   fn what(&self) -> i32;
//! }
//!
//! struct Two;
//! impl Number for Two {
//!   fn what(&self) -> i32 {
//!     2
//!   }
//! }
//!
//! struct Doubler {
//!   number: Option<Rc<dyn Number>>,
//! }
//!
//! impl Doubler {
//!   fn value(&self) -> i32 {
//!     self.number.as_ref().map_or(0, |n| n.what() * 2)
//!   }
//! }
//!
//! let mut container = Container::new();
//! container.register_type(|| -> Rc<dyn Number> { Rc::new(Two) });
//! container.register_type(|number: Option<Rc<dyn Number>>| Rc::new(Doubler { number }));
//!
//! let doubler = container.resolve::<Doubler>().unwrap();
//! assert_eq!(doubler.value(), 4);
//!
//! // Unregistered types resolve to `None`.
//! assert!(container.resolve::<String>().is_none());
//! ```

mod constructor;
mod container;
mod core;
mod error;
#[cfg(feature = "macros")]
mod macros;

pub use constructor::{Constructor, Resolver};
pub use container::{Container, RegistrationKind};
pub use crate::core::{ResolutionContext, TypeKey};
pub use error::ResolveError;
