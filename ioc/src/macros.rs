//! Public macros for ergonomic service registration.

/// Registers a constructor or an instance against a service type.
///
/// The constructor form names each parameter together with the service type
/// it is resolved from. The result is wrapped in an `Rc` and coerced to the
/// service type, so an implementation that does not satisfy it is a compile
/// error.
///
/// The constructor must be named by a plain path such as `Type::new`.
/// Generic arguments (`Foo::<T>::new`) and qualified paths
/// (`<T as Trait>::new`) are not accepted; name the type through an alias
/// instead (`type Alias = Foo<T>;` then `Alias::new`), or call
/// [`Container::register_type`](crate::Container::register_type) directly.
///
/// ```
/// use factory_ioc::{register, Container};
/// use std::rc::Rc;
///
/// trait Season {
///   fn weather(&self) -> &'static str;
/// }
///
/// #[derive(Default)]
/// struct Summer;
/// impl Season for Summer {
///   fn weather(&self) -> &'static str {
///     "Sunny"
///   }
/// }
///
/// struct Holiday {
///   season: Option<Rc<dyn Season>>,
/// }
/// impl Holiday {
///   fn new(season: Option<Rc<dyn Season>>) -> Self {
///     Self { season }
///   }
/// }
///
/// let mut container = Container::new();
/// register!(container, dyn Season => Summer::default());
/// register!(container, Holiday => Holiday::new(season: dyn Season));
///
/// let holiday = container.resolve::<Holiday>().unwrap();
/// assert_eq!(holiday.season.as_ref().unwrap().weather(), "Sunny");
/// ```
///
/// The instance form is shorthand for `register_instance`:
///
/// ```
/// use factory_ioc::{register, Container};
/// use std::rc::Rc;
///
/// let mut container = Container::new();
/// register!(container, String = Rc::new(String::from("shared")));
/// assert_eq!(*container.resolve::<String>().unwrap(), "shared");
/// ```
#[macro_export]
macro_rules! register {
  // register!(container, dyn Service => Impl::new(dep: Dep, ...))
  ($container:expr, $service:ty => $($ctor:ident)::+ ( $($arg:ident : $dep:ty),* $(,)? )) => {
    $container.register_type::<$service, _, _>(
      |$($arg: ::std::option::Option<::std::rc::Rc<$dep>>),*| -> ::std::rc::Rc<$service> {
        ::std::rc::Rc::new($($ctor)::+($($arg),*))
      },
    )
  };

  // register!(container, dyn Service = Rc::new(instance))
  ($container:expr, $service:ty = $instance:expr) => {
    $container.register_instance::<$service>($instance)
  };
}
