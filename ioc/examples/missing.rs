use factory_ioc::{Container, ResolveError};

struct UnregisteredService;

fn main() {
  let container = Container::new();

  // --- Using `resolve()` ---
  println!("Attempting to resolve a service that was never registered...");
  match container.resolve::<UnregisteredService>() {
    Some(_) => panic!("Should not have found the service!"),
    None => println!("Correctly received `None` for the missing service."),
  }

  // --- Using `try_resolve()` ---
  println!("\nNow asking for the reason with `try_resolve()`...");
  match container.try_resolve::<UnregisteredService>() {
    Err(err @ ResolveError::NotRegistered(_)) => println!("Got the expected error: {}", err),
    Err(other) => panic!("Unexpected error: {}", other),
    Ok(_) => panic!("Should not have found the service!"),
  }
}
