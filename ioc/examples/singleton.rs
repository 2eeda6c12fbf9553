use factory_ioc::Container;
use std::cell::Cell;
use std::rc::Rc;

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

fn main() {
  let next_id = Rc::new(Cell::new(0));
  let mut container = Container::new();

  // --- Type Registration ---
  // This constructor is called EVERY time the service is resolved.
  let ids = Rc::clone(&next_id);
  container.register_type(move || {
    println!("Creating RequestTracker...");
    let id = ids.get();
    ids.set(id + 1);
    Rc::new(RequestTracker { id })
  });

  println!("--- Resolving Transients ---");
  let t1 = container.resolve::<RequestTracker>().unwrap();
  let t2 = container.resolve::<RequestTracker>().unwrap();
  println!("Transient 1 ID: {}, Transient 2 ID: {}", t1.id, t2.id);
  assert_eq!(t1.id, 0);
  assert_eq!(t2.id, 1);
  assert!(!Rc::ptr_eq(&t1, &t2), "Transient instances should be different");

  // --- Instance Registration ---
  // Replaces the registration above. The same instance is handed out every time.
  container.register_instance(Rc::new(RequestTracker { id: 42 }));

  println!("\n--- Resolving Singletons ---");
  let s1 = container.resolve::<RequestTracker>().unwrap();
  let s2 = container.resolve::<RequestTracker>().unwrap();
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert!(Rc::ptr_eq(&s1, &s2), "Singleton instances should be identical");
  assert_eq!(next_id.get(), 2);
  println!("Singleton instances are the same pointer, as expected.");
}
