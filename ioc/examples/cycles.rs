use factory_ioc::Container;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

struct Chicken {
  egg: Option<Rc<Egg>>,
}

struct Egg {
  chicken: Option<Rc<Chicken>>,
}

fn main() {
  // Show the container's own view of the resolution.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::new("factory_ioc=trace"))
    .init();

  let mut container = Container::new();
  container.register_type(|egg: Option<Rc<Egg>>| Rc::new(Chicken { egg }));
  container.register_type(|chicken: Option<Rc<Chicken>>| Rc::new(Egg { chicken }));

  let chicken = container.resolve::<Chicken>().expect("Chicken is registered");
  let egg = chicken.egg.as_ref().expect("Egg is registered");

  // The edge back to Chicken would close the loop, so it is left empty.
  assert!(egg.chicken.is_none());
  println!("Chicken -> Egg -> (none): cycle broken one level below the root.");
}
