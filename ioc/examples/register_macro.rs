use factory_ioc::{register, Container};
use std::rc::Rc;

trait Number {
  fn what(&self) -> i32;
}

#[derive(Default)]
struct Ten;
impl Number for Ten {
  fn what(&self) -> i32 {
    10
  }
}

#[derive(Default)]
struct Five;
impl Number for Five {
  fn what(&self) -> i32 {
    5
  }
}

struct Sum {
  left: Option<Rc<dyn Number>>,
  right: Option<Rc<Five>>,
}

impl Sum {
  fn new(left: Option<Rc<dyn Number>>, right: Option<Rc<Five>>) -> Self {
    Self { left, right }
  }

  fn total(&self) -> i32 {
    self.left.as_ref().map_or(0, |n| n.what()) + self.right.as_ref().map_or(0, |n| n.what())
  }
}

fn main() {
  let mut container = Container::new();
  register!(container, dyn Number => Ten::default());
  register!(container, Five => Five::default());
  register!(container, Sum => Sum::new(left: dyn Number, right: Five));

  let sum = container.resolve::<Sum>().expect("Sum is registered");
  println!("Dependencies of Sum: {:?}", container.dependencies::<Sum>());
  println!("Total: {}", sum.total());
  assert_eq!(sum.total(), 15);
}
