#![allow(dead_code)]

//! Sample service hierarchy shared by the integration tests.

use factory_ioc::Container;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// Routes the container's `tracing` output through the test harness.
/// Run with `RUST_LOG=factory_ioc=trace` to see it.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

// --- Numbers ---

pub trait Number {
  fn what(&self) -> i32;
}

#[derive(Default)]
pub struct NumberOne;
impl Number for NumberOne {
  fn what(&self) -> i32 {
    1
  }
}

#[derive(Default)]
pub struct NumberTwo;
impl Number for NumberTwo {
  fn what(&self) -> i32 {
    2
  }
}

// --- Seasons ---

pub trait Season {
  fn weather(&self) -> String;
}

#[derive(Default)]
pub struct Summer;
impl Season for Summer {
  fn weather(&self) -> String {
    "Sunny".to_string()
  }
}

#[derive(Default)]
pub struct Winter;
impl Season for Winter {
  fn weather(&self) -> String {
    "Snowy".to_string()
  }
}

// --- Constructor injection ---

#[derive(Default)]
pub struct Milk;
impl Milk {
  pub fn calories(&self) -> i32 {
    10
  }
}

#[derive(Default)]
pub struct Cereal;
impl Cereal {
  pub fn calories(&self) -> i32 {
    5
  }
}

pub struct Breakfast {
  milk: Option<Rc<Milk>>,
  cereal: Option<Rc<Cereal>>,
}

impl Breakfast {
  pub fn new(milk: Option<Rc<Milk>>, cereal: Option<Rc<Cereal>>) -> Self {
    Self { milk, cereal }
  }

  pub fn calories(&self) -> i32 {
    self.milk.as_ref().map_or(0, |m| m.calories()) + self.cereal.as_ref().map_or(0, |c| c.calories())
  }
}

// --- Chicken -> Egg -> Chicken ---

pub struct Chicken {
  egg: Option<Rc<Egg>>,
}

impl Chicken {
  pub fn new(egg: Option<Rc<Egg>>) -> Self {
    Self { egg }
  }

  pub fn egg(&self) -> Option<&Rc<Egg>> {
    self.egg.as_ref()
  }
}

pub struct Egg {
  chicken: Option<Rc<Chicken>>,
}

impl Egg {
  pub fn new(chicken: Option<Rc<Chicken>>) -> Self {
    Self { chicken }
  }

  pub fn chicken(&self) -> Option<&Rc<Chicken>> {
    self.chicken.as_ref()
  }
}

// --- A -> B, A -> C, B -> C, C -> B ---

pub struct A {
  b: Option<Rc<B>>,
  c: Option<Rc<C>>,
}

impl A {
  pub fn new(b: Option<Rc<B>>, c: Option<Rc<C>>) -> Self {
    Self { b, c }
  }
  pub fn b(&self) -> Option<&Rc<B>> {
    self.b.as_ref()
  }
  pub fn c(&self) -> Option<&Rc<C>> {
    self.c.as_ref()
  }
}

pub struct B {
  c: Option<Rc<C>>,
}

impl B {
  pub fn new(c: Option<Rc<C>>) -> Self {
    Self { c }
  }
  pub fn c(&self) -> Option<&Rc<C>> {
    self.c.as_ref()
  }
}

pub struct C {
  b: Option<Rc<B>>,
}

impl C {
  pub fn new(b: Option<Rc<B>>) -> Self {
    Self { b }
  }
  pub fn b(&self) -> Option<&Rc<B>> {
    self.b.as_ref()
  }
}

// --- Class1 -> Class2 -> Class3 -> Class1, Class2 -> Class1 ---

pub struct Class1 {
  two: Option<Rc<Class2>>,
}

impl Class1 {
  pub fn new(two: Option<Rc<Class2>>) -> Self {
    Self { two }
  }
  pub fn two(&self) -> Option<&Rc<Class2>> {
    self.two.as_ref()
  }
}

pub struct Class2 {
  one: Option<Rc<Class1>>,
  three: Option<Rc<Class3>>,
}

impl Class2 {
  pub fn new(one: Option<Rc<Class1>>, three: Option<Rc<Class3>>) -> Self {
    Self { one, three }
  }
  pub fn one(&self) -> Option<&Rc<Class1>> {
    self.one.as_ref()
  }
  pub fn three(&self) -> Option<&Rc<Class3>> {
    self.three.as_ref()
  }
}

pub struct Class3 {
  one: Option<Rc<Class1>>,
}

impl Class3 {
  pub fn new(one: Option<Rc<Class1>>) -> Self {
    Self { one }
  }
  pub fn one(&self) -> Option<&Rc<Class1>> {
    self.one.as_ref()
  }
}

/// Registers `Milk`, `Cereal` and `Breakfast(Milk, Cereal)`.
pub fn breakfast_container() -> Container {
  let mut container = Container::new();
  container.register_type(|| Rc::new(Milk));
  container.register_type(|| Rc::new(Cereal));
  container.register_type(|milk: Option<Rc<Milk>>, cereal: Option<Rc<Cereal>>| {
    Rc::new(Breakfast::new(milk, cereal))
  });
  container
}
