use factory_ioc::Container;
use std::rc::Rc;

// 1. Define the abstraction (the trait)
trait Logger {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction
struct ReportService {
  logger: Option<Rc<dyn Logger>>,
}

impl ReportService {
  fn new(logger: Option<Rc<dyn Logger>>) -> Self {
    Self { logger }
  }

  fn generate_report(&self) {
    if let Some(logger) = &self.logger {
      logger.log("Starting report generation.");
      // ... logic to generate report ...
      logger.log("Finished report generation.");
    }
  }
}

fn main() {
  let mut container = Container::new();

  // --- Registration ---

  // The container stores Rc<ConsoleLogger> but serves it as Rc<dyn Logger>.
  container.register_type(|| -> Rc<dyn Logger> { Rc::new(ConsoleLogger) });

  // ReportService never builds its logger; the container injects it.
  container.register_type(|logger: Option<Rc<dyn Logger>>| Rc::new(ReportService::new(logger)));

  // --- Resolution and Usage ---
  println!("Resolving the high-level service...");
  let report_service = container
    .resolve::<ReportService>()
    .expect("ReportService is registered");

  println!("Using the service...");
  report_service.generate_report();
}
