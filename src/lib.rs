pub mod application;
pub mod domain;
pub mod infrastructure;

use crate::domain::logging::{LogComponent, get_logger};

/// Wire the console logger and system clock into the domain logging slots.
///
/// Idempotent: only the first registration wins, later calls are no-ops.
pub fn init_logging() {
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let system_clock = Box::new(infrastructure::services::SystemClock);
    domain::logging::init_clock(system_clock);

    get_logger().info(LogComponent::Domain("Initialize"), "🚀 Waterfall layout engine ready");
}
