// Fulfillment side of the pipeline: the ordered dispatch loop and the
// production order handler.

mod dispatcher;
mod processor;

pub use dispatcher::{run_dispatch_loop, DispatchReport, OrderHandler};
pub use processor::BrewHandler;
