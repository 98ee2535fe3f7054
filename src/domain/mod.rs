// Domain layer: the announcement model and the config port it is built from.

pub mod model;
pub mod ports;
