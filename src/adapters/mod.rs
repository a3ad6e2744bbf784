// Adapters layer: wiring the core helpers to external surfaces.

pub mod server;
