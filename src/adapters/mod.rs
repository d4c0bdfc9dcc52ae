/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with external systems.
/// The CLI in `cli.rs` and `main.rs` acts as the inbound adapter.
pub mod outbound;
