//! Connection States
//!
//! Declares enum states with `state_enum!` and assembles the machine with
//! the builder, including a self-transition used as a heartbeat.
//!
//! Run with: RUST_LOG=waymark=debug cargo run --example connection

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use waymark::core::State;
use waymark::{state_enum, MachineError, StateMachineBuilder, Transition};

state_enum! {
    enum Connection {
        Disconnected,
        Connecting,
        Connected,
    }
}

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Connection State Example ===\n");

    let heartbeats = Arc::new(AtomicUsize::new(0));
    let beat = Arc::clone(&heartbeats);

    let mut link = StateMachineBuilder::new()
        .states([
            Connection::Disconnected,
            Connection::Connecting,
            Connection::Connected,
        ])
        .transition(Transition::new(Connection::Disconnected, Connection::Connecting))
        .transition(Transition::new(Connection::Connecting, Connection::Connected))
        .transition(Transition::new(Connection::Connecting, Connection::Disconnected))
        .transition(Transition::new(Connection::Connected, Connection::Connected))
        .transition(Transition::new(Connection::Connected, Connection::Disconnected))
        .on_enter(Connection::Connected, move || {
            beat.fetch_add(1, Ordering::SeqCst);
        })
        .on_leave(Connection::Connected, || println!("  -> socket closing"))
        .build()?;

    println!("Initial state: {}", link.current_state()?.name());

    link.set_state(Connection::Connecting)?
        .set_state(Connection::Connected)?;
    for _ in 0..3 {
        link.set_state(Connection::Connected)?;
    }
    link.set_state(Connection::Disconnected)?;

    println!("Final state: {}", link.current_state()?.name());
    println!("Enter callbacks on Connected: {}", heartbeats.load(Ordering::SeqCst));
    println!("Transitions recorded: {}", link.history().len());

    println!("\n=== Example Complete ===");
    Ok(())
}
