//! Order Lifecycle
//!
//! Models an order moving from placement to delivery, with a payment
//! guard and enter/leave callbacks.
//!
//! Key concepts:
//! - String labels and fluent registration
//! - Guarded transitions that silently refuse
//! - Leave callbacks fire before enter callbacks
//! - Transition history
//!
//! Run with: RUST_LOG=debug cargo run --example order_lifecycle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use waymark::{MachineError, StateMachine, Transition};

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Lifecycle Example ===\n");

    let paid = Arc::new(AtomicBool::new(false));
    let payment_received = Arc::clone(&paid);

    let mut order = StateMachine::new();
    order
        .add_state("placed")?
        .add_state("paid")?
        .add_state("shipped")?
        .add_state("delivered")?
        .add_state("cancelled")?
        .add_transition(
            Transition::new("placed", "paid")
                .guard(move || payment_received.load(Ordering::SeqCst)),
        )?
        .add_transition(Transition::new("placed", "cancelled"))?
        .add_transition(Transition::new("paid", "shipped"))?
        .add_transition(Transition::new("shipped", "delivered"))?;

    order
        .on_leave_state("placed", || println!("  -> order leaves the queue"))
        .on_enter_state("paid", || println!("  -> receipt emailed"))
        .on_enter_state("shipped", || println!("  -> tracking number issued"))
        .on_enter_state("delivered", || println!("  -> feedback requested"));

    println!("Current state: {}", order.current_state()?);

    println!("\nTrying to pay before funds arrive...");
    let outcome = order.try_transition("paid")?;
    println!("Outcome: {outcome:?}");

    println!("\nTrying to ship straight away...");
    order.set_state("shipped")?;
    println!("Current state: {}", order.current_state()?);

    println!("\nPayment arrives.");
    paid.store(true, Ordering::SeqCst);
    order
        .set_state("paid")?
        .set_state("shipped")?
        .set_state("delivered")?;
    println!("Current state: {}", order.current_state()?);

    println!("\nCancelling a delivered order...");
    order.set_state("cancelled")?;
    println!("Current state: {}", order.current_state()?);

    println!("\nTrying an unknown state...");
    if let Err(err) = order.set_state("lost") {
        println!("Error: {err}");
    }

    println!("\nPath taken: {:?}", order.history().path());
    println!("\n=== Example Complete ===");
    Ok(())
}
