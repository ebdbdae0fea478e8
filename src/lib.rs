mod demo;
mod entity;
mod receiver;
pub mod trace;

pub use demo::{run, state_line, DemoError, Report};
pub use entity::{EntityState, RefReceiverEntity, ValueReceiverEntity};
pub use receiver::{deliver, deliver_with, Receiver, DELIVERY_PAYLOAD};
