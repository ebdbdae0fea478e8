use crate::entity::{RefReceiverEntity, ValueReceiverEntity};
use crate::trace::log_event;

/// Payload handed over by [`deliver`].
pub const DELIVERY_PAYLOAD: &str = "data";

/// Something that can receive a string.
///
/// Implementors decide what the call touches: a value receiver works on a
/// private copy of itself, a reference receiver on the caller's original.
pub trait Receiver {
    fn receive(&mut self, data: &str);
}

impl Receiver for ValueReceiverEntity {
    fn receive(&mut self, data: &str) {
        let mut copy = self.clone();
        copy.data = data.to_string();
        log_event("receive", &format!("value receiver copy now holds {:?}", copy.data));
    }
}

impl Receiver for RefReceiverEntity {
    fn receive(&mut self, data: &str) {
        self.data = data.to_string();
        log_event("receive", &format!("reference receiver now holds {:?}", self.data));
    }
}

impl<R: Receiver + ?Sized> Receiver for &mut R {
    fn receive(&mut self, data: &str) {
        (**self).receive(data);
    }
}

/// Calls `receive(DELIVERY_PAYLOAD)` on any receiver.
pub fn deliver(r: &mut dyn Receiver) {
    deliver_with(r, DELIVERY_PAYLOAD);
}

pub fn deliver_with(r: &mut dyn Receiver, payload: &str) {
    r.receive(payload);
}

#[cfg(test)]
mod tests {
    use super::{deliver, deliver_with, Receiver};
    use crate::entity::{EntityState, RefReceiverEntity, ValueReceiverEntity};

    #[test]
    fn value_receiver_leaves_original_untouched() {
        let mut r1 = ValueReceiverEntity::new();
        deliver(&mut r1);
        deliver(&mut r1);
        assert_eq!(r1.data(), "");
        assert_eq!(r1.state(), EntityState::Empty);
    }

    #[test]
    fn reference_receiver_updates_original() {
        let mut r2 = RefReceiverEntity::new();
        deliver(&mut r2);
        assert_eq!(r2.data(), "data");
        assert_eq!(r2.state(), EntityState::Filled);
    }

    #[test]
    fn later_payload_replaces_earlier_one() {
        let mut r2 = RefReceiverEntity::new();
        deliver_with(&mut r2, "first");
        deliver_with(&mut r2, "second");
        assert_eq!(r2.data(), "second");
    }

    #[test]
    fn direct_receive_matches_deliver() {
        let mut r1 = ValueReceiverEntity::new();
        let mut r2 = RefReceiverEntity::new();
        r1.receive("direct");
        r2.receive("direct");
        assert_eq!(r1.data(), "");
        assert_eq!(r2.data(), "direct");
    }

    #[test]
    fn mixed_receivers_behind_trait_objects_diverge() {
        let mut r1 = ValueReceiverEntity::new();
        let mut r2 = RefReceiverEntity::new();
        {
            let held: [&mut dyn Receiver; 2] = [&mut r1, &mut r2];
            for r in held {
                deliver(r);
            }
        }
        assert_ne!(r1.data(), "data");
        assert_eq!(r2.data(), "data");
    }

    #[test]
    fn boxed_receivers_can_be_delivered_to() {
        let mut r1 = ValueReceiverEntity::new();
        let mut r2 = RefReceiverEntity::new();
        {
            let mut held: Vec<Box<dyn Receiver + '_>> = vec![Box::new(&mut r1), Box::new(&mut r2)];
            for r in held.iter_mut() {
                deliver(r.as_mut());
            }
        }
        assert_eq!(r1.data(), "");
        assert_eq!(r2.data(), "data");
    }
}
