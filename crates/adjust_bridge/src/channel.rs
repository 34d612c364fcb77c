//! Message channel contracts and in-process adapters.

use std::{cell::RefCell, rc::Rc};

use crate::envelope::Envelope;
use crate::error::BridgeError;

/// Host-provided sink that carries one envelope to native code per call.
///
/// Implementations must not wait for a native-side response: `post_message` returns as soon as
/// the message has been handed off.
pub trait MessageChannel {
    /// Hands one envelope to the host.
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError>;
}

impl<C: MessageChannel + ?Sized> MessageChannel for &C {
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        (**self).post_message(envelope)
    }
}

impl<C: MessageChannel + ?Sized> MessageChannel for Rc<C> {
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        (**self).post_message(envelope)
    }
}

impl<C: MessageChannel + ?Sized> MessageChannel for Box<C> {
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        (**self).post_message(envelope)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Channel that accepts and discards every envelope.
pub struct NoopMessageChannel;

impl MessageChannel for NoopMessageChannel {
    fn post_message(&self, _envelope: &Envelope) -> Result<(), BridgeError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory channel that records posted envelopes in call order.
///
/// Clones share the same record, so a test can hand one clone to a bridge and inspect another.
pub struct MemoryMessageChannel {
    inner: Rc<RefCell<Vec<Envelope>>>,
}

impl MemoryMessageChannel {
    /// Returns a copy of every envelope posted so far.
    pub fn messages(&self) -> Vec<Envelope> {
        self.inner.borrow().clone()
    }

    /// Drains and returns the recorded envelopes.
    pub fn take(&self) -> Vec<Envelope> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }

    /// Number of envelopes recorded.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether nothing has been posted.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl MessageChannel for MemoryMessageChannel {
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        self.inner.borrow_mut().push(envelope.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{Action, Payload};

    fn deeplink(url: &str) -> Envelope {
        Envelope::new(Action::TrackDeeplink, Payload::Data(json!(url))).expect("shape matches")
    }

    #[test]
    fn memory_channel_clones_share_one_record() {
        let channel = MemoryMessageChannel::default();
        let handle = channel.clone();

        channel.post_message(&deeplink("app://a")).expect("post");
        channel.post_message(&deeplink("app://b")).expect("post");

        assert_eq!(handle.len(), 2);
        assert_eq!(
            handle.messages(),
            vec![deeplink("app://a"), deeplink("app://b")]
        );
        assert_eq!(handle.take().len(), 2);
        assert!(channel.is_empty());
    }

    #[test]
    fn channels_post_through_smart_pointers() {
        let channel = Rc::new(MemoryMessageChannel::default());
        let boxed: Box<dyn MessageChannel> = Box::new(Rc::clone(&channel));

        boxed.post_message(&deeplink("app://boxed")).expect("post");
        (&NoopMessageChannel)
            .post_message(&deeplink("app://noop"))
            .expect("noop post");

        assert_eq!(channel.messages(), vec![deeplink("app://boxed")]);
    }
}
