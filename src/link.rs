//! Host link: transport abstraction and ISR-to-loop mailboxes.
//!
//! The USB stack runs in interrupt context; the control loop does not.
//! [`Mailbox`] is a bounded queue synchronized with critical sections so
//! the two sides can hand reports and link events across safely.
//! [`Transport`] is the seam the service loop depends on; firmware wires
//! it to the USB stack, tests to an in-memory fake.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, Vec};

use crate::protocol::REPORT_LEN;

/// One raw host report, as received from the transport.
pub type Report = Vec<u8, REPORT_LEN>;

/// One fixed-size reply report, sent back to the host.
pub type ReplyReport = [u8; REPORT_LEN];

/// Queue depth for inbound host reports.
pub const REPORT_QUEUE: usize = 8;
/// Queue depth for link events.
pub const LINK_QUEUE: usize = 4;
/// Queue depth for outbound replies.
pub const REPLY_QUEUE: usize = 2;

/// Connection lifecycle signals from the host transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    Connected,
    Disconnected,
}

/// The host transport as seen by the control loop.
pub trait Transport {
    /// Next pending connection event, if any.
    fn poll_link(&mut self) -> Option<LinkEvent>;

    /// Next pending host report, if any.
    fn poll_report(&mut self) -> Option<Report>;

    /// Queue a reply for transmission to the host.
    fn send_reply(&mut self, reply: &ReplyReport);
}

/// A bounded queue that may be filled from interrupt context and drained
/// from the control loop.
///
/// Backed by a fixed-size `heapless::Deque` behind a critical-section
/// mutex, so it is safe to share as a `static`.
pub struct Mailbox<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Mailbox<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Append an item; returns it back if the queue is full.
    pub fn post(&self, item: T) -> Result<(), T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().push_back(item))
    }

    /// Remove and return the oldest item.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }
}

impl<T, const SIZE: usize> Default for Mailbox<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Transport`] implementation over three shared mailboxes.
///
/// The USB side posts into `link` and `inbound` and drains `outbound`;
/// the control loop holds the `MailboxTransport`.
pub struct MailboxTransport<'a> {
    link: &'a Mailbox<LinkEvent, LINK_QUEUE>,
    inbound: &'a Mailbox<Report, REPORT_QUEUE>,
    outbound: &'a Mailbox<ReplyReport, REPLY_QUEUE>,
}

impl<'a> MailboxTransport<'a> {
    pub const fn new(
        link: &'a Mailbox<LinkEvent, LINK_QUEUE>,
        inbound: &'a Mailbox<Report, REPORT_QUEUE>,
        outbound: &'a Mailbox<ReplyReport, REPLY_QUEUE>,
    ) -> Self {
        Self {
            link,
            inbound,
            outbound,
        }
    }
}

impl Transport for MailboxTransport<'_> {
    fn poll_link(&mut self) -> Option<LinkEvent> {
        self.link.take()
    }

    fn poll_report(&mut self) -> Option<Report> {
        self.inbound.take()
    }

    fn send_reply(&mut self, reply: &ReplyReport) {
        // A full reply queue means the host stopped draining; the reply
        // is dropped, matching the no-retry contract.
        let _ = self.outbound.post(*reply);
    }
}
