// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project selection stream and refresh signalling.
//!
//! The project list publishes the project the user picked; the editor
//! subscribes and drains the stream once per frame. Components that change
//! the set of projects ask for a refresh through the `Refresh` trait.

use crate::models::project::Project;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;

/// Broadcasts the active project to every subscriber.
#[derive(Default)]
pub struct ProjectSelector {
    subscribers: Vec<Sender<Project>>,
}

/// Receiving end of a `ProjectSelector`.
pub struct ProjectSubscription {
    receiver: Receiver<Project>,
}

impl ProjectSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. It only sees projects published afterwards.
    pub fn subscribe(&mut self) -> ProjectSubscription {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        ProjectSubscription { receiver }
    }

    /// Publish the active project to all live subscribers.
    pub fn publish(&mut self, project: Project) {
        log::debug!("Publishing project {} ({})", project.id, project.name);
        // Dropped subscriptions make send fail; forget them
        self.subscribers
            .retain(|sender| sender.send(project.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl ProjectSubscription {
    /// Next published project, if any, without blocking.
    pub fn try_next(&self) -> Option<Project> {
        match self.receiver.try_recv() {
            Ok(project) => Some(project),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// All pending projects in publish order.
    pub fn drain(&self) -> Vec<Project> {
        self.receiver.try_iter().collect()
    }
}

/// Sink for "the project list changed, reload it" signals.
pub trait Refresh {
    fn refresh(&self);
}

/// Counts refresh requests until the shell consumes them.
#[derive(Debug, Clone, Default)]
pub struct UpdatorService {
    pending: Arc<AtomicUsize>,
}

impl UpdatorService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refresh requests since the last call.
    pub fn take_pending(&self) -> usize {
        self.pending.swap(0, Ordering::AcqRel)
    }
}

impl Refresh for UpdatorService {
    fn refresh(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);
        log::debug!("Refresh requested");
    }
}
