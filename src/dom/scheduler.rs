//! Browser timers backed by `gloo-timers`

use super::Dispatch;
use crate::event::{Deferred, SiteEvent};
use crate::timer::{Scheduler, TimerId};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Schedules `Deferred` tasks with `setTimeout`, dispatching them back into
/// the controller when they fire.
pub struct BrowserScheduler {
    dispatch: Dispatch,
    next_id: u64,
    timers: HashMap<TimerId, Timeout>,
    /// Ids whose callback has returned; pruned on the next schedule
    fired: Rc<RefCell<Vec<TimerId>>>,
}

impl BrowserScheduler {
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            next_id: 0,
            timers: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Drop handles of timers that already ran. Never touches a timer whose
    /// callback is still on the stack: ids are recorded after dispatch.
    fn prune(&mut self) {
        let fired: Vec<TimerId> = self.fired.borrow_mut().drain(..).collect();
        for id in fired {
            self.timers.remove(&id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay_ms: u32, task: Deferred) -> TimerId {
        self.prune();

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let dispatch = self.dispatch.clone();
        let fired = self.fired.clone();
        let timeout = Timeout::new(delay_ms, move || {
            dispatch(SiteEvent::Deferred(task));
            fired.borrow_mut().push(id);
        });
        self.timers.insert(id, timeout);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        // Dropping a Timeout clears it
        self.timers.remove(&id);
    }
}
