//! # Readiness Gate Handle
//!
//! Shares the root component's [`ReadinessGate`] with the running shell.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use defi_shell::{InvalidLocationPolicy, ReadinessGate, ReadinessState, RenderPlan};

use crate::rpc_configuration::RpcConfiguration;

/// Shared handle to the gate owned by one root component.
///
/// Provided as context by the root; all renders run on the UI thread, so a
/// `RefCell` is enough.
#[derive(Clone)]
pub struct GateHandle(Rc<RefCell<ReadinessGate<RpcConfiguration>>>);

impl GateHandle {
    /// Mounts a gate, which dispatches the configuration fetch.
    #[must_use]
    pub fn mount(fetcher: RpcConfiguration) -> Self {
        let gate = ReadinessGate::mount(fetcher, InvalidLocationPolicy::default());
        Self(Rc::new(RefCell::new(gate)))
    }

    /// Projects the application state onto what to render.
    #[must_use]
    pub fn render(&self, state: &ReadinessState) -> RenderPlan {
        self.0.borrow().render(state)
    }

    /// Borrows the gate for a transition pass.
    #[must_use]
    pub fn get(&self) -> Ref<'_, ReadinessGate<RpcConfiguration>> {
        self.0.borrow()
    }

    /// Mutably borrows the gate to commit a rendered pass.
    #[must_use]
    pub fn get_mut(&self) -> RefMut<'_, ReadinessGate<RpcConfiguration>> {
        self.0.borrow_mut()
    }
}
