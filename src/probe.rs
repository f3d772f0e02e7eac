//! Execution probe threaded through the component tree.
//!
//! Every display element marks the probe at the top of its body, so the
//! number of entries recorded per state change is exactly the number of
//! elements the framework re-ran. Sequence computations are recorded
//! separately, which is what makes the cached-compute policy observable at
//! all: it re-renders as often as the plain one but recomputes far less.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;

/// Cloneable handle to a shared execution log. Distributed to components via
/// context; clones all point at the same log.
#[derive(Clone, Default)]
pub struct RenderProbe {
    inner: Rc<RefCell<ProbeLog>>,
}

#[derive(Default)]
struct ProbeLog {
    renders: Vec<String>,
    computes: Vec<String>,
}

// Two probes are the same probe iff they share the log. Value comparison
// would make a probe prop defeat the memoization it is meant to observe.
impl PartialEq for RenderProbe {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl RenderProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one display-element body execution.
    pub fn mark_render(&self, label: &str) {
        debug!("rendering {label}");
        self.inner.borrow_mut().renders.push(label.to_string());
    }

    /// Run `compute`, recording that the sequence for `label` was actually
    /// recomputed rather than served from a cache.
    pub fn observe_compute<T>(&self, label: &str, compute: impl FnOnce() -> T) -> T {
        debug!("computing sequence for {label}");
        self.inner.borrow_mut().computes.push(label.to_string());
        compute()
    }

    /// Labels of every body execution recorded so far, oldest first.
    pub fn renders(&self) -> Vec<String> {
        self.inner.borrow().renders.clone()
    }

    /// Labels of every sequence computation recorded so far, oldest first.
    pub fn computes(&self) -> Vec<String> {
        self.inner.borrow().computes.clone()
    }

    /// Forget everything recorded so far. Callers do this after mount so the
    /// counts only reflect click-driven executions.
    pub fn reset(&self) {
        let mut log = self.inner.borrow_mut();
        log.renders.clear();
        log.computes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_log() {
        let probe = RenderProbe::new();
        let clone = probe.clone();
        clone.mark_render("a");
        probe.mark_render("b");
        assert_eq!(probe.renders(), ["a", "b"]);
        assert!(probe == clone);
    }

    #[test]
    fn observe_compute_returns_the_result_and_records_the_label() {
        let probe = RenderProbe::new();
        let value = probe.observe_compute("a", || 7);
        assert_eq!(value, 7);
        assert_eq!(probe.computes(), ["a"]);
        assert!(probe.renders().is_empty());
    }

    #[test]
    fn reset_clears_both_channels() {
        let probe = RenderProbe::new();
        probe.mark_render("a");
        probe.observe_compute("a", || ());
        probe.reset();
        assert!(probe.renders().is_empty());
        assert!(probe.computes().is_empty());
    }
}
