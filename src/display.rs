//! The counted display element in its three memoization policies.
//!
//! All three variants render the same thing for a given count: one `code`
//! token per Fibonacci value from f(0) to f(count), plus an increment button.
//! They differ only in caching discipline, which is the whole demonstration:
//!
//! - [`HeavyDisplay`] recomputes the sequence inline and re-executes on every
//!   parent re-render.
//! - [`HeavyDisplayCached`] caches the sequence by count but still re-executes
//!   with its parent.
//! - [`HeavyDisplayMemoized`] is skipped outright unless its count changed.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::fib::fib_sequence;
use crate::probe::RenderProbe;

/// Which caching discipline a display element uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Recompute everything, re-render whenever the parent does.
    Plain,
    /// Cache the computed sequence by count, still re-render with the parent.
    CachedCompute,
    /// Skip re-execution entirely unless the count changed.
    Memoized,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Plain, Policy::CachedCompute, Policy::Memoized];
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Policy::Plain => "plain",
            Policy::CachedCompute => "cached compute",
            Policy::Memoized => "memoized",
        })
    }
}

/// Marker prop that never compares equal. Dioxus skips re-rendering a
/// component whose props are unchanged, so carrying one of these opts a
/// component back into the re-render-with-parent behavior the unoptimized
/// variants are meant to show.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForceRender;

impl PartialEq for ForceRender {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

/// Wrapper that always compares equal, keeping the wrapped value out of a
/// component's prop comparison.
///
/// `Callback` equality is identity-based, so a handler rebuilt on every
/// parent render would defeat prop memoization. The memoized display carries
/// its handler inside this wrapper instead: only the count decides whether it
/// re-renders, no matter how the handler was supplied.
#[derive(Clone, Copy)]
pub struct AlwaysEqual<T>(pub T);

impl<T> PartialEq for AlwaysEqual<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Build the display element for `policy`. A plain function rather than a
/// component: it adds no scope of its own, so the chosen variant diffs
/// directly against the board that called it.
pub fn display(
    policy: Policy,
    label: &'static str,
    count: usize,
    on_increment: EventHandler<MouseEvent>,
) -> Element {
    match policy {
        Policy::Plain => rsx! {
            HeavyDisplay { label: "{label}", count, on_increment }
        },
        Policy::CachedCompute => rsx! {
            HeavyDisplayCached { label: "{label}", count, on_increment }
        },
        Policy::Memoized => rsx! {
            HeavyDisplayMemoized { label: "{label}", count, on_increment: AlwaysEqual(on_increment) }
        },
    }
}

/// No optimization at all. The sequence is recomputed inline on every
/// execution, and [`ForceRender`] makes every parent re-render reach it.
#[component]
pub fn HeavyDisplay(
    label: String,
    count: usize,
    on_increment: EventHandler<MouseEvent>,
    #[props(default)] _force: ForceRender,
) -> Element {
    let probe = use_context::<RenderProbe>();
    probe.mark_render(&label);

    let items = probe.observe_compute(&label, || fib_sequence(count));

    display_body(&label, count, &items, on_increment)
}

/// Caches the computed sequence keyed by the count, so unrelated re-renders
/// skip the Fibonacci work. The element body itself still re-executes
/// whenever the parent re-renders, which is what the probe counts.
#[component]
pub fn HeavyDisplayCached(
    label: String,
    count: usize,
    on_increment: EventHandler<MouseEvent>,
    #[props(default)] _force: ForceRender,
) -> Element {
    let probe = use_context::<RenderProbe>();
    probe.mark_render(&label);

    let items = use_cached_sequence(&label, count, &probe);

    display_body(&label, count, &items, on_increment)
}

/// Fully memoized: the props compare by value, so Dioxus skips the element
/// when its count is unchanged and sibling updates never reach it. The
/// handler rides in [`AlwaysEqual`] so it cannot break that comparison.
#[component]
pub fn HeavyDisplayMemoized(
    label: String,
    count: usize,
    on_increment: AlwaysEqual<EventHandler<MouseEvent>>,
) -> Element {
    let probe = use_context::<RenderProbe>();
    probe.mark_render(&label);

    let items = use_cached_sequence(&label, count, &probe);

    display_body(&label, count, &items, on_increment.0)
}

/// Last-value cache for the computed sequence, keyed by count. A plain hook
/// slot rather than `use_memo`: the count is a prop, not a tracked signal,
/// and a by-key cache evaluates exactly once per count change.
fn use_cached_sequence(label: &str, count: usize, probe: &RenderProbe) -> Rc<Vec<u64>> {
    let slot = use_hook(|| Rc::new(RefCell::new(None::<(usize, Rc<Vec<u64>>)>)));
    let mut cached = slot.borrow_mut();
    match &*cached {
        Some((cached_count, items)) if *cached_count == count => items.clone(),
        _ => {
            let items = Rc::new(probe.observe_compute(label, || fib_sequence(count)));
            *cached = Some((count, items.clone()));
            items
        }
    }
}

fn display_body(
    label: &str,
    count: usize,
    items: &[u64],
    on_increment: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "display",
            button { onclick: move |event| on_increment.call(event), "count up" }
            span { "{label}: {count}" }
            div { class: "sequence",
                for (index , value) in items.iter().enumerate() {
                    code { key: "{label}-{index}", "{value} " }
                }
            }
        }
    }
}
