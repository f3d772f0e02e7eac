//! Host views: each board owns three independent counters and wires one
//! display element to each. One board component exists per handler-supply
//! style, because the style is the axis the demo shows to be irrelevant:
//! whether the increment action is a fresh closure, a named closure, or a
//! cached callback, only the display element's own memoization policy decides
//! what re-renders.

use dioxus::prelude::*;

use crate::display::{display, Policy};
use crate::probe::RenderProbe;

/// How a board hands the increment action to its display elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerStyle {
    /// A closure created fresh in the rsx body on every render.
    Inline,
    /// A closure bound to a local name first.
    Named,
    /// A handler cached across renders with `use_callback`.
    Cached,
}

impl HandlerStyle {
    pub const ALL: [HandlerStyle; 3] = [
        HandlerStyle::Inline,
        HandlerStyle::Named,
        HandlerStyle::Cached,
    ];
}

impl std::fmt::Display for HandlerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HandlerStyle::Inline => "inline closure",
            HandlerStyle::Named => "named closure",
            HandlerStyle::Cached => "cached callback",
        })
    }
}

/// Build the board for a handler style.
pub fn board(style: HandlerStyle, policy: Policy) -> Element {
    match style {
        HandlerStyle::Inline => rsx! {
            InlineHandlerBoard { policy }
        },
        HandlerStyle::Named => rsx! {
            NamedHandlerBoard { policy }
        },
        HandlerStyle::Cached => rsx! {
            CachedHandlerBoard { policy }
        },
    }
}

#[component]
pub fn InlineHandlerBoard(policy: Policy) -> Element {
    let mut first = use_signal(|| 0usize);
    let mut second = use_signal(|| 0usize);
    let mut third = use_signal(|| 0usize);

    rsx! {
        section { class: "board",
            {display(policy, "first", first(), EventHandler::new(move |_: MouseEvent| first += 1))}
            {display(policy, "second", second(), EventHandler::new(move |_: MouseEvent| second += 1))}
            {display(policy, "third", third(), EventHandler::new(move |_: MouseEvent| third += 1))}
        }
    }
}

#[component]
pub fn NamedHandlerBoard(policy: Policy) -> Element {
    let mut first = use_signal(|| 0usize);
    let mut second = use_signal(|| 0usize);
    let mut third = use_signal(|| 0usize);

    let bump_first = move |_: MouseEvent| first += 1;
    let bump_second = move |_: MouseEvent| second += 1;
    let bump_third = move |_: MouseEvent| third += 1;

    rsx! {
        section { class: "board",
            {display(policy, "first", first(), EventHandler::new(bump_first))}
            {display(policy, "second", second(), EventHandler::new(bump_second))}
            {display(policy, "third", third(), EventHandler::new(bump_third))}
        }
    }
}

#[component]
pub fn CachedHandlerBoard(policy: Policy) -> Element {
    let mut first = use_signal(|| 0usize);
    let mut second = use_signal(|| 0usize);
    let mut third = use_signal(|| 0usize);

    let bump_first = use_callback(move |_: MouseEvent| first += 1);
    let bump_second = use_callback(move |_: MouseEvent| second += 1);
    let bump_third = use_callback(move |_: MouseEvent| third += 1);

    rsx! {
        section { class: "board",
            {display(policy, "first", first(), bump_first)}
            {display(policy, "second", second(), bump_second)}
            {display(policy, "third", third(), bump_third)}
        }
    }
}

/// The full comparison screen: every policy crossed with every handler style,
/// 27 independent counters in all.
#[component]
pub fn App() -> Element {
    use_context_provider(RenderProbe::new);

    rsx! {
        main {
            h1 { "render memoization lab" }
            for policy in Policy::ALL {
                section {
                    h2 { "{policy}" }
                    for style in HandlerStyle::ALL {
                        h3 { "{style}" }
                        {board(style, policy)}
                    }
                }
            }
        }
    }
}
