//! Headless driving of a single board: synthetic clicks in, probe counts and
//! rendered HTML out. This is both the crate's test rig and the demo script
//! the binary runs when built without a renderer feature.

use std::any::Any;
use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use dioxus_core::{AttributeValue, ElementId, Event, NoOpMutations, Template, WriteMutations};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

use crate::board::{board, HandlerStyle};
use crate::display::Policy;
use crate::probe::RenderProbe;

#[derive(Props, Clone, PartialEq)]
struct BoardFixtureProps {
    probe: RenderProbe,
    policy: Policy,
    style: HandlerStyle,
}

fn board_fixture(props: BoardFixtureProps) -> Element {
    use_context_provider(|| props.probe.clone());
    board(props.style, props.policy)
}

/// Collects the element ids that click listeners get attached to, in creation
/// order. A board mounts exactly one button per display element, but the
/// initial build creates children last to first, so the ids arrive in reverse
/// document order.
#[derive(Default)]
struct ClickListenerSink {
    clicks: Vec<ElementId>,
}

impl WriteMutations for ClickListenerSink {
    fn append_children(&mut self, _: ElementId, _: usize) {}

    fn assign_node_id(&mut self, _: &'static [u8], _: ElementId) {}

    fn create_placeholder(&mut self, _: ElementId) {}

    fn create_text_node(&mut self, _: &str, _: ElementId) {}

    fn load_template(&mut self, _: Template, _: usize, _: ElementId) {}

    fn replace_node_with(&mut self, _: ElementId, _: usize) {}

    fn replace_placeholder_with_nodes(&mut self, _: &'static [u8], _: usize) {}

    fn insert_nodes_after(&mut self, _: ElementId, _: usize) {}

    fn insert_nodes_before(&mut self, _: ElementId, _: usize) {}

    fn set_attribute(
        &mut self,
        _: &'static str,
        _: Option<&'static str>,
        _: &AttributeValue,
        _: ElementId,
    ) {
    }

    fn set_node_text(&mut self, _: &str, _: ElementId) {}

    fn create_event_listener(&mut self, name: &'static str, id: ElementId) {
        if name == "click" {
            self.clicks.push(id);
        }
    }

    fn remove_event_listener(&mut self, _: &'static str, _: ElementId) {}

    fn remove_node(&mut self, _: ElementId) {}

    fn push_root(&mut self, _: ElementId) {}
}

/// One mounted board plus the handles needed to poke it from outside the
/// framework: the shared probe and the ids of the three increment buttons.
pub struct Harness {
    vdom: VirtualDom,
    probe: RenderProbe,
    buttons: Vec<ElementId>,
}

impl Harness {
    /// Mount one board. The probe comes back with the three mount executions
    /// already recorded; call [`RenderProbe::reset`] before counting the
    /// effects of clicks.
    pub fn new(policy: Policy, style: HandlerStyle) -> Self {
        // Synthesized events arrive as serialized data and need the matching
        // converter registered before any dispatch.
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let probe = RenderProbe::new();
        let mut vdom = VirtualDom::new_with_props(
            board_fixture,
            BoardFixtureProps {
                probe: probe.clone(),
                policy,
                style,
            },
        );
        let mut sink = ClickListenerSink::default();
        vdom.rebuild(&mut sink);

        // Undo the build's bottom-up creation order so index 0 is the first
        // display element on screen.
        let mut buttons = sink.clicks;
        buttons.reverse();

        Self {
            vdom,
            probe,
            buttons,
        }
    }

    pub fn probe(&self) -> &RenderProbe {
        &self.probe
    }

    /// Click the increment button of display element `index` (0..3) and run
    /// the reconciliation pass that follows, synchronously.
    pub fn click(&mut self, index: usize) {
        let id = self.buttons[index];
        let data = Rc::new(PlatformEventData::new(Box::new(
            SerializedMouseData::default(),
        )));
        self.vdom
            .runtime()
            .handle_event("click", Event::new(data as Rc<dyn Any>, true), id);
        self.vdom.render_immediate(&mut NoOpMutations);
    }

    /// The screen as it currently stands.
    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.vdom)
    }
}

/// Click every button once on every board and report how many display bodies
/// executed and how many sequences were recomputed.
pub fn walkthrough() {
    for policy in Policy::ALL {
        for style in HandlerStyle::ALL {
            let mut harness = Harness::new(policy, style);
            harness.probe().reset();
            for index in 0..3 {
                harness.click(index);
            }
            info!(
                "{policy} / {style}: {} executions, {} recomputations across 3 clicks",
                harness.probe().renders().len(),
                harness.probe().computes().len(),
            );
        }
    }
}
