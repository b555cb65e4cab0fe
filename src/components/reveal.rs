use yew::prelude::*;

use crate::config;
use crate::hooks::use_in_view::use_in_view;
use crate::motion::viewport::ViewportConfig;

/// Classes for an element that rises into place once revealed.
pub fn reveal_classes(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-8"
    }
}

/// Inline transition delay for the `index`-th item of a staggered group.
/// Hidden items carry no delay so they hide immediately.
pub fn stagger_style(visible: bool, index: u32, step_ms: u32) -> String {
    let delay = if visible { index.saturating_mul(step_ms) } else { 0 };
    format!("transition-delay: {}ms", delay)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or_default]
    pub index: u32,
    #[prop_or(config::REVEAL_STAGGER_MS)]
    pub stagger_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let view = use_in_view(ViewportConfig::default().with_threshold(props.threshold));
    let visible = view.is_visible();

    html! {
        <div
            ref={view.node_ref.clone()}
            class={classes!("transition-all", "duration-700", reveal_classes(visible), props.class.clone())}
            style={stagger_style(visible, props.index, props.stagger_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_applies_only_once_visible() {
        assert_eq!(stagger_style(true, 3, 100), "transition-delay: 300ms");
        assert_eq!(stagger_style(false, 3, 100), "transition-delay: 0ms");
        assert_eq!(stagger_style(true, u32::MAX, 100), format!("transition-delay: {}ms", u32::MAX));
    }
}
