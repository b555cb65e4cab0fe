use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::{Cta, CtaTarget};
use crate::hooks::anchor::scroll_to_element;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Ghost,
    Dark,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-inglu-blue text-white hover:bg-blue-700 active:bg-blue-800 shadow-md hover:shadow-lg focus:ring-inglu-blue",
            ButtonVariant::Secondary => "bg-inglu-orange text-white hover:bg-orange-600 active:bg-orange-700 shadow-md hover:shadow-lg focus:ring-inglu-orange",
            ButtonVariant::Tertiary => "bg-transparent text-inglu-blue border-2 border-inglu-blue hover:bg-inglu-blue/10 active:bg-inglu-blue/20 focus:ring-inglu-blue",
            ButtonVariant::Ghost => "bg-transparent text-inglu-light hover:bg-white/10 active:bg-white/20 focus:ring-white",
            ButtonVariant::Dark => "bg-inglu-dark text-white hover:bg-inglu-slate active:bg-gray-900 shadow-md hover:shadow-lg focus:ring-inglu-dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-4 py-2 text-sm",
            ButtonSize::Md => "px-6 py-3 text-base",
            ButtonSize::Lg => "px-8 py-4 text-lg",
        }
    }
}

const BASE: &str = "inline-flex items-center justify-center font-semibold rounded-btn transition-all duration-200 ease-out focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed transform hover:scale-[1.02] active:scale-[0.98]";

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Renders a link instead of a `<button>`.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or_default]
    pub icon_right: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        BASE,
        props.size.classes(),
        props.variant.classes(),
        props.full_width.then_some("w-full"),
        props.class.clone()
    );
    let icon = props.icon.map(|icon| {
        let spacing = if props.icon_right { "ml-2" } else { "mr-2" };
        html! { <IconView {icon} class={classes!(spacing)} /> }
    });
    let (leading, trailing) = if props.icon_right { (None, icon) } else { (icon, None) };
    let onclick = props.onclick.clone();

    match &props.href {
        Some(href) if !props.disabled => html! {
            <a href={href.clone()} {class} {onclick} aria-label={props.aria_label.clone()}>
                { leading }
                { for props.children.iter() }
                { trailing }
            </a>
        },
        _ => html! {
            <button type="button" {class} {onclick} disabled={props.disabled} aria-label={props.aria_label.clone()}>
                { leading }
                { for props.children.iter() }
                { trailing }
            </button>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub cta: Cta,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(ButtonSize::Lg)]
    pub size: ButtonSize,
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or_default]
    pub icon_right: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// A [`Button`] for a content call to action. In-page anchors scroll
/// smoothly instead of jumping.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = match props.cta.target {
        CtaTarget::Anchor(id) => Some(Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_element(id, config::HEADER_OFFSET);
        })),
        _ => None,
    };

    html! {
        <Button
            variant={props.variant}
            size={props.size}
            href={AttrValue::from(props.cta.target.href())}
            {onclick}
            icon={props.icon}
            icon_right={props.icon_right}
            class={props.class.clone()}
        >
            { props.cta.label }
        </Button>
    }
}
