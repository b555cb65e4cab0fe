use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::accent::AccentColor;
use crate::components::icon::{Icon, IconView};
use crate::components::reveal::{reveal_classes, stagger_style};
use crate::content::get_initials;
use crate::hooks::use_in_view::use_in_view;
use crate::motion::viewport::ViewportConfig;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub accent: AccentColor,
    #[prop_or_default]
    pub index: u32,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let view = use_in_view(ViewportConfig::default().with_threshold(0.2));
    let visible = view.is_visible();
    let accent = props.accent.classes();

    html! {
        <div
            ref={view.node_ref.clone()}
            class={classes!(
                "group", "relative", "bg-inglu-slate", "rounded-card", "p-8",
                "border", "border-transparent", "transition-all", "duration-300", "ease-out",
                "hover:border-inglu-accent", "hover:shadow-glow-cyan",
                reveal_classes(visible)
            )}
            style={stagger_style(visible, props.index, 100)}
        >
            <div class={classes!(
                "relative", "w-14", "h-14", "flex", "items-center", "justify-center", "rounded-xl", "mb-5",
                "group-hover:scale-110", "transition-all", "duration-300",
                accent.soft, accent.text
            )}>
                <IconView icon={props.icon} />
            </div>
            <div class="relative">
                <h3 class={classes!("text-xl", "font-bold", "mb-3", accent.text)}>{ props.title.clone() }</h3>
                <p class="text-inglu-text-secondary text-body-sm leading-relaxed">{ props.description.clone() }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub number: u8,
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub accent: AccentColor,
    #[prop_or_default]
    pub index: u32,
    #[prop_or_default]
    pub is_last: bool,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    let view = use_in_view(ViewportConfig::default().with_threshold(0.3));
    let visible = view.is_visible();
    let accent = props.accent.classes();

    html! {
        <div
            ref={view.node_ref.clone()}
            class={classes!(
                "flex", "flex-col", "items-center", "text-center", "relative",
                "transition-all", "duration-500", "ease-out", reveal_classes(visible)
            )}
            style={stagger_style(visible, props.index, 200)}
        >
            <div class={classes!(
                "w-16", "h-16", "rounded-full", "flex", "items-center", "justify-center",
                "text-white", "font-bold", "text-2xl", "mb-5", "shadow-lg", accent.bg
            )}>
                { props.number.to_string() }
            </div>
            <div class={classes!("w-20", "h-20", "rounded-2xl", "flex", "items-center", "justify-center", "mb-4", accent.soft, accent.text)}>
                <IconView icon={props.icon} />
            </div>
            <h3 class="text-xl font-bold text-inglu-dark mb-3">{ props.title.clone() }</h3>
            <p class="text-inglu-text-secondary text-body-sm max-w-[250px] leading-relaxed">{ props.description.clone() }</p>
            if !props.is_last {
                <div class={classes!("hidden", "lg:flex", "absolute", "top-12", "-right-6", "xl:-right-10", "animate-pulse", accent.text)}>
                    <IconView icon={Icon::ArrowRight} />
                </div>
                <div class="lg:hidden mt-8 text-inglu-accent animate-bounce">
                    <IconView icon={Icon::ChevronDown} />
                </div>
            }
        </div>
    }
}

/// Filled flags for a five-star row; ratings above five show five stars.
pub fn star_row(rating: u8) -> [bool; 5] {
    let mut stars = [false; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = i < usize::from(rating);
    }
    stars
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub role: AttrValue,
    #[prop_or(5)]
    pub rating: u8,
    #[prop_or_default]
    pub index: u32,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let view = use_in_view(ViewportConfig::default().with_threshold(0.2));
    let visible = view.is_visible();
    let rating = props.rating.min(5);

    html! {
        <div
            ref={view.node_ref.clone()}
            class={classes!(
                "bg-gray-50", "border", "border-gray-200", "rounded-card", "p-8",
                "transition-all", "duration-500", "ease-out", "hover:shadow-card-hover",
                reveal_classes(visible)
            )}
            style={stagger_style(visible, props.index, 150)}
        >
            <div class="flex items-center gap-1 mb-4" aria-label={format!("{} out of 5 stars", rating)}>
                { for star_row(rating).iter().map(|filled| html! {
                    <IconView icon={Icon::Star} class={if *filled { "text-yellow-400" } else { "text-gray-300" }} />
                }) }
            </div>
            <blockquote class="relative mb-6">
                <p class="text-inglu-dark text-body leading-relaxed italic pl-4">{ props.quote.clone() }</p>
            </blockquote>
            <div class="flex items-center gap-4">
                <div class="flex-shrink-0 w-12 h-12 rounded-full flex items-center justify-center bg-gradient-to-br from-inglu-blue to-inglu-purple text-white font-bold text-sm" aria-hidden="true">
                    { get_initials(&props.author) }
                </div>
                <div>
                    <p class="font-bold text-inglu-dark text-body-sm">{ props.author.clone() }</p>
                    <p class="text-inglu-text-secondary text-caption">{ props.role.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillarCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub tagline: AttrValue,
    pub description: AttrValue,
    pub features: &'static [&'static str],
    pub accent: AccentColor,
    pub expanded: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub index: u32,
}

/// One E3 pillar; the header is always shown and the details open on
/// click or Enter.
#[function_component(PillarCard)]
pub fn pillar_card(props: &PillarCardProps) -> Html {
    let view = use_in_view(ViewportConfig::default().with_threshold(0.2));
    let visible = view.is_visible();
    let accent = props.accent.classes();
    let expanded = props.expanded;

    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_toggle.emit(());
            }
        })
    };
    let explore_href = format!("#{}", props.title.to_lowercase());

    html! {
        <div
            ref={view.node_ref.clone()}
            class={classes!(
                "relative", "rounded-2xl", "overflow-hidden", "cursor-pointer", "border-2",
                "transition-all", "duration-500", "hover:scale-[1.02]",
                if expanded { classes!(accent.border, props.accent.panel()) } else { classes!("border-gray-200", "bg-white") },
                reveal_classes(visible)
            )}
            style={stagger_style(visible, props.index, 100)}
            role="button"
            tabindex="0"
            aria-expanded={expanded.to_string()}
            {onclick}
            {onkeydown}
        >
            <div class="flex items-center gap-4 p-6">
                <div class={classes!(
                    "flex-shrink-0", "w-14", "h-14", "rounded-xl", "flex", "items-center", "justify-center",
                    "transition-all", "duration-300",
                    if expanded { classes!(accent.soft, accent.text) } else { classes!("bg-gray-100", "text-gray-500") }
                )}>
                    <IconView icon={props.icon} />
                </div>
                <div class="flex-1">
                    <h3 class={classes!("text-xl", "md:text-2xl", "font-bold", "mb-1", if expanded { accent.text } else { "text-gray-900" })}>
                        { props.title.clone() }
                    </h3>
                    <p class="text-sm text-gray-500">{ props.tagline.clone() }</p>
                </div>
                <div class={classes!("flex-shrink-0", "w-8", "h-8", "rounded-full", "flex", "items-center", "justify-center", "transition-all", "duration-300", expanded.then_some("rotate-180"))}>
                    <IconView icon={Icon::ChevronDown} />
                </div>
            </div>
            <div class={classes!("overflow-hidden", "transition-all", "duration-500", if expanded { "max-h-[400px] opacity-100" } else { "max-h-0 opacity-0" })}>
                <div class="px-6 pb-6">
                    <p class="text-gray-600 mb-4">{ props.description.clone() }</p>
                    <ul class="space-y-2 mb-4">
                        { for props.features.iter().map(|feature| html! {
                            <li class="flex items-center gap-3 text-gray-700">
                                <span class={classes!("w-1.5", "h-1.5", "rounded-full", accent.bg)}></span>
                                { *feature }
                            </li>
                        }) }
                    </ul>
                    <a
                        href={explore_href}
                        class={classes!("inline-flex", "items-center", "gap-2", "font-medium", "hover:underline", accent.text)}
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    >
                        { format!("Explore {}", props.title) }
                        <IconView icon={Icon::ChevronRight} />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_row_fills_up_to_rating() {
        assert_eq!(star_row(0), [false; 5]);
        assert_eq!(star_row(3), [true, true, true, false, false]);
        assert_eq!(star_row(5), [true; 5]);
        assert_eq!(star_row(9), [true; 5]);
    }
}
