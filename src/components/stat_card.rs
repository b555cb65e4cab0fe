use yew::prelude::*;

use crate::components::accent::AccentColor;
use crate::components::icon::{Icon, IconView};
use crate::components::reveal::{reveal_classes, stagger_style};
use crate::config;
use crate::content::Stat;
use crate::hooks::use_count_up::use_count_up;
use crate::hooks::use_in_view::use_in_view;
use crate::motion::counter::CounterSpec;
use crate::motion::viewport::ViewportConfig;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
    /// Position in its row; later cards start counting later.
    #[prop_or_default]
    pub index: u32,
    /// Light text for dark sections.
    #[prop_or(true)]
    pub on_dark: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let view = use_in_view(ViewportConfig::default().with_threshold(0.3));
    let spec = use_memo(
        |(number, index)| {
            CounterSpec::parse(number)
                .with_duration_ms(config::COUNTER_DURATION_MS)
                .with_start_delay_ms(index.saturating_mul(config::STAT_STAGGER_MS))
        },
        (props.stat.number, props.index),
    );
    let visible = view.is_visible();
    let display = use_count_up(&spec, visible);
    let accent = props.stat.accent.classes();

    html! {
        <div
            ref={view.node_ref.clone()}
            class={classes!(
                "flex", "flex-col", "items-center", "text-center", "p-6", "md:p-8",
                "transition-all", "duration-500", reveal_classes(visible)
            )}
            style={stagger_style(visible, props.index, config::REVEAL_STAGGER_MS)}
        >
            <div class={classes!("w-14", "h-14", "rounded-2xl", "flex", "items-center", "justify-center", "mb-4", accent.soft)}>
                <IconView icon={props.stat.icon} class={classes!(accent.text)} />
            </div>
            <div class={classes!("text-4xl", "md:text-5xl", "font-bold", "mb-2", "tabular-nums", accent.text)}>
                { display }
            </div>
            <p class={classes!("text-body", if props.on_dark { "text-inglu-text-secondary" } else { "text-inglu-dark" })}>
                { props.stat.label }
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrustStatProps {
    pub stat: Stat,
}

/// Compact, static figure for the hero's trust bar.
#[function_component(TrustStat)]
pub fn trust_stat(props: &TrustStatProps) -> Html {
    let accent = props.stat.accent.classes();
    html! {
        <div class="flex items-center gap-3 group">
            <div class={classes!(
                "w-10", "h-10", "rounded-xl", "flex", "items-center", "justify-center",
                "transition-transform", "duration-300", "group-hover:scale-110",
                accent.soft, accent.text
            )}>
                <IconView icon={props.stat.icon} />
            </div>
            <div class="text-left">
                <div class="text-lg md:text-xl font-bold text-inglu-light">{ props.stat.number }</div>
                <div class="text-xs text-inglu-text-secondary">{ props.stat.label }</div>
            </div>
        </div>
    }
}

pub fn accent_icon_tile(icon: Icon, accent: AccentColor) -> Html {
    let accent = accent.classes();
    html! {
        <div class={classes!("w-12", "h-12", "rounded-xl", "flex", "items-center", "justify-center", "mb-4", accent.soft)}>
            <IconView {icon} class={classes!(accent.text)} />
        </div>
    }
}
