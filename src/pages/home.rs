use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accent::AccentColor;
use crate::components::button::{Button, ButtonSize, ButtonVariant, CtaButton};
use crate::components::cards::{FeatureCard, PillarCard, StepCard, TestimonialCard};
use crate::components::icon::{Icon, IconView};
use crate::components::layout::{Container, Section, SectionBackground, SectionHeader, SectionPadding};
use crate::components::reveal::{reveal_classes, Reveal};
use crate::components::stat_card::{StatCard, TrustStat};
use crate::config;
use crate::content::{self, hero, Cta, CtaTarget, PersonaPath};
use crate::hooks::use_in_view::use_in_view;
use crate::motion::viewport::ViewportConfig;
use crate::Route;

#[derive(Properties, PartialEq)]
struct PersonaButtonProps {
    title: AttrValue,
    tagline: AttrValue,
    icon: Icon,
    accent: AccentColor,
    onclick: Callback<MouseEvent>,
}

#[function_component(PersonaButton)]
fn persona_button(props: &PersonaButtonProps) -> Html {
    let accent = props.accent.classes();
    html! {
        <button
            type="button"
            onclick={props.onclick.clone()}
            class={classes!(
                "group", "flex", "flex-col", "items-center", "gap-3", "p-5", "md:p-6", "rounded-2xl",
                "border-2", "transition-all", "duration-300", "min-w-[150px]", "md:min-w-[180px]",
                "hover:scale-[1.02]", "active:scale-[0.98]", "backdrop-blur-sm", "bg-white/5",
                accent.border
            )}
        >
            <div class={classes!("w-14", "h-14", "md:w-16", "md:h-16", "rounded-2xl", "flex", "items-center", "justify-center", "transition-all", "duration-300", accent.soft, accent.text)}>
                <IconView icon={props.icon} />
            </div>
            <div class="text-center">
                <span class="font-semibold text-inglu-light text-sm md:text-base block mb-1">{ props.title.clone() }</span>
                <span class="text-xs text-inglu-text-secondary leading-tight">{ props.tagline.clone() }</span>
            </div>
            <div class={classes!("flex", "items-center", "gap-1", "text-xs", "font-medium", "opacity-0", "group-hover:opacity-100", "transition-opacity", "duration-300", accent.text)}>
                <span>{"Explore"}</span>
                <IconView icon={Icon::ArrowRight} />
            </div>
        </button>
    }
}

fn persona_click(navigator: &Option<Navigator>, path: &PersonaPath) -> Callback<MouseEvent> {
    let navigator = navigator.clone();
    let route = Route::for_persona(path.persona);
    Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&route),
        None => warn!("No router available for persona navigation"),
    })
}

fn three_e_indicator() -> Html {
    let pillars = [
        ("Education", AccentColor::Blue),
        ("Enhancement", AccentColor::Orange),
        ("Entertainment", AccentColor::Purple),
    ];
    html! {
        <div class="flex items-center justify-center gap-2 md:gap-4 flex-wrap mb-10">
            { for pillars.iter().enumerate().map(|(index, (name, accent))| html! {
                <>
                    <div class="flex items-center gap-2 px-3 py-1.5 rounded-full bg-white/5 border border-white/10">
                        <span
                            class={classes!("w-2", "h-2", "rounded-full", "animate-pulse", accent.classes().bg)}
                            style={format!("animation-delay: {}ms", index * 200)}
                        ></span>
                        <span class="text-xs md:text-sm text-inglu-light/80 font-medium">{ *name }</span>
                    </div>
                    if index + 1 < pillars.len() {
                        <span class="text-inglu-text-secondary/50 text-xs">{"+"}</span>
                    }
                </>
            }) }
        </div>
    }
}

#[function_component(Hero)]
fn hero_section() -> Html {
    let view = use_in_view(ViewportConfig::default());
    let visible = view.is_visible();
    let navigator = use_navigator();
    let fade = |delay: &'static str| classes!("transition-all", "duration-700", delay, reveal_classes(visible));

    html! {
        <section id="hero" class="relative min-h-screen flex flex-col justify-center overflow-hidden bg-gradient-hero">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute -top-20 -right-20 w-[300px] md:w-[500px] h-[300px] md:h-[500px] rounded-full opacity-15 bg-gradient-to-br from-inglu-blue to-inglu-purple blur-3xl animate-float"></div>
                <div class="absolute -bottom-20 -left-20 w-[250px] md:w-[400px] h-[250px] md:h-[400px] rounded-full opacity-10 bg-gradient-to-tr from-inglu-orange to-inglu-purple blur-3xl animate-float" style="animation-delay: 2s"></div>
            </div>

            <Container class="relative z-10 pt-24 pb-8 md:pt-32 md:pb-12">
                <div ref={view.node_ref.clone()} class={classes!("text-center", "max-w-4xl", "mx-auto", fade("delay-100"))}>
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-white/5 border border-white/10 backdrop-blur-sm mb-6">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-green-400"></span>
                        </span>
                        <span class="text-sm text-inglu-light/90 font-medium">{ hero::BADGE }</span>
                    </div>

                    <h1 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold text-inglu-light leading-tight mb-5">
                        { hero::HEADLINE }{" "}
                        <span class="bg-gradient-to-r from-inglu-blue via-inglu-purple to-inglu-orange bg-clip-text text-transparent">
                            { hero::HEADLINE_ACCENT }
                        </span>
                    </h1>
                    <p class="text-base md:text-lg text-inglu-text-secondary leading-relaxed mb-6 max-w-2xl mx-auto">
                        { hero::SUBHEADLINE }
                    </p>

                    { three_e_indicator() }

                    <div class={classes!("mb-10", fade("delay-200"))}>
                        <p class="text-lg md:text-xl text-inglu-light font-medium mb-6">{ hero::QUESTION }</p>
                        <div class="flex flex-wrap justify-center gap-4 md:gap-5">
                            { for content::PERSONA_PATHS.iter().map(|path| html! {
                                <PersonaButton
                                    key={path.title}
                                    title={path.title}
                                    tagline={path.tagline}
                                    icon={path.icon}
                                    accent={path.accent}
                                    onclick={persona_click(&navigator, path)}
                                />
                            }) }
                        </div>
                    </div>

                    <div class={classes!("flex", "flex-col", "sm:flex-row", "items-center", "justify-center", "gap-4", fade("delay-300"))}>
                        <CtaButton
                            cta={Cta { label: hero::CTA_PRIMARY, target: CtaTarget::Anchor("membership") }}
                            icon={Icon::ArrowRight}
                            icon_right=true
                            class="w-full sm:w-auto min-w-[200px] shadow-lg shadow-inglu-blue/20"
                        />
                        <CtaButton
                            cta={Cta { label: hero::CTA_SECONDARY, target: CtaTarget::Anchor("how-it-works") }}
                            variant={ButtonVariant::Ghost}
                            icon={Icon::Play}
                            class="w-full sm:w-auto text-inglu-light border border-white/20 hover:bg-white/5"
                        />
                    </div>
                </div>
            </Container>

            <div class="relative z-10 mt-auto">
                <Container>
                    <div class={classes!("py-6", "md:py-8", "border-t", "border-white/5", fade("delay-500"))}>
                        <div class="flex flex-wrap justify-center gap-6 md:gap-10 mb-5">
                            { for content::TRUST_STATS.iter().map(|stat| html! {
                                <TrustStat key={stat.label} stat={*stat} />
                            }) }
                        </div>
                        <div class="flex flex-wrap justify-center items-center gap-4 md:gap-8">
                            <span class="text-xs text-inglu-text-secondary/70">{"Trusted by:"}</span>
                            { for content::PARTNER_BRANDS.iter().map(|brand| html! {
                                <div key={*brand} class="text-inglu-light/50 text-sm font-medium">{ *brand }</div>
                            }) }
                        </div>
                    </div>
                </Container>
            </div>

            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 hidden md:flex">
                <div class="flex flex-col items-center gap-1 text-inglu-text-secondary/40 animate-bounce">
                    <span class="text-xs">{"Scroll to explore"}</span>
                    <IconView icon={Icon::ChevronDown} />
                </div>
            </div>
        </section>
    }
}

/// At most one pillar is open; choosing the open one closes it.
fn toggle_expanded(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[function_component(ThreePillars)]
fn three_pillars() -> Html {
    let expanded = use_state(|| None::<usize>);

    html! {
        <Section id="about">
            <Reveal class="text-center max-w-3xl mx-auto mb-12">
                <div class="inline-flex items-center gap-3 px-4 py-2 rounded-full bg-inglu-dark/5 mb-6">
                    <span class="w-3 h-3 rounded-full bg-inglu-blue"></span>
                    <span class="text-xl font-bold">{"+"}</span>
                    <span class="w-3 h-3 rounded-full bg-inglu-orange"></span>
                    <span class="text-xl font-bold">{"+"}</span>
                    <span class="w-3 h-3 rounded-full bg-inglu-purple"></span>
                    <span class="text-sm font-medium text-inglu-dark ml-2">{"= Experience"}</span>
                </div>
                <h2 class="text-3xl md:text-4xl font-bold text-inglu-dark mb-4">{ content::PILLARS_TITLE }</h2>
                <p class="text-lg text-gray-600 mb-2">{ content::PILLARS_SUBTITLE }</p>
                <p class="text-sm text-gray-500">{ content::PILLARS_EXPLAINER }</p>
            </Reveal>
            <div class="grid md:grid-cols-3 gap-6">
                { for content::PILLARS.iter().enumerate().map(|(index, pillar)| {
                    let on_toggle = {
                        let expanded = expanded.clone();
                        Callback::from(move |_: ()| expanded.set(toggle_expanded(*expanded, index)))
                    };
                    html! {
                        <PillarCard
                            key={pillar.title}
                            icon={pillar.icon}
                            title={pillar.title}
                            tagline={pillar.tagline}
                            description={pillar.description}
                            features={pillar.features}
                            accent={pillar.accent}
                            expanded={*expanded == Some(index)}
                            {on_toggle}
                            index={index as u32}
                        />
                    }
                }) }
            </div>
        </Section>
    }
}

#[function_component(MvpFeatures)]
fn mvp_features() -> Html {
    html! {
        <Section id="membership" background={SectionBackground::Gradient}>
            <Reveal>
                <SectionHeader
                    badge="Membership Benefits"
                    title={content::MEMBERSHIP_TITLE}
                    subtitle={content::MEMBERSHIP_SUBTITLE}
                />
            </Reveal>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                { for content::MVP_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                    <FeatureCard
                        key={feature.title}
                        icon={feature.icon}
                        title={feature.title}
                        description={feature.description}
                        accent={feature.accent}
                        index={index as u32}
                    />
                }) }
            </div>
            <Reveal class="max-w-4xl mx-auto p-8 rounded-3xl bg-gradient-to-br from-white/10 to-white/5 border border-white/10">
                <div class="text-center mb-8">
                    <h3 class="text-2xl font-bold text-inglu-light mb-2">{"Choose Your Plan"}</h3>
                    <p class="text-inglu-text-secondary">{"Affordable access to premium opportunities"}</p>
                </div>
                <div class="grid md:grid-cols-3 gap-4">
                    { for content::PLANS.iter().map(|plan| html! {
                        <div
                            key={plan.name}
                            class={classes!(
                                "relative", "p-6", "rounded-2xl", "text-center", "border",
                                if plan.featured { "border-inglu-blue bg-inglu-blue/10" } else { "border-white/10 bg-white/5" }
                            )}
                        >
                            if let Some(badge) = plan.badge {
                                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 text-xs font-semibold rounded-full bg-inglu-orange text-white">
                                    { badge }
                                </span>
                            }
                            <div class="text-3xl font-bold text-inglu-light">
                                { plan.price }
                                <span class="text-base font-normal text-inglu-text-secondary">{ plan.period }</span>
                            </div>
                            <div class="text-sm text-inglu-text-secondary mt-2">{ plan.name }</div>
                        </div>
                    }) }
                </div>
            </Reveal>
            <Reveal class="mt-12 text-center">
                <Button size={ButtonSize::Lg} href={config::MEMBERSHIP_URL} icon={Icon::ArrowRight} icon_right=true>
                    {"Get Membership Now"}
                </Button>
                <p class="mt-4 text-sm text-inglu-text-secondary">{"Cancel anytime • Full access to all benefits"}</p>
            </Reveal>
        </Section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <Section id="how-it-works">
            <Reveal>
                <SectionHeader title={content::HOW_IT_WORKS_TITLE} subtitle={content::HOW_IT_WORKS_SUBTITLE} />
            </Reveal>
            <div class="grid md:grid-cols-3 gap-12 lg:gap-16">
                { for content::STEPS.iter().enumerate().map(|(index, step)| html! {
                    <StepCard
                        key={step.title}
                        number={step.number}
                        icon={step.icon}
                        title={step.title}
                        description={step.description}
                        accent={step.accent}
                        index={index as u32}
                        is_last={index + 1 == content::STEPS.len()}
                    />
                }) }
            </div>
            <Reveal class="mt-16 text-center">
                <span class="block text-inglu-text-secondary mb-4">{"Ready to get started?"}</span>
                <Button variant={ButtonVariant::Dark} href={config::MEMBERSHIP_URL} icon={Icon::ArrowRight} icon_right=true>
                    {"Join INGLU Now"}
                </Button>
            </Reveal>
        </Section>
    }
}

#[function_component(MarketStats)]
fn market_stats() -> Html {
    html! {
        <Section id="events" background={SectionBackground::Gradient}>
            <Reveal threshold={0.2}>
                <SectionHeader
                    title="Our Growing Community"
                    subtitle="Join thousands of students already experiencing the E3 ecosystem"
                />
            </Reveal>
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                { for content::COMMUNITY_STATS.iter().enumerate().map(|(index, stat)| html! {
                    <StatCard key={stat.label} stat={*stat} index={index as u32} />
                }) }
            </div>
            <Reveal class="mt-12 text-center">
                <p class="text-inglu-light/70 italic">{"\"Building Fluent Futures for 5000+ Learners and Counting\""}</p>
            </Reveal>
        </Section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <Section id="testimonials">
            <Reveal>
                <SectionHeader
                    badge="Student Stories"
                    title={content::TESTIMONIALS_TITLE}
                    subtitle={content::TESTIMONIALS_SUBTITLE}
                />
            </Reveal>
            <div class="grid md:grid-cols-3 gap-6">
                { for content::TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                    <TestimonialCard
                        key={testimonial.author}
                        quote={testimonial.quote}
                        author={testimonial.author}
                        role={testimonial.role}
                        rating={testimonial.rating}
                        index={index as u32}
                    />
                }) }
            </div>
            <Reveal class="mt-12 text-center">
                <p class="text-inglu-text-secondary mb-4">{"Join 5,000+ students already experiencing the INGLU difference"}</p>
                <a href={config::MEMBERSHIP_URL} class="inline-flex items-center gap-2 text-inglu-purple font-semibold hover:underline">
                    {"Become a member today"}
                    <IconView icon={Icon::ChevronRight} />
                </a>
            </Reveal>
        </Section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    let navigator = use_navigator();

    html! {
        <Section id="cta" background={SectionBackground::Gradient} padding={SectionPadding::Xl}>
            <Reveal threshold={0.2} class="text-center max-w-3xl mx-auto">
                <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-inglu-light mb-6">{ content::CTA_TITLE }</h2>
                <p class="text-lg text-inglu-text-secondary mb-10">{ content::CTA_SUBTITLE }</p>
                <div class="mb-10">
                    <CtaButton
                        cta={Cta { label: hero::CTA_PRIMARY, target: CtaTarget::Anchor("membership") }}
                        icon={Icon::ArrowRight}
                        icon_right=true
                    />
                </div>
                <div class="flex items-center gap-4 mb-10">
                    <div class="flex-1 h-px bg-white/10"></div>
                    <span class="text-sm text-inglu-text-secondary">{"or explore by role"}</span>
                    <div class="flex-1 h-px bg-white/10"></div>
                </div>
                <div class="flex flex-wrap justify-center gap-4">
                    { for content::PERSONA_PATHS.iter().map(|path| {
                        let accent = path.accent.classes();
                        html! {
                            <button
                                key={path.title}
                                type="button"
                                onclick={persona_click(&navigator, path)}
                                class={classes!(
                                    "flex", "items-center", "gap-3", "px-6", "py-3", "rounded-xl", "border-2", "bg-transparent",
                                    "font-medium", "transition-all", "duration-300", "hover:scale-105", "active:scale-95",
                                    accent.border, accent.text
                                )}
                            >
                                <IconView icon={path.icon} />
                                <span>{ path.title }</span>
                            </button>
                        }
                    }) }
                </div>
                <div class="mt-10 flex flex-wrap justify-center gap-6 text-sm text-inglu-text-secondary">
                    { for content::CTA_NOTES.iter().map(|note| html! { <span key={*note}>{ *note }</span> }) }
                </div>
            </Reveal>
        </Section>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <ThreePillars />
            <MvpFeatures />
            <HowItWorks />
            <MarketStats />
            <Testimonials />
            <CtaSection />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_expanded;

    #[test]
    fn one_pillar_open_at_a_time() {
        assert_eq!(toggle_expanded(None, 1), Some(1));
        assert_eq!(toggle_expanded(Some(1), 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 2), None);
    }
}
