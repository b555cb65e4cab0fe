use log::info;
use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::button::{ButtonSize, ButtonVariant, CtaButton};
use crate::components::cards::{FeatureCard, StepCard};
use crate::components::icon::{Icon, IconView};
use crate::components::layout::{Container, Section, SectionBackground, SectionHeader};
use crate::components::reveal::Reveal;
use crate::components::stat_card::{accent_icon_tile, StatCard};
use crate::content::{get_initials, Benefit, Persona, PersonaContent};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PersonaPageProps {
    pub persona: Persona,
}

fn hero(content: &'static PersonaContent) -> Html {
    let accent = content.accent.classes();
    html! {
        <section class="relative pt-28 pb-20 md:pt-36 md:pb-28 bg-gradient-hero overflow-hidden">
            <Container class="relative z-10">
                <Link<Route>
                    to={Route::Home}
                    classes="inline-flex items-center gap-2 text-sm text-inglu-text-secondary hover:text-inglu-light transition-colors mb-8"
                >
                    <IconView icon={Icon::ChevronRight} class="rotate-180" />
                    {"Back to Home"}
                </Link<Route>>
                <Reveal class="max-w-3xl">
                    <div class={classes!("inline-flex", "items-center", "gap-2", "px-4", "py-2", "rounded-full", "mb-6", accent.soft, accent.text)}>
                        <IconView icon={content.badge_icon} />
                        <span class="text-sm font-semibold">{ content.badge }</span>
                    </div>
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-inglu-light leading-tight mb-6">
                        { content.headline_lead }{" "}
                        <span class={accent.text}>{ content.headline_accent }</span>
                        if !content.headline_tail.is_empty() {
                            {" "}{ content.headline_tail }
                        }
                    </h1>
                    <p class="text-lg md:text-xl text-inglu-text-secondary leading-relaxed mb-10">{ content.intro }</p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <CtaButton cta={content.primary} icon={Icon::ArrowRight} icon_right=true />
                        <CtaButton
                            cta={content.secondary}
                            variant={ButtonVariant::Ghost}
                            class="text-inglu-light border border-white/20 hover:bg-white/5"
                        />
                    </div>
                </Reveal>
            </Container>
        </section>
    }
}

fn benefit_card(benefit: &Benefit, content: &PersonaContent, index: usize) -> Html {
    html! {
        <Reveal key={benefit.title} index={index as u32} class="relative">
            if let Some(highlight) = benefit.highlight {
                <span class={classes!(
                    "absolute", "-top-3", "right-4", "z-10", "px-3", "py-1", "text-xs",
                    "font-semibold", "rounded-full", "text-white", content.accent.classes().bg
                )}>
                    { highlight }
                </span>
            }
            <FeatureCard
                icon={benefit.icon}
                title={benefit.title}
                description={benefit.description}
                accent={content.accent}
            />
        </Reveal>
    }
}

fn stories(content: &'static PersonaContent) -> Html {
    if content.stories.is_empty() {
        return html! {};
    }
    let accent = content.accent.classes();
    html! {
        <Section background={SectionBackground::Slate}>
            <Reveal>
                <SectionHeader
                    title="Success Stories"
                    subtitle="Hear from students who transformed their careers with INGLU"
                />
            </Reveal>
            <div class="grid md:grid-cols-3 gap-6">
                { for content.stories.iter().enumerate().map(|(index, story)| html! {
                    <Reveal key={story.author} index={index as u32} class="p-6 rounded-2xl bg-white/5 border border-white/10">
                        <p class="text-inglu-light/90 italic leading-relaxed mb-6">{ format!("\"{}\"", story.quote) }</p>
                        <div class="flex items-center gap-3">
                            <div class={classes!("w-12", "h-12", "rounded-full", "flex", "items-center", "justify-center", "font-bold", "text-white", accent.bg)}>
                                { get_initials(story.author) }
                            </div>
                            <div>
                                <p class="font-semibold text-inglu-light">{ story.author }</p>
                                <p class="text-sm text-inglu-text-secondary">{ format!("{} • {}", story.role, story.college) }</p>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </Section>
    }
}

fn partners(content: &'static PersonaContent) -> Html {
    if content.partners.is_empty() {
        return html! {};
    }
    html! {
        <Section background={SectionBackground::Slate}>
            <Reveal>
                <SectionHeader title="Trusted by Leading Brands" />
            </Reveal>
            <Reveal class="flex flex-wrap justify-center gap-4 md:gap-6">
                { for content.partners.iter().map(|partner| html! {
                    <div key={*partner} class="px-6 py-4 rounded-xl bg-white/5 border border-white/10 text-inglu-light/80 font-semibold">
                        { *partner }
                    </div>
                }) }
            </Reveal>
        </Section>
    }
}

fn process(content: &'static PersonaContent) -> Html {
    if content.process.is_empty() {
        return html! {};
    }
    let last = content.process.len() - 1;
    html! {
        <Section background={SectionBackground::Slate}>
            <Reveal>
                <SectionHeader title="How It Works" />
            </Reveal>
            <div class={classes!("grid", "gap-12", "md:grid-cols-2", "lg:grid-cols-4")}>
                { for content.process.iter().enumerate().map(|(index, step)| html! {
                    <StepCard
                        key={step.title}
                        number={(index + 1) as u8}
                        icon={content.badge_icon}
                        title={step.title}
                        description={step.description}
                        accent={content.accent}
                        index={index as u32}
                        is_last={index == last}
                    />
                }) }
            </div>
        </Section>
    }
}

fn offerings(content: &'static PersonaContent) -> Html {
    let Some(offerings) = &content.offerings else {
        return html! {};
    };
    html! {
        <Section background={SectionBackground::Dark}>
            <Reveal>
                <SectionHeader title={offerings.title} subtitle={offerings.subtitle} />
            </Reveal>
            <div class="grid md:grid-cols-2 gap-6">
                { for offerings.items.iter().enumerate().map(|(index, offering)| html! {
                    <Reveal key={offering.title} index={index as u32} class="p-8 rounded-2xl bg-white/5 border border-white/10 flex flex-col">
                        <div class="mb-6">{ accent_icon_tile(offering.icon, content.accent) }</div>
                        <h3 class="text-xl font-bold text-inglu-light mb-3">{ offering.title }</h3>
                        <p class="text-inglu-text-secondary leading-relaxed mb-6 flex-1">{ offering.description }</p>
                        if let Some(cta) = offering.cta {
                            <CtaButton
                                {cta}
                                variant={ButtonVariant::Secondary}
                                size={ButtonSize::Sm}
                                icon={Icon::ArrowRight}
                                icon_right=true
                                class="self-start"
                            />
                        }
                    </Reveal>
                }) }
            </div>
        </Section>
    }
}

fn closing(content: &'static PersonaContent) -> Html {
    html! {
        <Section background={SectionBackground::Gradient}>
            <Reveal threshold={0.2} class="text-center max-w-3xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-inglu-light mb-6">{ content.closing_title }</h2>
                <p class="text-lg text-inglu-text-secondary mb-10">{ content.closing_text }</p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <CtaButton cta={content.closing_primary} icon={Icon::ArrowRight} icon_right=true />
                    <CtaButton
                        cta={content.closing_secondary}
                        variant={ButtonVariant::Ghost}
                        icon={Icon::Phone}
                        class="text-inglu-light border border-white/20 hover:bg-white/5"
                    />
                </div>
            </Reveal>
        </Section>
    }
}

/// Landing page for one audience, driven entirely by its [`PersonaContent`].
#[function_component(PersonaPage)]
pub fn persona_page(props: &PersonaPageProps) -> Html {
    let content = props.persona.content();
    use_title(content.document_title.to_string());

    {
        let persona = props.persona;
        use_effect_with_deps(
            move |persona| {
                info!("Showing {:?} page", persona);
                || ()
            },
            persona,
        );
    }

    html! {
        <>
            { hero(content) }

            <Section background={SectionBackground::Dark} class="border-y border-white/5">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                    { for content.stats.iter().enumerate().map(|(index, stat)| html! {
                        <StatCard key={stat.label} stat={*stat} index={index as u32} />
                    }) }
                </div>
            </Section>

            { offerings(content) }

            <Section id={content.benefits_anchor}>
                <Reveal>
                    <SectionHeader title={content.benefits_title} subtitle={content.benefits_subtitle} />
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for content.benefits.iter().enumerate().map(|(index, benefit)| benefit_card(benefit, content, index)) }
                </div>
            </Section>

            { stories(content) }
            { partners(content) }
            { process(content) }
            { closing(content) }
        </>
    }
}
