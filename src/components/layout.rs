use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("mx-auto", "px-5", "md:px-10", "xl:px-20", "max-w-[1440px]", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionBackground {
    #[default]
    Light,
    Dark,
    Slate,
    Gradient,
}

impl SectionBackground {
    pub fn class(self) -> &'static str {
        match self {
            SectionBackground::Light => "bg-white",
            SectionBackground::Dark => "bg-inglu-dark",
            SectionBackground::Slate => "bg-inglu-slate",
            SectionBackground::Gradient => "bg-gradient-to-br from-inglu-dark via-inglu-slate to-inglu-dark",
        }
    }

    /// Text colour that stays readable on this background.
    pub fn text_class(self) -> &'static str {
        match self {
            SectionBackground::Light => "text-inglu-dark",
            _ => "text-inglu-light",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionPadding {
    #[default]
    Lg,
    Xl,
}

impl SectionPadding {
    fn class(self) -> &'static str {
        match self {
            SectionPadding::Lg => "py-20 md:py-24 xl:py-32",
            SectionPadding::Xl => "py-24 md:py-32 xl:py-40",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub background: SectionBackground,
    #[prop_or_default]
    pub padding: SectionPadding,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!(
                "relative",
                "overflow-hidden",
                props.background.class(),
                props.padding.class(),
                props.background.text_class(),
                props.class.clone()
            )}
        >
            <Container>
                { for props.children.iter() }
            </Container>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="text-center max-w-3xl mx-auto mb-12">
            if let Some(badge) = &props.badge {
                <span class="inline-block px-4 py-1.5 mb-4 rounded-full text-sm font-medium bg-white/10 border border-white/10">
                    { badge.clone() }
                </span>
            }
            <h2 class="text-3xl md:text-4xl lg:text-h2 font-bold mb-4">{ props.title.clone() }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="text-inglu-text-secondary text-body-lg">{ subtitle.clone() }</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_backgrounds_use_light_text() {
        for background in [
            SectionBackground::Dark,
            SectionBackground::Slate,
            SectionBackground::Gradient,
        ] {
            assert_eq!(background.text_class(), "text-inglu-light");
        }
        assert_eq!(SectionBackground::Light.text_class(), "text-inglu-dark");
    }
}
