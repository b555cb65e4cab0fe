use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    AcademicCap,
    ArrowRight,
    Brand,
    Briefcase,
    Building,
    Calendar,
    Certificate,
    ChevronDown,
    ChevronRight,
    Close,
    CurrencyRupee,
    Facebook,
    Globe,
    Handshake,
    Instagram,
    LinkedIn,
    Mail,
    Organizer,
    Phone,
    Play,
    Rocket,
    Sparkles,
    Star,
    Student,
    Tag,
    Target,
    Ticket,
    UserGroup,
    YouTube,
}

impl Icon {
    pub fn class_name(self) -> &'static str {
        match self {
            Icon::AcademicCap => "icon-academic-cap",
            Icon::ArrowRight => "icon-arrow-right",
            Icon::Brand => "icon-brand",
            Icon::Briefcase => "icon-briefcase",
            Icon::Building => "icon-building",
            Icon::Calendar => "icon-calendar",
            Icon::Certificate => "icon-certificate",
            Icon::ChevronDown => "icon-chevron-down",
            Icon::ChevronRight => "icon-chevron-right",
            Icon::Close => "icon-close",
            Icon::CurrencyRupee => "icon-currency-rupee",
            Icon::Facebook => "icon-facebook",
            Icon::Globe => "icon-globe",
            Icon::Handshake => "icon-handshake",
            Icon::Instagram => "icon-instagram",
            Icon::LinkedIn => "icon-linkedin",
            Icon::Mail => "icon-mail",
            Icon::Organizer => "icon-organizer",
            Icon::Phone => "icon-phone",
            Icon::Play => "icon-play",
            Icon::Rocket => "icon-rocket",
            Icon::Sparkles => "icon-sparkles",
            Icon::Star => "icon-star",
            Icon::Student => "icon-student",
            Icon::Tag => "icon-tag",
            Icon::Target => "icon-target",
            Icon::Ticket => "icon-ticket",
            Icon::UserGroup => "icon-user-group",
            Icon::YouTube => "icon-youtube",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative glyph; the stylesheet maps each `icon-*` class to an SVG mask.
#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <i class={classes!("icon", props.icon.class_name(), props.class.clone())} aria-hidden="true"></i>
    }
}
