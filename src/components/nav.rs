use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icon::{Icon, IconView};
use crate::components::layout::Container;
use crate::config;
use crate::content::{NavLink, JOIN_LABEL, NAV_LINKS};
use crate::hooks::anchor::scroll_to_element;
use crate::hooks::use_breakpoint::{use_breakpoint, Breakpoint};
use crate::hooks::use_mobile_menu::use_mobile_menu;
use crate::hooks::use_scroll_position::use_scroll_position;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HamburgerMenuProps {
    pub is_open: bool,
    pub onclick: Callback<MouseEvent>,
    /// Focus returns here when the menu closes.
    pub node_ref: NodeRef,
    #[prop_or(AttrValue::Static("Toggle navigation menu"))]
    pub aria_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(HamburgerMenu)]
pub fn hamburger_menu(props: &HamburgerMenuProps) -> Html {
    let line = "absolute h-0.5 w-6 bg-current rounded-full transition-all duration-300 ease-out";
    let (top, middle, bottom) = if props.is_open {
        ("rotate-45 translate-y-0", "opacity-0 scale-0", "-rotate-45 translate-y-0")
    } else {
        ("-translate-y-2", "opacity-100 scale-100", "translate-y-2")
    };

    html! {
        <button
            type="button"
            ref={props.node_ref.clone()}
            onclick={props.onclick.clone()}
            class={classes!(
                "relative", "w-10", "h-10", "flex", "items-center", "justify-center", "rounded-lg",
                "transition-colors", "duration-200", "hover:bg-white/10",
                "focus:outline-none", "focus:ring-2", "focus:ring-inglu-accent",
                props.class.clone()
            )}
            aria-label={props.aria_label.clone()}
            aria-expanded={props.is_open.to_string()}
            aria-controls="mobile-menu"
        >
            <div class="relative w-6 h-5 flex flex-col justify-center items-center">
                <span class={classes!(line, top)} aria-hidden="true"></span>
                <span class={classes!(line, middle)} aria-hidden="true"></span>
                <span class={classes!(line, bottom)} aria-hidden="true"></span>
            </div>
        </button>
    }
}

fn logo(size: &'static str, text: &'static str) -> Html {
    html! {
        <Link<Route> to={Route::Home} classes="flex items-center gap-2 text-inglu-light group">
            <div class={classes!(size, "rounded-xl", "bg-gradient-to-br", "from-inglu-blue", "via-inglu-purple", "to-inglu-orange", "flex", "items-center", "justify-center")}>
                <span class="text-white font-bold">{"I"}</span>
            </div>
            <span class={classes!(text, "font-bold", "tracking-tight")}>{"INGLU"}</span>
        </Link<Route>>
    }
}

/// Fixed header: transparent over the hero, solid once the page scrolls,
/// with a slide-in panel on narrow screens.
#[function_component(Navigation)]
pub fn navigation() -> Html {
    let scroll = use_scroll_position(config::NAV_SCROLL_THRESHOLD);
    let menu = use_mobile_menu();
    let breakpoint = use_breakpoint();
    let navigator = use_navigator();

    // The panel is hidden from the tablet layout up, so an open menu would
    // otherwise keep the page locked.
    {
        let close = menu.close.clone();
        use_effect_with_deps(
            move |(wide, open)| {
                if *wide && *open {
                    debug!("Viewport widened, closing mobile menu");
                    close.emit(());
                }
                || ()
            },
            (breakpoint >= Breakpoint::Tablet, menu.is_open),
        );
    }

    let nav_click = |link: &'static NavLink| {
        let close = menu.close.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !scroll_to_element(link.anchor, config::HEADER_OFFSET) {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            close.emit(());
        })
    };
    let toggle = menu.toggle.reform(|_: MouseEvent| ());
    let close = menu.close.reform(|_: MouseEvent| ());
    let is_open = menu.is_open;

    html! {
        <>
            <header class={classes!(
                "fixed", "top-0", "left-0", "right-0", "z-50", "transition-all", "duration-300", "ease-out",
                if scroll.past_threshold { "bg-inglu-dark/95 backdrop-blur-nav shadow-nav" } else { "bg-transparent" }
            )}>
                <Container>
                    <nav class="flex items-center justify-between h-16 md:h-20" aria-label="Main navigation">
                        { logo("w-10 h-10", "text-xl") }
                        <div class="hidden md:flex items-center gap-8">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.anchor}
                                    href={format!("#{}", link.anchor)}
                                    onclick={nav_click(link)}
                                    class="text-body-sm font-medium text-inglu-text-secondary transition-colors duration-200 hover:text-inglu-light"
                                >
                                    { link.label }
                                </a>
                            }) }
                        </div>
                        <div class="hidden md:flex items-center gap-4">
                            <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} href={config::SIGN_IN_URL} class="text-inglu-light">
                                {"Sign In"}
                            </Button>
                            <Button size={ButtonSize::Sm} href={config::MEMBERSHIP_URL}>
                                { JOIN_LABEL }
                            </Button>
                        </div>
                        <div class="md:hidden">
                            <HamburgerMenu
                                is_open={is_open}
                                onclick={toggle}
                                node_ref={menu.trigger_ref.clone()}
                                class="text-inglu-light"
                            />
                        </div>
                    </nav>
                </Container>
            </header>

            <div
                class={classes!(
                    "fixed", "inset-0", "z-40", "md:hidden", "transition-opacity", "duration-300",
                    if is_open { "opacity-100 pointer-events-auto" } else { "opacity-0 pointer-events-none" }
                )}
                aria-hidden={(!is_open).to_string()}
            >
                <div class="absolute inset-0 bg-black/60 backdrop-blur-sm" onclick={close.clone()}></div>
                <div
                    ref={menu.panel_ref.clone()}
                    id="mobile-menu"
                    class={classes!(
                        "absolute", "top-0", "left-0", "bottom-0", "w-[280px]", "bg-inglu-dark",
                        "border-r", "border-white/10", "transform", "transition-transform", "duration-300", "ease-out",
                        if is_open { "translate-x-0" } else { "-translate-x-full" }
                    )}
                    role="dialog"
                    aria-modal="true"
                    aria-label="Mobile navigation menu"
                >
                    <div class="flex items-center justify-between p-5 border-b border-white/10">
                        { logo("w-8 h-8", "text-lg") }
                        <button
                            type="button"
                            onclick={close}
                            class="w-8 h-8 flex items-center justify-center rounded-lg text-inglu-text-secondary hover:text-inglu-light hover:bg-white/10 transition-colors"
                            aria-label="Close menu"
                        >
                            <IconView icon={Icon::Close} />
                        </button>
                    </div>
                    <nav class="p-5 space-y-2">
                        { for NAV_LINKS.iter().enumerate().map(|(index, link)| html! {
                            <a
                                key={link.anchor}
                                href={format!("#{}", link.anchor)}
                                onclick={nav_click(link)}
                                class="block px-4 py-3 rounded-lg text-body font-medium text-inglu-text-secondary hover:text-inglu-light hover:bg-white/10 transition-all duration-200 animate-slide-in-left"
                                style={format!("animation-delay: {}ms", index * 50)}
                            >
                                { link.label }
                            </a>
                        }) }
                    </nav>
                    <div class="absolute bottom-0 left-0 right-0 p-5 space-y-3 border-t border-white/10">
                        <Button variant={ButtonVariant::Tertiary} full_width=true href={config::SIGN_IN_URL} class="text-inglu-light border-inglu-light/50 hover:bg-white/10">
                            {"Sign In"}
                        </Button>
                        <Button full_width=true href={config::MEMBERSHIP_URL}>
                            { JOIN_LABEL }
                        </Button>
                    </div>
                </div>
            </div>
        </>
    }
}
