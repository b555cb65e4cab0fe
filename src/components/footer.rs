use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::layout::Container;
use crate::config;
use crate::content::{CtaTarget, FooterLink, ADDRESS, CONTACT_PHONE, QUICK_LINKS, SOCIAL_LINKS, SUPPORT_LINKS, TAGLINE};

fn link_column(title: &'static str, links: &'static [FooterLink]) -> Html {
    html! {
        <div>
            <h4 class="text-inglu-light font-semibold mb-4">{ title }</h4>
            <ul class="space-y-2">
                { for links.iter().map(|link| html! {
                    <li key={link.label}>
                        <a href={link.href} class="text-inglu-text-secondary hover:text-inglu-light transition-colors text-sm">
                            { link.label }
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="bg-inglu-dark border-t border-white/10 pt-16 pb-8">
            <Container>
                <div class="grid gap-10 md:grid-cols-2 lg:grid-cols-4 mb-12">
                    <div>
                        <div class="flex items-center gap-2 mb-4">
                            <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-inglu-blue via-inglu-purple to-inglu-orange flex items-center justify-center">
                                <span class="text-white font-bold text-xl">{"I"}</span>
                            </div>
                            <span class="text-xl font-bold text-inglu-light">{"INGLU"}</span>
                        </div>
                        <p class="text-inglu-text-secondary text-sm mb-6">{ TAGLINE }</p>
                        <div class="flex gap-3">
                            { for SOCIAL_LINKS.iter().map(|(link, icon)| html! {
                                <a
                                    key={link.label}
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.label}
                                    class="w-10 h-10 rounded-lg bg-white/5 flex items-center justify-center text-inglu-text-secondary hover:text-inglu-light hover:bg-white/10 transition-colors"
                                >
                                    <IconView icon={*icon} />
                                </a>
                            }) }
                        </div>
                    </div>
                    { link_column("Quick Links", QUICK_LINKS) }
                    { link_column("Support", SUPPORT_LINKS) }
                    <div>
                        <h4 class="text-inglu-light font-semibold mb-4">{"Contact"}</h4>
                        <ul class="space-y-3 text-sm text-inglu-text-secondary">
                            <li>{ ADDRESS }</li>
                            <li class="flex items-center gap-2">
                                <IconView icon={Icon::Mail} />
                                <a href={CtaTarget::Mail(None).href()} class="hover:text-inglu-light">{ config::CONTACT_EMAIL }</a>
                            </li>
                            <li class="flex items-center gap-2">
                                <IconView icon={Icon::Phone} />
                                <a href={CtaTarget::Phone.href()} class="hover:text-inglu-light">{ CONTACT_PHONE }</a>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="pt-8 border-t border-white/10 text-center text-sm text-inglu-text-secondary">
                    { format!("© {} INGLU Global. All rights reserved.", year) }
                </div>
            </Container>
        </footer>
    }
}
