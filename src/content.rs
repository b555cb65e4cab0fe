//! Static copy for the landing and persona pages.

use crate::components::accent::AccentColor;
use crate::components::icon::Icon;
use crate::config;

/// Where a call to action leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaTarget {
    /// Section on the current page, scrolled to below the fixed header.
    Anchor(&'static str),
    Url(&'static str),
    /// Contact mail, optionally with a prefilled subject.
    Mail(Option<&'static str>),
    Phone,
}

impl CtaTarget {
    pub fn href(self) -> String {
        match self {
            CtaTarget::Anchor(id) => format!("#{}", id),
            CtaTarget::Url(url) => url.to_string(),
            CtaTarget::Mail(Some(subject)) => config::mailto(subject),
            CtaTarget::Mail(None) => format!("mailto:{}", config::CONTACT_EMAIL),
            CtaTarget::Phone => format!("tel:{}", CONTACT_PHONE.replace(' ', "")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub target: CtaTarget,
}

pub const CONTACT_PHONE: &str = "+91 7827808413";
pub const ADDRESS: &str = "82, SatyaNiketan, First Floor, New Delhi - 110021";
pub const TAGLINE: &str = "The Fastest Growing Global Youth Community";
pub const JOIN_LABEL: &str = "Join – ₹49/mo";

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "How It Works", anchor: "how-it-works" },
    NavLink { label: "Membership", anchor: "membership" },
    NavLink { label: "Events", anchor: "events" },
    NavLink { label: "About", anchor: "about" },
];

/// A counted figure such as `5,000+ Students Connected`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub accent: AccentColor,
}

const fn stat(number: &'static str, label: &'static str, icon: Icon, accent: AccentColor) -> Stat {
    Stat { number, label, icon, accent }
}

pub const TRUST_STATS: &[Stat] = &[
    stat("5,000+", "Learners", Icon::AcademicCap, AccentColor::Blue),
    stat("100+", "Events", Icon::Calendar, AccentColor::Purple),
    stat("50+", "Partners", Icon::Building, AccentColor::Orange),
];

pub const PARTNER_BRANDS: &[&str] = &["Delhi University", "Amity", "VIT", "SRM", "BITS"];

pub mod hero {
    pub const BADGE: &str = "E3 Ecosystem";
    pub const HEADLINE: &str = "The Fastest Growing";
    pub const HEADLINE_ACCENT: &str = "Global Youth Community";
    pub const SUBHEADLINE: &str = "Experience holistic growth through our E3 Model: Education + Enhancement + Entertainment. Join 5,000+ students already building their future.";
    pub const CTA_PRIMARY: &str = "Start Your Journey";
    pub const CTA_SECONDARY: &str = "See How It Works";
    pub const QUESTION: &str = "What are you looking for?";
}

pub struct Pillar {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: Icon,
    pub accent: AccentColor,
}

pub const PILLARS_TITLE: &str = "The E3 Model";
pub const PILLARS_SUBTITLE: &str = "Experience = Education + Enhancement + Entertainment";
pub const PILLARS_EXPLAINER: &str = "Tap each pillar to discover how INGLU creates complete growth for students.";

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Education",
        tagline: "Learn from the best",
        description: "Premium courses, certified workshops, and skill development programs designed for the modern youth.",
        features: &[
            "Premium certified courses",
            "Industry expert workshops",
            "CUET preparation resources",
            "Skill development programs",
        ],
        icon: Icon::AcademicCap,
        accent: AccentColor::Blue,
    },
    Pillar {
        title: "Enhancement",
        tagline: "Build real-world experience",
        description: "Internships, earning opportunities, and networking that actually builds your career.",
        features: &[
            "First internship program",
            "Earning opportunities",
            "Unconventional internships",
            "Portfolio building",
        ],
        icon: Icon::Briefcase,
        accent: AccentColor::Orange,
    },
    Pillar {
        title: "Entertainment",
        tagline: "Connect & have fun",
        description: "Exclusive events, meetups, and experiences that create memories and connections.",
        features: &[
            "Exclusive parties & events",
            "Meetups and get-togethers",
            "Discounts at cafes & clubs",
            "Chance to meet celebs",
        ],
        icon: Icon::Sparkles,
        accent: AccentColor::Purple,
    },
];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: AccentColor,
}

pub const MEMBERSHIP_TITLE: &str = "INGLU Membership";
pub const MEMBERSHIP_SUBTITLE: &str = "Join the Biggest Youth Army. Premium experiences at student-friendly prices.";

pub const MVP_FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Briefcase,
        title: "First Internship",
        description: "Get your first real-world internship with partner companies.",
        accent: AccentColor::Orange,
    },
    Feature {
        icon: Icon::AcademicCap,
        title: "Premium Workshops",
        description: "Exclusive skill sessions led by industry experts.",
        accent: AccentColor::Blue,
    },
    Feature {
        icon: Icon::Ticket,
        title: "Free Event Passes",
        description: "Access to exclusive parties and networking events.",
        accent: AccentColor::Purple,
    },
    Feature {
        icon: Icon::CurrencyRupee,
        title: "Earning Opportunities",
        description: "Flexible ways to earn while you learn.",
        accent: AccentColor::Orange,
    },
    Feature {
        icon: Icon::UserGroup,
        title: "Networking",
        description: "Build your professional network with peers.",
        accent: AccentColor::Blue,
    },
    Feature {
        icon: Icon::Tag,
        title: "Brand Discounts",
        description: "Special prices at cafes, clubs, and brands.",
        accent: AccentColor::Purple,
    },
];

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub badge: Option<&'static str>,
    pub featured: bool,
}

pub const PLANS: &[Plan] = &[
    Plan { name: "Monthly", price: "₹49", period: "/mo", badge: None, featured: false },
    Plan { name: "Quarterly", price: "₹149", period: "/3mo", badge: Some("Save 33%"), featured: true },
    Plan { name: "Annual", price: "₹499", period: "/yr", badge: Some("Best Value"), featured: false },
];

pub struct Step {
    pub number: u8,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: AccentColor,
}

pub const HOW_IT_WORKS_TITLE: &str = "Get Started in 3 Steps";
pub const HOW_IT_WORKS_SUBTITLE: &str = "From signup to success in minutes";

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        icon: Icon::Phone,
        title: "Join INGLU",
        description: "Sign up for membership in less than 2 minutes. Start your growth journey today.",
        accent: AccentColor::Blue,
    },
    Step {
        number: 2,
        icon: Icon::Target,
        title: "Choose Your Path",
        description: "Select what interests you: Education, Enhancement, or Entertainment. Or all three!",
        accent: AccentColor::Orange,
    },
    Step {
        number: 3,
        icon: Icon::Rocket,
        title: "Start Growing",
        description: "Access internships, workshops, events, and exclusive community benefits instantly.",
        accent: AccentColor::Purple,
    },
];

pub const COMMUNITY_STATS: &[Stat] = &[
    stat("5,000+", "Students Connected", Icon::UserGroup, AccentColor::Cyan),
    stat("100+", "Events Organized", Icon::Calendar, AccentColor::Cyan),
    stat("50+", "Brand Partners", Icon::Building, AccentColor::Cyan),
    stat("15+", "Cities Reached", Icon::Globe, AccentColor::Cyan),
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS_TITLE: &str = "Loved by 5,000+ Students";
pub const TESTIMONIALS_SUBTITLE: &str = "See what our community has to say";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "INGLU helped me get my first internship when no one else would give me a chance. The community support is amazing!",
        author: "Priya Sharma",
        role: "Student, Delhi University",
        rating: 5,
    },
    Testimonial {
        quote: "The networking events are incredible. I've made connections that have genuinely helped my career.",
        author: "Rahul Verma",
        role: "Marketing Intern, Tech Startup",
        rating: 5,
    },
    Testimonial {
        quote: "For just ₹49/month, the value is unbelievable. Premium workshops, free events, and real opportunities.",
        author: "Ananya Singh",
        role: "BBA Student, Amity University",
        rating: 5,
    },
];

pub const CTA_TITLE: &str = "Ready to Join the Movement?";
pub const CTA_SUBTITLE: &str = "Choose your path and start experiencing Education, Enhancement & Entertainment";
pub const CTA_NOTES: &[&str] = &["Free to explore", "Cancel anytime", "Join 5,000+ students"];

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, path: &'static str) -> FooterLink {
    FooterLink { label, href: path }
}

pub const QUICK_LINKS: &[FooterLink] = &[
    link("Home", "/"),
    link("About Us", "https://ingluglobal.in/about"),
    link("Membership", config::MEMBERSHIP_URL),
    link("Careers", "https://ingluglobal.in/careers"),
    link("Shop", "https://ingluglobal.in/shop"),
    link("Blog", "https://ingluglobal.in/blog"),
];

pub const SUPPORT_LINKS: &[FooterLink] = &[
    link("Contact Us", "https://ingluglobal.in/contact"),
    link("FAQ", "https://ingluglobal.in/faq"),
    link("Support", "https://ingluglobal.in/support"),
    link("Privacy Policy", "https://ingluglobal.in/privacy"),
    link("Terms & Conditions", "https://ingluglobal.in/terms"),
];

pub const SOCIAL_LINKS: &[(FooterLink, Icon)] = &[
    (link("Instagram", "https://www.instagram.com/inglu_global/"), Icon::Instagram),
    (link("LinkedIn", "https://in.linkedin.com/company/inglu"), Icon::LinkedIn),
    (link("YouTube", "https://www.youtube.com/c/INGLUGLOBAL"), Icon::YouTube),
    (link("Facebook", "https://www.facebook.com/ingluglobal/"), Icon::Facebook),
];

/// Audience with its own landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persona {
    Student,
    Brand,
    Organizer,
}

/// Card shown on a persona page; `highlight` is an optional corner badge.
pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: Option<&'static str>,
}

pub struct Offering {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub cta: Option<Cta>,
}

pub struct Offerings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Offering],
}

pub struct Story {
    pub quote: &'static str,
    pub author: &'static str,
    pub college: &'static str,
    pub role: &'static str,
}

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct PersonaContent {
    pub document_title: &'static str,
    pub badge: &'static str,
    pub badge_icon: Icon,
    pub accent: AccentColor,
    pub headline_lead: &'static str,
    pub headline_accent: &'static str,
    pub headline_tail: &'static str,
    pub intro: &'static str,
    pub primary: Cta,
    pub secondary: Cta,
    pub stats: &'static [Stat],
    /// Id of the benefits section, the target of `secondary`.
    pub benefits_anchor: &'static str,
    pub benefits_title: &'static str,
    pub benefits_subtitle: &'static str,
    pub benefits: &'static [Benefit],
    pub offerings: Option<Offerings>,
    pub stories: &'static [Story],
    pub partners: &'static [&'static str],
    pub process: &'static [ProcessStep],
    pub closing_title: &'static str,
    pub closing_text: &'static str,
    pub closing_primary: Cta,
    pub closing_secondary: Cta,
}

/// Hero routing card for a persona.
pub struct PersonaPath {
    pub persona: Persona,
    pub title: &'static str,
    pub tagline: &'static str,
    pub icon: Icon,
    pub accent: AccentColor,
}

pub const PERSONA_PATHS: &[PersonaPath] = &[
    PersonaPath {
        persona: Persona::Student,
        title: "I'm a Student",
        tagline: "Internships, skills & events",
        icon: Icon::Student,
        accent: AccentColor::Blue,
    },
    PersonaPath {
        persona: Persona::Brand,
        title: "I'm a Brand",
        tagline: "Reach youth, sponsor events",
        icon: Icon::Brand,
        accent: AccentColor::Orange,
    },
    PersonaPath {
        persona: Persona::Organizer,
        title: "I'm an Organizer",
        tagline: "Volunteers & production",
        icon: Icon::Organizer,
        accent: AccentColor::Purple,
    },
];

const BRAND_SUBJECT: &str = "Brand Partnership Inquiry";
const ORGANIZER_SUBJECT: &str = "Event Organizer Partnership";

static STUDENT: PersonaContent = PersonaContent {
    document_title: "INGLU for Students",
    badge: "For Students",
    badge_icon: Icon::Student,
    accent: AccentColor::Blue,
    headline_lead: "Kickstart Your Career with",
    headline_accent: "Real Opportunities",
    headline_tail: "",
    intro: "Join 5,000+ students who are building their careers through internships, skill development, and exclusive networking opportunities with INGLU.",
    primary: Cta { label: "Become a Member", target: CtaTarget::Url(config::MEMBERSHIP_URL) },
    secondary: Cta { label: "See All Benefits", target: CtaTarget::Anchor("benefits") },
    stats: &[
        stat("5,000+", "Students", Icon::UserGroup, AccentColor::Blue),
        stat("500+", "Internships Placed", Icon::Briefcase, AccentColor::Blue),
        stat("100+", "Partner Companies", Icon::Building, AccentColor::Blue),
        stat("50+", "Premium Workshops", Icon::AcademicCap, AccentColor::Blue),
    ],
    benefits_anchor: "benefits",
    benefits_title: "What You Get as a Member",
    benefits_subtitle: "Everything you need to build skills, gain experience, and launch your career.",
    benefits: &[
        Benefit {
            icon: Icon::Briefcase,
            title: "First Internship Program",
            description: "Get real-world experience with our partner companies. Perfect for freshers.",
            highlight: Some("Most Popular"),
        },
        Benefit {
            icon: Icon::AcademicCap,
            title: "Premium Workshops",
            description: "Skill development sessions led by industry experts and successful entrepreneurs.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Ticket,
            title: "Free Event Passes",
            description: "Access exclusive networking events, parties, and cultural festivals.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Certificate,
            title: "Certified Courses",
            description: "Industry-recognized certifications to boost your resume.",
            highlight: None,
        },
        Benefit {
            icon: Icon::CurrencyRupee,
            title: "Earning Opportunities",
            description: "Part-time gigs and projects that fit your schedule.",
            highlight: Some("New"),
        },
        Benefit {
            icon: Icon::UserGroup,
            title: "Peer Networking",
            description: "Connect with 5,000+ students across top colleges in India.",
            highlight: None,
        },
    ],
    offerings: None,
    stories: &[
        Story {
            quote: "INGLU helped me land my first internship at a top startup. The community support is unmatched!",
            author: "Priya Sharma",
            college: "Delhi University",
            role: "Marketing Intern",
        },
        Story {
            quote: "The workshops are incredible. I learned more in 2 months than a whole semester in college.",
            author: "Rahul Verma",
            college: "Amity University",
            role: "Product Intern",
        },
    ],
    partners: &[],
    process: &[],
    closing_title: "Ready to Start Your Journey?",
    closing_text: "Join thousands of students who are already building their future with INGLU. Affordable membership, unlimited opportunities.",
    closing_primary: Cta { label: "Get Membership", target: CtaTarget::Url(config::MEMBERSHIP_URL) },
    closing_secondary: Cta { label: "Learn More", target: CtaTarget::Url(config::SITE_URL) },
};

static BRAND: PersonaContent = PersonaContent {
    document_title: "INGLU for Brands",
    badge: "For Brands & Companies",
    badge_icon: Icon::Brand,
    accent: AccentColor::Orange,
    headline_lead: "Connect with India's",
    headline_accent: "Largest Youth Community",
    headline_tail: "",
    intro: "Partner with INGLU to reach 5,000+ engaged college students. Sponsor events, recruit talent, and build authentic connections with Gen-Z.",
    primary: Cta { label: "Partner With Us", target: CtaTarget::Mail(Some(BRAND_SUBJECT)) },
    secondary: Cta { label: "View Benefits", target: CtaTarget::Anchor("benefits") },
    stats: &[
        stat("5,000+", "Active Students", Icon::UserGroup, AccentColor::Orange),
        stat("50+", "Partner Brands", Icon::Building, AccentColor::Orange),
        stat("100+", "Events/Year", Icon::Calendar, AccentColor::Orange),
        stat("15+", "Cities Covered", Icon::Globe, AccentColor::Orange),
    ],
    benefits_anchor: "benefits",
    benefits_title: "Why Brands Choose INGLU",
    benefits_subtitle: "Access, authenticity, and engagement with the youth demographic.",
    benefits: &[
        Benefit {
            icon: Icon::UserGroup,
            title: "Access 5,000+ Youth",
            description: "Connect directly with engaged college students across top universities in India.",
            highlight: Some("High Reach"),
        },
        Benefit {
            icon: Icon::Target,
            title: "Targeted Campaigns",
            description: "Launch marketing campaigns tailored to the Gen-Z and millennial audience.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Calendar,
            title: "Event Sponsorships",
            description: "Sponsor exclusive college events, festivals, and community gatherings.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Briefcase,
            title: "Talent Pipeline",
            description: "Access pre-vetted student talent for internships and entry-level positions.",
            highlight: Some("Popular"),
        },
        Benefit {
            icon: Icon::Globe,
            title: "Brand Visibility",
            description: "Get featured across our digital platforms and physical events.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Handshake,
            title: "Campus Ambassadors",
            description: "Build a network of brand ambassadors across 50+ college campuses.",
            highlight: None,
        },
    ],
    offerings: Some(Offerings {
        title: "Ways to Partner",
        subtitle: "Choose the partnership model that fits your goals.",
        items: &[
            Offering {
                icon: Icon::Sparkles,
                title: "Event Sponsor",
                description: "Sponsor college festivals, hackathons, and exclusive INGLU events.",
                cta: Some(Cta { label: "Become a Sponsor", target: CtaTarget::Mail(None) }),
            },
            Offering {
                icon: Icon::Briefcase,
                title: "Hiring Partner",
                description: "Access our talent pool for internships and campus recruitment.",
                cta: Some(Cta { label: "Start Hiring", target: CtaTarget::Mail(None) }),
            },
            Offering {
                icon: Icon::Target,
                title: "Marketing Partner",
                description: "Run targeted campaigns and brand activations with our community.",
                cta: Some(Cta { label: "Launch Campaign", target: CtaTarget::Mail(None) }),
            },
        ],
    }),
    stories: &[],
    partners: &["Delhi University", "Amity", "VIT", "SRM", "BITS", "Manipal"],
    process: &[],
    closing_title: "Let's Build Something Together",
    closing_text: "Whether you want to sponsor events, recruit talent, or run marketing campaigns, we're here to help you connect with India's youth.",
    closing_primary: Cta { label: "Get in Touch", target: CtaTarget::Mail(Some(BRAND_SUBJECT)) },
    closing_secondary: Cta { label: "Call Us Now", target: CtaTarget::Phone },
};

static ORGANIZER: PersonaContent = PersonaContent {
    document_title: "INGLU for Event Organizers",
    badge: "For Event Organizers",
    badge_icon: Icon::Organizer,
    accent: AccentColor::Purple,
    headline_lead: "Create",
    headline_accent: "Unforgettable Events",
    headline_tail: "with INGLU",
    intro: "From volunteers to production, sponsorships to marketing, we provide everything you need to make your events spectacular.",
    primary: Cta { label: "Start Planning", target: CtaTarget::Mail(Some(ORGANIZER_SUBJECT)) },
    secondary: Cta { label: "Our Services", target: CtaTarget::Anchor("services") },
    stats: &[
        stat("100+", "Events Organized", Icon::Calendar, AccentColor::Purple),
        stat("5,000+", "Volunteers", Icon::UserGroup, AccentColor::Purple),
        stat("50+", "Brand Sponsors", Icon::Building, AccentColor::Purple),
        stat("15+", "Cities", Icon::Globe, AccentColor::Purple),
    ],
    benefits_anchor: "services",
    benefits_title: "What We Offer",
    benefits_subtitle: "Complete event support from planning to execution.",
    benefits: &[
        Benefit {
            icon: Icon::UserGroup,
            title: "Volunteer Network",
            description: "Access trained volunteers for your events from our pool of 5,000+ students.",
            highlight: Some("Popular"),
        },
        Benefit {
            icon: Icon::Sparkles,
            title: "Production Support",
            description: "Professional event production assistance including AV, staging, and logistics.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Building,
            title: "Brand Connections",
            description: "Connect with sponsor brands looking to support college events.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Target,
            title: "Marketing Support",
            description: "Promote your event across our network for maximum reach.",
            highlight: None,
        },
        Benefit {
            icon: Icon::Certificate,
            title: "Event Management",
            description: "End-to-end event planning and execution support.",
            highlight: Some("Full Service"),
        },
        Benefit {
            icon: Icon::Globe,
            title: "Multi-City Reach",
            description: "Organize events across 15+ cities with local community support.",
            highlight: None,
        },
    ],
    offerings: Some(Offerings {
        title: "Events We Support",
        subtitle: "From intimate gatherings to large-scale festivals.",
        items: &[
            Offering {
                icon: Icon::Sparkles,
                title: "College Festivals",
                description: "Annual fests, cultural nights, and tech fests with full production support.",
                cta: None,
            },
            Offering {
                icon: Icon::Building,
                title: "Corporate Events",
                description: "Product launches, campus drives, and brand activations.",
                cta: None,
            },
            Offering {
                icon: Icon::UserGroup,
                title: "Community Meetups",
                description: "Networking events, workshops, and social gatherings.",
                cta: None,
            },
        ],
    }),
    stories: &[],
    partners: &[],
    process: &[
        ProcessStep {
            title: "Tell Us About Your Event",
            description: "Share your vision, date, and requirements.",
        },
        ProcessStep {
            title: "Get a Custom Plan",
            description: "We create a tailored support package for your event.",
        },
        ProcessStep {
            title: "Execute & Celebrate",
            description: "Our team handles logistics while you focus on your guests.",
        },
    ],
    closing_title: "Ready to Plan Your Next Event?",
    closing_text: "Let's make it memorable. Get in touch and tell us about your vision.",
    closing_primary: Cta { label: "Plan Your Event", target: CtaTarget::Mail(Some(ORGANIZER_SUBJECT)) },
    closing_secondary: Cta { label: "Call: +91 7827808413", target: CtaTarget::Phone },
};

impl Persona {
    pub fn content(self) -> &'static PersonaContent {
        match self {
            Persona::Student => &STUDENT,
            Persona::Brand => &BRAND,
            Persona::Organizer => &ORGANIZER,
        }
    }
}

/// Up to two uppercase initials, one per word.
pub fn get_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::counter::CounterSpec;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(get_initials("Priya Sharma"), "PS");
        assert_eq!(get_initials("ananya singh rao"), "AS");
        assert_eq!(get_initials("Cher"), "C");
        assert_eq!(get_initials(""), "");
        assert_eq!(get_initials("  Rahul  Verma"), "RV");
    }

    #[test]
    fn cta_targets_build_hrefs() {
        assert_eq!(CtaTarget::Anchor("benefits").href(), "#benefits");
        assert_eq!(CtaTarget::Phone.href(), "tel:+917827808413");
        assert_eq!(CtaTarget::Mail(None).href(), "mailto:info@ingluglobal.in");
        assert_eq!(
            CtaTarget::Mail(Some("Event Organizer Partnership")).href(),
            "mailto:info@ingluglobal.in?subject=Event%20Organizer%20Partnership"
        );
    }

    #[test]
    fn every_stat_counts_up_to_a_number() {
        let personas = [Persona::Student, Persona::Brand, Persona::Organizer];
        let all = TRUST_STATS
            .iter()
            .chain(COMMUNITY_STATS)
            .chain(personas.iter().flat_map(|persona| persona.content().stats));
        for stat in all {
            let spec = CounterSpec::parse(stat.number);
            assert!(spec.target() > 0.0, "{} has no number", stat.number);
            assert_eq!(spec.suffix(), "+");
        }
    }

    #[test]
    fn secondary_cta_points_at_benefits_section() {
        for persona in [Persona::Student, Persona::Brand, Persona::Organizer] {
            let content = persona.content();
            assert_eq!(content.secondary.target, CtaTarget::Anchor(content.benefits_anchor));
        }
    }

    #[test]
    fn every_persona_has_a_routing_card() {
        for persona in [Persona::Student, Persona::Brand, Persona::Organizer] {
            assert!(PERSONA_PATHS.iter().any(|path| path.persona == persona));
        }
    }
}
