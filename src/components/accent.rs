/// Brand accent a card, button or stat is drawn in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccentColor {
    #[default]
    Blue,
    Orange,
    Purple,
    Cyan,
}

/// Utility classes for one accent, resolved once per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentClasses {
    pub text: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub hover: &'static str,
    /// Tinted background for icon tiles.
    pub soft: &'static str,
}

impl AccentColor {
    #[cfg(test)]
    pub const ALL: [AccentColor; 4] = [
        AccentColor::Blue,
        AccentColor::Orange,
        AccentColor::Purple,
        AccentColor::Cyan,
    ];

    pub fn classes(self) -> AccentClasses {
        match self {
            AccentColor::Blue => AccentClasses {
                text: "text-inglu-blue",
                bg: "bg-inglu-blue",
                border: "border-inglu-blue",
                shadow: "shadow-glow-blue",
                hover: "hover:bg-blue-700",
                soft: "bg-inglu-blue/10",
            },
            AccentColor::Orange => AccentClasses {
                text: "text-inglu-orange",
                bg: "bg-inglu-orange",
                border: "border-inglu-orange",
                shadow: "shadow-glow-orange",
                hover: "hover:bg-orange-600",
                soft: "bg-inglu-orange/10",
            },
            AccentColor::Purple => AccentClasses {
                text: "text-inglu-purple",
                bg: "bg-inglu-purple",
                border: "border-inglu-purple",
                shadow: "shadow-glow-purple",
                hover: "hover:bg-purple-600",
                soft: "bg-inglu-purple/10",
            },
            AccentColor::Cyan => AccentClasses {
                text: "text-inglu-accent",
                bg: "bg-inglu-accent",
                border: "border-inglu-accent",
                shadow: "shadow-glow-cyan",
                hover: "hover:bg-cyan-500",
                soft: "bg-inglu-accent/10",
            },
        }
    }

    /// Light panel colour used behind an expanded pillar.
    pub fn panel(self) -> &'static str {
        match self {
            AccentColor::Blue => "bg-[#EFF6FF]",
            AccentColor::Orange => "bg-[#FFF7ED]",
            AccentColor::Purple => "bg-[#FAF5FF]",
            AccentColor::Cyan => "bg-sky-50",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_accent_resolves_to_its_own_classes() {
        let resolved: Vec<_> = AccentColor::ALL.iter().map(|accent| accent.classes()).collect();
        for (i, a) in resolved.iter().enumerate() {
            for b in &resolved[i + 1..] {
                assert_ne!(a.text, b.text);
                assert_ne!(a.shadow, b.shadow);
            }
        }
        assert_eq!(AccentColor::default().classes().bg, "bg-inglu-blue");
        assert_eq!(AccentColor::Cyan.classes().text, "text-inglu-accent");
    }
}
